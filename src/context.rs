//! Application-wide language and theme selection.
//!
//! The app owns one [`UiContext`] and hands `&UiContext` to every view; only
//! the app's setters mutate it.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::i18n::{self, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme.light",
            ThemeMode::Dark => "theme.dark",
        }
    }
}

/// Resolved colors for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub border: Color,
    pub card: Color,
    pub primary: Color,
    pub secondary: Color,
    pub warning: Color,
}

// Brand colors shared by both themes
pub const OCEAN_BLUE: Color = Color::Rgb(0x4A, 0x9F, 0xD8);
pub const OCEAN_TEAL: Color = Color::Rgb(0x52, 0xC9, 0xC1);
pub const SUN_YELLOW: Color = Color::Rgb(0xFF, 0xD9, 0x3D);

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                fg: Color::Rgb(0x0F, 0x17, 0x2A),
                bg: Color::Rgb(0xF8, 0xFA, 0xFC),
                muted: Color::Rgb(0x64, 0x74, 0x8B),
                border: Color::Rgb(0xCB, 0xD5, 0xE1),
                card: Color::Rgb(0xFF, 0xFF, 0xFF),
                primary: OCEAN_BLUE,
                secondary: OCEAN_TEAL,
                warning: SUN_YELLOW,
            },
            ThemeMode::Dark => Self {
                fg: Color::Rgb(0xE2, 0xE8, 0xF0),
                bg: Color::Rgb(0x0B, 0x12, 0x20),
                muted: Color::Rgb(0x94, 0xA3, 0xB8),
                border: Color::Rgb(0x33, 0x41, 0x55),
                card: Color::Rgb(0x11, 0x1A, 0x2E),
                primary: OCEAN_BLUE,
                secondary: OCEAN_TEAL,
                warning: SUN_YELLOW,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiContext {
    pub language: Language,
    pub theme: ThemeMode,
}

impl UiContext {
    pub fn new(language: Language, theme: ThemeMode) -> Self {
        Self { language, theme }
    }

    /// Localized string for `key` in the current language
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.language, key)
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.theme)
    }
}
