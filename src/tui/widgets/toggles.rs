use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::context::{Palette, ThemeMode, UiContext};
use crate::i18n::Language;

fn option<'a>(label: &'a str, active: bool, palette: &Palette) -> Span<'a> {
    if active {
        Span::styled(
            label,
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    } else {
        Span::styled(label, Style::default().fg(palette.muted))
    }
}

/// "EN | RU   ☀ | ☾" with the active choices highlighted
pub fn toggle_line(ctx: &UiContext) -> Line<'static> {
    let palette = ctx.palette();
    let separator = || Span::styled(" | ", Style::default().fg(palette.border));
    Line::from(vec![
        option("EN", ctx.language == Language::En, &palette),
        separator(),
        option("RU", ctx.language == Language::Ru, &palette),
        Span::raw("   "),
        option("☀", ctx.theme == ThemeMode::Light, &palette),
        separator(),
        option("☾", ctx.theme == ThemeMode::Dark, &palette),
    ])
}

/// One-line header: brand on the left, language and theme toggles on the right
pub fn render_header(f: &mut Frame, area: Rect, title: &str, ctx: &UiContext) {
    let palette = ctx.palette();
    let toggles = toggle_line(ctx);
    let toggles_width = toggles.width() as u16;
    let [brand_area, toggles_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(toggles_width)]).areas(area);

    let brand = Line::from(vec![
        Span::styled("◉ Saturway", Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", title), Style::default().fg(palette.muted)),
    ]);
    f.render_widget(Paragraph::new(brand).style(Style::default().bg(palette.bg)), brand_area);
    f.render_widget(Paragraph::new(toggles).style(Style::default().bg(palette.bg)), toggles_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_language_is_highlighted() {
        let ctx = UiContext::new(Language::Ru, ThemeMode::Dark);
        let line = toggle_line(&ctx);
        let ru = &line.spans[2];
        assert_eq!(ru.content, "RU");
        assert!(ru.style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(line.spans[6].style.add_modifier.contains(Modifier::BOLD));
    }
}
