use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::context::Palette;
use crate::tui::widgets::color::get_contrast_text_color;
use crate::tui::widgets::text::truncate;

const SEPARATOR: &str = " • ";
const ELLIPSIS: &str = "...";

/// Join as many hints as fit in `max_width`, ending with "..." when some are dropped
pub fn fit_key_hints(key_hints: &[String], max_width: usize) -> String {
    let separator_len = SEPARATOR.chars().count();
    let ellipsis_len = ELLIPSIS.chars().count();

    let mut hints_text = String::new();
    for (i, hint) in key_hints.iter().enumerate() {
        let hint_len = hint.chars().count();
        let current_len = hints_text.chars().count();

        let would_be_len = if i == 0 {
            hint_len
        } else {
            current_len + separator_len + hint_len
        };

        if would_be_len > max_width {
            if i == 0 {
                // Even the first hint is too long
                return truncate(hint, max_width);
            }
            if current_len + ellipsis_len <= max_width {
                hints_text.push_str(ELLIPSIS);
            } else {
                hints_text = truncate(&hints_text, max_width);
            }
            break;
        }

        if i > 0 {
            hints_text.push_str(SEPARATOR);
        }
        hints_text.push_str(hint);
    }
    hints_text
}

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    message: Option<&String>,
    key_hints: &[String],
    palette: &Palette,
) {
    let max_width = area.width as usize;
    let (content, style) = if let Some(msg) = message {
        // Status messages get a highlighted background for visibility
        let msg_fg = get_contrast_text_color(palette.primary);
        (
            truncate(msg, max_width),
            Style::default()
                .fg(msg_fg)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            fit_key_hints(key_hints, max_width),
            Style::default().fg(palette.muted).bg(palette.bg),
        )
    };

    let paragraph = Paragraph::new(content).style(style);
    f.render_widget(paragraph, area);
}
