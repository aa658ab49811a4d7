use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::context::UiContext;
use crate::tui::widgets::color::get_contrast_text_color;

const BANNER_HEIGHT: u16 = 8;

/// Area the banner takes at the bottom of `area`
pub fn banner_area(area: Rect) -> Rect {
    let height = BANNER_HEIGHT.min(area.height);
    let [_, banner] = Layout::vertical([Constraint::Fill(1), Constraint::Length(height)]).areas(area);
    banner
}

pub fn render_cookie_banner(f: &mut Frame, area: Rect, ctx: &UiContext) {
    let palette = ctx.palette();
    let banner = banner_area(area);
    f.render_widget(Clear, banner);

    let button_fg = get_contrast_text_color(palette.primary);
    let lines = vec![
        Line::from(Span::styled(
            format!("🍪 {}", ctx.t("cookie.title")),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(ctx.t("cookie.description"), Style::default().fg(palette.fg))),
        Line::from(Span::styled(ctx.t("cookie.privacy"), Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" [a] {} ", ctx.t("cookie.accept")),
                Style::default().fg(button_fg).bg(palette.primary).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" [d] {} ", ctx.t("cookie.decline")),
                Style::default().fg(palette.fg).bg(palette.border),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.primary))
                .style(Style::default().bg(palette.card)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, banner);
}
