use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;
use ratatui::Frame;

use crate::context::UiContext;
use crate::tui::app::MainView;
use crate::tui::widgets::color::get_contrast_text_color;

/// Bottom navigation of the organizer's main screen
pub fn render_bottom_nav(f: &mut Frame, area: Rect, current: MainView, ctx: &UiContext) {
    let palette = ctx.palette();
    let tab_bg = palette.card;
    let tab_fg = get_contrast_text_color(tab_bg);

    // Padded spans give each tab a box look
    let titles: Vec<Line> = MainView::ALL
        .iter()
        .map(|view| {
            Line::from(vec![
                Span::styled("  ", Style::default().bg(tab_bg)),
                Span::styled(ctx.t(view.label_key()), Style::default().fg(tab_fg).bg(tab_bg)),
                Span::styled("  ", Style::default().bg(tab_bg)),
            ])
        })
        .collect();

    let highlight_fg = get_contrast_text_color(palette.primary);
    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(Style::default().fg(palette.fg).bg(palette.bg))
        .highlight_style(
            Style::default()
                .fg(highlight_fg)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )
        .divider("  ")
        .padding("", "");

    f.render_widget(tabs, area);
}
