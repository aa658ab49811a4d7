use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

use crate::context::{Palette, UiContext};
use crate::landing::{Project, ProjectStatus};
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::tui::widgets::popup::{bottom_sheet_area, popup_area};
use crate::tui::widgets::text::wrap_text;

/// Below this width the detail opens as a bottom sheet instead of a modal
pub const SHEET_BREAKPOINT: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailShell {
    Modal,
    Sheet,
}

impl DetailShell {
    pub fn for_width(width: u16) -> Self {
        if width < SHEET_BREAKPOINT {
            DetailShell::Sheet
        } else {
            DetailShell::Modal
        }
    }

    pub fn area(self, area: Rect) -> Rect {
        match self {
            DetailShell::Modal => popup_area(area, 70, 80),
            DetailShell::Sheet => bottom_sheet_area(area, 85),
        }
    }
}

const REVENUE_SECTIONS: [(&str, &[(&str, &str)]); 2] = [
    (
        "landing.projects.modal.revenueStrategy.foundation",
        &[
            (
                "landing.projects.modal.revenueStrategy.foundation.gcc.title",
                "landing.projects.modal.revenueStrategy.foundation.gcc.description",
            ),
            (
                "landing.projects.modal.revenueStrategy.foundation.china.title",
                "landing.projects.modal.revenueStrategy.foundation.china.description",
            ),
            (
                "landing.projects.modal.revenueStrategy.foundation.europe.title",
                "landing.projects.modal.revenueStrategy.foundation.europe.description",
            ),
        ],
    ),
    (
        "landing.projects.modal.revenueStrategy.growth",
        &[
            (
                "landing.projects.modal.revenueStrategy.growth.music.title",
                "landing.projects.modal.revenueStrategy.growth.music.description",
            ),
            (
                "landing.projects.modal.revenueStrategy.growth.sports.title",
                "landing.projects.modal.revenueStrategy.growth.sports.description",
            ),
            (
                "landing.projects.modal.revenueStrategy.growth.effect.title",
                "landing.projects.modal.revenueStrategy.growth.effect.description",
            ),
        ],
    ),
];

fn wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, indent: usize, style: Style) {
    let pad = " ".repeat(indent);
    for piece in wrap_text(text, width.saturating_sub(indent).max(1)) {
        lines.push(Line::from(Span::styled(format!("{}{}", pad, piece), style)));
    }
}

fn section_title(lines: &mut Vec<Line<'static>>, text: &str, palette: &Palette) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )));
}

/// Detail body shared by both shells
pub fn project_detail_lines(project: &Project, ctx: &UiContext, width: usize) -> Vec<Line<'static>> {
    let palette = ctx.palette();
    let accent = parse_color(project.primary);
    let mut lines = Vec::new();

    let status = match project.status {
        ProjectStatus::Active => ctx.t("landing.projects.active"),
        ProjectStatus::ComingSoon => ctx.t("landing.projects.modal.comingSoon"),
    };
    lines.push(Line::from(vec![
        Span::styled(
            ctx.t(project.category_key),
            Style::default().fg(parse_color(project.secondary)),
        ),
        Span::styled(" · ", Style::default().fg(palette.border)),
        Span::styled(status, Style::default().fg(palette.muted)),
    ]));

    section_title(&mut lines, ctx.t("landing.projects.modal.about"), &palette);
    wrapped(&mut lines, ctx.t(project.full_key), width, 0, Style::default().fg(palette.fg));

    lines.push(Line::from(""));
    for metric in &project.metrics {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", ctx.t(metric.label_key)), Style::default().fg(palette.muted)),
            Span::styled(metric.value, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        ]));
    }

    section_title(&mut lines, ctx.t("landing.projects.modal.keyFeatures"), &palette);
    for key in &project.feature_keys {
        wrapped(
            &mut lines,
            &format!("✓ {}", ctx.t(key)),
            width,
            2,
            Style::default().fg(palette.fg),
        );
    }

    if project.has_revenue_strategy() {
        section_title(
            &mut lines,
            ctx.t("landing.projects.modal.revenueStrategy.title"),
            &palette,
        );
        for (prefix, items) in REVENUE_SECTIONS {
            let title_key = format!("{}.title", prefix);
            let description_key = format!("{}.description", prefix);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                ctx.t(&title_key).to_string(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
            wrapped(&mut lines, ctx.t(&description_key), width, 0, Style::default().fg(palette.muted));
            for &(item_title, item_description) in items {
                lines.push(Line::from(Span::styled(
                    format!("  • {}", ctx.t(item_title)),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                )));
                wrapped(&mut lines, ctx.t(item_description), width, 4, Style::default().fg(palette.muted));
            }
        }
        section_title(
            &mut lines,
            ctx.t("landing.projects.modal.revenueStrategy.conclusion.title"),
            &palette,
        );
        wrapped(
            &mut lines,
            ctx.t("landing.projects.modal.revenueStrategy.conclusion.description"),
            width,
            0,
            Style::default().fg(palette.fg),
        );
    }

    lines.push(Line::from(""));
    let label = match project.cta {
        Some(cta) => format!(" ⏎ {} ", ctx.t(cta.label_key)),
        None => format!(" {} ", ctx.t("landing.projects.modal.comingSoon")),
    };
    lines.push(Line::from(Span::styled(
        label,
        Style::default()
            .fg(get_contrast_text_color(accent))
            .bg(accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

/// Draw the detail over `area` in the shell that suits its width.
/// `scroll` is clamped to the content.
pub fn render_project_detail(
    f: &mut Frame,
    area: Rect,
    project: &Project,
    scroll: &mut u16,
    ctx: &UiContext,
) {
    let palette = ctx.palette();
    let accent = parse_color(project.primary);
    let shell = DetailShell::for_width(area.width);
    let detail_area = shell.area(area);
    f.render_widget(Clear, detail_area);

    let title = Line::from(Span::styled(
        format!(" {} ", ctx.t(project.name_key)),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));
    let block = match shell {
        DetailShell::Modal => Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Esc ✕ ").right_aligned()),
        // Sheets have a grab handle instead of a close button
        DetailShell::Sheet => Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick)
            .title(title.left_aligned())
            .title(Line::from(" ━━━ ").centered()),
    };
    let block = block
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(palette.card));

    let inner = block.inner(detail_area);
    let lines = project_detail_lines(project, ctx, inner.width as usize);
    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    *scroll = (*scroll).min(max_scroll);

    f.render_widget(Paragraph::new(lines).block(block).scroll((*scroll, 0)), detail_area);
}
