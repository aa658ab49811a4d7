//! Scrollable landing page.
//!
//! The page is flattened into pre-wrapped lines so the renderer knows the
//! exact row of every section and focus target before drawing.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use crate::context::{Palette, UiContext};
use crate::landing::{self, Project, ProjectStatus, Step};
use crate::tui::app::{LANDING_TARGETS, LandingState, LandingTarget};
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::tui::widgets::text::wrap_text;

const H_PADDING: u16 = 2;

/// Flattened page content
pub struct LandingPage {
    pub lines: Vec<Line<'static>>,
    pub projects_anchor: u16,
    /// Row of each entry of `LANDING_TARGETS`
    pub target_rows: Vec<u16>,
}

struct PageBuilder<'c> {
    ctx: &'c UiContext,
    palette: Palette,
    width: usize,
    focused: LandingTarget,
    lines: Vec<Line<'static>>,
    target_rows: Vec<(LandingTarget, u16)>,
}

impl<'c> PageBuilder<'c> {
    fn row(&self) -> u16 {
        self.lines.len() as u16
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn text(&mut self, text: &str, style: Style, indent: usize) {
        let pad = " ".repeat(indent);
        for piece in wrap_text(text, self.width.saturating_sub(indent).max(1)) {
            self.lines.push(Line::from(Span::styled(format!("{}{}", pad, piece), style)));
        }
    }

    fn t(&self, key: &'static str) -> &'static str {
        self.ctx.t(key)
    }

    fn heading(&mut self, title_key: &'static str, subtitle_key: &'static str) {
        let palette = self.palette;
        self.blank();
        self.text(
            self.t(title_key),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            0,
        );
        self.text(self.t(subtitle_key), Style::default().fg(palette.muted), 0);
        self.blank();
    }

    fn button_style(&self, target: LandingTarget, accent: Color) -> Style {
        if target == self.focused {
            Style::default()
                .fg(get_contrast_text_color(accent))
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        }
    }

    fn button(&self, target: LandingTarget, label: &str, accent: Color) -> Span<'static> {
        Span::styled(format!("[ {} ]", label), self.button_style(target, accent))
    }

    fn mark(&mut self, target: LandingTarget) {
        let row = self.row();
        self.target_rows.push((target, row));
    }

    fn steps(&mut self, steps: &[Step]) {
        let palette = self.palette;
        for step in steps {
            let color = parse_color(step.color);
            self.lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", step.number),
                    Style::default()
                        .fg(get_contrast_text_color(color))
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}", self.t(step.title_key)),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                ),
            ]));
            self.text(self.t(step.desc_key), Style::default().fg(palette.muted), 4);
            self.blank();
        }
    }

    fn hero(&mut self) {
        let palette = self.palette;
        self.blank();
        self.lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", self.t("landing.brand.hero.title")),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.t("landing.brand.hero.titleAccent"),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ),
        ]));
        self.blank();
        self.text(self.t("landing.brand.hero.subtitle"), Style::default().fg(palette.fg), 0);
        self.blank();

        self.mark(LandingTarget::ExploreProjects);
        self.mark(LandingTarget::TryDemo);
        let explore = self.button(
            LandingTarget::ExploreProjects,
            self.t("landing.brand.hero.cta"),
            palette.primary,
        );
        let demo = self.button(LandingTarget::TryDemo, self.t("landing.brand.hero.demo"), palette.secondary);
        self.lines.push(Line::from(vec![explore, Span::raw("  "), demo]));
        self.blank();

        let mut stats = Vec::new();
        for (i, &(value, label_key)) in landing::STATS.iter().enumerate() {
            if i > 0 {
                stats.push(Span::styled("  ·  ", Style::default().fg(palette.border)));
            }
            stats.push(Span::styled(
                value.to_string(),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ));
            stats.push(Span::styled(format!(" {}", self.t(label_key)), Style::default().fg(palette.muted)));
        }
        self.lines.push(Line::from(stats));
    }

    fn project_card(&mut self, index: usize, project: &Project) {
        let palette = self.palette;
        let accent = parse_color(project.primary);
        let status = match project.status {
            ProjectStatus::Active => self.t("landing.projects.active"),
            ProjectStatus::ComingSoon => self.t("landing.projects.modal.comingSoon"),
        };
        self.lines.push(Line::from(vec![
            Span::styled("▍", Style::default().fg(accent)),
            Span::styled(
                self.t(project.name_key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · ", self.t(project.category_key)),
                Style::default().fg(palette.muted),
            ),
            Span::styled(status, Style::default().fg(parse_color(project.secondary))),
        ]));
        self.text(self.t(project.short_key), Style::default().fg(palette.fg), 2);

        let metrics = project
            .metrics
            .iter()
            .map(|m| format!("{}: {}", self.t(m.label_key), m.value))
            .collect::<Vec<_>>()
            .join("   ");
        self.text(&metrics, Style::default().fg(palette.muted), 2);

        let target = LandingTarget::Project(index);
        self.mark(target);
        let button = self.button(
            target,
            &format!("{} →", self.t("landing.projects.viewDetails")),
            accent,
        );
        self.lines.push(Line::from(vec![Span::raw("  "), button]));
        self.blank();
    }

    fn testimonials(&mut self) {
        let palette = self.palette;
        for testimonial in landing::TESTIMONIALS.iter() {
            self.lines.push(Line::from(Span::styled(
                "★".repeat(testimonial.rating as usize),
                Style::default().fg(palette.warning),
            )));
            self.text(
                &format!("“{}”", self.t(testimonial.text_key)),
                Style::default().fg(palette.fg).add_modifier(Modifier::ITALIC),
                0,
            );
            self.text(
                &format!("{}, {}", self.t(testimonial.name_key), self.t(testimonial.role_key)),
                Style::default().fg(palette.muted),
                2,
            );
        }
    }

    fn cta_cards(&mut self) {
        let palette = self.palette;
        for (index, &(title_key, desc_key, button_key, _)) in landing::CTA_CARDS.iter().enumerate() {
            self.text(
                self.t(title_key),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                0,
            );
            self.text(self.t(desc_key), Style::default().fg(palette.muted), 2);
            let target = LandingTarget::Cta(index);
            self.mark(target);
            let button = self.button(target, self.t(button_key), palette.primary);
            self.lines.push(Line::from(vec![Span::raw("  "), button]));
            self.blank();
        }
    }

    fn footer(&mut self) {
        let palette = self.palette;
        self.lines.push(Line::from(Span::styled(
            "─".repeat(self.width),
            Style::default().fg(palette.border),
        )));
        self.text(self.t("landing.footer.tagline"), Style::default().fg(palette.muted), 0);
        for &(heading_key, link_keys) in landing::FOOTER_COLUMNS.iter() {
            let links = link_keys.iter().map(|&k| self.t(k)).collect::<Vec<_>>().join(" · ");
            self.text(
                &format!("{}: {}", self.t(heading_key), links),
                Style::default().fg(palette.muted),
                0,
            );
        }
        self.text(
            &format!("© 2025 Saturway. {}", self.t("landing.footer.rights")),
            Style::default().fg(palette.muted),
            0,
        );
    }
}

/// Lay out the whole page for a content `width`
pub fn build_landing_page(ctx: &UiContext, landing: &LandingState, width: usize) -> LandingPage {
    let mut page = PageBuilder {
        ctx,
        palette: ctx.palette(),
        width: width.max(1),
        focused: landing.focused(),
        lines: Vec::new(),
        target_rows: Vec::new(),
    };

    page.hero();

    let projects_anchor = page.row();
    page.heading("landing.projects.title", "landing.projects.subtitle");
    for (index, project) in landing.projects.iter().enumerate() {
        page.project_card(index, project);
    }

    page.heading("landing.howItWorks.title", "landing.howItWorks.subtitle");
    page.steps(&landing::HOW_IT_WORKS);

    page.heading("landing.thailand.title", "landing.thailand.subtitle");
    page.steps(&landing::THAILAND_STEPS);

    page.heading("landing.whySaturway.title", "landing.whySaturway.subtitle");
    let palette = page.palette;
    for key in landing::BENEFITS {
        let benefit = page.t(key);
        page.text(&format!("✓ {}", benefit), Style::default().fg(palette.secondary), 0);
    }

    page.heading("landing.testimonials.title", "landing.testimonials.subtitle");
    page.testimonials();

    page.heading("landing.cta.title", "landing.cta.subtitle");
    page.cta_cards();

    page.footer();

    let target_rows = LANDING_TARGETS
        .iter()
        .map(|target| {
            page.target_rows
                .iter()
                .find(|(t, _)| t == target)
                .map_or(0, |(_, row)| *row)
        })
        .collect();

    LandingPage {
        lines: page.lines,
        projects_anchor,
        target_rows,
    }
}

/// Draw the page and record its geometry back into `landing`
pub fn render_landing(f: &mut Frame, area: Rect, landing: &mut LandingState, ctx: &UiContext) {
    let palette = ctx.palette();
    let width = area.width.saturating_sub(H_PADDING * 2) as usize;
    let page = build_landing_page(ctx, landing, width);

    landing.projects_anchor = page.projects_anchor;
    landing.content_height = page.lines.len() as u16;
    landing.viewport_height = area.height;
    landing.target_rows = page.target_rows;

    if landing.reveal_focus {
        landing.reveal_focus = false;
        if let Some(&row) = landing.target_rows.get(landing.focus) {
            if row < landing.scroll {
                landing.scroll = row;
            } else if row >= landing.scroll + area.height {
                landing.scroll = row + 1 - area.height;
            }
        }
    }
    landing.scroll = landing.scroll.min(landing.max_scroll());

    let paragraph = Paragraph::new(page.lines)
        .block(
            Block::default()
                .padding(Padding::horizontal(H_PADDING))
                .style(Style::default().bg(palette.bg)),
        )
        .scroll((landing.scroll, 0));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ThemeMode;
    use crate::i18n::Language;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn anchor_points_at_projects_heading() {
        let ctx = UiContext::new(Language::En, ThemeMode::Dark);
        let page = build_landing_page(&ctx, &LandingState::default(), 60);
        let heading = line_text(&page.lines[page.projects_anchor as usize + 1]);
        assert_eq!(heading, ctx.t("landing.projects.title"));
    }

    #[test]
    fn every_target_has_a_row_in_order() {
        let ctx = UiContext::new(Language::Ru, ThemeMode::Light);
        let page = build_landing_page(&ctx, &LandingState::default(), 50);
        assert_eq!(page.target_rows.len(), LANDING_TARGETS.len());
        assert!(page.target_rows.windows(2).all(|w| w[0] <= w[1]));
        let cta_row = page.target_rows[4] as usize;
        assert!(line_text(&page.lines[cta_row]).contains(ctx.t("landing.cta.aiOrganizerBtn")));
    }

    #[test]
    fn lines_fit_content_width() {
        let ctx = UiContext::new(Language::Ru, ThemeMode::Dark);
        let page = build_landing_page(&ctx, &LandingState::default(), 40);
        for line in &page.lines {
            let text = line_text(line);
            let is_button_row = text.contains('[');
            let is_single_span_text = line.spans.len() == 1;
            if is_single_span_text && !is_button_row {
                assert!(text.chars().count() <= 40, "{text}");
            }
        }
    }
}
