//! Static content of the landing page.
//!
//! Text is stored as translation keys; only proper values such as metric
//! figures are literal.

use crate::config::Links;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    ComingSoon,
}

/// External destination of a call-to-action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Telegram,
    Project,
}

impl LinkTarget {
    pub fn url(self, links: &Links) -> &str {
        match self {
            LinkTarget::Telegram => &links.telegram,
            LinkTarget::Project => &links.project,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label_key: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCta {
    pub label_key: &'static str,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name_key: &'static str,
    pub category_key: &'static str,
    pub short_key: &'static str,
    pub full_key: &'static str,
    pub metrics: Vec<Metric>,
    pub feature_keys: Vec<&'static str>,
    pub status: ProjectStatus,
    pub cta: Option<ProjectCta>,
    /// Hex accent colors
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl Project {
    /// Only the car rental project carries the revenue strategy section
    pub fn has_revenue_strategy(&self) -> bool {
        self.id == "thailand-car"
    }
}

fn metric(label_key: &'static str, value: &'static str) -> Metric {
    Metric { label_key, value }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "ai-organizer",
            name_key: "landing.projects.aiOrganizer.name",
            category_key: "landing.projects.aiOrganizer.category",
            short_key: "landing.projects.aiOrganizer.shortDesc",
            full_key: "landing.projects.aiOrganizer.fullDesc",
            metrics: vec![
                metric("landing.projects.metrics.status", "MVP"),
                metric("landing.projects.metrics.stage", "Beta"),
                metric("landing.projects.metrics.platform", "Telegram"),
                metric("landing.projects.metrics.users", "Coming Soon"),
            ],
            feature_keys: vec![
                "landing.projects.aiOrganizer.feature1",
                "landing.projects.aiOrganizer.feature2",
                "landing.projects.aiOrganizer.feature3",
                "landing.projects.aiOrganizer.feature4",
                "landing.projects.aiOrganizer.feature5",
                "landing.projects.aiOrganizer.feature6",
            ],
            status: ProjectStatus::Active,
            cta: Some(ProjectCta {
                label_key: "landing.projects.modal.openTelegram",
                target: LinkTarget::Telegram,
            }),
            primary: "#4A9FD8",
            secondary: "#52C9C1",
        },
        Project {
            id: "thailand-car",
            name_key: "landing.projects.thailandCar.name",
            category_key: "landing.projects.thailandCar.category",
            short_key: "landing.projects.thailandCar.shortDesc",
            full_key: "landing.projects.thailandCar.fullDesc",
            metrics: vec![
                metric("landing.projects.metrics.location", "Pattaya"),
                metric("landing.projects.metrics.business", "Car Rental"),
                metric("landing.projects.metrics.stage", "Planning"),
                metric("landing.projects.metrics.launch", "2025"),
            ],
            feature_keys: vec![
                "landing.projects.thailandCar.feature1",
                "landing.projects.thailandCar.feature2",
                "landing.projects.thailandCar.feature3",
                "landing.projects.thailandCar.feature4",
                "landing.projects.thailandCar.feature5",
                "landing.projects.thailandCar.feature6",
            ],
            status: ProjectStatus::Active,
            cta: Some(ProjectCta {
                label_key: "landing.projects.modal.goToProject",
                target: LinkTarget::Project,
            }),
            primary: "#0D9488",
            secondary: "#14B8A6",
        },
    ]
}

/// Hero stats: (value, label key)
pub const STATS: [(&str, &str); 3] = [
    ("2", "landing.brand.stats.activeProjects"),
    ("MVP", "landing.brand.stats.stage"),
    ("2025", "landing.brand.stats.founded"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title_key: &'static str,
    pub desc_key: &'static str,
    pub color: &'static str,
}

pub const HOW_IT_WORKS: [Step; 3] = [
    Step {
        number: 1,
        title_key: "landing.howItWorks.step1.title",
        desc_key: "landing.howItWorks.step1.desc",
        color: "#4A9FD8",
    },
    Step {
        number: 2,
        title_key: "landing.howItWorks.step2.title",
        desc_key: "landing.howItWorks.step2.desc",
        color: "#52C9C1",
    },
    Step {
        number: 3,
        title_key: "landing.howItWorks.step3.title",
        desc_key: "landing.howItWorks.step3.desc",
        color: "#6366F1",
    },
];

pub const THAILAND_STEPS: [Step; 3] = [
    Step {
        number: 1,
        title_key: "landing.thailand.step1.title",
        desc_key: "landing.thailand.step1.desc",
        color: "#0D9488",
    },
    Step {
        number: 2,
        title_key: "landing.thailand.step2.title",
        desc_key: "landing.thailand.step2.desc",
        color: "#14B8A6",
    },
    Step {
        number: 3,
        title_key: "landing.thailand.step3.title",
        desc_key: "landing.thailand.step3.desc",
        color: "#FFD93D",
    },
];

pub const BENEFITS: [&str; 4] = [
    "landing.benefits.time",
    "landing.benefits.balance",
    "landing.benefits.productivity",
    "landing.benefits.privacy",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name_key: &'static str,
    pub role_key: &'static str,
    pub text_key: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 1] = [Testimonial {
    name_key: "landing.testimonials.founder.name",
    role_key: "landing.testimonials.founder.role",
    text_key: "landing.testimonials.founder.text",
    rating: 5,
}];

/// Closing call-to-action cards: (title key, description key, button key, target)
pub const CTA_CARDS: [(&str, &str, &str, LinkTarget); 2] = [
    (
        "landing.projects.aiOrganizer.name",
        "landing.cta.aiOrganizerDesc",
        "landing.cta.aiOrganizerBtn",
        LinkTarget::Telegram,
    ),
    (
        "landing.projects.thailandCar.name",
        "landing.cta.thailandCarDesc",
        "landing.cta.thailandCarBtn",
        LinkTarget::Project,
    ),
];

/// Footer columns: heading key and link label keys
pub const FOOTER_COLUMNS: [(&str, &[&str]); 3] = [
    (
        "landing.footer.product",
        &[
            "landing.footer.features",
            "landing.footer.pricing",
            "landing.footer.roadmap",
        ],
    ),
    (
        "landing.footer.company",
        &[
            "landing.footer.about",
            "landing.footer.blog",
            "landing.footer.contact",
        ],
    ),
    (
        "landing.footer.legal",
        &["landing.footer.privacy", "landing.footer.terms"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, translate};

    fn assert_translated(key: &str) {
        for language in [Language::En, Language::Ru] {
            assert_ne!(translate(language, key), key, "missing translation for {key}");
        }
    }

    #[test]
    fn every_landing_key_is_translated() {
        for project in projects() {
            for key in [project.name_key, project.category_key, project.short_key, project.full_key] {
                assert_translated(key);
            }
            project.metrics.iter().for_each(|m| assert_translated(m.label_key));
            project.feature_keys.iter().for_each(|k| assert_translated(k));
            if let Some(cta) = project.cta {
                assert_translated(cta.label_key);
            }
        }
        for step in HOW_IT_WORKS.iter().chain(THAILAND_STEPS.iter()) {
            assert_translated(step.title_key);
            assert_translated(step.desc_key);
        }
        BENEFITS.iter().for_each(|k| assert_translated(k));
        for (_, label) in STATS {
            assert_translated(label);
        }
        for (heading, links) in FOOTER_COLUMNS {
            assert_translated(heading);
            links.iter().for_each(|k| assert_translated(k));
        }
        for t in TESTIMONIALS {
            assert_translated(t.name_key);
            assert_translated(t.role_key);
            assert_translated(t.text_key);
        }
        for (title, desc, button, _) in CTA_CARDS {
            assert_translated(title);
            assert_translated(desc);
            assert_translated(button);
        }
    }

    #[test]
    fn project_ctas_resolve_to_configured_links() {
        let links = Links::default();
        let projects = projects();
        assert_eq!(projects.len(), 2);
        let organizer = &projects[0];
        assert!(!organizer.has_revenue_strategy());
        assert_eq!(
            organizer.cta.unwrap().target.url(&links),
            "https://t.me/your_bot_name"
        );
        let car = &projects[1];
        assert!(car.has_revenue_strategy());
        assert_eq!(car.cta.unwrap().target.url(&links), "https://saturway.space/");
    }
}
