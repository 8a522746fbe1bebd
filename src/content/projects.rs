use crate::catalog::{Categorized, CategoryTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Saas,
    Iot,
    Sports,
}

impl CategoryTag for ProjectCategory {
    const VARIANTS: &'static [Self] = &[Self::Saas, Self::Iot, Self::Sports];

    fn tag(self) -> &'static str {
        match self {
            Self::Saas => "saas",
            Self::Iot => "iot",
            Self::Sports => "sports",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Saas => "SaaS Platforms",
            Self::Iot => "IoT Solutions",
            Self::Sports => "Sports Analytics",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Saas => "fas fa-cloud",
            Self::Iot => "fas fa-microchip",
            Self::Sports => "fas fa-trophy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Completed => "Completed",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Live => "fas fa-globe",
            Self::Completed => "fas fa-check-circle",
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    /// `None` for work without a public deployment.
    pub link: Option<&'static str>,
    pub status: ProjectStatus,
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "InboxDoctor.ai",
        description: "A human‑powered email deliverability platform that improves inbox placement, monitors sender reputation and optimizes email performance with AI‑driven warm‑ups and analytics.",
        image: "/assets/inboxdoctor.png",
        technologies: &[
            "React",
            "Node.js",
            "Nest.js",
            "GO",
            "MongoDB",
            "AWS",
            "Stripe",
            "Redis",
            "TailwindCSS",
            "Tanstack Query",
        ],
        category: ProjectCategory::Saas,
        link: Some("https://inboxdoctor.ai"),
        status: ProjectStatus::Live,
    },
    Project {
        id: 2,
        title: "ZenInbox",
        description: "A SaaS email productivity platform enabling workflow automation, real‑time notifications and secure cloud infrastructure.",
        image: "/assets/zeninbox.png",
        technologies: &[
            "Next.js",
            "Node.js",
            "AWS",
            "PostgreSQL",
            "WebSockets",
            "Stripe",
            "Redis",
            "TailwindCSS",
            "Tanstack Query",
        ],
        category: ProjectCategory::Saas,
        link: Some("https://zeninbox.ai"),
        status: ProjectStatus::Live,
    },
    Project {
        id: 3,
        title: "Energy Management System",
        description: "An IoT‑based solution for monitoring energy consumption, integrating backend APIs with smart devices and delivering intuitive dashboards.",
        image: "/assets/energy.png",
        technologies: &["Next.js", "Express.js", "WebSockets", "MongoDB", "TailwindCSS"],
        category: ProjectCategory::Iot,
        link: None,
        status: ProjectStatus::Completed,
    },
    Project {
        id: 4,
        title: "Cricket Addictor",
        description: "Enhanced UI/UX and integrated APIs for a sports analytics platform, providing seamless administration and real‑time cricket insights.",
        image: "/assets/cricket.png",
        technologies: &[
            "Next.js",
            "Express.js",
            "MySQL",
            "API Integration",
            "TailwindCSS",
        ],
        category: ProjectCategory::Sports,
        link: Some("https://cricketaddictor.com"),
        status: ProjectStatus::Completed,
    },
];

#[derive(Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Hex color for the icon.
    pub color: &'static str,
}

pub static SERVICES: [Service; 3] = [
    Service {
        title: "Email Deliverability Solutions",
        description: "Advanced email automation systems with deliverability monitoring and reputation management.",
        icon: "💌",
        color: "#3B82F6",
    },
    Service {
        title: "E‑commerce Platform Architecture",
        description: "Scalable real‑time shopping applications with product management and user authentication.",
        icon: "🛒",
        color: "#10B981",
    },
    Service {
        title: "Data‑Driven Analytics",
        description: "Custom dashboards and real‑time analytics pipelines to visualise critical metrics and gain actionable insights.",
        icon: "📊",
        color: "#8B5CF6",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::{CatalogFilter, Selection};

    #[test]
    fn test_project_ids_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_every_category_has_projects() {
        let filter = CatalogFilter::new(&PROJECTS);
        for category in ProjectCategory::VARIANTS {
            assert!(filter.count(Selection::Only(*category)) > 0, "{category:?}");
        }
    }

    #[test]
    fn test_saas_filter() {
        let mut filter = CatalogFilter::new(&PROJECTS);
        filter.set_category("saas");
        let titles: Vec<&str> = filter.visible_items().map(|p| p.title).collect();
        assert_eq!(titles, vec!["InboxDoctor.ai", "ZenInbox"]);
    }
}
