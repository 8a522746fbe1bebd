//! Static page content.
//!
//! Everything here is fixed at compile time and shared by the server
//! renderer and the hydrated client, so both sides agree on every string.

pub mod career;
pub mod profile;
pub mod projects;
pub mod skills;

/// A headline number with a caption, as used in the summary strips.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl Stat {
    pub const fn new(value: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { value, label, icon }
    }
}

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Projects,
    About,
    Skills,
    Experience,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Self::Home,
        Self::Projects,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Contact,
    ];

    /// Element id of the section on the home page.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "fas fa-home",
            Self::Projects | Self::Experience => "fas fa-briefcase",
            Self::About => "fas fa-user",
            Self::Skills => "fas fa-cogs",
            Self::Education => "fas fa-graduation-cap",
            Self::Contact => "fas fa-envelope",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_section_ids_unique() {
        let ids: HashSet<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
        assert_eq!(Section::Skills.href(), "#skills");
    }
}
