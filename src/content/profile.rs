use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use super::{Section, Stat};

pub const NAME: &str = "Sparsh Arora";
pub const SHORT_NAME: &str = "Sparsh";
pub const ROLE: &str = "Full‑Stack Developer";
pub const TAGLINE: &str = "Transforming ideas into exceptional digital experiences.";
pub const DESCRIPTION: &str = "Portfolio of Sparsh Arora, full‑stack developer specialized in React, Next.js, Node.js and PostgreSQL.";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1tf2ay1gwmWUxdoCVNFECCFGdRL_qZs-t/view?usp=sharing";
pub const EMAIL: &str = "arorasparsh28@gmail.com";
pub const PHONE: &str = "+91 8433014744";
pub const LOCATION: &str = "Saharanpur, India";

pub static ABOUT_STATS: [Stat; 3] = [
    Stat::new("3+", "Years of Experience", "fas fa-clock"),
    Stat::new("4", "Major Projects", "fas fa-project-diagram"),
    Stat::new("2", "Professional Certifications", "fas fa-certificate"),
];

pub static HIGHLIGHTS: [&str; 4] = [
    "Full-stack development with modern technologies",
    "SaaS platform architecture and deployment",
    "IoT integration and real-time systems",
    "Cloud infrastructure and DevOps practices",
];

#[derive(Debug)]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    /// `None` when the value isn't actionable.
    pub href: Option<&'static str>,
    pub icon: &'static str,
}

pub static CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        label: "Email",
        value: EMAIL,
        href: Some("mailto:arorasparsh28@gmail.com"),
        icon: "fas fa-envelope",
    },
    ContactMethod {
        label: "Phone",
        value: PHONE,
        href: Some("tel:+918433014744"),
        icon: "fas fa-phone",
    },
    ContactMethod {
        label: "Location",
        value: LOCATION,
        href: None,
        icon: "fas fa-map-marker-alt",
    },
];

#[derive(Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/sparsh-arora-8880b8241/",
        icon: "fab fa-linkedin",
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/sparsharora15",
        icon: "fab fa-github",
    },
    SocialLink {
        name: "Twitter",
        url: "#",
        icon: "fab fa-twitter",
    },
    SocialLink {
        name: "Email",
        url: "mailto:arorasparsh28@gmail.com",
        icon: "fas fa-envelope",
    },
];

pub static FOOTER_LINKS: [Section; 6] = [
    Section::Home,
    Section::Projects,
    Section::About,
    Section::Skills,
    Section::Experience,
    Section::Contact,
];

pub static FOOTER_SERVICES: [(&str, &str); 6] = [
    ("Full-Stack Development", "fas fa-code"),
    ("SaaS Platform Architecture", "fas fa-cloud"),
    ("IoT Solutions", "fas fa-microchip"),
    ("Database Design", "fas fa-database"),
    ("Cloud Infrastructure", "fab fa-aws"),
    ("API Development", "fas fa-cogs"),
];

pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Copyright year, taken from the build timestamp so the server render and
/// the hydrated client always agree.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

/// schema.org `Person` description embedded as JSON-LD in the page head.
#[derive(Debug, Serialize)]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
    email: String,
    telephone: &'static str,
    address: &'static str,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'static str>,
}

impl PersonSchema {
    pub fn new() -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: NAME,
            job_title: ROLE,
            email: format!("mailto:{EMAIL}"),
            telephone: PHONE,
            address: LOCATION,
            same_as: SOCIAL_LINKS
                .iter()
                .map(|s| s.url)
                .filter(|url| url.starts_with("https://"))
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for PersonSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_schema() {
        let json = PersonSchema::new().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], NAME);
        assert_eq!(value["email"], "mailto:arorasparsh28@gmail.com");
        // placeholder links are left out
        let same_as = value["sameAs"].as_array().unwrap();
        assert_eq!(same_as.len(), 2);
        assert!(same_as.iter().all(|v| v.as_str().unwrap().starts_with("https://")));
    }

    #[test]
    fn test_copyright_year_from_build_time() {
        let built = DateTime::parse_from_rfc3339(BUILD_TIME).unwrap();
        assert_eq!(copyright_year(), built.year());
    }

    #[test]
    fn test_footer_links_skip_education() {
        assert!(!FOOTER_LINKS.contains(&Section::Education));
        assert_eq!(FOOTER_LINKS.len(), Section::ALL.len() - 1);
    }
}
