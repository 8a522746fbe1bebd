use super::Stat;

#[derive(Debug)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub project: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub employment: &'static str,
    pub current: bool,
}

pub static ROLES: [Role; 4] = [
    Role {
        title: "Full Stack Developer",
        company: "LucidGrowth LLC",
        location: "Remote",
        duration: "2023 - Present",
        project: "InboxDoctor.ai - Email Deliverability Platform",
        description: "Leading development of a human-powered email deliverability platform that improves inbox placement and monitors sender reputation.",
        achievements: &[
            "Built scalable email automation systems with deliverability monitoring",
            "Implemented AI-driven warm-ups and analytics for email performance",
            "Developed real-time monitoring dashboards for sender reputation",
            "Optimized email delivery rates and improved client ROI",
        ],
        technologies: &["React", "Node.js", "PostgreSQL", "AWS", "SMTP/IMAP"],
        employment: "Full-time",
        current: true,
    },
    Role {
        title: "Full Stack Developer",
        company: "LucidGrowth LLC",
        location: "Remote",
        duration: "2022 - 2023",
        project: "ZenInbox - SaaS Email Productivity Platform",
        description: "Developed a comprehensive SaaS platform for email productivity with workflow automation and real-time notifications.",
        achievements: &[
            "Architected and deployed scalable cloud infrastructure",
            "Implemented real-time notification systems using WebSockets",
            "Built secure authentication and user management systems",
            "Created responsive dashboards for email workflow management",
        ],
        technologies: &["Next.js", "Node.js", "AWS", "PostgreSQL", "WebSockets"],
        employment: "Full-time",
        current: false,
    },
    Role {
        title: "IoT Developer",
        company: "E Software Solution",
        location: "Remote",
        duration: "2021 - 2022",
        project: "Smart Energy Monitoring System",
        description: "Developed an IoT-based solution for monitoring energy consumption with backend APIs and smart device integration.",
        achievements: &[
            "Integrated IoT sensors with backend APIs for real-time data collection",
            "Built intuitive dashboards for energy consumption visualization",
            "Implemented smart device communication protocols",
            "Developed predictive analytics for energy optimization",
        ],
        technologies: &["Next.js", "Express.js", "WebSockets", "MongoDB", "IoT"],
        employment: "Full-time",
        current: false,
    },
    Role {
        title: "Full Stack Developer",
        company: "Blockcod Technologies",
        location: "Remote",
        duration: "2021 - 2022",
        project: "Cricket Addictor - Sports Analytics Platform",
        description: "Enhanced UI/UX and integrated APIs for a sports analytics platform, providing seamless administration and real-time cricket insights.",
        achievements: &[
            "Developed comprehensive sports analytics dashboard with real-time data",
            "Integrated multiple cricket APIs for live match statistics and insights",
            "Built responsive admin panel for content management and user administration",
            "Implemented advanced filtering and search functionality for cricket data",
            "Optimized performance for handling large datasets and real-time updates",
        ],
        technologies: &[
            "Next.js",
            "Express.js",
            "MySQL",
            "API Integration",
            "TailwindCSS",
        ],
        employment: "Full-time",
        current: false,
    },
];

pub static EXPERIENCE_STATS: [Stat; 4] = [
    Stat::new("3+", "Years Experience", "fas fa-clock"),
    Stat::new("4", "Projects Completed", "fas fa-project-diagram"),
    Stat::new("20+", "Technologies Used", "fas fa-code"),
    Stat::new("100%", "Client Satisfaction", "fas fa-heart"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Degree,
    Certification,
}

impl CredentialKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Degree => "Degree",
            Self::Certification => "Certification",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyStatus {
    Ongoing,
    Completed,
}

impl StudyStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Ongoing => "fas fa-clock",
            Self::Completed => "fas fa-check-circle",
        }
    }
}

#[derive(Debug)]
pub struct Credential {
    pub title: &'static str,
    pub institution: &'static str,
    pub date: &'static str,
    pub kind: CredentialKind,
    pub status: StudyStatus,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub icon: &'static str,
}

pub static CREDENTIALS: [Credential; 3] = [
    Credential {
        title: "Bachelor of Technology in Computer Science",
        institution: "Guru Gobind Singh Indraprastha University",
        date: "2021 - 2024",
        kind: CredentialKind::Degree,
        status: StudyStatus::Completed,
        description: "Comprehensive study of computer science fundamentals, algorithms, data structures, and software engineering principles.",
        achievements: &[
            "Specialized in software development and web technologies",
            "Completed projects in full-stack development",
            "Participated in coding competitions and hackathons",
            "Maintained strong academic performance",
        ],
        icon: "fas fa-graduation-cap",
    },
    Credential {
        title: "AWS Certified Developer",
        institution: "Amazon Web Services",
        date: "2023",
        kind: CredentialKind::Certification,
        status: StudyStatus::Completed,
        description: "Professional certification demonstrating expertise in AWS cloud services and development practices.",
        achievements: &[
            "Mastered AWS core services and best practices",
            "Developed scalable cloud applications",
            "Implemented CI/CD pipelines and DevOps practices",
            "Achieved high score in certification exam",
        ],
        icon: "fab fa-aws",
    },
    Credential {
        title: "MongoDB Database Administrator",
        institution: "MongoDB University",
        date: "2022",
        kind: CredentialKind::Certification,
        status: StudyStatus::Completed,
        description: "Specialized certification in MongoDB database administration and NoSQL database management.",
        achievements: &[
            "Expertise in MongoDB deployment and management",
            "Optimized database performance and queries",
            "Implemented security and backup strategies",
            "Designed scalable database architectures",
        ],
        icon: "fas fa-database",
    },
];

pub static LEARNING_STATS: [Stat; 4] = [
    Stat::new("4+", "YEARS OF STUDY", "fas fa-calendar-alt"),
    Stat::new("2", "CERTIFICATIONS", "fas fa-certificate"),
    Stat::new("10+", "PROJECTS COMPLETED", "fas fa-project-diagram"),
    Stat::new("15+", "TECHNOLOGIES LEARNED", "fas fa-code"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_current_role() {
        assert_eq!(ROLES.iter().filter(|r| r.current).count(), 1);
        assert!(ROLES[0].current);
    }

    #[test]
    fn test_certification_count_matches_stat() {
        let certs = CREDENTIALS
            .iter()
            .filter(|c| c.kind == CredentialKind::Certification)
            .count();
        assert_eq!(LEARNING_STATS[1].value, certs.to_string());
    }
}
