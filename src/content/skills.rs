use crate::catalog::{Categorized, CategoryTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
}

impl SkillCategory {
    pub fn description(self) -> &'static str {
        match self {
            Self::Frontend => {
                "Modern web applications with React, Vue.js, and responsive design principles"
            }
            Self::Backend => {
                "Scalable server-side solutions with Node.js, Express, and microservices architecture"
            }
            Self::Database => {
                "Data management and cloud infrastructure with AWS, MongoDB, and PostgreSQL"
            }
        }
    }

    pub fn summary_icon(self) -> &'static str {
        match self {
            Self::Frontend => "fas fa-code",
            Self::Backend => "fas fa-server",
            Self::Database => "fas fa-database",
        }
    }

    pub fn summary(self) -> CategorySummary {
        let levels = SKILLS
            .iter()
            .filter(|s| s.category == self)
            .map(|s| u32::from(s.level));
        let (count, total) = levels.fold((0u32, 0u32), |(n, sum), l| (n + 1, sum + l));
        let average = if count == 0 {
            0
        } else {
            // rounded to nearest
            ((total + count / 2) / count) as u8
        };
        CategorySummary {
            technologies: count as usize,
            average_level: average,
        }
    }
}

impl CategoryTag for SkillCategory {
    const VARIANTS: &'static [Self] = &[Self::Frontend, Self::Backend, Self::Database];

    fn tag(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend Development",
            Self::Backend => "Backend Development",
            Self::Database => "Database & Cloud",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Frontend => "fas fa-desktop",
            Self::Backend => "fas fa-server",
            Self::Database => "fas fa-database",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub technologies: usize,
    pub average_level: u8,
}

#[derive(Debug)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
    pub icon: &'static str,
    pub category: SkillCategory,
}

impl Categorized for Skill {
    type Category = SkillCategory;

    fn category(&self) -> SkillCategory {
        self.category
    }
}

const fn skill(name: &'static str, level: u8, icon: &'static str, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        icon,
        category,
    }
}

use SkillCategory::*;

pub static SKILLS: [Skill; 14] = [
    skill("ReactJS", 90, "fab fa-react", Frontend),
    skill("VueJS", 85, "fab fa-vuejs", Frontend),
    skill("HTML5", 95, "fab fa-html5", Frontend),
    skill("CSS3", 90, "fab fa-css3-alt", Frontend),
    skill("JavaScript", 92, "fab fa-js", Frontend),
    skill("NodeJS", 88, "fab fa-node-js", Backend),
    skill("ExpressJS", 85, "fas fa-code", Backend),
    skill("NestJS", 80, "fas fa-layer-group", Backend),
    skill("Flask", 75, "fab fa-python", Backend),
    skill("MongoDB", 85, "fas fa-leaf", Database),
    skill("PostgreSQL", 88, "fas fa-database", Database),
    skill("MySQL", 80, "fas fa-database", Database),
    skill("Redis", 85, "fas fa-memory", Database),
    skill("AWS", 82, "fab fa-aws", Database),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::{CatalogFilter, Selection};

    #[test]
    fn test_skill_names_unique() {
        let names: HashSet<&str> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SKILLS.len());
    }

    #[test]
    fn test_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_category_summaries() {
        assert_eq!(
            SkillCategory::Frontend.summary(),
            CategorySummary {
                technologies: 5,
                average_level: 90
            }
        );
        assert_eq!(
            SkillCategory::Backend.summary(),
            CategorySummary {
                technologies: 4,
                average_level: 82
            }
        );
        assert_eq!(
            SkillCategory::Database.summary(),
            CategorySummary {
                technologies: 5,
                average_level: 84
            }
        );
    }

    #[test]
    fn test_filter_by_backend() {
        let mut filter = CatalogFilter::new(&SKILLS);
        filter.set_category("backend");
        let names: Vec<&str> = filter.visible_items().map(|s| s.name).collect();
        assert_eq!(names, vec!["NodeJS", "ExpressJS", "NestJS", "Flask"]);
        assert_eq!(filter.count(Selection::All), SKILLS.len());
    }
}
