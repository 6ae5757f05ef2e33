//! Static keyword dictionaries and role-category presets.
//!
//! All keywords are lowercase. Some keywords intentionally appear in more than
//! one category (e.g. "sql", "swift") and count toward each of them.

use crate::vector::{create_empty_vector, SkillDimension, SkillVector};

pub const PROGRAMMING: &[&str] = &[
    "python", "javascript", "typescript", "java", "c++", "c#", "ruby", "go", "rust", "swift",
    "kotlin", "php", "scala", "r", "matlab", "perl", "bash", "sql",
];

pub const WEB_DEVELOPMENT: &[&str] = &[
    "react", "angular", "vue", "node.js", "express", "django", "flask", "rails", "spring",
    "html", "css", "sass", "webpack", "next.js", "nuxt", "gatsby",
];

pub const MOBILE_DEVELOPMENT: &[&str] = &[
    "react native", "flutter", "swift", "swiftui", "kotlin", "android", "ios", "xamarin",
    "ionic", "cordova",
];

pub const CLOUD: &[&str] = &[
    "aws", "azure", "gcp", "google cloud", "kubernetes", "docker", "terraform", "jenkins",
    "ci/cd", "devops", "microservices", "serverless", "lambda",
];

pub const DATA: &[&str] = &[
    "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn", "pandas",
    "numpy", "data analysis", "data science", "statistics", "tableau", "power bi", "sql",
    "bigquery", "spark", "hadoop",
];

pub const LEADERSHIP: &[&str] = &[
    "led", "managed", "director", "head of", "vp", "chief", "senior", "principal", "team lead",
    "manager", "supervised", "mentored", "coached", "guided",
];

pub const COMMUNICATION: &[&str] = &[
    "presented", "collaborated", "stakeholder", "client", "customer", "negotiated",
    "facilitated", "coordinated", "liaised", "communicated", "articulated",
];

pub const PROJECT_MANAGEMENT: &[&str] = &[
    "project management", "agile", "scrum", "kanban", "jira", "roadmap", "timeline",
    "milestone", "deliverable", "budget", "resource", "planning",
];

pub const FINANCE: &[&str] = &[
    "fintech", "banking", "trading", "investment", "financial", "accounting", "budget",
    "revenue", "profit", "blockchain", "cryptocurrency", "payments",
];

pub const HEALTHCARE: &[&str] = &[
    "healthcare", "medical", "clinical", "patient", "hospital", "pharma", "biotech",
    "diagnosis", "treatment", "health", "hipaa", "ehr",
];

/// Keyword category. Iteration order of `ALL` is the extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Programming,
    WebDevelopment,
    MobileDevelopment,
    Cloud,
    Data,
    Leadership,
    Communication,
    ProjectManagement,
    Finance,
    Healthcare,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 10] = [
        SkillCategory::Programming,
        SkillCategory::WebDevelopment,
        SkillCategory::MobileDevelopment,
        SkillCategory::Cloud,
        SkillCategory::Data,
        SkillCategory::Leadership,
        SkillCategory::Communication,
        SkillCategory::ProjectManagement,
        SkillCategory::Finance,
        SkillCategory::Healthcare,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Programming => PROGRAMMING,
            SkillCategory::WebDevelopment => WEB_DEVELOPMENT,
            SkillCategory::MobileDevelopment => MOBILE_DEVELOPMENT,
            SkillCategory::Cloud => CLOUD,
            SkillCategory::Data => DATA,
            SkillCategory::Leadership => LEADERSHIP,
            SkillCategory::Communication => COMMUNICATION,
            SkillCategory::ProjectManagement => PROJECT_MANAGEMENT,
            SkillCategory::Finance => FINANCE,
            SkillCategory::Healthcare => HEALTHCARE,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Role-category presets
// ────────────────────────────────────────────────────────────────────────────

/// Broad role families with a hand-tuned reference vector each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCategory {
    Developer,
    Manager,
    Designer,
    DataScientist,
    ProductManager,
}

impl RoleCategory {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "developer" => Some(RoleCategory::Developer),
            "manager" => Some(RoleCategory::Manager),
            "designer" => Some(RoleCategory::Designer),
            "dataScientist" => Some(RoleCategory::DataScientist),
            "productManager" => Some(RoleCategory::ProductManager),
            _ => None,
        }
    }

    /// Reference vector for the role family. Unlisted dimensions are 0.
    pub fn preset(self) -> SkillVector {
        use SkillDimension::*;

        let weights: &[(SkillDimension, f64)] = match self {
            RoleCategory::Developer => &[
                (Programming, 0.9),
                (WebDevelopment, 0.7),
                (Databases, 0.6),
                (ProblemSolving, 0.8),
                (Teamwork, 0.5),
            ],
            RoleCategory::Manager => &[
                (Leadership, 0.8),
                (ProjectManagement, 0.8),
                (Communication, 0.7),
                (Teamwork, 0.6),
                (ProblemSolving, 0.6),
            ],
            RoleCategory::Designer => &[
                (Design, 0.9),
                (Creativity, 0.8),
                (Communication, 0.6),
                (ProblemSolving, 0.6),
                (WebDevelopment, 0.4),
            ],
            RoleCategory::DataScientist => &[
                (DataAnalysis, 0.9),
                (MachineLearning, 0.8),
                (Programming, 0.7),
                (ProblemSolving, 0.8),
                (Research, 0.7),
            ],
            RoleCategory::ProductManager => &[
                (ProjectManagement, 0.8),
                (Communication, 0.8),
                (Leadership, 0.6),
                (ProblemSolving, 0.7),
                (Research, 0.6),
            ],
        };

        weights
            .iter()
            .fold(create_empty_vector(), |v, &(d, w)| v.with(d, w))
    }
}

/// Looks up a preset by its camelCase family name.
pub fn role_category_vector(name: &str) -> Option<SkillVector> {
    RoleCategory::from_name(name).map(RoleCategory::preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::SkillDimension::*;

    #[test]
    fn test_programming_coverage() {
        for lang in ["python", "javascript", "typescript", "java", "go"] {
            assert!(PROGRAMMING.contains(&lang), "missing {lang}");
        }
    }

    #[test]
    fn test_cloud_coverage() {
        for kw in ["aws", "azure", "gcp", "kubernetes"] {
            assert!(CLOUD.contains(&kw), "missing {kw}");
        }
    }

    #[test]
    fn test_soft_skill_keywords() {
        assert!(LEADERSHIP.contains(&"led"));
        assert!(LEADERSHIP.contains(&"managed"));
        assert!(COMMUNICATION.contains(&"presented"));
        assert!(COMMUNICATION.contains(&"collaborated"));
    }

    #[test]
    fn test_all_keywords_are_lowercase() {
        for category in SkillCategory::ALL {
            for kw in category.keywords() {
                assert_eq!(*kw, kw.to_lowercase(), "{category:?} keyword not lowercase");
            }
        }
    }

    #[test]
    fn test_developer_preset() {
        let v = role_category_vector("developer").unwrap();
        assert!(v[Programming] > 0.7);
        assert!(v[ProblemSolving] > 0.6);
        assert_eq!(v[Sales], 0.0);
    }

    #[test]
    fn test_manager_preset() {
        let v = role_category_vector("manager").unwrap();
        assert!(v[Leadership] > 0.7);
        assert!(v[ProjectManagement] > 0.6);
    }

    #[test]
    fn test_designer_preset() {
        let v = RoleCategory::Designer.preset();
        assert!(v[Design] > 0.8);
        assert!(v[Creativity] > 0.7);
    }

    #[test]
    fn test_unknown_role_category() {
        assert!(role_category_vector("astronaut").is_none());
    }
}
