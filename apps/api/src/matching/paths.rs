//! Career path suggestions — a static rule table keyed on the current role and
//! the temperature band. Entries are canned, not derived from the vector space.

use crate::matching::models::{CareerTransition, TransitionDifficulty, UserProfile};
use crate::vector::SkillDimension;

pub const MAX_SUGGESTIONS: usize = 3;

/// Coarse temperature buckets used by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    /// temperature < 0.3
    Conservative,
    /// 0.3 ≤ temperature < 0.7
    Moderate,
    /// temperature ≥ 0.7
    Bold,
}

impl TemperatureBand {
    pub fn from_temperature(temperature: f64) -> Self {
        if temperature < 0.3 {
            TemperatureBand::Conservative
        } else if temperature < 0.7 {
            TemperatureBand::Moderate
        } else {
            TemperatureBand::Bold
        }
    }
}

struct PathRule {
    /// Any of these substrings in the current role selects the rule.
    role_markers: &'static [&'static str],
    band: TemperatureBand,
    /// Profile weight that must be strictly exceeded.
    requires: Option<(SkillDimension, f64)>,
    target_role: &'static str,
    similarity: f64,
    steps: &'static [&'static str],
    estimated_time: &'static str,
    difficulty: TransitionDifficulty,
}

impl PathRule {
    fn applies_to(&self, profile: &UserProfile, band: TemperatureBand) -> bool {
        self.band == band
            && self
                .role_markers
                .iter()
                .any(|marker| profile.current_role.contains(marker))
            && self
                .requires
                .map_or(true, |(dimension, floor)| profile.vector[dimension] > floor)
    }

    fn to_transition(&self) -> CareerTransition {
        CareerTransition {
            target_role: self.target_role.to_string(),
            similarity: self.similarity,
            steps: self.steps.iter().map(|s| s.to_string()).collect(),
            estimated_time: self.estimated_time.to_string(),
            difficulty: self.difficulty,
        }
    }
}

const ENGINEER_ROLES: &[&str] = &["Software Engineer", "Developer"];
const PRODUCT_ROLES: &[&str] = &["Product Manager"];
const DESIGN_ROLES: &[&str] = &["Designer"];

const PATH_RULES: &[PathRule] = &[
    // Engineers
    PathRule {
        role_markers: ENGINEER_ROLES,
        band: TemperatureBand::Conservative,
        requires: None,
        target_role: "Technical Lead",
        similarity: 0.85,
        steps: &[
            "Mentor junior developers",
            "Lead technical design discussions",
            "Own larger technical initiatives",
        ],
        estimated_time: "6-12 months",
        difficulty: TransitionDifficulty::Easy,
    },
    PathRule {
        role_markers: ENGINEER_ROLES,
        band: TemperatureBand::Moderate,
        requires: None,
        target_role: "Product Manager",
        similarity: 0.55,
        steps: &[
            "Build product thinking skills",
            "Work closely with PMs on feature definition",
            "Take a PM course or certification",
            "Lead a small product initiative",
        ],
        estimated_time: "6-12 months",
        difficulty: TransitionDifficulty::Moderate,
    },
    PathRule {
        role_markers: ENGINEER_ROLES,
        band: TemperatureBand::Moderate,
        requires: None,
        target_role: "Solutions Architect",
        similarity: 0.65,
        steps: &[
            "Deepen system design knowledge",
            "Get cloud certifications (AWS/Azure)",
            "Work on customer-facing projects",
        ],
        estimated_time: "3-6 months",
        difficulty: TransitionDifficulty::Moderate,
    },
    PathRule {
        role_markers: ENGINEER_ROLES,
        band: TemperatureBand::Bold,
        requires: Some((SkillDimension::DataAnalysis, 0.4)),
        target_role: "Data Scientist",
        similarity: 0.45,
        steps: &[
            "Study statistics and machine learning",
            "Complete data science bootcamp",
            "Build ML portfolio projects",
            "Contribute to data initiatives at work",
        ],
        estimated_time: "12-18 months",
        difficulty: TransitionDifficulty::Challenging,
    },
    PathRule {
        role_markers: ENGINEER_ROLES,
        band: TemperatureBand::Bold,
        requires: None,
        target_role: "Technical Writer",
        similarity: 0.35,
        steps: &[
            "Start technical blog",
            "Contribute to documentation",
            "Take technical writing course",
            "Freelance writing projects",
        ],
        estimated_time: "6-9 months",
        difficulty: TransitionDifficulty::Challenging,
    },
    // Product managers
    PathRule {
        role_markers: PRODUCT_ROLES,
        band: TemperatureBand::Conservative,
        requires: None,
        target_role: "Senior Product Manager",
        similarity: 0.85,
        steps: &[
            "Own a larger product area",
            "Mentor associate PMs",
            "Drive quarterly roadmap planning",
        ],
        estimated_time: "6-12 months",
        difficulty: TransitionDifficulty::Easy,
    },
    PathRule {
        role_markers: PRODUCT_ROLES,
        band: TemperatureBand::Moderate,
        requires: None,
        target_role: "Program Manager",
        similarity: 0.65,
        steps: &[
            "Coordinate delivery across several teams",
            "Get a program management certification",
            "Own release planning",
        ],
        estimated_time: "3-6 months",
        difficulty: TransitionDifficulty::Moderate,
    },
    PathRule {
        role_markers: PRODUCT_ROLES,
        band: TemperatureBand::Moderate,
        requires: None,
        target_role: "Product Marketing Manager",
        similarity: 0.6,
        steps: &[
            "Partner with marketing on launches",
            "Learn positioning and messaging",
            "Run customer interviews",
        ],
        estimated_time: "6-9 months",
        difficulty: TransitionDifficulty::Moderate,
    },
    PathRule {
        role_markers: PRODUCT_ROLES,
        band: TemperatureBand::Bold,
        requires: Some((SkillDimension::Programming, 0.4)),
        target_role: "Software Engineer",
        similarity: 0.4,
        steps: &[
            "Refresh programming fundamentals",
            "Ship small fixes in the team codebase",
            "Pair with engineers on a feature",
        ],
        estimated_time: "12-18 months",
        difficulty: TransitionDifficulty::Challenging,
    },
    PathRule {
        role_markers: PRODUCT_ROLES,
        band: TemperatureBand::Bold,
        requires: None,
        target_role: "UX Researcher",
        similarity: 0.4,
        steps: &[
            "Study qualitative research methods",
            "Run usability studies on your product",
            "Build a research portfolio",
        ],
        estimated_time: "9-12 months",
        difficulty: TransitionDifficulty::Challenging,
    },
    PathRule {
        role_markers: PRODUCT_ROLES,
        band: TemperatureBand::Bold,
        requires: None,
        target_role: "Startup Founder",
        similarity: 0.3,
        steps: &[
            "Validate a problem with real customers",
            "Build an MVP with a small team",
            "Learn fundraising basics",
        ],
        estimated_time: "12-24 months",
        difficulty: TransitionDifficulty::Difficult,
    },
    // Designers
    PathRule {
        role_markers: DESIGN_ROLES,
        band: TemperatureBand::Conservative,
        requires: None,
        target_role: "Senior Product Designer",
        similarity: 0.85,
        steps: &[
            "Lead design for a product area",
            "Build and maintain a design system",
            "Mentor junior designers",
        ],
        estimated_time: "6-12 months",
        difficulty: TransitionDifficulty::Easy,
    },
    PathRule {
        role_markers: DESIGN_ROLES,
        band: TemperatureBand::Moderate,
        requires: None,
        target_role: "UX Researcher",
        similarity: 0.6,
        steps: &[
            "Run usability tests on current projects",
            "Learn survey and interview design",
            "Present research findings to stakeholders",
        ],
        estimated_time: "6-9 months",
        difficulty: TransitionDifficulty::Moderate,
    },
    PathRule {
        role_markers: DESIGN_ROLES,
        band: TemperatureBand::Moderate,
        requires: None,
        target_role: "Product Manager",
        similarity: 0.5,
        steps: &[
            "Join product discovery sessions",
            "Learn prioritization frameworks",
            "Own a feature from spec to launch",
        ],
        estimated_time: "9-12 months",
        difficulty: TransitionDifficulty::Moderate,
    },
    PathRule {
        role_markers: DESIGN_ROLES,
        band: TemperatureBand::Bold,
        requires: Some((SkillDimension::WebDevelopment, 0.3)),
        target_role: "Frontend Developer",
        similarity: 0.4,
        steps: &[
            "Learn JavaScript and React",
            "Build interactive prototypes in code",
            "Contribute to the frontend codebase",
        ],
        estimated_time: "9-15 months",
        difficulty: TransitionDifficulty::Challenging,
    },
    PathRule {
        role_markers: DESIGN_ROLES,
        band: TemperatureBand::Bold,
        requires: None,
        target_role: "Marketing Manager",
        similarity: 0.3,
        steps: &[
            "Own visual identity for a campaign",
            "Learn marketing analytics",
            "Take a digital marketing course",
        ],
        estimated_time: "9-12 months",
        difficulty: TransitionDifficulty::Challenging,
    },
];

/// Returns up to `MAX_SUGGESTIONS` transitions for the profile's role and
/// temperature, in rule-table order. Unknown roles get none.
pub fn suggest_career_paths(profile: &UserProfile) -> Vec<CareerTransition> {
    let band = TemperatureBand::from_temperature(profile.temperature);

    PATH_RULES
        .iter()
        .filter(|rule| rule.applies_to(profile, band))
        .take(MAX_SUGGESTIONS)
        .map(PathRule::to_transition)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::create_empty_vector;
    use crate::vector::SkillDimension::*;

    fn profile(role: &str, temperature: f64) -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            current_role: role.to_string(),
            years_experience: 5.0,
            skills: vec![],
            vector: create_empty_vector().with(Programming, 0.9).with(Leadership, 0.4),
            temperature,
        }
    }

    fn roles(paths: &[CareerTransition]) -> Vec<&str> {
        paths.iter().map(|p| p.target_role.as_str()).collect()
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(TemperatureBand::from_temperature(0.29), TemperatureBand::Conservative);
        assert_eq!(TemperatureBand::from_temperature(0.3), TemperatureBand::Moderate);
        assert_eq!(TemperatureBand::from_temperature(0.69), TemperatureBand::Moderate);
        assert_eq!(TemperatureBand::from_temperature(0.7), TemperatureBand::Bold);
    }

    #[test]
    fn test_engineer_conservative() {
        let paths = suggest_career_paths(&profile("Software Engineer", 0.1));
        assert_eq!(roles(&paths), vec!["Technical Lead"]);
        assert_eq!(paths[0].difficulty, TransitionDifficulty::Easy);
    }

    #[test]
    fn test_engineer_moderate() {
        let paths = suggest_career_paths(&profile("Software Engineer", 0.5));
        assert_eq!(roles(&paths), vec!["Product Manager", "Solutions Architect"]);
        let pm = &paths[0];
        assert!(pm.steps.contains(&"Build product thinking skills".to_string()));
        assert_eq!(pm.estimated_time, "6-12 months");
    }

    #[test]
    fn test_developer_matches_engineer_rules() {
        let paths = suggest_career_paths(&profile("Full Stack Developer", 0.5));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_bold_data_scientist_requires_data_skills() {
        let mut p = profile("Software Engineer", 0.8);
        assert_eq!(roles(&suggest_career_paths(&p)), vec!["Technical Writer"]);

        p.vector.set(DataAnalysis, 0.6);
        assert_eq!(
            roles(&suggest_career_paths(&p)),
            vec!["Data Scientist", "Technical Writer"]
        );
    }

    #[test]
    fn test_never_more_than_three() {
        let mut p = profile("Product Manager turned Developer", 0.9);
        p.vector.set(DataAnalysis, 0.6);
        // five bold rules apply across both role groups; table order wins
        let paths = suggest_career_paths(&p);
        assert_eq!(paths.len(), MAX_SUGGESTIONS);
        assert_eq!(
            roles(&paths),
            vec!["Data Scientist", "Technical Writer", "Software Engineer"]
        );
    }

    #[test]
    fn test_product_manager_bold() {
        let paths = suggest_career_paths(&profile("Senior Product Manager", 0.9));
        assert_eq!(
            roles(&paths),
            vec!["Software Engineer", "UX Researcher", "Startup Founder"]
        );
    }

    #[test]
    fn test_designer_paths() {
        let paths = suggest_career_paths(&profile("UX Designer", 0.5));
        assert_eq!(roles(&paths), vec!["UX Researcher", "Product Manager"]);
    }

    #[test]
    fn test_unknown_role_gets_nothing() {
        assert!(suggest_career_paths(&profile("Professional", 0.5)).is_empty());
    }
}
