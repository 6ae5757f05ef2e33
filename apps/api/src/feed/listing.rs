//! Turns career matches into feed listings, plus the listing-level filters
//! the feed screen applies.

use std::collections::HashSet;

use crate::matching::CareerMatch;
use crate::models::job::{EmploymentType, ExperienceLevel, Job};
use crate::vector::SkillDimension;

const DEFAULT_LOCATION: &str = "Remote";

/// (dimension, threshold, bullet). A bullet is added when the job's weight
/// strictly exceeds the threshold.
const REQUIREMENT_RULES: &[(SkillDimension, f64, &str)] = &[
    (SkillDimension::Programming, 0.7, "Strong programming skills"),
    (SkillDimension::ProjectManagement, 0.6, "Project management experience"),
    (SkillDimension::Communication, 0.7, "Excellent communication skills"),
    (SkillDimension::Leadership, 0.6, "Leadership experience"),
];

const FALLBACK_REQUIREMENT: &str = "Passion for learning";

pub fn to_listing(career_match: &CareerMatch) -> Job {
    let job = &career_match.job;
    let location = job
        .location
        .clone()
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let is_remote = location.to_lowercase().contains("remote");

    Job {
        id: job.id.clone(),
        company: job.company.clone(),
        title: job.title.clone(),
        description: describe(career_match),
        requirements: requirements(career_match),
        salary: job.salary.clone(),
        posted_date: job.posted_at,
        is_remote,
        location,
        employment_type: EmploymentType::FullTime,
        experience_level: ExperienceLevel::from_required_years(job.required_experience),
        similarity: Some(career_match.similarity),
    }
}

fn describe(career_match: &CareerMatch) -> String {
    let job = &career_match.job;
    let mut description = format!("Join us as a {} at {}. ", job.title, job.company);
    if !career_match.transferable_skills.is_empty() {
        description.push_str(&format!(
            "Your experience with {} will be valuable in this role. ",
            career_match.transferable_skills.join(", ")
        ));
    }
    if !career_match.skill_gaps.is_empty() {
        description.push_str(&format!(
            "This role will help you develop {}. ",
            career_match.skill_gaps.join(", ")
        ));
    }
    description.push_str(&format!(
        "Career transition difficulty: {}.",
        career_match.transition_difficulty.as_str()
    ));
    description
}

fn requirements(career_match: &CareerMatch) -> Vec<String> {
    let job = &career_match.job;
    let mut bullets: Vec<String> = REQUIREMENT_RULES
        .iter()
        .filter(|(dimension, threshold, _)| job.vector[*dimension] > *threshold)
        .map(|(_, _, bullet)| bullet.to_string())
        .collect();

    if job.required_experience > 0.0 {
        bullets.push(format!("{}+ years experience", job.required_experience));
    }
    if bullets.is_empty() {
        bullets.push(FALLBACK_REQUIREMENT.to_string());
    }
    bullets
}

// ────────────────────────────────────────────────────────────────────────────
// Listing filters
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive substring match on location. An empty query keeps everything.
pub fn filter_jobs_by_location(jobs: &[Job], location: &str) -> Vec<Job> {
    let needle = location.trim().to_lowercase();
    jobs.iter()
        .filter(|job| job.location.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Keeps jobs at any of the given levels. An empty set keeps everything.
pub fn filter_jobs_by_experience_level(jobs: &[Job], levels: &HashSet<ExperienceLevel>) -> Vec<Job> {
    jobs.iter()
        .filter(|job| levels.is_empty() || levels.contains(&job.experience_level))
        .cloned()
        .collect()
}

/// Newest first; undated jobs keep their relative order at the end.
pub fn sort_jobs_by_date(jobs: &mut [Job]) {
    // None < Some in Option's ordering, so reversing puts undated last
    jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::matching::models::TransitionDifficulty;
    use crate::matching::JobWithVector;
    use crate::vector::SkillDimension::*;
    use crate::vector::SkillVector;

    fn career_match(vector: SkillVector, required_experience: f64) -> CareerMatch {
        CareerMatch {
            job: JobWithVector {
                id: "3".to_string(),
                title: "Technical Product Manager".to_string(),
                company: "ProductCo".to_string(),
                vector,
                required_experience,
                description: None,
                location: None,
                salary: None,
                posted_at: None,
            },
            similarity: 0.72,
            match_score: 0.9,
            transferable_skills: vec!["technical knowledge".to_string(), "problem solving".to_string()],
            skill_gaps: vec!["project management".to_string()],
            transition_difficulty: TransitionDifficulty::Moderate,
        }
    }

    fn listing(id: &str, location: &str, level: ExperienceLevel, day: Option<u32>) -> Job {
        Job {
            id: id.to_string(),
            company: "Acme".to_string(),
            title: "Role".to_string(),
            location: location.to_string(),
            description: String::new(),
            requirements: vec![],
            salary: None,
            posted_date: day.map(|d| Utc.with_ymd_and_hms(2026, 3, d, 0, 0, 0).unwrap()),
            is_remote: false,
            employment_type: EmploymentType::FullTime,
            experience_level: level,
            similarity: None,
        }
    }

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn test_listing_description() {
        let m = career_match(SkillVector::default().with(ProjectManagement, 0.8), 4.0);
        let job = to_listing(&m);
        assert_eq!(
            job.description,
            "Join us as a Technical Product Manager at ProductCo. \
             Your experience with technical knowledge, problem solving will be valuable in this role. \
             This role will help you develop project management. \
             Career transition difficulty: Moderate."
        );
        assert_eq!(job.similarity, Some(0.72));
        assert_eq!(job.location, "Remote");
        assert!(job.is_remote);
    }

    #[test]
    fn test_listing_requirements_and_level() {
        let vector = SkillVector::default()
            .with(Programming, 0.4)
            .with(ProjectManagement, 0.8)
            .with(Communication, 0.8)
            .with(Leadership, 0.6);
        let job = to_listing(&career_match(vector, 4.0));
        assert_eq!(
            job.requirements,
            vec![
                "Project management experience",
                "Excellent communication skills",
                "4+ years experience",
            ]
        );
        assert_eq!(job.experience_level, ExperienceLevel::Mid);
    }

    #[test]
    fn test_listing_fallback_requirement() {
        let job = to_listing(&career_match(SkillVector::default(), 0.0));
        assert_eq!(job.requirements, vec!["Passion for learning"]);
        assert_eq!(job.experience_level, ExperienceLevel::Entry);
    }

    #[test]
    fn test_description_without_skill_lists() {
        let mut m = career_match(SkillVector::default(), 1.0);
        m.transferable_skills.clear();
        m.skill_gaps.clear();
        assert_eq!(
            to_listing(&m).description,
            "Join us as a Technical Product Manager at ProductCo. Career transition difficulty: Moderate."
        );
    }

    #[test]
    fn test_filter_by_location_is_case_insensitive() {
        let jobs = vec![
            listing("a", "San Francisco, CA", ExperienceLevel::Mid, None),
            listing("b", "Remote", ExperienceLevel::Mid, None),
            listing("c", "South San Francisco", ExperienceLevel::Mid, None),
        ];
        assert_eq!(ids(&filter_jobs_by_location(&jobs, "san francisco")), vec!["a", "c"]);
        assert_eq!(filter_jobs_by_location(&jobs, "").len(), 3);
    }

    #[test]
    fn test_filter_by_experience_level() {
        let jobs = vec![
            listing("a", "", ExperienceLevel::Entry, None),
            listing("b", "", ExperienceLevel::Senior, None),
            listing("c", "", ExperienceLevel::Lead, None),
        ];
        let levels: HashSet<_> = [ExperienceLevel::Senior, ExperienceLevel::Lead].into();
        assert_eq!(ids(&filter_jobs_by_experience_level(&jobs, &levels)), vec!["b", "c"]);
        assert_eq!(filter_jobs_by_experience_level(&jobs, &HashSet::new()).len(), 3);
    }

    #[test]
    fn test_sort_by_date_newest_first_undated_last() {
        let mut jobs = vec![
            listing("undated-1", "", ExperienceLevel::Mid, None),
            listing("old", "", ExperienceLevel::Mid, Some(1)),
            listing("undated-2", "", ExperienceLevel::Mid, None),
            listing("new", "", ExperienceLevel::Mid, Some(20)),
        ];
        sort_jobs_by_date(&mut jobs);
        assert_eq!(ids(&jobs), vec!["new", "old", "undated-1", "undated-2"]);
    }
}
