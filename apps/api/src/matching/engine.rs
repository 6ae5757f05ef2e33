//! Career matching — profile/job vectorization and temperature-aware ranking.
//!
//! The temperature picks a target similarity (0.9 at temperature 0, 0.2 at 1);
//! each job's match score falls off linearly with its distance from that
//! target. Every job keeps a score, unlike the hard bands of the feed filter.

use tracing::debug;
use uuid::Uuid;

use crate::extraction::{
    extract_skills_from_text, extract_years_of_experience, identify_current_role, text_to_vector,
};
use crate::matching::models::{CareerMatch, JobWithVector, TransitionDifficulty, UserProfile};
use crate::vector::{cosine_similarity, normalize_vector, SkillDimension, SkillVector};

/// Resumes carry no preference, so parsed profiles start in the middle.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;
/// Width of the match-score falloff around the target similarity.
pub const MATCH_VARIANCE: f64 = 1.5;

const UNKNOWN_POSITION: &str = "Unknown Position";
const UNKNOWN_COMPANY: &str = "Company";

/// Thresholds for the per-job transition analysis.
const TRANSFERABLE_FLOOR: f64 = 0.3;
const GAP_PROFILE_CEILING: f64 = 0.3;
const GAP_JOB_FLOOR: f64 = 0.5;

/// Tracked categories and their human-readable labels, in report order.
const TRANSITION_SKILLS: &[(SkillDimension, &str)] = &[
    (SkillDimension::Programming, "technical knowledge"),
    (SkillDimension::Leadership, "leadership"),
    (SkillDimension::Communication, "communication"),
    (SkillDimension::ProjectManagement, "project management"),
    (SkillDimension::ProblemSolving, "problem solving"),
    (SkillDimension::DataAnalysis, "analytical skills"),
];

// ────────────────────────────────────────────────────────────────────────────
// Construction
// ────────────────────────────────────────────────────────────────────────────

/// Builds a profile from resume text. The vector is normalized.
pub fn parse_resume(resume_text: &str) -> UserProfile {
    let skills = extract_skills_from_text(resume_text);
    let vector = normalize_vector(&text_to_vector(resume_text));
    let current_role = identify_current_role(resume_text);
    let years_experience = extract_years_of_experience(resume_text);

    debug!(
        skills = skills.len(),
        role = %current_role,
        years = years_experience,
        "Parsed resume"
    );

    UserProfile {
        id: Uuid::new_v4().to_string(),
        current_role,
        years_experience,
        skills,
        vector,
        temperature: DEFAULT_TEMPERATURE,
    }
}

/// Vectorizes a job description. The title is its first non-blank line.
pub fn create_job_vector(description: &str) -> JobWithVector {
    let title = description
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(UNKNOWN_POSITION)
        .to_string();

    JobWithVector {
        id: Uuid::new_v4().to_string(),
        title,
        company: UNKNOWN_COMPANY.to_string(),
        vector: normalize_vector(&text_to_vector(description)),
        required_experience: extract_years_of_experience(description),
        description: Some(description.to_string()),
        location: None,
        salary: None,
        posted_at: None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Similarity the user is looking for at a given temperature.
pub fn target_similarity(temperature: f64) -> f64 {
    0.9 - temperature * 0.7
}

/// `max(0, 1 - |similarity - target| / MATCH_VARIANCE)`.
pub fn calculate_match_score(similarity: f64, temperature: f64) -> f64 {
    let distance = (similarity - target_similarity(temperature)).abs();
    (1.0 - distance / MATCH_VARIANCE).max(0.0)
}

/// Transferable skills and gaps between a profile and a job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionAnalysis {
    pub transferable_skills: Vec<String>,
    pub skill_gaps: Vec<String>,
}

/// Compares the tracked categories pairwise.
///
/// Transferable: profile > 0.3 and job > 0.3. Gap: profile < 0.3 and job > 0.5.
/// A category can land in neither list.
pub fn analyze_transition(profile: &SkillVector, job: &SkillVector) -> TransitionAnalysis {
    let mut analysis = TransitionAnalysis::default();

    for &(dimension, label) in TRANSITION_SKILLS {
        let user_skill = profile[dimension];
        let job_requirement = job[dimension];

        if user_skill > TRANSFERABLE_FLOOR && job_requirement > TRANSFERABLE_FLOOR {
            analysis.transferable_skills.push(label.to_string());
        } else if user_skill < GAP_PROFILE_CEILING && job_requirement > GAP_JOB_FLOOR {
            analysis.skill_gaps.push(label.to_string());
        }
    }

    analysis
}

/// Scores every job against the profile and sorts by match score, best first.
/// Ties keep their input order.
pub fn get_career_matches(profile: &UserProfile, jobs: &[JobWithVector]) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = jobs
        .iter()
        .map(|job| {
            let similarity = cosine_similarity(&profile.vector, &job.vector);
            let match_score = calculate_match_score(similarity, profile.temperature);
            let TransitionAnalysis {
                transferable_skills,
                skill_gaps,
            } = analyze_transition(&profile.vector, &job.vector);

            CareerMatch {
                job: job.clone(),
                similarity,
                match_score,
                transferable_skills,
                skill_gaps,
                transition_difficulty: TransitionDifficulty::from_similarity(similarity),
            }
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    debug!(
        jobs = jobs.len(),
        temperature = profile.temperature,
        "Ranked career matches"
    );

    matches
}
