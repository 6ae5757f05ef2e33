use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vector::SkillVector;

/// A candidate: parsed from a resume or constructed directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub current_role: String,
    pub years_experience: f64,
    /// Lowercase canonical skill tokens.
    #[serde(default)]
    pub skills: Vec<String>,
    pub vector: SkillVector,
    /// 0 = similar roles, 1 = complete reinvention. Re-read on every matching call.
    pub temperature: f64,
}

/// A job posting with its skill vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobWithVector {
    pub id: String,
    pub title: String,
    pub company: String,
    pub vector: SkillVector,
    pub required_experience: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

/// Ordinal difficulty of moving into a role, derived from raw similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransitionDifficulty {
    Easy,
    Moderate,
    Challenging,
    Difficult,
}

impl TransitionDifficulty {
    /// > 0.8 Easy, > 0.6 Moderate, > 0.4 Challenging, otherwise Difficult.
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity > 0.8 {
            TransitionDifficulty::Easy
        } else if similarity > 0.6 {
            TransitionDifficulty::Moderate
        } else if similarity > 0.4 {
            TransitionDifficulty::Challenging
        } else {
            TransitionDifficulty::Difficult
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransitionDifficulty::Easy => "Easy",
            TransitionDifficulty::Moderate => "Moderate",
            TransitionDifficulty::Challenging => "Challenging",
            TransitionDifficulty::Difficult => "Difficult",
        }
    }
}

/// A job annotated for one profile. Computed per matching call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    #[serde(flatten)]
    pub job: JobWithVector,
    /// Active-dimension cosine similarity, in [-1, 1].
    pub similarity: f64,
    /// Temperature-adjusted desirability, in [0, 1].
    pub match_score: f64,
    pub transferable_skills: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub transition_difficulty: TransitionDifficulty,
}

/// A canned career move suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTransition {
    pub target_role: String,
    /// Illustrative only; not computed from the vector space.
    pub similarity: f64,
    pub steps: Vec<String>,
    pub estimated_time: String,
    pub difficulty: TransitionDifficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapAnalysis {
    pub missing: Vec<String>,
    pub transferable: Vec<String>,
    /// Normalized distance between the two vectors, in [0, 1].
    pub overall_gap: f64,
}
