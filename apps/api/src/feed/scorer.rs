//! Feed similarity scorers.
//!
//! Default: `TitleHeuristicScorer`, a title-keyword estimate with a little
//! jitter so repeated feeds do not look identical. `VectorScorer` uses the
//! dense cosine when the viewer's skill vector is known.
//!
//! `AppState` holds an `Arc<dyn SimilarityScorer>`, chosen at startup via
//! `SIMILARITY_SCORER`.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::anyhow;
use rand::Rng;

use crate::feed::temperature::calculate_similarity_score;
use crate::models::job::Job;
use crate::vector::SkillVector;

/// Assigns a similarity in [0, 1] to a feed job.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, job: &Job) -> f64;

    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// Title heuristic
// ────────────────────────────────────────────────────────────────────────────

/// (title keywords, base, jitter span). First matching row wins.
const TITLE_BANDS: &[(&[&str], f64, f64)] = &[
    (&["developer", "engineer"], 0.85, 0.10),
    (&["product", "manager"], 0.55, 0.15),
    (&["designer", "ux"], 0.35, 0.10),
    (&["data", "analyst"], 0.45, 0.15),
    (&["sales", "marketing"], 0.15, 0.15),
];

const UNKNOWN_TITLE_SIMILARITY: f64 = 0.5;

/// Estimates similarity for a software-engineer viewer from the job title alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleHeuristicScorer;

impl TitleHeuristicScorer {
    /// The `[min, max)` range the scorer draws from for a title.
    pub fn range_for(title: &str) -> (f64, f64) {
        let lower = title.to_lowercase();
        TITLE_BANDS
            .iter()
            .find(|(keywords, _, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|&(_, base, span)| (base, base + span))
            .unwrap_or((UNKNOWN_TITLE_SIMILARITY, UNKNOWN_TITLE_SIMILARITY))
    }
}

impl SimilarityScorer for TitleHeuristicScorer {
    fn score(&self, job: &Job) -> f64 {
        let (min, max) = Self::range_for(&job.title);
        if max > min {
            rand::thread_rng().gen_range(min..max)
        } else {
            min
        }
    }

    fn name(&self) -> &'static str {
        "title-heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vector scorer
// ────────────────────────────────────────────────────────────────────────────

/// Scores a job by vectorising its title, description and requirements and
/// comparing against a fixed viewer vector.
#[derive(Debug, Clone)]
pub struct VectorScorer {
    pub viewer: SkillVector,
}

impl SimilarityScorer for VectorScorer {
    fn score(&self, job: &Job) -> f64 {
        let text = format!(
            "{}\n{}\n{}",
            job.title,
            job.description,
            job.requirements.join("\n")
        );
        let job_vector = crate::extraction::text_to_vector(&text);
        calculate_similarity_score(&self.viewer, &job_vector)
    }

    fn name(&self) -> &'static str {
        "vector"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Scorer backend named by `SIMILARITY_SCORER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    #[default]
    TitleHeuristic,
    Vector,
}

impl FromStr for ScorerKind {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "title" | "title-heuristic" => Ok(ScorerKind::TitleHeuristic),
            "vector" => Ok(ScorerKind::Vector),
            other => Err(anyhow!(
                "SIMILARITY_SCORER must be 'title' or 'vector', got '{other}'"
            )),
        }
    }
}

/// `viewer` is only read by the vector backend.
pub fn build_scorer(kind: ScorerKind, viewer: SkillVector) -> Arc<dyn SimilarityScorer> {
    match kind {
        ScorerKind::TitleHeuristic => Arc::new(TitleHeuristicScorer),
        ScorerKind::Vector => Arc::new(VectorScorer { viewer }),
    }
}

/// Returns copies of `jobs` with `similarity` set by `scorer`.
pub fn add_similarity_scores(jobs: &[Job], scorer: &dyn SimilarityScorer) -> Vec<Job> {
    jobs.iter()
        .map(|job| Job {
            similarity: Some(scorer.score(job)),
            ..job.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{EmploymentType, ExperienceLevel};
    use crate::vector::SkillDimension::*;

    fn job(title: &str) -> Job {
        Job {
            id: title.to_string(),
            company: "Acme".to_string(),
            title: title.to_string(),
            location: String::new(),
            description: String::new(),
            requirements: vec![],
            salary: None,
            posted_date: None,
            is_remote: false,
            employment_type: EmploymentType::FullTime,
            experience_level: ExperienceLevel::Mid,
            similarity: None,
        }
    }

    #[test]
    fn test_title_ranges() {
        assert_eq!(TitleHeuristicScorer::range_for("Backend Engineer"), (0.85, 0.95));
        assert_eq!(TitleHeuristicScorer::range_for("UX Designer").0, 0.35);
        assert_eq!(TitleHeuristicScorer::range_for("Data Analyst").0, 0.45);
        assert_eq!(TitleHeuristicScorer::range_for("Account Executive"), (0.5, 0.5));
    }

    #[test]
    fn test_engineer_title_wins_over_manager() {
        // "Engineering Manager" contains "engineer", first row wins
        assert_eq!(TitleHeuristicScorer::range_for("Engineering Manager").0, 0.85);
    }

    #[test]
    fn test_heuristic_scores_stay_in_range() {
        let jobs = vec![job("Frontend Developer"), job("Sales Lead"), job("Chef")];
        for _ in 0..20 {
            let scored = add_similarity_scores(&jobs, &TitleHeuristicScorer);
            let dev = scored[0].similarity.unwrap();
            let sales = scored[1].similarity.unwrap();
            assert!((0.85..0.95).contains(&dev), "developer scored {dev}");
            assert!((0.15..0.30).contains(&sales), "sales scored {sales}");
            assert_eq!(scored[2].similarity, Some(0.5));
        }
    }

    #[test]
    fn test_add_scores_preserves_order_and_fields() {
        let jobs = vec![job("Chef"), job("Engineer")];
        let scored = add_similarity_scores(&jobs, &TitleHeuristicScorer);
        assert_eq!(scored[0].title, "Chef");
        assert_eq!(scored[1].title, "Engineer");
        assert!(jobs[0].similarity.is_none());
    }

    #[test]
    fn test_vector_scorer_prefers_matching_job() {
        let scorer = VectorScorer {
            viewer: SkillVector::default()
                .with(Programming, 0.9)
                .with(WebDevelopment, 0.8),
        };
        let mut dev = job("Frontend Developer");
        dev.description = "React, TypeScript and JavaScript on the web".to_string();
        let mut sales = job("Account Manager");
        sales.description = "Own the revenue pipeline and client budget".to_string();
        assert!(scorer.score(&dev) > scorer.score(&sales));
    }

    #[test]
    fn test_scorer_kind_parsing() {
        assert_eq!("vector".parse::<ScorerKind>().unwrap(), ScorerKind::Vector);
        assert_eq!(" Title ".parse::<ScorerKind>().unwrap(), ScorerKind::TitleHeuristic);
        assert_eq!(ScorerKind::default(), ScorerKind::TitleHeuristic);
        let err = "llm".parse::<ScorerKind>().unwrap_err();
        assert!(err.to_string().contains("SIMILARITY_SCORER"));
    }

    #[test]
    fn test_build_scorer_picks_backend() {
        let viewer = SkillVector::default().with(Programming, 1.0);
        assert_eq!(build_scorer(ScorerKind::TitleHeuristic, viewer).name(), "title-heuristic");

        let scorer = build_scorer(ScorerKind::Vector, viewer);
        assert_eq!(scorer.name(), "vector");
        let mut dev = job("Backend Developer");
        dev.description = "Python and Rust services".to_string();
        assert!(scorer.score(&dev) > 0.0);
        assert_eq!(scorer.score(&job("Chef")), 0.0);
    }
}
