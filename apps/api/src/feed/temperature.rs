//! Temperature-based feed filtering.
//!
//! Low temperature keeps the feed close to the viewer's current skills,
//! high temperature surfaces distant pivots. Bands overlap in the middle so
//! neighbouring temperatures share some jobs.

use crate::models::job::Job;
use crate::vector::{SkillDimension, SkillVector};

/// Inclusive similarity interval a temperature admits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityBand {
    pub min: f64,
    pub max: f64,
}

impl SimilarityBand {
    pub fn contains(&self, similarity: f64) -> bool {
        similarity >= self.min && similarity <= self.max
    }
}

/// Maps a temperature to its band. Out-of-range values fall into the
/// first or last band.
pub fn similarity_band(temperature: f64) -> SimilarityBand {
    let (min, max) = if temperature < 0.2 {
        (0.8, 1.0)
    } else if temperature < 0.4 {
        (0.6, 0.8)
    } else if temperature < 0.6 {
        (0.4, 0.7)
    } else if temperature < 0.8 {
        (0.2, 0.5)
    } else {
        (0.0, 0.4)
    };
    SimilarityBand { min, max }
}

/// Dense cosine over all dimensions, absent weights counted as zero.
///
/// Unlike [`crate::vector::cosine_similarity`] this does not restrict the dot
/// product to shared dimensions, so a job demanding skills the viewer lacks
/// scores lower.
pub fn calculate_similarity_score(user: &SkillVector, job: &SkillVector) -> f64 {
    let user_scale = user.max_abs();
    let job_scale = job.max_abs();
    if user_scale == 0.0 || job_scale == 0.0 {
        return 0.0;
    }

    // Each side divided by its largest weight so products neither overflow
    // nor underflow; the cosine itself is unchanged.
    let mut dot = 0.0;
    let mut user_norm = 0.0;
    let mut job_norm = 0.0;
    for dimension in SkillDimension::ALL {
        let u = user[dimension] / user_scale;
        let j = job[dimension] / job_scale;
        dot += u * j;
        user_norm += u * u;
        job_norm += j * j;
    }
    (dot / (user_norm.sqrt() * job_norm.sqrt())).clamp(-1.0, 1.0)
}

/// Keeps jobs whose similarity lies inside the temperature's band, in input order.
/// Jobs without a precomputed similarity are treated as 0.
pub fn filter_jobs_by_temperature(jobs: &[Job], temperature: f64) -> Vec<Job> {
    let band = similarity_band(temperature);
    jobs.iter()
        .filter(|job| band.contains(job.similarity.unwrap_or(0.0)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{EmploymentType, ExperienceLevel};
    use crate::vector::SkillDimension::*;

    fn job(id: &str, similarity: Option<f64>) -> Job {
        Job {
            id: id.to_string(),
            company: "Acme".to_string(),
            title: format!("Role {id}"),
            location: "Remote".to_string(),
            description: String::new(),
            requirements: vec![],
            salary: None,
            posted_date: None,
            is_remote: true,
            employment_type: EmploymentType::FullTime,
            experience_level: ExperienceLevel::Mid,
            similarity,
        }
    }

    fn sample_jobs() -> Vec<Job> {
        vec![
            job("a", Some(0.95)),
            job("b", Some(0.65)),
            job("c", Some(0.35)),
            job("d", Some(0.45)),
            job("e", Some(0.15)),
        ]
    }

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn test_low_temperature_keeps_close_matches() {
        let filtered = filter_jobs_by_temperature(&sample_jobs(), 0.1);
        assert_eq!(ids(&filtered), vec!["a"]);
    }

    #[test]
    fn test_middle_temperature_keeps_moderate_matches() {
        let filtered = filter_jobs_by_temperature(&sample_jobs(), 0.5);
        assert_eq!(ids(&filtered), vec!["b", "d"]);
    }

    #[test]
    fn test_high_temperature_keeps_distant_matches() {
        let filtered = filter_jobs_by_temperature(&sample_jobs(), 0.9);
        assert_eq!(ids(&filtered), vec!["c", "e"]);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let jobs = vec![job("lo", Some(0.4)), job("hi", Some(0.7))];
        let filtered = filter_jobs_by_temperature(&jobs, 0.5);
        assert_eq!(ids(&filtered), vec!["lo", "hi"]);
    }

    #[test]
    fn test_missing_similarity_counts_as_zero() {
        let jobs = vec![job("unscored", None)];
        assert_eq!(filter_jobs_by_temperature(&jobs, 0.9).len(), 1);
        assert!(filter_jobs_by_temperature(&jobs, 0.5).is_empty());
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(similarity_band(0.2), SimilarityBand { min: 0.6, max: 0.8 });
        assert_eq!(similarity_band(0.8), SimilarityBand { min: 0.0, max: 0.4 });
        assert_eq!(similarity_band(-1.0), SimilarityBand { min: 0.8, max: 1.0 });
    }

    #[test]
    fn test_similar_vectors_score_high() {
        let user = SkillVector::default()
            .with(Programming, 0.9)
            .with(WebDevelopment, 0.8)
            .with(ProblemSolving, 0.7);
        let job = SkillVector::default()
            .with(Programming, 0.85)
            .with(WebDevelopment, 0.9)
            .with(ProblemSolving, 0.6);
        assert!(calculate_similarity_score(&user, &job) > 0.8);
    }

    #[test]
    fn test_different_vectors_score_low() {
        let user = SkillVector::default()
            .with(Programming, 0.9)
            .with(WebDevelopment, 0.8);
        let job = SkillVector::default()
            .with(Sales, 0.9)
            .with(Communication, 0.8)
            .with(Programming, 0.2);
        assert!(calculate_similarity_score(&user, &job) < 0.6);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let user = SkillVector::default();
        let job = SkillVector::default().with(Sales, 1.0);
        assert_eq!(calculate_similarity_score(&user, &job), 0.0);
    }

    #[test]
    fn test_extreme_weights_score_finite() {
        let big = SkillVector::default()
            .with(Programming, 1e200)
            .with(Sales, 1e200);
        assert!((calculate_similarity_score(&big, &big) - 1.0).abs() < 1e-9);

        let tiny = SkillVector::default().with(Programming, 1e-200);
        assert!((calculate_similarity_score(&tiny, &tiny) - 1.0).abs() < 1e-9);
        assert!((calculate_similarity_score(&tiny, &big) - 1.0 / 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_dense_cosine_penalises_unshared_dimensions() {
        let user = SkillVector::default().with(Programming, 1.0);
        let job = SkillVector::default()
            .with(Programming, 1.0)
            .with(Sales, 1.0);
        let score = calculate_similarity_score(&user, &job);
        assert!((score - 1.0 / 2f64.sqrt()).abs() < 1e-9);
    }
}
