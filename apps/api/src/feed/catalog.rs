//! Job catalog — the source of postings the feed and matcher rank.
//!
//! Default: `StaticCatalog::builtin()`, ten hand-authored roles spanning
//! close and distant pivots for a software engineer. `CATALOG_PATH` swaps in
//! a JSON file of `JobWithVector` records.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::matching::{JobWithVector, UserProfile};
use crate::vector::{SkillDimension, SkillVector};

/// Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<JobWithVector>, AppError>;
}

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    jobs: Vec<JobWithVector>,
}

impl StaticCatalog {
    pub fn new(jobs: Vec<JobWithVector>) -> Self {
        Self { jobs }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_jobs())
    }

    /// Loads a JSON array of job records.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let jobs: Vec<JobWithVector> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        info!("Loaded {} jobs from {}", jobs.len(), path.display());
        Ok(Self::new(jobs))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[async_trait]
impl JobSource for StaticCatalog {
    async fn fetch_jobs(&self) -> Result<Vec<JobWithVector>, AppError> {
        Ok(self.jobs.clone())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in data
// ────────────────────────────────────────────────────────────────────────────

fn catalog_job(
    id: &str,
    title: &str,
    company: &str,
    required_experience: f64,
    weights: &[(SkillDimension, f64)],
) -> JobWithVector {
    let vector = weights
        .iter()
        .fold(SkillVector::default(), |v, &(d, w)| v.with(d, w));
    JobWithVector {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        vector,
        required_experience,
        description: None,
        location: None,
        salary: None,
        posted_at: None,
    }
}

fn builtin_jobs() -> Vec<JobWithVector> {
    use SkillDimension::*;

    vec![
        catalog_job("1", "Senior Software Engineer", "TechCorp", 5.0, &[
            (Programming, 0.95),
            (WebDevelopment, 0.85),
            (CloudComputing, 0.7),
            (Leadership, 0.4),
            (ProblemSolving, 0.85),
        ]),
        catalog_job("2", "Full Stack Developer", "StartupXYZ", 4.0, &[
            (Programming, 0.85),
            (WebDevelopment, 0.9),
            (Databases, 0.7),
            (ProblemSolving, 0.8),
        ]),
        catalog_job("3", "Technical Product Manager", "ProductCo", 4.0, &[
            (Programming, 0.4),
            (ProjectManagement, 0.8),
            (Communication, 0.8),
            (Leadership, 0.6),
            (ProblemSolving, 0.7),
        ]),
        catalog_job("4", "DevOps Engineer", "CloudFirst", 3.0, &[
            (Programming, 0.7),
            (CloudComputing, 0.9),
            (DevOps, 0.95),
            (ProblemSolving, 0.8),
        ]),
        catalog_job("5", "Solutions Architect", "Enterprise Inc", 6.0, &[
            (Programming, 0.6),
            (CloudComputing, 0.8),
            (Communication, 0.7),
            (Leadership, 0.5),
            (ProblemSolving, 0.9),
        ]),
        catalog_job("6", "Data Scientist", "DataDriven", 3.0, &[
            (Programming, 0.7),
            (DataAnalysis, 0.9),
            (MachineLearning, 0.8),
            (Research, 0.7),
            (ProblemSolving, 0.85),
        ]),
        catalog_job("7", "UX Engineer", "DesignTech", 3.0, &[
            (Programming, 0.5),
            (WebDevelopment, 0.6),
            (Design, 0.7),
            (Creativity, 0.6),
            (ProblemSolving, 0.6),
        ]),
        catalog_job("8", "Technical Writer", "DocuCorp", 2.0, &[
            (Programming, 0.3),
            (Writing, 0.9),
            (Communication, 0.9),
            (Research, 0.6),
        ]),
        catalog_job("9", "Developer Relations", "APIFirst", 4.0, &[
            (Programming, 0.5),
            (Communication, 0.9),
            (Writing, 0.7),
            (Teaching, 0.8),
            (Marketing, 0.4),
        ]),
        catalog_job("10", "Sales Engineer", "SalesTech", 3.0, &[
            (Programming, 0.4),
            (Communication, 0.8),
            (Sales, 0.7),
            (ProblemSolving, 0.6),
        ]),
    ]
}

/// Viewer used by the feed when the caller does not send a profile.
pub fn demo_profile(temperature: f64) -> UserProfile {
    use SkillDimension::*;

    UserProfile {
        id: "demo".to_string(),
        current_role: "Software Engineer".to_string(),
        years_experience: 5.0,
        skills: ["javascript", "react", "node.js", "aws"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        vector: SkillVector::default()
            .with(Programming, 0.9)
            .with(WebDevelopment, 0.8)
            .with(CloudComputing, 0.6)
            .with(Leadership, 0.3)
            .with(Communication, 0.5)
            .with(ProblemSolving, 0.8)
            .with(Teamwork, 0.6),
        temperature,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_builtin_catalog_has_ten_distinct_jobs() {
        let jobs = StaticCatalog::builtin().fetch_jobs().await.unwrap();
        assert_eq!(jobs.len(), 10);
        let mut ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert_eq!(jobs[0].title, "Senior Software Engineer");
        assert_eq!(jobs[9].title, "Sales Engineer");
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "x1", "title": "Nurse Educator", "company": "City Hospital",
                 "vector": {{"healthcare": 0.9, "teaching": 0.7}},
                 "requiredExperience": 3,
                 "postedAt": "2026-01-15T00:00:00Z"}}]"#
        )
        .unwrap();

        let catalog = StaticCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let job = &catalog.jobs[0];
        assert_eq!(job.vector[SkillDimension::Healthcare], 0.9);
        assert_eq!(job.required_experience, 3.0);
        assert!(job.posted_at.is_some());
    }

    #[test]
    fn test_from_json_file_rejects_unknown_dimension() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "x", "title": "T", "company": "C",
                 "vector": {{"juggling": 1.0}}, "requiredExperience": 0}}]"#
        )
        .unwrap();
        assert!(StaticCatalog::from_json_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StaticCatalog::from_json_file(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[test]
    fn test_demo_profile_carries_temperature() {
        let profile = demo_profile(0.8);
        assert_eq!(profile.temperature, 0.8);
        assert_eq!(profile.vector[SkillDimension::Programming], 0.9);
    }
}
