use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    /// ≤ 2 years Entry, ≤ 5 Mid, ≤ 8 Senior, otherwise Lead.
    pub fn from_required_years(years: f64) -> Self {
        if years <= 2.0 {
            ExperienceLevel::Entry
        } else if years <= 5.0 {
            ExperienceLevel::Mid
        } else if years <= 8.0 {
            ExperienceLevel::Senior
        } else {
            ExperienceLevel::Lead
        }
    }
}

/// A swipeable job card in the live feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default = "default_employment_type")]
    pub employment_type: EmploymentType,
    #[serde(default = "default_experience_level")]
    pub experience_level: ExperienceLevel,
    /// Precomputed similarity to the viewer; absent counts as 0 when filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

fn default_employment_type() -> EmploymentType {
    EmploymentType::FullTime
}

fn default_experience_level() -> ExperienceLevel {
    ExperienceLevel::Mid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_breakpoints() {
        assert_eq!(ExperienceLevel::from_required_years(0.0), ExperienceLevel::Entry);
        assert_eq!(ExperienceLevel::from_required_years(2.0), ExperienceLevel::Entry);
        assert_eq!(ExperienceLevel::from_required_years(4.5), ExperienceLevel::Mid);
        assert_eq!(ExperienceLevel::from_required_years(8.0), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::from_required_years(12.0), ExperienceLevel::Lead);
    }

    #[test]
    fn test_minimal_job_deserializes_with_defaults() {
        let job: Job =
            serde_json::from_str(r#"{"id": "1", "company": "Acme", "title": "Sales Manager"}"#)
                .unwrap();
        assert_eq!(job.similarity, None);
        assert_eq!(job.employment_type, EmploymentType::FullTime);
        assert!(job.requirements.is_empty());
    }

    #[test]
    fn test_employment_type_wire_names() {
        let json = serde_json::to_string(&EmploymentType::PartTime).unwrap();
        assert_eq!(json, r#""Part-time""#);
    }
}
