use std::collections::HashSet;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::{validate_temperature, AppError};
use crate::feed::catalog::demo_profile;
use crate::feed::listing::{
    filter_jobs_by_experience_level, filter_jobs_by_location, sort_jobs_by_date, to_listing,
};
use crate::feed::scorer::add_similarity_scores;
use crate::feed::temperature::filter_jobs_by_temperature;
use crate::matching::get_career_matches;
use crate::models::job::{ExperienceLevel, Job};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub temperature: Option<f64>,
    pub location: Option<String>,
    /// Comma-separated, e.g. `Mid,Senior`.
    pub experience_level: Option<String>,
    /// Also restrict to the temperature's similarity band.
    #[serde(default)]
    pub bucket: bool,
    /// Newest postings first instead of match-score order.
    #[serde(default)]
    pub sort_by_date: bool,
}

#[derive(Deserialize)]
pub struct ScoreJobsRequest {
    pub jobs: Vec<Job>,
}

#[derive(Deserialize)]
pub struct FilterJobsRequest {
    pub jobs: Vec<Job>,
    pub temperature: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectResponse {
    pub job_id: String,
    /// False when the job had already been rejected.
    pub newly_rejected: bool,
}

fn parse_experience_levels(raw: &str) -> Result<HashSet<ExperienceLevel>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            serde_json::from_value(Value::String(s.to_string()))
                .map_err(|_| AppError::Validation(format!("unknown experience level '{s}'")))
        })
        .collect()
}

/// GET /api/v1/feed
pub async fn handle_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    let temperature =
        validate_temperature(query.temperature.unwrap_or(state.config.default_temperature))?;
    let levels = match query.experience_level.as_deref() {
        Some(raw) => parse_experience_levels(raw)?,
        None => HashSet::new(),
    };

    let catalog = state.jobs.fetch_jobs().await?;
    let candidates = state
        .rejections
        .retain_unrejected(catalog, |job| job.id.as_str())
        .await;

    let profile = demo_profile(temperature);
    let mut listings: Vec<Job> = get_career_matches(&profile, &candidates)
        .iter()
        .map(to_listing)
        .collect();

    if query.bucket {
        listings = filter_jobs_by_temperature(&listings, temperature);
    }
    if let Some(location) = query.location.as_deref() {
        listings = filter_jobs_by_location(&listings, location);
    }
    listings = filter_jobs_by_experience_level(&listings, &levels);
    if query.sort_by_date {
        sort_jobs_by_date(&mut listings);
    }

    info!(
        candidates = candidates.len(),
        returned = listings.len(),
        temperature,
        bucket = query.bucket,
        "Built feed"
    );
    Ok(Json(listings))
}

/// POST /api/v1/feed/score
pub async fn handle_score_jobs(
    State(state): State<AppState>,
    Json(req): Json<ScoreJobsRequest>,
) -> Json<Vec<Job>> {
    let scored = add_similarity_scores(&req.jobs, state.scorer.as_ref());
    info!(jobs = scored.len(), scorer = state.scorer.name(), "Scored jobs");
    Json(scored)
}

/// POST /api/v1/feed/filter
pub async fn handle_filter_jobs(
    Json(req): Json<FilterJobsRequest>,
) -> Result<Json<Vec<Job>>, AppError> {
    let temperature = validate_temperature(req.temperature)?;
    Ok(Json(filter_jobs_by_temperature(&req.jobs, temperature)))
}

/// POST /api/v1/feed/:id/reject
pub async fn handle_reject_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<RejectResponse>, AppError> {
    let known = state
        .jobs
        .fetch_jobs()
        .await?
        .iter()
        .any(|job| job.id == job_id);
    if !known {
        return Err(AppError::NotFound(format!("job '{job_id}'")));
    }

    let newly_rejected = state.rejections.reject(&job_id).await;
    info!(job_id = %job_id, newly_rejected, "Job rejected");
    Ok(Json(RejectResponse {
        job_id,
        newly_rejected,
    }))
}

/// GET /api/v1/feed/rejections
pub async fn handle_list_rejections(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "rejected": state.rejections.list().await }))
}

/// DELETE /api/v1/feed/rejections
pub async fn handle_clear_rejections(State(state): State<AppState>) -> Json<Value> {
    let cleared = state.rejections.clear().await;
    info!(cleared, "Rejections cleared");
    Json(json!({ "cleared": cleared }))
}
