use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{validate_temperature, AppError};
use crate::extraction::role_category_vector;
use crate::feed::temperature::calculate_similarity_score;
use crate::matching::{
    analyze_skill_gaps, create_job_vector, get_career_matches, parse_resume,
    suggest_career_paths, CareerMatch, CareerTransition, JobWithVector, SkillGapAnalysis,
    UserProfile,
};
use crate::state::AppState;
use crate::vector::SkillVector;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseProfileRequest {
    pub resume_text: String,
}

#[derive(Deserialize)]
pub struct VectorizeJobRequest {
    pub description: String,
}

#[derive(Deserialize)]
pub struct MatchRequest {
    pub profile: UserProfile,
    /// Defaults to the configured catalog minus rejected jobs.
    pub jobs: Option<Vec<JobWithVector>>,
    /// Overrides `profile.temperature` for this call.
    pub temperature: Option<f64>,
}

#[derive(Deserialize)]
pub struct CareerPathsRequest {
    pub profile: UserProfile,
}

#[derive(Deserialize)]
pub struct SkillGapRequest {
    pub current: SkillVector,
    pub target: SkillVector,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityRequest {
    pub user_vector: SkillVector,
    pub job_vector: SkillVector,
}

#[derive(Serialize)]
pub struct SimilarityResponse {
    pub similarity: f64,
}

/// POST /api/v1/profile/parse
pub async fn handle_parse_profile(
    State(state): State<AppState>,
    Json(req): Json<ParseProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText must not be empty".to_string()));
    }
    let mut profile = parse_resume(&req.resume_text);
    profile.temperature = state.config.default_temperature;
    info!(profile_id = %profile.id, role = %profile.current_role, "Profile parsed");
    Ok(Json(profile))
}

/// POST /api/v1/jobs/vectorize
pub async fn handle_vectorize_job(
    Json(req): Json<VectorizeJobRequest>,
) -> Result<Json<JobWithVector>, AppError> {
    if req.description.trim().is_empty() {
        return Err(AppError::Validation("description must not be empty".to_string()));
    }
    Ok(Json(create_job_vector(&req.description)))
}

/// POST /api/v1/matches
pub async fn handle_matches(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<Vec<CareerMatch>>, AppError> {
    let mut profile = req.profile;
    profile.temperature = validate_temperature(req.temperature.unwrap_or(profile.temperature))?;

    let jobs = match req.jobs {
        Some(jobs) => jobs,
        None => {
            let catalog = state.jobs.fetch_jobs().await?;
            state
                .rejections
                .retain_unrejected(catalog, |job| job.id.as_str())
                .await
        }
    };

    let matches = get_career_matches(&profile, &jobs);
    info!(
        jobs = jobs.len(),
        temperature = profile.temperature,
        "Ranked career matches"
    );
    Ok(Json(matches))
}

/// POST /api/v1/career-paths
pub async fn handle_career_paths(
    Json(req): Json<CareerPathsRequest>,
) -> Result<Json<Vec<CareerTransition>>, AppError> {
    validate_temperature(req.profile.temperature)?;
    Ok(Json(suggest_career_paths(&req.profile)))
}

/// POST /api/v1/skill-gaps
pub async fn handle_skill_gaps(Json(req): Json<SkillGapRequest>) -> Json<SkillGapAnalysis> {
    Json(analyze_skill_gaps(&req.current, &req.target))
}

/// POST /api/v1/similarity
pub async fn handle_similarity(Json(req): Json<SimilarityRequest>) -> Json<SimilarityResponse> {
    Json(SimilarityResponse {
        similarity: calculate_similarity_score(&req.user_vector, &req.job_vector),
    })
}

/// GET /api/v1/role-categories/:name
/// Preset vector for a broad role family (developer, manager, designer,
/// dataScientist, productManager).
pub async fn handle_role_category(Path(name): Path<String>) -> Result<Json<SkillVector>, AppError> {
    role_category_vector(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("role category '{name}'")))
}
