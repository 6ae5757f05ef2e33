pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feed::handlers as feed;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profiles and matching
        .route("/api/v1/profile/parse", post(matching::handle_parse_profile))
        .route("/api/v1/jobs/vectorize", post(matching::handle_vectorize_job))
        .route("/api/v1/matches", post(matching::handle_matches))
        .route("/api/v1/career-paths", post(matching::handle_career_paths))
        .route("/api/v1/skill-gaps", post(matching::handle_skill_gaps))
        .route("/api/v1/similarity", post(matching::handle_similarity))
        .route(
            "/api/v1/role-categories/:name",
            get(matching::handle_role_category),
        )
        // Feed
        .route("/api/v1/feed", get(feed::handle_feed))
        .route("/api/v1/feed/score", post(feed::handle_score_jobs))
        .route("/api/v1/feed/filter", post(feed::handle_filter_jobs))
        .route("/api/v1/feed/:id/reject", post(feed::handle_reject_job))
        .route(
            "/api/v1/feed/rejections",
            get(feed::handle_list_rejections).delete(feed::handle_clear_rejections),
        )
        .with_state(state)
}
