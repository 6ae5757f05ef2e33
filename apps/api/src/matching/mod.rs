//! Career matching engine — profiles, job vectors, temperature-aware ranking,
//! career-path suggestions and skill-gap analysis.

pub mod engine;
pub mod gaps;
pub mod handlers;
pub mod models;
pub mod paths;

pub use engine::{create_job_vector, get_career_matches, parse_resume};
pub use gaps::analyze_skill_gaps;
pub use models::{CareerMatch, CareerTransition, JobWithVector, SkillGapAnalysis, UserProfile};
pub use paths::suggest_career_paths;
