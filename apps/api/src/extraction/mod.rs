//! Skill extraction — keyword dictionaries and free-text heuristics that turn
//! resumes and job descriptions into skills, skill vectors, years and roles.

pub mod experience;
pub mod keywords;
pub mod skills;

pub use experience::{extract_years_of_experience, identify_current_role};
pub use keywords::role_category_vector;
pub use skills::{extract_skills_from_text, text_to_vector};
