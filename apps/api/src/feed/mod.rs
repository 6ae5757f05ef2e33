//! Live job feed — temperature bands, similarity scoring, listings and
//! swipe rejections.

pub mod catalog;
pub mod handlers;
pub mod listing;
pub mod rejections;
pub mod scorer;
pub mod temperature;
