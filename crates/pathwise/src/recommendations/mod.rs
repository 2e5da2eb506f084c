//! Rule-based course recommendation ranking.

pub mod domain;
pub mod engine;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    CourseDataProvider, CourseHistory, DataUnavailable, LearnerProfile, Priority, Recommendation,
};
pub use engine::{onboarding_recommendations, RecommendationConfig, RecommendationEngine};
