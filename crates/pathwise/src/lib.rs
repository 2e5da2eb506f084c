//! Pathwise domain library: assessment scoring, course recommendations,
//! enrollment tracking, and learning analytics for the professional
//! development platform.
//!
//! Everything here is synchronous and side-effect free; persistence and
//! transport live behind the traits in [`courses`] and [`recommendations`]
//! and in the `pathwise-api` service crate.

pub mod analytics;
pub mod assessments;
pub mod config;
pub mod courses;
pub mod error;
pub mod recommendations;
pub mod telemetry;
