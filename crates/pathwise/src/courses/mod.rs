//! Course enrollment and progress tracking: repository/issuer traits, the
//! enrollment service, and its HTTP router.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{
    Certificate, CourseId, CourseSummary, DifficultyTier, Enrollment, EnrollmentStatus, UserId,
};
pub use repository::{CertificateError, CertificateIssuer, CourseRepository, RepositoryError};
pub use router::course_router;
pub use service::{EnrollmentError, EnrollmentService, ProgressUpdate};
