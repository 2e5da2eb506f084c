use super::domain::{Certificate, CourseId, Enrollment, UserId};

/// Storage abstraction so the enrollment service can be exercised in
/// isolation; the managed backend adapter lives outside the library.
pub trait CourseRepository: Send + Sync {
    fn insert(&self, enrollment: Enrollment) -> Result<Enrollment, RepositoryError>;
    fn update(&self, enrollment: Enrollment) -> Result<(), RepositoryError>;
    fn fetch(&self, user: &UserId, course: &CourseId)
        -> Result<Option<Enrollment>, RepositoryError>;
    fn for_user(&self, user: &UserId) -> Result<Vec<Enrollment>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("enrollment already exists")]
    Conflict,
    #[error("enrollment not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound certificate hook (PDF rendering and storage live elsewhere).
pub trait CertificateIssuer: Send + Sync {
    fn existing(&self, user: &UserId, course: &CourseId) -> Result<bool, CertificateError>;
    fn issue(&self, certificate: Certificate) -> Result<(), CertificateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    #[error("certificate store unavailable: {0}")]
    Unavailable(String),
}
