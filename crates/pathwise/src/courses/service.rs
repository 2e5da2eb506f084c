use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Certificate, CourseId, Enrollment, EnrollmentStatus, UserId};
use super::repository::{CertificateError, CertificateIssuer, CourseRepository, RepositoryError};

/// Service composing the enrollment repository and certificate issuer.
pub struct EnrollmentService<R, C> {
    repository: Arc<R>,
    certificates: Arc<C>,
}

/// Result of a progress update; carries the certificate when completion
/// triggered a fresh issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub enrollment: Enrollment,
    pub certificate: Option<Certificate>,
}

impl<R, C> EnrollmentService<R, C>
where
    R: CourseRepository + 'static,
    C: CertificateIssuer + 'static,
{
    pub fn new(repository: Arc<R>, certificates: Arc<C>) -> Self {
        Self {
            repository,
            certificates,
        }
    }

    /// Enroll a learner, rejecting duplicates.
    pub fn enroll(
        &self,
        user: UserId,
        course: CourseId,
        today: NaiveDate,
    ) -> Result<Enrollment, EnrollmentError> {
        if self.repository.fetch(&user, &course)?.is_some() {
            return Err(EnrollmentError::AlreadyEnrolled);
        }
        let enrollment = Enrollment::started(user, course, today);
        let stored = self.repository.insert(enrollment)?;
        Ok(stored)
    }

    /// Record progress for an existing enrollment. Reaching 100 marks the
    /// enrollment completed and issues a certificate exactly once.
    pub fn update_progress(
        &self,
        user: &UserId,
        course: &CourseId,
        progress: u8,
        today: NaiveDate,
    ) -> Result<ProgressUpdate, EnrollmentError> {
        if progress > 100 {
            return Err(EnrollmentError::InvalidProgress(progress));
        }

        let mut enrollment = self
            .repository
            .fetch(user, course)?
            .ok_or(EnrollmentError::NotEnrolled)?;

        enrollment.progress_percentage = progress;
        if progress == 100 {
            enrollment.status = EnrollmentStatus::Completed;
            enrollment.completed_at = Some(today);
        } else {
            enrollment.status = EnrollmentStatus::Active;
            enrollment.completed_at = None;
        }
        self.repository.update(enrollment.clone())?;

        let certificate = if progress == 100 && !self.certificates.existing(user, course)? {
            let certificate = Certificate::for_completion(user.clone(), course.clone(), today);
            self.certificates.issue(certificate.clone())?;
            Some(certificate)
        } else {
            None
        };

        Ok(ProgressUpdate {
            enrollment,
            certificate,
        })
    }

    /// Current enrollments for a learner.
    pub fn enrollments(&self, user: &UserId) -> Result<Vec<Enrollment>, EnrollmentError> {
        Ok(self.repository.for_user(user)?)
    }
}

/// Error raised by the enrollment service.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    #[error("user is already enrolled in this course")]
    AlreadyEnrolled,
    #[error("user is not enrolled in this course")]
    NotEnrolled,
    #[error("progress must be between 0 and 100, got {0}")]
    InvalidProgress(u8),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
}
