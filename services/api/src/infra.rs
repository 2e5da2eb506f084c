use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use pathwise::assessments::ConflictMode;
use pathwise::courses::{
    Certificate, CertificateError, CertificateIssuer, CourseId, CourseRepository, CourseSummary,
    DifficultyTier, Enrollment, EnrollmentStatus, RepositoryError, UserId,
};
use pathwise::recommendations::{
    CourseDataProvider, CourseHistory, DataUnavailable, LearnerProfile,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCourseRepository {
    rows: Arc<Mutex<HashMap<(UserId, CourseId), Enrollment>>>,
}

impl CourseRepository for InMemoryCourseRepository {
    fn insert(&self, enrollment: Enrollment) -> Result<Enrollment, RepositoryError> {
        let mut guard = self.rows.lock().expect("repository mutex poisoned");
        let key = (enrollment.user_id.clone(), enrollment.course_id.clone());
        if guard.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(key, enrollment.clone());
        Ok(enrollment)
    }

    fn update(&self, enrollment: Enrollment) -> Result<(), RepositoryError> {
        let mut guard = self.rows.lock().expect("repository mutex poisoned");
        let key = (enrollment.user_id.clone(), enrollment.course_id.clone());
        if guard.contains_key(&key) {
            guard.insert(key, enrollment);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(
        &self,
        user: &UserId,
        course: &CourseId,
    ) -> Result<Option<Enrollment>, RepositoryError> {
        let guard = self.rows.lock().expect("repository mutex poisoned");
        Ok(guard.get(&(user.clone(), course.clone())).cloned())
    }

    fn for_user(&self, user: &UserId) -> Result<Vec<Enrollment>, RepositoryError> {
        let guard = self.rows.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|enrollment| &enrollment.user_id == user)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCertificateStore {
    issued: Arc<Mutex<Vec<Certificate>>>,
}

impl CertificateIssuer for InMemoryCertificateStore {
    fn existing(&self, user: &UserId, course: &CourseId) -> Result<bool, CertificateError> {
        let guard = self.issued.lock().expect("certificate mutex poisoned");
        Ok(guard
            .iter()
            .any(|certificate| &certificate.user_id == user && &certificate.course_id == course))
    }

    fn issue(&self, certificate: Certificate) -> Result<(), CertificateError> {
        let mut guard = self.issued.lock().expect("certificate mutex poisoned");
        guard.push(certificate);
        Ok(())
    }
}

/// In-memory course data source: assessment signals recorded by the scoring
/// endpoints, course history derived from live enrollments, and a seeded
/// catalog.
#[derive(Clone)]
pub(crate) struct InMemoryCourseData {
    profiles: Arc<Mutex<HashMap<String, LearnerProfile>>>,
    repository: Arc<InMemoryCourseRepository>,
    catalog: Vec<CourseSummary>,
}

impl InMemoryCourseData {
    pub(crate) fn new(repository: Arc<InMemoryCourseRepository>) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(HashMap::new())),
            repository,
            catalog: default_catalog(),
        }
    }

    pub(crate) fn record_personality_type(&self, user: &str, type_code: String) {
        let mut guard = self.profiles.lock().expect("profile mutex poisoned");
        guard.entry(user.to_string()).or_default().personality_type = Some(type_code);
    }

    pub(crate) fn record_conflict_mode(&self, user: &str, mode: ConflictMode) {
        let mut guard = self.profiles.lock().expect("profile mutex poisoned");
        guard.entry(user.to_string()).or_default().conflict_mode = Some(mode);
    }
}

impl CourseDataProvider for InMemoryCourseData {
    fn learner_profile(&self, user: &str) -> Result<LearnerProfile, DataUnavailable> {
        let guard = self.profiles.lock().expect("profile mutex poisoned");
        Ok(guard.get(user).cloned().unwrap_or_default())
    }

    fn course_history(&self, user: &str) -> Result<CourseHistory, DataUnavailable> {
        let enrollments = self
            .repository
            .for_user(&UserId(user.to_string()))
            .map_err(|err| DataUnavailable(err.to_string()))?;
        let mut history = CourseHistory::default();
        for enrollment in enrollments {
            match enrollment.status {
                EnrollmentStatus::Active => history.in_progress.push(enrollment.course_id),
                EnrollmentStatus::Completed => history.completed.push(enrollment.course_id),
            }
        }
        Ok(history)
    }

    fn catalog(&self) -> Result<Vec<CourseSummary>, DataUnavailable> {
        Ok(self.catalog.clone())
    }
}

fn summary(id: &str, title: &str, category: &str, difficulty: DifficultyTier) -> CourseSummary {
    CourseSummary {
        id: CourseId(id.to_string()),
        title: title.to_string(),
        category: category.to_string(),
        difficulty,
    }
}

pub(crate) fn default_catalog() -> Vec<CourseSummary> {
    vec![
        summary(
            "strategy-201",
            "Strategic Thinking in Practice",
            "Strategy",
            DifficultyTier::Intermediate,
        ),
        summary(
            "strategy-301",
            "Long-Range Product Strategy",
            "Strategy",
            DifficultyTier::Advanced,
        ),
        summary(
            "comm-101",
            "Foundations of Workplace Communication",
            "Communication",
            DifficultyTier::Beginner,
        ),
        summary(
            "comm-201",
            "Persuasive Presentations",
            "Communication",
            DifficultyTier::Intermediate,
        ),
        summary(
            "tech-201",
            "Data Analysis Essentials",
            "Technical",
            DifficultyTier::Intermediate,
        ),
        summary(
            "tech-301",
            "Systems Architecture",
            "Technical",
            DifficultyTier::Advanced,
        ),
        summary(
            "lead-101",
            "Introduction to People Leadership",
            "Leadership",
            DifficultyTier::Beginner,
        ),
        summary(
            "lead-201",
            "Coaching and Feedback",
            "Leadership",
            DifficultyTier::Intermediate,
        ),
    ]
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
