//! In-memory repository adapters.
//!
//! These back the server when no database is configured and give tests real
//! store semantics without I/O. Each adapter guards its records with a
//! mutex; the duplicate check and insert happen under one lock acquisition,
//! so the uniqueness invariant holds under concurrent submissions exactly as
//! the SQL unique index does.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    ApplicationRepository, ApplicationRepositoryError, FeedbackRepository,
    FeedbackRepositoryError, JobRepository, JobRepositoryError,
};
use crate::domain::{
    Application, ApplicationFilter, Feedback, Identity, Job, JobDraft, PageRequest,
};

fn lock<'a, T, E>(records: &'a Mutex<T>, poisoned: impl FnOnce() -> E) -> Result<MutexGuard<'a, T>, E> {
    records.lock().map_err(|_| poisoned())
}

/// Mutex-guarded job store preserving insertion order.
#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<Job>>, JobRepositoryError> {
        lock(&self.jobs, || JobRepositoryError::query("job store lock poisoned"))
    }
}

fn with_count(job: &Job, applicant_count: i64) -> Result<Job, JobRepositoryError> {
    Job::new(JobDraft {
        id: job.id(),
        title: job.title().to_owned(),
        owner: job.owner().clone(),
        applicant_count,
        details: job.details().clone(),
    })
    .map_err(|err| JobRepositoryError::query(err.to_string()))
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &Job) -> Result<(), JobRepositoryError> {
        self.guard()?.push(job.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobRepositoryError> {
        Ok(self.guard()?.iter().find(|job| job.id() == id).cloned())
    }

    async fn list_by_owner(&self, owner: &Identity) -> Result<Vec<Job>, JobRepositoryError> {
        Ok(self
            .guard()?
            .iter()
            .filter(|job| job.owner() == owner)
            .cloned()
            .collect())
    }

    async fn list_paged(
        &self,
        page: PageRequest,
        search: &str,
    ) -> Result<Vec<Job>, JobRepositoryError> {
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(self
            .guard()?
            .iter()
            .filter(|job| job.title_matches(search))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_matching(&self, search: &str) -> Result<u64, JobRepositoryError> {
        Ok(self
            .guard()?
            .iter()
            .filter(|job| job.title_matches(search))
            .count() as u64)
    }

    async fn upsert(&self, job: &Job) -> Result<(), JobRepositoryError> {
        let mut jobs = self.guard()?;
        match jobs.iter_mut().find(|existing| existing.id() == job.id()) {
            Some(existing) => *existing = job.clone(),
            None => jobs.push(job.clone()),
        }
        Ok(())
    }

    async fn increment_applicant_count(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        let mut jobs = self.guard()?;
        let job = jobs
            .iter_mut()
            .find(|job| job.id() == id)
            .ok_or(JobRepositoryError::NotFound)?;
        *job = with_count(job, job.applicant_count() + 1)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        let mut jobs = self.guard()?;
        let before = jobs.len();
        jobs.retain(|job| job.id() != id);
        if jobs.len() == before {
            return Err(JobRepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Mutex-guarded application store enforcing `(applicant, job_id)`
/// uniqueness.
#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    applications: Mutex<Vec<Application>>,
}

impl InMemoryApplicationRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<Application>>, ApplicationRepositoryError> {
        lock(&self.applications, || {
            ApplicationRepositoryError::query("application store lock poisoned")
        })
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn insert(&self, application: &Application) -> Result<(), ApplicationRepositoryError> {
        let mut applications = self.guard()?;
        // Check and insert under the same lock so racing submissions cannot
        // both pass.
        let duplicate = applications.iter().any(|existing| {
            existing.applicant() == application.applicant()
                && existing.job_id() == application.job_id()
        });
        if duplicate {
            return Err(ApplicationRepositoryError::Duplicate);
        }
        applications.push(application.clone());
        Ok(())
    }

    async fn find_by_applicant_and_job(
        &self,
        applicant: &Identity,
        job_id: Uuid,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        Ok(self
            .guard()?
            .iter()
            .find(|application| {
                application.applicant() == applicant && application.job_id() == job_id
            })
            .cloned())
    }

    async fn list_by_applicant(
        &self,
        applicant: &Identity,
        filter: &ApplicationFilter,
    ) -> Result<Vec<Application>, ApplicationRepositoryError> {
        Ok(self
            .guard()?
            .iter()
            .filter(|application| application.applicant() == applicant)
            .filter(|application| filter.matches(application))
            .cloned()
            .collect())
    }
}

/// Mutex-guarded feedback store.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackRepository {
    feedback: Mutex<Vec<Feedback>>,
}

impl InMemoryFeedbackRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn insert(&self, record: &Feedback) -> Result<(), FeedbackRepositoryError> {
        lock(&self.feedback, || {
            FeedbackRepositoryError::query("feedback store lock poisoned")
        })?
        .push(record.clone());
        Ok(())
    }
}
