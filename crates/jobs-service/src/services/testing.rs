//! Scripted test doubles for the repository and password hasher ports

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobs_core::{
    Company, DomainError, Job, NewCompany, NewJob, NewUser, PasswordHasher, RepoResult,
    Repository, User,
};

use super::context::ServiceContext;

/// Repository serving canned rows, or failing every call when scripted to
#[derive(Default)]
pub(crate) struct MockRepository {
    users: Mutex<Vec<User>>,
    companies: Mutex<Vec<Company>>,
    jobs: Mutex<Vec<Job>>,
    failure: Option<fn() -> DomainError>,
    calls: AtomicUsize,
}

impl MockRepository {
    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().unwrap() = users;
        self
    }

    pub fn with_companies(self, companies: Vec<Company>) -> Self {
        *self.companies.lock().unwrap() = companies;
        self
    }

    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        *self.jobs.lock().unwrap() = jobs;
        self
    }

    pub fn failing(failure: fn() -> DomainError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Users handed to `create_user`
    pub fn stored_users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn begin(&self) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Repository for MockRepository {
    async fn create_user(&self, user: &NewUser) -> RepoResult<User> {
        self.begin()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let created = User::new(
            users.len() as i64 + 1,
            user.name.clone(),
            user.email.clone(),
            user.password_hash.clone(),
        );
        users.push(created.clone());
        Ok(created)
    }

    async fn find_user_by_email(&self, email: &str) -> RepoResult<User> {
        self.begin()?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| DomainError::UserNotFound(email.to_string()))
    }

    async fn list_companies(&self) -> RepoResult<Vec<Company>> {
        self.begin()?;
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn find_company_by_id(&self, id: i64) -> RepoResult<Company> {
        self.begin()?;
        self.companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(DomainError::CompanyNotFound(id))
    }

    async fn create_company(&self, company: &NewCompany) -> RepoResult<Company> {
        self.begin()?;
        let mut companies = self.companies.lock().unwrap();
        let created = Company::new(
            companies.len() as i64 + 1,
            company.name.clone(),
            company.location.clone(),
        );
        companies.push(created.clone());
        Ok(created)
    }

    async fn list_jobs(&self) -> RepoResult<Vec<Job>> {
        self.begin()?;
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn find_job_by_id(&self, id: i64) -> RepoResult<Job> {
        self.begin()?;
        self.jobs
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or(DomainError::JobNotFound(id))
    }

    async fn list_jobs_by_company(&self, company_id: i64) -> RepoResult<Vec<Job>> {
        self.begin()?;
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.belongs_to(company_id))
            .cloned()
            .collect())
    }

    async fn create_job(&self, job: &NewJob) -> RepoResult<Job> {
        self.begin()?;
        if !self
            .companies
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.id == job.company_id)
        {
            return Err(DomainError::CompanyNotFound(job.company_id));
        }
        let mut jobs = self.jobs.lock().unwrap();
        let created = Job::new(
            jobs.len() as i64 + 1,
            job.company_id,
            job.role.clone(),
            job.description.clone(),
        );
        jobs.push(created.clone());
        Ok(created)
    }

    async fn ping(&self) -> RepoResult<()> {
        self.begin()
    }
}

/// Reversible hasher that prefixes the plaintext, or always fails
#[derive(Debug, Default)]
pub(crate) struct MockHasher {
    fail: bool,
}

impl MockHasher {
    pub fn failing() -> Self {
        Self { fail: true }
    }

    pub fn digest(password: &str) -> String {
        format!("hashed::{password}")
    }
}

impl PasswordHasher for MockHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::PasswordHash("hasher unavailable".to_string()));
        }
        Ok(Self::digest(password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<(), DomainError> {
        if hash == Self::digest(password) {
            Ok(())
        } else {
            Err(DomainError::PasswordMismatch)
        }
    }
}

/// Wire a context around the given doubles
pub(crate) fn context(repo: Arc<MockRepository>, hasher: MockHasher) -> ServiceContext {
    ServiceContext::new(repo, Arc::new(hasher))
}
