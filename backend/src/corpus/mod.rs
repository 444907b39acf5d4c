//! Job corpus storage and loading.
//!
//! The corpus is loaded once at startup and shared read-only between requests.
//! The search functions in [`crate::api::search`] only see a `&[JobResult]`, so
//! the source of the jobs can change without touching the search contract.

use std::sync::Arc;

use common::job_result::JobResult;

use crate::config::BackendConfig;

mod load_jobs_json;
pub use load_jobs_json::{load_jobs_json, parse_jobs_json};

mod sample_jobs;
pub use sample_jobs::sample_jobs;


#[derive(Debug, Clone)]
pub struct JobCorpus {
    jobs: Arc<[JobResult]>,
}

impl JobCorpus {
    pub fn new(jobs: Vec<JobResult>) -> Self {
        Self { jobs: jobs.into() }
    }

    pub fn jobs(&self) -> &[JobResult] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&JobResult> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

pub async fn load_corpus(config: &BackendConfig) -> anyhow::Result<JobCorpus> {
    let jobs = match &config.corpus_path {
        Some(path) => {
            let jobs = load_jobs_json(path).await?;
            tracing::info!("loaded {} jobs from {}", jobs.len(), path.display());
            jobs
        }
        None => {
            let jobs = sample_jobs()?;
            tracing::info!("JOBS_CORPUS_PATH not set, serving {} sample jobs", jobs.len());
            jobs
        }
    };
    Ok(JobCorpus::new(jobs))
}
