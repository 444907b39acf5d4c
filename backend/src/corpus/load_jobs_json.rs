//! Loading a job corpus from a JSON array of job records.

use std::{collections::HashSet, path::Path};

use anyhow::Context;
use common::job_result::JobResult;

pub async fn load_jobs_json(path: &Path) -> anyhow::Result<Vec<JobResult>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read job corpus {}", path.display()))?;
    parse_jobs_json(&text).with_context(|| format!("invalid job corpus {}", path.display()))
}

/// Parse a JSON array of job records. Job ids must be unique.
pub fn parse_jobs_json(text: &str) -> anyhow::Result<Vec<JobResult>> {
    let jobs = serde_json::from_str::<Vec<JobResult>>(text).context("failed to parse job records")?;
    let mut present_ids = HashSet::new();
    for job in &jobs {
        if !present_ids.insert(job.id.as_str()) {
            anyhow::bail!("duplicate job id: {}", job.id);
        }
    }
    Ok(jobs)
}
