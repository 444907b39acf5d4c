//! Filter built from a search request and applied to each job.
//!
//! The title term and the four categories are combined with AND; the values
//! listed for one category are combined with OR.

use common::{job_result::{JobCategory, JobResult}, search_query::SearchRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct JobFilter<'a> {
    /// Lower-cased search term, `None` when the request term is empty.
    title_term: Option<String>,
    category_filters: Vec<(JobCategory, &'a [String])>,
}

pub fn build_job_filter(request: &SearchRequest) -> JobFilter<'_> {
    let title_term = if request.search_term.is_empty() {
        None
    } else {
        Some(request.search_term.to_lowercase())
    };

    let category_filters = JobCategory::ALL
        .into_iter()
        .map(|category| (category, request.filter_values(category)))
        .filter(|(_category, values)| !values.is_empty())
        .collect::<Vec<_>>();

    JobFilter { title_term, category_filters }
}

impl JobFilter<'_> {
    pub fn matches(&self, job: &JobResult) -> bool {
        if let Some(term) = &self.title_term {
            if !job.title.to_lowercase().contains(term.as_str()) {
                return false;
            }
        }
        self.category_filters.iter().all(|(category, wanted)| {
            job.category_values(*category).iter().any(|value| wanted.contains(value))
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.title_term.is_none() && self.category_filters.is_empty()
    }
}
