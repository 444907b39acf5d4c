//! Shared search request model.

use serde::{Deserialize, Serialize};

use crate::job_result::JobCategory;


/// A job search: free-text term over titles plus one value list per category.
///
/// An empty list places no constraint on its category. Missing JSON fields
/// fall back to [`SearchRequest::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: String,
    pub activities: Vec<String>,
    pub locations: Vec<String>,
    pub entry_levels: Vec<String>,
    pub working_times: Vec<String>,
    /// 1-based.
    pub page: u64,
    pub include_facets: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            activities: Vec::new(),
            locations: Vec::new(),
            entry_levels: Vec::new(),
            working_times: Vec::new(),
            page: 1,
            include_facets: true,
        }
    }
}

impl SearchRequest {
    pub fn filter_values(&self, category: JobCategory) -> &[String] {
        match category {
            JobCategory::Activities => &self.activities,
            JobCategory::Locations => &self.locations,
            JobCategory::EntryLevels => &self.entry_levels,
            JobCategory::WorkingTimes => &self.working_times,
        }
    }

    pub fn filter_values_mut(&mut self, category: JobCategory) -> &mut Vec<String> {
        match category {
            JobCategory::Activities => &mut self.activities,
            JobCategory::Locations => &mut self.locations,
            JobCategory::EntryLevels => &mut self.entry_levels,
            JobCategory::WorkingTimes => &mut self.working_times,
        }
    }

    pub fn has_filters(&self) -> bool {
        JobCategory::ALL.iter().any(|category| !self.filter_values(*category).is_empty())
    }
}
