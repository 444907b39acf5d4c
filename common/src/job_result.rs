//! Job listing record and the categories its tags are grouped into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search_const::{
    ACTIVITIES_FACET_LABEL, ENTRY_LEVELS_FACET_LABEL, LOCATIONS_FACET_LABEL,
    WORKING_TIMES_FACET_LABEL,
};


/// One job listing of the corpus. Never mutated once loaded.
///
/// Each of the four tag groups is an ordered list of labels (duplicates are
/// allowed) together with the display label of the group, e.g. `"Standort"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    pub id: String,
    pub title: String,
    pub url: String,
    pub last_updated: DateTime<Utc>,
    pub location_text: String,
    pub location_values: Vec<String>,
    pub activities_text: String,
    pub activities_values: Vec<String>,
    pub entry_levels_text: String,
    pub entry_levels_values: Vec<String>,
    pub working_times_text: String,
    pub working_times_values: Vec<String>,
}

impl JobResult {
    pub fn category_values(&self, category: JobCategory) -> &[String] {
        match category {
            JobCategory::Activities => &self.activities_values,
            JobCategory::Locations => &self.location_values,
            JobCategory::EntryLevels => &self.entry_levels_values,
            JobCategory::WorkingTimes => &self.working_times_values,
        }
    }

    pub fn category_text(&self, category: JobCategory) -> &str {
        match category {
            JobCategory::Activities => &self.activities_text,
            JobCategory::Locations => &self.location_text,
            JobCategory::EntryLevels => &self.entry_levels_text,
            JobCategory::WorkingTimes => &self.working_times_text,
        }
    }
}

/// The four filterable tag groups of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobCategory {
    Activities,
    Locations,
    EntryLevels,
    WorkingTimes,
}

impl JobCategory {
    pub const ALL: [JobCategory; 4] = [
        JobCategory::Activities,
        JobCategory::Locations,
        JobCategory::EntryLevels,
        JobCategory::WorkingTimes,
    ];

    /// Group label attached to every facet item of this category.
    pub fn facet_label(self) -> &'static str {
        match self {
            JobCategory::Activities => ACTIVITIES_FACET_LABEL,
            JobCategory::Locations => LOCATIONS_FACET_LABEL,
            JobCategory::EntryLevels => ENTRY_LEVELS_FACET_LABEL,
            JobCategory::WorkingTimes => WORKING_TIMES_FACET_LABEL,
        }
    }
}

impl std::fmt::Display for JobCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobCategory::Activities => write!(f, "activities"),
            JobCategory::Locations => write!(f, "locations"),
            JobCategory::EntryLevels => write!(f, "entryLevels"),
            JobCategory::WorkingTimes => write!(f, "workingTimes"),
        }
    }
}
