//! Constants shared by the search backend and its callers.

/// Number of job results materialized per page.
pub const PAGE_SIZE: u64 = 20;

pub const ACTIVITIES_FACET_LABEL: &str = "Activities";
pub const LOCATIONS_FACET_LABEL: &str = "Locations";
pub const ENTRY_LEVELS_FACET_LABEL: &str = "Entry Levels";
pub const WORKING_TIMES_FACET_LABEL: &str = "Working Times";
