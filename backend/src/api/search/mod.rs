//! Search service and module exports.

mod search_jobs;
pub use search_jobs::{search_jobs, search_jobs_with_latency};

mod search_facets;
pub use search_facets::{compute_category_facet, compute_facets};

pub mod search_filter;
