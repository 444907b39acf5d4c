//! Caller-side search state with last-write-wins sequencing.
//!
//! Callers may fire a new search while an earlier one is still in flight.
//! Every search is issued a [`SearchTicket`]; an outcome is only applied when
//! no later-issued search has already been applied, so a slow, stale response
//! can never overwrite a newer one.

use crate::{job_result::JobCategory, search_query::SearchRequest, search_result::SearchResponse};


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Search term and selected filter values. `page` and `include_facets`
    /// are ignored; [`SearchState::begin_search`] always asks for page 1 with
    /// facets.
    pub query: SearchRequest,
    pub response: Option<SearchResponse>,
    pub loading: bool,
    pub error: Option<String>,
    last_issued: u64,
    last_applied: u64,
}

impl SearchState {
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    /// Select `value` if it is not selected yet, otherwise deselect it.
    pub fn toggle_filter_value(&mut self, category: JobCategory, value: &str) {
        let selected = self.query.filter_values_mut(category);
        if let Some(position) = selected.iter().position(|v| v == value) {
            selected.remove(position);
        } else {
            selected.push(value.to_string());
        }
    }

    pub fn remove_filter_value(&mut self, category: JobCategory, value: &str) {
        self.query.filter_values_mut(category).retain(|v| v != value);
    }

    pub fn clear_filters(&mut self) {
        for category in JobCategory::ALL {
            self.query.filter_values_mut(category).clear();
        }
    }

    pub fn selected_count(&self, category: JobCategory) -> usize {
        self.query.filter_values(category).len()
    }

    /// Whether the last applied response was produced with any filter.
    pub fn has_applied_filters(&self) -> bool {
        self.response
            .as_ref()
            .is_some_and(|response| !response.search_info.applied_filters.is_empty())
    }

    pub fn begin_search(&mut self) -> (SearchTicket, SearchRequest) {
        self.last_issued += 1;
        self.loading = true;
        self.error = None;
        let request = SearchRequest {
            page: 1,
            include_facets: true,
            ..self.query.clone()
        };
        (SearchTicket(self.last_issued), request)
    }

    /// Apply the outcome of the search identified by `ticket`.
    ///
    /// Returns `false` (and leaves the state untouched) when a search issued
    /// at or after `ticket` has already been applied.
    pub fn finish_search(&mut self, ticket: SearchTicket, outcome: Result<SearchResponse, String>) -> bool {
        if ticket.0 <= self.last_applied {
            return false;
        }
        self.last_applied = ticket.0;
        match outcome {
            Ok(response) => {
                self.response = Some(response);
                self.error = None;
            }
            Err(message) => {
                self.response = None;
                self.error = Some(message);
            }
        }
        self.loading = self.last_applied < self.last_issued;
        true
    }
}
