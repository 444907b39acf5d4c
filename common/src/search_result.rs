use serde::{Deserialize, Serialize};

use crate::{job_result::{JobCategory, JobResult}, search_query::SearchRequest};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<JobResult>,
    pub pagination: Pagination,
    pub search_info: SearchInfo,
    pub facets: Facets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub page_size: u64,
    pub total_results: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    /// `total_pages` is never below 1, even for an empty result set.
    pub fn new(current_page: u64, page_size: u64, total_results: u64) -> Self {
        let total_pages = if page_size == 0 {
            1
        } else {
            total_results.div_ceil(page_size).max(1)
        };
        Self {
            current_page,
            page_size,
            total_results,
            total_pages,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }

    /// Index of the first result of the current page.
    pub fn offset(&self) -> u64 {
        self.current_page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInfo {
    pub execution_time_ms: u64,
    pub search_term: String,
    pub applied_filters: AppliedFilters,
}

/// Filters echoed back to the caller. A category is `None` (JSON `null`) when
/// the request list was empty, otherwise the request list verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    pub activities: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
    pub entry_levels: Option<Vec<String>>,
    pub working_times: Option<Vec<String>>,
}

impl AppliedFilters {
    pub fn from_request(request: &SearchRequest) -> Self {
        let echo = |category: JobCategory| {
            let values = request.filter_values(category);
            if values.is_empty() { None } else { Some(values.to_vec()) }
        };
        Self {
            activities: echo(JobCategory::Activities),
            locations: echo(JobCategory::Locations),
            entry_levels: echo(JobCategory::EntryLevels),
            working_times: echo(JobCategory::WorkingTimes),
        }
    }

    pub fn get(&self, category: JobCategory) -> Option<&[String]> {
        let values = match category {
            JobCategory::Activities => &self.activities,
            JobCategory::Locations => &self.locations,
            JobCategory::EntryLevels => &self.entry_levels,
            JobCategory::WorkingTimes => &self.working_times,
        };
        values.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        JobCategory::ALL.iter().all(|category| self.get(*category).is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub activities: Vec<FacetItem>,
    pub locations: Vec<FacetItem>,
    pub entry_levels: Vec<FacetItem>,
    pub working_times: Vec<FacetItem>,
}

impl Facets {
    pub fn for_category(&self, category: JobCategory) -> &[FacetItem] {
        match category {
            JobCategory::Activities => &self.activities,
            JobCategory::Locations => &self.locations,
            JobCategory::EntryLevels => &self.entry_levels,
            JobCategory::WorkingTimes => &self.working_times,
        }
    }

    pub fn for_category_mut(&mut self, category: JobCategory) -> &mut Vec<FacetItem> {
        match category {
            JobCategory::Activities => &mut self.activities,
            JobCategory::Locations => &mut self.locations,
            JobCategory::EntryLevels => &mut self.entry_levels,
            JobCategory::WorkingTimes => &mut self.working_times,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetItem {
    pub value: String,
    pub count: u64,
    pub label: String,
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_result_set_still_has_one_page() {
        let pagination = Pagination::new(1, 20, 0);
        assert_eq!(pagination.total_pages, 1);
        assert!(!pagination.has_next_page);
        assert!(!pagination.has_previous_page);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 20, 20).total_pages, 1);
        assert_eq!(Pagination::new(1, 20, 21).total_pages, 2);
        assert_eq!(Pagination::new(1, 20, 59).total_pages, 3);
    }

    #[test]
    fn page_flags_follow_current_page() {
        for total_results in [0, 1, 19, 20, 21, 40, 41, 100] {
            for current_page in 1..=6 {
                let pagination = Pagination::new(current_page, 20, total_results);
                let expected_pages = total_results.div_ceil(20).max(1);
                assert_eq!(pagination.total_pages, expected_pages);
                assert_eq!(pagination.has_next_page, current_page < expected_pages);
                assert_eq!(pagination.has_previous_page, current_page > 1);
            }
        }
    }

    #[test]
    fn offset_of_later_pages() {
        assert_eq!(Pagination::new(3, 20, 100).offset(), 40);
    }

    #[test]
    fn applied_filters_echo_non_empty_lists_verbatim() {
        let request = SearchRequest {
            locations: vec!["Köln".to_string()],
            working_times: vec!["Vollzeit".to_string(), "Vollzeit".to_string()],
            ..Default::default()
        };
        let applied = AppliedFilters::from_request(&request);
        assert_eq!(applied.locations, Some(vec!["Köln".to_string()]));
        assert_eq!(applied.working_times, Some(vec!["Vollzeit".to_string(), "Vollzeit".to_string()]));
        assert_eq!(applied.activities, None);
        assert_eq!(applied.entry_levels, None);
        assert!(!applied.is_empty());
        assert!(AppliedFilters::from_request(&SearchRequest::default()).is_empty());
    }

    #[test]
    fn empty_applied_filters_serialize_as_null() {
        let info = SearchInfo {
            execution_time_ms: 3,
            search_term: String::new(),
            applied_filters: AppliedFilters::default(),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "executionTimeMs": 3,
                "searchTerm": "",
                "appliedFilters": {
                    "activities": null,
                    "locations": null,
                    "entryLevels": null,
                    "workingTimes": null
                }
            })
        );
    }

    #[test]
    fn pagination_wire_names() {
        let value = serde_json::to_value(Pagination::new(2, 20, 45)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "currentPage": 2,
                "pageSize": 20,
                "totalResults": 45,
                "totalPages": 3,
                "hasNextPage": true,
                "hasPreviousPage": true
            })
        );
    }
}
