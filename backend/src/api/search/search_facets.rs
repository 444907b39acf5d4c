//! Facet counts over the full corpus.

use std::collections::{HashMap, HashSet};

use common::{
    job_result::{JobCategory, JobResult},
    search_result::{FacetItem, Facets},
};

pub fn compute_facets(corpus: &[JobResult]) -> Facets {
    let mut facets = Facets::default();
    for category in JobCategory::ALL {
        *facets.for_category_mut(category) = compute_category_facet(corpus, category);
    }
    facets
}

/// Count, for every distinct value of `category`, the jobs carrying it.
///
/// A job listing the same value twice is counted once. Items are ordered by
/// descending count; equal counts keep the order in which the values first
/// appear in the corpus.
pub fn compute_category_facet(corpus: &[JobResult], category: JobCategory) -> Vec<FacetItem> {
    let mut counts: Vec<(&str, u64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for job in corpus {
        let mut present_values = HashSet::new();
        for value in job.category_values(category) {
            if !present_values.insert(value.as_str()) {
                continue;
            }
            match positions.get(value.as_str()) {
                Some(&position) => counts[position].1 += 1,
                None => {
                    positions.insert(value.as_str(), counts.len());
                    counts.push((value.as_str(), 1));
                }
            }
        }
    }

    // stable sort: ties stay in first-seen order
    counts.sort_by_key(|(_value, count)| u64::MAX - *count);

    let label = category.facet_label();
    counts
        .into_iter()
        .map(|(value, count)| FacetItem {
            value: value.to_string(),
            count,
            label: label.to_string(),
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::sample_jobs;
    use pretty_assertions::assert_eq;

    fn item(value: &str, count: u64, label: &str) -> FacetItem {
        FacetItem { value: value.to_string(), count, label: label.to_string() }
    }

    #[test]
    fn sample_corpus_location_facet() {
        let facet = compute_category_facet(&sample_jobs().unwrap(), JobCategory::Locations);
        assert_eq!(
            facet,
            vec![
                item("Düsseldorf", 1, "Locations"),
                item("Essen", 1, "Locations"),
                item("Köln", 1, "Locations"),
                item("Remote", 1, "Locations"),
            ]
        );
    }

    #[test]
    fn higher_counts_come_first() {
        let facets = compute_facets(&sample_jobs().unwrap());
        assert_eq!(
            facets.entry_levels,
            vec![item("Berufserfahrung", 2, "Entry Levels"), item("Berufseinstieg", 1, "Entry Levels")]
        );
        assert_eq!(
            facets.working_times,
            vec![item("Vollzeit", 2, "Working Times"), item("Teilzeit", 1, "Working Times")]
        );
        assert_eq!(facets.activities.len(), 4);
        assert!(facets.activities.iter().all(|item| item.label == "Activities" && item.count == 1));
    }

    #[test]
    fn repeated_value_within_a_job_counts_once() {
        let mut jobs = sample_jobs().unwrap();
        jobs[1].location_values.push("Köln".to_string());
        let facet = compute_category_facet(&jobs, JobCategory::Locations);
        let koeln = facet.iter().find(|item| item.value == "Köln").unwrap();
        assert_eq!(koeln.count, 1);
    }

    #[test]
    fn counts_sum_to_distinct_memberships() {
        let mut jobs = sample_jobs().unwrap();
        jobs.push(jobs[0].clone());
        jobs[2].id = "copy".to_string();
        jobs[2].location_values = vec!["Düsseldorf".to_string(), "Leipzig".to_string(), "Leipzig".to_string()];

        let memberships = jobs
            .iter()
            .map(|job| job.location_values.iter().collect::<HashSet<_>>().len() as u64)
            .sum::<u64>();
        let facet = compute_category_facet(&jobs, JobCategory::Locations);
        assert_eq!(facet.iter().map(|item| item.count).sum::<u64>(), memberships);
        assert_eq!(facet[0], item("Düsseldorf", 2, "Locations"));
    }

    #[test]
    fn empty_corpus_has_empty_facets() {
        assert_eq!(compute_facets(&[]), Facets::default());
    }
}
