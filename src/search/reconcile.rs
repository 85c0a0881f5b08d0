//! Merging of independently-fetched search results
//!
//! The directory page runs up to two remote searches at once (by type and by
//! specialization) on top of the full-directory snapshot. Each fetch resolves
//! independently and may still be pending, or may have failed, when the page
//! re-renders; a failed or pending fetch is handed in as `None`. [`reconcile`]
//! is a pure function of those inputs and is recomputed from scratch on every
//! change, so no stale output survives a new input.

use std::collections::HashSet;

use crate::search::matches_specialization;
use crate::types::{DirectoryListing, ProfessionalSummary, SpecializationSearchResponse, TypeSearchResponse};

/// Reconciled list for the directory grid
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutput {
    /// Deduplicated entities in display order
    pub items: Vec<ProfessionalSummary>,
    /// Server total where a single server result is authoritative, otherwise
    /// the length of the merged list. May exceed `items.len()` when the
    /// server paginates.
    pub result_count: usize,
    pub is_filter_active: bool,
}

/// Merge the currently-available search results into one deduplicated list.
///
/// A filter is active when it is present and non-whitespace. Results must be
/// consistent with the filters they were fetched for; the caller drops a
/// result that belongs to a previous filter value before calling in.
pub fn reconcile(
    type_filter: Option<&str>,
    specialization_filter: Option<&str>,
    type_result: Option<&TypeSearchResponse>,
    specialization_result: Option<&SpecializationSearchResponse>,
    full_directory: Option<&DirectoryListing>,
) -> ReconcileOutput {
    let type_term = active_term(type_filter);
    let spec_term = active_term(specialization_filter);
    let is_filter_active = type_term.is_some() || spec_term.is_some();

    match (type_term, spec_term) {
        // No filter: the full directory passes through untouched.
        (None, None) => match full_directory {
            Some(dir) => ReconcileOutput {
                items: dir.professionals.clone(),
                result_count: dir.total as usize,
                is_filter_active,
            },
            None => ReconcileOutput {
                items: Vec::new(),
                result_count: 0,
                is_filter_active,
            },
        },

        // Type only: summaries carry no type field, so there is no
        // client-side fallback while the server result is pending.
        (Some(_), None) => match type_result {
            Some(by_type) => ReconcileOutput {
                items: by_type.results.clone(),
                result_count: by_type.total as usize,
                is_filter_active,
            },
            None => ReconcileOutput {
                items: Vec::new(),
                result_count: 0,
                is_filter_active,
            },
        },

        // Specialization only: server results first, then full-directory
        // entries the server did not surface but that match client-side.
        (None, Some(term)) => {
            let api_set: &[ProfessionalSummary] = specialization_result
                .map(|r| r.results.as_slice())
                .unwrap_or(&[]);

            let api_ids: HashSet<&str> = api_set
                .iter()
                .map(|p| p.professional_id.as_str())
                .collect();

            let mut combined = api_set.to_vec();
            if let Some(dir) = full_directory {
                combined.extend(
                    dir.professionals
                        .iter()
                        .filter(|p| {
                            !api_ids.contains(p.professional_id.as_str())
                                && matches_specialization(p.specializations.as_deref(), term)
                        })
                        .cloned(),
                );
            }

            let items = dedup_by_id(combined);
            let result_count = items.len();
            ReconcileOutput {
                items,
                result_count,
                is_filter_active,
            }
        }

        // Both filters: resolve with whichever results are available.
        (Some(_), Some(term)) => {
            let items = match (type_result, specialization_result) {
                (Some(by_type), Some(by_spec)) => {
                    let type_ids: HashSet<&str> = by_type
                        .results
                        .iter()
                        .map(|p| p.professional_id.as_str())
                        .collect();

                    // Intersection of the two server results, in the
                    // specialization result's order.
                    let intersection = by_spec
                        .results
                        .iter()
                        .filter(|p| type_ids.contains(p.professional_id.as_str()))
                        .cloned();

                    // Type results that match the term client-side cover
                    // partial matches the server's specialization search
                    // might not surface for a type-scoped query.
                    let filtered_from_type = by_type
                        .results
                        .iter()
                        .filter(|p| matches_specialization(p.specializations.as_deref(), term))
                        .cloned();

                    dedup_by_id(intersection.chain(filtered_from_type).collect())
                }
                (Some(by_type), None) => by_type
                    .results
                    .iter()
                    .filter(|p| matches_specialization(p.specializations.as_deref(), term))
                    .cloned()
                    .collect(),
                // The type filter cannot be applied without type data on
                // each summary; show the specialization results as-is.
                (None, Some(by_spec)) => by_spec.results.clone(),
                (None, None) => full_directory
                    .map(|dir| {
                        dir.professionals
                            .iter()
                            .filter(|p| matches_specialization(p.specializations.as_deref(), term))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default(),
            };

            let result_count = items.len();
            ReconcileOutput {
                items,
                result_count,
                is_filter_active,
            }
        }
    }
}

/// A filter is active when present and non-whitespace
fn active_term(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|t| !t.is_empty())
}

/// Keep the first occurrence of each id, preserving relative order
fn dedup_by_id(items: Vec<ProfessionalSummary>) -> Vec<ProfessionalSummary> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|p| seen.insert(p.professional_id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prof(id: &str, specializations: Option<&[&str]>) -> ProfessionalSummary {
        ProfessionalSummary {
            professional_id: id.to_string(),
            name: format!("Professional {}", id),
            specializations: specializations
                .map(|list| list.iter().map(|s| s.to_string()).collect()),
            years_of_experience: None,
            phone: None,
            email: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn directory() -> DirectoryListing {
        DirectoryListing {
            total: 3,
            professionals: vec![
                prof("1", Some(&["Cardiology"])),
                prof("2", Some(&["Neurology"])),
                prof("3", Some(&[])),
            ],
        }
    }

    fn ids(output: &ReconcileOutput) -> Vec<&str> {
        output
            .items
            .iter()
            .map(|p| p.professional_id.as_str())
            .collect()
    }

    #[test]
    fn test_no_filter_passes_directory_through() {
        let dir = directory();
        let out = reconcile(None, None, None, None, Some(&dir));

        assert_eq!(out.items, dir.professionals);
        assert_eq!(out.result_count, 3);
        assert!(!out.is_filter_active);
    }

    #[test]
    fn test_no_filter_without_directory_is_empty() {
        let out = reconcile(None, None, None, None, None);
        assert!(out.items.is_empty());
        assert_eq!(out.result_count, 0);
    }

    #[test]
    fn test_blank_filters_count_as_inactive() {
        let dir = directory();
        let out = reconcile(Some("  "), Some(""), None, None, Some(&dir));

        assert!(!out.is_filter_active);
        assert_eq!(out.items, dir.professionals);
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let dir = directory();
        let by_spec = SpecializationSearchResponse {
            specialization: "neuro".to_string(),
            total: 1,
            results: vec![prof("2", Some(&["Neurology"]))],
        };

        let first = reconcile(None, Some("neuro"), None, Some(&by_spec), Some(&dir));
        let second = reconcile(None, Some("neuro"), None, Some(&by_spec), Some(&dir));
        assert_eq!(first, second);
    }

    #[test]
    fn test_type_only_uses_server_result_and_total() {
        let dir = directory();
        let by_type = TypeSearchResponse {
            professional_type: "physician".to_string(),
            total: 7,
            results: vec![prof("1", Some(&["Cardiology"]))],
        };

        let out = reconcile(Some("physician"), None, Some(&by_type), None, Some(&dir));
        assert_eq!(ids(&out), vec!["1"]);
        // server total is authoritative even when results are paginated
        assert_eq!(out.result_count, 7);
        assert!(out.is_filter_active);
    }

    #[test]
    fn test_type_only_pending_is_empty() {
        let dir = directory();
        let out = reconcile(Some("physician"), None, None, None, Some(&dir));

        assert!(out.items.is_empty());
        assert_eq!(out.result_count, 0);
        assert!(out.is_filter_active);
    }

    #[test]
    fn test_specialization_only_with_server_result() {
        // Entity 2 already arrives from the server; entities 1 and 3 fail
        // the matcher, so the client set adds nothing.
        let dir = directory();
        let by_spec = SpecializationSearchResponse {
            specialization: "neuro".to_string(),
            total: 1,
            results: vec![prof("2", Some(&["Neurology"]))],
        };

        let out = reconcile(None, Some("neuro"), None, Some(&by_spec), Some(&dir));
        assert_eq!(ids(&out), vec!["2"]);
        assert_eq!(out.result_count, 1);
    }

    #[test]
    fn test_specialization_only_appends_client_matches() {
        // The server missed a partial match that exists in the directory; it
        // is appended after the server-ranked results.
        let dir = DirectoryListing {
            total: 3,
            professionals: vec![
                prof("1", Some(&["Cardiology"])),
                prof("2", Some(&["Pediatric Cardiology"])),
                prof("3", Some(&["Neurology"])),
            ],
        };
        let by_spec = SpecializationSearchResponse {
            specialization: "cardio".to_string(),
            total: 1,
            results: vec![prof("1", Some(&["Cardiology"]))],
        };

        let out = reconcile(None, Some("cardio"), None, Some(&by_spec), Some(&dir));
        assert_eq!(ids(&out), vec!["1", "2"]);
        assert_eq!(out.result_count, 2);
    }

    #[test]
    fn test_specialization_only_pending_filters_directory() {
        let dir = directory();
        let out = reconcile(None, Some("cardio"), None, None, Some(&dir));

        assert_eq!(ids(&out), vec!["1"]);
        assert_eq!(out.result_count, 1);
    }

    #[test]
    fn test_specialization_count_is_union_length_not_server_total() {
        let dir = directory();
        let by_spec = SpecializationSearchResponse {
            specialization: "neuro".to_string(),
            // server claims more matches than it returned; the merged list
            // is what the user sees, so its length is reported
            total: 40,
            results: vec![prof("2", Some(&["Neurology"]))],
        };

        let out = reconcile(None, Some("neuro"), None, Some(&by_spec), Some(&dir));
        assert_eq!(out.result_count, 1);
    }

    #[test]
    fn test_both_filters_intersection_and_type_matches() {
        // Id 1 is in both results; id 4 is type-scoped but fails the
        // matcher.
        let by_type = TypeSearchResponse {
            professional_type: "physician".to_string(),
            total: 2,
            results: vec![
                prof("1", Some(&["Cardiology"])),
                prof("4", Some(&["Dermatology"])),
            ],
        };
        let by_spec = SpecializationSearchResponse {
            specialization: "cardio".to_string(),
            total: 1,
            results: vec![prof("1", Some(&["Cardiology"]))],
        };

        let out = reconcile(
            Some("physician"),
            Some("cardio"),
            Some(&by_type),
            Some(&by_spec),
            None,
        );
        assert_eq!(ids(&out), vec!["1"]);
        assert_eq!(out.result_count, 1);
    }

    #[test]
    fn test_both_filters_keeps_partial_matches_from_type_result() {
        // A type-scoped record whose specialization only partially matches
        // the term survives even though the specialization search missed it.
        let by_type = TypeSearchResponse {
            professional_type: "physician".to_string(),
            total: 2,
            results: vec![
                prof("1", Some(&["Cardiology"])),
                prof("5", Some(&["Cardiothoracic Surgery"])),
            ],
        };
        let by_spec = SpecializationSearchResponse {
            specialization: "cardio".to_string(),
            total: 1,
            results: vec![prof("1", Some(&["Cardiology"]))],
        };

        let out = reconcile(
            Some("physician"),
            Some("cardio"),
            Some(&by_type),
            Some(&by_spec),
            None,
        );
        assert_eq!(ids(&out), vec!["1", "5"]);
    }

    #[test]
    fn test_both_filters_only_type_available() {
        let by_type = TypeSearchResponse {
            professional_type: "physician".to_string(),
            total: 3,
            results: vec![
                prof("1", Some(&["Cardiology"])),
                prof("4", Some(&["Dermatology"])),
                prof("6", None),
            ],
        };

        let out = reconcile(Some("physician"), Some("cardio"), Some(&by_type), None, None);
        assert_eq!(ids(&out), vec!["1"]);
        assert_eq!(out.result_count, 1);
    }

    #[test]
    fn test_both_filters_only_specialization_available() {
        // The type filter cannot be applied without type data on each
        // summary, so the specialization results pass through verbatim.
        let by_spec = SpecializationSearchResponse {
            specialization: "cardio".to_string(),
            total: 2,
            results: vec![
                prof("1", Some(&["Cardiology"])),
                prof("9", Some(&["Cardiology"])),
            ],
        };

        let out = reconcile(Some("physician"), Some("cardio"), None, Some(&by_spec), None);
        assert_eq!(out.items, by_spec.results);
        assert_eq!(out.result_count, 2);
    }

    #[test]
    fn test_both_filters_nothing_available_filters_directory() {
        let dir = directory();
        let out = reconcile(Some("physician"), Some("neuro"), None, None, Some(&dir));

        assert_eq!(ids(&out), vec!["2"]);
        assert_eq!(out.result_count, 1);
    }

    #[test]
    fn test_everything_absent_does_not_panic() {
        let out = reconcile(Some("physician"), Some("cardio"), None, None, None);
        assert!(out.items.is_empty());
        assert_eq!(out.result_count, 0);
        assert!(out.is_filter_active);
    }

    #[test]
    fn test_no_id_appears_twice() {
        // The same id arrives via both server results and the directory.
        let dir = DirectoryListing {
            total: 2,
            professionals: vec![
                prof("1", Some(&["Cardiology"])),
                prof("2", Some(&["Cardiac Imaging"])),
            ],
        };
        let by_spec = SpecializationSearchResponse {
            specialization: "cardi".to_string(),
            total: 2,
            results: vec![
                prof("1", Some(&["Cardiology"])),
                prof("2", Some(&["Cardiac Imaging"])),
            ],
        };

        let out = reconcile(None, Some("cardi"), None, Some(&by_spec), Some(&dir));
        let mut unique: Vec<&str> = ids(&out);
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), out.items.len());
    }

    #[test]
    fn test_missing_specialization_list_is_not_an_error() {
        let dir = DirectoryListing {
            total: 2,
            professionals: vec![prof("1", None), prof("2", Some(&["Neurology"]))],
        };

        let out = reconcile(None, Some("neuro"), None, None, Some(&dir));
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let first = vec![
            prof("a", None),
            prof("b", None),
            prof("a", None),
            prof("c", None),
            prof("b", None),
        ];
        let deduped = dedup_by_id(first);
        let order: Vec<&str> = deduped.iter().map(|p| p.professional_id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
