//! Free-text specialization matching

/// Whether a record's specialization list satisfies a free-text filter.
///
/// An empty or whitespace-only term matches everything. Otherwise the term is
/// trimmed and case-folded, and the record matches if any of its
/// specializations contains the term as a substring. A record without a
/// specialization list never matches a non-empty term.
pub fn matches_specialization(specializations: Option<&[String]>, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    match specializations {
        Some(list) => list.iter().any(|s| s.to_lowercase().contains(&needle)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(matches_specialization(None, ""));
        assert!(matches_specialization(None, "   "));
        assert!(matches_specialization(Some(&specs(&["Cardiology"])), ""));
        assert!(matches_specialization(Some(&[]), "\t "));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let list = specs(&["Cardiology", "Internal Medicine"]);
        assert!(matches_specialization(Some(&list), "cardio"));
        assert!(matches_specialization(Some(&list), "CARDIOLOGY"));
        assert!(matches_specialization(Some(&list), "internal"));
        assert!(!matches_specialization(Some(&list), "neuro"));
    }

    #[test]
    fn test_term_is_trimmed() {
        let list = specs(&["Neurology"]);
        assert!(matches_specialization(Some(&list), "  neuro  "));
    }

    #[test]
    fn test_missing_list_never_matches() {
        assert!(!matches_specialization(None, "cardio"));
    }

    #[test]
    fn test_empty_list_never_matches() {
        assert!(!matches_specialization(Some(&[]), "cardio"));
    }

    #[test]
    fn test_matches_any_entry() {
        let list = specs(&["Dermatology", "Pediatric Dermatology"]);
        assert!(matches_specialization(Some(&list), "pediatric"));
    }
}
