use crate::domain::models::GuestRecord;
use crate::domain::normalize::normalize;

/// Positions (in flattened order) of every record whose normalized name
/// contains the normalized, trimmed query. An empty query matches nothing.
#[must_use]
pub fn matching_indices(query: &str, records: &[GuestRecord]) -> Vec<usize> {
    let q = normalize(query.trim());
    if q.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.normalized_name().contains(&q))
        .map(|(i, _)| i)
        .collect()
}

#[must_use]
pub fn find_matches<'r>(query: &str, records: &'r [GuestRecord]) -> Vec<&'r GuestRecord> {
    matching_indices(query, records)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TableNumber;

    fn records() -> Vec<GuestRecord> {
        vec![
            GuestRecord::new("Mary Jones", TableNumber::from(1), "555-0001"),
            GuestRecord::new("Amélie Dubois", TableNumber::from(2), "555-0002"),
            GuestRecord::new("Mary Smith", TableNumber::from(2), "555-0002"),
            GuestRecord::new("Jonathan Smith", TableNumber::from(4), "555-0101"),
        ]
    }

    #[test]
    fn test_empty_and_blank_queries_match_nothing() {
        let records = records();
        assert!(find_matches("", &records).is_empty());
        assert!(find_matches("   \t", &records).is_empty());
    }

    #[test]
    fn test_substring_anywhere_in_name() {
        let records = records();
        let names: Vec<_> = find_matches("smith", &records)
            .iter()
            .map(|r| r.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Mary Smith", "Jonathan Smith"]);
    }

    #[test]
    fn test_preserves_directory_order() {
        let records = records();
        assert_eq!(matching_indices("mary", &records), vec![0, 2]);
        assert_eq!(matching_indices("  MARY ", &records), vec![0, 2]);
    }

    #[test]
    fn test_case_and_diacritic_insensitive() {
        let records = records();
        assert_eq!(matching_indices("AMELIE", &records), vec![1]);
        assert_eq!(matching_indices("dübois", &records), vec![1]);
    }

    #[test]
    fn test_no_fuzzy_tolerance() {
        let records = records();
        assert!(find_matches("jonathon", &records).is_empty());
        assert!(find_matches("Zzzz", &records).is_empty());
    }

    #[test]
    fn test_results_are_subset_containing_query() {
        let records = records();
        for q in ["a", "Sm", "é", "ry J", "h"] {
            let nq = normalize(q.trim());
            for r in find_matches(q, &records) {
                assert!(records.contains(r));
                assert!(r.normalized_name().contains(&nq));
            }
        }
    }
}
