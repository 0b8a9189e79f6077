use std::collections::HashSet;
use tracing::info;

use crate::filing::Filing;

/// Before/after accounting for one cleaning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    pub rows_in: usize,
    pub duplicates_removed: usize,
    pub missing_name_dropped: usize,
    pub rows_out: usize,
    /// Retained rows without a debtor domicile. Tolerated, reported only.
    pub missing_domicile: usize,
}

/// Deduplicates on the whole row (first occurrence wins), then drops rows
/// without a debtor name. An empty result is valid output.
pub fn clean_filings(rows: Vec<Filing>) -> (Vec<Filing>, CleanSummary) {
    let rows_in = rows.len();

    let mut seen: HashSet<Filing> = HashSet::with_capacity(rows_in);
    let mut kept: Vec<Filing> = Vec::with_capacity(rows_in);
    for row in rows {
        if seen.insert(row.clone()) {
            kept.push(row);
        }
    }
    let duplicates_removed = rows_in - kept.len();

    let deduped = kept.len();
    kept.retain(|row| row.name_debtor.is_some());
    let missing_name_dropped = deduped - kept.len();

    let missing_domicile = kept.iter().filter(|row| row.domicile_debtor.is_none()).count();

    let summary = CleanSummary {
        rows_in,
        duplicates_removed,
        missing_name_dropped,
        rows_out: kept.len(),
        missing_domicile,
    };
    info!(
        rows_in,
        duplicates_removed,
        missing_name_dropped,
        rows_out = summary.rows_out,
        missing_domicile,
        "cleaned filings"
    );
    (kept, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filing::tests::filing;
    use crate::filing::{SUBJECT_DECISION, SUBJECT_OPENING};

    fn sample() -> Vec<Filing> {
        vec![
            filing("2020-03-02", "AG Köln", "12/19", SUBJECT_OPENING, Some("B GmbH"), Some("Köln")),
            filing("2020-03-02", "AG Köln", "12/19", SUBJECT_OPENING, Some("B GmbH"), Some("Köln")),
            filing("2020-03-03", "AG Aachen", "9/18", SUBJECT_DECISION, Some("A KG"), None),
            filing("2020-03-03", "AG Aachen", "9/18", SUBJECT_DECISION, None, Some("Aachen")),
        ]
    }

    #[test]
    fn removes_exact_duplicates_and_missing_names() {
        let (rows, summary) = clean_filings(sample());
        assert_eq!(rows.len(), 2);
        assert_eq!(summary.rows_in, 4);
        assert_eq!(summary.duplicates_removed, 1);
        assert_eq!(summary.missing_name_dropped, 1);
        assert_eq!(summary.rows_out, 2);
        assert_eq!(summary.missing_domicile, 1);
        assert!(rows.iter().all(|row| row.name_debtor.is_some()));
    }

    #[test]
    fn first_occurrence_wins_and_order_is_preserved() {
        let (rows, _) = clean_filings(sample());
        assert_eq!(rows[0].insolvency_court, "AG Köln");
        assert_eq!(rows[1].insolvency_court, "AG Aachen");
    }

    #[test]
    fn dedup_is_idempotent() {
        let (once, _) = clean_filings(sample());
        let (twice, summary) = clean_filings(once.clone());
        assert_eq!(once, twice);
        assert_eq!(summary.duplicates_removed, 0);
        assert_eq!(summary.missing_name_dropped, 0);
    }

    #[test]
    fn rows_differing_only_in_domicile_are_distinct() {
        let a = filing("2020-03-02", "AG Köln", "12/19", SUBJECT_OPENING, Some("B GmbH"), None);
        let b = filing("2020-03-02", "AG Köln", "12/19", SUBJECT_OPENING, Some("B GmbH"), Some("Köln"));
        let (rows, summary) = clean_filings(vec![a, b]);
        assert_eq!(rows.len(), 2);
        assert_eq!(summary.duplicates_removed, 0);
    }

    #[test]
    fn empty_input_is_valid() {
        let (rows, summary) = clean_filings(Vec::new());
        assert!(rows.is_empty());
        assert_eq!(summary.rows_out, 0);
    }
}
