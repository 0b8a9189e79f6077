pub mod charts;
pub mod tables;

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::filing::{Filing, SUBJECT_DECISION, SUBJECT_OPENING};

/// Row count per subject, ascending by subject label.
pub fn subject_counts(rows: &[Filing]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.subject.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(subject, count)| (subject.to_string(), count))
        .collect()
}

/// Filings per day over the whole table.
pub fn counts_by_date(rows: &[Filing]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.date).or_insert(0) += 1;
    }
    counts
}

/// Filings per day, restricted to the opening and closing-decision subjects
/// and keyed by `(date, subject)`.
pub fn counts_by_date_and_subject(rows: &[Filing]) -> BTreeMap<(NaiveDate, String), usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        if row.subject == SUBJECT_OPENING || row.subject == SUBJECT_DECISION {
            *counts.entry((row.date, row.subject.clone())).or_insert(0) += 1;
        }
    }
    counts
}
