use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::info;

use crate::filing::{Filing, SUBJECT_DECISION};

/// The report is pinned to its authoring year; durations are relative to it.
pub const ANALYSIS_YEAR: i32 = 2020;

/// Courts with at most this many closed cases stay out of the per-court
/// duration breakdown.
pub const MIN_CASES_PER_COURT: usize = 100;

static FILE_NUMBER_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(\d{2})").expect("literal regex should parse"));

/// Extracts the two-digit year suffix after the `/` of a court file number.
/// A number without the `/NN` shape yields `None`; this is a heuristic over
/// free-text identifiers, not a validated parser.
pub fn file_number_year(court_file_number: &str) -> Option<u32> {
    FILE_NUMBER_YEAR
        .captures(court_file_number)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Pivot rule for two-digit years: 00–20 map to 2000–2020, 21–99 map to
/// 1921–1999. The boundary sits at the analysis year, so no start year can
/// land in the future.
pub fn pivot_year(two_digit: u32) -> i32 {
    if two_digit > 20 {
        1900 + two_digit as i32
    } else {
        2000 + two_digit as i32
    }
}

/// One closing decision with its estimated proceeding duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedCase {
    pub insolvency_court: String,
    pub court_file_number: String,
    /// `None` when the file number carries no `/NN` year suffix.
    pub duration_years: Option<u32>,
}

/// Closed cases plus how many of them failed the year-suffix parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationEstimate {
    pub cases: Vec<ClosedCase>,
    pub unparsed: usize,
}

/// Filters the cleaned table to closing decisions and estimates each case's
/// duration as `ANALYSIS_YEAR - pivot_year(year suffix)`. Rows whose file
/// number defeats the parse are kept with a missing duration and counted.
pub fn estimate_durations(rows: &[Filing]) -> DurationEstimate {
    let mut cases = Vec::new();
    let mut unparsed = 0;
    for row in rows.iter().filter(|row| row.subject == SUBJECT_DECISION) {
        let duration_years = file_number_year(&row.court_file_number)
            .map(|year| (ANALYSIS_YEAR - pivot_year(year)) as u32);
        if duration_years.is_none() {
            unparsed += 1;
        }
        cases.push(ClosedCase {
            insolvency_court: row.insolvency_court.clone(),
            court_file_number: row.court_file_number.clone(),
            duration_years,
        });
    }
    info!(cases = cases.len(), unparsed, "estimated case durations");
    DurationEstimate { cases, unparsed }
}

/// Closed-case count per court, descending by count, ties by court name.
pub fn court_case_counts(cases: &[ClosedCase]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for case in cases {
        *counts.entry(case.insolvency_court.as_str()).or_insert(0) += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(court, count)| (court.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// The `n` busiest courts by closed-case volume.
pub fn top_courts(cases: &[ClosedCase], n: usize) -> Vec<(String, usize)> {
    let mut counts = court_case_counts(cases);
    counts.truncate(n);
    counts
}

/// Parsed durations grouped by court, restricted to courts with more than
/// `min_cases` closed cases. The volume threshold counts every closed case
/// at the court; the returned samples hold only the parseable ones.
pub fn durations_by_court(
    cases: &[ClosedCase],
    min_cases: usize,
) -> BTreeMap<String, Vec<u32>> {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for case in cases {
        *totals.entry(case.insolvency_court.as_str()).or_insert(0) += 1;
    }

    let mut grouped: BTreeMap<String, Vec<u32>> = BTreeMap::new();
    for case in cases {
        if totals[case.insolvency_court.as_str()] > min_cases {
            if let Some(duration) = case.duration_years {
                grouped
                    .entry(case.insolvency_court.clone())
                    .or_default()
                    .push(duration);
            }
        }
    }
    grouped
}
