//! Diagnostic queries probing what, if anything, identifies a filing.
//!
//! Both checks are read-only and feed display tables, never the pipeline:
//! they document that neither `(insolvency_court, court_file_number)` nor
//! the same pair extended by date and subject is unique per filing.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::filing::Filing;

/// A court + file number claimed by more than one distinct debtor name,
/// after reducing the table to the first row per name. Usually the same
/// case filed under differing spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub insolvency_court: String,
    pub court_file_number: String,
    pub names: Vec<String>,
}

/// More than one retained row sharing date, court, file number and subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameDayCollision {
    pub date: NaiveDate,
    pub insolvency_court: String,
    pub court_file_number: String,
    pub subject: String,
    pub names: Vec<String>,
}

/// One row per distinct debtor name (first occurrence wins), grouped by
/// court and file number, keeping only groups with more than one member.
pub fn name_collisions(rows: &[Filing]) -> Vec<NameCollision> {
    let mut first_by_name: BTreeMap<&str, &Filing> = BTreeMap::new();
    for row in rows {
        if let Some(name) = row.name_debtor.as_deref() {
            first_by_name.entry(name).or_insert(row);
        }
    }

    let mut groups: BTreeMap<(&str, &str), Vec<&str>> = BTreeMap::new();
    for (&name, row) in &first_by_name {
        groups
            .entry((row.insolvency_court.as_str(), row.court_file_number.as_str()))
            .or_default()
            .push(name);
    }

    groups
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|((court, file_number), names)| NameCollision {
            insolvency_court: court.to_string(),
            court_file_number: file_number.to_string(),
            names: names.into_iter().map(str::to_string).collect(),
        })
        .collect()
}

/// Second diagnostic: group the full cleaned table by
/// `(date, insolvency_court, court_file_number, subject)` and keep groups
/// with more than one member.
pub fn same_day_collisions(rows: &[Filing]) -> Vec<SameDayCollision> {
    let mut groups: BTreeMap<(NaiveDate, &str, &str, &str), Vec<&Filing>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((
                row.date,
                row.insolvency_court.as_str(),
                row.court_file_number.as_str(),
                row.subject.as_str(),
            ))
            .or_default()
            .push(row);
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|((date, court, file_number, subject), members)| SameDayCollision {
            date,
            insolvency_court: court.to_string(),
            court_file_number: file_number.to_string(),
            subject: subject.to_string(),
            names: members
                .iter()
                .filter_map(|row| row.name_debtor.clone())
                .collect(),
        })
        .collect()
}
