//! Plain-text rendering of the report's display tables.

use crate::clean::CleanSummary;
use crate::explore::{NameCollision, SameDayCollision};

fn render(title: &str, header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    let line = |cells: &[String], out: &mut String| {
        let formatted: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        out.push_str(formatted.join("  ").trim_end());
        out.push('\n');
    };
    line(&header.iter().map(|h| h.to_string()).collect::<Vec<_>>(), &mut out);
    line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &mut out,
    );
    for row in rows {
        line(row, &mut out);
    }
    out
}

/// Two-column count table, e.g. filings per subject or cases per court.
pub fn counts_table(title: &str, label: &str, counts: &[(String, usize)]) -> String {
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|(key, count)| vec![key.clone(), count.to_string()])
        .collect();
    render(title, &[label, "count"], &rows)
}

pub fn clean_summary_table(summary: &CleanSummary) -> String {
    let rows = vec![
        vec!["rows in".to_string(), summary.rows_in.to_string()],
        vec!["exact duplicates removed".to_string(), summary.duplicates_removed.to_string()],
        vec!["missing debtor name dropped".to_string(), summary.missing_name_dropped.to_string()],
        vec!["rows out".to_string(), summary.rows_out.to_string()],
        vec!["missing domicile (kept)".to_string(), summary.missing_domicile.to_string()],
    ];
    render("Cleaning summary", &["step", "rows"], &rows)
}

pub fn name_collisions_table(collisions: &[NameCollision]) -> String {
    let rows: Vec<Vec<String>> = collisions
        .iter()
        .map(|c| {
            vec![
                c.insolvency_court.clone(),
                c.court_file_number.clone(),
                c.names.join(" | "),
            ]
        })
        .collect();
    render(
        "Same court and file number, multiple debtor-name spellings",
        &["insolvency_court", "court_file_number", "names"],
        &rows,
    )
}

pub fn same_day_collisions_table(collisions: &[SameDayCollision]) -> String {
    let rows: Vec<Vec<String>> = collisions
        .iter()
        .map(|c| {
            vec![
                c.date.to_string(),
                c.insolvency_court.clone(),
                c.court_file_number.clone(),
                c.subject.clone(),
                c.names.join(" | "),
            ]
        })
        .collect();
    render(
        "Duplicate (date, court, file number, subject) groups",
        &["date", "insolvency_court", "court_file_number", "subject", "names"],
        &rows,
    )
}
