//! End-to-end run over a generated raw CSV: 1,000 rows of which 50 are
//! exact duplicates and 3 lack a debtor name, so 947 must survive cleaning.

use std::fmt::Write as _;
use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use insoreport::clean::clean_filings;
use insoreport::duration::estimate_durations;
use insoreport::filing::{sort_filings, SUBJECT_DECISION, SUBJECT_OPENING};
use insoreport::load::load_filings;
use insoreport::report::subject_counts;

const SUBJECTS: [&str; 3] = [SUBJECT_OPENING, SUBJECT_DECISION, "Sonstiges"];
const COURTS: [&str; 4] = ["AG Köln", "AG Aachen", "AG Bonn", "AG Düsseldorf"];

fn raw_csv() -> String {
    let mut csv = String::new();
    csv.push_str("date,insolvency_court,court_file_number,subject,name_debtor,domicile_debtor\n");

    let mut valid_lines = Vec::new();
    for i in 0..947 {
        let day = 1 + (i % 28);
        let line = format!(
            "2020-03-{:02},{},{}/19,{},Firma {} GmbH,{}",
            day,
            COURTS[i % COURTS.len()],
            100 + i,
            SUBJECTS[i % SUBJECTS.len()],
            i,
            if i % 7 == 0 { "" } else { "Musterstadt" },
        );
        valid_lines.push(line);
    }
    for line in &valid_lines {
        writeln!(csv, "{}", line).unwrap();
    }
    // 50 exact duplicates of existing rows
    for line in valid_lines.iter().take(50) {
        writeln!(csv, "{}", line).unwrap();
    }
    // 3 rows without a debtor name, distinct from everything else
    for i in 0..3 {
        writeln!(
            csv,
            "2020-03-30,AG Köln,{}/18,{},,",
            9000 + i,
            SUBJECT_OPENING
        )
        .unwrap();
    }
    csv
}

#[test]
fn thousand_row_scenario_cleans_to_947() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("filings.csv");
    fs::write(&input, raw_csv())?;

    let raw = load_filings(&input)?;
    assert_eq!(raw.len(), 1000);

    let (mut rows, summary) = clean_filings(raw);
    assert_eq!(summary.duplicates_removed, 50);
    assert_eq!(summary.missing_name_dropped, 3);
    assert_eq!(rows.len(), 947);
    assert!(rows.iter().all(|row| row.name_debtor.is_some()));

    sort_filings(&mut rows);
    for pair in rows.windows(2) {
        assert!(pair[0] <= pair[1]);
    }

    // count conservation across the subject summary
    let counts = subject_counts(&rows);
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    assert_eq!(total, 947);

    // every closing decision gets a duration; the /19 suffix means one year
    let estimate = estimate_durations(&rows);
    assert_eq!(estimate.unparsed, 0);
    assert!(!estimate.cases.is_empty());
    assert!(estimate
        .cases
        .iter()
        .all(|case| case.duration_years == Some(1)));
    Ok(())
}

#[test]
fn rerunning_the_cleaner_changes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("filings.csv");
    fs::write(&input, raw_csv())?;

    let (once, _) = clean_filings(load_filings(&input)?);
    let (twice, summary) = clean_filings(once.clone());
    assert_eq!(once, twice);
    assert_eq!(summary.duplicates_removed, 0);
    Ok(())
}
