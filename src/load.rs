use anyhow::{bail, Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::filing::Filing;

/// Header row the input file must carry, in this order.
pub const EXPECTED_COLUMNS: [&str; 6] = [
    "date",
    "insolvency_court",
    "court_file_number",
    "subject",
    "name_debtor",
    "domicile_debtor",
];

/// Reads the raw filings CSV into memory.
///
/// Any mismatch in the header row, an unreadable file, or a row whose date
/// fails to parse as `YYYY-MM-DD` is fatal. Empty `name_debtor` and
/// `domicile_debtor` fields become `None`; everything else stays text.
pub fn load_filings<P: AsRef<Path>>(path: P) -> Result<Vec<Filing>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .with_context(|| format!("reading header row of {}", path.display()))?
        .clone();
    let got: Vec<&str> = headers.iter().collect();
    if got != EXPECTED_COLUMNS {
        bail!(
            "header mismatch in {}: expected {:?}, got {:?}",
            path.display(),
            EXPECTED_COLUMNS,
            got
        );
    }

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<Filing>().enumerate() {
        // +2: one for the header row, one for 1-based line numbers
        let row = record.with_context(|| format!("parsing line {} of {}", i + 2, path.display()))?;
        rows.push(row);
    }

    info!(rows = rows.len(), "loaded {}", path.display());
    Ok(rows)
}
