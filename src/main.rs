use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use insoreport::{
    clean::clean_filings,
    duration::{durations_by_court, estimate_durations, top_courts, MIN_CASES_PER_COURT},
    explore::{name_collisions, same_day_collisions},
    filing::{sort_filings, SUBJECT_DECISION, SUBJECT_OPENING},
    load::load_filings,
    report::{charts, counts_by_date, counts_by_date_and_subject, subject_counts, tables},
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "EDA report over German insolvency-court filings"
)]
struct Args {
    /// Raw filings CSV
    #[arg(long, default_value = "./assets/filings.csv")]
    input: PathBuf,

    /// Directory for the rendered tables and charts
    #[arg(long, default_value = "./output")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();
    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    // ─── 1) load ─────────────────────────────────────────────────────
    let raw = load_filings(&args.input)?;

    // ─── 2) clean ────────────────────────────────────────────────────
    let (mut rows, summary) = clean_filings(raw);
    write_table(&args.output, "clean_summary.txt", tables::clean_summary_table(&summary))?;

    // ─── 3) sort ─────────────────────────────────────────────────────
    sort_filings(&mut rows);

    // ─── 4) key diagnostics ──────────────────────────────────────────
    let name_groups = name_collisions(&rows);
    info!(
        groups = name_groups.len(),
        "court+file-number pairs with multiple name spellings"
    );
    write_table(
        &args.output,
        "name_collisions.txt",
        tables::name_collisions_table(&name_groups),
    )?;

    let day_groups = same_day_collisions(&rows);
    info!(
        groups = day_groups.len(),
        "duplicate (date, court, file number, subject) groups"
    );
    write_table(
        &args.output,
        "same_day_collisions.txt",
        tables::same_day_collisions_table(&day_groups),
    )?;

    // ─── 5) aggregations ─────────────────────────────────────────────
    let by_subject = subject_counts(&rows);
    write_table(
        &args.output,
        "filing_type_counts.txt",
        tables::counts_table("Filings per subject", "subject", &by_subject),
    )?;

    charts::filings_over_time(
        &counts_by_date(&rows),
        &args.output.join("filings_over_time.png"),
    )?;
    charts::filings_over_time_by_subject(
        &counts_by_date_and_subject(&rows),
        (SUBJECT_OPENING, SUBJECT_DECISION),
        &args.output.join("filings_by_subject.png"),
    )?;

    // ─── 6) case durations ───────────────────────────────────────────
    let estimate = estimate_durations(&rows);
    if estimate.unparsed > 0 {
        warn!(
            unparsed = estimate.unparsed,
            "closed cases without a /NN year suffix; they carry no duration"
        );
    }

    let busiest = top_courts(&estimate.cases, 10);
    write_table(
        &args.output,
        "top_courts.txt",
        tables::counts_table("Closed cases per court (top 10)", "insolvency_court", &busiest),
    )?;

    let parsed: Vec<u32> = estimate.cases.iter().filter_map(|c| c.duration_years).collect();
    charts::duration_histogram(&parsed, &args.output.join("duration_histogram.png"))?;

    let per_court = durations_by_court(&estimate.cases, MIN_CASES_PER_COURT);
    charts::duration_box_by_court(&per_court, &args.output.join("duration_by_court.png"))?;

    info!("report finished, artifacts in {}", args.output.display());
    Ok(())
}

fn write_table(out_dir: &std::path::Path, name: &str, table: String) -> Result<()> {
    let path = out_dir.join(name);
    fs::write(&path, table).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
