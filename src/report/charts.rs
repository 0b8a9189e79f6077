//! Chart artifacts, rendered to PNG with plotters.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

const CHART_SIZE: (u32, u32) = (1280, 720);
const POINT_SIZE: i32 = 3;

fn date_axis(counts_dates: impl Iterator<Item = NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    let mut min = None;
    let mut max = None;
    for date in counts_dates {
        min = Some(min.map_or(date, |m: NaiveDate| m.min(date)));
        max = Some(max.map_or(date, |m: NaiveDate| m.max(date)));
    }
    Some((min?, max? + Duration::days(1)))
}

/// Scatter of filings per day.
pub fn filings_over_time(counts: &BTreeMap<NaiveDate, usize>, out_path: &Path) -> Result<()> {
    let Some((from, to)) = date_axis(counts.keys().copied()) else {
        info!("no rows to plot, skipping {}", out_path.display());
        return Ok(());
    };
    let y_max = counts.values().copied().max().unwrap_or(0) as u32 + 1;

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Filings per day", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(from..to, 0u32..y_max)?;
    chart.configure_mesh().x_desc("date").y_desc("filings").draw()?;

    chart.draw_series(
        counts
            .iter()
            .map(|(date, count)| Circle::new((*date, *count as u32), POINT_SIZE, BLUE.filled())),
    )?;
    root.present()?;
    info!("wrote {}", out_path.display());
    Ok(())
}

/// Two-color scatter of filings per day, one series per subject.
pub fn filings_over_time_by_subject(
    counts: &BTreeMap<(NaiveDate, String), usize>,
    subjects: (&str, &str),
    out_path: &Path,
) -> Result<()> {
    let Some((from, to)) = date_axis(counts.keys().map(|(date, _)| *date)) else {
        info!("no rows to plot, skipping {}", out_path.display());
        return Ok(());
    };
    let y_max = counts.values().copied().max().unwrap_or(0) as u32 + 1;

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Filings per day by subject", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(from..to, 0u32..y_max)?;
    chart.configure_mesh().x_desc("date").y_desc("filings").draw()?;

    let series = |subject: &str| -> Vec<(NaiveDate, u32)> {
        counts
            .iter()
            .filter(|((_, s), _)| s == subject)
            .map(|((date, _), count)| (*date, *count as u32))
            .collect()
    };

    let openings = series(subjects.0);
    chart
        .draw_series(
            openings
                .iter()
                .map(|(date, count)| Circle::new((*date, *count), POINT_SIZE, BLUE.filled())),
        )?
        .label(subjects.0)
        .legend(|(x, y)| Circle::new((x, y), POINT_SIZE, BLUE.filled()));

    let decisions = series(subjects.1);
    chart
        .draw_series(
            decisions
                .iter()
                .map(|(date, count)| Circle::new((*date, *count), POINT_SIZE, RED.filled())),
        )?
        .label(subjects.1)
        .legend(|(x, y)| Circle::new((x, y), POINT_SIZE, RED.filled()));

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()?;
    info!("wrote {}", out_path.display());
    Ok(())
}

/// Histogram of estimated case durations in whole years.
pub fn duration_histogram(durations: &[u32], out_path: &Path) -> Result<()> {
    if durations.is_empty() {
        info!("no parsed durations, skipping {}", out_path.display());
        return Ok(());
    }
    let x_max = durations.iter().copied().max().unwrap_or(0) + 1;
    let mut freq: BTreeMap<u32, u32> = BTreeMap::new();
    for d in durations {
        *freq.entry(*d).or_insert(0) += 1;
    }
    let y_max = freq.values().copied().max().unwrap_or(0) + 1;

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Estimated case duration", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..x_max).into_segmented(), 0u32..y_max)?;
    chart
        .configure_mesh()
        .x_desc("duration (years)")
        .y_desc("closed cases")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .data(durations.iter().map(|d| (*d, 1u32))),
    )?;
    root.present()?;
    info!("wrote {}", out_path.display());
    Ok(())
}

/// Box plot of case durations per court, one box per court.
pub fn duration_box_by_court(
    durations: &BTreeMap<String, Vec<u32>>,
    out_path: &Path,
) -> Result<()> {
    if durations.is_empty() {
        info!("no court clears the volume threshold, skipping {}", out_path.display());
        return Ok(());
    }
    let labels: Vec<String> = durations.keys().cloned().collect();
    let y_max = durations
        .values()
        .flat_map(|values| values.iter())
        .copied()
        .max()
        .unwrap_or(0) as f32
        + 1.0;

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Case duration by court", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(60)
        .build_cartesian_2d(labels[..].into_segmented(), 0f32..y_max)?;
    chart
        .configure_mesh()
        .x_desc("insolvency court")
        .y_desc("duration (years)")
        .x_labels(labels.len())
        .draw()?;

    chart.draw_series(durations.iter().map(|(court, values)| {
        Boxplot::new_vertical(SegmentValue::CenterOf(court), &Quartiles::new(values))
    }))?;
    root.present()?;
    info!("wrote {}", out_path.display());
    Ok(())
}
