//! The four aggregation recipes over the enriched table.
//!
//! Each pass is stateless and takes the enriched rows as sole input; the
//! renderers consume their outputs independently. Means ignore missing values
//! and undefined growth rates are kept as explicit `None` sentinels.

use crate::models::{EnrichedRecord, GrowthSummary, YearAggregate};
use std::collections::BTreeMap;

/// Fixed year range used to frame the animated scatter plot. Years in this
/// range with no observations simply produce empty animation frames.
pub const SCATTER_YEARS: std::ops::RangeInclusive<i32> = 1980..=2023;

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Per-year mean of coverage and of life expectancy, ascending by year.
/// Years absent from the input are absent from the output.
pub fn time_series(rows: &[EnrichedRecord]) -> Vec<YearAggregate> {
    let mut groups: BTreeMap<i32, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for r in rows {
        let (coverage, life) = groups.entry(r.time_period).or_default();
        coverage.push(r.obs_value);
        if let Some(le) = r.life_expectancy {
            life.push(le);
        }
    }
    groups
        .into_iter()
        .map(|(time_period, (coverage, life))| YearAggregate {
            time_period,
            mean_coverage: mean(&coverage),
            mean_life_expectancy: mean(&life),
        })
        .collect()
}

/// The rows for one year, unmodified and in input order. Empty when the year
/// has no observations.
pub fn snapshot(rows: &[EnrichedRecord], year: i32) -> Vec<EnrichedRecord> {
    rows.iter()
        .filter(|r| r.time_period == year)
        .cloned()
        .collect()
}

/// Maximum year present in the data; the map's default snapshot.
pub fn latest_year(rows: &[EnrichedRecord]) -> Option<i32> {
    rows.iter().map(|r| r.time_period).max()
}

/// Distinct years present in the data, ascending.
pub fn years(rows: &[EnrichedRecord]) -> Vec<i32> {
    let mut ys: Vec<i32> = rows.iter().map(|r| r.time_period).collect();
    ys.sort_unstable();
    ys.dedup();
    ys
}

/// Coverage growth per country between its earliest and latest observed
/// years, sorted descending by growth rate and truncated to `top_n`.
///
/// A zero `first_obs` leaves the rate undefined (`None`); those entries sort
/// after all defined rates. Equal rates tie-break by country code ascending.
pub fn growth_ranking(rows: &[EnrichedRecord], top_n: usize) -> Vec<GrowthSummary> {
    let mut groups: BTreeMap<&str, Vec<(i32, f64)>> = BTreeMap::new();
    for r in rows {
        groups
            .entry(r.country_code.as_str())
            .or_default()
            .push((r.time_period, r.obs_value));
    }

    let mut out: Vec<GrowthSummary> = groups
        .into_iter()
        .map(|(code, mut obs)| {
            // Stable sort: same-year duplicates keep input order.
            obs.sort_by_key(|&(year, _)| year);
            let first_obs = obs.first().map(|&(_, v)| v).unwrap_or(f64::NAN);
            let last_obs = obs.last().map(|&(_, v)| v).unwrap_or(f64::NAN);
            let growth_rate = if first_obs == 0.0 || !first_obs.is_finite() {
                None
            } else {
                Some((last_obs / first_obs - 1.0) * 100.0)
            };
            GrowthSummary {
                country_code: code.to_string(),
                first_obs,
                last_obs,
                growth_rate,
            }
        })
        .collect();

    out.sort_by(|a, b| match (a.growth_rate, b.growth_rate) {
        (Some(x), Some(y)) => y
            .total_cmp(&x)
            .then_with(|| a.country_code.cmp(&b.country_code)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.country_code.cmp(&b.country_code),
    });
    out.truncate(top_n);
    out
}
