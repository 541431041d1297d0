//! Ranked bar chart of the top growth-rate countries.

use super::figure::Figure;
use crate::models::GrowthSummary;
use anyhow::Result;
use serde_json::json;
use std::path::Path;

/// Build the bar figure from an already-ranked growth table. Undefined growth
/// rates become null bars rather than being dropped.
pub fn bar_figure(ranking: &[GrowthSummary]) -> Figure {
    let codes: Vec<&str> = ranking.iter().map(|g| g.country_code.as_str()).collect();
    let rates: Vec<Option<f64>> = ranking.iter().map(|g| g.growth_rate).collect();

    let data = vec![json!({
        "type": "bar",
        "x": codes,
        "y": rates,
    })];
    let layout = json!({
        "title": {"text": "Top 10 Countries by Vaccination Coverage Growth"},
        "xaxis": {"title": {"text": "Country"}},
        "yaxis": {"title": {"text": "% Growth"}},
    });
    Figure::new(data, layout)
}

/// Render the bar-chart artifact to `path`.
pub fn render_bar<P: AsRef<Path>>(ranking: &[GrowthSummary], path: P) -> Result<()> {
    bar_figure(ranking).write_html(path, "Top 10 Coverage Growth")
}
