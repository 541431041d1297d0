//! Animated scatter of GDP per capita against coverage, one frame per year
//! over the full historical range, colored by continent. Playback defaults to
//! the final frame.

use super::figure::Figure;
use crate::aggregate::SCATTER_YEARS;
use crate::enrich::distinct_continents;
use crate::models::{Continent, EnrichedRecord};
use anyhow::Result;
use serde_json::{json, Value};
use std::path::Path;

/// One trace per continent for one year. Rows without a GDP value are left
/// out of their frame. The trace set (count and order) is identical in every
/// frame so plotly can animate between them.
fn traces_for_year(rows: &[EnrichedRecord], continents: &[Continent], year: i32) -> Vec<Value> {
    continents
        .iter()
        .map(|&continent| {
            let mut x = Vec::new();
            let mut y = Vec::new();
            let mut text = Vec::new();
            for r in rows {
                if r.time_period != year || r.continent != continent {
                    continue;
                }
                let Some(gdp) = r.gdp_per_capita else { continue };
                x.push(gdp);
                y.push(r.obs_value);
                text.push(r.country_code.clone());
            }
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": continent.label(),
                "x": x,
                "y": y,
                "text": text,
                "hovertemplate": "%{text}<br>GDP: %{x}<br>Coverage: %{y}<extra></extra>",
            })
        })
        .collect()
}

/// Build the animated scatter figure over [`SCATTER_YEARS`]. Years without
/// data produce empty frames; the slider starts on the last year.
pub fn scatter_figure(rows: &[EnrichedRecord]) -> Figure {
    let continents = distinct_continents(rows);
    let all_years: Vec<i32> = SCATTER_YEARS.collect();
    let last_year = *all_years.last().unwrap_or(&0);

    let frames: Vec<Value> = all_years
        .iter()
        .map(|&year| {
            json!({
                "name": year.to_string(),
                "data": traces_for_year(rows, &continents, year),
            })
        })
        .collect();

    let steps: Vec<Value> = all_years
        .iter()
        .map(|&year| {
            json!({
                "method": "animate",
                "label": year.to_string(),
                "args": [
                    [year.to_string()],
                    {
                        "mode": "immediate",
                        "frame": {"duration": 0, "redraw": true},
                        "transition": {"duration": 0},
                    },
                ],
            })
        })
        .collect();

    let layout = json!({
        "title": {"text": "GDP per Capita vs. Vaccination Coverage (1980\u{2013}2023)"},
        "xaxis": {"title": {"text": "GDP per Capita (2015 US$)"}},
        "yaxis": {"title": {"text": "Coverage (%)"}},
        "legend": {"title": {"text": "Continent"}},
        "updatemenus": [{
            "type": "buttons",
            "x": 0.0,
            "y": -0.1,
            "buttons": [
                {
                    "label": "Play",
                    "method": "animate",
                    "args": [Value::Null, {"frame": {"duration": 500, "redraw": true}, "fromcurrent": true}],
                },
                {
                    "label": "Pause",
                    "method": "animate",
                    "args": [[Value::Null], {"mode": "immediate", "frame": {"duration": 0, "redraw": false}}],
                },
            ],
        }],
        "sliders": [{
            "steps": steps,
            "active": all_years.len().saturating_sub(1),
            "currentvalue": {"prefix": "Year: "},
        }],
    });

    // Base traces show the final frame so the chart opens on the latest year.
    Figure::new(traces_for_year(rows, &continents, last_year), layout).with_frames(frames)
}

/// Render the animated scatter artifact to `path`.
pub fn render_scatter<P: AsRef<Path>>(rows: &[EnrichedRecord], path: P) -> Result<()> {
    scatter_figure(rows).write_html(path, "GDP per Capita vs. Vaccination Coverage")
}
