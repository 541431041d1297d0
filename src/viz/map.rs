//! Choropleth of coverage by country with two independent selectors: a
//! continent dropdown and a year slider. Both act by swapping the trace's
//! `locations`/`z` arrays and the title, not by re-rendering.

use super::figure::Figure;
use crate::aggregate::{latest_year, snapshot, years};
use crate::enrich::distinct_continents;
use crate::models::{Continent, EnrichedRecord};
use anyhow::Result;
use serde_json::{json, Value};
use std::path::Path;

fn locations_and_values(rows: &[EnrichedRecord], continent: Option<Continent>) -> (Vec<String>, Vec<f64>) {
    rows.iter()
        .filter(|r| continent.map_or(true, |c| r.continent == c))
        .map(|r| (r.country_code.clone(), r.obs_value))
        .unzip()
}

fn continent_buttons(init_snapshot: &[EnrichedRecord], continents: &[Continent], init_year_label: &str) -> Vec<Value> {
    // "All" first, then each observed continent; "All" must reproduce the
    // unfiltered snapshot exactly.
    let mut buttons = Vec::with_capacity(continents.len() + 1);
    for (label, filter) in std::iter::once(("All Continents".to_string(), None))
        .chain(continents.iter().map(|c| (c.label().to_string(), Some(*c))))
    {
        let (locations, z) = locations_and_values(init_snapshot, filter);
        buttons.push(json!({
            "method": "update",
            "label": label,
            "args": [
                {"locations": [locations], "z": [z]},
                {"title": {"text": format!("RCV1 Coverage in {label} ({init_year_label})")}},
            ],
        }));
    }
    buttons
}

fn year_steps(rows: &[EnrichedRecord], all_years: &[i32]) -> Vec<Value> {
    all_years
        .iter()
        .map(|&year| {
            let frame = snapshot(rows, year);
            let (locations, z) = locations_and_values(&frame, None);
            json!({
                "method": "update",
                "label": year.to_string(),
                "args": [
                    {"locations": [locations], "z": [z]},
                    {"title": {"text": format!("Global Vaccination Coverage ({year})")}},
                ],
            })
        })
        .collect()
}

/// Build the map figure. Default view is the latest year with all continents;
/// empty input yields a valid empty map.
pub fn map_figure(rows: &[EnrichedRecord]) -> Figure {
    let all_years = years(rows);
    let init_year = latest_year(rows);
    let init_year_label = init_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "no data".to_string());
    let init_snapshot = match init_year {
        Some(y) => snapshot(rows, y),
        None => Vec::new(),
    };
    let continents = distinct_continents(rows);

    let (locations, z) = locations_and_values(&init_snapshot, None);
    let data = vec![json!({
        "type": "choropleth",
        "locations": locations,
        "z": z,
        "colorscale": "Viridis",
        "colorbar": {"title": {"text": "Coverage (%)"}},
    })];

    let steps = year_steps(rows, &all_years);
    let layout = json!({
        "title": {"text": format!("RCV1 Coverage in All Continents ({init_year_label})")},
        "geo": {"showframe": false},
        "updatemenus": [{
            "buttons": continent_buttons(&init_snapshot, &continents, &init_year_label),
            "direction": "down",
            "x": 0.0,
            "y": 1.1,
            "showactive": true,
        }],
        "sliders": [{
            "steps": steps,
            "active": all_years.len().saturating_sub(1),
            "currentvalue": {"prefix": "Year: "},
        }],
    });

    Figure::new(data, layout)
}

/// Render the choropleth artifact to `path`.
pub fn render_map<P: AsRef<Path>>(rows: &[EnrichedRecord], path: P) -> Result<()> {
    map_figure(rows).write_html(path, "Vaccination Coverage Map")
}
