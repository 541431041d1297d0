//! Dual-line chart of mean coverage and mean life expectancy over time, with
//! range-selector presets (5 Y / 10 Y / All) and a draggable range slider.

use super::figure::Figure;
use crate::models::YearAggregate;
use anyhow::Result;
use serde_json::json;
use std::path::Path;

/// Build the time-series figure. Missing means become JSON nulls, which
/// plotly renders as gaps in the line.
pub fn time_series_figure(aggregates: &[YearAggregate]) -> Figure {
    let years: Vec<i32> = aggregates.iter().map(|a| a.time_period).collect();
    let coverage: Vec<Option<f64>> = aggregates.iter().map(|a| a.mean_coverage).collect();
    let life: Vec<Option<f64>> = aggregates.iter().map(|a| a.mean_life_expectancy).collect();

    let data = vec![
        json!({
            "type": "scatter",
            "mode": "lines",
            "name": "Coverage",
            "x": years,
            "y": coverage,
        }),
        json!({
            "type": "scatter",
            "mode": "lines",
            "name": "LifeExpectancy",
            "x": years,
            "y": life,
        }),
    ];

    let layout = json!({
        "title": {"text": "A Journey of Progress: Vaccination Coverage and Life Expectancy over time"},
        "legend": {"title": {"text": ""}},
        "yaxis": {"title": {"text": "Coverage"}},
        "xaxis": {
            "title": {"text": "Year"},
            "rangeselector": {
                "buttons": [
                    {"count": 5, "label": "5 Y", "step": "year", "stepmode": "backward"},
                    {"count": 10, "label": "10 Y", "step": "year", "stepmode": "backward"},
                    {"step": "all", "label": "All"},
                ],
            },
            "rangeslider": {"visible": true},
        },
    });

    Figure::new(data, layout)
}

/// Render the time-series artifact to `path`.
pub fn render_time_series<P: AsRef<Path>>(aggregates: &[YearAggregate], path: P) -> Result<()> {
    time_series_figure(aggregates).write_html(path, "Vaccination Coverage over Time")
}
