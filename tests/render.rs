use serde_json::Value;
use tempfile::tempdir;
use vaxviz::aggregate::{growth_ranking, time_series};
use vaxviz::models::{Continent, EnrichedRecord};
use vaxviz::viz::{
    bar_figure, map_figure, render_bar, render_map, render_scatter, render_time_series,
    scatter_figure, time_series_figure,
};

fn row(code: &str, year: i32, obs: f64, continent: Continent) -> EnrichedRecord {
    EnrichedRecord {
        country_code: code.into(),
        time_period: year,
        obs_value: obs,
        life_expectancy: Some(70.0),
        gdp_per_capita: Some(1000.0),
        continent,
    }
}

fn sample() -> Vec<EnrichedRecord> {
    vec![
        row("AFG", 2000, 40.0, Continent::Asia),
        row("AFG", 2010, 80.0, Continent::Asia),
        row("USA", 2000, 90.0, Continent::NorthAmerica),
        row("USA", 2010, 85.0, Continent::NorthAmerica),
        row("KEN", 2010, 70.0, Continent::Africa),
    ]
}

#[test]
fn time_series_figure_has_two_line_traces_and_range_controls() {
    let fig = time_series_figure(&time_series(&sample()));
    assert_eq!(fig.data.len(), 2);
    assert_eq!(fig.data[0]["name"], "Coverage");
    assert_eq!(fig.data[1]["name"], "LifeExpectancy");
    assert_eq!(fig.data[0]["x"], serde_json::json!([2000, 2010]));
    // 40+90 / 2 = 65 for 2000
    assert_eq!(fig.data[0]["y"][0], 65.0);

    let buttons = &fig.layout["xaxis"]["rangeselector"]["buttons"];
    assert_eq!(buttons.as_array().unwrap().len(), 3);
    assert_eq!(buttons[0]["label"], "5 Y");
    assert_eq!(buttons[2]["step"], "all");
    assert_eq!(fig.layout["xaxis"]["rangeslider"]["visible"], true);
}

#[test]
fn map_defaults_to_latest_year_all_continents() {
    let fig = map_figure(&sample());
    assert_eq!(
        fig.title().unwrap(),
        "RCV1 Coverage in All Continents (2010)"
    );
    // The base trace is the 2010 snapshot: AFG, USA, KEN.
    let locations = fig.data[0]["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 3);
    // Year slider starts on the last (latest) year.
    let sliders = &fig.layout["sliders"][0];
    assert_eq!(sliders["active"], 1);
    assert_eq!(sliders["steps"][1]["label"], "2010");
}

#[test]
fn map_all_continents_button_reproduces_the_unfiltered_snapshot() {
    let fig = map_figure(&sample());
    let buttons = fig.layout["updatemenus"][0]["buttons"].as_array().unwrap();
    assert_eq!(buttons[0]["label"], "All Continents");
    // "All" swaps in exactly the same arrays the base trace shows.
    assert_eq!(buttons[0]["args"][0]["locations"][0], fig.data[0]["locations"]);
    assert_eq!(buttons[0]["args"][0]["z"][0], fig.data[0]["z"]);
    // One button per observed continent after "All", each retitling the map.
    assert_eq!(buttons.len(), 4);
    assert_eq!(buttons[1]["label"], "Africa");
    assert_eq!(
        buttons[1]["args"][1]["title"]["text"],
        "RCV1 Coverage in Africa (2010)"
    );
    // The Asia filter keeps only AFG.
    let asia = buttons.iter().find(|b| b["label"] == "Asia").unwrap();
    assert_eq!(asia["args"][0]["locations"][0], serde_json::json!(["AFG"]));
}

#[test]
fn map_year_steps_swap_data_and_title() {
    let fig = map_figure(&sample());
    let steps = fig.layout["sliders"][0]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["label"], "2000");
    assert_eq!(steps[0]["method"], "update");
    assert_eq!(
        steps[0]["args"][1]["title"]["text"],
        "Global Vaccination Coverage (2000)"
    );
    // The 2000 snapshot holds AFG and USA only.
    assert_eq!(
        steps[0]["args"][0]["locations"][0],
        serde_json::json!(["AFG", "USA"])
    );
}

#[test]
fn scatter_covers_the_full_year_range_and_opens_on_the_final_frame() {
    let fig = scatter_figure(&sample());
    // 1980..=2023 inclusive.
    assert_eq!(fig.frames.len(), 44);
    assert_eq!(fig.frames[0]["name"], "1980");
    assert_eq!(fig.frames[43]["name"], "2023");
    assert_eq!(fig.layout["sliders"][0]["active"], 43);
    // One trace per observed continent, consistent across frames.
    assert_eq!(fig.data.len(), 3);
    for frame in &fig.frames {
        assert_eq!(frame["data"].as_array().unwrap().len(), 3);
    }
    // 2023 has no observations: the final frame is empty but present.
    assert_eq!(fig.frames[43]["data"][0]["x"], serde_json::json!([]));
}

#[test]
fn scatter_groups_by_continent_and_skips_missing_gdp() {
    let mut rows = sample();
    rows.push(EnrichedRecord {
        gdp_per_capita: None,
        ..row("IND", 2010, 60.0, Continent::Asia)
    });
    let fig = scatter_figure(&rows);
    let frame_2010 = fig
        .frames
        .iter()
        .find(|f| f["name"] == "2010")
        .unwrap();
    let asia = frame_2010["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == "Asia")
        .unwrap();
    // IND has no GDP value and is omitted from its frame.
    assert_eq!(asia["text"], serde_json::json!(["AFG"]));
    assert_eq!(asia["y"], serde_json::json!([80.0]));
}

#[test]
fn bar_figure_orders_bars_and_keeps_null_rates() {
    let rows = vec![
        row("AFG", 2000, 40.0, Continent::Asia),
        row("AFG", 2010, 80.0, Continent::Asia),
        row("USA", 2000, 90.0, Continent::NorthAmerica),
        row("USA", 2010, 85.0, Continent::NorthAmerica),
        row("ZRO", 2000, 0.0, Continent::Other),
        row("ZRO", 2010, 10.0, Continent::Other),
    ];
    let fig = bar_figure(&growth_ranking(&rows, 10));
    assert_eq!(fig.data[0]["x"], serde_json::json!(["AFG", "USA", "ZRO"]));
    assert_eq!(fig.data[0]["y"][0], 100.0);
    // Undefined growth renders as a null bar, not a dropped row.
    assert_eq!(fig.data[0]["y"][2], Value::Null);
}

#[test]
fn empty_input_still_renders_valid_artifacts() {
    let dir = tempdir().unwrap();
    let rows: Vec<EnrichedRecord> = Vec::new();

    let ts = dir.path().join("ts.html");
    render_time_series(&time_series(&rows), &ts).unwrap();
    let map = dir.path().join("map.html");
    render_map(&rows, &map).unwrap();
    let scatter = dir.path().join("scatter.html");
    render_scatter(&rows, &scatter).unwrap();
    let bar = dir.path().join("bar.html");
    render_bar(&growth_ranking(&rows, 10), &bar).unwrap();

    for p in [ts, map, scatter, bar] {
        let html = std::fs::read_to_string(&p).unwrap();
        assert!(html.contains("Plotly.newPlot"), "{} not valid", p.display());
        assert!(html.contains("cdn.plot.ly"));
    }

    let fig = map_figure(&rows);
    assert_eq!(fig.title().unwrap(), "RCV1 Coverage in All Continents (no data)");
    assert_eq!(fig.data[0]["locations"], serde_json::json!([]));
}
