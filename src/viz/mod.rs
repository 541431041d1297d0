//! Chart renderers: each module turns one aggregation's output into one
//! standalone interactive HTML document.
//!
//! - Time series: dual-line chart with range presets and a range slider
//! - Map: choropleth with continent dropdown and year slider
//! - Scatter: animated GDP-vs-coverage plot, one frame per year
//! - Bar: top-10 growth-rate ranking
//!
//! Figures are plain plotly.js figure JSON built with `serde_json`; the
//! written pages reference plotly.js from CDN and need no server to view.
//! Every renderer produces a valid (possibly empty) chart for empty input.

pub mod bar;
pub mod figure;
pub mod map;
pub mod scatter;
pub mod time_series;

pub use bar::{bar_figure, render_bar};
pub use figure::Figure;
pub use map::{map_figure, render_map};
pub use scatter::{render_scatter, scatter_figure};
pub use time_series::{render_time_series, time_series_figure};
