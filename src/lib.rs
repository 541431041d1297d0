//! vaxviz
//!
//! A small library + CLI that joins a per-country, per-year vaccination
//! coverage series with socioeconomic metadata, classifies countries by
//! continent, and writes four standalone interactive HTML charts.
//!
//! ### Pipeline
//! - Load two CSV files and left-join them on (country code, year)
//! - Annotate every row with a continent from a bundled country registry
//! - Run four independent aggregations (yearly means, per-year snapshot,
//!   full series, growth-rate ranking)
//! - Render one HTML artifact per aggregation
//!
//! ### Example
//! ```no_run
//! use vaxviz::registry::StaticRegistry;
//!
//! let joined = vaxviz::loader::load_and_join("unicef_indicator.csv", "unicef_metadata.csv")?;
//! let rows = vaxviz::enrich::annotate(joined, &StaticRegistry::default());
//! let ts = vaxviz::aggregate::time_series(&rows);
//! vaxviz::viz::render_time_series(&ts, "time_series.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregate;
pub mod enrich;
pub mod loader;
pub mod models;
pub mod registry;
pub mod viz;

pub use models::{
    Continent, EnrichedRecord, GrowthSummary, IndicatorRecord, JoinedRecord, MetadataRecord,
    YearAggregate,
};
