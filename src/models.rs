use serde::{Deserialize, Serialize};
use std::fmt;

/// Continent bucket used for grouping and filtering.
///
/// `Other` is the fallback for country codes that cannot be mapped; it is a
/// legitimate value throughout the pipeline, not an error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
    Antarctica,
    Other,
}

impl Continent {
    /// Human-readable label used in chart titles and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
            Continent::Antarctica => "Antarctica",
            Continent::Other => "Other",
        }
    }

    /// Map a two-letter region code from the reference registry to a continent.
    pub fn from_region_code(code: &str) -> Option<Continent> {
        match code {
            "AF" => Some(Continent::Africa),
            "AS" => Some(Continent::Asia),
            "EU" => Some(Continent::Europe),
            "NA" => Some(Continent::NorthAmerica),
            "OC" => Some(Continent::Oceania),
            "SA" => Some(Continent::SouthAmerica),
            "AN" => Some(Continent::Antarctica),
            _ => None,
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One observation from the vaccination indicator dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub country_code: String,
    pub time_period: i32,
    pub obs_value: f64,
}

/// One row from the socioeconomic metadata dataset. The numeric fields may be
/// empty per row; extra columns in the file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub country_code: String,
    pub time_period: i32,
    pub life_expectancy: Option<f64>,
    pub gdp_per_capita: Option<f64>,
}

/// Indicator row with metadata attached where a matching (country, year) row
/// exists. Unmatched rows carry `None` in the metadata fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub country_code: String,
    pub time_period: i32,
    pub obs_value: f64,
    pub life_expectancy: Option<f64>,
    pub gdp_per_capita: Option<f64>,
}

/// Joined row plus its continent classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub country_code: String,
    pub time_period: i32,
    pub obs_value: f64,
    pub life_expectancy: Option<f64>,
    pub gdp_per_capita: Option<f64>,
    pub continent: Continent,
}

impl EnrichedRecord {
    pub fn from_joined(j: JoinedRecord, continent: Continent) -> Self {
        Self {
            country_code: j.country_code,
            time_period: j.time_period,
            obs_value: j.obs_value,
            life_expectancy: j.life_expectancy,
            gdp_per_capita: j.gdp_per_capita,
            continent,
        }
    }
}

/// Per-year means across all countries. Means ignore missing values; a year
/// with no usable values yields `None`, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearAggregate {
    pub time_period: i32,
    pub mean_coverage: Option<f64>,
    pub mean_life_expectancy: Option<f64>,
}

/// Coverage growth between a country's earliest and latest observed years.
///
/// `growth_rate` is `(last_obs / first_obs - 1) * 100`, or `None` when
/// `first_obs` is zero. The `None` case flows into charts as a null bar so
/// the undefined value stays visible instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub country_code: String,
    pub first_obs: f64,
    pub last_obs: f64,
    pub growth_rate: Option<f64>,
}
