//! Load the two input CSV files and left-join them on (country code, year).

use crate::models::{IndicatorRecord, JoinedRecord, MetadataRecord};
use ahash::AHashMap;
use std::path::Path;
use thiserror::Error;

/// Fatal errors raised while reading input files. All of these abort the run
/// before any artifact is written.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: missing required column `{column}`")]
    MissingColumn { path: String, column: String },
    #[error("{path}: malformed row: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

const INDICATOR_COLUMNS: &[&str] = &["country_code", "time_period", "obs_value"];
const METADATA_COLUMNS: &[&str] = &[
    "country_code",
    "time_period",
    "life_expectancy",
    "gdp_per_capita",
];

fn open_reader(path: &Path, required: &[&str]) -> Result<csv::Reader<std::fs::File>, LoadError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    // Validate the header up front so a missing column is reported by name
    // instead of surfacing later as a row-level deserialization error.
    let headers = rdr.headers().map_err(|source| LoadError::Csv {
        path: display.clone(),
        source,
    })?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn {
                path: display.clone(),
                column: column.to_string(),
            });
        }
    }
    Ok(rdr)
}

/// Read the vaccination indicator file. Every row must parse; a malformed row
/// is fatal rather than silently skipped.
pub fn load_indicators<P: AsRef<Path>>(path: P) -> Result<Vec<IndicatorRecord>, LoadError> {
    let path = path.as_ref();
    let mut rdr = open_reader(path, INDICATOR_COLUMNS)?;
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        let rec: IndicatorRecord = row.map_err(|source| LoadError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        out.push(rec);
    }
    Ok(out)
}

/// Read the socioeconomic metadata file. `life_expectancy` and
/// `gdp_per_capita` may be empty per row; columns beyond the required set are
/// ignored.
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<Vec<MetadataRecord>, LoadError> {
    let path = path.as_ref();
    let mut rdr = open_reader(path, METADATA_COLUMNS)?;
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        let rec: MetadataRecord = row.map_err(|source| LoadError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        out.push(rec);
    }
    Ok(out)
}

/// Left outer join keyed on (country_code, time_period).
///
/// Every indicator row appears exactly once in the output, in input order;
/// metadata fields are `None` where no key matches. When the metadata file
/// repeats a key, the first occurrence wins.
pub fn join(indicators: Vec<IndicatorRecord>, metadata: &[MetadataRecord]) -> Vec<JoinedRecord> {
    let mut index: AHashMap<(&str, i32), &MetadataRecord> = AHashMap::new();
    for m in metadata {
        index
            .entry((m.country_code.as_str(), m.time_period))
            .or_insert(m);
    }

    indicators
        .into_iter()
        .map(|ind| {
            let meta = index.get(&(ind.country_code.as_str(), ind.time_period));
            JoinedRecord {
                life_expectancy: meta.and_then(|m| m.life_expectancy),
                gdp_per_capita: meta.and_then(|m| m.gdp_per_capita),
                country_code: ind.country_code,
                time_period: ind.time_period,
                obs_value: ind.obs_value,
            }
        })
        .collect()
}

/// Load both files and join them.
pub fn load_and_join<P: AsRef<Path>, Q: AsRef<Path>>(
    indicator_path: P,
    metadata_path: Q,
) -> Result<Vec<JoinedRecord>, LoadError> {
    let indicators = load_indicators(indicator_path)?;
    let metadata = load_metadata(metadata_path)?;
    Ok(join(indicators, &metadata))
}
