//! Continent annotation: apply the classifier to every joined row.

use crate::models::{Continent, EnrichedRecord, JoinedRecord};
use crate::registry::{classify, CountryRegistry};
use std::collections::BTreeSet;

/// Attach a continent to every row. Order-preserving; identical country codes
/// always receive the same continent within one run.
pub fn annotate<R: CountryRegistry>(
    joined: Vec<JoinedRecord>,
    registry: &R,
) -> Vec<EnrichedRecord> {
    joined
        .into_iter()
        .map(|row| {
            let continent = classify(registry, &row.country_code);
            EnrichedRecord::from_joined(row, continent)
        })
        .collect()
}

/// Distinct continent labels present in the table, sorted. Used for the
/// diagnostic line printed after classification and for the map's continent
/// menu.
pub fn distinct_continents(rows: &[EnrichedRecord]) -> Vec<Continent> {
    rows.iter()
        .map(|r| r.continent)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
