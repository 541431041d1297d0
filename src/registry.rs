//! Country reference registry and the continent classifier built on top of it.
//!
//! The registry maps ISO 3166-1 alpha-3 codes to two-letter region codes; the
//! classifier turns those into [`Continent`] values. Classification is total:
//! any lookup failure (malformed code, registry miss, unknown region) degrades
//! to `Continent::Other` instead of erroring.

use crate::models::Continent;
use ahash::AHashMap;

/// Read-only lookup from an alpha-3 country code to a region code.
///
/// Kept as a trait so tests can substitute a stub registry; the pipeline only
/// ever reads from it.
pub trait CountryRegistry {
    /// Region code (e.g. `"EU"`) for a normalized alpha-3 code, if known.
    fn region_code(&self, alpha3: &str) -> Option<&str>;
}

/// Registry backed by the reference table bundled with the crate
/// (`assets/country_regions.csv`).
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    regions: AHashMap<String, String>,
}

const REGION_TABLE: &str = include_str!("../assets/country_regions.csv");

impl Default for StaticRegistry {
    fn default() -> Self {
        // The bundled table is trusted input: two columns, header row first.
        let mut regions = AHashMap::new();
        for line in REGION_TABLE.lines().skip(1) {
            if let Some((code, region)) = line.split_once(',') {
                regions.insert(code.trim().to_string(), region.trim().to_string());
            }
        }
        Self { regions }
    }
}

impl CountryRegistry for StaticRegistry {
    fn region_code(&self, alpha3: &str) -> Option<&str> {
        self.regions.get(alpha3).map(String::as_str)
    }
}

/// Classify a country code into a continent bucket.
///
/// Input is trimmed and upper-cased before lookup. Returns `Continent::Other`
/// for anything the registry or the region table does not recognize; never
/// fails for any input string.
pub fn classify<R: CountryRegistry>(registry: &R, country_code: &str) -> Continent {
    let code = country_code.trim().to_ascii_uppercase();
    registry
        .region_code(&code)
        .and_then(Continent::from_region_code)
        .unwrap_or(Continent::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_parses_and_covers_all_regions() {
        let reg = StaticRegistry::default();
        assert!(reg.regions.len() > 200);
        for region in ["AF", "AS", "EU", "NA", "OC", "SA", "AN"] {
            assert!(
                reg.regions.values().any(|r| r == region),
                "no entry for region {region}"
            );
        }
    }

    #[test]
    fn classify_normalizes_case_and_whitespace() {
        let reg = StaticRegistry::default();
        assert_eq!(classify(&reg, " deu "), Continent::Europe);
        assert_eq!(classify(&reg, "BRA"), Continent::SouthAmerica);
    }
}
