use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// WageRecord — One raw OEWS observation (occupation x year)
// ---------------------------------------------------------------------------

/// A single raw observation from an OEWS state wage file.
///
/// Field names follow the upstream data files. Older files use `OCC_GROUP`
/// where newer ones use `O_GROUP`; both are accepted. `YEAR` is absent from
/// some files and is stamped by the loader from the file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageRecord {
    #[serde(rename = "AREA_TITLE")]
    pub area_title: String,
    #[serde(rename = "OCC_TITLE")]
    pub occ_title: String,
    #[serde(rename = "YEAR", default)]
    pub year: Option<i32>,
    #[serde(rename = "A_MEAN", default)]
    pub mean_wage: Option<f64>,
    #[serde(rename = "O_GROUP", alias = "OCC_GROUP", default)]
    pub group: Option<String>,
}

impl WageRecord {
    /// True for detail-level occupation rows (as opposed to major/minor
    /// group aggregates, which the dashboard never charts).
    pub fn is_detailed(&self) -> bool {
        self.group.as_deref() == Some(config::DETAILED_GROUP)
    }
}

// ---------------------------------------------------------------------------
// InflationIndex — year -> multiplicative inflation factor
// ---------------------------------------------------------------------------

/// Row shape of `inflation.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Inflation")]
    pub factor: f64,
}

/// Mapping from year to a positive multiplicative inflation factor.
///
/// Immutable after load. Dividing a wage by its year's factor expresses it
/// in constant base-year currency.
#[derive(Debug, Clone, Default)]
pub struct InflationIndex {
    factors: HashMap<i32, f64>,
}

impl InflationIndex {
    pub fn new(factors: HashMap<i32, f64>) -> Self {
        Self { factors }
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.factors.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl FromIterator<InflationRow> for InflationIndex {
    fn from_iter<I: IntoIterator<Item = InflationRow>>(rows: I) -> Self {
        Self {
            factors: rows.into_iter().map(|r| (r.year, r.factor)).collect(),
        }
    }
}

impl FromIterator<(i32, f64)> for InflationIndex {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(pairs: I) -> Self {
        Self {
            factors: pairs.into_iter().collect(),
        }
    }
}
