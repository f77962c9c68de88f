//! Occupation wage trend analysis over BLS OEWS state wage data.
//!
//! Ingests yearly wage records and an inflation index, filters occupations
//! to those with complete data, and computes the trend statistics behind
//! the wage dashboard: percent change from a base year, compound annual
//! growth, salary aggregates, and the ranking that seeds the default grid
//! selection. Data files are loaded from disk once; every computation is a
//! pure function of the immutable snapshot and the caller's view toggles.
//!
//! # Quick start
//!
//! ```
//! use oews_trends::models::{InflationIndex, ToggleState, WageRecord};
//! use oews_trends::TrendEngine;
//!
//! let records = vec![
//!     WageRecord {
//!         area_title: "Wisconsin".to_string(),
//!         occ_title: "Bus Drivers".to_string(),
//!         year: Some(2017),
//!         mean_wage: Some(40000.0),
//!         group: Some("detailed".to_string()),
//!     },
//!     WageRecord {
//!         area_title: "Wisconsin".to_string(),
//!         occ_title: "Bus Drivers".to_string(),
//!         year: Some(2020),
//!         mean_wage: Some(42000.0),
//!         group: Some("detailed".to_string()),
//!     },
//!     WageRecord {
//!         area_title: "Wisconsin".to_string(),
//!         occ_title: "Bus Drivers".to_string(),
//!         year: Some(2023),
//!         mean_wage: Some(44000.0),
//!         group: Some("detailed".to_string()),
//!     },
//! ];
//!
//! let engine = TrendEngine::from_parts(records, InflationIndex::default());
//! let change = engine
//!     .trends()
//!     .percent_change("Bus Drivers", None, ToggleState::default())
//!     .unwrap();
//! assert!((change - 10.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod models;
pub mod queries;
pub mod selection;

pub use dataset::Dataset;
pub use error::{Result, TrendError};
pub use loader::DataLoader;
pub use selection::Selection;

use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use models::{InflationIndex, WageRecord};

// ---------------------------------------------------------------------------
// TrendEngineBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TrendEngine`] from data
/// files on disk.
///
/// Use [`TrendEngine::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](TrendEngineBuilder::build) to load the
/// snapshot.
pub struct TrendEngineBuilder {
    data_dir: Option<PathBuf>,
    area: String,
    years: RangeInclusive<i32>,
    base_year: i32,
}

impl Default for TrendEngineBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            area: config::DEFAULT_AREA.to_string(),
            years: config::FIRST_YEAR..=config::LAST_YEAR,
            base_year: config::BASE_YEAR,
        }
    }
}

impl TrendEngineBuilder {
    /// Set the directory holding the wage and inflation data files.
    ///
    /// If not set, the platform-appropriate default data directory is used.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Restrict records to areas whose title contains this substring.
    ///
    /// Defaults to `"Wisconsin"`.
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Set the range of year files to load. Defaults to 2017..=2023.
    pub fn years(mut self, years: RangeInclusive<i32>) -> Self {
        self.years = years;
        self
    }

    /// Set the base year percent changes are measured against.
    ///
    /// Defaults to 2017.
    pub fn base_year(mut self, year: i32) -> Self {
        self.base_year = year;
        self
    }

    /// Load the data files and build the engine.
    pub fn build(self) -> Result<TrendEngine> {
        let loader = DataLoader::new(self.data_dir, self.area, self.years, self.base_year);
        Ok(TrendEngine {
            dataset: loader.load()?,
        })
    }
}

// ---------------------------------------------------------------------------
// TrendEngine
// ---------------------------------------------------------------------------

/// The main entry point for wage trend analysis.
///
/// Owns the immutable [`Dataset`] snapshot and exposes the computation
/// surfaces as lightweight borrowing query wrappers. Created via
/// [`TrendEngine::builder()`] (load from disk) or
/// [`TrendEngine::from_parts()`] (pre-materialized records).
pub struct TrendEngine {
    dataset: Dataset,
}

impl TrendEngine {
    /// Create a new builder for loading data files from disk.
    pub fn builder() -> TrendEngineBuilder {
        TrendEngineBuilder::default()
    }

    /// Build an engine from an already-materialized record snapshot, using
    /// the default base year.
    pub fn from_parts(records: Vec<WageRecord>, inflation: InflationIndex) -> Self {
        Self::new(Dataset::new(records, inflation, config::BASE_YEAR))
    }

    /// Build an engine around an existing dataset snapshot.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    // -- Query accessors ---------------------------------------------------

    /// Access trend computations: completeness predicate, percent change,
    /// CAGR, per-occupation summaries.
    pub fn trends(&self) -> queries::trends::TrendQuery<'_> {
        queries::trends::TrendQuery::new(&self.dataset)
    }

    /// Access per-occupation series and chart-ready normalization.
    pub fn series(&self) -> queries::series::SeriesQuery<'_> {
        queries::series::SeriesQuery::new(&self.dataset)
    }

    /// Access the ranking and default-selection policy.
    pub fn rankings(&self) -> queries::rankings::RankingQuery<'_> {
        queries::rankings::RankingQuery::new(&self.dataset)
    }

    // -- Utility accessors -------------------------------------------------

    /// The base year percent changes are measured against.
    pub fn base_year(&self) -> i32 {
        self.dataset.base_year()
    }

    /// Occupation titles in stable first-encounter order.
    pub fn occupations(&self) -> &[String] {
        self.dataset.occupations()
    }

    /// Return a reference to the underlying dataset snapshot.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for TrendEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrendEngine(records={}, occupations={}, base_year={})",
            self.dataset.len(),
            self.dataset.occupations().len(),
            self.dataset.base_year()
        )
    }
}
