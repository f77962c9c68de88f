//! JSON data-file loader.
//!
//! Reads the per-year OEWS state wage files and the inflation file from a
//! local data directory and materializes them into a [`Dataset`]. Handles
//! `.gz` files transparently. A year file that is missing or corrupt is
//! reported on stderr and skipped; the load only fails if nothing usable
//! was found at all.

use std::fs;
use std::io::{BufReader, Read};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::config;
use crate::dataset::Dataset;
use crate::error::{Result, TrendError};
use crate::models::{InflationIndex, InflationRow, WageRecord};

/// Loads wage and inflation data files into a [`Dataset`].
///
/// Keeps only records matching the area substring, at the detailed
/// occupation level, with a non-null mean wage. Records without a `YEAR`
/// field are stamped with the year of the file they came from.
pub struct DataLoader {
    /// Directory containing `state_M{year}_dl.json[.gz]` and `inflation.json[.gz]`.
    pub data_dir: PathBuf,
    area: String,
    years: RangeInclusive<i32>,
    base_year: i32,
}

impl DataLoader {
    /// Create a new loader.
    ///
    /// If `data_dir` is `None`, uses the platform-appropriate default data
    /// directory.
    pub fn new(
        data_dir: Option<PathBuf>,
        area: impl Into<String>,
        years: RangeInclusive<i32>,
        base_year: i32,
    ) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(config::default_data_dir),
            area: area.into(),
            years,
            base_year,
        }
    }

    /// Load all year files plus the inflation file and build the snapshot.
    pub fn load(&self) -> Result<Dataset> {
        let mut records: Vec<WageRecord> = Vec::new();

        for year in self.years.clone() {
            match self.load_year(year) {
                Ok(mut year_records) => records.append(&mut year_records),
                Err(e) => {
                    eprintln!("Skipping wage data for {}: {}", year, e);
                }
            }
        }

        if records.is_empty() {
            return Err(TrendError::NotFound(format!(
                "no usable wage records for '{}' under {}",
                self.area,
                self.data_dir.display()
            )));
        }

        let inflation = self.load_inflation()?;
        Ok(Dataset::new(records, inflation, self.base_year))
    }

    /// Load and filter one year's wage file.
    fn load_year(&self, year: i32) -> Result<Vec<WageRecord>> {
        let path = self.resolve(&config::wage_file(year))?;
        let rows: Vec<WageRecord> = serde_json::from_str(&read_to_string(&path)?)?;

        let records = rows
            .into_iter()
            .filter(|r| {
                r.area_title.contains(&self.area)
                    && r.is_detailed()
                    && r.mean_wage.is_some()
            })
            .map(|mut r| {
                if r.year.is_none() {
                    r.year = Some(year);
                }
                r
            })
            .collect();

        Ok(records)
    }

    /// Load the inflation file into an index.
    pub fn load_inflation(&self) -> Result<InflationIndex> {
        let path = self.resolve(config::INFLATION_FILE)?;
        let rows: Vec<InflationRow> = serde_json::from_str(&read_to_string(&path)?)?;
        Ok(rows.into_iter().collect())
    }

    /// Resolve a logical file name to a path, preferring the plain file and
    /// falling back to a `.gz` sibling.
    fn resolve(&self, filename: &str) -> Result<PathBuf> {
        let plain = self.data_dir.join(filename);
        if plain.exists() {
            return Ok(plain);
        }
        let gz = self.data_dir.join(format!("{}.gz", filename));
        if gz.exists() {
            return Ok(gz);
        }
        Err(TrendError::NotFound(format!(
            "{} not found in {}",
            filename,
            self.data_dir.display()
        )))
    }
}

/// Read a file to a string, decompressing `.gz` transparently.
fn read_to_string(path: &Path) -> Result<String> {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut contents = String::new();
        BufReader::new(decoder).read_to_string(&mut contents)?;
        Ok(contents)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
