//! Immutable in-memory snapshot of wage records and the inflation index.
//!
//! Owned by the [`TrendEngine`](crate::TrendEngine) and borrowed by every
//! query wrapper. Built once, either by the [`loader`](crate::loader) or
//! from a pre-materialized record set, and never mutated afterwards.

use crate::models::{InflationIndex, OccupationSeries, WageRecord};

/// The engine's data snapshot: detail-level wage records, the inflation
/// index, the designated base year, and the occupation titles in stable
/// first-encounter order.
///
/// The stable order matters: the ranking policy breaks ties by input order,
/// so it must survive intact from load to query.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<WageRecord>,
    inflation: InflationIndex,
    base_year: i32,
    occupations: Vec<String>,
}

impl Dataset {
    /// Build a snapshot from raw records.
    ///
    /// Keeps detail-level records that carry a year; group aggregates and
    /// year-less rows are unusable and dropped. Null-wage observations are
    /// kept so the completeness predicate can see them.
    pub fn new(records: Vec<WageRecord>, inflation: InflationIndex, base_year: i32) -> Self {
        let records: Vec<WageRecord> = records
            .into_iter()
            .filter(|r| r.is_detailed() && r.year.is_some())
            .collect();

        let mut occupations: Vec<String> = Vec::new();
        for record in &records {
            if !occupations.iter().any(|o| o == &record.occ_title) {
                occupations.push(record.occ_title.clone());
            }
        }

        Self {
            records,
            inflation,
            base_year,
            occupations,
        }
    }

    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    pub fn inflation(&self) -> &InflationIndex {
        &self.inflation
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Occupation titles in stable first-encounter order.
    pub fn occupations(&self) -> &[String] {
        &self.occupations
    }

    /// Occupation titles sorted alphabetically, for display lists.
    pub fn sorted_occupations(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.occupations.iter().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    pub fn contains(&self, occupation: &str) -> bool {
        self.occupations.iter().any(|o| o == occupation)
    }

    /// All records for one occupation, including null-wage observations.
    pub fn records_for<'a>(
        &'a self,
        occupation: &'a str,
    ) -> impl Iterator<Item = &'a WageRecord> + 'a {
        self.records.iter().filter(move |r| r.occ_title == occupation)
    }

    /// The (year, wage) series for one occupation, ascending by year.
    pub fn series_for(&self, occupation: &str) -> OccupationSeries {
        OccupationSeries::from_records(occupation, self.records_for(occupation))
    }
}
