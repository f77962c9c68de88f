//! Per-occupation series access and chart-ready normalization.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Result, TrendError};
use crate::models::{
    NormalizedPoint, NormalizedSeries, OccupationSeries, SeriesUnit, ToggleState, TrendDirection,
};
use crate::queries::trends::{adjusted_wage, TrendQuery};

// ---------------------------------------------------------------------------
// OccupationListing — sidebar entry with selectability flag
// ---------------------------------------------------------------------------

/// One entry of the occupation list: occupations failing the completeness
/// predicate are still listed but flagged non-selectable, so the caller can
/// render them disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupationListing {
    pub title: String,
    pub selectable: bool,
}

// ---------------------------------------------------------------------------
// SeriesQuery
// ---------------------------------------------------------------------------

/// Series access for the rendering collaborator.
pub struct SeriesQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> SeriesQuery<'a> {
    /// Create a new `SeriesQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// The raw (year, wage) series for an occupation.
    pub fn get(&self, occupation: &str) -> Result<OccupationSeries> {
        if !self.dataset.contains(occupation) {
            return Err(TrendError::NotFound(format!(
                "unknown occupation: {}",
                occupation
            )));
        }
        Ok(self.dataset.series_for(occupation))
    }

    /// A series normalized for plotting under the given toggles.
    ///
    /// Values are percent change from the base year, or dollar wages when
    /// `show_raw_salary` is set; both in constant base-year currency when
    /// `inflation_adjusted` is set. Fails with `InsufficientData` for
    /// occupations that do not pass the completeness predicate.
    pub fn normalized(&self, occupation: &str, toggles: ToggleState) -> Result<NormalizedSeries> {
        let trends = TrendQuery::new(self.dataset);
        if !trends.has_complete_data(occupation) {
            return Err(TrendError::InsufficientData {
                occupation: occupation.to_string(),
            });
        }

        let series = self.get(occupation)?;
        let base_year = self.dataset.base_year();
        let inflation = self.dataset.inflation();

        let base_raw = series
            .wage_at(base_year)
            .ok_or_else(|| TrendError::MissingBaseYear {
                occupation: occupation.to_string(),
                base_year,
            })?;
        let base = adjusted_wage(inflation, base_raw, base_year, toggles)?;
        if base <= 0.0 {
            return Err(TrendError::InvalidBaseWage {
                occupation: occupation.to_string(),
                wage: base_raw,
            });
        }

        let mut points = Vec::with_capacity(series.len());
        for point in &series.points {
            let wage = adjusted_wage(inflation, point.wage, point.year, toggles)?;
            let value = if toggles.show_raw_salary {
                wage
            } else {
                (wage - base) / base * 100.0
            };
            points.push(NormalizedPoint {
                year: point.year,
                value,
            });
        }

        let unit = if toggles.show_raw_salary {
            SeriesUnit::Dollars
        } else {
            SeriesUnit::PercentChange
        };

        Ok(NormalizedSeries {
            occupation: occupation.to_string(),
            unit,
            inflation_adjusted: toggles.inflation_adjusted,
            direction: trends
                .percent_change(occupation, None, toggles)
                .map(TrendDirection::from_percent_change)?,
            points,
        })
    }

    /// Overall trend direction for an occupation (the original dashboard's
    /// green/red line color).
    pub fn direction(&self, occupation: &str, toggles: ToggleState) -> Result<TrendDirection> {
        TrendQuery::new(self.dataset)
            .percent_change(occupation, None, toggles)
            .map(TrendDirection::from_percent_change)
    }

    /// All occupations sorted alphabetically, flagged by selectability.
    pub fn listing(&self) -> Vec<OccupationListing> {
        let trends = TrendQuery::new(self.dataset);
        self.dataset
            .sorted_occupations()
            .into_iter()
            .map(|title| OccupationListing {
                title: title.to_string(),
                selectable: trends.has_complete_data(title),
            })
            .collect()
    }
}
