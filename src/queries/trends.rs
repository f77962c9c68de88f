//! Trend computations: data-completeness predicate, percent change, CAGR,
//! and the full per-occupation summary.

use crate::dataset::Dataset;
use crate::error::{Result, TrendError};
use crate::models::{InflationIndex, ToggleState, TrendDirection, TrendSummary};

// ---------------------------------------------------------------------------
// TrendQuery
// ---------------------------------------------------------------------------

/// Trend statistics over the dataset snapshot.
pub struct TrendQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> TrendQuery<'a> {
    /// Create a new `TrendQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Whether an occupation has enough data to chart and rank.
    ///
    /// True iff it has at least 3 observations, one of them for the base
    /// year, and every observation carries a non-null wage. Occupations
    /// failing this are excluded from ranking and listed as non-selectable.
    pub fn has_complete_data(&self, occupation: &str) -> bool {
        let records: Vec<_> = self.dataset.records_for(occupation).collect();
        records.len() >= 3
            && records
                .iter()
                .any(|r| r.year == Some(self.dataset.base_year()))
            && records.iter().all(|r| r.mean_wage.is_some())
    }

    /// Percent change in wage between the base year and `as_of` (the latest
    /// observed year when `None`).
    ///
    /// With `inflation_adjusted` set, both wages are first divided by their
    /// own year's inflation factor so the comparison is in constant
    /// base-year currency.
    pub fn percent_change(
        &self,
        occupation: &str,
        as_of: Option<i32>,
        toggles: ToggleState,
    ) -> Result<f64> {
        let series = self.dataset.series_for(occupation);
        let base_year = self.dataset.base_year();

        let base_wage = series
            .wage_at(base_year)
            .ok_or_else(|| TrendError::MissingBaseYear {
                occupation: occupation.to_string(),
                base_year,
            })?;

        let (target_year, target_wage) = match as_of {
            Some(year) => {
                let wage = series.wage_at(year).ok_or_else(|| {
                    TrendError::NotFound(format!("{}: no observation for {}", occupation, year))
                })?;
                (year, wage)
            }
            None => {
                let latest = series.latest().ok_or_else(|| TrendError::MissingBaseYear {
                    occupation: occupation.to_string(),
                    base_year,
                })?;
                (latest.year, latest.wage)
            }
        };

        let inflation = self.dataset.inflation();
        let base = adjusted_wage(inflation, base_wage, base_year, toggles)?;
        let target = adjusted_wage(inflation, target_wage, target_year, toggles)?;

        if base <= 0.0 {
            return Err(TrendError::InvalidBaseWage {
                occupation: occupation.to_string(),
                wage: base_wage,
            });
        }

        Ok((target - base) / base * 100.0)
    }

    /// Full trend summary for one occupation under the given toggles.
    ///
    /// Fails with `InsufficientData` when the occupation does not pass
    /// [`has_complete_data`](Self::has_complete_data). All salary figures
    /// are inflation-adjusted when the toggle is set.
    pub fn summary(&self, occupation: &str, toggles: ToggleState) -> Result<TrendSummary> {
        if !self.has_complete_data(occupation) {
            return Err(TrendError::InsufficientData {
                occupation: occupation.to_string(),
            });
        }

        let series = self.dataset.series_for(occupation);
        // Duplicate-year records can collapse below a usable series.
        if series.len() < 2 {
            return Err(TrendError::InsufficientData {
                occupation: occupation.to_string(),
            });
        }

        let base_year = self.dataset.base_year();
        let inflation = self.dataset.inflation();

        let wages: Vec<f64> = series
            .points
            .iter()
            .map(|p| adjusted_wage(inflation, p.wage, p.year, toggles))
            .collect::<Result<_>>()?;

        let base_idx = series
            .points
            .iter()
            .position(|p| p.year == base_year)
            .ok_or_else(|| TrendError::MissingBaseYear {
                occupation: occupation.to_string(),
                base_year,
            })?;
        let base_wage = wages[base_idx];
        let latest_idx = wages.len() - 1;
        let latest_wage = wages[latest_idx];
        let latest_year = series.points[latest_idx].year;

        if base_wage <= 0.0 {
            return Err(TrendError::InvalidBaseWage {
                occupation: occupation.to_string(),
                wage: series.points[base_idx].wage,
            });
        }

        let percent_change = (latest_wage - base_wage) / base_wage * 100.0;
        let growth = cagr(percent_change, latest_year - base_year)?;

        let avg_salary = wages.iter().sum::<f64>() / wages.len() as f64;
        let max_salary = wages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_salary = wages.iter().copied().fold(f64::INFINITY, f64::min);

        let changes: Vec<f64> = wages.windows(2).map(|w| w[1] - w[0]).collect();
        let max_change = changes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_change = changes.iter().copied().fold(f64::INFINITY, f64::min);

        Ok(TrendSummary {
            occupation: occupation.to_string(),
            base_year,
            latest_year,
            base_wage,
            latest_wage,
            percent_change,
            direction: TrendDirection::from_percent_change(percent_change),
            cagr: growth,
            current_salary: latest_wage,
            avg_salary,
            max_salary,
            min_salary,
            changes,
            max_change,
            min_change,
        })
    }

    /// Summaries for every occupation passing the completeness predicate,
    /// in stable first-encounter order.
    ///
    /// Occupations whose summary fails (bad base wage, missing inflation
    /// factor) are reported on stderr and skipped rather than failing the
    /// whole batch.
    pub fn summaries(&self, toggles: ToggleState) -> Vec<TrendSummary> {
        let mut summaries = Vec::new();
        for occupation in self.dataset.occupations() {
            if !self.has_complete_data(occupation) {
                continue;
            }
            match self.summary(occupation, toggles) {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    eprintln!("Skipping trend for {}: {}", occupation, e);
                }
            }
        }
        summaries
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Compound annual growth rate, in percent, for a total percent change over
/// a span of years.
pub fn cagr(total_change_percent: f64, number_of_years: i32) -> Result<f64> {
    if number_of_years <= 0 {
        return Err(TrendError::InvalidPeriod {
            years: number_of_years,
        });
    }
    let ratio = 1.0 + total_change_percent / 100.0;
    Ok((ratio.powf(1.0 / number_of_years as f64) - 1.0) * 100.0)
}

/// A wage in constant base-year currency: divided by its year's inflation
/// factor when the toggle is set, unchanged otherwise.
pub(crate) fn adjusted_wage(
    inflation: &InflationIndex,
    wage: f64,
    year: i32,
    toggles: ToggleState,
) -> Result<f64> {
    if !toggles.inflation_adjusted {
        return Ok(wage);
    }
    match inflation.get(year) {
        Some(factor) if factor > 0.0 => Ok(wage / factor),
        _ => Err(TrendError::MissingInflationFactor { year }),
    }
}
