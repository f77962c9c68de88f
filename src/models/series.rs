use serde::{Deserialize, Serialize};

use super::record::WageRecord;
use super::summary::TrendDirection;

// ---------------------------------------------------------------------------
// OccupationSeries — ordered (year, wage) observations for one occupation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub wage: f64,
}

/// All observations for one occupation, sorted ascending by year.
///
/// Years are unique within a series; when the raw records carry duplicate
/// years the first-encountered one wins. Null-wage observations are
/// excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupationSeries {
    pub occupation: String,
    pub points: Vec<SeriesPoint>,
}

impl OccupationSeries {
    /// Build a series from raw records, keeping only observations with a
    /// year and a wage.
    pub fn from_records<'a, I>(occupation: &str, records: I) -> Self
    where
        I: IntoIterator<Item = &'a WageRecord>,
    {
        let mut points: Vec<SeriesPoint> = records
            .into_iter()
            .filter_map(|r| {
                let year = r.year?;
                let wage = r.mean_wage?;
                Some(SeriesPoint { year, wage })
            })
            .collect();
        points.sort_by_key(|p| p.year);
        points.dedup_by_key(|p| p.year);

        Self {
            occupation: occupation.to_string(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Wage at a specific year, if observed.
    pub fn wage_at(&self, year: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.wage)
    }

    /// The earliest observation.
    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    /// The most recent observation.
    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|p| p.year)
    }

    pub fn wages(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.wage)
    }
}

// ---------------------------------------------------------------------------
// NormalizedSeries — chart-ready output for the rendering collaborator
// ---------------------------------------------------------------------------

/// Unit of the values in a [`NormalizedSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesUnit {
    /// Percent change relative to the base year.
    PercentChange,
    /// Annual wage in dollars.
    Dollars,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub year: i32,
    pub value: f64,
}

/// A series normalized for plotting: either percent change from the base
/// year or raw salary, optionally in constant base-year currency, plus the
/// overall direction used to color the trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedSeries {
    pub occupation: String,
    pub unit: SeriesUnit,
    pub inflation_adjusted: bool,
    pub direction: TrendDirection,
    pub points: Vec<NormalizedPoint>,
}
