use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// TrendDirection
// ---------------------------------------------------------------------------

/// Increasing iff percent change is strictly positive; a flat series counts
/// as Decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

impl TrendDirection {
    pub fn from_percent_change(percent_change: f64) -> Self {
        if percent_change > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }

    pub fn is_increasing(self) -> bool {
        self == TrendDirection::Increasing
    }
}

// ---------------------------------------------------------------------------
// ToggleState — view options passed to every computation
// ---------------------------------------------------------------------------

/// The caller's current view options. Passed explicitly to each computation
/// so results are a pure function of dataset and toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleState {
    /// Express wages in constant base-year currency.
    pub inflation_adjusted: bool,
    /// Plot raw dollar wages instead of percent change from the base year.
    pub show_raw_salary: bool,
}

impl ToggleState {
    pub fn inflation_adjusted() -> Self {
        Self {
            inflation_adjusted: true,
            show_raw_salary: false,
        }
    }
}

// ---------------------------------------------------------------------------
// RankingProfile — how many occupations the default selection seeds
// ---------------------------------------------------------------------------

/// Display profile governing the default-selection ranking policy and the
/// selection capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingProfile {
    /// 3x3 grid: top 5 increasing plus top 4 decreasing.
    Desktop,
    /// Single focus plot: top 1 increasing.
    Mobile,
}

impl RankingProfile {
    pub fn capacity(self) -> usize {
        match self {
            RankingProfile::Desktop => config::GRID_CAPACITY,
            RankingProfile::Mobile => config::FOCUS_CAPACITY,
        }
    }

    pub fn top_increasing(self) -> usize {
        match self {
            RankingProfile::Desktop => config::TOP_INCREASING,
            RankingProfile::Mobile => 1,
        }
    }

    pub fn top_decreasing(self) -> usize {
        match self {
            RankingProfile::Desktop => config::TOP_DECREASING,
            RankingProfile::Mobile => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// TrendSummary — per-occupation trend statistics
// ---------------------------------------------------------------------------

/// Trend statistics for one occupation over its observed years.
///
/// Recomputed on demand from the dataset and the current [`ToggleState`];
/// never cached. `max_change`/`min_change` are extrema of the year-over-year
/// deltas, distinct from the single base-to-latest `percent_change`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TrendSummary {
    pub occupation: String,
    pub base_year: i32,
    pub latest_year: i32,
    pub base_wage: f64,
    pub latest_wage: f64,
    pub percent_change: f64,
    pub direction: TrendDirection,
    pub cagr: f64,
    pub current_salary: f64,
    pub avg_salary: f64,
    pub max_salary: f64,
    pub min_salary: f64,
    pub changes: Vec<f64>,
    pub max_change: f64,
    pub min_change: f64,
}
