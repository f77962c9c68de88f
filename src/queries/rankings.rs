//! Default-selection ranking policy.
//!
//! Every occupation passing the completeness predicate is summarized,
//! partitioned by trend direction, and sorted descending by the magnitude
//! of its percent change. The default selection takes the top few of each
//! partition per display profile. The whole policy is deterministic:
//! identical input data yields identical ordered results, with ties broken
//! by first-encounter input order.

use std::cmp::Ordering;

use crate::dataset::Dataset;
use crate::models::{RankingProfile, ToggleState, TrendSummary};
use crate::queries::trends::TrendQuery;
use crate::selection::Selection;

// ---------------------------------------------------------------------------
// RankedTrends
// ---------------------------------------------------------------------------

/// Valid occupations partitioned by direction, each sorted descending by
/// `|percent_change|`.
#[derive(Debug, Clone)]
pub struct RankedTrends {
    pub increasing: Vec<TrendSummary>,
    pub decreasing: Vec<TrendSummary>,
}

// ---------------------------------------------------------------------------
// RankingQuery
// ---------------------------------------------------------------------------

/// Ranking and default-selection policy over the dataset snapshot.
pub struct RankingQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> RankingQuery<'a> {
    /// Create a new `RankingQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Rank all valid occupations by magnitude of percent change.
    pub fn ranked(&self, toggles: ToggleState) -> RankedTrends {
        let summaries = TrendQuery::new(self.dataset).summaries(toggles);

        let (mut increasing, mut decreasing): (Vec<_>, Vec<_>) = summaries
            .into_iter()
            .partition(|s| s.direction.is_increasing());

        // Stable sort keeps first-encounter order for equal magnitudes.
        increasing.sort_by(|a, b| magnitude_desc(a, b));
        decreasing.sort_by(|a, b| magnitude_desc(a, b));

        RankedTrends {
            increasing,
            decreasing,
        }
    }

    /// The occupations pre-selected when no explicit user selection exists:
    /// the top risers and fallers for the given profile, risers first.
    pub fn default_selection(&self, profile: RankingProfile, toggles: ToggleState) -> Vec<String> {
        let ranked = self.ranked(toggles);
        ranked
            .increasing
            .into_iter()
            .take(profile.top_increasing())
            .chain(
                ranked
                    .decreasing
                    .into_iter()
                    .take(profile.top_decreasing()),
            )
            .map(|s| s.occupation)
            .collect()
    }

    /// The default selection materialized into display slots, risers first
    /// from slot 0, with the cursor positioned after the last of them.
    pub fn initial_selection(&self, profile: RankingProfile, toggles: ToggleState) -> Selection {
        let mut selection = Selection::new(profile.capacity());
        for occupation in self.default_selection(profile, toggles) {
            selection.insert(&occupation);
        }
        selection
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn magnitude_desc(a: &TrendSummary, b: &TrendSummary) -> Ordering {
    b.percent_change
        .abs()
        .partial_cmp(&a.percent_change.abs())
        .unwrap_or(Ordering::Equal)
}
