//! Query modules for the trend engine.
//!
//! Each module provides a query struct that borrows the engine's
//! [`Dataset`](crate::dataset::Dataset) and exposes methods returning
//! `Result<T>` with typed payloads.

pub mod rankings;
pub mod series;
pub mod trends;

pub use rankings::{RankedTrends, RankingQuery};
pub use series::{OccupationListing, SeriesQuery};
pub use trends::{cagr, TrendQuery};
