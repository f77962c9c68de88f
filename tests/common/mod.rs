//! Shared test fixtures for the trend engine integration tests.
//!
//! Provides handcrafted record sets small enough to verify by hand:
//! `sample_engine()` mixes valid and invalid occupations, `ranked_engine()`
//! has enough risers and fallers to exercise the default-selection cutoffs.

use oews_trends::models::{InflationIndex, WageRecord};
use oews_trends::TrendEngine;

/// One detailed-level Wisconsin record.
pub fn record(occupation: &str, year: i32, wage: Option<f64>) -> WageRecord {
    WageRecord {
        area_title: "Wisconsin".to_string(),
        occ_title: occupation.to_string(),
        year: Some(year),
        mean_wage: wage,
        group: Some("detailed".to_string()),
    }
}

/// Inflation factors for 2017-2023, flat at 1.0.
pub fn constant_inflation() -> InflationIndex {
    (2017..=2023).map(|year| (year, 1.0)).collect()
}

/// Inflation factors for 2017-2023 rising to 1.2 by 2023.
pub fn rising_inflation() -> InflationIndex {
    [
        (2017, 1.0),
        (2018, 1.02),
        (2019, 1.04),
        (2020, 1.06),
        (2021, 1.10),
        (2022, 1.15),
        (2023, 1.2),
    ]
    .into_iter()
    .collect()
}

/// Sample records mixing valid and invalid occupations.
///
/// Valid (complete data):
/// - "Bus Drivers":         2017: 40000, 2020: 42000, 2023: 44000  (+10%)
/// - "Software Developers": 2017: 80000, 2019: 90000, 2023: 100000 (+25%)
/// - "Registered Nurses":   2017: 60000, 2020: 63000, 2023: 69000  (+15%)
/// - "Cashiers":            2017: 25000, 2020: 24000, 2023: 20000  (-20%)
/// - "Tellers":             2017: 30000, 2020: 29000, 2023: 27000  (-10%)
///
/// Invalid:
/// - "Postal Clerks": only 2019 and 2020, no base-year observation
/// - "Travel Agents": has a null wage observation
pub fn sample_records() -> Vec<WageRecord> {
    vec![
        record("Bus Drivers", 2017, Some(40000.0)),
        record("Bus Drivers", 2020, Some(42000.0)),
        record("Bus Drivers", 2023, Some(44000.0)),
        record("Software Developers", 2017, Some(80000.0)),
        record("Software Developers", 2019, Some(90000.0)),
        record("Software Developers", 2023, Some(100000.0)),
        record("Registered Nurses", 2017, Some(60000.0)),
        record("Registered Nurses", 2020, Some(63000.0)),
        record("Registered Nurses", 2023, Some(69000.0)),
        record("Cashiers", 2017, Some(25000.0)),
        record("Cashiers", 2020, Some(24000.0)),
        record("Cashiers", 2023, Some(20000.0)),
        record("Tellers", 2017, Some(30000.0)),
        record("Tellers", 2020, Some(29000.0)),
        record("Tellers", 2023, Some(27000.0)),
        record("Postal Clerks", 2019, Some(50000.0)),
        record("Postal Clerks", 2020, Some(51000.0)),
        record("Travel Agents", 2017, Some(40000.0)),
        record("Travel Agents", 2020, None),
        record("Travel Agents", 2023, Some(41000.0)),
    ]
}

pub fn sample_engine() -> TrendEngine {
    TrendEngine::from_parts(sample_records(), rising_inflation())
}

pub fn sample_engine_flat_inflation() -> TrendEngine {
    TrendEngine::from_parts(sample_records(), constant_inflation())
}

/// An engine with 6 rising and 5 falling occupations, all valid, with
/// distinct percent-change magnitudes so ranking order is unambiguous.
///
/// Risers (base 100000): I1 +30, I2 +25, I3 +20, I4 +15, I5 +10, I6 +5.
/// Fallers (base 100000): D1 -28, D2 -22, D3 -18, D4 -12, D5 -6.
pub fn ranked_engine() -> TrendEngine {
    let mut records = Vec::new();
    let risers: [(&str, f64); 6] = [
        ("I1", 30.0),
        ("I2", 25.0),
        ("I3", 20.0),
        ("I4", 15.0),
        ("I5", 10.0),
        ("I6", 5.0),
    ];
    let fallers: [(&str, f64); 5] = [
        ("D1", -28.0),
        ("D2", -22.0),
        ("D3", -18.0),
        ("D4", -12.0),
        ("D5", -6.0),
    ];

    for (occupation, pct) in risers.into_iter().chain(fallers) {
        let base = 100000.0;
        let latest = base * (1.0 + pct / 100.0);
        records.push(record(occupation, 2017, Some(base)));
        records.push(record(occupation, 2020, Some((base + latest) / 2.0)));
        records.push(record(occupation, 2023, Some(latest)));
    }

    TrendEngine::from_parts(records, constant_inflation())
}
