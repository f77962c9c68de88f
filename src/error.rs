#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{occupation}: no observation for base year {base_year}")]
    MissingBaseYear { occupation: String, base_year: i32 },

    #[error("no inflation factor for year {year}")]
    MissingInflationFactor { year: i32 },

    #[error("{occupation}: base wage {wage} is zero or negative")]
    InvalidBaseWage { occupation: String, wage: f64 },

    #[error("invalid period: {years} years")]
    InvalidPeriod { years: i32 },

    #[error("{occupation}: insufficient data")]
    InsufficientData { occupation: String },
}

pub type Result<T> = std::result::Result<T, TrendError>;
