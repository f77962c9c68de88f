use std::path::PathBuf;

pub const BASE_YEAR: i32 = 2017;
pub const FIRST_YEAR: i32 = 2017;
pub const LAST_YEAR: i32 = 2023;

pub const DEFAULT_AREA: &str = "Wisconsin";
pub const DETAILED_GROUP: &str = "detailed";

pub const GRID_CAPACITY: usize = 9;
pub const FOCUS_CAPACITY: usize = 1;
pub const TOP_INCREASING: usize = 5;
pub const TOP_DECREASING: usize = 4;

pub const INFLATION_FILE: &str = "inflation.json";

pub fn wage_file(year: i32) -> String {
    format!("state_M{}_dl.json", year)
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("oews-trends")
    } else {
        PathBuf::from(".oews-trends-data")
    }
}
