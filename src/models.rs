use serde::{Deserialize, Serialize};

/// One row of a country GDP table (`country,year,gdp`), GDP in current USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpRecord {
    pub country: String,
    pub year: i32,
    pub gdp: f64,
}

impl GdpRecord {
    pub fn new(country: impl Into<String>, year: i32, gdp: f64) -> Self {
        Self {
            country: country.into(),
            year,
            gdp,
        }
    }

    /// GDP in trillions of USD.
    pub fn trillions(&self) -> f64 {
        self.gdp / 1e12
    }
}
