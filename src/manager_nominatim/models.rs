use serde::Deserialize;

/// One search hit, Nominatim reports coordinates as numeric strings
#[derive(Deserialize)]
pub struct Place {
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}
