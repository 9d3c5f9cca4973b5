#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
}

impl Location {
    pub fn is_valid(&self) -> bool {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng),
            (None, None) => true,
            // A coordinate is only complete with both components
            _ => false,
        }
    }
}
