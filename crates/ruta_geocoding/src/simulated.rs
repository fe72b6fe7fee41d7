use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::{
    error::GeocodingError,
    geocoder::{Geocoder, normalize_address},
};

/// Default base latitude (Bogotá).
pub const DEFAULT_BASE_LAT: f64 = 4.6097;
/// Default base longitude (Bogotá).
pub const DEFAULT_BASE_LNG: f64 = -74.0817;
/// Total width of the jitter window in degrees, roughly 5km on each side.
pub const DEFAULT_SPREAD_DEGREES: f64 = 0.1;

/// Stand-in for a real geocoding API: every address lands at a random
/// offset around a base point.
pub struct SimulatedGeocoder {
    base: geo_types::Point,
    spread_degrees: f64,
    rng: Mutex<SmallRng>,
}

impl SimulatedGeocoder {
    pub fn new(base: geo_types::Point, spread_degrees: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        Self {
            base,
            spread_degrees,
            rng: Mutex::new(rng),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            geo_types::Point::new(DEFAULT_BASE_LNG, DEFAULT_BASE_LAT),
            DEFAULT_SPREAD_DEGREES,
            Some(seed),
        )
    }

    fn random_offset(&self, rng: &mut SmallRng) -> f64 {
        (rng.random::<f64>() - 0.5) * self.spread_degrees
    }
}

impl Default for SimulatedGeocoder {
    fn default() -> Self {
        Self::new(
            geo_types::Point::new(DEFAULT_BASE_LNG, DEFAULT_BASE_LAT),
            DEFAULT_SPREAD_DEGREES,
            None,
        )
    }
}

impl Geocoder for SimulatedGeocoder {
    async fn geocode(&self, address: &str) -> Result<geo_types::Point, GeocodingError> {
        let address = normalize_address(address)?;

        let mut rng = self.rng.lock();
        let lat = self.base.y() + self.random_offset(&mut rng);
        let lng = self.base.x() + self.random_offset(&mut rng);

        debug!("Simulated geocoding of '{}': ({}, {})", address, lat, lng);

        Ok(geo_types::Point::new(lng, lat))
    }
}
