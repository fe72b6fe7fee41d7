use tracing::debug;

use crate::{
    error::GeocodingError,
    fixed::FixedGeocoder,
    geocoder::Geocoder,
    geocoder_provider::GeocoderProvider,
    simulated::{DEFAULT_BASE_LAT, DEFAULT_BASE_LNG, DEFAULT_SPREAD_DEGREES, SimulatedGeocoder},
};

pub enum GeocodingClient {
    Simulated(SimulatedGeocoder),
    Fixed(FixedGeocoder),
}

impl GeocodingClient {
    pub fn new(provider: GeocoderProvider) -> Self {
        match provider {
            GeocoderProvider::Simulated {
                seed,
                base,
                spread_degrees,
            } => {
                let [lat, lng] = base.unwrap_or([DEFAULT_BASE_LAT, DEFAULT_BASE_LNG]);
                debug!("Using simulated geocoder around ({}, {})", lat, lng);
                GeocodingClient::Simulated(SimulatedGeocoder::new(
                    geo_types::Point::new(lng, lat),
                    spread_degrees.unwrap_or(DEFAULT_SPREAD_DEGREES),
                    seed,
                ))
            }
            GeocoderProvider::Fixed { addresses } => {
                debug!("Using fixed geocoder with {} addresses", addresses.len());
                GeocodingClient::Fixed(FixedGeocoder::from_iter(addresses))
            }
        }
    }
}

impl Default for GeocodingClient {
    fn default() -> Self {
        GeocodingClient::new(GeocoderProvider::default())
    }
}

impl Geocoder for GeocodingClient {
    async fn geocode(&self, address: &str) -> Result<geo_types::Point, GeocodingError> {
        match self {
            GeocodingClient::Simulated(geocoder) => geocoder.geocode(address).await,
            GeocodingClient::Fixed(geocoder) => geocoder.geocode(address).await,
        }
    }
}
