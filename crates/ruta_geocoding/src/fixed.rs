use fxhash::FxHashMap;

use crate::{
    error::GeocodingError,
    geocoder::{Geocoder, normalize_address},
};

/// Lookup table geocoder. Addresses are matched case-insensitively after
/// whitespace normalization.
#[derive(Default, Clone)]
pub struct FixedGeocoder {
    addresses: FxHashMap<String, geo_types::Point>,
}

impl FixedGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `address` at (`lat`, `lng`). Empty addresses are ignored.
    pub fn insert(&mut self, address: &str, lat: f64, lng: f64) {
        if let Ok(key) = normalize_address(address) {
            self.addresses.insert(key, geo_types::Point::new(lng, lat));
        }
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl<S> FromIterator<(S, [f64; 2])> for FixedGeocoder
where
    S: AsRef<str>,
{
    /// Builds from `(address, [lat, lng])` pairs.
    fn from_iter<I: IntoIterator<Item = (S, [f64; 2])>>(iter: I) -> Self {
        let mut geocoder = FixedGeocoder::new();
        for (address, [lat, lng]) in iter {
            geocoder.insert(address.as_ref(), lat, lng);
        }
        geocoder
    }
}

impl Geocoder for FixedGeocoder {
    async fn geocode(&self, address: &str) -> Result<geo_types::Point, GeocodingError> {
        let key = normalize_address(address)?;

        self.addresses
            .get(&key)
            .copied()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_is_normalized() {
        let geocoder = FixedGeocoder::from_iter([("Calle 80 # 10-20", [4.66, -74.05])]);

        let point = geocoder.geocode("calle 80  # 10-20").await.unwrap();
        assert_eq!(point.y(), 4.66);
        assert_eq!(point.x(), -74.05);
    }

    #[tokio::test]
    async fn test_unknown_address() {
        let geocoder = FixedGeocoder::new();

        assert_eq!(
            geocoder.geocode("Avenida Siempre Viva 742").await,
            Err(GeocodingError::AddressNotFound(
                "Avenida Siempre Viva 742".to_owned()
            ))
        );
    }
}
