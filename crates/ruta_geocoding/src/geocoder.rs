use crate::error::GeocodingError;

/// Resolves a postal address to a coordinate.
///
/// Points follow the `geo_types` convention: `x` is the longitude and `y`
/// the latitude.
pub trait Geocoder {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<geo_types::Point, GeocodingError>> + Send;
}

pub(crate) fn normalize_address(address: &str) -> Result<String, GeocodingError> {
    let normalized = address
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if normalized.is_empty() {
        return Err(GeocodingError::EmptyAddress);
    }

    Ok(normalized)
}
