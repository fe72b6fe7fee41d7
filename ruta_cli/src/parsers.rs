use ruta_optimizer::problem::geo_point::GeoPoint;

/// Parses `"lat,lng"` into a point.
pub fn parse_geo_point(input: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected a coordinate as \"lat,lng\""))?;

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid latitude: {}", lat.trim()))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid longitude: {}", lng.trim()))?;

    let point = GeoPoint::from_lat_lng(lat, lng);
    if !point.is_valid() {
        return Err(format!("Coordinate out of range: {lat},{lng}"));
    }

    Ok(point)
}

pub fn parse_speed(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(speed) if speed.is_finite() && speed > 0.0 => Ok(speed),
        _ => Err(String::from("Invalid speed")),
    }
}
