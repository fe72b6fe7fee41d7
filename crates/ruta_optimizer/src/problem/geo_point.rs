use crate::problem::kilometers::Kilometers;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two decimal-degree
/// coordinates, using the haversine formula on a 6371 km sphere.
///
/// Inputs are not range checked.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` past 1 for near antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    point: geo::Point,
}

impl GeoPoint {
    /// Reference departure point used when the caller does not provide one.
    pub const DEFAULT_START: GeoPoint = GeoPoint::from_lat_lng(4.6097, -74.0817);

    pub const fn from_lat_lng(lat: f64, lng: f64) -> Self {
        Self {
            point: geo::Point(geo::Coord { x: lng, y: lat }),
        }
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn lng(&self) -> f64 {
        self.point.x()
    }

    pub fn is_valid(&self) -> bool {
        let (lat, lng) = (self.lat(), self.lng());
        lat.is_finite() && lng.is_finite() && lat.abs() <= 90.0 && lng.abs() <= 180.0
    }

    pub fn haversine_distance(&self, to: &GeoPoint) -> Kilometers {
        Kilometers::new(haversine_distance(
            self.lat(),
            self.lng(),
            to.lat(),
            to.lng(),
        ))
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        GeoPoint::DEFAULT_START
    }
}

impl From<geo::Point> for GeoPoint {
    fn from(point: geo::Point) -> Self {
        Self { point }
    }
}

impl From<&GeoPoint> for geo::Point<f64> {
    fn from(location: &GeoPoint) -> Self {
        location.point
    }
}

impl From<&GeoPoint> for geo::Coord<f64> {
    fn from(val: &GeoPoint) -> Self {
        geo::Coord {
            x: val.lng(),
            y: val.lat(),
        }
    }
}
