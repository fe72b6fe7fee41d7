use crate::{define_index_newtype, problem::geo_point::GeoPoint};

define_index_newtype!(StopIdx, StopCandidate);

/// A location that has to be visited on today's route.
///
/// Identity is the `id`, not the coordinate: two candidates may share a point.
#[derive(Debug, Clone, PartialEq)]
pub struct StopCandidate {
    id: String,
    point: GeoPoint,
}

impl StopCandidate {
    pub fn new(id: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            id: id.into(),
            point,
        }
    }

    pub fn from_lat_lng(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self::new(id, GeoPoint::from_lat_lng(lat, lng))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }
}
