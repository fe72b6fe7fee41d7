use crate::{
    error::RoutingError,
    problem::{geo_point::GeoPoint, stop_candidate::StopCandidate},
    solver::{nearest_neighbor::build_route_with_params, route::Route, route_params::RouteParams},
};

/// The input of one routing call: where the vehicle departs from and the
/// stops confirmed for the day, in caller order.
#[derive(Debug, Clone, Default)]
pub struct RouteRequest {
    pub start: GeoPoint,
    pub candidates: Vec<StopCandidate>,
}

impl RouteRequest {
    pub fn new(start: GeoPoint, candidates: Vec<StopCandidate>) -> Self {
        Self { start, candidates }
    }

    pub fn route(&self, params: &RouteParams) -> Result<Route<'_>, RoutingError> {
        build_route_with_params(self.start, &self.candidates, params)
    }
}
