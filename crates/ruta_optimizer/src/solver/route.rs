use crate::{
    problem::{
        geo_point::GeoPoint,
        kilometers::Kilometers,
        stop_candidate::{StopCandidate, StopIdx},
    },
    solver::eta::Eta,
};

/// One visited stop of a sequenced route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop<'a> {
    pub candidate: &'a StopCandidate,
    /// Position of the candidate in the input collection
    pub index: StopIdx,
    /// 1-based visiting order
    pub order: usize,
    /// Leg distance from the previous stop, or from the start for the first one
    pub distance: Kilometers,
    pub cumulative_distance: Kilometers,
    pub eta: Eta,
}

impl RouteStop<'_> {
    pub fn id(&self) -> &str {
        self.candidate.id()
    }

    pub fn point(&self) -> &GeoPoint {
        self.candidate.point()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route<'a> {
    start: GeoPoint,
    stops: Vec<RouteStop<'a>>,
}

impl<'a> Route<'a> {
    pub(crate) fn new(start: GeoPoint, stops: Vec<RouteStop<'a>>) -> Self {
        Self { start, stops }
    }

    pub fn start(&self) -> &GeoPoint {
        &self.start
    }

    pub fn stops(&self) -> &[RouteStop<'a>] {
        &self.stops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteStop<'a>> {
        self.stops.iter()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn total_distance(&self) -> Kilometers {
        self.stops.iter().map(|stop| stop.distance).sum()
    }

    pub fn total_eta(&self) -> Eta {
        self.stops.last().map_or(Eta::ZERO, |stop| stop.eta)
    }
}

impl<'r, 'a> IntoIterator for &'r Route<'a> {
    type Item = &'r RouteStop<'a>;
    type IntoIter = std::slice::Iter<'r, RouteStop<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}
