use ruta_geocoding::{
    geocoder::Geocoder, geocoder_provider::GeocoderProvider, geocoding_client::GeocodingClient,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    problem::{geo_point::GeoPoint, route_request::RouteRequest, stop_candidate::StopCandidate},
    solver::route::{Route, RouteStop},
};

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "RouteRequest")]
pub struct JsonRouteRequest {
    /// Departure point, defaults to the reference start point
    pub start: Option<JsonCoordinates>,

    /// How stops without coordinates are resolved
    pub geocoder: Option<GeocoderProvider>,

    pub stops: Vec<JsonStop>,
}

#[derive(Serialize, Deserialize, JsonSchema, Clone, Copy, Debug, PartialEq)]
#[serde(deny_unknown_fields, rename = "Coordinates")]
pub struct JsonCoordinates {
    pub lat: f64,
    pub lng: f64,
}

impl From<JsonCoordinates> for GeoPoint {
    fn from(value: JsonCoordinates) -> Self {
        GeoPoint::from_lat_lng(value.lat, value.lng)
    }
}

impl From<&GeoPoint> for JsonCoordinates {
    fn from(value: &GeoPoint) -> Self {
        JsonCoordinates {
            lat: value.lat(),
            lng: value.lng(),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Clone, Debug)]
#[serde(deny_unknown_fields, rename = "Stop")]
pub struct JsonStop {
    pub id: String,
    pub coordinates: Option<JsonCoordinates>,

    /// Used to geocode the stop when `coordinates` is missing
    pub address: Option<String>,

    /// Inactive stops are skipped
    pub active: Option<bool>,

    /// Only stops with attendance confirmed for the day are routed
    pub confirmed: Option<bool>,
}

impl JsonStop {
    pub fn is_scheduled(&self) -> bool {
        self.active.unwrap_or(true) && self.confirmed.unwrap_or(false)
    }
}

impl JsonRouteRequest {
    pub fn geocoding_client(&self) -> GeocodingClient {
        GeocodingClient::new(self.geocoder.clone().unwrap_or_default())
    }

    /// Keeps the scheduled stops, in input order, and resolves their
    /// coordinates.
    #[instrument(skip_all, level = "debug")]
    pub async fn build_request(
        self,
        geocoder: &impl Geocoder,
    ) -> Result<RouteRequest, anyhow::Error> {
        let start = self.start.map(GeoPoint::from).unwrap_or_default();

        let total = self.stops.len();
        let mut candidates = Vec::with_capacity(total);

        for stop in self.stops.into_iter().filter(JsonStop::is_scheduled) {
            let point = match (stop.coordinates, stop.address.as_deref()) {
                (Some(coordinates), _) => GeoPoint::from(coordinates),
                (None, Some(address)) => GeoPoint::from(geocoder.geocode(address).await?),
                (None, None) => {
                    anyhow::bail!("Stop {} has neither coordinates nor an address", stop.id)
                }
            };

            candidates.push(StopCandidate::new(stop.id, point));
        }

        debug!("{} of {} stops scheduled", candidates.len(), total);

        Ok(RouteRequest::new(start, candidates))
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug)]
#[serde(rename = "RouteStop")]
pub struct JsonRouteStop {
    pub order: usize,
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
    pub cumulative_distance_km: f64,
    pub eta: String,
    pub eta_minutes: i64,
}

impl From<&RouteStop<'_>> for JsonRouteStop {
    fn from(value: &RouteStop<'_>) -> Self {
        JsonRouteStop {
            order: value.order,
            id: value.id().to_owned(),
            lat: value.point().lat(),
            lng: value.point().lng(),
            distance_km: value.distance.value(),
            cumulative_distance_km: value.cumulative_distance.value(),
            eta: value.eta.to_string(),
            eta_minutes: value.eta.total_minutes(),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug)]
#[serde(rename = "Route")]
pub struct JsonRoute {
    pub start: JsonCoordinates,
    pub stops: Vec<JsonRouteStop>,
    pub total_distance_km: f64,
    pub total_eta: String,
}

impl From<&Route<'_>> for JsonRoute {
    fn from(value: &Route<'_>) -> Self {
        JsonRoute {
            start: value.start().into(),
            stops: value.iter().map(JsonRouteStop::from).collect(),
            total_distance_km: value.total_distance().value(),
            total_eta: value.total_eta().to_string(),
        }
    }
}
