pub mod geo_point;
pub mod kilometers;
pub mod kmh;
pub mod route_request;
pub mod stop_candidate;
