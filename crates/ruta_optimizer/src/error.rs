use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("Invalid coordinate for stop {id}: ({lat}, {lng})")]
    InvalidCoordinate { id: String, lat: f64, lng: f64 },

    #[error("Invalid start coordinate: ({lat}, {lng})")]
    InvalidStart { lat: f64, lng: f64 },

    #[error("Average speed must be finite and greater than zero, got {0} km/h")]
    InvalidSpeed(f64),

    #[error("Failed to build scan thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
