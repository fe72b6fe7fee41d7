use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeocodingError {
    #[error("Address is empty")]
    EmptyAddress,

    #[error("Address not found: {0}")]
    AddressNotFound(String),
}
