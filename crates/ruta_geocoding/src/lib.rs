pub mod error;
pub mod fixed;
pub mod geocoder;
pub mod geocoder_provider;
pub mod geocoding_client;
pub mod simulated;
