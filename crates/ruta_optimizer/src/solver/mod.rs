pub mod eta;
pub mod nearest_neighbor;
pub mod route;
pub mod route_params;
