use crate::problem::stop_candidate::StopCandidate;

/// Candidates named `stop-0`, `stop-1`, ... from `(lat, lng)` pairs.
pub fn create_candidates(points: &[(f64, f64)]) -> Vec<StopCandidate> {
    points
        .iter()
        .enumerate()
        .map(|(index, &(lat, lng))| StopCandidate::from_lat_lng(format!("stop-{index}"), lat, lng))
        .collect()
}

/// Three stops around the default start. `A` sits exactly on the start point
/// and `C` is closer to `A` than `B` is.
pub fn bogota_candidates() -> Vec<StopCandidate> {
    vec![
        StopCandidate::from_lat_lng("A", 4.6097, -74.0817),
        StopCandidate::from_lat_lng("B", 4.6297, -74.0917),
        StopCandidate::from_lat_lng("C", 4.6197, -74.0717),
    ]
}
