use rand::{Rng, SeedableRng, rngs::SmallRng};
use ruta_optimizer::problem::stop_candidate::StopCandidate;

/// Random candidates within ~5km of Bogotá's center, reproducible per seed.
pub fn random_candidates(count: usize, seed: u64) -> Vec<StopCandidate> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|index| {
            let lat = 4.6097 + (rng.random::<f64>() - 0.5) * 0.1;
            let lng = -74.0817 + (rng.random::<f64>() - 0.5) * 0.1;
            StopCandidate::from_lat_lng(format!("student-{index}"), lat, lng)
        })
        .collect()
}

/// Candidates laid out on a `size` x `size` grid with `step` degrees between
/// rows and columns. Many legs have exactly the same length.
pub fn grid_candidates(size: usize, step: f64) -> Vec<StopCandidate> {
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .map(|(row, col)| {
            StopCandidate::from_lat_lng(
                format!("grid-{row}-{col}"),
                row as f64 * step,
                col as f64 * step,
            )
        })
        .collect()
}
