use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};
use tracing::{debug, instrument};

use crate::{
    error::RoutingError,
    problem::{
        geo_point::GeoPoint,
        kilometers::Kilometers,
        stop_candidate::{StopCandidate, StopIdx},
    },
    solver::{
        eta::Eta,
        route::{Route, RouteStop},
        route_params::{RouteParams, Threads},
    },
    timer_debug,
};

/// Sequences `candidates` from `start` with the default parameters.
pub fn build_route(
    start: GeoPoint,
    candidates: &[StopCandidate],
) -> Result<Route<'_>, RoutingError> {
    build_route_with_params(start, candidates, &RouteParams::default())
}

/// Greedy nearest neighbor sequencing.
///
/// From the current position, the closest unvisited candidate is visited
/// next, until every candidate has been visited exactly once. On equal
/// distances the candidate that comes first in `candidates` wins, so the
/// output only depends on the input order and coordinates.
///
/// Every step rescans all unvisited candidates, which makes the whole
/// sequencing O(n²).
#[instrument(skip_all, level = "debug", fields(candidates = candidates.len()))]
pub fn build_route_with_params<'a>(
    start: GeoPoint,
    candidates: &'a [StopCandidate],
    params: &RouteParams,
) -> Result<Route<'a>, RoutingError> {
    validate(&start, candidates, params)?;

    if candidates.is_empty() {
        return Ok(Route::new(start, Vec::new()));
    }

    let pool = if candidates.len() >= params.parallel_scan_threshold {
        scan_pool(&params.scan_threads)?
    } else {
        None
    };

    let stops = timer_debug!(
        "Nearest neighbor sequencing",
        sequence(start, candidates, params, pool.as_ref())
    );

    let route = Route::new(start, stops);

    debug!(
        "Sequenced {} stops: total distance = {:.3}, total eta = {}",
        route.len(),
        route.total_distance(),
        route.total_eta()
    );

    Ok(route)
}

fn validate(
    start: &GeoPoint,
    candidates: &[StopCandidate],
    params: &RouteParams,
) -> Result<(), RoutingError> {
    if !params.average_speed.is_valid() {
        return Err(RoutingError::InvalidSpeed(params.average_speed.value()));
    }

    if !start.is_valid() {
        return Err(RoutingError::InvalidStart {
            lat: start.lat(),
            lng: start.lng(),
        });
    }

    if let Some(candidate) = candidates.iter().find(|c| !c.point().is_valid()) {
        return Err(RoutingError::InvalidCoordinate {
            id: candidate.id().to_owned(),
            lat: candidate.point().lat(),
            lng: candidate.point().lng(),
        });
    }

    Ok(())
}

fn scan_pool(threads: &Threads) -> Result<Option<ThreadPool>, RoutingError> {
    let num_threads = threads.number_of_threads();
    if num_threads <= 1 {
        return Ok(None);
    }

    let pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;
    Ok(Some(pool))
}

fn sequence<'a>(
    start: GeoPoint,
    candidates: &'a [StopCandidate],
    params: &RouteParams,
    pool: Option<&ThreadPool>,
) -> Vec<RouteStop<'a>> {
    // Kept in input order so that the first match of the scan is the lowest index.
    let mut unvisited: Vec<StopIdx> = (0..candidates.len()).map(StopIdx::new).collect();
    let mut stops: Vec<RouteStop<'a>> = Vec::with_capacity(candidates.len());

    let mut current = start;
    let mut total_distance = Kilometers::ZERO;

    while !unvisited.is_empty() {
        let (position, distance) = match pool {
            Some(pool) if unvisited.len() >= params.parallel_scan_threshold => {
                pool.install(|| find_nearest_parallel(&current, candidates, &unvisited))
            }
            _ => find_nearest(&current, candidates, &unvisited),
        };

        let index = unvisited.remove(position);
        let candidate = &candidates[index];

        total_distance += distance;
        let eta = Eta::from_distance(total_distance, params.average_speed);
        let order = stops.len() + 1;

        debug!(
            "Stop {}: {} (index {}), leg = {:.3}, eta = {}",
            order,
            candidate.id(),
            index,
            distance,
            eta
        );

        stops.push(RouteStop {
            candidate,
            index,
            order,
            distance,
            cumulative_distance: total_distance,
            eta,
        });

        current = *candidate.point();
    }

    stops
}

/// Returns the position in `unvisited` of the closest candidate and its distance.
/// `unvisited` must not be empty.
fn find_nearest(
    from: &GeoPoint,
    candidates: &[StopCandidate],
    unvisited: &[StopIdx],
) -> (usize, Kilometers) {
    let mut nearest = 0;
    let mut min_distance = from.haversine_distance(candidates[unvisited[0]].point());

    for (position, &index) in unvisited.iter().enumerate().skip(1) {
        let distance = from.haversine_distance(candidates[index].point());
        if distance < min_distance {
            min_distance = distance;
            nearest = position;
        }
    }

    (nearest, min_distance)
}

fn find_nearest_parallel(
    from: &GeoPoint,
    candidates: &[StopCandidate],
    unvisited: &[StopIdx],
) -> (usize, Kilometers) {
    unvisited
        .par_iter()
        .enumerate()
        .map(|(position, &index)| (position, from.haversine_distance(candidates[index].point())))
        .reduce_with(|best, other| {
            if other.1 < best.1 || (other.1 == best.1 && other.0 < best.0) {
                other
            } else {
                best
            }
        })
        .unwrap_or((0, Kilometers::ZERO))
}
