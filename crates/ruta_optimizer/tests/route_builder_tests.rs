use fxhash::FxHashSet;
use ruta_optimizer::{
    problem::{
        geo_point::{GeoPoint, haversine_distance},
        kilometers::Kilometers,
        route_request::RouteRequest,
        stop_candidate::StopCandidate,
    },
    solver::{
        nearest_neighbor::{build_route, build_route_with_params},
        route_params::{RouteParams, Threads},
    },
};

mod setup;

#[test]
fn test_every_candidate_is_visited_once() {
    for (count, seed) in [(1, 1), (2, 2), (7, 3), (50, 4), (200, 5)] {
        let candidates = setup::random_candidates(count, seed);
        let route = build_route(GeoPoint::DEFAULT_START, &candidates).unwrap();

        assert_eq!(route.len(), candidates.len());

        let input_ids = candidates
            .iter()
            .map(|candidate| candidate.id())
            .collect::<FxHashSet<_>>();
        let route_ids = route.iter().map(|stop| stop.id()).collect::<FxHashSet<_>>();
        assert_eq!(input_ids, route_ids);

        let orders = route.iter().map(|stop| stop.order).collect::<Vec<_>>();
        assert_eq!(orders, (1..=candidates.len()).collect::<Vec<_>>());
    }
}

#[test]
fn test_cumulative_distance_is_sum_of_legs() {
    let candidates = setup::random_candidates(40, 11);
    let route = build_route(GeoPoint::DEFAULT_START, &candidates).unwrap();

    let mut previous = GeoPoint::DEFAULT_START;
    let mut running = Kilometers::ZERO;

    for stop in &route {
        let leg = haversine_distance(
            previous.lat(),
            previous.lng(),
            stop.point().lat(),
            stop.point().lng(),
        );
        assert_eq!(stop.distance.value(), leg);
        assert!(stop.distance >= Kilometers::ZERO);

        let before = running;
        running += stop.distance;
        assert_eq!(stop.cumulative_distance, running);
        assert!(stop.cumulative_distance >= before);

        previous = *stop.point();
    }

    assert_eq!(route.total_distance(), running);
}

#[test]
fn test_eta_follows_cumulative_distance() {
    let candidates = setup::random_candidates(30, 12);
    let route = build_route(GeoPoint::DEFAULT_START, &candidates).unwrap();

    let mut previous_minutes = 0;
    for stop in &route {
        let expected = (stop.cumulative_distance.value() / 30.0 * 60.0).round() as i64;
        assert_eq!(stop.eta.total_minutes(), expected);
        assert_eq!(
            stop.eta.to_string(),
            format!("{}h {}m", expected / 60, expected % 60)
        );
        assert!(stop.eta.minutes() < 60);
        assert!(stop.eta.total_minutes() >= previous_minutes);
        previous_minutes = stop.eta.total_minutes();
    }

    assert_eq!(route.total_eta(), route.stops().last().unwrap().eta);
}

#[test]
fn test_each_step_picks_the_closest_remaining() {
    let candidates = setup::random_candidates(25, 13);
    let route = build_route(GeoPoint::DEFAULT_START, &candidates).unwrap();

    let mut previous = GeoPoint::DEFAULT_START;
    for (step, stop) in route.iter().enumerate() {
        let remaining = &route.stops()[step..];
        for other in remaining {
            assert!(stop.distance <= previous.haversine_distance(other.point()));
        }
        previous = *stop.point();
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let candidates = setup::grid_candidates(6, 0.01);

    let first = build_route(GeoPoint::from_lat_lng(0.0, 0.0), &candidates).unwrap();
    let second = build_route(GeoPoint::from_lat_lng(0.0, 0.0), &candidates).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parallel_scan_matches_sequential_scan() {
    let params = RouteParams {
        scan_threads: Threads::Multi(4),
        parallel_scan_threshold: 1,
        ..RouteParams::default()
    };

    for candidates in [
        setup::random_candidates(300, 21),
        setup::grid_candidates(12, 0.005),
    ] {
        let sequential = build_route(GeoPoint::DEFAULT_START, &candidates).unwrap();
        let parallel =
            build_route_with_params(GeoPoint::DEFAULT_START, &candidates, &params).unwrap();

        assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_same_coordinates_as_start() {
    let candidates = vec![
        StopCandidate::from_lat_lng("A", 4.6097, -74.0817),
        StopCandidate::from_lat_lng("B", 4.6297, -74.0917),
        StopCandidate::from_lat_lng("C", 4.6197, -74.0717),
    ];

    let route = build_route(GeoPoint::from_lat_lng(4.6097, -74.0817), &candidates).unwrap();

    assert_eq!(route.stops()[0].id(), "A");
    assert_eq!(route.stops()[0].distance, Kilometers::ZERO);
    assert_eq!(route.stops()[0].eta.to_string(), "0h 0m");

    let a = candidates[0].point();
    let second = if a.haversine_distance(candidates[1].point())
        < a.haversine_distance(candidates[2].point())
    {
        "B"
    } else {
        "C"
    };
    assert_eq!(route.stops()[1].id(), second);
    assert!(route.stops()[2].cumulative_distance > route.stops()[1].cumulative_distance);
    assert!(route.stops()[1].cumulative_distance > route.stops()[0].cumulative_distance);
}

#[test]
fn test_identical_coordinates_keep_both_stops() {
    let candidates = vec![
        StopCandidate::from_lat_lng("first", 4.70, -74.05),
        StopCandidate::from_lat_lng("far", 4.90, -74.30),
        StopCandidate::from_lat_lng("second", 4.70, -74.05),
    ];

    let route = build_route(GeoPoint::DEFAULT_START, &candidates).unwrap();
    let ids = route.iter().map(|stop| stop.id()).collect::<Vec<_>>();

    assert_eq!(ids, vec!["first", "second", "far"]);
    assert_eq!(route.stops()[1].distance, Kilometers::ZERO);
}

#[test]
fn test_route_request_uses_its_start() {
    let request = RouteRequest::new(
        GeoPoint::from_lat_lng(4.0, -74.0),
        vec![StopCandidate::from_lat_lng("only", 5.0, -75.0)],
    );

    let route = request.route(&RouteParams::default()).unwrap();

    assert_eq!(route.start(), &GeoPoint::from_lat_lng(4.0, -74.0));
    assert_eq!(route.len(), 1);
    assert!((route.total_distance().value() - 157.01).abs() < 0.01);
    assert_eq!(route.total_eta().to_string(), "5h 14m");
}
