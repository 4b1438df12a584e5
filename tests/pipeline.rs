//! End-to-end tests for the route discovery pipeline

use ecoroute::prelude::*;

/// Two-route network: a short, fast, polluted corridor through `b` and a
/// longer, slower, clean detour through `c`.
fn two_route_graph() -> RouteGraph {
    let mut fast_1 = SegmentRecord::new("a", "b").with_length(1.0);
    let mut fast_2 = SegmentRecord::new("b", "d").with_length(1.0);
    for record in [&mut fast_1, &mut fast_2] {
        record.speed_hints.car = Some(60.0);
        record.pollution_factor = Some(0.9);
    }

    let mut clean_1 = SegmentRecord::new("a", "c").with_length(1.2);
    let mut clean_2 = SegmentRecord::new("c", "d").with_length(1.2);
    for record in [&mut clean_1, &mut clean_2] {
        record.speed_hints.car = Some(30.0);
        record.pollution_factor = Some(0.05);
    }

    RouteGraph::builder()
        .node("a", 10.0, 50.0)
        .node("b", 10.1, 50.1)
        .node("c", 10.1, 49.9)
        .node("d", 10.2, 50.0)
        .segments([fast_1, fast_2, clean_1, clean_2])
        .build()
        .unwrap()
}

#[test]
fn chain_worked_example() {
    // 3-node chain, both segments 1 km, driving at the default 40 km/h:
    // one path, 2 km, (1/40 + 1/40) * 3600 / 60 = 3.0 minutes.
    let graph = RouteGraph::builder()
        .node("a", 0.0, 0.0)
        .node("b", 0.01, 0.0)
        .node("c", 0.02, 0.0)
        .segment(SegmentRecord::new("a", "b").with_length(1.0))
        .segment(SegmentRecord::new("b", "c").with_length(1.0))
        .build()
        .unwrap();

    let mode: TravelMode = "driving".parse().unwrap();
    let routes = find_routes(&graph, &RouteRequest::new("a", "c", mode));

    assert_eq!(routes.len(), 1);
    let route = &routes[0];
    assert_eq!(route.path, ["a", "b", "c"]);
    assert_eq!(route.metrics.distance_km, 2.0);
    assert!((route.metrics.time_min - 3.0).abs() < 1e-9);
}

#[test]
fn returned_paths_satisfy_search_invariants() {
    let graph = two_route_graph();
    let request = RouteRequest::new("a", "d", TravelMode::Car);
    let routes = find_routes(&graph, &request);

    assert_eq!(routes.len(), 2);
    let mut seen_paths = Vec::new();
    for route in &routes {
        assert_eq!(route.path.first().unwrap(), "a");
        assert_eq!(route.path.last().unwrap(), "d");
        assert!(route.path.len() <= request.limits.max_depth + 1);

        let mut nodes = route.path.clone();
        nodes.sort_unstable();
        nodes.dedup();
        assert_eq!(nodes.len(), route.path.len(), "repeated node");

        assert!(!seen_paths.contains(&route.path), "duplicate path");
        seen_paths.push(route.path.clone());
    }
}

#[test]
fn profiles_with_different_weights_rank_differently() {
    let graph = two_route_graph();

    let by_time = find_routes(
        &graph,
        &RouteRequest::new("a", "d", TravelMode::Car).ranked_by(Criterion::Fastest),
    );
    let by_pollution = find_routes(
        &graph,
        &RouteRequest::new("a", "d", TravelMode::Car).ranked_by(Criterion::LeastPolluted),
    );

    assert_eq!(by_time[0].path[1], "b", "fastest should take the corridor");
    assert_eq!(
        by_pollution[0].path[1], "c",
        "least-polluted should take the detour"
    );
}

#[test]
fn geometry_matches_path_edges() {
    let graph = two_route_graph();
    let routes = find_routes(&graph, &RouteRequest::new("a", "d", TravelMode::Bike));

    for route in &routes {
        assert_eq!(route.geometry.0.len(), route.path.len() - 1);
        assert_eq!(route.segment_features.len(), route.path.len() - 1);

        let first_line = &route.geometry.0[0].0;
        let start = graph.node_coordinate("a").unwrap();
        assert_eq!((first_line[0].x, first_line[0].y), (start.x(), start.y()));
    }
}

#[test]
fn max_routes_caps_the_candidate_list() {
    let graph = two_route_graph();
    let mut request = RouteRequest::new("a", "d", TravelMode::Car);
    request.limits.max_routes = 1;

    let routes = find_routes(&graph, &request);
    assert_eq!(routes.len(), 1);
}
