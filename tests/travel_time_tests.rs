use rand::rngs::StdRng;
use rand::SeedableRng;
use travel_time::algorithm::{render_route, ShortestPathEngine, TravelTimeModel};
use travel_time::graph::generators::generate_connected_network;
use travel_time::graph::{Edge, Graph, StationGraph};
use travel_time::{DistanceTable, Error};

fn westside_table() -> DistanceTable<u64> {
    let graph = StationGraph::from_edges(vec![
        Edge::new("Westside", "A", 2),
        Edge::new("A", "B", 3),
        Edge::new("Westside", "B", 10),
        Edge::new("Island", "Reef", 4),
    ])
    .unwrap();
    ShortestPathEngine::new().run(&graph, "Westside").unwrap()
}

#[test]
fn test_origin_costs_nothing() {
    let table = westside_table();
    let model = TravelTimeModel::default();

    assert_eq!(model.time_for(&table, "Westside").unwrap(), 0.0);
    assert_eq!(table.trace_route("Westside").unwrap(), vec!["Westside"]);
    assert_eq!(table.hop_count("Westside").unwrap(), 0);
}

#[test]
fn test_time_counts_distance_and_stops() {
    let table = westside_table();
    let model = TravelTimeModel::default();

    // 2 * 2.5 + 1 * 15
    assert_eq!(model.time_for(&table, "A").unwrap(), 20.0);
    // 5 * 2.5 + 2 * 15
    assert_eq!(model.time_for(&table, "B").unwrap(), 42.5);
}

#[test]
fn test_unreachable_station_fails_both_queries() {
    let table = westside_table();
    let model = TravelTimeModel::default();

    assert!(matches!(model.time_for(&table, "Reef"), Err(Error::UnreachableNode(name)) if name == "Reef"));
    assert!(matches!(table.trace_route("Island"), Err(Error::UnreachableNode(_))));
    assert!(matches!(table.hop_count("Island"), Err(Error::UnreachableNode(_))));
}

#[test]
fn test_unknown_station_is_distinct_from_unreachable() {
    let table = westside_table();
    let model = TravelTimeModel::default();

    assert!(matches!(model.time_for(&table, "Atlantis"), Err(Error::KeyNotFound(_))));
    assert!(matches!(table.trace_route("Atlantis"), Err(Error::KeyNotFound(_))));
}

#[test]
fn test_travel_times_cover_reachable_stations() {
    let table = westside_table();
    let times = TravelTimeModel::default().travel_times(&table).unwrap();

    assert_eq!(times.len(), 3);
    assert_eq!(times.get("Westside"), Some(&0.0));
    assert_eq!(times.get("A"), Some(&20.0));
    assert_eq!(times.get("B"), Some(&42.5));
    assert!(!times.contains_key("Island"));
}

#[test]
fn test_sorted_travel_times_are_ascending() {
    let table = westside_table();
    let sorted = TravelTimeModel::default().sorted_travel_times(&table).unwrap();
    let stations: Vec<&str> = sorted.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(stations, vec!["Westside", "A", "B"]);
}

#[test]
fn test_custom_model() {
    let table = westside_table();
    let model = TravelTimeModel::new()
        .with_minutes_per_distance_unit(1.0)
        .with_minutes_per_stop(0.5);
    assert_eq!(model.time_for(&table, "B").unwrap(), 6.0);
}

#[test]
fn test_time_formula_holds_on_random_network() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph =
        StationGraph::<u64>::from_edges(generate_connected_network(&mut rng, 50, 80, 40)).unwrap();
    let table = ShortestPathEngine::new().run(&graph, "S0").unwrap();
    let model = TravelTimeModel::default();
    let times = model.travel_times(&table).unwrap();

    assert_eq!(times.len(), graph.station_count());
    for station in graph.stations() {
        let route = table.trace_route(station).unwrap();
        let distance = table.distance(station).unwrap().unwrap() as f64;
        let expected = distance * 2.5 + (route.len() - 1) as f64 * 15.0;
        assert!((model.time_for(&table, station).unwrap() - expected).abs() < 1e-9);
        assert_eq!(times.get(station), Some(&model.time_for(&table, station).unwrap()));
    }
}

#[test]
fn test_render_route() {
    let table = westside_table();
    let route = table.trace_route("B").unwrap();
    assert_eq!(render_route(&route), "Westside->A->B");
    assert_eq!(render_route(&table.trace_route("Westside").unwrap()), "Westside");
}
