use std::env;
use std::process;

use travel_time::algorithm::{render_route, FrontierKind, ShortestPathEngine, TravelTimeModel};
use travel_time::graph::loader::load_graph;
use travel_time::graph::StationGraph;

const USAGE: &str = "usage: travel_time <edges.csv> <origin> [--frontier stack|heap] [--trace STATION]...";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }
    let path = &args[0];
    let origin = &args[1];

    let mut frontier = FrontierKind::default();
    let mut traces = Vec::new();
    let mut rest = args[2..].iter();
    while let Some(flag) = rest.next() {
        match (flag.as_str(), rest.next()) {
            ("--frontier", Some(kind)) => frontier = kind.parse()?,
            ("--trace", Some(station)) => traces.push(station.clone()),
            _ => {
                eprintln!("{}", USAGE);
                process::exit(2);
            }
        }
    }

    let graph: StationGraph<u64> = load_graph(path)?;
    let engine = ShortestPathEngine::new().with_frontier(frontier);
    let table = engine.run(&graph, origin)?;
    let model = TravelTimeModel::default();

    println!("Travel times from {}", origin);
    println!("{:<24} | {:>10} | {:>10}", "Station", "Distance", "Minutes");
    println!("{}", "-".repeat(50));
    for (station, minutes) in model.sorted_travel_times(&table)? {
        let distance = table.distance(&station)?.unwrap_or_default();
        println!("{:<24} | {:>10} | {:>10.1}", station, distance, minutes);
    }

    let mut unreachable: Vec<&str> = table
        .iter()
        .filter(|(_, entry)| !entry.is_reachable())
        .map(|(station, _)| station)
        .collect();
    unreachable.sort_unstable();
    for station in unreachable {
        println!("{:<24} | {:>10} | {:>10}", station, "-", "unreachable");
    }

    for station in &traces {
        match table.trace_route(station) {
            Ok(route) => println!("{}: {}", station, render_route(&route)),
            Err(e) => println!("{}: {}", station, e),
        }
    }

    Ok(())
}
