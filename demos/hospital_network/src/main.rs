//! hospital_network — query the reference emergency-care network.
//!
//! Usage: `hospital_network [ORIGIN DESTINATION]`
//!
//! Prints network statistics, then the fastest route between the two named
//! facilities under this session's traffic (default: North Urgent Care →
//! Children's Hospital).  Set `MEDROUTE_SEED` to replay a session's traffic
//! and `RUST_LOG=debug` to see routing events.

mod network;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use mr_core::NetworkConfig;
use mr_spatial::NetworkStats;

use network::build_network;

const DEFAULT_ORIGIN:      &str = "North Urgent Care";
const DEFAULT_DESTINATION: &str = "Children's Hospital";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let seed = match std::env::var("MEDROUTE_SEED") {
        Ok(s) => Some(s.parse::<u64>().context("MEDROUTE_SEED must be an unsigned integer")?),
        Err(_) => None,
    };
    let config = NetworkConfig { seed, ..NetworkConfig::default() };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (origin, destination) = match args.as_slice() {
        [] => (DEFAULT_ORIGIN, DEFAULT_DESTINATION),
        [o, d] => (o.as_str(), d.as_str()),
        _ => bail!("usage: hospital_network [ORIGIN DESTINATION]"),
    };

    // 1. Build the network.
    let graph = build_network(&config)?;
    tracing::info!(seed = graph.seed(), "network ready");
    println!("=== hospital_network — medroute ===");
    println!(
        "Facilities: {}  |  Roads: {}  |  Traffic seed: {}",
        graph.node_count(),
        graph.edge_count(),
        graph.seed()
    );

    // 2. Statistics.
    let stats = NetworkStats::new(&graph);
    for (category, count) in stats.category_counts() {
        println!("  {category:<15} {count}");
    }
    match stats.summary() {
        Some(s) => println!(
            "Traffic-adjusted road time: mean {:.1} min, fastest {:.1} min, slowest {:.1} min",
            s.mean, s.min, s.max
        ),
        None => println!("No roads."),
    }
    if let Some((name, degree)) = stats.most_connected_node() {
        println!("Most connected: {name} ({degree} roads)");
    }
    println!();

    // 3. Route.
    for name in [origin, destination] {
        if !graph.contains(name) {
            bail!("unknown facility {name:?}");
        }
    }
    let route = graph.find_fastest_route(origin, destination);
    if !route.is_found() {
        println!("No route from {origin} to {destination}.");
        return Ok(());
    }
    println!("Fastest route ({:.1} min):", route.total_cost);
    for (from, to) in route.legs() {
        println!(
            "  {:<20} → {:<20} {:>6.1} min",
            graph.name_of(from),
            graph.name_of(to),
            graph.traffic_adjusted_cost(from, to)
        );
    }
    Ok(())
}
