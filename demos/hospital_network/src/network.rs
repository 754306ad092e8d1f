//! Reference hospital network definition.
//!
//! Eight facilities spread over a synthetic city grid (1 unit ≈ 2 km) with
//! fifteen two-way roads.  Road costs come from geometry.

use mr_core::{Category, NetworkConfig};
use mr_spatial::{CityGraph, SpatialResult};

/// `(name, category, (x, y))` for every facility, in insertion order.
const FACILITIES: [(&str, Category, (f64, f64)); 8] = [
    ("Central Hospital",    Category::Hospital,      ( 0.0,  0.0)),
    ("North Urgent Care",   Category::UrgentCare,    (-2.0,  3.0)),
    ("St. Luke's Hospital", Category::Hospital,      ( 4.0,  2.0)),
    ("South Urgent Care",   Category::UrgentCare,    ( 1.0, -3.0)),
    ("24h Emergency Room",  Category::EmergencyRoom, (-3.0, -1.0)),
    ("Children's Hospital", Category::Hospital,      ( 3.0, -2.0)),
    ("East Urgent Care",    Category::UrgentCare,    ( 5.0,  0.0)),
    ("University Hospital", Category::Hospital,      (-1.0,  4.0)),
];

const ROADS: [(&str, &str); 15] = [
    ("Central Hospital",    "North Urgent Care"),
    ("Central Hospital",    "St. Luke's Hospital"),
    ("Central Hospital",    "24h Emergency Room"),
    ("Central Hospital",    "South Urgent Care"),
    ("Central Hospital",    "Children's Hospital"),
    ("North Urgent Care",   "University Hospital"),
    ("North Urgent Care",   "St. Luke's Hospital"),
    ("St. Luke's Hospital", "East Urgent Care"),
    ("St. Luke's Hospital", "Children's Hospital"),
    ("St. Luke's Hospital", "South Urgent Care"),
    ("South Urgent Care",   "Children's Hospital"),
    ("South Urgent Care",   "24h Emergency Room"),
    ("24h Emergency Room",  "University Hospital"),
    ("Children's Hospital", "East Urgent Care"),
    ("East Urgent Care",    "University Hospital"),
];

/// Build the reference network under `config`.
pub fn build_network(config: &NetworkConfig) -> SpatialResult<CityGraph> {
    let mut graph = CityGraph::with_config(config)?;
    for (name, category, coord) in FACILITIES {
        graph.add_node(name, category, coord);
    }
    for (origin, destination) in ROADS {
        graph.add_edge(origin, destination, None)?;
    }
    Ok(graph)
}
