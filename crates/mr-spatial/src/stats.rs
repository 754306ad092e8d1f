//! Aggregate queries over a [`CityGraph`].
//!
//! Cost statistics use the traffic-adjusted cost of each undirected edge,
//! read in the `(i, j)` direction with `i < j`.  Queries over a graph with no
//! edges return `None` rather than an error.

use mr_core::Category;

use crate::network::CityGraph;

/// Count, mean, min and max of edge costs, computed in one pass.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostSummary {
    pub count: usize,
    pub mean:  f64,
    pub min:   f64,
    pub max:   f64,
}

/// Read-only statistics view borrowing a graph.
pub struct NetworkStats<'a> {
    graph: &'a CityGraph,
}

impl<'a> NetworkStats<'a> {
    pub fn new(graph: &'a CityGraph) -> Self {
        Self { graph }
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn average_cost(&self) -> Option<f64> {
        self.summary().map(|s| s.mean)
    }

    pub fn min_cost(&self) -> Option<f64> {
        self.summary().map(|s| s.min)
    }

    pub fn max_cost(&self) -> Option<f64> {
        self.summary().map(|s| s.max)
    }

    /// All cost statistics at once; `None` when the graph has no edges.
    pub fn summary(&self) -> Option<CostSummary> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for (i, j, _) in self.graph.edges() {
            let cost = self.graph.traffic_adjusted_cost(i, j);
            count += 1;
            sum += cost;
            min = min.min(cost);
            max = max.max(cost);
        }

        (count > 0).then(|| CostSummary { count, mean: sum / count as f64, min, max })
    }

    /// Facility with the most direct connections, and its degree.
    ///
    /// Ties go to the earliest-inserted facility.  `None` only for an empty
    /// graph; a graph with nodes but no edges returns its first node with
    /// degree 0.
    pub fn most_connected_node(&self) -> Option<(&'a str, usize)> {
        let graph = self.graph;
        let mut best: Option<(&'a str, usize)> = None;
        for id in graph.nodes() {
            let degree = graph.degree_of(id);
            if best.is_none_or(|(_, d)| degree > d) {
                best = Some((graph.name_of(id), degree));
            }
        }
        best
    }

    /// Facility count per category, in order of first appearance.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = Vec::new();
        for name in self.graph.node_names() {
            let Ok(category) = self.graph.category_of(name) else { continue };
            match counts.iter_mut().find(|(c, _)| c == category) {
                Some((_, n)) => *n += 1,
                None => counts.push((category.clone(), 1)),
            }
        }
        counts
    }
}
