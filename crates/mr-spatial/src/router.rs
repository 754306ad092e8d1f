//! Routing trait and Dijkstra implementations.
//!
//! # Pluggability
//!
//! Callers that hold `NodeId`s route through the [`Router`] trait, so a
//! different search (A*, a precomputed table) can be swapped in without
//! touching the graph.  Two implementations ship here:
//!
//! | Router                 | Frontier scan        | Cost per query   |
//! |------------------------|----------------------|------------------|
//! | [`DijkstraRouter`]     | dense linear scan    | O(N²)            |
//! | [`HeapDijkstraRouter`] | binary heap          | O((N + E) log N) |
//!
//! Both read edge weights lazily through
//! [`CityGraph::traffic_adjusted_cost`] at relaxation time, pick the
//! lowest `NodeId` when tentative distances tie, and only replace a
//! predecessor on a strictly shorter distance.  They therefore return
//! identical routes.
//!
//! # Cost units
//!
//! All costs are minutes (`f64`).  An unreachable destination is reported as
//! [`Route::unreachable`] (empty path, `INFINITY` cost), never as an error.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use mr_core::NodeId;

use crate::network::CityGraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes to visit in order, origin first.  Empty when unreachable.
    pub nodes: Vec<NodeId>,
    /// Facility names matching `nodes`.
    pub path: Vec<String>,
    /// Sum of traffic-adjusted edge costs along the path, in minutes.
    pub total_cost: f64,
}

impl Route {
    /// The "no route" result: empty path, infinite cost.
    pub fn unreachable() -> Self {
        Self { nodes: Vec::new(), path: Vec::new(), total_cost: f64::INFINITY }
    }

    pub fn is_found(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// `true` if origin and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so a single router can be shared by
/// callers on several threads (each holding its own graph borrow).
pub trait Router: Send + Sync {
    /// Fastest route from `from` to `to` under current traffic.
    ///
    /// Ids not issued by `graph` and disconnected endpoints both yield
    /// [`Route::unreachable`].  `from == to` yields a single-node route with
    /// zero cost.
    fn route(&self, graph: &CityGraph, from: NodeId, to: NodeId) -> Route;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Classic array-based Dijkstra: each iteration scans all unvisited nodes for
/// the minimum tentative distance.  Best for the small, dense graphs a city
/// facility network produces.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &CityGraph, from: NodeId, to: NodeId) -> Route {
        let n = graph.node_count();
        if from.index() >= n || to.index() >= n {
            return Route::unreachable();
        }

        let mut dist    = vec![f64::INFINITY; n];
        let mut prev    = vec![NodeId::INVALID; n];
        let mut visited = vec![false; n];
        dist[from.index()] = 0.0;

        for _ in 0..n {
            // Strict `<` keeps the lowest index among equal distances.
            let mut best: Option<usize> = None;
            for v in 0..n {
                if !visited[v] && best.is_none_or(|b| dist[v] < dist[b]) {
                    best = Some(v);
                }
            }
            let Some(u) = best else { break };
            if dist[u] == f64::INFINITY {
                break;
            }
            visited[u] = true;

            let node = NodeId(u as u32);
            for v in 0..n {
                if visited[v] {
                    continue;
                }
                let w = graph.traffic_adjusted_cost(node, NodeId(v as u32));
                if w == f64::INFINITY {
                    continue;
                }
                let candidate = dist[u] + w;
                if candidate < dist[v] {
                    dist[v] = candidate;
                    prev[v] = node;
                }
            }
        }

        reconstruct(graph, &prev, from, to, dist[to.index()])
    }
}

// ── HeapDijkstraRouter ────────────────────────────────────────────────────────

/// Priority-queue Dijkstra over each node's finite neighbours.  Stops as soon
/// as the destination is settled.
pub struct HeapDijkstraRouter;

/// Heap entry ordered by `(cost, node)`; `f64::total_cmp` gives the total
/// order `BinaryHeap` needs, and the `NodeId` key makes ties deterministic.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Frontier {
    cost: f64,
    node: NodeId,
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl Router for HeapDijkstraRouter {
    fn route(&self, graph: &CityGraph, from: NodeId, to: NodeId) -> Route {
        let n = graph.node_count();
        if from.index() >= n || to.index() >= n {
            return Route::unreachable();
        }

        let mut dist    = vec![f64::INFINITY; n];
        let mut prev    = vec![NodeId::INVALID; n];
        let mut settled = vec![false; n];
        dist[from.index()] = 0.0;

        // Reverse makes BinaryHeap (max) behave as a min-heap.
        let mut heap: BinaryHeap<Reverse<Frontier>> = BinaryHeap::new();
        heap.push(Reverse(Frontier { cost: 0.0, node: from }));

        while let Some(Reverse(Frontier { cost, node })) = heap.pop() {
            // Skip stale heap entries.
            if settled[node.index()] || cost > dist[node.index()] {
                continue;
            }
            settled[node.index()] = true;
            if node == to {
                break;
            }

            for (neighbor, _) in graph.neighbors(node) {
                if settled[neighbor.index()] {
                    continue;
                }
                let candidate = cost + graph.traffic_adjusted_cost(node, neighbor);
                if candidate < dist[neighbor.index()] {
                    dist[neighbor.index()] = candidate;
                    prev[neighbor.index()] = node;
                    heap.push(Reverse(Frontier { cost: candidate, node: neighbor }));
                }
            }
        }

        reconstruct(graph, &prev, from, to, dist[to.index()])
    }
}

// ── Shared internals ──────────────────────────────────────────────────────────

/// Walk predecessor links back from `to`.  Returns `unreachable` if `to` was
/// never reached or the chain breaks before `from`.
fn reconstruct(
    graph: &CityGraph,
    prev: &[NodeId],
    from: NodeId,
    to: NodeId,
    total_cost: f64,
) -> Route {
    if total_cost == f64::INFINITY {
        return Route::unreachable();
    }

    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        if !cur.is_valid() {
            return Route::unreachable();
        }
        nodes.push(cur);
    }
    nodes.reverse();

    let path = nodes.iter().map(|&id| graph.name_of(id).to_string()).collect();
    Route { nodes, path, total_cost }
}

// ── Name-keyed entry point ────────────────────────────────────────────────────

impl CityGraph {
    /// Fastest route between two named facilities under current traffic,
    /// using [`DijkstraRouter`].
    ///
    /// Unknown names and disconnected facilities both return
    /// [`Route::unreachable`]; callers decide how to present "no route".
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn find_fastest_route(&self, origin: &str, destination: &str) -> Route {
        let (Ok(from), Ok(to)) = (self.node_id(origin), self.node_id(destination)) else {
            debug!("unknown endpoint");
            return Route::unreachable();
        };

        let route = DijkstraRouter.route(self, from, to);
        if route.is_found() {
            debug!(cost = route.total_cost, hops = route.hop_count(), "route found");
        } else {
            debug!("no route");
        }
        route
    }
}
