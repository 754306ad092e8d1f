//! City graph representation.
//!
//! # Data layout
//!
//! Facilities are interned to dense `NodeId`s in insertion order.  Three
//! parallel `Vec`s indexed by `NodeId` hold the name, category and
//! coordinate; an `FxHashMap` maps names back to ids, so lookups in both
//! directions are O(1).
//!
//! Base travel times live in a dense, symmetric N×N matrix stored as a vector
//! of rows:
//!
//! ```text
//! costs[i][j] == costs[j][i]      (undirected)
//! costs[i][i] == 0.0
//! costs[i][j] == f64::INFINITY    (no edge)
//! ```
//!
//! Adding a node appends one `INFINITY` to every existing row and pushes a
//! new row, which is O(N) and never renumbers existing ids.
//!
//! # Traffic
//!
//! The matrix holds static costs only.  Traffic-adjusted costs are computed
//! on demand from the session [`TrafficModel`]; nothing is cached, and the
//! same `(i, j)` always yields the same value for the lifetime of the graph.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use mr_core::{Category, Coord, GeometryModel, NetworkConfig, NodeId, TrafficModel};

use crate::{SpatialError, SpatialResult};

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Undirected facility graph with a dense base-cost matrix and a per-session
/// traffic model.
///
/// # Example
///
/// ```
/// use mr_core::Category;
/// use mr_spatial::CityGraph;
///
/// let mut g = CityGraph::new(42);
/// let central = g.add_node("Central Hospital", Category::Hospital, (0.0, 0.0));
/// let north = g.add_node("North Urgent Care", Category::UrgentCare, (-2.0, 3.0));
/// let cost = g.add_edge("Central Hospital", "North Urgent Care", None).unwrap();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.base_cost(central, north), cost);
/// assert!(g.traffic_adjusted_cost(central, north).is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct CityGraph {
    // ── Node data (indexed by NodeId) ─────────────────────────────────────
    names:      Vec<String>,
    categories: Vec<Category>,
    coords:     Vec<Coord>,
    lookup:     FxHashMap<String, NodeId>,

    // ── Edge data ─────────────────────────────────────────────────────────
    /// Row-per-node base cost matrix in minutes.
    costs: Vec<Vec<f64>>,

    // ── Cost models ───────────────────────────────────────────────────────
    traffic:     TrafficModel,
    display:     TrafficModel,
    geometry:    GeometryModel,
    floor_ratio: f64,
}

impl CityGraph {
    /// Empty graph with default models and a fixed session seed.
    pub fn new(seed: u64) -> Self {
        let cfg = NetworkConfig::with_seed(seed);
        Self::from_parts(seed, &cfg)
    }

    /// Empty graph from a validated configuration.
    ///
    /// A config without a seed draws one from entropy, so traffic differs
    /// between sessions.
    pub fn with_config(cfg: &NetworkConfig) -> SpatialResult<Self> {
        cfg.validate()?;
        let seed = cfg.seed.unwrap_or_else(TrafficModel::session_seed);
        Ok(Self::from_parts(seed, cfg))
    }

    fn from_parts(seed: u64, cfg: &NetworkConfig) -> Self {
        Self {
            names:       Vec::new(),
            categories:  Vec::new(),
            coords:      Vec::new(),
            lookup:      FxHashMap::default(),
            costs:       Vec::new(),
            traffic:     TrafficModel::new(seed, cfg.routing_profile),
            display:     TrafficModel::new(seed, cfg.display_profile),
            geometry:    cfg.geometry,
            floor_ratio: cfg.cost_floor_ratio,
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add a facility and return its `NodeId` (sequential from 0).
    ///
    /// Idempotent: if `name` already exists its id is returned and the stored
    /// category and coordinate are left untouched.
    pub fn add_node(
        &mut self,
        name: &str,
        category: impl Into<Category>,
        coord: impl Into<Coord>,
    ) -> NodeId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }

        let id = NodeId(self.names.len() as u32);
        for row in &mut self.costs {
            row.push(f64::INFINITY);
        }
        let mut row = vec![f64::INFINITY; self.names.len() + 1];
        row[id.index()] = 0.0;
        self.costs.push(row);

        self.names.push(name.to_string());
        self.categories.push(category.into());
        self.coords.push(coord.into());
        self.lookup.insert(name.to_string(), id);

        trace!(%id, name, "node added");
        id
    }

    /// Add (or overwrite) an undirected edge and return the stored base cost.
    ///
    /// `cost` defaults to the geometry estimate between the two facilities.
    /// Either way the stored value is at least `floor_ratio * suggested`, so
    /// an implausibly cheap edge between distant facilities is raised to the
    /// floor rather than rejected.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        cost: Option<f64>,
    ) -> SpatialResult<f64> {
        let i = self.node_id(origin)?;
        let j = self.node_id(destination)?;
        if i == j {
            return Err(SpatialError::SelfLoop(origin.to_string()));
        }
        if let Some(c) = cost.filter(|c| !c.is_finite()) {
            return Err(SpatialError::InvalidCost {
                origin:      origin.to_string(),
                destination: destination.to_string(),
                cost:        c,
            });
        }

        let suggested = self.geometry.estimated_time(self.coords[i.index()], self.coords[j.index()]);
        let requested = cost.unwrap_or(suggested);
        let floor = suggested * self.floor_ratio;
        let stored = requested.max(floor);
        if stored > requested {
            debug!(origin, destination, requested, floor, "edge cost raised to geometry floor");
        }

        self.costs[i.index()][j.index()] = stored;
        self.costs[j.index()][i.index()] = stored;
        Ok(stored)
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of undirected edges (each connected pair counted once).
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    // ── Node lookups ──────────────────────────────────────────────────────

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn node_id(&self, name: &str) -> SpatialResult<NodeId> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| SpatialError::UnknownNode(name.to_string()))
    }

    /// Name of a node.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this graph.
    pub fn name_of(&self, id: NodeId) -> &str {
        &self.names[id.index()]
    }

    /// Facility names in insertion (= index) order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// All node ids in index order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.names.len() as u32).map(NodeId)
    }

    pub fn category_of(&self, name: &str) -> SpatialResult<&Category> {
        let id = self.node_id(name)?;
        Ok(&self.categories[id.index()])
    }

    pub fn coordinate_of(&self, name: &str) -> SpatialResult<Coord> {
        let id = self.node_id(name)?;
        Ok(self.coords[id.index()])
    }

    /// Number of facilities directly connected to `name`.
    pub fn degree(&self, name: &str) -> SpatialResult<usize> {
        Ok(self.degree_of(self.node_id(name)?))
    }

    #[inline]
    pub fn degree_of(&self, id: NodeId) -> usize {
        self.neighbors(id).count()
    }

    // ── Edge access ───────────────────────────────────────────────────────

    /// Static base cost in minutes; `0.0` on the diagonal, `INFINITY` when
    /// there is no edge.
    ///
    /// # Panics
    /// Panics if either id was not issued by this graph.
    #[inline]
    pub fn base_cost(&self, i: NodeId, j: NodeId) -> f64 {
        self.costs[i.index()][j.index()]
    }

    /// Base cost scaled by the routing traffic profile.  Used by routers and
    /// statistics.
    #[inline]
    pub fn traffic_adjusted_cost(&self, i: NodeId, j: NodeId) -> f64 {
        self.traffic.current_cost(self.base_cost(i, j), i.index(), j.index())
    }

    /// Base cost scaled by the display traffic profile.  Not used for
    /// routing.
    #[inline]
    pub fn display_cost(&self, i: NodeId, j: NodeId) -> f64 {
        self.display.current_cost(self.base_cost(i, j), i.index(), j.index())
    }

    /// Geometry estimate between two named facilities, before flooring.
    pub fn suggested_cost(&self, origin: &str, destination: &str) -> SpatialResult<f64> {
        let a = self.coordinate_of(origin)?;
        let b = self.coordinate_of(destination)?;
        Ok(self.geometry.estimated_time(a, b))
    }

    /// Directly connected nodes of `id` with their base costs, in index
    /// order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.costs[id.index()]
            .iter()
            .enumerate()
            .filter(move |&(j, c)| j != id.index() && c.is_finite())
            .map(|(j, &c)| (NodeId(j as u32), c))
    }

    /// Every undirected edge once, as `(i, j, base_cost)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.costs.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .skip(i + 1)
                .filter(|(_, c)| c.is_finite())
                .map(move |(j, &c)| (NodeId(i as u32), NodeId(j as u32), c))
        })
    }

    // ── Models ────────────────────────────────────────────────────────────

    /// Session seed shared by both traffic profiles.
    pub fn seed(&self) -> u64 {
        self.traffic.seed()
    }

    pub fn traffic(&self) -> &TrafficModel {
        &self.traffic
    }

    pub fn geometry(&self) -> &GeometryModel {
        &self.geometry
    }
}
