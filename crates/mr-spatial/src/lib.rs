//! `mr-spatial` — city graph, traffic-aware routing, and network statistics.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`network`] | `CityGraph` (dense cost matrix + interned facility names)    |
//! | [`router`]  | `Router` trait, `Route`, `DijkstraRouter`, `HeapDijkstraRouter` |
//! | [`stats`]   | `NetworkStats`, `CostSummary`                                |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |
//!
//! # Logging
//!
//! Emits `tracing` events (`trace` for node insertion, `debug` for floored
//! edge costs and route outcomes).  No subscriber is installed here.

pub mod error;
pub mod network;
pub mod router;
pub mod stats;


pub use error::{SpatialError, SpatialResult};
pub use network::CityGraph;
pub use router::{DijkstraRouter, HeapDijkstraRouter, Route, Router};
pub use stats::{CostSummary, NetworkStats};
