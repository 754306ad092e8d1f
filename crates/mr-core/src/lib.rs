//! `mr-core` — foundational types for the `medroute` emergency routing engine.
//!
//! This crate is a dependency of every other `mr-*` crate.  It intentionally
//! has no `mr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`geo`]         | `Coord`, `GeometryModel` (distance → minutes)         |
//! | [`traffic`]     | `TrafficProfile`, `TrafficModel` (seeded multipliers) |
//! | [`facility`]    | `Category` enum                                       |
//! | [`config`]      | `NetworkConfig`                                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod facility;
pub mod geo;
pub mod ids;
pub mod traffic;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NetworkConfig;
pub use error::{CoreError, CoreResult};
pub use facility::Category;
pub use geo::{Coord, GeometryModel};
pub use ids::NodeId;
pub use traffic::{TrafficModel, TrafficProfile};
