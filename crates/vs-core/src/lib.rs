//! `vs-core`: foundational types for the `vertisim` vertiport simulator.
//!
//! This crate is a dependency of every other `vs-*` crate.  It has no `vs-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`ids`]    | `VehicleId`, `VertiportId`, `NodeId`, `GateId`              |
//! | [`geo`]    | `Point`, `move_towards`, `reached`                          |
//! | [`time`]   | `SimClock`, `SimConfig`, turnaround constant                |
//! | [`error`]  | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, `Point`, `SimConfig`. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Point, REACH_TOLERANCE, move_towards, reached};
pub use ids::{GateId, NodeId, VehicleId, VertiportId};
pub use time::{SimClock, SimConfig, TURNAROUND_SECS};
