//! `vs-ground`: vertiport ground graphs, resource tables, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`layout`]    | `GroundLayout` (CSR adjacency), `GroundLayoutBuilder`      |
//! | [`vertiport`] | `Vertiport`: node occupancy and gate tables               |
//! | [`router`]    | `Router` trait, `Route`, `UniformCostRouter`               |
//! | [`error`]     | `GroundError`, `GroundResult<T>`                           |
//!
//! # Resource model
//!
//! A vertiport's taxi nodes and gates are exclusive resources.  Acquisition
//! never blocks and never queues: `reserve_node` / `request_gate` either
//! succeed immediately or report failure, and the caller retries on a later
//! tick.  Whoever asks first while the resource is free wins.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route`.                |

pub mod error;
pub mod layout;
pub mod router;
pub mod vertiport;

#[cfg(test)]
mod tests;

pub use error::{GroundError, GroundResult};
pub use layout::{GroundLayout, GroundLayoutBuilder, HOP_COST};
pub use router::{Route, Router, UniformCostRouter};
pub use vertiport::{GateSlot, Vertiport};
