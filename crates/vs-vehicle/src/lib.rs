//! `vs-vehicle`: per-vehicle state machine and movement.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`state`]   | `VehicleState` (five-way tagged), `GroundLeg`, `AirLeg`, `StateKind` |
//! | [`vehicle`] | `Vehicle`, `VehicleSpec`, `Transition`, `VehicleSnapshot`      |
//! | [`error`]   | `VehicleError`, `VehicleResult<T>`                             |
//!
//! # Movement model
//!
//! ```text
//! AtGate ──(departure time, route gate→takeoff pad)──▶ TakeoffGround
//! TakeoffGround ──(takeoff pad reached)──▶ InAir
//! InAir ──(overhead destination, landing pad + gate acquired)──▶ LandingGround
//! LandingGround ──(gate reached, plan not empty)──▶ AtGate
//! LandingGround ──(gate reached, plan empty)──▶ Done
//! ```
//!
//! Taxiing advances node by node.  Before moving toward the next node the
//! vehicle must hold it; a node held by someone else stalls the vehicle for
//! the tick.  Stalls are retried every tick, forever: there is no queue,
//! timeout, or backoff.
//!
//! A leg whose ground route does not exist is aborted: the vehicle records a
//! [`VehicleError::UnreachableRoute`] fault, stops updating, and `update`
//! returns the error once so the driver can report it.

pub mod error;
pub mod state;
pub mod vehicle;


pub use error::{VehicleError, VehicleResult};
pub use state::{AirLeg, GroundLeg, StateKind, VehicleState};
pub use vehicle::{Transition, Vehicle, VehicleSnapshot, VehicleSpec};
