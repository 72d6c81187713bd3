//! `vs-sim`: tick-based driver for the vertisim core.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Clock     : time += base_step × acceleration
//!   ② Vehicles  : for each live vehicle in ascending VehicleId order:
//!                   update(dt, time)  → transition?  → on_transition
//!                                     → leg fault?   → on_fault (vehicle parks)
//!   ③ Snapshot  : every snapshot_interval_ticks ticks → on_snapshot
//! until every vehicle is settled or max_ticks is reached
//! ```
//!
//! Vehicles mutate their vertiports' node and gate tables directly during
//! ②.  The loop is single-threaded; ascending id order decides every
//! same-tick contention.
//!
//! # Commands
//!
//! [`Sim::issue_command`] looks a vehicle up by name and overrides its
//! destination or speed.  It is meant to be called between ticks.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vs_core::SimConfig;
//! use vs_ground::UniformCostRouter;
//! use vs_sim::{NoopObserver, SimBuilder};
//!
//! let mut b = SimBuilder::new(SimConfig::default(), UniformCostRouter);
//! // ... b.vertiport(..), b.vehicle(..)
//! let mut sim = b.build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod command;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use command::CommandIndex;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunStop, Sim};
