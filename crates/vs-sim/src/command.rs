//! Name → id lookup for externally issued commands.

use rustc_hash::FxHashMap;
use vs_core::VehicleId;

use crate::{SimError, SimResult};

/// Vehicle names are the only handle external controllers have, so every
/// registered name must be unique.
#[derive(Debug, Default, Clone)]
pub struct CommandIndex {
    by_name: FxHashMap<String, VehicleId>,
}

impl CommandIndex {
    pub fn with_capacity(n: usize) -> Self {
        let mut by_name = FxHashMap::default();
        by_name.reserve(n);
        Self { by_name }
    }

    /// Register `name`.  Fails if it is already taken.
    pub fn insert(&mut self, name: &str, id: VehicleId) -> SimResult<()> {
        if self.by_name.contains_key(name) {
            return Err(SimError::DuplicateVehicle(name.to_owned()));
        }
        self.by_name.insert(name.to_owned(), id);
        Ok(())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<VehicleId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
