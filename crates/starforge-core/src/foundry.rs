//! A foundry: a bank of independent furnaces ticked together.
//!
//! Furnaces share nothing, so a tick may run them in any order -- or in
//! parallel with the `parallel` feature -- without changing any per-furnace
//! result.

use crate::reactor::BlastFurnace;
use crate::units::Mass;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Identifies a furnace within a foundry. Cheap to copy and compare.
    pub struct FurnaceId;
}

/// A bank of blast furnaces, keyed by stable handles.
#[derive(Debug, Default)]
pub struct Foundry {
    furnaces: SlotMap<FurnaceId, BlastFurnace>,
}

impl Foundry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_furnace(&mut self, furnace: BlastFurnace) -> FurnaceId {
        self.furnaces.insert(furnace)
    }

    /// Remove a furnace, returning it if the handle was live.
    pub fn remove_furnace(&mut self, id: FurnaceId) -> Option<BlastFurnace> {
        self.furnaces.remove(id)
    }

    pub fn get(&self, id: FurnaceId) -> Option<&BlastFurnace> {
        self.furnaces.get(id)
    }

    pub fn len(&self) -> usize {
        self.furnaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.furnaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FurnaceId, &BlastFurnace)> {
        self.furnaces.iter()
    }

    /// Run one refining pass on every furnace, serially.
    pub fn tick(&self) {
        for furnace in self.furnaces.values() {
            furnace.refine();
        }
    }

    /// Run one refining pass on every furnace, across the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn tick_parallel(&self) {
        use rayon::prelude::*;
        let furnaces: Vec<&BlastFurnace> = self.furnaces.values().collect();
        furnaces.par_iter().for_each(|furnace| furnace.refine());
    }

    /// Total iron accumulated across the bank.
    pub fn total_iron(&self) -> Mass {
        self.furnaces
            .values()
            .map(|furnace| furnace.readout().iron)
            .sum()
    }
}
