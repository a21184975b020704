//! Vessels: things that hold cargo. Stations also smelt.
//!
//! The capability surface is deliberately small: a vessel exposes its hold
//! and its delta-v budget, and the economy driver does the rest.

use crate::foundry::Foundry;
use crate::units::{Mass, Volume};
use serde::{Deserialize, Serialize};

/// A quantity of one kind of good carried in a hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cargo {
    /// Volume of one unit, in m3.
    pub unit_volume: Volume,
    pub quantity: Mass,
}

impl Cargo {
    pub fn new(unit_volume: Volume, quantity: Mass) -> Self {
        Self {
            unit_volume,
            quantity,
        }
    }

    /// Total volume of this cargo stack, in m3. Saturates at the Q16.16
    /// ceiling rather than overflowing.
    pub fn total_volume(&self) -> Volume {
        self.unit_volume
            .saturating_mul(Volume::saturating_from_num(self.quantity))
    }
}

/// Capacity and contents of a vessel's hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    /// Capacity by volume, in m3.
    pub volume: Mass,
    /// Capacity by weight, in metric tons. Tonnage is a volume measure in
    /// the shipping industry; the weight term, displacement, makes no
    /// sense for spaceships, so tonnage stands in for weight here.
    pub tonnage: Mass,
    pub contents: Vec<Cargo>,
}

impl Storage {
    pub fn new(volume: Mass, tonnage: Mass) -> Self {
        Self {
            volume,
            tonnage,
            contents: Vec::new(),
        }
    }

    /// Volume occupied by the current contents, in m3.
    pub fn used_volume(&self) -> Volume {
        self.contents
            .iter()
            .fold(Volume::ZERO, |acc, cargo| acc.saturating_add(cargo.total_volume()))
    }
}

/// Anything that can hold cargo, mobile or not.
pub trait Vessel {
    fn storage(&self) -> &Storage;

    /// Remaining delta-v budget, in m/s. Stationary vessels report zero.
    fn delta_v(&self) -> u64;
}

/// A mobile vessel that holds and transports cargo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub hold: Storage,
    pub delta_v: u64,
}

impl Vessel for Ship {
    fn storage(&self) -> &Storage {
        &self.hold
    }

    fn delta_v(&self) -> u64 {
        self.delta_v
    }
}

/// A stationary vessel that produces, consumes, and stores cargo. Its
/// foundry does the producing.
#[derive(Debug, Default)]
pub struct Station {
    pub hold: Storage,
    /// Distinct cargo types produced.
    pub produces: Vec<Cargo>,
    /// Distinct cargo types consumed.
    pub consumes: Vec<Cargo>,
    pub foundry: Foundry,
}

impl Station {
    /// Advance the station's industry by one tick.
    pub fn tick(&self) {
        self.foundry.tick();
    }
}

impl Vessel for Station {
    fn storage(&self) -> &Storage {
        &self.hold
    }

    fn delta_v(&self) -> u64 {
        0
    }
}
