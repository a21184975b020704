use fixed::types::I16F16;
use serde::{Deserialize, Serialize};

/// All stored quantities are whole "mass units". Unsigned, so a quantity
/// can never be negative by construction.
pub type Mass = u64;

/// Ticks are the atomic unit of simulation time.
pub type Ticks = u64;

/// Q16.16 fixed-point for fractional cargo volumes (m3 per unit).
pub type Volume = I16F16;

/// Convert an f64 to Volume. Use only for initialization, never in sim loop.
#[inline]
pub fn f64_to_volume(v: f64) -> Volume {
    Volume::from_num(v)
}

/// Convert Volume to f64. Use only for display, never in sim loop.
#[inline]
pub fn volume_to_f64(v: Volume) -> f64 {
    v.to_num::<f64>()
}

/// Purity of a carbon-bearing fuel, in whole percent.
///
/// Scaling is exact integer arithmetic with floor division, so results are
/// deterministic across platforms and there is no float in the sim loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purity {
    percent: u32,
}

impl Purity {
    /// `percent` must be in 1..=100. Checked at compile time for the
    /// furnace constants via the const constructor.
    pub const fn from_percent(percent: u32) -> Self {
        assert!(percent >= 1 && percent <= 100);
        Self { percent }
    }

    pub const fn percent(self) -> u32 {
        self.percent
    }

    /// Chemically active mass contained in `feedstock` units of fuel.
    /// Floors: `⌊feedstock × percent / 100⌋`.
    #[inline]
    pub fn active_mass(self, feedstock: Mass) -> Mass {
        (feedstock as u128 * self.percent as u128 / 100) as Mass
    }

    /// Fuel mass that must be drawn to supply `active` units of carbon.
    /// Floors: `⌊active × 100 / percent⌋`. Lossy; up to one fuel unit per
    /// pass evaporates to rounding. Known, preserved behavior.
    #[inline]
    pub fn feedstock_mass(self, active: Mass) -> Mass {
        (active as u128 * 100 / self.percent as u128) as Mass
    }
}
