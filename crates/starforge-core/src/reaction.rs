//! The iron-smelting reaction chain.
//!
//! A single pass converts a snapshot of feedstock quantities through four
//! strictly ordered stages, each limited by whichever reactant runs out
//! first:
//!
//! 1. Carbon extraction from impure fuels (coke 95%, charcoal 75%).
//! 2. `2 C + O2 -> 2 CO`
//! 3. `3 Fe2O3 + CO -> 2 Fe3O4 + CO2`
//! 4. `Fe3O4 + CO -> 3 FeO + CO2`
//! 5. `FeO + CO -> Fe + CO2`
//!
//! The chain is a pure function over a [`Charge`]; locking and commit
//! belong to [`crate::reactor::BlastFurnace`]. Wustite and carbon monoxide
//! left over at the end of a pass are vented, never stockpiled.

use crate::units::{Mass, Purity};
use serde::{Deserialize, Serialize};

/// Fraction of coke mass that is chemically active carbon.
pub const COKE_PURITY: Purity = Purity::from_percent(95);

/// Fraction of charcoal mass that is chemically active carbon.
pub const CHARCOAL_PURITY: Purity = Purity::from_percent(75);

// ---------------------------------------------------------------------------
// Pass accounting types
// ---------------------------------------------------------------------------

/// Snapshot of the five feedstock quantities at the start of a pass.
///
/// Magnetite is the one quantity that is both an input (pre-existing stock)
/// and an output (produced mid-pass, partially consumed in the same pass).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    pub hematite: Mass,
    pub magnetite: Mass,
    pub coke: Mass,
    pub charcoal: Mass,
    pub oxygen: Mass,
}

/// Feedstock drawn down by one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumed {
    pub hematite: Mass,
    pub magnetite: Mass,
    pub coke: Mass,
    pub charcoal: Mass,
    pub oxygen: Mass,
}

/// Output of one pass. Magnetite produced here is gross; the net stock
/// change is `produced.magnetite - consumed.magnetite`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Produced {
    pub magnetite: Mass,
    pub iron: Mass,
    pub carbon_dioxide: Mass,
}

/// Intermediates left when the pass ends. Vented, not carried to the next
/// pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discarded {
    pub wustite: Mass,
    pub carbon_monoxide: Mass,
}

/// Full accounting for one pass of the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOutcome {
    pub consumed: Consumed,
    pub produced: Produced,
    pub discarded: Discarded,
}

// ---------------------------------------------------------------------------
// The chain
// ---------------------------------------------------------------------------

/// Run one pass of the reaction chain against `charge`.
///
/// Pure and infallible: every stage is limited by `min`, so consumption
/// never exceeds the snapshot and no quantity can underflow. All division
/// floors; the fuel back-conversion in stage 2 may lose up to one unit of
/// each fuel per pass to rounding.
pub fn smelt(charge: &Charge) -> PassOutcome {
    // Stage 1: usable carbon. Accounting quantity only, never stored.
    let coke_carbon = COKE_PURITY.active_mass(charge.coke);
    let charcoal_carbon = CHARCOAL_PURITY.active_mass(charge.charcoal);
    let carbon = coke_carbon.saturating_add(charcoal_carbon);

    // Stage 2: 2 C + O2 -> 2 CO
    let co_factor = (carbon / 2).min(charge.oxygen / 2);
    let mut carbon_monoxide = co_factor * 2;
    let oxygen_used = co_factor * 2;

    // Carbon demand is charged to coke first, charcoal covers the rest.
    // Back-converting active carbon to fuel mass floors.
    let coke_carbon_used = coke_carbon.min(co_factor * 2);
    let charcoal_carbon_used = (co_factor * 2 - coke_carbon_used).min(charcoal_carbon);
    let coke_used = COKE_PURITY.feedstock_mass(coke_carbon_used);
    let charcoal_used = CHARCOAL_PURITY.feedstock_mass(charcoal_carbon_used);

    // Stage 3: 3 Fe2O3 + CO -> 2 Fe3O4 + CO2
    let magnetite_factor = (charge.hematite / 3).min(carbon_monoxide);
    carbon_monoxide -= magnetite_factor;
    let magnetite_produced = 2 * magnetite_factor;
    let mut carbon_dioxide = magnetite_factor;
    let hematite_used = 3 * magnetite_factor;

    // Stage 4: Fe3O4 + CO -> 3 FeO + CO2
    // Draws from the combined pool of pre-existing and freshly made
    // magnetite.
    let magnetite_pool = charge.magnetite.saturating_add(magnetite_produced);
    let wustite_factor = magnetite_pool.min(carbon_monoxide);
    carbon_monoxide -= wustite_factor;
    let mut wustite = wustite_factor.saturating_mul(3);
    carbon_dioxide = carbon_dioxide.saturating_add(wustite_factor);
    let magnetite_used = wustite_factor;

    // Stage 5: FeO + CO -> Fe + CO2
    let iron_factor = wustite.min(carbon_monoxide);
    carbon_monoxide -= iron_factor;
    wustite -= iron_factor;
    let iron = iron_factor;
    carbon_dioxide = carbon_dioxide.saturating_add(iron_factor);

    PassOutcome {
        consumed: Consumed {
            hematite: hematite_used,
            magnetite: magnetite_used,
            coke: coke_used,
            charcoal: charcoal_used,
            oxygen: oxygen_used,
        },
        produced: Produced {
            magnetite: magnetite_produced,
            iron,
            carbon_dioxide,
        },
        discarded: Discarded {
            wustite,
            carbon_monoxide,
        },
    }
}
