//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these
//! helpers are available in unit tests, integration tests, and benchmarks
//! (via the `test-utils` feature).

use crate::reaction::Charge;
use crate::reactor::BlastFurnace;

/// The hematite/coke/oxygen charge from the smelting scenario: stalls
/// after magnetite formation on the first pass.
pub fn ore_heavy_charge() -> Charge {
    Charge {
        hematite: 300,
        coke: 100,
        oxygen: 100,
        ..Charge::default()
    }
}

/// A fuel-rich charge that carries CO all the way to iron in one pass.
pub fn fuel_rich_charge() -> Charge {
    Charge {
        hematite: 30,
        coke: 200,
        oxygen: 400,
        ..Charge::default()
    }
}

/// A large mixed charge with enough fuel and oxygen to carry CO all the
/// way through to iron.
pub fn bulk_charge() -> Charge {
    Charge {
        hematite: 3_000,
        magnetite: 1_000,
        coke: 20_000,
        charcoal: 8_000,
        oxygen: 50_000,
    }
}

pub fn charged_furnace(charge: Charge) -> BlastFurnace {
    BlastFurnace::charged(charge)
}

/// Refine `ticks` times in a row.
pub fn run_ticks(furnace: &BlastFurnace, ticks: u64) {
    for _ in 0..ticks {
        furnace.refine();
    }
}
