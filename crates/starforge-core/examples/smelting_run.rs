//! Smelting run example: one furnace, fed between ticks.
//!
//! Charges a blast furnace with ore and fuel, refines it for 10 ticks
//! while an operator tops up oxygen, and prints the readout after each
//! tick.
//!
//! Run with: `cargo run -p starforge-core --example smelting_run`

use starforge_core::reaction::Charge;
use starforge_core::reactor::{BlastFurnace, Feedstock};

fn main() {
    // A charge that is oxygen-poor: the interesting part is watching the
    // chain restart as oxygen arrives.
    let furnace = BlastFurnace::charged(Charge {
        hematite: 300,
        magnetite: 50,
        coke: 400,
        charcoal: 100,
        oxygen: 0,
    });

    for tick in 1..=10 {
        // Operator delivers a canister of oxygen each tick.
        furnace.add_feedstock(Feedstock::Oxygen, 120);
        furnace.refine();

        let state = furnace.readout();
        println!(
            "tick {tick:2}: hematite {:4}  magnetite {:4}  coke {:4}  charcoal {:4}  \
             oxygen {:4}  iron {:4}  co2 {:4}",
            state.hematite,
            state.magnetite,
            state.coke,
            state.charcoal,
            state.oxygen,
            state.iron,
            state.carbon_dioxide,
        );
    }
}
