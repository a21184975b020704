//! Starforge Core -- the refining core for a space-cargo economy sim.
//!
//! The centerpiece is the blast furnace: a reactor that converts raw
//! feedstocks (hematite, magnetite, coke, charcoal, oxygen) into iron and
//! carbon dioxide through a fixed four-stage reaction chain. Rendering,
//! input, and orbital mechanics are the caller's concern; this crate only
//! moves mass between buffers.
//!
//! # Snapshot-then-commit
//!
//! Each [`reactor::BlastFurnace::refine`] call is two short critical
//! sections around a lock-free computation:
//!
//! 1. **Snapshot** -- copy the five feedstock quantities under the lock.
//! 2. **Compute** -- run the pure chain ([`reaction::smelt`]) on the copy.
//! 3. **Commit** -- write consumption and production back under the lock.
//!
//! No caller ever observes a half-updated furnace. Two racing calls may
//! snapshot the same stock and jointly over-produce; see
//! [`reactor::BlastFurnace`] for why that is accepted.
//!
//! # Key types
//!
//! - [`reaction::smelt`] -- the pure reaction chain, one pass at a time.
//! - [`reactor::BlastFurnace`] -- a furnace with the lock discipline above.
//! - [`foundry::Foundry`] -- a bank of independent furnaces ticked
//!   together (optionally in parallel via the `parallel` feature).
//! - [`vessel::Vessel`] -- the cargo-capability trait with [`vessel::Ship`]
//!   and [`vessel::Station`] variants.
//! - [`units::Purity`] -- exact whole-percent fuel purity arithmetic.
//! - [`data_loader`] -- JSON charge definitions (`data-loader` feature).

#[cfg(feature = "data-loader")]
pub mod data_loader;
pub mod foundry;
pub mod reaction;
pub mod reactor;
pub mod units;
pub mod vessel;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
