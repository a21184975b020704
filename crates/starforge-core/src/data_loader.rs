//! Furnace charge loading from JSON.
//!
//! Feature-gated behind `data-loader`. External tools supply signed
//! quantities; negative values are rejected here so the core never sees
//! them.

use crate::foundry::Foundry;
use crate::reaction::Charge;
use crate::reactor::BlastFurnace;
use crate::units::Mass;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("negative quantity for {field}: {value}")]
    NegativeQuantity { field: &'static str, value: i64 },
}

// ---------------------------------------------------------------------------
// JSON data structures
// ---------------------------------------------------------------------------

/// JSON representation of one furnace's initial charge.
#[derive(Debug, serde::Deserialize)]
pub struct ChargeData {
    #[serde(default)]
    pub hematite: i64,
    #[serde(default)]
    pub magnetite: i64,
    #[serde(default)]
    pub coke: i64,
    #[serde(default)]
    pub charcoal: i64,
    #[serde(default)]
    pub oxygen: i64,
}

/// Top-level foundry definition.
#[derive(Debug, serde::Deserialize)]
pub struct FoundryData {
    #[serde(default)]
    pub furnaces: Vec<ChargeData>,
}

// ---------------------------------------------------------------------------
// Loading functions
// ---------------------------------------------------------------------------

/// Load a single furnace charge from a JSON string.
pub fn load_charge_json(json: &str) -> Result<Charge, DataLoadError> {
    let data: ChargeData = serde_json::from_str(json)?;
    build_charge(&data)
}

/// Load a whole foundry from a JSON string.
pub fn load_foundry_json(json: &str) -> Result<Foundry, DataLoadError> {
    let data: FoundryData = serde_json::from_str(json)?;
    let mut foundry = Foundry::new();
    for charge_data in &data.furnaces {
        let charge = build_charge(charge_data)?;
        foundry.add_furnace(BlastFurnace::charged(charge));
    }
    Ok(foundry)
}

fn build_charge(data: &ChargeData) -> Result<Charge, DataLoadError> {
    Ok(Charge {
        hematite: non_negative("hematite", data.hematite)?,
        magnetite: non_negative("magnetite", data.magnetite)?,
        coke: non_negative("coke", data.coke)?,
        charcoal: non_negative("charcoal", data.charcoal)?,
        oxygen: non_negative("oxygen", data.oxygen)?,
    })
}

fn non_negative(field: &'static str, value: i64) -> Result<Mass, DataLoadError> {
    Mass::try_from(value).map_err(|_| DataLoadError::NegativeQuantity { field, value })
}
