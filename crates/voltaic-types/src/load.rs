// Copyright (c) 2026 Voltaic Systems s.r.o.
//
// This file is part of Voltaic.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: licensing@voltaic-systems.example

//! Output shapes of `calculateInverterDCInput` and
//! `calculateLoadRequirements` (§4.3, §6).

use serde::{Deserialize, Serialize};

/// An inverter's AC-side demand and the DC input it implies (§4.3).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterDemand {
    pub ac_load_watts: f64,
    pub ac_voltage: f64,
    pub dc_input_watts: f64,
    pub dc_input_current: f64,
}

/// Aggregate power-budget figures across a component set (§6). Field names
/// follow §6's literal `dcLoads_W`-style spelling rather than plain
/// camelCase, since that is the wire contract external callers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadRequirements {
    #[serde(rename = "dcLoads_W")]
    pub dc_loads_w: f64,
    #[serde(rename = "acLoads_W")]
    pub ac_loads_w: f64,
    #[serde(rename = "totalPower_W")]
    pub total_power_w: f64,
    #[serde(rename = "peakPower_W")]
    pub peak_power_w: f64,
    #[serde(rename = "averagePower_W")]
    pub average_power_w: f64,
    #[serde(rename = "batteryCapacityRequired_Ah")]
    pub battery_capacity_required_ah: f64,
    #[serde(rename = "inverterSizeRequired_W")]
    pub inverter_size_required_w: f64,
    #[serde(rename = "chargingPowerRequired_W")]
    pub charging_power_required_w: f64,
}
