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

//! Derating & Sizing (§4.2): temperature derating, the bundling factor
//! table (§4.2 SUPPLEMENT), effective ampacity, and the gauge-sizing search.

use crate::gauge::{base_ampacity, resistance_ohms_per_kft, Insulation};
use voltaic_types::{ConductorMaterial, Gauge, SizingStatus, WireCalculation};

/// Temperature-derating multiplier for ambient `celsius` (§4.2).
#[must_use]
pub fn temperature_derating(celsius: f64) -> f64 {
    if celsius <= 25.0 {
        1.08
    } else if celsius <= 30.0 {
        1.00
    } else if celsius <= 35.0 {
        0.91
    } else if celsius <= 40.0 {
        0.82
    } else if celsius <= 45.0 {
        0.71
    } else if celsius <= 50.0 {
        0.58
    } else {
        0.41
    }
}

/// Aluminum ampacity is derated relative to copper (§4.2).
pub const ALUMINUM_DERATE: f64 = 0.84;

/// The bundling-factor convenience lookup (§4.2 SUPPLEMENT), keyed on the
/// number of current-carrying conductors bundled together. `calculateWireSize`
/// itself still takes a raw multiplier; this is an additional constructor
/// for callers that only know a conductor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundlingFactor;

impl BundlingFactor {
    #[must_use]
    pub fn for_conductor_count(count: u32) -> f64 {
        match count {
            0..=3 => 1.0,
            4..=6 => 0.8,
            7..=9 => 0.7,
            10..=20 => 0.5,
            21..=30 => 0.45,
            31..=40 => 0.4,
            _ => 0.35,
        }
    }
}

/// Effective ampacity after temperature, bundling, and material derating
/// (§4.2): `base_ampacity * temp_derating * bundling_factor`, with an
/// additional aluminum multiplier.
#[must_use]
pub fn effective_ampacity(
    gauge: Gauge,
    insulation: Insulation,
    temperature_c: f64,
    bundling_factor: f64,
    material: ConductorMaterial,
) -> f64 {
    let base = base_ampacity(gauge, insulation);
    let material_factor = match material {
        ConductorMaterial::Copper => 1.0,
        ConductorMaterial::Aluminum => ALUMINUM_DERATE,
    };
    base * temperature_derating(temperature_c) * bundling_factor * material_factor
}

/// Voltage drop across a round-trip (two-conductor) run (§4.2): `2 * I *
/// (R/1000) * L`.
#[must_use]
pub fn voltage_drop(current_a: f64, gauge: Gauge, length_ft: f64) -> f64 {
    2.0 * current_a * (resistance_ohms_per_kft(gauge) / 1000.0) * length_ft
}

/// Parameters for [`calculate_wire_size`], mirroring §6's
/// `calculateWireSize` signature with its documented defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingInput {
    pub current_a: f64,
    pub length_ft: f64,
    pub reference_voltage_v: f64,
    pub temperature_c: f64,
    pub material: ConductorMaterial,
    pub insulation: Insulation,
    pub bundling_factor: f64,
    pub max_drop_pct: f64,
}

impl SizingInput {
    #[must_use]
    pub fn new(current_a: f64, length_ft: f64, reference_voltage_v: f64) -> Self {
        Self {
            current_a,
            length_ft,
            reference_voltage_v,
            temperature_c: 30.0,
            material: ConductorMaterial::Copper,
            insulation: Insulation::C75,
            bundling_factor: 1.0,
            max_drop_pct: 3.0,
        }
    }
}

/// The §4.2 sizing search: ascending from the smallest gauge, return the
/// first that satisfies both the voltage-drop and ampacity bounds. Falls
/// back to 4/0 with an error status if none qualify.
///
/// Out-of-range input (negative/NaN current, non-positive voltage) is
/// normalized to zero per §7 rather than propagated as an error.
#[must_use]
pub fn calculate_wire_size(input: SizingInput) -> WireCalculation {
    let current_a = normalize_nonnegative(input.current_a);
    let length_ft = normalize_nonnegative(input.length_ft);
    let reference_voltage_v = normalize_nonnegative(input.reference_voltage_v);
    let max_drop_pct = normalize_nonnegative(input.max_drop_pct);

    let max_drop_v = reference_voltage_v * max_drop_pct / 100.0;

    for gauge in Gauge::ASCENDING {
        let amp = effective_ampacity(
            gauge,
            input.insulation,
            input.temperature_c,
            input.bundling_factor,
            input.material,
        );
        let drop_v = voltage_drop(current_a, gauge, length_ft);
        if drop_v <= max_drop_v && current_a <= amp {
            return finish(gauge, current_a, amp, drop_v, reference_voltage_v, max_drop_v);
        }
    }

    let gauge = Gauge::LARGEST;
    let amp = effective_ampacity(
        gauge,
        input.insulation,
        input.temperature_c,
        input.bundling_factor,
        input.material,
    );
    let drop_v = voltage_drop(current_a, gauge, length_ft);
    let mut calc = finish(gauge, current_a, amp, drop_v, reference_voltage_v, max_drop_v);
    if calc.status != SizingStatus::Valid {
        calc.status = SizingStatus::Error;
    } else if drop_v > max_drop_v || current_a > amp {
        calc.status = SizingStatus::Error;
    }
    calc
}

fn finish(
    gauge: Gauge,
    current_a: f64,
    amp: f64,
    drop_v: f64,
    reference_voltage_v: f64,
    max_drop_v: f64,
) -> WireCalculation {
    let drop_pct = if reference_voltage_v > 0.0 {
        100.0 * drop_v / reference_voltage_v
    } else {
        0.0
    };
    let ampacity_margin_ok = current_a <= amp;
    let drop_margin_ok = drop_v <= max_drop_v;
    let status = if !ampacity_margin_ok || !drop_margin_ok {
        SizingStatus::Error
    } else if current_a >= 0.9 * amp || (max_drop_v > 0.0 && drop_v >= 0.9 * max_drop_v) {
        SizingStatus::Warning
    } else {
        SizingStatus::Valid
    };
    WireCalculation {
        recommended_gauge: gauge,
        status,
        effective_ampacity_a: amp,
        voltage_drop_v: drop_v,
        voltage_drop_pct: drop_pct,
    }
}

fn normalize_nonnegative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
