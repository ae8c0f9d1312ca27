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

//! The Voltaic electrical analysis engine (§1): gauge tables, derating,
//! topology resolution, current propagation, and the rule engine, built on
//! top of the [`voltaic_types`] data model.
//!
//! [`validate`] is the single entry point most callers need (§1, §6). The
//! standalone helpers ([`calculate_wire_size`], [`calculate_inverter_dc_input`],
//! [`calculate_load_requirements`]) exist for callers that want one
//! computation in isolation, outside a full design (§6).

pub mod derating;
pub mod gauge;
pub mod propagator;
pub mod rules;
pub mod topology;

use std::collections::HashMap;

use topology::Topology;
use voltaic_types::{ComponentKind, Design, Issue, LoadRequirements, Severity, ValidationResult};

pub use derating::{calculate_wire_size, SizingInput};
pub use topology::calculate_inverter_dc_input;

/// `validate` (§1, §6): run the full pipeline against a design and return
/// the sorted issues, per-wire sizing results, and quality score, at the
/// §4.2 default ambient temperature (30°C) and bundling factor (1.0).
#[must_use]
pub fn validate(design: &Design) -> ValidationResult {
    validate_with_conditions(design, 30.0, 1.0)
}

/// `validate`, with the ambient temperature and bundling factor the wire
/// sizing rules (W1-W3) derate against exposed to the caller (§6
/// `voltaic validate --temperature`/`--bundling`). `validate` itself is the
/// exact zero-argument entry point §6 documents; this is its parameterized
/// sibling for callers — namely `voltaic-cli` — that need to probe a design
/// under conditions other than the default.
#[must_use]
pub fn validate_with_conditions(design: &Design, temperature_c: f64, bundling_factor: f64) -> ValidationResult {
    let topology = Topology::build(design);

    let currents: HashMap<String, f64> = design
        .wires
        .iter()
        .map(|wire| (wire.id.clone(), propagator::classify_wire_current(design, &topology, wire)))
        .collect();

    let (mut issues, wire_results) =
        rules::wire_sizing::evaluate(design, &topology, &currents, temperature_c, bundling_factor);
    issues.extend(rules::electrical::check(design, &topology, &currents));
    issues.extend(rules::terminal::check(design));
    let layout = rules::layout::check(design);
    issues.extend(layout.issues);
    issues.extend(rules::ai_quality::check(design));
    issues.extend(rules::power_capacity::check(design));

    for wire in &design.wires {
        if propagator::is_unclassified(design, &topology, wire) {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    voltaic_types::Category::WireSizing,
                    format!("wire \"{}\" current could not be determined from the network", wire.id),
                )
                .with_wire(wire.id.clone()),
            );
        }
    }

    ValidationResult::new(
        issues,
        layout.overlap_count,
        layout.near_edge_count,
        layout.average_component_spacing_px,
        wire_results,
    )
}

/// `calculateLoadRequirements` (§6): aggregate power-budget figures across a
/// component set, independent of wiring topology.
#[must_use]
pub fn calculate_load_requirements(design: &Design) -> LoadRequirements {
    let dc_loads_w: f64 = design
        .components_of_kind(ComponentKind::DcLoad)
        .map(|c| c.properties.effective_watts())
        .sum();
    let ac_loads_w: f64 = design
        .components_of_kind(ComponentKind::AcLoad)
        .map(|c| c.properties.effective_watts())
        .sum();
    let total_power_w = dc_loads_w + ac_loads_w;

    let daily_hours: f64 = design
        .components
        .iter()
        .filter(|c| matches!(c.kind(), Some(ComponentKind::DcLoad | ComponentKind::AcLoad)))
        .filter_map(|c| c.properties.daily_hours)
        .sum::<f64>()
        .max(1.0);
    let peak_power_w = total_power_w;
    let average_power_w = total_power_w / daily_hours;

    let system_voltage_v = design.system_voltage.as_volts();
    let battery_capacity_required_ah = if system_voltage_v > 0.0 {
        (total_power_w * daily_hours) / system_voltage_v
    } else {
        0.0
    };

    let inverter_size_required_w = ac_loads_w * 1.25;

    let charging_power_required_w: f64 = design
        .components_of_kind(ComponentKind::Battery)
        .map(|battery| {
            let charge_rate_c = battery.properties.battery_type_or_default().charge_rate_c();
            charge_rate_c * battery.properties.capacity_or_zero() * system_voltage_v
        })
        .sum();

    LoadRequirements {
        dc_loads_w,
        ac_loads_w,
        total_power_w,
        peak_power_w,
        average_power_w,
        battery_capacity_required_ah,
        inverter_size_required_w,
        charging_power_required_w,
    }
}
