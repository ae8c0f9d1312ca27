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

//! Wire sizing rules W1-W3 (§4.5), and the per-wire [`WireResult`]s the
//! same computation produces (§1, §4.2).

use std::collections::HashMap;

use crate::derating::{calculate_wire_size, effective_ampacity, voltage_drop, SizingInput};
use crate::gauge::Insulation;
use crate::propagator::solar_vmp;
use crate::topology::Topology;
use voltaic_types::{Category, ComponentKind, Design, Issue, Severity, SizingStatus, Wire, WireResult};

#[must_use]
pub fn evaluate(
    design: &Design,
    topology: &Topology,
    currents: &HashMap<String, f64>,
    temperature_c: f64,
    bundling_factor: f64,
) -> (Vec<Issue>, HashMap<String, WireResult>) {
    let mut issues = Vec::new();
    let mut wire_results = HashMap::new();

    for wire in &design.wires {
        let parallel_count = 1 + design
            .wires
            .iter()
            .filter(|other| wire.is_parallel_to(other))
            .count() as u32;
        let raw_current = currents.get(&wire.id).copied().unwrap_or(0.0);
        let current_a = raw_current / f64::from(parallel_count.max(1));
        let reference_voltage_v = reference_voltage_for_wire(design, topology, wire);
        let length_ft = wire.length_ft.unwrap_or(0.0);

        let mut sizing_input = SizingInput::new(current_a, length_ft, reference_voltage_v);
        sizing_input.temperature_c = temperature_c;
        sizing_input.bundling_factor = bundling_factor;
        sizing_input.material = wire.conductor_material;
        let calc = calculate_wire_size(sizing_input);

        let actual_gauge = wire.gauge_parsed();
        if wire.gauge.is_none() {
            issues.push(
                Issue::new(Severity::Error, Category::WireSizing, format!("wire \"{}\" has no gauge specified", wire.id))
                    .with_wire(wire.id.clone())
                    .with_suggestion(format!("use {}", calc.recommended_gauge)),
            );
        } else if actual_gauge.is_none() {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    Category::WireSizing,
                    format!("wire \"{}\" has an unrecognized gauge \"{}\"", wire.id, wire.gauge.as_deref().unwrap_or("")),
                )
                .with_wire(wire.id.clone()),
            );
        }

        let (status, voltage_drop_v, voltage_drop_pct) = match actual_gauge {
            None => (SizingStatus::Error, calc.voltage_drop_v, calc.voltage_drop_pct),
            Some(gauge) => {
                let amp = effective_ampacity(gauge, Insulation::C75, temperature_c, bundling_factor, wire.conductor_material);
                let drop_v = voltage_drop(current_a, gauge, length_ft);
                let drop_pct = if reference_voltage_v > 0.0 { 100.0 * drop_v / reference_voltage_v } else { 0.0 };

                if current_a > amp {
                    issues.push(
                        Issue::new(
                            Severity::Error,
                            Category::WireSizing,
                            format!("wire \"{}\" carries {current_a:.1} A, exceeding its {amp:.1} A ampacity", wire.id),
                        )
                        .with_wire(wire.id.clone())
                        .with_suggestion(format!("use {} instead", calc.recommended_gauge)),
                    );
                } else if current_a > 0.8 * amp {
                    issues.push(
                        Issue::new(
                            Severity::Warning,
                            Category::WireSizing,
                            format!("wire \"{}\" carries {current_a:.1} A, over 80% of its {amp:.1} A ampacity", wire.id),
                        )
                        .with_wire(wire.id.clone()),
                    );
                }

                if drop_pct > 3.0 {
                    issues.push(
                        Issue::new(
                            Severity::Error,
                            Category::WireSizing,
                            format!("wire \"{}\" has a {drop_pct:.1}% voltage drop", wire.id),
                        )
                        .with_wire(wire.id.clone())
                        .with_suggestion(format!("use {} or shorten the run", calc.recommended_gauge)),
                    );
                } else if drop_pct > 2.5 {
                    issues.push(
                        Issue::new(
                            Severity::Warning,
                            Category::WireSizing,
                            format!("wire \"{}\" has a {drop_pct:.1}% voltage drop", wire.id),
                        )
                        .with_wire(wire.id.clone()),
                    );
                }

                let status = if current_a > amp || drop_pct > 3.0 {
                    SizingStatus::Error
                } else if current_a > 0.8 * amp || drop_pct > 2.5 {
                    SizingStatus::Warning
                } else {
                    SizingStatus::Valid
                };
                (status, drop_v, drop_pct)
            }
        };

        wire_results.insert(
            wire.id.clone(),
            WireResult {
                wire_id: wire.id.clone(),
                current_a,
                reference_voltage_v,
                voltage_drop_v,
                voltage_drop_pct,
                recommended_gauge: calc.recommended_gauge,
                sizing_status: status,
                parallel_count,
            },
        );
    }

    ground_wire_gauge_parity(design, &mut issues);

    (issues, wire_results)
}

/// A ground wire must match the gauge of the hot/neutral conductor in the
/// same circuit (§4.5 W3): the same pair of components, any positive/
/// negative/hot/neutral polarity wire.
fn ground_wire_gauge_parity(design: &Design, issues: &mut Vec<Issue>) {
    for ground in design.wires.iter().filter(|w| w.polarity == voltaic_types::Polarity::Ground) {
        let Some(ground_gauge) = ground.gauge_parsed() else { continue };
        let partner = design.wires.iter().find(|w| {
            w.id != ground.id
                && w.polarity != voltaic_types::Polarity::Ground
                && same_circuit(ground, w)
        });
        if let Some(partner) = partner {
            if let Some(partner_gauge) = partner.gauge_parsed() {
                if partner_gauge != ground_gauge {
                    issues.push(
                        Issue::new(
                            Severity::Error,
                            Category::WireSizing,
                            format!(
                                "ground wire \"{}\" ({ground_gauge}) does not match its circuit conductor \"{}\" ({partner_gauge})",
                                ground.id, partner.id
                            ),
                        )
                        .with_wires([ground.id.clone(), partner.id.clone()]),
                    );
                }
            }
        }
    }
}

fn same_circuit(a: &Wire, b: &Wire) -> bool {
    let a_pair = (a.from_component_id.as_str(), a.to_component_id.as_str());
    let b_pair = (b.from_component_id.as_str(), b.to_component_id.as_str());
    a_pair == b_pair || a_pair == (b_pair.1, b_pair.0)
}

/// `V_ref` (§4.5 W3): AC voltage for an AC wire, Vmp for a solar wire,
/// otherwise systemVoltage or an explicit component voltage.
fn reference_voltage_for_wire(design: &Design, topology: &Topology, wire: &Wire) -> f64 {
    let endpoints = [
        (wire.from_component_id.as_str()),
        (wire.to_component_id.as_str()),
    ];

    if topology.is_ac_wire(&wire.id) {
        for id in endpoints {
            let Some(component) = design.component_by_id(id) else { continue };
            match component.kind() {
                Some(ComponentKind::AcLoad) => return component.properties.ac_voltage_or_default(),
                Some(kind) if kind.is_inverter() => {
                    if let Some(demand) = topology.inverter_demand(id) {
                        return demand.ac_voltage;
                    }
                }
                _ => {}
            }
        }
        return 120.0;
    }

    for id in endpoints {
        if let Some(component) = design.component_by_id(id) {
            if component.kind() == Some(ComponentKind::SolarPanel) {
                return solar_vmp(component, design.system_voltage.as_volts());
            }
        }
    }

    for id in endpoints {
        if let Some(component) = design.component_by_id(id) {
            if component.kind() != Some(ComponentKind::Battery) {
                if let Some(v) = component.properties.voltage {
                    return v;
                }
            }
        }
    }

    design.system_voltage.as_volts()
}
