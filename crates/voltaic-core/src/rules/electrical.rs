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

//! Electrical rules E1-E8 (§4.5).

use std::collections::{HashMap, HashSet};

use crate::rules::common::{other_end, reaches_kind, wires_on_terminal};
use crate::topology::Topology;
use voltaic_types::{Category, ComponentKind, Design, Issue, Polarity, Severity};

#[must_use]
pub fn check(design: &Design, topology: &Topology, currents: &HashMap<String, f64>) -> Vec<Issue> {
    let mut issues = Vec::new();
    e1_smartshunt_placement(design, &mut issues);
    e2_bus_bar_polarity_purity(design, &mut issues);
    e3_grounding_presence(design, &mut issues);
    e4_battery_connectivity(design, &mut issues);
    e5_mppt_pv_connection(design, &mut issues);
    e6_voltage_coherence(design, topology, &mut issues);
    e7_ac_dc_separation(design, &mut issues);
    e8_fuse_rating(design, currents, &mut issues);
    issues
}

fn e1_smartshunt_placement(design: &Design, issues: &mut Vec<Issue>) {
    for shunt in design.components_of_kind(ComponentKind::SmartShunt) {
        let battery_connects = design
            .components_of_kind(ComponentKind::Battery)
            .any(|battery| {
                wires_on_terminal(design, &battery.id, "negative")
                    .any(|w| other_end(w, &battery.id) == (shunt.id.as_str(), "negative"))
            });
        let has_battery = design.components_of_kind(ComponentKind::Battery).next().is_some();
        if has_battery && !battery_connects {
            issues.push(
                Issue::new(
                    Severity::Error,
                    Category::Electrical,
                    format!("battery negative does not connect to smartshunt \"{}\"'s negative terminal", shunt.id),
                )
                .with_component(shunt.id.clone())
                .with_suggestion("wire the battery's negative terminal directly to the smartshunt's negative terminal"),
            );
        }

        for component in &design.components {
            let Some(kind) = component.kind() else { continue };
            let negative_terminal = match kind {
                ComponentKind::DcLoad => "negative",
                _ if kind.is_inverter() => "dc-negative",
                _ => continue,
            };
            let bypasses = wires_on_terminal(design, &component.id, negative_terminal).any(|w| {
                let (other_id, _) = other_end(w, &component.id);
                design
                    .component_by_id(other_id)
                    .and_then(|c| c.kind())
                    .is_some_and(|k| k == ComponentKind::Battery)
            });
            if bypasses {
                issues.push(
                    Issue::new(
                        Severity::Warning,
                        Category::Electrical,
                        format!("\"{}\" connects directly to the battery, bypassing smartshunt \"{}\"", component.id, shunt.id),
                    )
                    .with_components([component.id.clone(), shunt.id.clone()])
                    .with_suggestion("route the negative connection through the smartshunt's system-minus terminal instead"),
                );
            }
        }
    }
}

fn e2_bus_bar_polarity_purity(design: &Design, issues: &mut Vec<Issue>) {
    for bus in design
        .components_of_kind(ComponentKind::BusbarPositive)
        .chain(design.components_of_kind(ComponentKind::BusbarNegative))
    {
        let polarities: HashSet<Polarity> = design
            .wires_incident_to(&bus.id)
            .map(|w| w.polarity)
            .collect();
        if polarities.len() > 1 {
            issues.push(
                Issue::new(
                    Severity::Error,
                    Category::Electrical,
                    format!("bus bar \"{}\" has incident wires of mixed polarity", bus.id),
                )
                .with_component(bus.id.clone()),
            );
        }
    }
}

fn e3_grounding_presence(design: &Design, issues: &mut Vec<Issue>) {
    for cerbo in design.components_of_kind(ComponentKind::Cerbo) {
        let has_data_wire = wires_on_terminal(design, &cerbo.id, "data").next().is_some();
        if !has_data_wire {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    Category::Electrical,
                    format!("cerbo \"{}\" is present but has no data-link wire", cerbo.id),
                )
                .with_component(cerbo.id.clone()),
            );
        }
    }
}

fn e4_battery_connectivity(design: &Design, issues: &mut Vec<Issue>) {
    for battery in design.components_of_kind(ComponentKind::Battery) {
        let has_positive = wires_on_terminal(design, &battery.id, "positive").next().is_some();
        let has_negative = wires_on_terminal(design, &battery.id, "negative").next().is_some();
        if !has_positive || !has_negative {
            issues.push(
                Issue::new(
                    Severity::Error,
                    Category::Electrical,
                    format!("battery \"{}\" is missing its positive or negative connection", battery.id),
                )
                .with_component(battery.id.clone()),
            );
        }
    }
}

fn e5_mppt_pv_connection(design: &Design, issues: &mut Vec<Issue>) {
    for mppt in design.components_of_kind(ComponentKind::Mppt) {
        let positive_reaches_panel = wires_on_terminal(design, &mppt.id, "pv-positive")
            .any(|w| reaches_kind(design, other_end(w, &mppt.id).0, &w.id, ComponentKind::SolarPanel));
        let negative_reaches_panel = wires_on_terminal(design, &mppt.id, "pv-negative")
            .any(|w| reaches_kind(design, other_end(w, &mppt.id).0, &w.id, ComponentKind::SolarPanel));
        if !positive_reaches_panel || !negative_reaches_panel {
            issues.push(
                Issue::new(
                    Severity::Error,
                    Category::Electrical,
                    format!("mppt \"{}\" does not have both PV terminals connected to a solar panel", mppt.id),
                )
                .with_component(mppt.id.clone()),
            );
        }
    }
}

/// Component kinds excluded from the declared-voltage-equals-systemVoltage
/// check (§4.5 E6).
fn excluded_from_voltage_coherence(kind: ComponentKind) -> bool {
    matches!(
        kind,
        ComponentKind::Battery | ComponentKind::AcLoad | ComponentKind::AcPanel | ComponentKind::SolarPanel
    )
}

fn e6_voltage_coherence(design: &Design, topology: &Topology, issues: &mut Vec<Issue>) {
    let system_voltage_v = design.system_voltage.as_volts();
    for component in &design.components {
        let Some(kind) = component.kind() else { continue };
        if excluded_from_voltage_coherence(kind) {
            continue;
        }
        if let Some(declared) = component.properties.voltage {
            if (declared - system_voltage_v).abs() > f64::EPSILON {
                issues.push(
                    Issue::new(
                        Severity::Error,
                        Category::Electrical,
                        format!(
                            "\"{}\" declares voltage {declared} V, which does not match the system voltage {system_voltage_v} V",
                            component.id
                        ),
                    )
                    .with_component(component.id.clone()),
                );
            }
        }
    }

    for wire in &design.wires {
        if topology.is_ac_wire(&wire.id) {
            continue;
        }
        let from_v = design.component_by_id(&wire.from_component_id).and_then(|c| c.properties.voltage);
        let to_v = design.component_by_id(&wire.to_component_id).and_then(|c| c.properties.voltage);
        if let (Some(a), Some(b)) = (from_v, to_v) {
            if (a - b).abs() > f64::EPSILON {
                issues.push(
                    Issue::new(
                        Severity::Error,
                        Category::Electrical,
                        format!("wire \"{}\" connects components with disagreeing declared voltages", wire.id),
                    )
                    .with_wire(wire.id.clone()),
                );
            }
        }
    }
}

fn e7_ac_dc_separation(design: &Design, issues: &mut Vec<Issue>) {
    let has_ac = design.components.iter().any(|c| {
        matches!(c.kind(), Some(ComponentKind::AcLoad | ComponentKind::AcPanel | ComponentKind::ShorePower))
    });
    let dc_buses_without_naming: Vec<String> = design
        .components_of_kind(ComponentKind::BusbarPositive)
        .chain(design.components_of_kind(ComponentKind::BusbarNegative))
        .filter(|bus| !bus.name.to_ascii_lowercase().contains("dc"))
        .map(|bus| bus.id.clone())
        .collect();
    if has_ac && !dc_buses_without_naming.is_empty() {
        issues.push(
            Issue::new(
                Severity::Info,
                Category::Electrical,
                "design mixes AC and DC components; bus bars are not named to distinguish them",
            )
            .with_components(dc_buses_without_naming)
            .with_suggestion("name DC bus bars to include \"DC\" to keep AC/DC wiring visually distinct"),
        );
    }
}

fn e8_fuse_rating(design: &Design, currents: &HashMap<String, f64>, issues: &mut Vec<Issue>) {
    for fuse in design.components_of_kind(ComponentKind::Fuse) {
        let Some(rating) = fuse.properties.fuse_rating else { continue };
        let current: f64 = wires_on_terminal(design, &fuse.id, "out")
            .map(|w| currents.get(&w.id).copied().unwrap_or(0.0))
            .sum();
        if current > rating {
            issues.push(
                Issue::new(
                    Severity::Error,
                    Category::Electrical,
                    format!("fuse \"{}\" rated {rating} A carries {current:.1} A downstream", fuse.id),
                )
                .with_component(fuse.id.clone())
                .with_suggestion(format!("use at least a {} A fuse", next_standard_rating(current))),
            );
        } else if current > 0.8 * rating {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    Category::Electrical,
                    format!("fuse \"{}\" rated {rating} A is loaded to {current:.1} A, over 80% of its rating", fuse.id),
                )
                .with_component(fuse.id.clone())
                .with_suggestion(format!("consider a {} A fuse for headroom", next_standard_rating(current))),
            );
        }
    }
}

/// The next standard fuse rating at or above `current_a`, rounded up to a
/// multiple of 50 A (§4.5 E8).
fn next_standard_rating(current_a: f64) -> u32 {
    let mut rating = ((current_a / 50.0).ceil() as u32).max(1) * 50;
    if (f64::from(rating)) <= current_a {
        rating += 50;
    }
    rating
}
