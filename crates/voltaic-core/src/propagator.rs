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

//! Current Propagator (§4.4): assigns a current to every wire by
//! classifying it against the twelve ordered rules and, where the rule
//! requires it, tracing into the surrounding network. Every trace is
//! visited-set bounded.

use std::collections::HashSet;

use crate::topology::Topology;
use voltaic_types::{Component, ComponentKind, Design, Polarity, Role, Wire};

/// The network role a traced endpoint ultimately resolves to: does it pull
/// current (a load) or push it (a source)? Used by the bus-bar net and
/// battery rules (§4.4 rules 7, 8, 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TracedRole {
    Source,
    Sink,
}

/// Assign the raw (pre-parallel-division) current to every wire, applying
/// the fixed, ordered rule list (§4.4). Dividing by the wire's parallel
/// count is the caller's job ([`crate::validate`]), since the same total is
/// computed identically for every conductor in a parallel run.
#[must_use]
pub fn classify_wire_current(design: &Design, topology: &Topology, wire: &Wire) -> f64 {
    classify(design, topology, wire).unwrap_or(0.0)
}

/// True if no rule 1-11 matched and the wire fell through to the rule 12
/// fallback (§4.4): the rule engine turns this into a warning.
#[must_use]
pub fn is_unclassified(design: &Design, topology: &Topology, wire: &Wire) -> bool {
    classify(design, topology, wire).is_none() && wire.polarity != Polarity::Ground
}

fn classify(design: &Design, topology: &Topology, wire: &Wire) -> Option<f64> {
    rule1_inverter_ac_output(design, wire, topology)
        .or_else(|| rule2_ac_load_terminated(design, wire))
        .or_else(|| rule3_ac_panel_hot_feed(design, wire))
        .or_else(|| rule4_solar_panel_output(design, wire))
        .or_else(|| rule5_charger_output(design, wire))
        .or_else(|| rule6_inverter_dc_input(design, wire, topology))
        .or_else(|| rule7_source_into_bus(design, wire, topology))
        .or_else(|| rule8_bus_to_load(design, wire, topology))
        .or_else(|| rule9_battery_wire(design, wire, topology))
        .or_else(|| rule10_dc_load_terminated(design, wire))
        .or_else(|| (wire.polarity == Polarity::Ground).then_some(0.0))
}

fn endpoint_component<'d>(design: &'d Design, id: &str) -> Option<&'d Component> {
    design.component_by_id(id)
}

fn other_end<'w>(wire: &'w Wire, from_id: &str) -> (&'w str, &'w str) {
    if wire.from_component_id == from_id {
        (wire.to_component_id.as_str(), wire.to_terminal.as_str())
    } else {
        (wire.from_component_id.as_str(), wire.from_terminal.as_str())
    }
}

/// Does `wire` touch a component matching `predicate(kind, terminal_id)`?
/// Returns the matching component's id if so.
fn endpoint_matching<'d>(
    design: &'d Design,
    wire: &Wire,
    predicate: impl Fn(ComponentKind, &str) -> bool,
) -> Option<&'d str> {
    for (component_id, terminal_id) in [
        (wire.from_component_id.as_str(), wire.from_terminal.as_str()),
        (wire.to_component_id.as_str(), wire.to_terminal.as_str()),
    ] {
        if let Some(kind) = endpoint_component(design, component_id).and_then(Component::kind) {
            if predicate(kind, terminal_id) {
                return Some(component_id);
            }
        }
    }
    None
}

// --- Rule 1: AC-output wire of an inverter (hot or neutral) ---------------

fn rule1_inverter_ac_output(design: &Design, wire: &Wire, topology: &Topology) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Hot | Polarity::Neutral) {
        return None;
    }
    let inverter_id = endpoint_matching(design, wire, |kind, terminal| {
        kind.is_inverter() && (terminal == "ac-out-hot" || terminal == "ac-out-neutral")
    })?;
    let demand = topology.inverter_demand(inverter_id)?;
    if demand.ac_voltage <= 0.0 {
        return Some(0.0);
    }
    Some(demand.ac_load_watts / demand.ac_voltage)
}

// --- Rule 2: AC wire terminating at an AC load ----------------------------

fn rule2_ac_load_terminated(design: &Design, wire: &Wire) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Hot | Polarity::Neutral) {
        return None;
    }
    // Rule 1 already consumed the inverter-ac-out case; skip it here so
    // ordering stays exclusive.
    if endpoint_matching(design, wire, |kind, terminal| {
        kind.is_inverter() && (terminal == "ac-out-hot" || terminal == "ac-out-neutral")
    })
    .is_some()
    {
        return None;
    }
    let load_id = endpoint_matching(design, wire, |kind, _| kind == ComponentKind::AcLoad)?;
    let load = endpoint_component(design, load_id)?;
    let voltage = load.properties.ac_voltage_or_default();
    if voltage <= 0.0 {
        return Some(0.0);
    }
    Some(load.properties.effective_watts() / voltage)
}

// --- Rule 3: AC wire entering an AC panel on hot polarity -----------------

fn rule3_ac_panel_hot_feed(design: &Design, wire: &Wire) -> Option<f64> {
    if wire.polarity != Polarity::Hot {
        return None;
    }
    if endpoint_matching(design, wire, |kind, _| kind.is_inverter()).is_some() {
        return None; // rule 1 already owns this wire
    }
    let panel_id = endpoint_matching(design, wire, |kind, _| kind == ComponentKind::AcPanel)?;
    let (watts, voltage) = ac_loads_reachable_from_panel(design, panel_id, &wire.id);
    if voltage <= 0.0 {
        return Some(0.0);
    }
    Some(watts / voltage)
}

/// Sum the watts (and first-seen AC voltage) of AC loads reachable from
/// `panel_id` over hot-polarity wires, not walking back over `entry_wire_id`
/// (§4.3/§4.4 rule 3).
fn ac_loads_reachable_from_panel(design: &Design, panel_id: &str, entry_wire_id: &str) -> (f64, f64) {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(panel_id);
    let mut stack: Vec<&str> = vec![panel_id];
    let mut watts = 0.0;
    let mut voltage: Option<f64> = None;
    let max_steps = design.components.len() + 1;
    let mut steps = 0usize;

    while let Some(current_id) = stack.pop() {
        steps += 1;
        if steps > max_steps {
            break;
        }
        for wire in design.wires_incident_to(current_id) {
            if wire.id == entry_wire_id || wire.polarity != Polarity::Hot {
                continue;
            }
            let (other_id, _) = other_end(wire, current_id);
            if visited.contains(other_id) {
                continue;
            }
            let Some(other) = endpoint_component(design, other_id) else { continue };
            visited.insert(other_id);
            match other.kind() {
                Some(ComponentKind::AcLoad) => {
                    watts += other.properties.effective_watts();
                    if voltage.is_none() {
                        voltage = Some(other.properties.ac_voltage_or_default());
                    }
                }
                Some(ComponentKind::AcPanel) => stack.push(other_id),
                _ => {}
            }
        }
    }

    (watts, voltage.unwrap_or(120.0))
}

// --- Rule 4: DC wire from a solar panel ------------------------------------

fn rule4_solar_panel_output(design: &Design, wire: &Wire) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Positive | Polarity::Negative) {
        return None;
    }
    let panel_id = endpoint_matching(design, wire, |kind, _| kind == ComponentKind::SolarPanel)?;
    let panel = endpoint_component(design, panel_id)?;
    let vmp = solar_vmp(panel, design.system_voltage.as_volts());
    if vmp <= 0.0 {
        return Some(0.0);
    }
    Some(panel.properties.effective_watts() / vmp)
}

/// Vmp (§4.4 rule 4, GLOSSARY): the panel's declared voltage if it exceeds
/// 1.2x systemVoltage, else 1.5x systemVoltage.
#[must_use]
pub fn solar_vmp(panel: &Component, system_voltage_v: f64) -> f64 {
    match panel.properties.voltage {
        Some(v) if v > 1.2 * system_voltage_v => v,
        _ => 1.5 * system_voltage_v,
    }
}

// --- Rule 5: DC output wire of a charger -----------------------------------

fn rule5_charger_output(design: &Design, wire: &Wire) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Positive | Polarity::Negative) {
        return None;
    }
    let charger_id = endpoint_matching(design, wire, |kind, terminal| {
        kind.is_charger() && (terminal == "dc-positive" || terminal == "dc-negative")
    })?;
    let charger = endpoint_component(design, charger_id)?;
    Some(source_output_current(design, charger))
}

// --- Rule 6: inverter DC input wire ----------------------------------------

fn rule6_inverter_dc_input(design: &Design, wire: &Wire, topology: &Topology) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Positive | Polarity::Negative) {
        return None;
    }
    let inverter_id = endpoint_matching(design, wire, |kind, terminal| {
        kind.is_inverter() && (terminal == "dc-positive" || terminal == "dc-negative")
    })?;
    topology.inverter_demand(inverter_id).map(|d| d.dc_input_current)
}

// --- Rules 7-9: bus-bar netting and battery wires --------------------------

fn source_output_current(design: &Design, component: &Component) -> f64 {
    match component.kind() {
        Some(ComponentKind::SolarPanel) => {
            let vmp = solar_vmp(component, design.system_voltage.as_volts());
            if vmp <= 0.0 { 0.0 } else { component.properties.effective_watts() / vmp }
        }
        Some(ComponentKind::Mppt) => component.properties.max_current.unwrap_or(0.0),
        Some(ComponentKind::BlueSmartCharger | ComponentKind::OrionDcDc) => component.properties.effective_current(),
        _ => 0.0,
    }
}

/// Trace beyond `component_id` (having arrived via `entry_wire_id`, which is
/// excluded from further traversal), through DC transit components (fuse,
/// switch, battery-protect, smartshunt), to the nearest component with
/// source/sink role. `visited` bounds the trace to the component count.
fn trace_beyond<'d>(
    design: &'d Design,
    topology: &Topology,
    component_id: &'d str,
    entry_wire_id: &str,
    visited: &mut HashSet<&'d str>,
) -> Option<(TracedRole, f64)> {
    if visited.contains(component_id) {
        return None;
    }
    visited.insert(component_id);
    let component = endpoint_component(design, component_id)?;
    let kind = component.kind()?;

    match kind.role() {
        Role::Source => Some((TracedRole::Source, source_output_current(design, component))),
        Role::Sink => {
            let voltage = design.system_voltage.as_volts();
            let current = if voltage > 0.0 { component.properties.effective_watts() / voltage } else { 0.0 };
            Some((TracedRole::Sink, current))
        }
        Role::Boundary => {
            let demand = topology.inverter_demand(component_id)?;
            Some((TracedRole::Sink, demand.dc_input_current))
        }
        Role::Panel => {
            let mut total = 0.0;
            let mut any = false;
            for wire in design.wires_incident_to(component_id) {
                if wire.id == entry_wire_id {
                    continue;
                }
                let (other_id, _) = other_end(wire, component_id);
                if let Some((TracedRole::Sink, current)) =
                    trace_beyond(design, topology, other_id, &wire.id, visited)
                {
                    total += current;
                    any = true;
                }
            }
            any.then_some((TracedRole::Sink, total))
        }
        Role::Transit | Role::Bus => {
            for wire in design.wires_incident_to(component_id) {
                if wire.id == entry_wire_id {
                    continue;
                }
                let (other_id, _) = other_end(wire, component_id);
                if let Some(result) = trace_beyond(design, topology, other_id, &wire.id, visited) {
                    return Some(result);
                }
            }
            None
        }
    }
}

/// Net current at a bus bar (§4.4 rule 7): sum of all downstream loads
/// reachable from the bar's wires, minus sum of all sources, clamped at 0.
#[must_use]
pub fn bus_bar_net_current(design: &Design, topology: &Topology, bus_id: &str) -> f64 {
    let mut total_loads = 0.0;
    let mut total_sources = 0.0;
    for wire in design.wires_incident_to(bus_id) {
        let (other_id, _) = other_end(wire, bus_id);
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(bus_id);
        if let Some((role, current)) = trace_beyond(design, topology, other_id, &wire.id, &mut visited) {
            match role {
                TracedRole::Source => total_sources += current,
                TracedRole::Sink => total_loads += current,
            }
        }
    }
    (total_loads - total_sources).max(0.0)
}

fn is_bus(design: &Design, component_id: &str) -> bool {
    matches!(
        design.component_by_id(component_id).and_then(Component::kind),
        Some(ComponentKind::BusbarPositive | ComponentKind::BusbarNegative)
    )
}

fn rule7_source_into_bus(design: &Design, wire: &Wire, topology: &Topology) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Positive | Polarity::Negative) {
        return None;
    }
    let bus_id = if is_bus(design, &wire.from_component_id) {
        wire.from_component_id.as_str()
    } else if is_bus(design, &wire.to_component_id) {
        wire.to_component_id.as_str()
    } else {
        return None;
    };
    let (other_id, _) = other_end(wire, bus_id);
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(bus_id);
    match trace_beyond(design, topology, other_id, &wire.id, &mut visited) {
        Some((TracedRole::Source, _)) => Some(bus_bar_net_current(design, topology, bus_id)),
        _ => None,
    }
}

fn rule8_bus_to_load(design: &Design, wire: &Wire, topology: &Topology) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Positive | Polarity::Negative) {
        return None;
    }
    let bus_id = if is_bus(design, &wire.from_component_id) {
        wire.from_component_id.as_str()
    } else if is_bus(design, &wire.to_component_id) {
        wire.to_component_id.as_str()
    } else {
        return None;
    };
    let (other_id, _) = other_end(wire, bus_id);
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(bus_id);
    match trace_beyond(design, topology, other_id, &wire.id, &mut visited)? {
        (TracedRole::Sink, current) => Some(current),
        (TracedRole::Source, _) => None,
    }
}

fn rule9_battery_wire(design: &Design, wire: &Wire, topology: &Topology) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Positive | Polarity::Negative) {
        return None;
    }
    let battery_id = endpoint_matching(design, wire, |kind, _| kind == ComponentKind::Battery)?;
    let (other_id, _) = other_end(wire, battery_id);
    let other = endpoint_component(design, other_id)?;
    if other.kind().is_some_and(ComponentKind::is_charger) {
        return Some(0.0);
    }

    let mut bus_visited: HashSet<&str> = HashSet::new();
    bus_visited.insert(battery_id);
    if let Some(bus_id) = find_bus_through_transit(design, other_id, &wire.id, &mut bus_visited) {
        return Some(bus_bar_net_current(design, topology, bus_id));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(battery_id);
    match trace_beyond(design, topology, other_id, &wire.id, &mut visited) {
        Some((TracedRole::Sink, current)) => Some(current),
        _ => Some(0.0),
    }
}

/// Walk through DC transit components (fuse, switch, battery-protect,
/// smartshunt) looking for the bus bar this path terminates at (§4.4 rule
/// 9: "trace through fuses/shunts to the associated bus bar").
fn find_bus_through_transit<'d>(
    design: &'d Design,
    component_id: &'d str,
    entry_wire_id: &str,
    visited: &mut HashSet<&'d str>,
) -> Option<&'d str> {
    if visited.contains(component_id) {
        return None;
    }
    visited.insert(component_id);
    let component = endpoint_component(design, component_id)?;
    let kind = component.kind()?;
    if matches!(kind, ComponentKind::BusbarPositive | ComponentKind::BusbarNegative) {
        return Some(component_id);
    }
    if kind.role() != Role::Transit {
        return None;
    }
    for wire in design.wires_incident_to(component_id) {
        if wire.id == entry_wire_id {
            continue;
        }
        let (other_id, _) = other_end(wire, component_id);
        if let Some(found) = find_bus_through_transit(design, other_id, &wire.id, visited) {
            return Some(found);
        }
    }
    None
}

// --- Rule 10: DC-load-terminated wire --------------------------------------

fn rule10_dc_load_terminated(design: &Design, wire: &Wire) -> Option<f64> {
    if !matches!(wire.polarity, Polarity::Positive | Polarity::Negative) {
        return None;
    }
    let load_id = endpoint_matching(design, wire, |kind, _| kind == ComponentKind::DcLoad)?;
    let load = endpoint_component(design, load_id)?;
    let voltage = design.system_voltage.as_volts();
    if voltage <= 0.0 {
        return Some(0.0);
    }
    Some(load.properties.effective_watts() / voltage)
}
