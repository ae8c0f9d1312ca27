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

//! Topology Resolver (§4.3): adjacency is read straight off [`Design`]
//! (`component_by_id`, `wires_incident_to`), so this module's job is the
//! two things that aren't a plain index lookup — classifying each wire as
//! DC or AC, and tracing each inverter's AC-side demand back to a DC input
//! current. Both traces are visited-set bounded (§9: a compact set rather
//! than holding component references around a cycle).

use std::collections::{HashMap, HashSet};

use voltaic_types::{Component, ComponentKind, Design, InverterDemand, Polarity, Wire};

/// Default inverter efficiency (§4.3): AC output power / DC input power.
pub const DEFAULT_EFFICIENCY: f64 = 0.875;

/// Precomputed, pass-local indices over a [`Design`] (§2, §4.3). Built once
/// per analysis pass; never mutated afterward.
#[derive(Debug)]
pub struct Topology {
    wire_is_ac: HashMap<String, bool>,
    inverter_demand: HashMap<String, InverterDemand>,
}

impl Topology {
    #[must_use]
    pub fn build(design: &Design) -> Self {
        let wire_is_ac = design
            .wires
            .iter()
            .map(|w| (w.id.clone(), is_ac_wire(design, w)))
            .collect();

        let system_voltage_v = design.system_voltage.as_volts();
        let inverter_demand = design
            .components
            .iter()
            .filter(|c| c.kind().is_some_and(ComponentKind::is_inverter))
            .map(|inverter| {
                (
                    inverter.id.clone(),
                    compute_inverter_demand(design, inverter, DEFAULT_EFFICIENCY, system_voltage_v),
                )
            })
            .collect();

        Self { wire_is_ac, inverter_demand }
    }

    #[must_use]
    pub fn is_ac_wire(&self, wire_id: &str) -> bool {
        self.wire_is_ac.get(wire_id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn inverter_demand(&self, inverter_id: &str) -> Option<InverterDemand> {
        self.inverter_demand.get(inverter_id).copied()
    }
}

/// Is `component_id`/`terminal_id` on the AC side of the network (§4.3)?
/// True for AC loads, AC panels, shore power, transfer switches (all of
/// whose terminals are AC), and an inverter's own `ac-*` terminals.
fn is_ac_endpoint(design: &Design, component_id: &str, terminal_id: &str) -> bool {
    let Some(component) = design.component_by_id(component_id) else {
        return false;
    };
    let Some(kind) = component.kind() else {
        return false;
    };
    match kind {
        ComponentKind::AcLoad
        | ComponentKind::AcPanel
        | ComponentKind::ShorePower
        | ComponentKind::TransferSwitch => true,
        _ if kind.is_inverter() => terminal_id.starts_with("ac-"),
        _ => false,
    }
}

/// Classify one wire as DC or AC (§4.3): AC iff the polarity is hot/neutral,
/// or it is a ground/positive/negative wire with an AC-side endpoint. A
/// grounding wire on an otherwise-DC component stays DC.
#[must_use]
pub fn is_ac_wire(design: &Design, wire: &Wire) -> bool {
    match wire.polarity {
        Polarity::Hot | Polarity::Neutral => true,
        Polarity::Ground | Polarity::Positive | Polarity::Negative => {
            is_ac_endpoint(design, &wire.from_component_id, &wire.from_terminal)
                || is_ac_endpoint(design, &wire.to_component_id, &wire.to_terminal)
        }
    }
}

/// Trace from `inverter`'s AC output, through any AC panels, summing the
/// watts of every AC load reached on hot-polarity wires (§4.3). Following
/// only `hot` wires avoids double-counting a load through its paired
/// neutral conductor.
fn compute_inverter_demand(
    design: &Design,
    inverter: &Component,
    efficiency: f64,
    system_voltage_v: f64,
) -> InverterDemand {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(inverter.id.as_str());
    let mut stack: Vec<&str> = vec![inverter.id.as_str()];

    let mut ac_load_watts = 0.0;
    let mut ac_voltage: Option<f64> = None;
    let max_steps = design.components.len() + 1;
    let mut steps = 0usize;

    while let Some(current_id) = stack.pop() {
        steps += 1;
        if steps > max_steps {
            break;
        }
        for wire in design.wires_incident_to(current_id) {
            if wire.polarity != Polarity::Hot {
                continue;
            }
            let other_id = if wire.from_component_id == current_id {
                wire.to_component_id.as_str()
            } else {
                wire.from_component_id.as_str()
            };
            if visited.contains(other_id) {
                continue;
            }
            let Some(other) = design.component_by_id(other_id) else {
                continue;
            };
            visited.insert(other_id);
            match other.kind() {
                Some(ComponentKind::AcLoad) => {
                    ac_load_watts += other.properties.effective_watts();
                    if ac_voltage.is_none() {
                        let v = other.properties.ac_voltage_or_default();
                        ac_voltage = Some(v);
                    }
                }
                Some(ComponentKind::AcPanel) => {
                    stack.push(other_id);
                }
                _ => {}
            }
        }
    }

    let ac_voltage = ac_voltage.unwrap_or(120.0);
    let rating_watts = inverter.properties.effective_watts();
    let ac_load_watts = if ac_load_watts > 0.0 {
        ac_load_watts
    } else {
        0.8 * rating_watts
    };

    let dc_input_watts = if efficiency > 0.0 { ac_load_watts / efficiency } else { 0.0 };
    let dc_input_current = if system_voltage_v > 0.0 { dc_input_watts / system_voltage_v } else { 0.0 };

    InverterDemand {
        ac_load_watts,
        ac_voltage,
        dc_input_watts,
        dc_input_current,
    }
}

/// `calculateInverterDCInput` (§6): recomputes one inverter's demand at an
/// explicit efficiency, dividing DC input watts by `system_voltage_v` to
/// get the DC input current. Distinct from [`Topology::inverter_demand`],
/// which is precomputed at the default efficiency for all inverters in one
/// pass; this standalone entry point lets a caller ask "what if efficiency
/// were X" for a single inverter without re-running the whole pass.
#[must_use]
pub fn calculate_inverter_dc_input(
    design: &Design,
    inverter_id: &str,
    efficiency: f64,
) -> Option<InverterDemand> {
    let inverter = design.component_by_id(inverter_id)?;
    if !inverter.kind().is_some_and(ComponentKind::is_inverter) {
        return None;
    }
    let efficiency = if efficiency.is_finite() && efficiency > 0.0 {
        efficiency
    } else {
        DEFAULT_EFFICIENCY
    };
    let system_voltage_v = design.system_voltage.as_volts();
    Some(compute_inverter_demand(design, inverter, efficiency, system_voltage_v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltaic_types::{Component, ConductorMaterial, Properties, SystemVoltage, Wire};

    fn inverter_with_ac_load(rating_w: f64, load_w: f64) -> Design {
        let mut design = Design::new(SystemVoltage::Twelve);
        design.components.push(Component {
            id: "inv1".into(),
            component_type: "multiplus".into(),
            name: "Multiplus".into(),
            x: 0.0,
            y: 0.0,
            properties: Properties { watts: Some(rating_w), ..Properties::default() },
        });
        design.components.push(Component {
            id: "load1".into(),
            component_type: "ac-load".into(),
            name: "AC load".into(),
            x: 0.0,
            y: 0.0,
            properties: Properties { watts: Some(load_w), ac_voltage: Some(120.0), ..Properties::default() },
        });
        design.wires.push(Wire {
            id: "w1".into(),
            from_component_id: "inv1".into(),
            from_terminal: "ac-out-hot".into(),
            to_component_id: "load1".into(),
            to_terminal: "hot".into(),
            polarity: Polarity::Hot,
            gauge: None,
            length_ft: None,
            conductor_material: ConductorMaterial::Copper,
        });
        design
    }

    #[test]
    fn inverter_demand_scenario_3000w_rating_1500w_load() {
        let design = inverter_with_ac_load(3000.0, 1500.0);
        let topology = Topology::build(&design);
        let demand = topology.inverter_demand("inv1").unwrap();
        assert_eq!(demand.ac_load_watts, 1500.0);
        assert!((demand.dc_input_watts - 1714.2857).abs() < 1e-3);
    }

    #[test]
    fn no_reachable_ac_load_falls_back_to_80pct_rating() {
        let mut design = Design::new(SystemVoltage::Twelve);
        design.components.push(Component {
            id: "inv1".into(),
            component_type: "inverter".into(),
            name: "Inverter".into(),
            x: 0.0,
            y: 0.0,
            properties: Properties { watts: Some(1000.0), ..Properties::default() },
        });
        let topology = Topology::build(&design);
        let demand = topology.inverter_demand("inv1").unwrap();
        assert_eq!(demand.ac_load_watts, 800.0);
    }

    #[test]
    fn ground_wire_on_dc_components_classifies_as_dc() {
        let mut design = Design::new(SystemVoltage::Twelve);
        design.components.push(Component {
            id: "bat1".into(),
            component_type: "battery".into(),
            name: "Battery".into(),
            x: 0.0,
            y: 0.0,
            properties: Properties::default(),
        });
        design.components.push(Component {
            id: "bus1".into(),
            component_type: "busbar-negative".into(),
            name: "Bus".into(),
            x: 0.0,
            y: 0.0,
            properties: Properties::default(),
        });
        let wire = Wire {
            id: "g1".into(),
            from_component_id: "bat1".into(),
            from_terminal: "negative".into(),
            to_component_id: "bus1".into(),
            to_terminal: "terminal-1".into(),
            polarity: Polarity::Ground,
            gauge: None,
            length_ft: None,
            conductor_material: ConductorMaterial::Copper,
        };
        assert!(!is_ac_wire(&design, &wire));
        design.wires.push(wire);
    }

    #[test]
    fn ground_wire_touching_ac_load_classifies_as_ac() {
        let mut design = Design::new(SystemVoltage::Twelve);
        design.components.push(Component {
            id: "load1".into(),
            component_type: "ac-load".into(),
            name: "AC load".into(),
            x: 0.0,
            y: 0.0,
            properties: Properties::default(),
        });
        design.components.push(Component {
            id: "inv1".into(),
            component_type: "inverter".into(),
            name: "Inverter".into(),
            x: 0.0,
            y: 0.0,
            properties: Properties::default(),
        });
        let wire = Wire {
            id: "g1".into(),
            from_component_id: "inv1".into(),
            from_terminal: "ac-out-ground".into(),
            to_component_id: "load1".into(),
            to_terminal: "ground".into(),
            polarity: Polarity::Ground,
            gauge: None,
            length_ft: None,
            conductor_material: ConductorMaterial::Copper,
        };
        assert!(is_ac_wire(&design, &wire));
    }
}
