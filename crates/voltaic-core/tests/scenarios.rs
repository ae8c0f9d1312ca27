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

//! The six concrete scenarios (§8).

use voltaic_core::validate;
use voltaic_types::{
    BatteryType, Component, ComponentKind, ConductorMaterial, Design, Polarity, Properties,
    Severity, SystemVoltage, Wire,
};

fn wire(
    id: &str,
    from: &str,
    from_t: &str,
    to: &str,
    to_t: &str,
    polarity: Polarity,
    gauge: Option<&str>,
    length_ft: f64,
) -> Wire {
    Wire {
        id: id.into(),
        from_component_id: from.into(),
        from_terminal: from_t.into(),
        to_component_id: to.into(),
        to_terminal: to_t.into(),
        polarity,
        gauge: gauge.map(str::to_owned),
        length_ft: Some(length_ft),
        conductor_material: ConductorMaterial::Copper,
    }
}

fn placed(id: &str, kind: ComponentKind, properties: Properties, x: f64, y: f64) -> Component {
    Component::new(id, kind, id).with_position(x, y).with_properties(properties)
}

#[test]
fn minimal_lithium_scores_above_ninety_with_no_errors() {
    let mut design = Design::new(SystemVoltage::Twelve);
    design.components.push(placed(
        "bat1",
        ComponentKind::Battery,
        Properties { capacity: Some(200.0), battery_type: Some(BatteryType::LiFePO4), ..Default::default() },
        100.0,
        100.0,
    ));
    design.components.push(placed(
        "fuse1",
        ComponentKind::Fuse,
        Properties { fuse_rating: Some(400.0), ..Default::default() },
        300.0,
        100.0,
    ));
    design.components.push(placed("busp", ComponentKind::BusbarPositive, Properties::default(), 500.0, 100.0));
    design.components.push(placed("busn", ComponentKind::BusbarNegative, Properties::default(), 500.0, 300.0));
    design.components.push(placed(
        "load1",
        ComponentKind::DcLoad,
        Properties { watts: Some(120.0), ..Default::default() },
        700.0,
        200.0,
    ));

    design.wires.push(wire("w1", "bat1", "positive", "fuse1", "in", Polarity::Positive, Some("10"), 5.0));
    design.wires.push(wire("w2", "fuse1", "out", "busp", "terminal-1", Polarity::Positive, Some("10"), 5.0));
    design.wires.push(wire("w3", "busp", "terminal-2", "load1", "positive", Polarity::Positive, Some("10"), 10.0));
    design.wires.push(wire("w4", "bat1", "negative", "busn", "terminal-1", Polarity::Negative, Some("10"), 5.0));
    design.wires.push(wire("w5", "busn", "terminal-2", "load1", "negative", Polarity::Negative, Some("10"), 10.0));

    let result = validate(&design);

    let load_wire = result.wire_results.get("w3").unwrap();
    assert!((load_wire.current_a - 10.0).abs() < 1e-6);
    assert_eq!(load_wire.recommended_gauge.as_str(), "10");

    assert_eq!(result.metrics.error_count, 0, "unexpected errors: {:?}", result.issues);
    assert!(result.score >= 90.0, "score was {}", result.score);
}

#[test]
fn solar_to_mppt_currents_match_vmp_and_rated_output() {
    let mut design = Design::new(SystemVoltage::Twelve);
    design.components.push(placed(
        "panel1",
        ComponentKind::SolarPanel,
        Properties { watts: Some(400.0), ..Default::default() },
        100.0,
        100.0,
    ));
    design.components.push(placed(
        "mppt1",
        ComponentKind::Mppt,
        Properties { max_current: Some(50.0), ..Default::default() },
        300.0,
        100.0,
    ));
    design.components.push(placed("busp", ComponentKind::BusbarPositive, Properties::default(), 500.0, 100.0));

    design.wires.push(wire("w1", "panel1", "positive", "mppt1", "pv-positive", Polarity::Positive, Some("10"), 10.0));
    design.wires.push(wire("w2", "mppt1", "dc-positive", "busp", "terminal-1", Polarity::Positive, Some("6"), 5.0));

    let result = validate(&design);

    let panel_wire = result.wire_results.get("w1").unwrap();
    assert!((panel_wire.current_a - 400.0 / 18.0).abs() < 1e-3);
    assert_eq!(panel_wire.recommended_gauge.as_str(), "10");

    let mppt_wire = result.wire_results.get("w2").unwrap();
    assert!((mppt_wire.current_a - 50.0).abs() < 1e-6);
    assert_ne!(mppt_wire.sizing_status, voltaic_types::SizingStatus::Error);
}

fn inverter_with_ac_load(system_voltage: SystemVoltage) -> Design {
    let mut design = Design::new(system_voltage);
    design.components.push(placed(
        "inv1",
        ComponentKind::Multiplus,
        Properties { watts: Some(3000.0), ..Default::default() },
        100.0,
        100.0,
    ));
    design.components.push(placed(
        "load1",
        ComponentKind::AcLoad,
        Properties { watts: Some(1500.0), ac_voltage: Some(120.0), ..Default::default() },
        400.0,
        100.0,
    ));
    design.wires.push(wire("wh", "inv1", "ac-out-hot", "load1", "hot", Polarity::Hot, Some("10"), 10.0));
    design.wires.push(wire("wn", "inv1", "ac-out-neutral", "load1", "neutral", Polarity::Neutral, Some("10"), 10.0));
    design
}

#[test]
fn inverter_dc_input_requires_1_0_awg() {
    let mut design = inverter_with_ac_load(SystemVoltage::Twelve);
    design.components.push(placed("bat1", ComponentKind::Battery, Properties::default(), 100.0, 300.0));
    design.wires.push(wire("wdc", "bat1", "positive", "inv1", "dc-positive", Polarity::Positive, Some("1/0"), 5.0));

    let result = validate(&design);

    let dc_wire = result.wire_results.get("wdc").unwrap();
    assert!((dc_wire.current_a - 142.857).abs() < 0.01, "current was {}", dc_wire.current_a);
    assert_eq!(dc_wire.recommended_gauge.as_str(), "1/0");
    assert!(dc_wire.voltage_drop_pct < 3.0);
}

#[test]
fn parallel_4_0_conductors_split_the_current_evenly() {
    let mut design = Design::new(SystemVoltage::Twelve);
    design.components.push(placed("bat1", ComponentKind::Battery, Properties::default(), 100.0, 100.0));
    design.components.push(placed(
        "load1",
        ComponentKind::DcLoad,
        Properties { watts: Some(3600.0), ..Default::default() },
        400.0,
        100.0,
    ));
    design.wires.push(wire("p1", "bat1", "positive", "load1", "positive", Polarity::Positive, Some("4/0"), 10.0));
    design.wires.push(wire("p2", "bat1", "positive", "load1", "positive", Polarity::Positive, Some("4/0"), 10.0));
    design.wires.push(wire("n1", "bat1", "negative", "load1", "negative", Polarity::Negative, Some("4/0"), 10.0));

    let result = validate(&design);

    let p1 = result.wire_results.get("p1").unwrap();
    assert_eq!(p1.parallel_count, 2);
    assert!((p1.current_a - 150.0).abs() < 1e-6);
    assert!((p1.voltage_drop_pct - 1.225).abs() < 0.01);
    assert_ne!(p1.sizing_status, voltaic_types::SizingStatus::Error);
}

#[test]
fn smartshunt_bypass_warns_with_reroute_suggestion() {
    let mut design = Design::new(SystemVoltage::Twelve);
    design.components.push(placed("bat1", ComponentKind::Battery, Properties::default(), 100.0, 100.0));
    design.components.push(placed("shunt1", ComponentKind::SmartShunt, Properties::default(), 300.0, 100.0));
    design.components.push(placed(
        "load1",
        ComponentKind::DcLoad,
        Properties { watts: Some(120.0), ..Default::default() },
        500.0,
        100.0,
    ));

    design.wires.push(wire("w1", "bat1", "positive", "load1", "positive", Polarity::Positive, Some("10"), 10.0));
    // Load's negative goes straight to the battery, bypassing the shunt.
    design.wires.push(wire("w2", "load1", "negative", "bat1", "negative", Polarity::Negative, Some("10"), 10.0));

    let result = validate(&design);

    let bypass_warning = result.issues.iter().find(|issue| {
        issue.severity == Severity::Warning && issue.message.contains("bypassing smartshunt")
    });
    assert!(bypass_warning.is_some(), "issues were: {:?}", result.issues);
    assert!(bypass_warning.unwrap().suggestion.as_deref().unwrap().contains("system-minus"));
}

#[test]
fn undersized_fuse_reports_error_with_150a_suggestion() {
    let mut design = inverter_with_ac_load(SystemVoltage::Twelve);
    design.components.push(placed(
        "fuse1",
        ComponentKind::Fuse,
        Properties { fuse_rating: Some(100.0), ..Default::default() },
        100.0,
        300.0,
    ));
    design.wires.push(wire("wdc", "fuse1", "out", "inv1", "dc-positive", Polarity::Positive, Some("1/0"), 5.0));

    let result = validate(&design);

    let fuse_error = result.issues.iter().find(|issue| {
        issue.severity == Severity::Error && issue.message.contains("fuse \"fuse1\"")
    });
    assert!(fuse_error.is_some(), "issues were: {:?}", result.issues);
    assert!(fuse_error.unwrap().suggestion.as_deref().unwrap().contains("150"));
}
