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

//! Quantified invariants and round-trip/idempotence properties (§8) that
//! need a whole [`Design`] fixture to exercise.

use voltaic_core::validate;
use voltaic_types::{
    BatteryType, Component, ComponentKind, ConductorMaterial, Design, Polarity, Properties,
    SystemVoltage, Wire,
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

fn busbar_design() -> Design {
    let mut design = Design::new(SystemVoltage::Twelve);
    design.components.push(Component::new(
        "bat1",
        ComponentKind::Battery,
        "bat1",
    ).with_properties(Properties { capacity: Some(200.0), battery_type: Some(BatteryType::LiFePO4), ..Default::default() }));
    design.components.push(Component::new("busp", ComponentKind::BusbarPositive, "busp"));
    design.components.push(Component::new("busn", ComponentKind::BusbarNegative, "busn"));
    design.components.push(Component::new(
        "load1",
        ComponentKind::DcLoad,
        "load1",
    ).with_properties(Properties { watts: Some(60.0), ..Default::default() }));
    design.components.push(Component::new(
        "load2",
        ComponentKind::DcLoad,
        "load2",
    ).with_properties(Properties { watts: Some(60.0), ..Default::default() }));

    design.wires.push(wire("w1", "bat1", "positive", "busp", "terminal-1", Polarity::Positive, Some("8"), 5.0));
    design.wires.push(wire("w2", "busp", "terminal-2", "load1", "positive", Polarity::Positive, Some("12"), 10.0));
    design.wires.push(wire("w3", "busp", "terminal-3", "load2", "positive", Polarity::Positive, Some("12"), 10.0));
    design.wires.push(wire("w4", "bat1", "negative", "busn", "terminal-1", Polarity::Negative, Some("8"), 5.0));
    design.wires.push(wire("w5", "busn", "terminal-2", "load1", "negative", Polarity::Negative, Some("12"), 10.0));
    design.wires.push(wire("w6", "busn", "terminal-3", "load2", "negative", Polarity::Negative, Some("12"), 10.0));
    design
}

#[test]
fn revalidating_the_same_design_is_idempotent() {
    let design = busbar_design();
    let first = validate(&design);
    let second = validate(&design);
    assert_eq!(first, second);
}

#[test]
fn reordering_wires_does_not_change_the_result() {
    let mut reordered = busbar_design();
    reordered.wires.reverse();

    let original = validate(&busbar_design());
    let after_reorder = validate(&reordered);
    assert_eq!(original, after_reorder);
}

#[test]
fn sizing_a_wire_to_its_recommended_gauge_clears_its_wire_sizing_issues() {
    let mut design = busbar_design();
    // Undersize w2 so it trips an ampacity or voltage-drop issue, then fix it
    // with the engine's own recommendation and confirm the issue disappears.
    design.wires[1].gauge = Some("18".into());

    let before = validate(&design);
    let recommended = before.wire_results.get("w2").unwrap().recommended_gauge;
    assert!(
        before.issues.iter().any(|i| i.wire_id.as_deref() == Some("w2")),
        "expected w2 to have a wire-sizing issue before resizing"
    );

    design.wires[1].gauge = Some(recommended.as_str().to_owned());
    let after = validate(&design);
    assert!(
        !after.issues.iter().any(|i| i.wire_id.as_deref() == Some("w2")),
        "w2 still has issues after sizing to the recommended gauge: {:?}",
        after.issues
    );
}

#[test]
fn bus_bar_current_balances_within_a_tenth_of_an_amp() {
    let design = busbar_design();
    let result = validate(&design);

    let incoming = result.wire_results.get("w1").unwrap().current_a;
    let outgoing = result.wire_results.get("w2").unwrap().current_a
        + result.wire_results.get("w3").unwrap().current_a;
    assert!((incoming - outgoing).abs() < 0.1, "incoming {incoming} vs outgoing {outgoing}");
}

#[test]
fn inverter_dc_input_current_matches_ac_demand_over_efficiency_and_voltage() {
    let mut design = Design::new(SystemVoltage::TwentyFour);
    design.components.push(Component::new("inv1", ComponentKind::Multiplus, "inv1"));
    design.components.push(
        Component::new("load1", ComponentKind::AcLoad, "load1")
            .with_properties(Properties { watts: Some(2000.0), ac_voltage: Some(120.0), ..Default::default() }),
    );
    design.components.push(Component::new("bat1", ComponentKind::Battery, "bat1"));

    design.wires.push(wire("wh", "inv1", "ac-out-hot", "load1", "hot", Polarity::Hot, Some("10"), 10.0));
    design.wires.push(wire("wn", "inv1", "ac-out-neutral", "load1", "neutral", Polarity::Neutral, Some("10"), 10.0));
    design.wires.push(wire("wdc", "bat1", "positive", "inv1", "dc-positive", Polarity::Positive, Some("4"), 5.0));

    let result = validate(&design);
    let dc_current = result.wire_results.get("wdc").unwrap().current_a;

    let expected = 2000.0 / 0.875 / 24.0;
    assert!((dc_current - expected).abs() < 0.01, "dc_current was {dc_current}, expected {expected}");
}

#[test]
fn ground_wire_gauge_must_equal_its_sibling_hot_wire() {
    let mut design = Design::new(SystemVoltage::Twelve);
    design.components.push(Component::new("inv1", ComponentKind::Multiplus, "inv1"));
    design.components.push(
        Component::new("load1", ComponentKind::AcLoad, "load1")
            .with_properties(Properties { watts: Some(500.0), ac_voltage: Some(120.0), ..Default::default() }),
    );
    design.wires.push(wire("wh", "inv1", "ac-out-hot", "load1", "hot", Polarity::Hot, Some("12"), 10.0));
    design.wires.push(wire("wg", "inv1", "ac-out-ground", "load1", "ground", Polarity::Ground, Some("14"), 10.0));

    let mismatched = validate(&design);
    assert!(mismatched.issues.iter().any(|i| i.message.contains("does not match its circuit conductor")));

    let mut fixed = design;
    fixed.wires[1].gauge = Some("12".into());
    let ok = validate(&fixed);
    assert!(!ok.issues.iter().any(|i| i.message.contains("does not match its circuit conductor")));
}
