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

//! Terminal rules T1-T4 (§4.5).

use std::collections::HashMap;

use crate::rules::common::wires_on_terminal;
use voltaic_types::{terminal_class, Category, ComponentKind, Design, Issue, Severity};

#[must_use]
pub fn check(design: &Design) -> Vec<Issue> {
    let mut issues = Vec::new();
    t1_dangling_references(design, &mut issues);
    t2_both_power_terminals(design, &mut issues);
    t3_ac_load_terminals(design, &mut issues);
    t4_duplicate_single_terminal_usage(design, &mut issues);
    issues
}

fn t1_dangling_references(design: &Design, issues: &mut Vec<Issue>) {
    for wire in &design.wires {
        for (component_id, terminal_id) in [
            (&wire.from_component_id, &wire.from_terminal),
            (&wire.to_component_id, &wire.to_terminal),
        ] {
            match design.component_by_id(component_id).and_then(|c| c.kind()) {
                None => {
                    issues.push(
                        Issue::new(
                            Severity::Error,
                            Category::Terminal,
                            format!("wire \"{}\" references non-existent component \"{component_id}\"", wire.id),
                        )
                        .with_wire(wire.id.clone()),
                    );
                }
                Some(kind) => {
                    if terminal_class(kind, terminal_id).is_none() {
                        issues.push(
                            Issue::new(
                                Severity::Error,
                                Category::Terminal,
                                format!(
                                    "wire \"{}\" references non-existent terminal \"{terminal_id}\" on \"{component_id}\"",
                                    wire.id
                                ),
                            )
                            .with_wire(wire.id.clone())
                            .with_component(component_id.clone()),
                        );
                    }
                }
            }
        }
    }
}

fn t2_both_power_terminals(design: &Design, issues: &mut Vec<Issue>) {
    for kind in [ComponentKind::Battery, ComponentKind::DcLoad, ComponentKind::SolarPanel] {
        for component in design.components_of_kind(kind) {
            let has_positive = wires_on_terminal(design, &component.id, "positive").next().is_some();
            let has_negative = wires_on_terminal(design, &component.id, "negative").next().is_some();
            if !has_positive || !has_negative {
                issues.push(
                    Issue::new(
                        Severity::Error,
                        Category::Terminal,
                        format!("\"{}\" is missing a positive or negative connection", component.id),
                    )
                    .with_component(component.id.clone()),
                );
            }
        }
    }
}

fn t3_ac_load_terminals(design: &Design, issues: &mut Vec<Issue>) {
    for load in design.components_of_kind(ComponentKind::AcLoad) {
        let missing: Vec<&str> = ["hot", "neutral", "ground"]
            .into_iter()
            .filter(|terminal| wires_on_terminal(design, &load.id, terminal).next().is_none())
            .collect();
        if !missing.is_empty() {
            issues.push(
                Issue::new(
                    Severity::Error,
                    Category::Terminal,
                    format!("AC load \"{}\" is missing: {}", load.id, missing.join(", ")),
                )
                .with_component(load.id.clone()),
            );
        }
    }
}

/// Component kinds with a small numbered terminal set that legitimately
/// accepts many wires (§3 SUPPLEMENT: bus bars and panels), excluded from
/// the "single-terminal device" duplicate check.
fn has_numbered_terminals(kind: ComponentKind) -> bool {
    matches!(
        kind,
        ComponentKind::BusbarPositive | ComponentKind::BusbarNegative | ComponentKind::AcPanel | ComponentKind::DcPanel
    )
}

fn t4_duplicate_single_terminal_usage(design: &Design, issues: &mut Vec<Issue>) {
    let mut by_terminal: HashMap<(&str, &str), Vec<&voltaic_types::Wire>> = HashMap::new();
    for wire in &design.wires {
        by_terminal
            .entry((wire.from_component_id.as_str(), wire.from_terminal.as_str()))
            .or_default()
            .push(wire);
        by_terminal
            .entry((wire.to_component_id.as_str(), wire.to_terminal.as_str()))
            .or_default()
            .push(wire);
    }
    for ((component_id, terminal_id), wires) in by_terminal {
        if wires.len() <= 1 {
            continue;
        }
        let Some(kind) = design.component_by_id(component_id).and_then(|c| c.kind()) else { continue };
        if has_numbered_terminals(kind) {
            continue;
        }
        // A sanctioned parallel run (§3) shares both endpoints and polarity
        // across every wire at this terminal; that is not a duplicate.
        let is_parallel_run = wires
            .iter()
            .all(|w| wires.iter().all(|other| w.id == other.id || w.is_parallel_to(other)));
        if is_parallel_run {
            continue;
        }
        issues.push(
            Issue::new(
                Severity::Error,
                Category::Terminal,
                format!("terminal \"{terminal_id}\" on \"{component_id}\" has {} wires but accepts only one", wires.len()),
            )
            .with_component(component_id.to_owned()),
        );
    }
}
