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

//! AI-quality / completeness rules Q1-Q4 (§4.5): the checks a generator
//! loop most often needs feedback on, since they flag data an LLM tends to
//! leave out rather than genuine electrical mistakes.

use voltaic_types::{Category, ComponentKind, Design, Issue, Severity};

#[must_use]
pub fn check(design: &Design) -> Vec<Issue> {
    let mut issues = Vec::new();
    q1_load_missing_power(design, &mut issues);
    q2_battery_missing_capacity(design, &mut issues);
    q3_solar_panel_missing_watts(design, &mut issues);
    q4_unreferenced_component(design, &mut issues);
    issues
}

fn q1_load_missing_power(design: &Design, issues: &mut Vec<Issue>) {
    for component in &design.components {
        let Some(kind) = component.kind() else { continue };
        if !matches!(kind, ComponentKind::AcLoad | ComponentKind::DcLoad) {
            continue;
        }
        let has_watts = component.properties.effective_watts() > 0.0;
        let has_amps = component.properties.effective_current() > 0.0;
        if !has_watts && !has_amps {
            let suggestion = match kind {
                ComponentKind::AcLoad => "specify watts for an AC load, e.g. a 1500 W space heater or 100 W TV",
                ComponentKind::DcLoad => "specify watts or amps for a DC load, e.g. a 5 A 12 V water pump",
                _ => unreachable!(),
            };
            issues.push(
                Issue::new(
                    Severity::Error,
                    Category::AiQuality,
                    format!("\"{}\" has no watts or amps specified", component.id),
                )
                .with_component(component.id.clone())
                .with_suggestion(suggestion),
            );
        }
    }
}

fn q2_battery_missing_capacity(design: &Design, issues: &mut Vec<Issue>) {
    for battery in design.components_of_kind(ComponentKind::Battery) {
        if battery.properties.capacity.is_none() {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    Category::AiQuality,
                    format!("battery \"{}\" is missing a capacity (Ah)", battery.id),
                )
                .with_component(battery.id.clone()),
            );
        }
    }
}

fn q3_solar_panel_missing_watts(design: &Design, issues: &mut Vec<Issue>) {
    for panel in design.components_of_kind(ComponentKind::SolarPanel) {
        if panel.properties.effective_watts() <= 0.0 {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    Category::AiQuality,
                    format!("solar panel \"{}\" is missing a wattage rating", panel.id),
                )
                .with_component(panel.id.clone()),
            );
        }
    }
}

fn q4_unreferenced_component(design: &Design, issues: &mut Vec<Issue>) {
    for component in &design.components {
        if design.wires_incident_to(&component.id).next().is_none() {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    Category::AiQuality,
                    format!("\"{}\" is not connected to any wire", component.id),
                )
                .with_component(component.id.clone()),
            );
        }
    }
}
