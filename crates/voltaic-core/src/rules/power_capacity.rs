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

//! Power capacity rules P1-P3 (§4.5): bank runtime, inverter headroom, and
//! solar recharge adequacy, aggregated across the whole design.

use voltaic_types::{Category, ComponentKind, Design, Issue, Severity};

#[must_use]
pub fn check(design: &Design) -> Vec<Issue> {
    let mut issues = Vec::new();
    p1_runtime(design, &mut issues);
    p2_inverter_headroom(design, &mut issues);
    p3_solar_recharge(design, &mut issues);
    issues
}

fn p1_runtime(design: &Design, issues: &mut Vec<Issue>) {
    let total_dc_watts: f64 = design
        .components_of_kind(ComponentKind::DcLoad)
        .map(|c| c.properties.effective_watts())
        .sum();
    if total_dc_watts <= 0.0 {
        return;
    }
    let system_voltage_v = design.system_voltage.as_volts();
    let usable_wh: f64 = design
        .components_of_kind(ComponentKind::Battery)
        .map(|battery| {
            let dod = battery.properties.battery_type_or_default().dod();
            battery.properties.capacity_or_zero() * system_voltage_v * dod
        })
        .sum();
    if usable_wh <= 0.0 {
        return;
    }
    let hours = usable_wh / total_dc_watts;
    if hours < 1.0 {
        issues.push(
            Issue::new(
                Severity::Error,
                Category::PowerCapacity,
                format!("DC loads ({total_dc_watts:.0} W) would drain the usable battery capacity in {hours:.2} hours"),
            )
            .with_suggestion("add battery capacity or reduce DC load"),
        );
    } else if hours < 4.0 {
        issues.push(
            Issue::new(
                Severity::Warning,
                Category::PowerCapacity,
                format!("DC loads ({total_dc_watts:.0} W) leave only {hours:.1} hours of usable battery runtime"),
            ),
        );
    }
}

fn p2_inverter_headroom(design: &Design, issues: &mut Vec<Issue>) {
    let total_ac_watts: f64 = design
        .components_of_kind(ComponentKind::AcLoad)
        .map(|c| c.properties.effective_watts())
        .sum();
    if total_ac_watts <= 0.0 {
        return;
    }
    let total_inverter_rating: f64 = design
        .components
        .iter()
        .filter(|c| c.kind().is_some_and(ComponentKind::is_inverter))
        .map(|c| c.properties.effective_watts())
        .sum();

    if total_inverter_rating <= 0.0 {
        issues.push(Issue::new(
            Severity::Error,
            Category::PowerCapacity,
            "AC loads are present but no inverter supplies them",
        ));
        return;
    }

    if total_ac_watts > total_inverter_rating {
        issues.push(Issue::new(
            Severity::Error,
            Category::PowerCapacity,
            format!("AC loads ({total_ac_watts:.0} W) exceed total inverter rating ({total_inverter_rating:.0} W)"),
        ));
    } else if total_ac_watts > 0.8 * total_inverter_rating {
        issues.push(Issue::new(
            Severity::Warning,
            Category::PowerCapacity,
            format!("AC loads ({total_ac_watts:.0} W) are over 80% of total inverter rating ({total_inverter_rating:.0} W)"),
        ));
    }
}

fn p3_solar_recharge(design: &Design, issues: &mut Vec<Issue>) {
    let total_solar_watts: f64 = design
        .components_of_kind(ComponentKind::SolarPanel)
        .map(|c| c.properties.effective_watts())
        .sum();
    let system_voltage_v = design.system_voltage.as_volts();
    let required_watts: f64 = design
        .components_of_kind(ComponentKind::Battery)
        .map(|battery| {
            let charge_rate_c = battery.properties.battery_type_or_default().charge_rate_c();
            0.5 * charge_rate_c * battery.properties.capacity_or_zero() * system_voltage_v
        })
        .sum();
    if required_watts > 0.0 && total_solar_watts < required_watts {
        issues.push(
            Issue::new(
                Severity::Warning,
                Category::PowerCapacity,
                format!("solar output ({total_solar_watts:.0} W) is below the recommended recharge capacity ({required_watts:.0} W)"),
            )
            .with_suggestion("add solar panel wattage or reduce battery capacity expectations"),
        );
    }
}
