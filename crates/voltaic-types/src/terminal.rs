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

//! The terminal catalog: a fixed, finite list of named terminals per
//! component kind (§3), each carrying a semantic class.
//!
//! No `original_source/` survived retrieval for this system, so this table
//! is the authoritative definition the distilled spec only gestures at; it
//! is what rules T1-T4 and E1/E4/E5 check wire endpoints against
//! (SPEC_FULL §3 SUPPLEMENT).

use crate::component::ComponentKind;
use serde::{Deserialize, Serialize};

/// The semantic class of a terminal (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalClass {
    Positive,
    Negative,
    Ground,
    AcIn,
    AcOut,
    PvPositive,
    PvNegative,
    Data,
}

/// One named terminal on a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSpec {
    pub id: &'static str,
    pub class: TerminalClass,
}

const fn t(id: &'static str, class: TerminalClass) -> TerminalSpec {
    TerminalSpec { id, class }
}

/// The closed list of terminals for `kind`, in declaration order.
///
/// Bus bars and panels expose a small fixed numbered set (`terminal-1..8`,
/// `out-1..12`) rather than an unbounded one: a design with more incident
/// wires than that is almost certainly a layout mistake the canvas UI
/// should have prevented, and T1 will flag a wire naming a terminal past
/// the end of this list as referencing a non-existent terminal.
#[must_use]
pub fn terminals_for(kind: ComponentKind) -> &'static [TerminalSpec] {
    use ComponentKind::{
        AcLoad, AcPanel, Alternator, Battery, BatteryProtect, Bmv, BlueSmartCharger,
        BusbarNegative, BusbarPositive, Cerbo, DcLoad, DcPanel, Fuse, Inverter, Mppt, Multiplus,
        OrionDcDc, PhoenixInverter, ShorePower, SmartShunt, SolarPanel, Switch, TransferSwitch,
    };
    use TerminalClass::{AcIn, AcOut, Data, Ground, Negative, Positive, PvNegative, PvPositive};

    match kind {
        Battery => &[t("positive", Positive), t("negative", Negative)],
        SolarPanel => &[t("positive", Positive), t("negative", Negative)],
        Mppt => &[
            t("pv-positive", PvPositive),
            t("pv-negative", PvNegative),
            t("dc-positive", Positive),
            t("dc-negative", Negative),
        ],
        BlueSmartCharger | OrionDcDc => &[
            t("dc-in-positive", Positive),
            t("dc-in-negative", Negative),
            t("dc-positive", Positive),
            t("dc-negative", Negative),
        ],
        Multiplus => &[
            t("dc-positive", Positive),
            t("dc-negative", Negative),
            t("ac-in-hot", AcIn),
            t("ac-in-neutral", AcIn),
            t("ac-in-ground", Ground),
            t("ac-out-hot", AcOut),
            t("ac-out-neutral", AcOut),
            t("ac-out-ground", Ground),
        ],
        PhoenixInverter | Inverter => &[
            t("dc-positive", Positive),
            t("dc-negative", Negative),
            t("ac-out-hot", AcOut),
            t("ac-out-neutral", AcOut),
            t("ac-out-ground", Ground),
        ],
        BatteryProtect => &[
            t("battery-positive", Positive),
            t("battery-negative", Negative),
            t("load-positive", Positive),
            t("load-negative", Negative),
        ],
        SmartShunt => &[
            // battery-side negative vs. load-side negative are distinct
            // terminals; E1 depends on this distinction.
            t("battery-negative", Negative),
            t("system-minus", Negative),
            t("negative", Negative),
            t("data", Data),
        ],
        Cerbo | Bmv => &[t("positive", Positive), t("negative", Negative), t("data", Data)],
        BusbarPositive => &[
            t("terminal-1", Positive),
            t("terminal-2", Positive),
            t("terminal-3", Positive),
            t("terminal-4", Positive),
            t("terminal-5", Positive),
            t("terminal-6", Positive),
            t("terminal-7", Positive),
            t("terminal-8", Positive),
        ],
        BusbarNegative => &[
            t("terminal-1", Negative),
            t("terminal-2", Negative),
            t("terminal-3", Negative),
            t("terminal-4", Negative),
            t("terminal-5", Negative),
            t("terminal-6", Negative),
            t("terminal-7", Negative),
            t("terminal-8", Negative),
        ],
        AcPanel => &[
            t("in", AcIn),
            t("out-1", AcOut),
            t("out-2", AcOut),
            t("out-3", AcOut),
            t("out-4", AcOut),
            t("out-5", AcOut),
            t("out-6", AcOut),
            t("out-7", AcOut),
            t("out-8", AcOut),
            t("out-9", AcOut),
            t("out-10", AcOut),
            t("out-11", AcOut),
            t("out-12", AcOut),
        ],
        DcPanel => &[
            t("in", Positive),
            t("out-1", Positive),
            t("out-2", Positive),
            t("out-3", Positive),
            t("out-4", Positive),
            t("out-5", Positive),
            t("out-6", Positive),
            t("out-7", Positive),
            t("out-8", Positive),
            t("out-9", Positive),
            t("out-10", Positive),
            t("out-11", Positive),
            t("out-12", Positive),
        ],
        Fuse | Switch => &[t("in", Positive), t("out", Positive)],
        AcLoad => &[t("hot", AcIn), t("neutral", AcIn), t("ground", Ground)],
        DcLoad => &[t("positive", Positive), t("negative", Negative)],
        ShorePower => &[
            t("hot", AcOut),
            t("neutral", AcOut),
            t("ground", Ground),
        ],
        Alternator => &[t("positive", Positive), t("negative", Negative)],
        TransferSwitch => &[
            t("shore-in-hot", AcIn),
            t("shore-in-neutral", AcIn),
            t("generator-in-hot", AcIn),
            t("generator-in-neutral", AcIn),
            t("out-hot", AcOut),
            t("out-neutral", AcOut),
            t("ground", Ground),
        ],
    }
}

/// Look up a single terminal's class, or `None` if `kind` has no terminal
/// with that id (T1: a wire naming it is a terminal-class error).
#[must_use]
pub fn terminal_class(kind: ComponentKind, terminal_id: &str) -> Option<TerminalClass> {
    terminals_for(kind)
        .iter()
        .find(|spec| spec.id == terminal_id)
        .map(|spec| spec.class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_at_least_two_terminals() {
        for kind in ComponentKind::ALL {
            assert!(
                terminals_for(*kind).len() >= 2,
                "{kind} has fewer than two terminals"
            );
        }
    }

    #[test]
    fn smartshunt_distinguishes_battery_and_system_minus() {
        let terms = terminals_for(ComponentKind::SmartShunt);
        assert!(terms.iter().any(|s| s.id == "battery-negative"));
        assert!(terms.iter().any(|s| s.id == "system-minus"));
    }

    #[test]
    fn unknown_terminal_is_none() {
        assert_eq!(terminal_class(ComponentKind::Battery, "bogus"), None);
    }
}
