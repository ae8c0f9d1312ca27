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

//! Component kinds, the property bag, and the role a component plays in
//! current propagation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed tag set a `Component.type` string may denote.
///
/// The wire format keeps `type` as a plain string (§3, §7: "Unknown
/// component type -> the component is ignored by electrical rules and
/// flagged by T-class rules") so a design carrying an unrecognized type
/// still deserializes. [`Component::kind`] parses the raw string into this
/// enum; `None` means unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Battery,
    SolarPanel,
    Mppt,
    BlueSmartCharger,
    OrionDcDc,
    Multiplus,
    PhoenixInverter,
    Inverter,
    BatteryProtect,
    #[serde(rename = "smartshunt")]
    SmartShunt,
    Cerbo,
    Bmv,
    BusbarPositive,
    BusbarNegative,
    AcPanel,
    DcPanel,
    Fuse,
    Switch,
    AcLoad,
    DcLoad,
    ShorePower,
    Alternator,
    TransferSwitch,
}

impl ComponentKind {
    /// All recognized tags, smallest to largest in no particular order;
    /// used to parse `Component.component_type` and for exhaustive tests.
    pub const ALL: &'static [ComponentKind] = &[
        ComponentKind::Battery,
        ComponentKind::SolarPanel,
        ComponentKind::Mppt,
        ComponentKind::BlueSmartCharger,
        ComponentKind::OrionDcDc,
        ComponentKind::Multiplus,
        ComponentKind::PhoenixInverter,
        ComponentKind::Inverter,
        ComponentKind::BatteryProtect,
        ComponentKind::SmartShunt,
        ComponentKind::Cerbo,
        ComponentKind::Bmv,
        ComponentKind::BusbarPositive,
        ComponentKind::BusbarNegative,
        ComponentKind::AcPanel,
        ComponentKind::DcPanel,
        ComponentKind::Fuse,
        ComponentKind::Switch,
        ComponentKind::AcLoad,
        ComponentKind::DcLoad,
        ComponentKind::ShorePower,
        ComponentKind::Alternator,
        ComponentKind::TransferSwitch,
    ];

    /// Parse the raw wire-format tag, e.g. `"blue-smart-charger"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == raw)
    }

    /// The wire-format tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::SolarPanel => "solar-panel",
            Self::Mppt => "mppt",
            Self::BlueSmartCharger => "blue-smart-charger",
            Self::OrionDcDc => "orion-dc-dc",
            Self::Multiplus => "multiplus",
            Self::PhoenixInverter => "phoenix-inverter",
            Self::Inverter => "inverter",
            Self::BatteryProtect => "battery-protect",
            Self::SmartShunt => "smartshunt",
            Self::Cerbo => "cerbo",
            Self::Bmv => "bmv",
            Self::BusbarPositive => "busbar-positive",
            Self::BusbarNegative => "busbar-negative",
            Self::AcPanel => "ac-panel",
            Self::DcPanel => "dc-panel",
            Self::Fuse => "fuse",
            Self::Switch => "switch",
            Self::AcLoad => "ac-load",
            Self::DcLoad => "dc-load",
            Self::ShorePower => "shore-power",
            Self::Alternator => "alternator",
            Self::TransferSwitch => "transfer-switch",
        }
    }

    /// True for the three inverter-like kinds (§4.3, §4.4 rule 1/6).
    #[must_use]
    pub fn is_inverter(self) -> bool {
        matches!(self, Self::Multiplus | Self::PhoenixInverter | Self::Inverter)
    }

    /// True for the three DC charger kinds (§4.4 rule 5).
    #[must_use]
    pub fn is_charger(self) -> bool {
        matches!(self, Self::Mppt | Self::BlueSmartCharger | Self::OrionDcDc)
    }

    /// The coarse role this kind plays in current propagation (§9: dispatch
    /// on role, not on string equality).
    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Self::Battery => Role::Source,
            Self::SolarPanel | Self::Mppt | Self::BlueSmartCharger | Self::OrionDcDc => {
                Role::Source
            }
            Self::Multiplus | Self::PhoenixInverter | Self::Inverter => Role::Boundary,
            Self::AcLoad | Self::DcLoad => Role::Sink,
            Self::BusbarPositive | Self::BusbarNegative => Role::Bus,
            Self::AcPanel | Self::DcPanel => Role::Panel,
            Self::Fuse
            | Self::Switch
            | Self::BatteryProtect
            | Self::SmartShunt
            | Self::Cerbo
            | Self::Bmv
            | Self::ShorePower
            | Self::Alternator
            | Self::TransferSwitch => Role::Transit,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current-contribution role a component plays, independent of its specific
/// kind (§9 design note: the propagator should dispatch on this, not on
/// repeated kind comparisons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Originates current: battery, solar panel, charger.
    Source,
    /// Terminates current: AC or DC load.
    Sink,
    /// Passes current through unchanged in kind: fuse, switch, shunt, etc.
    Transit,
    /// Single-polarity junction of many wires.
    Bus,
    /// Distribution panel recursing to its own loads.
    Panel,
    /// DC/AC boundary with an efficiency factor: an inverter.
    Boundary,
}

/// Lithium vs. lead-acid, which selects DOD and charge-rate constants
/// (§4.5 P1/P3, GLOSSARY: DOD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatteryType {
    Lithium,
    LiFePO4,
    LeadAcid,
    Agm,
    Gel,
}

impl BatteryType {
    /// Usable depth of discharge (GLOSSARY: DOD).
    #[must_use]
    pub fn dod(self) -> f64 {
        match self {
            Self::Lithium | Self::LiFePO4 => 0.8,
            Self::LeadAcid | Self::Agm | Self::Gel => 0.5,
        }
    }

    /// Default charge rate as a fraction of capacity per hour (§4.5 P3).
    #[must_use]
    pub fn charge_rate_c(self) -> f64 {
        match self {
            Self::Lithium | Self::LiFePO4 => 0.2,
            Self::LeadAcid | Self::Agm | Self::Gel => 0.1,
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "lithium" => Some(Self::Lithium),
            "lifepo4" | "life-po4" => Some(Self::LiFePO4),
            "lead-acid" | "lead_acid" | "leadacid" => Some(Self::LeadAcid),
            "agm" => Some(Self::Agm),
            "gel" => Some(Self::Gel),
            _ => None,
        }
    }
}

/// The open property bag (§3), modeled with recognized-key accessors rather
/// than a raw map: the recognized key set is closed and small enough that
/// typed fields catch a misspelled key at parse time instead of silently
/// defaulting it to zero, while still accepting a design that omits any of
/// them.
///
/// Missing numeric properties default to 0 per §3; callers that need the
/// "is this actually missing" distinction (Q1-Q3) read the `Option` fields
/// directly rather than the defaulting accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,
    #[serde(default, rename = "acVoltage", skip_serializing_if = "Option::is_none")]
    pub ac_voltage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    #[serde(default, rename = "powerRating", skip_serializing_if = "Option::is_none")]
    pub power_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    #[serde(default, rename = "maxCurrent", skip_serializing_if = "Option::is_none")]
    pub max_current: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(default, rename = "batteryType", skip_serializing_if = "Option::is_none")]
    pub battery_type: Option<BatteryType>,
    #[serde(default, rename = "fuseRating", skip_serializing_if = "Option::is_none")]
    pub fuse_rating: Option<f64>,
    #[serde(default, rename = "safeDOD", skip_serializing_if = "Option::is_none")]
    pub safe_dod: Option<f64>,
    #[serde(default, rename = "dailyHours", skip_serializing_if = "Option::is_none")]
    pub daily_hours: Option<f64>,
}

impl Properties {
    /// `watts`, falling back to the `power`/`powerRating` synonyms different
    /// component kinds use (§3 recognized keys), defaulting to 0.
    #[must_use]
    pub fn effective_watts(&self) -> f64 {
        self.watts
            .or(self.power)
            .or(self.power_rating)
            .unwrap_or(0.0)
    }

    /// `amps`, falling back to `current`/`maxCurrent`, defaulting to 0.
    #[must_use]
    pub fn effective_current(&self) -> f64 {
        self.amps
            .or(self.current)
            .or(self.max_current)
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn voltage_or_zero(&self) -> f64 {
        self.voltage.unwrap_or(0.0)
    }

    #[must_use]
    pub fn capacity_or_zero(&self) -> f64 {
        self.capacity.unwrap_or(0.0)
    }

    /// AC voltage, coerced to 120 for anything outside {110,120,220,230}
    /// per §6.
    #[must_use]
    pub fn ac_voltage_or_default(&self) -> f64 {
        match self.ac_voltage {
            Some(v) if [110.0, 120.0, 220.0, 230.0].contains(&v) => v,
            _ => 120.0,
        }
    }

    #[must_use]
    pub fn battery_type_or_default(&self) -> BatteryType {
        self.battery_type.unwrap_or(BatteryType::LiFePO4)
    }
}

/// A single placed component (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub properties: Properties,
}

impl Component {
    #[must_use]
    pub fn new(id: impl Into<String>, component_type: ComponentKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.as_str().to_owned(),
            name: name.into(),
            x: 0.0,
            y: 0.0,
            properties: Properties::default(),
        }
    }

    /// Parse [`Self::component_type`] into the closed [`ComponentKind`] set.
    /// `None` for an unrecognized type (§7).
    #[must_use]
    pub fn kind(&self) -> Option<ComponentKind> {
        ComponentKind::parse(&self.component_type)
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}
