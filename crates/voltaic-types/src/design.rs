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

//! The top-level `Design` input (§3).

use crate::component::{Component, ComponentKind};
use crate::error::EngineError;
use crate::wire::Wire;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of supported system voltages (§3).
///
/// The wire format (§3, §6) carries this as a plain JSON number
/// (`systemVoltage: 12`), so [`Serialize`]/[`Deserialize`] are implemented
/// by hand against `u16` rather than derived, which would otherwise encode
/// the variant name as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SystemVoltage {
    Twelve = 12,
    TwentyFour = 24,
    FortyEight = 48,
}

impl SystemVoltage {
    #[must_use]
    pub fn as_volts(self) -> f64 {
        self as u16 as f64
    }

    #[must_use]
    pub fn from_volts(volts: u16) -> Option<Self> {
        match volts {
            12 => Some(Self::Twelve),
            24 => Some(Self::TwentyFour),
            48 => Some(Self::FortyEight),
            _ => None,
        }
    }
}

impl Serialize for SystemVoltage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(*self as u16)
    }
}

impl<'de> Deserialize<'de> for SystemVoltage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let volts = u16::deserialize(deserializer)?;
        Self::from_volts(volts)
            .ok_or_else(|| de::Error::custom(format!("system voltage {volts} V is not one of 12, 24, 48")))
    }
}

/// A fully materialized design: components, their interconnecting wires,
/// and the system's nominal DC voltage (§3).
///
/// Identifiers are opaque and must be unique within the design; iteration
/// order of `components`/`wires` must not influence `validate`'s output
/// (§3, §5) beyond issue ordering itself, which is re-sorted (§5) before
/// being returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Design {
    #[serde(rename = "systemVoltage")]
    pub system_voltage: SystemVoltage,
    pub components: Vec<Component>,
    pub wires: Vec<Wire>,
}

impl Design {
    /// Validate the one structural precondition §3 states as a closed set
    /// rather than something a rule can merely warn about: components and
    /// wires are built from whatever JSON parses, so nothing here can fail,
    /// but callers constructing a `Design` programmatically (rather than
    /// from §6's JSON surface) can use this to fail fast.
    pub fn check_system_voltage(raw_volts: u16) -> Result<SystemVoltage, EngineError> {
        SystemVoltage::from_volts(raw_volts).ok_or(EngineError::InvalidSystemVoltage(raw_volts))
    }

    #[must_use]
    pub fn new(system_voltage: SystemVoltage) -> Self {
        Self {
            system_voltage,
            components: Vec::new(),
            wires: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    #[must_use]
    pub fn with_wire(mut self, wire: Wire) -> Self {
        self.wires.push(wire);
        self
    }

    /// An id -> component index built fresh per pass (§3 ownership: derived
    /// structures live only for the analysis pass that built them).
    #[must_use]
    pub fn component_index(&self) -> HashMap<&str, &Component> {
        self.components.iter().map(|c| (c.id.as_str(), c)).collect()
    }

    #[must_use]
    pub fn component_by_id(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn components_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind() == Some(kind))
    }

    /// All wires with either endpoint at `component_id`, in insertion order
    /// (§5: traversal order is the container's insertion order).
    #[must_use]
    pub fn wires_incident_to<'a>(&'a self, component_id: &'a str) -> impl Iterator<Item = &'a Wire> {
        self.wires.iter().filter(move |w| {
            w.from_component_id == component_id || w.to_component_id == component_id
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Properties;

    #[test]
    fn system_voltage_round_trips() {
        for v in [12, 24, 48] {
            assert_eq!(SystemVoltage::from_volts(v).unwrap().as_volts() as u16, v);
        }
        assert_eq!(SystemVoltage::from_volts(36), None);
    }

    #[test]
    fn component_index_finds_by_id() {
        let design = Design::new(SystemVoltage::Twelve).with_component(Component {
            id: "bat1".into(),
            component_type: "battery".into(),
            name: "House bank".into(),
            x: 0.0,
            y: 0.0,
            properties: Properties::default(),
        });
        assert!(design.component_by_id("bat1").is_some());
        assert!(design.component_by_id("missing").is_none());
    }
}
