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

//! Wires and conductor gauge (§3, §4.1, §9).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Electrical polarity/role a wire carries (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Ground,
    Hot,
    Neutral,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Ground => "ground",
            Self::Hot => "hot",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Conductor material (§3); aluminum is derated relative to copper (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConductorMaterial {
    #[default]
    Copper,
    Aluminum,
}

/// The closed, ordered set of standard conductor sizes (§4.1), smallest to
/// largest. Lookups against this table are array indexing, never a map
/// (§9: "avoid a dynamic map").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gauge {
    #[serde(rename = "18")]
    G18,
    #[serde(rename = "16")]
    G16,
    #[serde(rename = "14")]
    G14,
    #[serde(rename = "12")]
    G12,
    #[serde(rename = "10")]
    G10,
    #[serde(rename = "8")]
    G8,
    #[serde(rename = "6")]
    G6,
    #[serde(rename = "4")]
    G4,
    #[serde(rename = "2")]
    G2,
    #[serde(rename = "1")]
    G1,
    #[serde(rename = "1/0")]
    G1_0,
    #[serde(rename = "2/0")]
    G2_0,
    #[serde(rename = "3/0")]
    G3_0,
    #[serde(rename = "4/0")]
    G4_0,
}

impl Gauge {
    /// Ascending order, smallest conductor first — the order §4.2's sizing
    /// search iterates in.
    pub const ASCENDING: [Gauge; 14] = [
        Gauge::G18,
        Gauge::G16,
        Gauge::G14,
        Gauge::G12,
        Gauge::G10,
        Gauge::G8,
        Gauge::G6,
        Gauge::G4,
        Gauge::G2,
        Gauge::G1,
        Gauge::G1_0,
        Gauge::G2_0,
        Gauge::G3_0,
        Gauge::G4_0,
    ];

    /// The largest standard size; returned by §4.2's sizing search when
    /// nothing qualifies.
    pub const LARGEST: Gauge = Gauge::G4_0;

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::G18 => "18",
            Self::G16 => "16",
            Self::G14 => "14",
            Self::G12 => "12",
            Self::G10 => "10",
            Self::G8 => "8",
            Self::G6 => "6",
            Self::G4 => "4",
            Self::G2 => "2",
            Self::G1 => "1",
            Self::G1_0 => "1/0",
            Self::G2_0 => "2/0",
            Self::G3_0 => "3/0",
            Self::G4_0 => "4/0",
        }
    }

    /// Parse a gauge string, accepting the normalization forms §9 lists:
    /// `"10"`, `"10 AWG"`, `"1/0"`, `"1/0 AWG"` (case-insensitive,
    /// collapsing a duplicated `" AWG AWG"` suffix first per W2).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_gauge_string(raw);
        Self::ASCENDING.into_iter().find(|g| g.as_str() == normalized)
    }

    #[must_use]
    pub fn next_larger(self) -> Option<Self> {
        let idx = Self::ASCENDING.iter().position(|g| *g == self)?;
        Self::ASCENDING.get(idx + 1).copied()
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AWG", self.as_str())
    }
}

/// Canonicalize a raw gauge string per W2: trim whitespace, drop a
/// case-insensitive `"AWG"` suffix (collapsing a duplicated
/// `" AWG AWG"` first), uppercase is irrelevant since gauges are numeric
/// or fraction strings.
#[must_use]
pub fn normalize_gauge_string(raw: &str) -> String {
    let mut s = raw.trim().to_owned();
    loop {
        let lower = s.to_ascii_lowercase();
        if let Some(stripped) = lower.strip_suffix("awg") {
            let cut = stripped.trim_end();
            s = s[..cut.len()].trim_end().to_owned();
        } else {
            break;
        }
    }
    s
}

/// A conductor connecting two component terminals (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wire {
    pub id: String,
    pub from_component_id: String,
    pub from_terminal: String,
    pub to_component_id: String,
    pub to_terminal: String,
    pub polarity: Polarity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gauge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<f64>,
    #[serde(default)]
    pub conductor_material: ConductorMaterial,
}

impl Wire {
    #[must_use]
    pub fn gauge_parsed(&self) -> Option<Gauge> {
        self.gauge.as_deref().and_then(Gauge::parse)
    }

    /// Does `self` share both endpoints and polarity with `other`, making
    /// the pair a sanctioned parallel-conductor multi-edge (§3)?
    #[must_use]
    pub fn is_parallel_to(&self, other: &Wire) -> bool {
        self.id != other.id
            && self.polarity == other.polarity
            && ((self.from_component_id == other.from_component_id
                && self.from_terminal == other.from_terminal
                && self.to_component_id == other.to_component_id
                && self.to_terminal == other.to_terminal)
                || (self.from_component_id == other.to_component_id
                    && self.from_terminal == other.to_terminal
                    && self.to_component_id == other.from_component_id
                    && self.to_terminal == other.from_terminal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_parses_bare_and_awg_suffixed() {
        assert_eq!(Gauge::parse("10"), Some(Gauge::G10));
        assert_eq!(Gauge::parse("10 AWG"), Some(Gauge::G10));
        assert_eq!(Gauge::parse("1/0"), Some(Gauge::G1_0));
        assert_eq!(Gauge::parse("1/0 AWG"), Some(Gauge::G1_0));
    }

    #[test]
    fn gauge_parse_collapses_duplicated_awg_suffix() {
        assert_eq!(Gauge::parse("10 AWG AWG"), Some(Gauge::G10));
    }

    #[test]
    fn gauge_parse_rejects_unknown() {
        assert_eq!(Gauge::parse("7"), None);
    }

    #[test]
    fn ascending_is_smallest_to_largest() {
        assert_eq!(Gauge::ASCENDING[0], Gauge::G18);
        assert_eq!(*Gauge::ASCENDING.last().unwrap(), Gauge::G4_0);
    }

    #[test]
    fn parallel_detection_is_symmetric_and_polarity_specific() {
        let a = Wire {
            id: "w1".into(),
            from_component_id: "bat".into(),
            from_terminal: "positive".into(),
            to_component_id: "bus".into(),
            to_terminal: "terminal-1".into(),
            polarity: Polarity::Positive,
            gauge: None,
            length_ft: None,
            conductor_material: ConductorMaterial::Copper,
        };
        let mut b = a.clone();
        b.id = "w2".into();
        assert!(a.is_parallel_to(&b));
        assert!(b.is_parallel_to(&a));

        let mut c = a.clone();
        c.id = "w3".into();
        c.polarity = Polarity::Negative;
        assert!(!a.is_parallel_to(&c));
    }
}
