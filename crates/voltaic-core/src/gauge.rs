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

//! Gauge Tables (§4.1): the static, authoritative per-gauge resistance and
//! three-temperature ampacity table. All lookups here are array indexing
//! against [`Gauge::ASCENDING`] (§9: "avoid a dynamic map"), never a
//! `HashMap`.

use voltaic_types::Gauge;

/// Insulation temperature rating a conductor's ampacity is looked up at
/// (§4.1, §4.2 `insulation` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insulation {
    C60,
    C75,
    C90,
}

impl Insulation {
    #[must_use]
    pub fn from_celsius(c: u16) -> Self {
        match c {
            60 => Self::C60,
            90 => Self::C90,
            _ => Self::C75,
        }
    }
}

/// One gauge's static row: resistance at 75°C copper, and ampacity at the
/// three insulation ratings (§4.1).
#[derive(Debug, Clone, Copy, PartialEq)]
struct GaugeRow {
    resistance_ohms_per_kft: f64,
    ampacity_60c: f64,
    ampacity_75c: f64,
    ampacity_90c: f64,
}

/// Indexed in lockstep with [`Gauge::ASCENDING`]; values are authoritative
/// per §4.1 and must not be recomputed or approximated.
const TABLE: [GaugeRow; 14] = [
    GaugeRow { resistance_ohms_per_kft: 6.385, ampacity_60c: 10.0, ampacity_75c: 14.0, ampacity_90c: 16.0 }, // 18
    GaugeRow { resistance_ohms_per_kft: 4.016, ampacity_60c: 13.0, ampacity_75c: 18.0, ampacity_90c: 18.0 }, // 16
    GaugeRow { resistance_ohms_per_kft: 2.525, ampacity_60c: 15.0, ampacity_75c: 20.0, ampacity_90c: 25.0 }, // 14
    GaugeRow { resistance_ohms_per_kft: 1.588, ampacity_60c: 20.0, ampacity_75c: 25.0, ampacity_90c: 30.0 }, // 12
    GaugeRow { resistance_ohms_per_kft: 0.9989, ampacity_60c: 30.0, ampacity_75c: 35.0, ampacity_90c: 40.0 }, // 10
    GaugeRow { resistance_ohms_per_kft: 0.6282, ampacity_60c: 40.0, ampacity_75c: 50.0, ampacity_90c: 55.0 }, // 8
    GaugeRow { resistance_ohms_per_kft: 0.3951, ampacity_60c: 55.0, ampacity_75c: 65.0, ampacity_90c: 75.0 }, // 6
    GaugeRow { resistance_ohms_per_kft: 0.2485, ampacity_60c: 70.0, ampacity_75c: 85.0, ampacity_90c: 95.0 }, // 4
    GaugeRow { resistance_ohms_per_kft: 0.1563, ampacity_60c: 95.0, ampacity_75c: 115.0, ampacity_90c: 130.0 }, // 2
    GaugeRow { resistance_ohms_per_kft: 0.1240, ampacity_60c: 110.0, ampacity_75c: 130.0, ampacity_90c: 150.0 }, // 1
    GaugeRow { resistance_ohms_per_kft: 0.0983, ampacity_60c: 125.0, ampacity_75c: 150.0, ampacity_90c: 170.0 }, // 1/0
    GaugeRow { resistance_ohms_per_kft: 0.0779, ampacity_60c: 145.0, ampacity_75c: 175.0, ampacity_90c: 195.0 }, // 2/0
    GaugeRow { resistance_ohms_per_kft: 0.0618, ampacity_60c: 165.0, ampacity_75c: 200.0, ampacity_90c: 225.0 }, // 3/0
    GaugeRow { resistance_ohms_per_kft: 0.0490, ampacity_60c: 195.0, ampacity_75c: 230.0, ampacity_90c: 260.0 }, // 4/0
];

fn row(gauge: Gauge) -> &'static GaugeRow {
    let idx = Gauge::ASCENDING
        .iter()
        .position(|g| *g == gauge)
        .expect("Gauge::ASCENDING is exhaustive over Gauge");
    &TABLE[idx]
}

/// Resistance at 75°C copper, ohms per 1000 ft (§4.1).
#[must_use]
pub fn resistance_ohms_per_kft(gauge: Gauge) -> f64 {
    row(gauge).resistance_ohms_per_kft
}

/// Base (un-derated) ampacity at the given insulation rating (§4.1).
#[must_use]
pub fn base_ampacity(gauge: Gauge, insulation: Insulation) -> f64 {
    let r = row(gauge);
    match insulation {
        Insulation::C60 => r.ampacity_60c,
        Insulation::C75 => r.ampacity_75c,
        Insulation::C90 => r.ampacity_90c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copper_75c_values_match_spec_table() {
        assert_eq!(base_ampacity(Gauge::G18, Insulation::C75), 14.0);
        assert_eq!(base_ampacity(Gauge::G10, Insulation::C75), 35.0);
        assert_eq!(base_ampacity(Gauge::G4_0, Insulation::C75), 230.0);
    }

    #[test]
    fn resistance_decreases_as_gauge_grows() {
        assert!(resistance_ohms_per_kft(Gauge::G18) > resistance_ohms_per_kft(Gauge::G4_0));
    }

    #[test]
    fn ampacity_increases_with_insulation_rating() {
        for gauge in Gauge::ASCENDING {
            assert!(base_ampacity(gauge, Insulation::C60) <= base_ampacity(gauge, Insulation::C75));
            assert!(base_ampacity(gauge, Insulation::C75) <= base_ampacity(gauge, Insulation::C90));
        }
    }
}
