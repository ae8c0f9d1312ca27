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

//! Data model for the Voltaic electrical analysis engine.
//!
//! This crate is the wire-format and domain-type layer: `Design`,
//! `Component`, `Wire`, the terminal catalog, and the shapes `validate`
//! and the standalone calculators return. It has no logic beyond
//! constructors, accessors, and the handful of pure formulas (gauge
//! normalization, quality score, layout efficiency) that are themselves
//! part of the data's definition rather than the analysis pipeline.
//!
//! The analysis pipeline itself — gauge tables, derating, topology
//! resolution, current propagation, and the rule engine — lives in
//! `voltaic-core`, which depends on these types.

pub mod component;
pub mod design;
pub mod error;
pub mod issue;
pub mod load;
pub mod result;
pub mod terminal;
pub mod wire;
pub mod wire_calc;

pub use component::{BatteryType, Component, ComponentKind, Properties, Role};
pub use design::{Design, SystemVoltage};
pub use error::EngineError;
pub use issue::{Category, Issue, Severity};
pub use load::{InverterDemand, LoadRequirements};
pub use result::{quality_score, Metrics, SizingStatus, ValidationResult, WireResult};
pub use terminal::{terminal_class, terminals_for, TerminalClass, TerminalSpec};
pub use wire::{normalize_gauge_string, ConductorMaterial, Gauge, Polarity, Wire};
pub use wire_calc::WireCalculation;
