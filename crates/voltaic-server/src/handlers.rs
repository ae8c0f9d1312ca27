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

//! Request handlers for `POST /validate`, `POST /size`, and `GET /healthz`
//! (§6 [AMBIENT]).

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use voltaic_core::gauge::Insulation;
use voltaic_core::{calculate_wire_size, validate, SizingInput};
use voltaic_types::{ConductorMaterial, Design, ValidationResult, WireCalculation};

/// `POST /validate`: a structurally invalid body never reaches this
/// handler (axum's `Json` extractor rejects it with 422/400 first, §6); a
/// structurally valid `Design` the rule engine flags still returns 200 with
/// `valid: false` (§7: "a design with electrical mistakes is still a valid
/// `Result`").
#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn validate_handler(Json(design): Json<Design>) -> Json<ValidationResult> {
    let result = validate(&design);
    info!(valid = result.valid, score = result.score, "validated design");
    Json(result)
}

/// Argument tuple for `POST /size`, mirroring `calculateWireSize`'s
/// documented defaults (§6).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRequest {
    pub current_a: f64,
    pub length_ft: f64,
    pub voltage_v: f64,
    #[serde(default)]
    pub material: ConductorMaterial,
    #[serde(default = "default_temperature_c")]
    pub temperature_c: f64,
    #[serde(default = "default_insulation")]
    pub insulation: u16,
    #[serde(default = "default_bundling_factor")]
    pub bundling_factor: f64,
    #[serde(default = "default_max_drop_pct")]
    pub max_drop_pct: f64,
}

fn default_temperature_c() -> f64 {
    30.0
}

fn default_insulation() -> u16 {
    75
}

fn default_bundling_factor() -> f64 {
    1.0
}

fn default_max_drop_pct() -> f64 {
    3.0
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn size_handler(Json(request): Json<SizeRequest>) -> Json<WireCalculation> {
    let input = SizingInput {
        current_a: request.current_a,
        length_ft: request.length_ft,
        reference_voltage_v: request.voltage_v,
        temperature_c: request.temperature_c,
        material: request.material,
        insulation: Insulation::from_celsius(request.insulation),
        bundling_factor: request.bundling_factor,
        max_drop_pct: request.max_drop_pct,
    };
    Json(calculate_wire_size(input))
}

/// `GET /healthz`: liveness probe (§6 [AMBIENT]).
#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
