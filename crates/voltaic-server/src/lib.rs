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

//! HTTP service exposing the Voltaic electrical analysis engine (§6
//! [AMBIENT]): `POST /validate`, `POST /size`, `GET /healthz`.

pub mod config;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;

/// Build the service's route table. Split out of `main` so integration
/// tests can bind it to an ephemeral port rather than sharing the real
/// listener.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/validate", post(handlers::validate_handler))
        .route("/size", post(handlers::size_handler))
        .route("/healthz", get(handlers::healthz_handler))
}
