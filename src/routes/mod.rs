//! Page route handlers

pub mod fuel;
pub mod trip;

use axum::{response::Redirect, Json};
use serde::Serialize;
use std::str::FromStr;

use crate::error::AppError;

/// Shown when a submitted form has a blank or non-numeric field
const MISSING_FIELDS_WARNING: &str = "Preencha todos os campos com números válidos.";

/// Parse a submitted form value, ignoring surrounding whitespace.
fn parse_field<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

/// Homepage: the trip simulation is the default mode
pub async fn home() -> Redirect {
    Redirect::to("/trip")
}

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
