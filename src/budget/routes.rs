//! JSON endpoints for the budget calculators.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::AppState;

use super::calculators::{compute_fuel_cost, compute_trip_cost, BudgetError};
use super::requests::{CalculateFuelCostRequest, CalculateTripCostRequest};
use super::responses::{BudgetErrorResponse, FuelCostResponse, TripCostResponse};

/// Budget API routes, mounted under `/api/budget`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fuel", post(calculate_fuel_cost))
        .route("/trip", post(calculate_trip_cost))
}

impl IntoResponse for BudgetError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected budget input: {}", self);
        let body = BudgetErrorResponse::from(&self);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

async fn calculate_fuel_cost(
    Json(req): Json<CalculateFuelCostRequest>,
) -> Result<Json<FuelCostResponse>, BudgetError> {
    let result = compute_fuel_cost(&req.into())?;
    tracing::debug!(
        "Fuel cost: {:.2} L, total {:.2}",
        result.fuel_needed,
        result.total_cost
    );
    Ok(Json(result.into()))
}

async fn calculate_trip_cost(
    Json(req): Json<CalculateTripCostRequest>,
) -> Result<Json<TripCostResponse>, BudgetError> {
    let result = compute_trip_cost(&req.into())?;
    tracing::debug!(
        "Trip cost for {}: grand total {:.2}",
        result.input.destination,
        result.grand_total
    );
    Ok(Json(result.into()))
}
