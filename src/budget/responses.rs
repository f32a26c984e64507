//! Response DTOs for budget API endpoints.

use serde::Serialize;

use super::breakdown::{trip_breakdown, BreakdownLine};
use super::calculators::{BudgetError, FuelCalculationResult, TripCalculationResult};
use super::format::{format_currency, format_number, format_percent};

/// Money value for JSON responses: raw figure plus its display string
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    pub amount: f64,
    pub display: String,
}

impl From<f64> for MoneyResponse {
    fn from(amount: f64) -> Self {
        Self {
            amount,
            display: format_currency(amount),
        }
    }
}

/// Response for fuel cost calculation
#[derive(Debug, Serialize)]
pub struct FuelCostResponse {
    pub total_distance: f64,
    pub fuel_economy: f64,
    pub fuel_price: MoneyResponse,
    pub traveler_count: i32,
    pub fuel_needed: f64,
    pub fuel_needed_display: String,
    pub total_cost: MoneyResponse,
    pub cost_per_traveler: MoneyResponse,
}

impl From<FuelCalculationResult> for FuelCostResponse {
    fn from(result: FuelCalculationResult) -> Self {
        Self {
            total_distance: result.input.total_distance,
            fuel_economy: result.input.fuel_economy,
            fuel_price: result.input.fuel_price.into(),
            traveler_count: result.input.traveler_count,
            fuel_needed: result.fuel_needed,
            fuel_needed_display: format_number(result.fuel_needed, " L"),
            total_cost: result.total_cost.into(),
            cost_per_traveler: result.cost_per_traveler.into(),
        }
    }
}

/// A breakdown row in the trip response
#[derive(Debug, Serialize)]
pub struct BreakdownLineResponse {
    pub label: String,
    pub cost: MoneyResponse,
}

impl From<BreakdownLine> for BreakdownLineResponse {
    fn from(line: BreakdownLine) -> Self {
        Self {
            cost: line.amount.into(),
            label: line.label,
        }
    }
}

/// Response for trip cost calculation
#[derive(Debug, Serialize)]
pub struct TripCostResponse {
    pub destination: String,
    pub num_days: i32,
    pub traveler_count: i32,
    pub reserve_percent: f64,
    pub reserve_percent_display: String,
    pub lodging_total: MoneyResponse,
    pub transport_total: MoneyResponse,
    pub food_total: MoneyResponse,
    pub activities_total: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub reserve_amount: MoneyResponse,
    pub grand_total: MoneyResponse,
    pub cost_per_traveler: MoneyResponse,
    pub cost_per_traveler_per_day: MoneyResponse,
    pub breakdown: Vec<BreakdownLineResponse>,
}

impl From<TripCalculationResult> for TripCostResponse {
    fn from(result: TripCalculationResult) -> Self {
        let breakdown = trip_breakdown(&result)
            .into_iter()
            .map(BreakdownLineResponse::from)
            .collect();
        let input = result.input;

        Self {
            destination: input.destination,
            num_days: input.num_days,
            traveler_count: input.traveler_count,
            reserve_percent: input.reserve_percent,
            reserve_percent_display: format_percent(input.reserve_percent),
            lodging_total: result.lodging_total.into(),
            transport_total: input.transport_total.into(),
            food_total: result.food_total.into(),
            activities_total: input.activities_total.into(),
            subtotal: result.subtotal.into(),
            reserve_amount: result.reserve_amount.into(),
            grand_total: result.grand_total.into(),
            cost_per_traveler: result.cost_per_traveler.into(),
            cost_per_traveler_per_day: result.cost_per_traveler_per_day.into(),
            breakdown,
        }
    }
}

/// Generic budget error response
#[derive(Debug, Serialize)]
pub struct BudgetErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&BudgetError> for BudgetErrorResponse {
    fn from(err: &BudgetError) -> Self {
        match err {
            BudgetError::InvalidInput { field, value } => Self {
                error_type: "invalid_input".to_string(),
                message: err.to_string(),
                details: Some(serde_json::json!({ "field": field, "value": value })),
            },
        }
    }
}
