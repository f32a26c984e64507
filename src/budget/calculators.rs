//! Core budget calculation functions.
//!
//! Pure functions for trip and fuel math - no I/O, no shared state.
//! Figures are plain `f64` here; rounding only happens when formatting for display.

use serde::{Deserialize, Serialize};

/// Budget calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BudgetError {
    #[error("Invalid input: {field} must be greater than zero (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Input for a fuel cost calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelCalculationInput {
    /// Distance in km
    pub total_distance: f64,
    /// Vehicle efficiency in km per litre
    pub fuel_economy: f64,
    /// Currency per litre
    pub fuel_price: f64,
    pub traveler_count: i32,
}

/// Result of fuel cost calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelCalculationResult {
    pub input: FuelCalculationInput,
    pub fuel_needed: f64,
    pub total_cost: f64,
    pub cost_per_traveler: f64,
}

/// Input for a full trip cost calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripCalculationInput {
    pub destination: String,
    pub num_days: i32,
    pub traveler_count: i32,
    /// Room price per night (whole room, not per person)
    pub lodging_per_night: f64,
    pub transport_total: f64,
    pub food_per_day_per_person: f64,
    pub activities_total: f64,
    /// Emergency reserve applied to the subtotal, as a percentage
    pub reserve_percent: f64,
}

/// Result of trip cost calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripCalculationResult {
    pub input: TripCalculationInput,
    pub lodging_total: f64,
    pub food_total: f64,
    pub subtotal: f64,
    pub reserve_amount: f64,
    pub grand_total: f64,
    pub cost_per_traveler: f64,
    pub cost_per_traveler_per_day: f64,
}

/// Reject anything that is not strictly positive, NaN included.
fn require_positive(field: &'static str, value: f64) -> Result<(), BudgetError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(BudgetError::InvalidInput { field, value })
    }
}

/// Calculate fuel volume and cost for a road trip.
///
/// # Errors
/// `BudgetError::InvalidInput` if distance, economy, price or traveler count
/// is zero or negative.
///
/// # Examples
/// ```
/// use travel_budget_web::budget::{compute_fuel_cost, FuelCalculationInput};
///
/// let result = compute_fuel_cost(&FuelCalculationInput {
///     total_distance: 600.0,
///     fuel_economy: 12.0,
///     fuel_price: 6.0,
///     traveler_count: 3,
/// })
/// .unwrap();
/// assert_eq!(result.fuel_needed, 50.0);
/// assert_eq!(result.total_cost, 300.0);
/// assert_eq!(result.cost_per_traveler, 100.0);
/// ```
pub fn compute_fuel_cost(
    input: &FuelCalculationInput,
) -> Result<FuelCalculationResult, BudgetError> {
    require_positive("total_distance", input.total_distance)?;
    require_positive("fuel_economy", input.fuel_economy)?;
    require_positive("fuel_price", input.fuel_price)?;
    require_positive("traveler_count", f64::from(input.traveler_count))?;

    let fuel_needed = input.total_distance / input.fuel_economy;
    let total_cost = fuel_needed * input.fuel_price;
    let cost_per_traveler = total_cost / f64::from(input.traveler_count);

    Ok(FuelCalculationResult {
        input: *input,
        fuel_needed,
        total_cost,
        cost_per_traveler,
    })
}

/// Calculate the full trip budget.
///
/// Only day and traveler counts are validated. Cost fields and the reserve
/// percentage are taken as given, so negative costs or a reserve above 100%
/// flow straight into the totals.
///
/// # Errors
/// `BudgetError::InvalidInput` if `num_days` or `traveler_count` is not positive.
pub fn compute_trip_cost(
    input: &TripCalculationInput,
) -> Result<TripCalculationResult, BudgetError> {
    require_positive("num_days", f64::from(input.num_days))?;
    require_positive("traveler_count", f64::from(input.traveler_count))?;

    let days = f64::from(input.num_days);
    let travelers = f64::from(input.traveler_count);

    let lodging_total = input.lodging_per_night * days;
    let food_total = input.food_per_day_per_person * days * travelers;

    let subtotal = lodging_total + input.transport_total + food_total + input.activities_total;
    let reserve_amount = subtotal * (input.reserve_percent / 100.0);
    let grand_total = subtotal + reserve_amount;

    let cost_per_traveler = grand_total / travelers;
    let cost_per_traveler_per_day = cost_per_traveler / days;

    Ok(TripCalculationResult {
        input: input.clone(),
        lodging_total,
        food_total,
        subtotal,
        reserve_amount,
        grand_total,
        cost_per_traveler,
        cost_per_traveler_per_day,
    })
}
