//! Request DTOs for budget API endpoints.

use serde::Deserialize;

use super::calculators::{FuelCalculationInput, TripCalculationInput};

/// Request to calculate fuel cost
#[derive(Debug, Deserialize)]
pub struct CalculateFuelCostRequest {
    pub total_distance: f64,
    pub fuel_economy: f64,
    pub fuel_price: f64,
    pub traveler_count: i32,
}

impl From<CalculateFuelCostRequest> for FuelCalculationInput {
    fn from(req: CalculateFuelCostRequest) -> Self {
        Self {
            total_distance: req.total_distance,
            fuel_economy: req.fuel_economy,
            fuel_price: req.fuel_price,
            traveler_count: req.traveler_count,
        }
    }
}

/// Request to calculate a full trip budget.
///
/// Every figure is required, as for the fuel request; only the destination
/// label may be left out.
#[derive(Debug, Deserialize)]
pub struct CalculateTripCostRequest {
    #[serde(default)]
    pub destination: String,
    pub num_days: i32,
    pub traveler_count: i32,
    pub lodging_per_night: f64,
    pub transport_total: f64,
    pub food_per_day_per_person: f64,
    pub activities_total: f64,
    pub reserve_percent: f64,
}

impl From<CalculateTripCostRequest> for TripCalculationInput {
    fn from(req: CalculateTripCostRequest) -> Self {
        Self {
            destination: req.destination,
            num_days: req.num_days,
            traveler_count: req.traveler_count,
            lodging_per_night: req.lodging_per_night,
            transport_total: req.transport_total,
            food_per_day_per_person: req.food_per_day_per_person,
            activities_total: req.activities_total,
            reserve_percent: req.reserve_percent,
        }
    }
}
