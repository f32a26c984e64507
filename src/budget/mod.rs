//! Budget engine module.
//!
//! Trip and fuel cost calculators, display formatting, and the JSON API
//! that exposes them.

pub mod breakdown;
pub mod calculators;
pub mod format;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use breakdown::{trip_breakdown, BreakdownLine};
pub use calculators::{
    compute_fuel_cost, compute_trip_cost, BudgetError, FuelCalculationInput,
    FuelCalculationResult, TripCalculationInput, TripCalculationResult,
};
pub use format::{format_currency, format_number, format_percent, round_money};
pub use routes::router;
