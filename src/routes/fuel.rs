//! Fuel cost simulation page

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::budget::{
    compute_fuel_cost, format_currency, format_number, FuelCalculationInput,
    FuelCalculationResult,
};
use crate::error::Result;
use crate::AppState;

use super::{parse_field, MISSING_FIELDS_WARNING};

/// Form fields for the fuel simulation, kept as raw text like the trip form
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FuelForm {
    pub total_distance: String,
    pub fuel_economy: String,
    pub fuel_price: String,
    pub traveler_count: String,
    pub calculate: Option<String>,
}

impl Default for FuelForm {
    fn default() -> Self {
        Self {
            total_distance: "500".to_string(),
            fuel_economy: "12".to_string(),
            fuel_price: "5.99".to_string(),
            traveler_count: "2".to_string(),
            calculate: None,
        }
    }
}

impl FuelForm {
    fn to_input(&self) -> Option<FuelCalculationInput> {
        Some(FuelCalculationInput {
            total_distance: parse_field(&self.total_distance)?,
            fuel_economy: parse_field(&self.fuel_economy)?,
            fuel_price: parse_field(&self.fuel_price)?,
            traveler_count: parse_field(&self.traveler_count)?,
        })
    }
}

/// Fuel result prepared for display
pub struct FuelSummary {
    pub total_cost: String,
    pub cost_per_traveler: String,
    pub fuel_needed: String,
    pub fuel_price: String,
    pub traveler_count: i32,
}

impl From<&FuelCalculationResult> for FuelSummary {
    fn from(result: &FuelCalculationResult) -> Self {
        Self {
            total_cost: format_currency(result.total_cost),
            cost_per_traveler: format_currency(result.cost_per_traveler),
            fuel_needed: format_number(result.fuel_needed, " L"),
            fuel_price: format_currency(result.input.fuel_price),
            traveler_count: result.input.traveler_count,
        }
    }
}

#[derive(Template)]
#[template(path = "fuel.html")]
struct FuelPageTemplate {
    site_title: String,
    active: &'static str,
    form: FuelForm,
    summary: Option<FuelSummary>,
    warning: Option<String>,
}

/// Fuel simulation page
pub async fn page(
    State(state): State<AppState>,
    Query(form): Query<FuelForm>,
) -> Result<Html<String>> {
    let (summary, warning) = match (&form.calculate, form.to_input()) {
        (None, _) => (None, None),
        (Some(_), None) => {
            tracing::debug!("Fuel form has blank or non-numeric fields");
            (None, Some(MISSING_FIELDS_WARNING.to_string()))
        }
        (Some(_), Some(input)) => match compute_fuel_cost(&input) {
            Ok(result) => (Some(FuelSummary::from(&result)), None),
            Err(e) => {
                tracing::debug!("Fuel form rejected: {}", e);
                (
                    None,
                    Some("Todos os valores devem ser maiores que zero.".to_string()),
                )
            }
        },
    };

    let template = FuelPageTemplate {
        site_title: state.config.site_title.clone(),
        active: "fuel",
        form,
        summary,
        warning,
    };

    Ok(Html(template.render()?))
}
