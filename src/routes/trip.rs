//! Full trip simulation page

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::budget::{
    compute_trip_cost, format_currency, format_percent, trip_breakdown, BudgetError,
    TripCalculationInput, TripCalculationResult,
};
use crate::error::Result;
use crate::AppState;

use super::{parse_field, MISSING_FIELDS_WARNING};

/// Form fields for the trip simulation, pre-filled with sample values.
///
/// Numbers are kept as the raw text the browser sent so a cleared field
/// can be reported on the page instead of failing the whole request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TripForm {
    pub destination: String,
    pub num_days: String,
    pub traveler_count: String,
    pub lodging_per_night: String,
    pub transport_total: String,
    pub food_per_day_per_person: String,
    pub activities_total: String,
    pub reserve_percent: String,
    /// Present when the "calculate" button was pressed
    pub calculate: Option<String>,
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            destination: "Paris".to_string(),
            num_days: "7".to_string(),
            traveler_count: "2".to_string(),
            lodging_per_night: "300".to_string(),
            transport_total: "2500".to_string(),
            food_per_day_per_person: "80".to_string(),
            activities_total: "500".to_string(),
            reserve_percent: "10".to_string(),
            calculate: None,
        }
    }
}

impl TripForm {
    /// Parse the numeric fields; `None` if any is blank or not a number.
    fn to_input(&self) -> Option<TripCalculationInput> {
        Some(TripCalculationInput {
            destination: self.destination.clone(),
            num_days: parse_field(&self.num_days)?,
            traveler_count: parse_field(&self.traveler_count)?,
            lodging_per_night: parse_field(&self.lodging_per_night)?,
            transport_total: parse_field(&self.transport_total)?,
            food_per_day_per_person: parse_field(&self.food_per_day_per_person)?,
            activities_total: parse_field(&self.activities_total)?,
            reserve_percent: parse_field(&self.reserve_percent)?,
        })
    }
}

/// A breakdown table row, already formatted
pub struct BreakdownRow {
    pub label: String,
    pub cost: String,
}

/// Trip result prepared for display
pub struct TripSummary {
    pub destination: String,
    pub grand_total: String,
    pub cost_per_traveler: String,
    pub cost_per_traveler_per_day: String,
    pub subtotal: String,
    pub reserve_percent: String,
    pub rows: Vec<BreakdownRow>,
}

impl From<&TripCalculationResult> for TripSummary {
    fn from(result: &TripCalculationResult) -> Self {
        let rows = trip_breakdown(result)
            .into_iter()
            .map(|line| BreakdownRow {
                cost: line.display_amount(),
                label: line.label,
            })
            .collect();

        Self {
            destination: result.input.destination.to_uppercase(),
            grand_total: format_currency(result.grand_total),
            cost_per_traveler: format_currency(result.cost_per_traveler),
            cost_per_traveler_per_day: format_currency(result.cost_per_traveler_per_day),
            subtotal: format_currency(result.subtotal),
            reserve_percent: format_percent(result.input.reserve_percent),
            rows,
        }
    }
}

/// Trip simulation template
#[derive(Template)]
#[template(path = "trip.html")]
struct TripPageTemplate {
    site_title: String,
    active: &'static str,
    form: TripForm,
    summary: Option<TripSummary>,
    warning: Option<String>,
}

/// Trip simulation page; runs the calculator when the form was submitted
pub async fn page(
    State(state): State<AppState>,
    Query(form): Query<TripForm>,
) -> Result<Html<String>> {
    let (summary, warning) = match (&form.calculate, form.to_input()) {
        (None, _) => (None, None),
        (Some(_), None) => {
            tracing::debug!("Trip form has blank or non-numeric fields");
            (None, Some(MISSING_FIELDS_WARNING.to_string()))
        }
        (Some(_), Some(input)) => match compute_trip_cost(&input) {
            Ok(result) => {
                tracing::debug!(
                    "Trip budget for {}: {:.2}",
                    result.input.destination,
                    result.grand_total
                );
                (Some(TripSummary::from(&result)), None)
            }
            Err(BudgetError::InvalidInput { field, .. }) => {
                tracing::debug!("Trip form rejected: {} not positive", field);
                (
                    None,
                    Some("O número de dias e de viajantes deve ser maior que zero.".to_string()),
                )
            }
        },
    };

    let template = TripPageTemplate {
        site_title: state.config.site_title.clone(),
        active: "trip",
        form,
        summary,
        warning,
    };

    Ok(Html(template.render()?))
}
