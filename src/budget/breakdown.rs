//! Itemized category lines for a trip budget.

use super::calculators::TripCalculationResult;
use super::format::{format_currency, format_percent};

/// One category row of the cost breakdown table
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine {
    pub label: String,
    pub amount: f64,
}

impl BreakdownLine {
    /// Amount formatted for display
    pub fn display_amount(&self) -> String {
        format_currency(self.amount)
    }
}

/// Build the breakdown rows: lodging, transport, food, activities, reserve.
///
/// The rows always add up to the trip's grand total.
pub fn trip_breakdown(result: &TripCalculationResult) -> Vec<BreakdownLine> {
    let input = &result.input;

    vec![
        BreakdownLine {
            label: format!("Acomodação ({} noites)", input.num_days),
            amount: result.lodging_total,
        },
        BreakdownLine {
            label: "Transporte".to_string(),
            amount: input.transport_total,
        },
        BreakdownLine {
            label: format!("Alimentação ({} pessoas)", input.traveler_count),
            amount: result.food_total,
        },
        BreakdownLine {
            label: "Atividades".to_string(),
            amount: input.activities_total,
        },
        BreakdownLine {
            label: format!("Reserva ({})", format_percent(input.reserve_percent)),
            amount: result.reserve_amount,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::calculators::{compute_trip_cost, TripCalculationInput};

    fn default_trip() -> TripCalculationResult {
        compute_trip_cost(&TripCalculationInput {
            destination: "Paris".to_string(),
            num_days: 7,
            traveler_count: 2,
            lodging_per_night: 300.0,
            transport_total: 2500.0,
            food_per_day_per_person: 80.0,
            activities_total: 500.0,
            reserve_percent: 10.0,
        })
        .unwrap()
    }

    #[test]
    fn test_breakdown_labels_and_order() {
        let lines = trip_breakdown(&default_trip());
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Acomodação (7 noites)",
                "Transporte",
                "Alimentação (2 pessoas)",
                "Atividades",
                "Reserva (10%)",
            ]
        );
    }

    #[test]
    fn test_breakdown_amounts() {
        let lines = trip_breakdown(&default_trip());
        let displayed: Vec<String> = lines.iter().map(BreakdownLine::display_amount).collect();

        assert_eq!(
            displayed,
            vec!["R$ 2.100,00", "R$ 2.500,00", "R$ 1.120,00", "R$ 500,00", "R$ 622,00"]
        );
    }

    #[test]
    fn test_breakdown_reserve_label_is_not_grouped() {
        let mut result = default_trip();
        result.input.reserve_percent = 1500.0;

        let lines = trip_breakdown(&result);
        assert_eq!(lines[4].label, "Reserva (1500%)");
    }

    #[test]
    fn test_breakdown_sums_to_grand_total() {
        let result = default_trip();
        let total: f64 = trip_breakdown(&result).iter().map(|l| l.amount).sum();

        assert!((total - result.grand_total).abs() < 1e-9);
    }
}
