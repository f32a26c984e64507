//! Display formatting for budget figures.
//!
//! Brazilian locale: `.` groups thousands, `,` separates decimals.
//! This is the only place where figures get rounded.

use rust_decimal::prelude::*;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use travel_budget_web::budget::round_money;
///
/// assert_eq!(round_money(Decimal::new(25, 1), 0), Decimal::new(2, 0));
/// assert_eq!(round_money(Decimal::new(1234, 3), 2), Decimal::new(123, 2));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount as Brazilian reais, e.g. `2100.5 -> "R$ 2.100,50"`.
pub fn format_currency(value: f64) -> String {
    format!("R$ {}", format_decimal(value, 2, true))
}

/// Format a number with two decimals and a suffix, e.g. `41.666 -> "41,67 L"`.
pub fn format_number(value: f64, suffix: &str) -> String {
    format!("{}{}", format_decimal(value, 2, true), suffix)
}

/// Format a percentage with no decimals and no grouping, e.g. `1500.0 -> "1500%"`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value, 0, false))
}

/// Round `value` exactly (from its binary representation) and lay it out
/// with locale separators. Negative values keep their sign even when they
/// round to zero. Values `Decimal` can't hold (NaN, infinities, magnitudes
/// beyond ~7.9e28) fall back to plain float formatting.
fn format_decimal(value: f64, places: u32, grouped: bool) -> String {
    let Some(decimal) = Decimal::from_f64_retain(value) else {
        return format!("{:.*}", places as usize, value);
    };

    let mut rounded = round_money(decimal.abs(), places);
    rounded.rescale(places);
    let plain = rounded.to_string();

    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    if grouped {
        out.push_str(&group_thousands(int_part));
    } else {
        out.push_str(int_part);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_money(dec!(2.35), 1), dec!(2.4));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(-1.234), 2), dec!(-1.23));
    }

    // ==================== format_currency tests ====================

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(2100.5), "R$ 2.100,50");
        assert_eq!(format_currency(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(6842.0), "R$ 6.842,00");
    }

    #[test]
    fn test_format_currency_small_values() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(5.99), "R$ 5,99");
        assert_eq!(format_currency(999.999), "R$ 1.000,00");
    }

    #[test]
    fn test_format_currency_rounds_from_binary_value() {
        // 2.675 is stored as 2.67499999..., so it rounds down
        assert_eq!(format_currency(2.675), "R$ 2,67");
        assert_eq!(format_currency(249.583_333_333_333_3), "R$ 249,58");
        assert_eq!(format_currency(3421.0 / 7.0), "R$ 488,71");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1234.5), "R$ -1.234,50");
    }

    #[test]
    fn test_format_currency_keeps_sign_when_rounding_to_zero() {
        assert_eq!(format_currency(-0.001), "R$ -0,00");
        assert_eq!(format_currency(-0.0), "R$ -0,00");
        assert_eq!(format_number(-0.004, " L"), "-0,00 L");
    }

    #[test]
    fn test_format_currency_non_finite_falls_back() {
        assert_eq!(format_currency(f64::INFINITY), "R$ inf");
        assert_eq!(format_currency(f64::NAN), "R$ NaN");
    }

    // ==================== format_number / format_percent tests ====================

    #[test]
    fn test_format_number_with_suffix() {
        assert_eq!(format_number(500.0 / 12.0, " L"), "41,67 L");
        assert_eq!(format_number(12_500.0, ""), "12.500,00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10.0), "10%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(7.5), "8%");
        assert_eq!(format_percent(2.5), "2%");
    }

    #[test]
    fn test_format_percent_has_no_grouping() {
        assert_eq!(format_percent(1500.0), "1500%");
        assert_eq!(format_percent(123_456.0), "123456%");
        assert_eq!(format_percent(-25.0), "-25%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("1234567"), "1.234.567");
    }
}
