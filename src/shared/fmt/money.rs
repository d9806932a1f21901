//! Money and rate formatting.
//!
//! Amounts arrive as integer cents and rates as basis points. They stay that way
//! through the domain layer and are only converted here, at the display step:
//! cents become two-decimal dollar values, bips become decimal fractions, and both
//! are rendered in en-US conventions (`$1,500.50`, `2.50%`).
//!
//! All math uses `rust_decimal::Decimal`, so conversions are exact.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::shared::{Bips, Cents};

const CENTS_PER_DOLLAR: i64 = 100;
const BIPS_PER_UNIT: i64 = 10_000;
const DISPLAY_DECIMALS: u32 = 2;

/// Round to two decimals (half away from zero) and pin the scale to two, so
/// `to_string` always prints exactly two fractional digits.
fn fixed_two(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_DECIMALS);
    rounded
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Convert minor units to major units, rounded to two decimals.
///
/// Accepts fractional minor amounts (e.g. a commission computed as
/// `price * rate`), which is why the input is anything convertible to `Decimal`.
pub fn minor_to_major(amount_minor: impl Into<Decimal>) -> Decimal {
    fixed_two(amount_minor.into() / Decimal::from(CENTS_PER_DOLLAR))
}

/// Convert a basis-point rate to a decimal fraction (`250` → `0.025`).
pub fn bips_to_decimal(bips: impl Into<Decimal>) -> Decimal {
    bips.into() / Decimal::from(BIPS_PER_UNIT)
}

/// Render a decimal fraction as a percentage with two decimals (`0.025` → `"2.50%"`).
pub fn decimal_to_percent_string(decimal: Decimal) -> String {
    format!("{}%", fixed_two(decimal * Decimal::ONE_HUNDRED))
}

/// Render a major-unit amount as a USD currency string (`1500.5` → `"$1,500.50"`).
///
/// Negative amounts put the sign before the symbol (`-$12.34`), as en-US does.
pub fn format_currency(amount_major: Decimal) -> String {
    let rounded = fixed_two(amount_major);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = rounded.abs().to_string();
    let (integer_part, fraction_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{}${}.{}", sign, group_thousands(integer_part), fraction_part)
}

/// Shorthand for `format_currency(minor_to_major(cents))`.
pub fn format_cents(cents: Cents) -> String {
    format_currency(minor_to_major(cents))
}

/// The commission in dollars for a selling price and a basis-point rate.
pub fn commission_major(selling_price: Cents, commission: Bips) -> Decimal {
    minor_to_major(Decimal::from(selling_price) * bips_to_decimal(commission))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_to_major() {
        assert_eq!(minor_to_major(0i64), Decimal::new(0, 2));
        assert_eq!(minor_to_major(100i64), Decimal::new(100, 2));
        assert_eq!(minor_to_major(1234i64), Decimal::new(1234, 2));
        assert_eq!(minor_to_major(12345i64), Decimal::new(12345, 2));
    }

    #[test]
    fn test_minor_to_major_keeps_two_decimals() {
        assert_eq!(minor_to_major(100i64).to_string(), "1.00");
        assert_eq!(minor_to_major(0i64).to_string(), "0.00");
    }

    #[test]
    fn test_minor_to_major_rounds_fractional_cents() {
        // 0.5 cent rounds away from zero.
        assert_eq!(minor_to_major(Decimal::new(12345, 1)), Decimal::new(1235, 2));
        assert_eq!(minor_to_major(Decimal::new(12344, 1)), Decimal::new(1234, 2));
    }

    #[test]
    fn test_minor_to_major_large_values_have_no_drift() {
        assert_eq!(
            minor_to_major(999_999_999_999i64).to_string(),
            "9999999999.99"
        );
    }

    #[test]
    fn test_bips_to_decimal() {
        assert_eq!(bips_to_decimal(250u32), Decimal::new(25, 3));
        assert_eq!(bips_to_decimal(10_000u32), Decimal::ONE);
        assert_eq!(bips_to_decimal(0u32), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_to_percent_string() {
        assert_eq!(decimal_to_percent_string(Decimal::new(25, 3)), "2.50%");
        assert_eq!(decimal_to_percent_string(bips_to_decimal(250u32)), "2.50%");
        assert_eq!(decimal_to_percent_string(Decimal::ONE), "100.00%");
        assert_eq!(decimal_to_percent_string(Decimal::ZERO), "0.00%");
        assert_eq!(decimal_to_percent_string(bips_to_decimal(1u32)), "0.01%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::new(15005, 1)), "$1,500.50");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(Decimal::new(999, 2)), "$9.99");
        assert_eq!(format_currency(Decimal::new(100_000, 0)), "$100,000.00");
        assert_eq!(format_currency(Decimal::new(123_456_789, 2)), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Decimal::new(-1234, 2)), "-$12.34");
        assert_eq!(format_currency(Decimal::new(-150_050, 2)), "-$1,500.50");
        assert_eq!(format_currency(Decimal::new(-1, 3)), "$0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_commission_major() {
        let commission = commission_major(Cents::new(500_000), Bips::new(250));
        assert_eq!(commission, Decimal::new(12500, 2));
        assert_eq!(format_currency(commission), "$125.00");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(Cents::new(150_050)), "$1,500.50");
        assert_eq!(format_cents(Cents::ZERO), "$0.00");
    }
}
