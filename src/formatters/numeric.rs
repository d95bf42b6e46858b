// ABOUTME: Fixed-point and plain number rendering for summaries, tables, and CSV export
// ABOUTME: Rounds exact decimal ties away from zero and renders calorie surpluses with a leading plus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Number formatting
//!
//! `to_fixed` rounds on the exact decimal value of the `f64`, so `0.25` with
//! one decimal is a tie and becomes `0.3`, while `1.005` (stored as
//! `1.00499…`) becomes `1.00` with two decimals. Values below zero keep their
//! minus sign even when they round to zero; negative zero itself is unsigned.

/// Fractional digits needed to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Largest precision `to_fixed` renders; larger requests are clamped
pub const MAX_DECIMALS: usize = 100;

/// Render `value` with exactly `decimals` fractional digits
///
/// `decimals` is clamped to [`MAX_DECIMALS`].
#[must_use]
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let kept_frac = &frac_part[..decimals.min(frac_part.len())];
    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|digit| *digit >= b'5');

    let mut digits: Vec<u8> = int_part.bytes().chain(kept_frac.bytes()).collect();
    if round_up {
        increment_decimal(&mut digits);
    }

    let int_len = digits.len() - decimals;
    let mut rendered = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.push_str(&String::from_utf8_lossy(&digits[..int_len]));
    if decimals > 0 {
        rendered.push('.');
        rendered.push_str(&String::from_utf8_lossy(&digits[int_len..]));
    }
    rendered
}

/// Add one unit in the last place to a string of ASCII digits, growing it on overflow
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Render a deficit with the surplus convention
///
/// Zero or positive deficits print plain. A negative deficit is a surplus
/// and prints as `+` followed by its magnitude.
#[must_use]
pub fn format_signed_deficit(value: f64, decimals: usize) -> String {
    if value >= 0.0 {
        to_fixed(value, decimals)
    } else {
        format!("+{}", to_fixed(value.abs(), decimals))
    }
}

/// Shortest plain rendering of a stored quantity (`1800`, `12.5`)
#[must_use]
pub fn format_plain_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// One-decimal value followed by a unit suffix (`120.5g`)
#[must_use]
pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{}{unit}", to_fixed(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn test_inexact_values_use_stored_digits() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.1, 3), "0.100");
        assert_eq!(to_fixed(1.45, 1), "1.4");
    }

    #[test]
    fn test_precision_is_clamped() {
        let rendered = to_fixed(1.0, 1200);
        assert_eq!(rendered, to_fixed(1.0, MAX_DECIMALS));
        assert_eq!(rendered.len(), 2 + MAX_DECIMALS);
        assert!(rendered.starts_with("1.000"));
        assert_eq!(to_fixed(-0.5, MAX_DECIMALS + 1).len(), 3 + MAX_DECIMALS);
    }

    #[test]
    fn test_carry_propagates_into_integer_part() {
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(999.5, 0), "1000");
        assert_eq!(to_fixed(0.0, 1), "0.0");
    }

    #[test]
    fn test_sign_handling() {
        assert_eq!(to_fixed(-0.0, 1), "0.0");
        assert_eq!(to_fixed(-0.04, 1), "-0.0");
        assert_eq!(to_fixed(-150.0, 1), "-150.0");
        assert_eq!(to_fixed(f64::NAN, 1), "NaN");
    }

    #[test]
    fn test_signed_deficit() {
        assert_eq!(format_signed_deficit(-150.0, 1), "+150.0");
        assert_eq!(format_signed_deficit(200.0, 1), "200.0");
        assert_eq!(format_signed_deficit(0.0, 1), "0.0");
        assert_eq!(format_signed_deficit(-349.5, 0), "+350");
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(format_plain_number(1800.0), "1800");
        assert_eq!(format_plain_number(12.5), "12.5");
        assert_eq!(format_plain_number(-0.0), "0");
        assert_eq!(format_with_unit(120.25, "g"), "120.3g");
    }
}
