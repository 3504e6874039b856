//! Pure number predicates and query-parameter parsing.
//!
//! All predicates are total over `i64`. Intermediate sums are carried in
//! `u128` so no input can overflow.

use crate::domain::model::Property;
use crate::utils::error::{ClassifyError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Local half of a classification: everything except the fun fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberProfile {
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
}

impl NumberProfile {
    /// Evaluate every predicate for `n`.
    ///
    /// `is_prime` and `is_perfect` are trial division up to sqrt(n): a few
    /// microseconds for everyday inputs, but on the order of 10^9 steps for
    /// values near `i64::MAX`. Run this off the async executor.
    pub fn of(n: i64) -> Self {
        Self {
            is_prime: is_prime(n),
            is_perfect: is_perfect(n),
            properties: properties(n),
            digit_sum: digit_sum(n),
        }
    }
}

fn numeric_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$")
            .expect("numeric literal pattern is valid")
    })
}

/// Parse the raw `number` query value.
///
/// Accepts a decimal literal with optional sign, fraction and exponent
/// (`"371"`, `"4.0"`, `"1e3"`) as long as its exact value is an integer
/// that fits in an `i64`.
pub fn parse_number(raw: Option<&str>) -> Result<i64> {
    let invalid = || ClassifyError::InvalidNumber {
        raw: raw.map(str::to_string),
    };

    let trimmed = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    parse_integral(trimmed).ok_or_else(invalid)
}

/// Exact value of a decimal literal. `None` when it has a non-zero
/// fractional part or falls outside `i64`.
fn parse_integral(literal: &str) -> Option<i64> {
    let caps = numeric_literal().captures(literal)?;
    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
    let int_digits = caps.get(2).map_or("", |m| m.as_str());
    let frac_digits = caps.get(3).map_or("", |m| m.as_str());
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let digits: Vec<u8> = int_digits
        .bytes()
        .chain(frac_digits.bytes())
        .map(|b| b - b'0')
        .collect();
    let Some(first_nonzero) = digits.iter().position(|&d| d != 0) else {
        return Some(0);
    };
    let digits = &digits[first_nonzero..];

    let exponent: i64 = match caps.get(4) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    // Index of the decimal point within `digits` once the exponent is applied.
    let point = (int_digits.len() as i64 - first_nonzero as i64).checked_add(exponent)?;
    if point <= 0 {
        return None;
    }
    // i64 has at most 19 digits.
    let point = usize::try_from(point).ok().filter(|&p| p <= 20)?;

    let (whole, fraction) = digits.split_at(point.min(digits.len()));
    if fraction.iter().any(|&d| d != 0) {
        return None;
    }

    let trailing_zeros = point - whole.len();
    let mut magnitude: i128 = 0;
    for &d in whole.iter().chain(std::iter::repeat(&0).take(trailing_zeros)) {
        magnitude = magnitude.checked_mul(10)?.checked_add(d as i128)?;
    }

    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let n = n as u64;
    let mut i = 3u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

pub fn is_perfect(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let n = n as u64;
    // Divisors come in pairs (i, n / i); walking to sqrt(n) visits all of them.
    let mut sum: u128 = 1;
    let mut i = 2u64;
    while i <= n / i {
        if n % i == 0 {
            sum += i as u128;
            let pair = n / i;
            if pair != i {
                sum += pair as u128;
            }
        }
        i += 1;
    }
    sum == n as u128
}

/// Decimal digits of `|n|`, most significant first.
pub fn digits(n: i64) -> Vec<u32> {
    n.unsigned_abs()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let digits = digits(n);
    let power = digits.len() as u32;
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();
    sum == n as u128
}

/// `armstrong` (when it applies) followed by the parity tag.
pub fn properties(n: i64) -> Vec<Property> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push(Property::Armstrong);
    }
    if n % 2 == 0 {
        properties.push(Property::Even);
    } else {
        properties.push(Property::Odd);
    }
    properties
}

pub fn digit_sum(n: i64) -> u64 {
    digits(n).iter().map(|&d| d as u64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_is_prime(n: i64) -> bool {
        n > 1 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn test_is_prime_matches_trial_division() {
        for n in -10..2000 {
            assert_eq!(is_prime(n), naive_is_prime(n), "n = {}", n);
        }
    }

    #[test]
    fn test_is_prime_large_values() {
        assert!(is_prime(2_147_483_647));
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(i64::MAX));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_is_perfect() {
        for n in -5..28 {
            assert_eq!(is_perfect(n), n == 6, "n = {}", n);
        }
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(is_perfect(8128));
        assert!(is_perfect(33_550_336));
        assert!(!is_perfect(27));
        assert!(!is_perfect(-6));
    }

    #[test]
    fn test_is_armstrong() {
        assert!(is_armstrong(153));
        assert!(is_armstrong(370));
        assert!(is_armstrong(371));
        assert!(is_armstrong(407));
        assert!(is_armstrong(9474));
        assert!(is_armstrong(0));
        assert!(is_armstrong(7));
        assert!(!is_armstrong(123));
        assert!(!is_armstrong(10));
        assert!(!is_armstrong(-153));
        assert!(!is_armstrong(i64::MAX));
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(371), 11);
        assert_eq!(digit_sum(-371), 11);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(i64::MIN), 89);
    }

    #[test]
    fn test_properties() {
        assert_eq!(properties(4), vec![Property::Even]);
        assert_eq!(properties(371), vec![Property::Armstrong, Property::Odd]);
        assert_eq!(properties(-3), vec![Property::Odd]);
        assert_eq!(properties(0), vec![Property::Armstrong, Property::Even]);
    }

    #[test]
    fn test_number_profile() {
        let profile = NumberProfile::of(28);
        assert!(!profile.is_prime);
        assert!(profile.is_perfect);
        assert_eq!(profile.properties, vec![Property::Even]);
        assert_eq!(profile.digit_sum, 10);
    }

    #[test]
    fn test_parse_number_accepts_integers() {
        assert_eq!(parse_number(Some("371")).unwrap(), 371);
        assert_eq!(parse_number(Some("-42")).unwrap(), -42);
        assert_eq!(parse_number(Some("+7")).unwrap(), 7);
        assert_eq!(parse_number(Some(" 12 ")).unwrap(), 12);
        assert_eq!(parse_number(Some("4.0")).unwrap(), 4);
        assert_eq!(parse_number(Some("1e3")).unwrap(), 1000);
        assert_eq!(parse_number(Some("9223372036854775807")).unwrap(), i64::MAX);
        assert_eq!(parse_number(Some("-9223372036854775808")).unwrap(), i64::MIN);
        assert_eq!(parse_number(Some("12345678901234567.0")).unwrap(), 12_345_678_901_234_567);
        assert_eq!(parse_number(Some("9223372036854775807.000")).unwrap(), i64::MAX);
        assert_eq!(parse_number(Some("150e-1")).unwrap(), 15);
        assert_eq!(parse_number(Some("1.5E1")).unwrap(), 15);
        assert_eq!(parse_number(Some("4.")).unwrap(), 4);
        assert_eq!(parse_number(Some("-0.0")).unwrap(), 0);
        assert_eq!(parse_number(Some("0e99999999999999999999")).unwrap(), 0);
    }

    #[test]
    fn test_parse_number_rejects_invalid_input() {
        for raw in [
            "abc",
            "4.5",
            "4.0000000000000001",
            "0.5",
            ".5",
            "15e-1",
            "",
            "   ",
            ".",
            "1e",
            "NaN",
            "inf",
            "1e30",
            "12abc",
            "0x1A",
            "1,2",
            "99999999999999999999",
            "9223372036854775808.0",
            "1e-99999999999999999999",
            "\u{0663}",
        ] {
            match parse_number(Some(raw)) {
                Err(ClassifyError::InvalidNumber { raw: echoed }) => {
                    assert_eq!(echoed.as_deref(), Some(raw));
                }
                other => panic!("expected InvalidNumber for {:?}, got {:?}", raw, other),
            }
        }

        assert!(matches!(
            parse_number(None),
            Err(ClassifyError::InvalidNumber { raw: None })
        ));
    }
}
