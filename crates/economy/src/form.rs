//! Coercion of dashboard text fields into calculator inputs.
//!
//! Fields are read like an integer prefix: leading whitespace and an optional
//! sign, then as many digits as follow. Anything after the digits is ignored.
//! Reward fields fall back to 0; rank fields become absent.

use crate::types::{Coins, Rank};
use std::collections::BTreeSet;

/// Signed integer prefix of `input`, or `None` when there are no digits.
fn integer_prefix(input: &str) -> Option<i128> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    // Saturate absurdly long inputs rather than failing.
    let magnitude = rest[..digits]
        .bytes()
        .fold(0i128, |acc, b| {
            acc.saturating_mul(10).saturating_add(i128::from(b - b'0'))
        });
    Some(if negative { -magnitude } else { magnitude })
}

/// Non-negative reward amount; unparsable or negative input reads as 0.
pub fn parse_coin_field(input: &str) -> Coins {
    match integer_prefix(input) {
        Some(value) if value > 0 => Coins::try_from(value).unwrap_or(Coins::MAX),
        _ => 0,
    }
}

/// Positive rank, or `None` while the field is empty or invalid.
pub fn parse_rank_field(input: &str) -> Option<Rank> {
    match integer_prefix(input) {
        Some(value) if value > 0 => Some(Rank::try_from(value).unwrap_or(Rank::MAX)),
        _ => None,
    }
}

/// Comma-separated rank list. Invalid entries are dropped, duplicates collapse.
pub fn parse_rank_list(input: &str) -> BTreeSet<Rank> {
    input.split(',').filter_map(parse_rank_field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_field() {
        assert_eq!(parse_coin_field("1500"), 1500);
        assert_eq!(parse_coin_field("  42"), 42);
        assert_eq!(parse_coin_field("+7"), 7);
        assert_eq!(parse_coin_field("12abc"), 12);
        assert_eq!(parse_coin_field("abc"), 0);
        assert_eq!(parse_coin_field(""), 0);
        assert_eq!(parse_coin_field("-5"), 0);
        assert_eq!(parse_coin_field("3.9"), 3);
    }

    #[test]
    fn test_coin_field_saturates() {
        assert_eq!(parse_coin_field("99999999999999999999999999"), Coins::MAX);
    }

    #[test]
    fn test_rank_field() {
        assert_eq!(parse_rank_field("501"), Some(501));
        assert_eq!(parse_rank_field(""), None);
        assert_eq!(parse_rank_field("0"), None);
        assert_eq!(parse_rank_field("-3"), None);
        assert_eq!(parse_rank_field("x1"), None);
    }

    #[test]
    fn test_rank_list() {
        let ranks = parse_rank_list("5, 10,15");
        assert_eq!(ranks.into_iter().collect::<Vec<_>>(), vec![5, 10, 15]);

        let messy = parse_rank_list("5,,x, 5 ,0,-2,7");
        assert_eq!(messy.into_iter().collect::<Vec<_>>(), vec![5, 7]);

        assert!(parse_rank_list("").is_empty());
    }
}
