//! Display strings for amounts, percentages, dates and addresses.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

const AMOUNT_DECIMALS: u32 = 3;

/// Amount with thousands separators and at most three fraction digits.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(AMOUNT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"50,000 ETH"`
pub fn format_price(value: Decimal, currency: &str) -> String {
    format!("{} {}", format_amount(value), currency)
}

/// Dollar-prefixed total used by stat tiles.
pub fn format_usd(value: Decimal) -> String {
    format!("${}", format_amount(value))
}

/// Treasury balances: `"1.5M"`, `"250.0K"`, else a grouped amount.
pub fn format_compact(value: Decimal) -> String {
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    let (scaled, suffix) = if value >= million {
        (value / million, "M")
    } else if value >= thousand {
        (value / thousand, "K")
    } else {
        return format_amount(value);
    };
    let scaled = scaled.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{scaled:.1}{suffix}")
}

/// `"65.0%"`
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `"+18.8%"`, with the sign always shown.
pub fn format_signed_percent(value: f64) -> String {
    format!("{value:+.1}%")
}

/// `"Feb 1, 2024"`
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// `"February 1, 2024"`
pub fn format_long_date(value: DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

/// `"0x742d...abcd"`. Short values are returned unchanged.
pub fn short_address(address: &str) -> String {
    match (address.get(..6), address.len().checked_sub(4)) {
        (Some(head), Some(tail_start)) if address.len() > 10 => match address.get(tail_start..) {
            Some(tail) => format!("{head}...{tail}"),
            None => address.to_string(),
        },
        _ => address.to_string(),
    }
}

/// Up to two uppercase initials for avatar fallbacks.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .collect();
    let letters: String = match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };
    letters.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_amount_grouping() {
        assert_eq!(format_amount(Decimal::from(50_000)), "50,000");
        assert_eq!(format_amount(Decimal::from(1_250_000)), "1,250,000");
        assert_eq!(format_amount(Decimal::from(999)), "999");
        assert_eq!(format_amount(Decimal::ZERO), "0");
        assert_eq!(format_amount(Decimal::from(-47_500)), "-47,500");
    }

    #[test]
    fn test_amount_fraction_digits() {
        assert_eq!(format_amount(Decimal::new(123_456_789, 4)), "12,345.679");
        assert_eq!(format_amount(Decimal::new(125_000, 4)), "12.5");
    }

    #[test]
    fn test_price_and_usd() {
        assert_eq!(format_price(Decimal::from(50_000), "ETH"), "50,000 ETH");
        assert_eq!(format_usd(Decimal::from(850_000)), "$850,000");
    }

    #[test]
    fn test_compact_balances() {
        assert_eq!(format_compact(Decimal::from(250_000)), "250.0K");
        assert_eq!(format_compact(Decimal::from(1_234_567)), "1.2M");
        assert_eq!(format_compact(Decimal::from(1_000)), "1.0K");
        assert_eq!(format_compact(Decimal::from(999)), "999");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(format_percent(65.0), "65.0%");
        assert_eq!(format_percent(63.333), "63.3%");
        assert_eq!(format_signed_percent(18.75), "+18.8%");
        assert_eq!(format_signed_percent(-2.0), "-2.0%");
    }

    #[test]
    fn test_dates() {
        let date = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(date), "Feb 1, 2024");
        assert_eq!(format_long_date(date), "February 1, 2024");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x742d35Cc6636C0532925aBc6Bc1234567890abcd"),
            "0x742d...abcd"
        );
        assert_eq!(short_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("crypto_pioneer"), "CP");
        assert_eq!(initials("NFT Collective"), "NC");
        assert_eq!(initials("alice"), "AL");
        assert_eq!(initials(""), "");
    }
}
