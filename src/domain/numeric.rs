//! Text <-> number conversions for the calculator form.
//!
//! Every field is free-form text. Anything that is not an ASCII digit is
//! ignored, so pasted values like `"1,234"` or `"12,000,000 N"` still parse.

/// Parses the digits of `raw` into an amount. Text without digits is `0`;
/// values too large for `u64` saturate.
pub fn parse_amount(raw: &str) -> u64 {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0_u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}

/// Re-renders a field while the user types. Returns an empty string when
/// there are no digits so the input can show its placeholder.
pub fn format_for_editing(raw: &str) -> String {
    if !raw.bytes().any(|b| b.is_ascii_digit()) {
        return String::new();
    }
    group_digits(&parse_amount(raw).to_string())
}

/// Formats a read-only money figure. Missing or non-finite values are `"0"`.
pub fn format_money(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = v.round();
            if rounded.abs() < 1.0 {
                return "0".to_string();
            }
            let grouped = group_digits(&format!("{:.0}", rounded.abs()));
            if rounded < 0.0 {
                format!("-{grouped}")
            } else {
                grouped
            }
        }
        _ => "0".to_string(),
    }
}

/// Exact integer variant of [`format_money`].
pub fn format_grouped(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Two-decimal percentage. Non-finite input renders as `0.00%`.
pub fn format_percent(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.2}%")
}

fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_handles_empty_and_separators() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("0"), 0);
        assert_eq!(parse_amount("1,234"), 1234);
        assert_eq!(parse_amount("12,000,000"), 12_000_000);
        assert_eq!(parse_amount("   "), 0);
    }

    #[test]
    fn parse_amount_strips_every_non_digit() {
        assert_eq!(parse_amount("abc123,456def"), 123_456);
        assert_eq!(parse_amount("-42"), 42);
        assert_eq!(parse_amount("1.5"), 15);
        assert_eq!(parse_amount("no digits here"), 0);
    }

    #[test]
    fn parse_amount_saturates_on_overflow() {
        assert_eq!(parse_amount("99999999999999999999999999"), u64::MAX);
    }

    #[test]
    fn default_prices_parse() {
        assert_eq!(parse_amount("6,000"), 6_000);
        assert_eq!(parse_amount("800,000"), 800_000);
        assert_eq!(parse_amount("28,000"), 28_000);
    }

    #[test]
    fn format_for_editing_groups_and_normalizes() {
        assert_eq!(format_for_editing(""), "");
        assert_eq!(format_for_editing("abc"), "");
        assert_eq!(format_for_editing("1000000"), "1,000,000");
        assert_eq!(format_for_editing("1,000,000"), "1,000,000");
        assert_eq!(format_for_editing("0001234"), "1,234");
        assert_eq!(format_for_editing("000"), "0");
        assert_eq!(format_for_editing("999"), "999");
    }

    #[test]
    fn format_for_editing_is_idempotent() {
        for input in ["", "7", "12a34", "0001234", "98765432100", "1,2,3,4"] {
            let once = format_for_editing(input);
            assert_eq!(format_for_editing(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn editing_format_survives_parsing() {
        for input in ["2500000", "0001234", "x9y8z7", "1,000"] {
            assert_eq!(parse_amount(&format_for_editing(input)), parse_amount(input));
        }
    }

    #[test]
    fn format_money_defaults_to_zero() {
        assert_eq!(format_money(Some(0.0)), "0");
        assert_eq!(format_money(None), "0");
        assert_eq!(format_money(Some(f64::NAN)), "0");
        assert_eq!(format_money(Some(f64::INFINITY)), "0");
    }

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(Some(1_200_000.0)), "1,200,000");
        assert_eq!(format_money(Some(999.4)), "999");
        assert_eq!(format_money(Some(-3_940_000.0)), "-3,940,000");
        assert_eq!(format_money(Some(-0.2)), "0");
    }

    #[test]
    fn format_grouped_keeps_sign() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(8_060_000), "8,060,000");
        assert_eq!(format_grouped(-1_000), "-1,000");
        assert_eq!(format_grouped(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn format_percent_rounds_and_guards() {
        assert_eq!(format_percent(27.833_333), "27.83%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(f64::NAN), "0.00%");
        assert_eq!(format_percent(-12.5), "-12.50%");
    }
}
