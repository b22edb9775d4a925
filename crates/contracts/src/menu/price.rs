//! Price rendering: German decimal comma, trailing currency symbol.

use super::model::Price;

/// `7.5` -> "7,50 €", `"ab 7,90 €"` -> verbatim, anything else -> "".
pub fn format_price(price: &Price, currency: &str) -> String {
    match price {
        Price::Amount(value) => {
            let amount = two_decimals(*value).replace('.', ",");
            format!("{} {}", amount, currency)
        }
        Price::Label(label) => label.clone(),
        Price::Other(_) => String::new(),
    }
}

/// Two decimals, exact half-cent ties rounded away from zero.
///
/// `{:.2}` rounds the exact binary value and breaks ties to even. A tie is
/// only representable when `value * 8` is an odd integer (0.125, 7.625, ...);
/// those are rounded up instead. Everything else keeps the exact rounding,
/// so 1.005 (stored as 1.00499...) still yields "1.00".
fn two_decimals(value: f64) -> String {
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (value.abs() * 100.0).round();
        let sign = if value < 0.0 { "-" } else { "" };
        return format!(
            "{}{}.{:02}",
            sign,
            (cents / 100.0).trunc() as u64,
            (cents % 100.0) as u64
        );
    }
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amounts() {
        assert_eq!(format_price(&Price::Amount(7.5), "€"), "7,50 €");
        assert_eq!(format_price(&Price::Amount(12.0), "€"), "12,00 €");
        assert_eq!(format_price(&Price::Amount(0.0), "€"), "0,00 €");
        assert_eq!(format_price(&Price::Amount(1234.567), "€"), "1234,57 €");
        assert_eq!(format_price(&Price::Amount(0.125), "€"), "0,13 €");
        assert_eq!(format_price(&Price::Amount(9.625), "€"), "9,63 €");
    }

    #[test]
    fn test_half_cent_ties_round_up() {
        assert_eq!(format_price(&Price::Amount(7.125), "€"), "7,13 €");
        assert_eq!(format_price(&Price::Amount(0.375), "€"), "0,38 €");
        assert_eq!(format_price(&Price::Amount(-0.125), "€"), "-0,13 €");
        // not a tie in binary: 1.005 is stored slightly below
        assert_eq!(format_price(&Price::Amount(1.005), "€"), "1,00 €");
        assert_eq!(format_price(&Price::Amount(2.675), "€"), "2,67 €");
    }

    #[test]
    fn test_format_label_verbatim() {
        assert_eq!(
            format_price(&Price::Label("ab 7,90 €".into()), "€"),
            "ab 7,90 €"
        );
        assert_eq!(format_price(&Price::Label(String::new()), "€"), "");
    }

    #[test]
    fn test_format_other_is_empty() {
        assert_eq!(format_price(&Price::Other(serde_json::Value::Null), "€"), "");
        assert_eq!(format_price(&Price::Other(serde_json::json!(true)), "€"), "");
    }

    #[test]
    fn test_custom_currency() {
        assert_eq!(format_price(&Price::Amount(4.5), "CHF"), "4,50 CHF");
    }
}
