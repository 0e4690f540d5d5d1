// Display formatting shared by the CLI report and the GUI.
use crate::models::PriceChange;

/// Groups digits in threes: `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_usd(value: f64) -> String {
    format!("{:.2} USD", value)
}

/// `"1.23 (4.56%)"`, the delta line shown under a price.
pub fn format_delta(change: &PriceChange) -> String {
    format!("{:.2} ({:.2}%)", change.absolute, change.percent)
}

pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(600822115), "600,822,115");
    }

    #[test]
    fn test_format_usd_rounds_to_cents() {
        assert_eq!(format_usd(123.456), "123.46 USD");
    }

    #[test]
    fn test_format_delta() {
        let change = PriceChange { absolute: -2.5, percent: -1.25 };
        assert_eq!(format_delta(&change), "-2.50 (-1.25%)");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None), "-");
        assert_eq!(format_optional(Some(1.0)), "1.00");
    }
}
