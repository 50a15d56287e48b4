//! US dollar formatting.

use crate::ports::CurrencyFormatter;

/// Formats amounts as US dollars.
///
/// | Amount | plain | abbreviated |
/// |--------|-------|-------------|
/// | 500 | `$500.00` | `$500` |
/// | 1500 | `$1,500.00` | `$1.5K` |
/// | 500000 | `$500,000.00` | `$500K` |
/// | 1200000 | `$1,200,000.00` | `$1.2M` |
#[derive(Debug, Clone, Copy, Default)]
pub struct UsdCurrencyFormatter;

impl CurrencyFormatter for UsdCurrencyFormatter {
    fn plain(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        format!(
            "{}${}.{:02}",
            sign(amount),
            group_thousands(cents / 100),
            cents % 100
        )
    }

    fn abbreviated(&self, amount: f64) -> String {
        let abs = amount.abs();
        // Cutoffs sit where rounding would carry into the next unit.
        let (scaled, suffix) = if abs >= 999_950.0 {
            (abs / 1_000_000.0, "M")
        } else if abs >= 999.5 {
            (abs / 1_000.0, "K")
        } else {
            return format!("{}${}", sign(amount), abs.round() as u64);
        };

        let digits = format!("{:.1}", scaled);
        let digits = digits.strip_suffix(".0").unwrap_or(&digits);
        format!("{}${}{}", sign(amount), digits, suffix)
    }
}

fn sign(amount: f64) -> &'static str {
    if amount < 0.0 {
        "-"
    } else {
        ""
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_has_cents_and_separators() {
        let f = UsdCurrencyFormatter;
        assert_eq!(f.plain(500.0), "$500.00");
        assert_eq!(f.plain(1500.0), "$1,500.00");
        assert_eq!(f.plain(1_234_567.891), "$1,234,567.89");
        assert_eq!(f.plain(0.0), "$0.00");
        assert_eq!(f.plain(-42.5), "-$42.50");
    }

    #[test]
    fn abbreviated_uses_k_and_m() {
        let f = UsdCurrencyFormatter;
        assert_eq!(f.abbreviated(500_000.0), "$500K");
        assert_eq!(f.abbreviated(1_200_000.0), "$1.2M");
        assert_eq!(f.abbreviated(6_000.0), "$6K");
        assert_eq!(f.abbreviated(1_500.0), "$1.5K");
        assert_eq!(f.abbreviated(999_999.0), "$1M");
        assert_eq!(f.abbreviated(750.0), "$750");
    }

    #[test]
    fn abbreviated_never_prints_four_plain_digits() {
        let f = UsdCurrencyFormatter;
        assert_eq!(f.abbreviated(999.6), "$1K");
        assert_eq!(f.abbreviated(999.5), "$1K");
        assert_eq!(f.abbreviated(999.4), "$999");
        assert_eq!(f.abbreviated(-999.6), "-$1K");
    }
}
