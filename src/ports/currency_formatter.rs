//! CurrencyFormatter port - display formatting for money fields.

/// Formats dollar amounts for quote records.
pub trait CurrencyFormatter: Send + Sync {
    /// Full amount with cents, e.g. `$1,234.50`.
    fn plain(&self, amount: f64) -> String;

    /// Short form for large round amounts, e.g. `$500K` or `$1.5M`.
    fn abbreviated(&self, amount: f64) -> String;
}
