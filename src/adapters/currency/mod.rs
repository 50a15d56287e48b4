//! Currency formatting adapters.

mod usd_formatter;

pub use usd_formatter::UsdCurrencyFormatter;
