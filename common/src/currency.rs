use serde::{Deserialize, Serialize};
use std::fmt;

/// Display symbol prefixed to every formatted amount (e.g. "$", "€").
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencySymbol(pub String);

impl Default for CurrencySymbol {
    fn default() -> Self {
        CurrencySymbol("$".into())
    }
}

impl fmt::Display for CurrencySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencySymbol {
    fn from(symbol: &str) -> Self {
        CurrencySymbol(symbol.to_string())
    }
}

impl CurrencySymbol {
    /// Symbol for an ISO 4217 code. Unknown codes display as the code itself.
    pub fn for_code(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        let symbol = match code.as_str() {
            "USD" | "AUD" | "CAD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "JPY" => "¥",
            "INR" => "₹",
            "CHF" => "CHF ",
            _ => return CurrencySymbol(code),
        };
        CurrencySymbol(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Format an amount as `<symbol><amount fixed to 2 decimals>`, no grouping.
///
/// Rounds the exact stored value to the nearest cent; exact ties go to the
/// even cent (`0.125` becomes `0.12`, `0.375` becomes `0.38`). Values that
/// sit just below a half cent in binary, like `0.015`, round down. Anything
/// that rounds to zero prints unsigned. NaN and infinities use Rust's float
/// formatting (`NaN`, `inf`, `-inf`).
pub fn format_amount(amount: f64, symbol: &CurrencySymbol) -> String {
    let fixed = format!("{amount:.2}");
    match fixed.strip_prefix('-') {
        Some(unsigned) if unsigned == "0.00" => format!("{symbol}{unsigned}"),
        _ => format!("{symbol}{fixed}"),
    }
}
