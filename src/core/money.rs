//! Gold arithmetic helpers.
//!
//! Gold is carried as `f64` and snapped to cents after every mutation so
//! persisted records and display values stay at 2-decimal precision.

/// Rounds a gold amount to the nearest cent.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats a gold amount for display, e.g. `12.30`.
pub fn format_gold(amount: f64) -> String {
    format!("{:.2}", amount)
}
