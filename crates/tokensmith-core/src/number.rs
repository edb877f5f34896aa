//! Text form of JSON numbers in emitted values.

use serde_json::Number;

/// Formats a number the way design tools print it.
///
/// Integers print as-is. Whole-valued floats drop the fractional part
/// (`1e2` and `100.0` both print `100`), other floats use the shortest
/// decimal form (`1.50` prints `1.5`). Negative zero prints `0`.
pub fn format_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        // f64's Display never uses exponent notation and omits `.0`.
        Some(f) if f.is_finite() => format!("{f}"),
        _ => number.to_string(),
    }
}
