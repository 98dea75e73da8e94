/// Magnitude from which numbers print in exponential form (`1e+21`).
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which numbers print in exponential form (`1e-7`).
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a value the way JavaScript's `Number#toString` does: shortest
/// round-trip digits (`5`, `20.5`), switching to exponential form with an
/// explicit exponent sign (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
///
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity` so a
/// coerced record stays readable in tooltips.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    value.to_string()
}
