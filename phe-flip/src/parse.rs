use crate::InvalidInput;

/// Parse a measurement from user text.
///
/// Surrounding white space is ignored. Non-finite literals such as `inf` and
/// `NaN` are rejected.
pub fn parse_value(s: &str) -> Result<f64, InvalidInput> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InvalidInput::NotNumber(s.trim().to_string()))
}
