//! Number rendering shared by the `print`, `json` and `xml` outputs.

/// Renders `value` as the shortest decimal that round-trips.
///
/// Magnitudes of at least `1e16` or below `1e-6` switch to scientific notation. Zero always renders as `"0"`.
/// Non-finite values render as `NaN`, `inf` and `-inf`.
///
/// ```rust
/// use mensura_core::format::number_to_string;
///
/// assert_eq!(number_to_string(9.81), "9.81");
/// assert_eq!(number_to_string(-0.0), "0");
/// assert_eq!(number_to_string(2.5e-9), "2.5e-9");
/// assert_eq!(number_to_string(3e20), "3e20");
/// ```
pub fn number_to_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if value.is_finite() && !(1e-6..1e16).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// JSON form of a 3-vector: `{"x":..,"y":..,"z":..}`.
pub(crate) fn json_triple([x, y, z]: [f64; 3]) -> String {
    format!(
        "{{\"x\":{},\"y\":{},\"z\":{}}}",
        number_to_string(x),
        number_to_string(y),
        number_to_string(z)
    )
}

/// XML form of a 3-vector: `<x>..</x><y>..</y><z>..</z>`.
pub(crate) fn xml_triple([x, y, z]: [f64; 3]) -> String {
    format!(
        "<x>{}</x><y>{}</y><z>{}</z>",
        number_to_string(x),
        number_to_string(y),
        number_to_string(z)
    )
}

/// Plain form of a 3-vector: `(x, y, z)`.
pub(crate) fn print_triple([x, y, z]: [f64; 3]) -> String {
    format!(
        "({}, {}, {})",
        number_to_string(x),
        number_to_string(y),
        number_to_string(z)
    )
}
