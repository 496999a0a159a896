//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]` or not a number.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error for every blank or duplicated entry in a name list.
pub(crate) fn validate_names(errors: &mut Vec<String>, name: &str, values: &[String]) {
    for (i, value) in values.iter().enumerate() {
        if value.trim().is_empty() {
            errors.push(format!("{name}[{i}] is empty"));
        } else if values[..i].contains(value) {
            errors.push(format!("{name}[{i}] duplicates '{value}'"));
        }
    }
}
