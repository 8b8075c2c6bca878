//! Reusable field validators
//!
//! Each validator inspects one form field value (`None` when the field was
//! not submitted) and reports a caller-facing message on failure. The schema
//! layer pairs the message with the field name.

/// Validator: field must be present and non-empty
pub fn required() -> impl Fn(Option<&str>) -> Result<(), String> + Send + Sync + Clone {
    |value: Option<&str>| match value {
        None => Err("is required".to_string()),
        Some(s) if s.is_empty() => Err("is required".to_string()),
        Some(_) => Ok(()),
    }
}

/// Validator: value must coerce to a number
///
/// Missing values pass; `required()` owns presence.
pub fn number() -> impl Fn(Option<&str>) -> Result<(), String> + Send + Sync + Clone {
    |value: Option<&str>| match value {
        Some(s) if !s.is_empty() && s.parse::<f64>().is_err() => {
            Err("must be a number".to_string())
        }
        _ => Ok(()),
    }
}

/// Validator: numeric value must not be negative
///
/// Non-numeric values pass; `number()` owns coercibility.
pub fn not_negative() -> impl Fn(Option<&str>) -> Result<(), String> + Send + Sync + Clone {
    |value: Option<&str>| match value.and_then(|s| s.parse::<f64>().ok()) {
        Some(n) if n < 0.0 => Err("must not be negative".to_string()),
        _ => Ok(()),
    }
}

/// Validator: value must be one of the allowed strings
pub fn one_of(
    allowed: &'static [&'static str],
) -> impl Fn(Option<&str>) -> Result<(), String> + Send + Sync + Clone {
    move |value: Option<&str>| match value {
        Some(s) if !s.is_empty() && !allowed.contains(&s) => {
            Err(format!("must be one of: {}", allowed.join(", ")))
        }
        _ => Ok(()),
    }
}
