use super::{ApiError, FieldValue};

/// A present, non-blank text field.
pub fn required_text(field: &str, value: Option<FieldValue>) -> Result<String, ApiError> {
    let text = value
        .map(FieldValue::into_text)
        .ok_or_else(|| ApiError::validation(format!("Missing required field: {field}")))?;

    if text.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }

    Ok(text)
}

/// A present field that coerces to a finite float.
pub fn required_float(field: &str, value: Option<FieldValue>) -> Result<f64, ApiError> {
    let value =
        value.ok_or_else(|| ApiError::validation(format!("Missing required field: {field}")))?;

    match value.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ApiError::validation(format!(
            "Invalid {field}: expected a number"
        ))),
    }
}

/// A present field holding a positive integer id.
#[allow(clippy::cast_possible_truncation)]
pub fn required_id(field: &str, value: Option<FieldValue>) -> Result<i32, ApiError> {
    let invalid = || {
        ApiError::validation(format!(
            "Invalid {field}. ID must be a positive integer"
        ))
    };

    let value =
        value.ok_or_else(|| ApiError::validation(format!("Missing required field: {field}")))?;

    let id = match value {
        FieldValue::Text(s) => s.trim().parse::<i32>().map_err(|_| invalid())?,
        FieldValue::Number(n) => {
            if n.fract() != 0.0 || n < 1.0 || n > f64::from(i32::MAX) {
                return Err(invalid());
            }
            n as i32
        }
    };

    if id <= 0 {
        return Err(invalid());
    }
    Ok(id)
}
