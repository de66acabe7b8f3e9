use axum::extract::{rejection::JsonRejection, FromRequest};
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// `Json` whose rejections render as `VALIDATION_ERROR` bodies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Tells an explicit `null` apart from an absent field:
/// absent → `None`, `null` → `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Trims a nullable text change; blank text clears the column.
pub fn blank_as_null(change: Option<Option<String>>) -> Option<Option<String>> {
    change.map(|value| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Trimmed, non-blank text with a length cap; `field` names it in errors.
pub fn required_text(value: &str, field: &str, max_chars: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} cannot be blank")));
    }
    if trimmed.chars().count() > max_chars {
        return Err(AppError::validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(trimmed.to_string())
}

pub fn optional_text(
    value: Option<Option<String>>,
    field: &str,
    max_chars: usize,
) -> Result<Option<Option<String>>, AppError> {
    let value = blank_as_null(value);
    if let Some(Some(text)) = &value {
        if text.chars().count() > max_chars {
            return Err(AppError::validation(format!(
                "{field} must be at most {max_chars} characters"
            )));
        }
    }
    Ok(value)
}
