//! Module-level entry point taking loosely-typed (JSON-shaped) arguments.
//!
//! Typed callers can use [`ErrorCategory::new`] / [`ErrorCategory::builder`]
//! directly; this function adds the argument-shape checks that the type
//! system would otherwise do for them.

use serde_json::Value;

use crate::category::ErrorCategory;
use crate::domain::errors::ValidationError;
use crate::domain::fields::Fields;

/// Define a new error category.
///
/// - `category_name` must be a JSON string holding a valid identifier.
/// - `default_fields` may be absent or `null`; otherwise it must be an object.
pub fn create(
    category_name: Option<&Value>,
    default_fields: Option<&Value>,
) -> Result<ErrorCategory, ValidationError> {
    let Some(Value::String(name)) = category_name else {
        return Err(ValidationError::NameNotString);
    };

    let defaults = match default_fields {
        None | Some(Value::Null) => Fields::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => return Err(ValidationError::DefaultsNotObject),
    };

    ErrorCategory::with_defaults(name, defaults)
}
