//! ErrorInstance - category から構築されたエラー値

use std::fmt;

use serde_json::Value;

use super::fields::Fields;
use crate::category::ErrorCategory;

/// A concrete error built by [`ErrorCategory::construct`].
///
/// Read-only once built: `name` comes from the category, `message` is the
/// resolved non-empty message, `fields` is the merged field map (including
/// the forced `name` and the resolved `message`).
#[derive(Debug, Clone)]
pub struct ErrorInstance {
    category: ErrorCategory,
    message: String,
    fields: Fields,
    trace: String,
}

impl ErrorInstance {
    pub(crate) fn new(category: ErrorCategory, message: String, fields: Fields, trace: String) -> Self {
        Self {
            category,
            message,
            fields,
            trace,
        }
    }

    pub fn name(&self) -> &str {
        self.category.name()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Look up a merged field (`status`, `detail`, ...).
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Trace captured at construction; first line is `"<name>: <message>"`.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    pub fn category(&self) -> &ErrorCategory {
        &self.category
    }

    /// True when this error was built by `category`.
    pub fn is(&self, category: &ErrorCategory) -> bool {
        self.category == *category
    }
}

impl fmt::Display for ErrorInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message)
    }
}

impl std::error::Error for ErrorInstance {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::category::ErrorCategory;

    fn load_page(category: &ErrorCategory) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let err = category.construct("Could not find your homepage.")?;
        Err(Box::new(err))
    }

    #[test]
    fn converts_into_boxed_std_error() {
        let category = ErrorCategory::new("NotFoundError").unwrap();
        let err = load_page(&category).unwrap_err();
        assert_eq!(err.to_string(), "NotFoundError: Could not find your homepage.");
    }

    #[test]
    fn fields_include_identity_and_message() {
        let category = ErrorCategory::builder("Conflict")
            .default_field("status", 409)
            .build()
            .unwrap();
        let err = category.construct("already exists").unwrap();

        assert_eq!(
            serde_json::Value::Object(err.fields().clone()),
            json!({"status": 409, "name": "Conflict", "message": "already exists"})
        );
        assert!(err.is(&category));
        assert_eq!(err.category(), &category);
    }
}
