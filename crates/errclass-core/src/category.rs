//! ErrorCategory - 実行時に定義されるエラーの「型」
//!
//! A category is defined once (name + default fields) and then used as a
//! constructor for any number of [`ErrorInstance`]s.
//!
//! # 構築の流れ
//! 1. defaults を浅くコピー
//! 2. caller fields を上書き
//! 3. `name` を強制、`trace` を除去
//! 4. message を解決（明示的な message が優先）
//! 5. message が空でない文字列かを検証
//! 6. 呼び出し元を起点に trace を取得

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::errors::ValidationError;
use crate::domain::fields::{self, Fields, MESSAGE_KEY};
use crate::domain::instance::ErrorInstance;
use crate::domain::name::CategoryName;
use crate::trace::{self, TraceConfig};

#[derive(Debug)]
struct CategoryInner {
    name: CategoryName,
    defaults: Fields,
    trace_config: TraceConfig,
}

/// A reusable error definition.
///
/// Clones share the same definition; two categories compare equal only when
/// one is a clone of the other, even if their names happen to match.
///
/// # 使用例
/// ```ignore
/// let not_found = ErrorCategory::with_defaults("NotFoundError", defaults)?;
/// let err = not_found.construct("Could not find your homepage.")?;
/// assert_eq!(err.to_string(), "NotFoundError: Could not find your homepage.");
/// ```
#[derive(Clone)]
pub struct ErrorCategory {
    inner: Arc<CategoryInner>,
}

impl ErrorCategory {
    /// Category without default fields.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::builder(name).build()
    }

    pub fn with_defaults(name: &str, defaults: Fields) -> Result<Self, ValidationError> {
        Self::builder(name).defaults(defaults).build()
    }

    pub fn builder(name: impl Into<String>) -> CategoryBuilder {
        CategoryBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        self.inner.name.as_str()
    }

    pub fn defaults(&self) -> &Fields {
        &self.inner.defaults
    }

    pub fn trace_config(&self) -> &TraceConfig {
        &self.inner.trace_config
    }

    /// Build an error.
    ///
    /// Accepts every call shape through [`ConstructArgs`]: `()`, a message,
    /// a field map, or `(message, fields)`.
    #[inline(never)]
    pub fn construct(
        &self,
        args: impl Into<ConstructArgs>,
    ) -> Result<ErrorInstance, ValidationError> {
        self.build(args.into())
    }

    /// Build an error from loosely-typed arguments.
    ///
    /// An object in `first` is the field map (and `second` is ignored); a
    /// string is the message; `null` means no message. Any other value is
    /// taken as the message and fails validation since it is not a string.
    #[inline(never)]
    pub fn construct_dynamic(
        &self,
        first: Option<&Value>,
        second: Option<&Value>,
    ) -> Result<ErrorInstance, ValidationError> {
        self.build(ConstructArgs::from_dynamic(first, second))
    }

    /// True when `error` was built by this category.
    pub fn is_instance(&self, error: &ErrorInstance) -> bool {
        error.is(self)
    }

    #[inline(never)]
    fn build(&self, args: ConstructArgs) -> Result<ErrorInstance, ValidationError> {
        let ConstructArgs {
            message,
            fields: caller_fields,
        } = args;

        let mut merged = fields::overlay(&self.inner.defaults, caller_fields.as_ref());
        fields::apply_identity(&mut merged, &self.inner.name);

        let message = resolve_message(message, &merged)?;
        merged.insert(MESSAGE_KEY.to_string(), Value::String(message.clone()));

        let header = format!("{}: {}", self.inner.name, message);
        let trace = trace::capture(&header, &self.inner.trace_config);

        tracing::trace!(category = %self.inner.name, fields = merged.len(), "constructed error");
        Ok(ErrorInstance::new(self.clone(), message, merged, trace))
    }
}

impl PartialEq for ErrorCategory {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ErrorCategory {}

impl fmt::Debug for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCategory")
            .field("name", &self.inner.name.as_str())
            .field("defaults", &self.inner.defaults)
            .field("trace_config", &self.inner.trace_config)
            .finish()
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.name, f)
    }
}

/// Explicit message wins only if it is "present": a non-empty string, or a
/// non-string value that is not null/false/0. Otherwise the merged `message`
/// field is used.
fn resolve_message(explicit: Option<Value>, merged: &Fields) -> Result<String, ValidationError> {
    let candidate = match explicit.filter(is_present) {
        Some(value) => Some(value),
        None => merged.get(MESSAGE_KEY).cloned(),
    };
    match candidate {
        Some(Value::String(message)) if !message.is_empty() => Ok(message),
        _ => Err(ValidationError::MissingMessage),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Arguments of [`ErrorCategory::construct`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructArgs {
    message: Option<Value>,
    fields: Option<Fields>,
}

impl ConstructArgs {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(Value::String(message.into())),
            fields: None,
        }
    }

    pub fn fields(fields: Fields) -> Self {
        Self {
            message: None,
            fields: Some(fields),
        }
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    fn from_dynamic(first: Option<&Value>, second: Option<&Value>) -> Self {
        match first {
            Some(Value::Object(fields)) => Self::fields(fields.clone()),
            _ => Self {
                message: first.filter(|v| !v.is_null()).cloned(),
                fields: second.and_then(Value::as_object).cloned(),
            },
        }
    }
}

impl From<()> for ConstructArgs {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl From<&str> for ConstructArgs {
    fn from(message: &str) -> Self {
        Self::message(message)
    }
}

impl From<String> for ConstructArgs {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

impl From<Fields> for ConstructArgs {
    fn from(fields: Fields) -> Self {
        Self::fields(fields)
    }
}

impl From<(&str, Fields)> for ConstructArgs {
    fn from((message, fields): (&str, Fields)) -> Self {
        Self::message(message).with_fields(fields)
    }
}

impl From<(String, Fields)> for ConstructArgs {
    fn from((message, fields): (String, Fields)) -> Self {
        Self::message(message).with_fields(fields)
    }
}

/// CategoryBuilder は ErrorCategory を構築
///
/// Validation happens in [`CategoryBuilder::build`] (fail-fast).
#[derive(Debug, Clone)]
pub struct CategoryBuilder {
    name: String,
    defaults: Fields,
    trace_config: TraceConfig,
}

impl CategoryBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defaults: Fields::new(),
            trace_config: TraceConfig::default(),
        }
    }

    /// Replace the default field map.
    pub fn defaults(mut self, defaults: Fields) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn default_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    pub fn trace_config(mut self, trace_config: TraceConfig) -> Self {
        self.trace_config = trace_config;
        self
    }

    pub fn build(self) -> Result<ErrorCategory, ValidationError> {
        let name = CategoryName::new(&self.name)?;
        tracing::debug!(category = %name, defaults = self.defaults.len(), "defined error category");
        Ok(ErrorCategory {
            inner: Arc::new(CategoryInner {
                name,
                defaults: self.defaults,
                trace_config: self.trace_config,
            }),
        })
    }
}
