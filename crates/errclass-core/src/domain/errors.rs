//! Errors - 入力検証エラー
//!
//! The factory only ever fails with [`ValidationError`]. Every variant is a
//! misuse of the API and is handed straight back to the caller.

use thiserror::Error;

/// ValidationError は API の誤用を表す
///
/// # 発生箇所
/// - `NameNotString` / `DefaultsNotObject` / `InvalidIdentifier`: category 定義時
/// - `MissingMessage`: instance 構築時
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First argument: class name must be a string.")]
    NameNotString,

    #[error("Second argument: defaults must be an object.")]
    DefaultsNotObject,

    #[error("First argument: {0} is not a valid javascript function name.")]
    InvalidIdentifier(String),

    #[error("A message string is required to construct an error.")]
    MissingMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_public_wording() {
        assert_eq!(
            ValidationError::NameNotString.to_string(),
            "First argument: class name must be a string."
        );
        assert_eq!(
            ValidationError::DefaultsNotObject.to_string(),
            "Second argument: defaults must be an object."
        );
        assert_eq!(
            ValidationError::InvalidIdentifier("test-error".to_string()).to_string(),
            "First argument: test-error is not a valid javascript function name."
        );
        assert_eq!(
            ValidationError::MissingMessage.to_string(),
            "A message string is required to construct an error."
        );
    }
}
