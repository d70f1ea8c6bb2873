//! CategoryName - category 名の命名規約チェック
//!
//! A category name doubles as the display name of every error built from the
//! category, so it has to be usable as a function name:
//! - first char: XID_Start, `$` or `_`
//! - rest: XID_Continue, `$`, ZWNJ (U+200C) or ZWJ (U+200D)
//! - not a reserved word

use std::fmt;
use std::sync::Arc;

use unicode_xid::UnicodeXID;

use super::errors::ValidationError;

const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

// sloppy-mode reserved words only; `let`, `yield`, `static`, `await` etc. are valid names there
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with",
];

/// CategoryName は検証済みの category 名
///
/// `Arc<str>` なので clone は安い（instance ごとに文字列をコピーしない）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(Arc<str>);

impl CategoryName {
    /// Validate `value` and wrap it.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        Self::validate(value)?;
        Ok(Self(Arc::from(value)))
    }

    pub fn validate(value: &str) -> Result<(), ValidationError> {
        if is_identifier(value) && !RESERVED_WORDS.contains(&value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidIdentifier(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '$' || first == '_' || UnicodeXID::is_xid_start(first)) {
        return false;
    }
    chars.all(|c| c == '$' || c == ZWNJ || c == ZWJ || UnicodeXID::is_xid_continue(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("TestError")]
    #[case("NotFoundError")]
    #[case("_private")]
    #[case("$jquery")]
    #[case("Error2")]
    #[case("ÉchecDeConnexion")]
    #[case("エラー")]
    #[case("yield")]
    #[case("let")]
    #[case("static")]
    #[case("await")]
    #[case("implements")]
    #[case("interface")]
    #[case("package")]
    #[case("private")]
    #[case("protected")]
    #[case("public")]
    fn accepts_valid_identifiers(#[case] name: &str) {
        let parsed = CategoryName::new(name).unwrap();
        assert_eq!(parsed.as_str(), name);
        assert_eq!(parsed.to_string(), name);
    }

    #[rstest]
    #[case("")]
    #[case("test-error")]
    #[case("2Fast")]
    #[case("has space")]
    #[case("dotted.name")]
    #[case("class")]
    #[case("null")]
    #[case("(){}")]
    fn rejects_invalid_identifiers(#[case] name: &str) {
        let err = CategoryName::new(name).unwrap_err();
        assert_eq!(err, ValidationError::InvalidIdentifier(name.to_string()));
    }

    #[test]
    fn reserved_word_check_is_case_sensitive() {
        // `Class` は予約語ではない
        assert!(CategoryName::new("Class").is_ok());
    }
}
