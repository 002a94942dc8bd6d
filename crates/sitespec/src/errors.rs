//! Error types shared by the tokenizer and the rule and test-case builders.

use std::fmt;
use thiserror::Error;

use crate::directive::Directive;

pub(crate) const REPLACE_WITHOUT_FIND: &str = "replace_string without preceding find_string";
pub(crate) const INVALID_FLAG: &str = "boolean property must be `yes` or `no`";
pub(crate) const TEST_BEFORE_SECTION: &str = "test directive before section start";

/// Location and cause of a directive that violates the spec file rules.
///
/// # Examples
/// ```
/// use sitespec::InvalidSpecInfo;
/// let info = InvalidSpecInfo::new("unexpected directive", 4, "prune");
/// assert_eq!(info.line, 4);
/// assert_eq!(info.label, "prune");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSpecInfo {
    /// Short description of the rule that was broken.
    pub reason: &'static str,
    /// 1-based line number of the offending directive.
    pub line: usize,
    /// Label of the offending directive.
    pub label: String,
}

impl InvalidSpecInfo {
    /// Describe an invalid directive.
    #[must_use]
    pub fn new(reason: &'static str, line: usize, label: impl Into<String>) -> Self {
        Self {
            reason,
            line,
            label: label.into(),
        }
    }
}

impl fmt::Display for InvalidSpecInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}, label `{}`)",
            self.reason, self.line, self.label
        )
    }
}

/// Errors surfaced while loading a spec file.
///
/// Any error aborts the whole parse; callers never receive a partial result.
///
/// # Examples
/// ```
/// use sitespec::{SpecError, load_rules};
/// let err = load_rules("replace_string: bar").unwrap_err();
/// assert!(matches!(err, SpecError::InvalidSpec(_)));
/// ```
#[derive(Debug, Error)]
pub enum SpecError {
    /// The directive stream breaks an ordering or content constraint.
    #[error("invalid spec file: {0}")]
    InvalidSpec(InvalidSpecInfo),
    /// The spec source could not be read.
    #[error("failed to read spec file: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Return the invalid-directive details, if this is a spec content error.
    #[must_use]
    pub fn invalid_spec(&self) -> Option<&InvalidSpecInfo> {
        match self {
            Self::InvalidSpec(info) => Some(info),
            Self::Io(_) => None,
        }
    }
}

pub(crate) fn invalid_spec(reason: &'static str, directive: &Directive<'_>) -> SpecError {
    SpecError::InvalidSpec(InvalidSpecInfo::new(
        reason,
        directive.line,
        directive.label,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_invalid_spec_with_location() {
        let info = InvalidSpecInfo::new(REPLACE_WITHOUT_FIND, 3, "replace_string");
        assert_eq!(
            SpecError::InvalidSpec(info).to_string(),
            "invalid spec file: replace_string without preceding find_string \
             (line 3, label `replace_string`)"
        );
    }

    #[test]
    fn builds_error_from_directive() {
        let directive = Directive {
            line: 7,
            label: "prune",
            content: "maybe",
        };
        let err = invalid_spec(INVALID_FLAG, &directive);
        assert_eq!(
            err.invalid_spec(),
            Some(&InvalidSpecInfo::new(INVALID_FLAG, 7, "prune"))
        );
    }

    #[test]
    fn io_error_converts_and_has_no_spec_details() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: SpecError = io_err.into();
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.invalid_spec().is_none());
    }
}
