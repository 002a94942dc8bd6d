//! Directive labels with special meaning and the dispatch table built on them.
//!
//! Every label maps to exactly one [`DirectiveKind`], so the shape a rule is
//! stored in never depends on the directive content.

/// Prefix shared by all test-case directives.
pub const TEST_PREFIX: &str = "test_";
/// Test directive that opens a new test case.
pub const SECTION_START: &str = "test_url";
/// Directive recording the pattern for the next `replace_string`.
pub const FIND_STRING: &str = "find_string";
/// Directive pairing its content with the pending `find_string`.
pub const REPLACE_STRING: &str = "replace_string";
/// Rule name under which find/replace pairs are stored.
pub const FIND_REPLACE: &str = "find_replace";
/// Properties stored as booleans rather than lists.
pub const BOOLEAN_PROPERTIES: &[&str] = &["prune"];

/// Strategy used to fold a directive into the parsed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `test_url`: starts a new test case.
    SectionStart,
    /// Any other `test_*` label: an assertion on the current test case.
    Test,
    /// `find_string`: sets the pending find pattern.
    FindString,
    /// `replace_string`: completes a find/replace pair.
    ReplaceString,
    /// The `find_replace` storage key itself, which is not a valid label.
    Reserved,
    /// A boolean property such as `prune`.
    Flag,
    /// Any other label, accumulated as an ordered list.
    List,
}

impl DirectiveKind {
    /// Classify a trimmed directive label.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitespec::DirectiveKind;
    ///
    /// assert_eq!(DirectiveKind::classify("test_url"), DirectiveKind::SectionStart);
    /// assert_eq!(DirectiveKind::classify("test_contains"), DirectiveKind::Test);
    /// assert_eq!(DirectiveKind::classify("prune"), DirectiveKind::Flag);
    /// assert_eq!(DirectiveKind::classify("strip"), DirectiveKind::List);
    /// ```
    #[must_use]
    pub fn classify(label: &str) -> Self {
        match label {
            SECTION_START => Self::SectionStart,
            FIND_STRING => Self::FindString,
            REPLACE_STRING => Self::ReplaceString,
            FIND_REPLACE => Self::Reserved,
            _ if label.starts_with(TEST_PREFIX) => Self::Test,
            _ if BOOLEAN_PROPERTIES.contains(&label) => Self::Flag,
            _ => Self::List,
        }
    }

    /// Whether directives of this kind belong to test cases rather than rules.
    #[must_use]
    pub const fn is_test(self) -> bool {
        matches!(self, Self::SectionStart | Self::Test)
    }
}

/// Parse the content of a boolean property.
///
/// Only the exact strings `yes` and `no` are accepted.
#[must_use]
pub fn parse_flag(content: &str) -> Option<bool> {
    match content {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
