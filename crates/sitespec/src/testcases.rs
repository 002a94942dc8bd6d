//! Self-test cases folded from the `test_*` directives of a spec file.

use std::collections::BTreeMap;
use std::io::Read;

use crate::directive::{Directive, directives};
use crate::errors::{SpecError, TEST_BEFORE_SECTION, invalid_spec};
use crate::kind::{DirectiveKind, SECTION_START};
use crate::site::read_source;

/// Borrowed view of one test-case field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum TestValue<'a> {
    /// The `test_url` that opened the case.
    Single(&'a str),
    /// Ordered values of any other test directive.
    List(&'a [String]),
}

/// Expected-behaviour assertions anchored to one `test_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    url: String,
    fields: BTreeMap<String, Vec<String>>,
}

impl TestCase {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            fields: BTreeMap::new(),
        }
    }

    /// URL given by the `test_url` directive.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Values recorded for a test directive, or an empty slice.
    #[must_use]
    pub fn field(&self, name: &str) -> &[String] {
        self.fields
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look up any field by its full label, `test_url` included.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TestValue<'_>> {
        if name == SECTION_START {
            return Some(TestValue::Single(&self.url));
        }
        self.fields
            .get(name)
            .map(|values| TestValue::List(values.as_slice()))
    }

    /// Fields other than `test_url`, sorted by label.
    #[must_use]
    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TestCase {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(SECTION_START, &self.url)?;
        for (name, values) in self.fields() {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

/// Single-pass accumulator for test cases.
#[derive(Debug, Default)]
pub(crate) struct TestCasesBuilder {
    cases: Vec<TestCase>,
}

impl TestCasesBuilder {
    pub(crate) fn push(&mut self, directive: Directive<'_>) -> Result<(), SpecError> {
        match directive.kind() {
            DirectiveKind::SectionStart => self.cases.push(TestCase::new(directive.content)),
            DirectiveKind::Test => {
                let Some(case) = self.cases.last_mut() else {
                    return Err(invalid_spec(TEST_BEFORE_SECTION, &directive));
                };
                case.fields
                    .entry(directive.label.to_owned())
                    .or_default()
                    .push(directive.content.to_owned());
            }
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<TestCase> {
        self.cases
    }
}

/// Parse the test cases of a spec file, in file order.
///
/// Each `test_url` opens a new case; later `test_*` directives attach to the
/// most recent one.
///
/// # Errors
/// Returns [`SpecError::InvalidSpec`] when a test directive appears before the
/// first `test_url`.
///
/// # Examples
/// ```
/// let cases = sitespec::load_testcases("test_url: http://x\ntest_contains: Hello").unwrap();
/// assert_eq!(cases.len(), 1);
/// assert_eq!(cases[0].url(), "http://x");
/// assert_eq!(cases[0].field("test_contains"), ["Hello"]);
/// ```
pub fn load_testcases(source: &str) -> Result<Vec<TestCase>, SpecError> {
    let mut builder = TestCasesBuilder::default();
    for directive in directives(source) {
        builder.push(directive)?;
    }
    Ok(builder.finish())
}

/// Read a whole spec file from `reader` and parse its test cases.
///
/// # Errors
/// Returns [`SpecError::Io`] when reading fails, otherwise as
/// [`load_testcases`].
pub fn read_testcases<R: Read>(reader: R) -> Result<Vec<TestCase>, SpecError> {
    let source = read_source(reader)?;
    load_testcases(&source)
}
