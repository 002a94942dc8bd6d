//! Whole-file parsing producing both rules and test cases.

use std::io::Read;
use std::str::FromStr;

use crate::errors::SpecError;
use crate::rules::{Rules, load_rules};
use crate::testcases::{TestCase, load_testcases};

/// Rules and test cases parsed from the same spec file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SiteSpec {
    /// Extraction rules.
    pub rules: Rules,
    /// Self-test cases in file order.
    pub testcases: Vec<TestCase>,
}

impl FromStr for SiteSpec {
    type Err = SpecError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        load_site_spec(source)
    }
}

/// Parse both the rules and the test cases of a spec file.
///
/// Each half tokenizes the text independently.
///
/// # Errors
/// Returns the first [`SpecError`] raised by either [`load_rules`] or
/// [`load_testcases`].
pub fn load_site_spec(source: &str) -> Result<SiteSpec, SpecError> {
    Ok(SiteSpec {
        rules: load_rules(source)?,
        testcases: load_testcases(source)?,
    })
}

/// Read a whole spec file from `reader` and parse both halves.
///
/// # Errors
/// Returns [`SpecError::Io`] when reading fails, otherwise as
/// [`load_site_spec`].
pub fn read_site_spec<R: Read>(reader: R) -> Result<SiteSpec, SpecError> {
    let source = read_source(reader)?;
    load_site_spec(&source)
}

pub(crate) fn read_source<R: Read>(mut reader: R) -> Result<String, SpecError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{expect_err, expect_ok};

    const SAMPLE: &str = "\
title: //h1
find_string: <br><br>
replace_string: <p>
test_url: http://example.com/story
test_contains: Once upon a time
";

    #[test]
    fn parses_both_halves() {
        let spec: SiteSpec = expect_ok(SAMPLE.parse(), "spec should parse");
        assert_eq!(spec.rules.list("title"), ["//h1"]);
        assert_eq!(spec.rules.find_replace().len(), 1);
        assert_eq!(spec.testcases.len(), 1);
    }

    #[test]
    fn reader_matches_str_parsing() {
        let from_reader = expect_ok(read_site_spec(SAMPLE.as_bytes()), "spec should parse");
        let from_str = expect_ok(load_site_spec(SAMPLE), "spec should parse");
        assert_eq!(from_reader, from_str);
    }

    #[test]
    fn either_half_failing_fails_the_whole() {
        expect_err(load_site_spec("prune: maybe"), "rules should fail");
        expect_err(load_site_spec("test_contains: x"), "test cases should fail");
    }

    #[test]
    fn surfaces_invalid_utf8_as_io_error() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        let err = expect_err(read_source(bytes), "read should fail");
        assert!(matches!(err, SpecError::Io(_)));
    }
}
