//! Reader for Instapaper-style site spec files.
//!
//! A spec file is a list of `label: content` lines with optional `#`
//! comments. The same text carries two things: extraction rules for a scraper,
//! and `test_*` directives describing self-test cases. [`load_rules`] and
//! [`load_testcases`] each tokenize the text and fold it into one of those
//! structures; neither executes or validates the rules themselves.

mod directive;
mod errors;
mod kind;
mod rules;
mod site;
#[cfg(test)]
mod test_support;
mod testcases;

pub use directive::{Directive, Directives, directives};
pub use errors::{InvalidSpecInfo, SpecError};
pub use kind::{
    BOOLEAN_PROPERTIES, DirectiveKind, FIND_REPLACE, FIND_STRING, REPLACE_STRING, SECTION_START,
    TEST_PREFIX, parse_flag,
};
pub use rules::{FindReplace, RuleValue, Rules, load_rules, read_rules};
pub use site::{SiteSpec, load_site_spec, read_site_spec};
pub use testcases::{TestCase, TestValue, load_testcases, read_testcases};
