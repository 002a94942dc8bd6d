//! Extraction rules folded from the non-test directives of a spec file.

use std::collections::BTreeMap;
use std::io::Read;

use crate::directive::{Directive, directives};
use crate::errors::{INVALID_FLAG, REPLACE_WITHOUT_FIND, SpecError, invalid_spec};
use crate::kind::{DirectiveKind, FIND_REPLACE, parse_flag};
use crate::site::read_source;

/// One `find_string` / `replace_string` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FindReplace {
    /// Pattern to search for.
    pub find: String,
    /// Replacement text.
    pub replace: String,
}

impl FindReplace {
    /// Pair a find pattern with its replacement.
    #[must_use]
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// Borrowed view of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum RuleValue<'a> {
    /// Ordered values of a list rule.
    List(&'a [String]),
    /// Ordered find/replace pairs, stored under `find_replace`.
    FindReplace(&'a [FindReplace]),
    /// A boolean property.
    Flag(bool),
}

/// Scraper rules keyed by rule name.
///
/// Each name holds exactly one shape, chosen by its label: boolean properties
/// hold a flag, `find_replace` holds pairs and everything else holds a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    lists: BTreeMap<String, Vec<String>>,
    find_replace: Vec<FindReplace>,
    flags: BTreeMap<String, bool>,
}

impl Rules {
    /// Look up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<RuleValue<'_>> {
        if name == FIND_REPLACE {
            return (!self.find_replace.is_empty())
                .then_some(RuleValue::FindReplace(&self.find_replace));
        }
        if let Some(flag) = self.flags.get(name) {
            return Some(RuleValue::Flag(*flag));
        }
        self.lists
            .get(name)
            .map(|values| RuleValue::List(values.as_slice()))
    }

    /// Values of a list rule, or an empty slice when the rule is absent.
    ///
    /// # Examples
    /// ```
    /// let rules = sitespec::load_rules("strip: //nav\nstrip: //footer").unwrap();
    /// assert_eq!(rules.list("strip"), ["//nav", "//footer"]);
    /// assert!(rules.list("body").is_empty());
    /// ```
    #[must_use]
    pub fn list(&self, name: &str) -> &[String] {
        self.lists
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Find/replace pairs in file order.
    #[must_use]
    pub fn find_replace(&self) -> &[FindReplace] {
        &self.find_replace
    }

    /// Value of a boolean property, if the file set it.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    /// Whether a rule with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of named rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len() + self.flags.len() + usize::from(!self.find_replace.is_empty())
    }

    /// Whether no rules were defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All rules, sorted by name.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&str, RuleValue<'_>)> {
        let mut entries: Vec<_> = self
            .lists
            .iter()
            .map(|(name, values)| (name.as_str(), RuleValue::List(values.as_slice())))
            .chain(
                self.flags
                    .iter()
                    .map(|(name, flag)| (name.as_str(), RuleValue::Flag(*flag))),
            )
            .chain(
                (!self.find_replace.is_empty())
                    .then_some((FIND_REPLACE, RuleValue::FindReplace(&self.find_replace))),
            )
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rules {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Single-pass accumulator for [`Rules`].
#[derive(Debug, Default)]
pub(crate) struct RulesBuilder<'a> {
    rules: Rules,
    pending_find: Option<&'a str>,
}

impl<'a> RulesBuilder<'a> {
    pub(crate) fn push(&mut self, directive: Directive<'a>) -> Result<(), SpecError> {
        match directive.kind() {
            DirectiveKind::SectionStart | DirectiveKind::Test => {}
            DirectiveKind::FindString => {
                if let Some(unused) = self.pending_find.replace(directive.content) {
                    log::debug!(
                        "line {}: find_string replaces pending pattern `{unused}`",
                        directive.line
                    );
                }
            }
            DirectiveKind::ReplaceString => {
                // The pending pattern stays set, so a later replace_string
                // without a new find_string pairs with the same pattern.
                let Some(find) = self.pending_find else {
                    return Err(invalid_spec(REPLACE_WITHOUT_FIND, &directive));
                };
                self.rules
                    .find_replace
                    .push(FindReplace::new(find, directive.content));
            }
            DirectiveKind::Flag => {
                let value = parse_flag(directive.content)
                    .ok_or_else(|| invalid_spec(INVALID_FLAG, &directive))?;
                self.rules.flags.insert(directive.label.to_owned(), value);
            }
            DirectiveKind::Reserved => {
                log::warn!(
                    "line {}: `{}` is not a directive; use find_string and replace_string",
                    directive.line,
                    directive.label
                );
            }
            DirectiveKind::List => {
                self.rules
                    .lists
                    .entry(directive.label.to_owned())
                    .or_default()
                    .push(directive.content.to_owned());
            }
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> Rules {
        self.rules
    }
}

/// Parse scraper rules from spec file text.
///
/// Test directives are ignored. A line labelled `find_replace` itself is
/// skipped with a warning, because that name holds the pairs built from
/// `find_string` and `replace_string`.
///
/// # Errors
/// Returns [`SpecError::InvalidSpec`] when a `replace_string` has no earlier
/// `find_string`, or when a boolean property is neither `yes` nor `no`.
///
/// # Examples
/// ```
/// use sitespec::{FindReplace, load_rules};
///
/// let rules = load_rules("find_string: foo\nreplace_string: bar\nprune: no").unwrap();
/// assert_eq!(rules.find_replace(), [FindReplace::new("foo", "bar")]);
/// assert_eq!(rules.flag("prune"), Some(false));
/// ```
pub fn load_rules(source: &str) -> Result<Rules, SpecError> {
    let mut builder = RulesBuilder::default();
    for directive in directives(source) {
        builder.push(directive)?;
    }
    Ok(builder.finish())
}

/// Read a whole spec file from `reader` and parse its rules.
///
/// # Errors
/// Returns [`SpecError::Io`] when reading fails, otherwise as [`load_rules`].
pub fn read_rules<R: Read>(reader: R) -> Result<Rules, SpecError> {
    let source = read_source(reader)?;
    load_rules(&source)
}
