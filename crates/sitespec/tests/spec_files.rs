//! Behavioural tests for loading whole spec files.
#![expect(clippy::expect_used, reason = "tests assert parse outcomes")]

use rstest::{fixture, rstest};
use sitespec::{
    FindReplace, RuleValue, SpecError, directives, load_rules, load_site_spec, load_testcases,
    read_rules, read_testcases,
};

#[fixture]
fn site_config() -> &'static str {
    "\
# example.com article pages
title: //h1[@class='headline']
body: //div[@id='story']   # main column
strip_id_or_class: decoration
strip_id_or_class: share-bar
prune: no
find_string: <p>&nbsp;</p>
replace_string: <br>
replace_string: <hr>
this line is ignored
test_url: http://example.com/2014/01/a-story.html
test_contains: It was a dark and stormy night
test_contains: The end
test_url: http://example.com/2014/02/another.html
test_title: Another story
"
}

#[test]
fn tokenizer_strips_whitespace_and_comments() {
    let pairs: Vec<_> = directives("  strip_id_or_class  :  decoration  # remove decorations")
        .map(|d| d.as_pair())
        .collect();
    assert_eq!(pairs, vec![("strip_id_or_class", "decoration")]);
}

#[rstest]
#[case("")]
#[case("no colon on this line")]
fn tokenizer_skips_lines_without_directive(#[case] source: &str) {
    assert_eq!(directives(source).count(), 0);
}

#[rstest]
fn loads_rules_from_full_file(site_config: &str) {
    let rules = load_rules(site_config).expect("rules should parse");
    assert_eq!(rules.list("title"), ["//h1[@class='headline']"]);
    assert_eq!(rules.list("body"), ["//div[@id='story']"]);
    assert_eq!(rules.list("strip_id_or_class"), ["decoration", "share-bar"]);
    assert_eq!(rules.flag("prune"), Some(false));
    assert_eq!(
        rules.find_replace(),
        [
            FindReplace::new("<p>&nbsp;</p>", "<br>"),
            FindReplace::new("<p>&nbsp;</p>", "<hr>"),
        ]
    );
    assert!(rules.iter().all(|(name, _)| !name.starts_with("test_")));
}

#[rstest]
fn loads_testcases_from_full_file(site_config: &str) {
    let cases = load_testcases(site_config).expect("test cases should parse");
    let summary: Vec<_> = cases
        .iter()
        .map(|case| (case.url(), case.fields().count()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("http://example.com/2014/01/a-story.html", 1),
            ("http://example.com/2014/02/another.html", 1),
        ]
    );
    let first = cases.first().expect("first case");
    assert_eq!(
        first.field("test_contains"),
        ["It was a dark and stormy night", "The end"]
    );
    let second = cases.last().expect("second case");
    assert_eq!(second.field("test_title"), ["Another story"]);
    assert!(second.field("test_contains").is_empty());
}

#[test]
fn find_and_replace_pair_up() {
    let rules = load_rules("find_string: foo\nreplace_string: bar").expect("rules should parse");
    assert_eq!(rules.len(), 1);
    assert_eq!(
        rules.get("find_replace"),
        Some(RuleValue::FindReplace(&[FindReplace::new("foo", "bar")]))
    );
}

#[test]
fn replace_without_find_is_invalid() {
    let Err(err) = load_rules("replace_string: bar") else {
        panic!("expected invalid spec");
    };
    assert!(matches!(err, SpecError::InvalidSpec(_)));
    assert!(err.to_string().contains("replace_string without preceding find_string"));
}

#[test]
fn last_boolean_value_wins() {
    let rules = load_rules("prune: yes\nprune: no").expect("rules should parse");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules.get("prune"), Some(RuleValue::Flag(false)));
}

#[test]
fn unknown_boolean_value_is_invalid() {
    let Err(err) = load_rules("prune: maybe") else {
        panic!("expected invalid spec");
    };
    let info = err.invalid_spec().expect("spec error details");
    assert_eq!(info.line, 1);
    assert_eq!(info.label, "prune");
}

#[test]
fn test_directive_before_url_is_invalid() {
    let Err(err) = load_testcases("test_contains: Hello") else {
        panic!("expected invalid spec");
    };
    assert!(err.to_string().contains("test directive before section start"));
}

#[test]
fn errors_report_the_offending_line() {
    let Err(err) = load_rules("title: //h1\n\n# comment\nreplace_string: x") else {
        panic!("expected invalid spec");
    };
    assert_eq!(err.invalid_spec().map(|info| info.line), Some(4));
}

#[rstest]
fn parsing_is_deterministic(site_config: &str) {
    let first = load_site_spec(site_config).expect("spec should parse");
    let second = load_site_spec(site_config).expect("spec should parse");
    assert_eq!(first, second);
}

#[rstest]
fn reader_entry_points_match_str_entry_points(site_config: &str) {
    let rules = read_rules(site_config.as_bytes()).expect("rules should parse");
    let cases = read_testcases(site_config.as_bytes()).expect("test cases should parse");
    assert_eq!(rules, load_rules(site_config).expect("rules should parse"));
    assert_eq!(cases, load_testcases(site_config).expect("test cases should parse"));
}
