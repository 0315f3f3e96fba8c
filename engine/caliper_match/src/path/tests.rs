use pretty_assertions::assert_eq;

use super::*;

#[test]
fn identifier_keys_use_dot_form() {
    assert_eq!(extend_key("foo", "bar"), "foo.bar");
    assert_eq!(extend_key("$set", "people"), "$set.people");
    assert_eq!(extend_key("[0]", "$FoO"), "[0].$FoO");
}

#[test]
fn identifier_keys_are_bare_at_the_root() {
    assert_eq!(extend_key("", "foo"), "foo");
    assert_eq!(extend_key("", "_underscore"), "_underscore");
    assert_eq!(extend_key("", "$set"), "$set");
}

#[test]
fn indices_are_bracketed() {
    assert_eq!(extend_index("", 0), "[0]");
    assert_eq!(extend_index("foo", 1), "foo[1]");
    assert_eq!(extend_index(extend_index("", 1).as_str(), 0), "[1][0]");
}

#[test]
fn numeric_keys_are_bracketed_without_quotes() {
    assert_eq!(extend_key("", "1231"), "[1231]");
    assert_eq!(extend_key("doc", "007"), "doc[007]");
}

#[test]
fn digit_led_keys_are_quoted() {
    assert_eq!(extend_key("", "1234abcd"), "[\"1234abcd\"]");
}

#[test]
fn reserved_words_are_quoted() {
    assert_eq!(extend_key("", "return"), "[\"return\"]");
    assert_eq!(extend_key("outer", "typeof"), "outer[\"typeof\"]");
}

#[test]
fn awkward_keys_are_quoted_and_escaped() {
    assert_eq!(
        extend_key("[0].$FoO", "bar baz\n\"'"),
        "[0].$FoO[\"bar baz\\n\\\"'\"]"
    );
    assert_eq!(extend_key("", "a\\b"), "[\"a\\\\b\"]");
    assert_eq!(extend_key("", "tab\tkey"), "[\"tab\\tkey\"]");
    assert_eq!(extend_key("", ""), "[\"\"]");
}
