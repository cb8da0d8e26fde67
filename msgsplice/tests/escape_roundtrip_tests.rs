use msgsplice::escape::{js_string_literal, properties_escape};
use proptest::prelude::*;

fn plain_value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _\\-\\.,!\\?]{0,30}").expect("valid value regex")
}

fn punctuated_value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ':=\\.,!\\?]{0,30}").expect("valid value regex")
}

proptest! {
    #[test]
    fn plain_values_pass_through_unchanged(value in plain_value_strategy()) {
        prop_assert_eq!(js_string_literal(&value), format!("'{}'", value));
    }

    #[test]
    fn js_literal_inverts_properties_escaping(value in punctuated_value_strategy()) {
        // Doubled quotes collapse and \: / \= unescape, so escaping then
        // re-reading yields the raw value with quotes backslash-escaped.
        let literal = js_string_literal(&properties_escape(&value));
        let expected = format!("'{}'", value.replace('\'', "\\'"));
        prop_assert_eq!(literal, expected);
    }
}

#[test]
fn splitter_literal_for_quoted_multiline_value() {
    assert_eq!(js_string_literal("a'b\nc"), "'a\\'b\\nc'");
}

#[test]
fn reverse_parse_escaping_example() {
    assert_eq!(properties_escape("it's: a=b"), "it''s\\: a\\=b");
}
