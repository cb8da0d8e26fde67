//! Shared escaping helpers for properties and JavaScript message text.
//!
//! The splitter and combiner are inverse transcodings of the same key/value
//! pairs; these routines carry values between the two concrete syntaxes.

/// Renders properties-escaped value text as a single-quoted JavaScript
/// string literal.
///
/// Doubled single quotes collapse back to one before the survivors are
/// backslash-escaped; newlines and carriage returns become `\n`/`\r`
/// escapes; `\:` and `\=` left over from properties escaping turn back into
/// plain `:`/`=`.
pub fn js_string_literal(text: &str) -> String {
    let escaped = text
        .replace("''", "'")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace("\\:", ":")
        .replace("\\=", "=");
    format!("'{escaped}'")
}

/// Re-escapes a raw JavaScript string fragment as a properties value.
/// Backslash unescaping runs before quote doubling.
pub fn properties_escape(text: &str) -> String {
    text.replace("\\\\", "\\")
        .replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace('\'', "''")
        .replace(':', "\\:")
        .replace('=', "\\=")
}

/// Doubles single quotes the way frontend properties values expect.
pub fn double_single_quotes(text: &str) -> String {
    text.replace('\'', "''")
}

/// Removes every whitespace run from `text`.
pub fn strip_whitespace(text: &str) -> String {
    text.split_whitespace().collect()
}
