// src/utils.rs
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched when encoding query values: alphanumerics plus
/// `_ . - ~ /`, the same safe set most URL quoting helpers use.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a value for use inside a URL
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Title-case a label: every letter that follows a non-letter is upper-cased,
/// every other letter is lower-cased ("power bi" -> "Power Bi", "ci/cd" -> "Ci/Cd").
pub fn title_case(label: &str) -> String {
    let mut result = String::with_capacity(label.len());
    let mut previous_is_letter = false;

    for c in label.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

/// Key used for case-insensitive skill comparisons
pub fn skill_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Format a demand percentage the way reports display it
pub fn format_demand(percentage: f64) -> String {
    format!("{:.1}% of jobs", percentage)
}

/// Collapse all whitespace runs (including newlines) into single spaces
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape text for interpolation into HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
