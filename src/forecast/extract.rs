// ABOUTME: Recovers the first balanced JSON object embedded in free-form text
// ABOUTME: String-aware brace scanner tolerant of prose before and after the object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! JSON-in-text extraction.
//!
//! Generation models routinely wrap the requested JSON object in commentary
//! ("Here you go: {...} Hope that helps!"). [`extract_json_object`] locates
//! the first balanced `{...}` span in the raw reply. The scanner tracks JSON
//! string literals and escape sequences, so braces inside string values do
//! not affect balance. Whether the span is *valid* JSON is left to the
//! deserializer downstream.

/// Locate the first balanced `{...}` span in `text`
///
/// Returns `None` when the text contains no opening brace or the braces
/// never balance (e.g. a truncated reply).
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn bare_object_is_returned_whole() {
        let text = r#"{"a": 1}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let text = r#"Here you go: {"overallScore":75,"keywords":["calm"]} Hope that helps!"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"overallScore":75,"keywords":["calm"]}"#)
        );
    }

    #[test]
    fn nested_objects_balance() {
        let text = r#"reply: {"outer": {"inner": {"deep": true}}} done"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"outer": {"inner": {"deep": true}}}"#)
        );
    }

    #[test]
    fn braces_inside_string_literals_do_not_unbalance() {
        let text = r#"{"advice": "take a {deep} breath }{", "score": 3}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn escaped_quotes_inside_strings_are_handled() {
        let text = r#"{"quote": "she said \"go {now}\" twice"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn no_object_yields_none() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn unbalanced_object_yields_none() {
        assert_eq!(extract_json_object(r#"{"truncated": "repl"#), None);
    }

    #[test]
    fn only_the_first_object_is_returned() {
        let text = r#"{"first": 1} and {"second": 2}"#;
        assert_eq!(extract_json_object(text), Some(r#"{"first": 1}"#));
    }

    #[test]
    fn multiline_pretty_printed_object() {
        let text = "Sure!\n```json\n{\n  \"score\": 50,\n  \"note\": \"ok\"\n}\n```";
        assert_eq!(
            extract_json_object(text),
            Some("{\n  \"score\": 50,\n  \"note\": \"ok\"\n}")
        );
    }
}
