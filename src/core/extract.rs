// src/core/extract.rs
// Embedded-object extraction from raw HTML.
// The schedule page assigns two bare JS object literals (standard JSON
// syntax) to DisconSchedule.fact / DisconSchedule.preset; nothing but the
// marker text delimits them, so boundaries come from a balanced-brace scan.

use crate::error::ExtractError;

/// Return the exact substring of the first balanced `{...}` object
/// following `marker` in `text`.
///
/// The scan tracks string-literal state (including `\"` escapes), so braces
/// inside quoted values cannot corrupt the depth count. Works for any
/// marker; the caller decides whether a missing block is fatal.
pub fn extract_object<'a>(text: &'a str, marker: &str) -> Result<&'a str, ExtractError> {
    let at = text
        .find(marker)
        .ok_or_else(|| ExtractError::MarkerNotFound(marker.into()))?;
    let rel = text[at..]
        .find('{')
        .ok_or_else(|| ExtractError::ObjectNotFound(marker.into()))?;
    let start = at + rel;

    let mut depth = 0i32;
    let mut in_string = false;
    let mut escaped = false;

    // Braces and quotes are ASCII, so a byte scan is safe and every slice
    // boundary below lands on a char boundary.
    for (i, b) in text[start..].bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    Err(ExtractError::Unterminated(marker.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_object_ignores_trailing_garbage() {
        let text = r#"<script>Data.fact = {"a":1}; var x = {"b":2};</script>"#;
        assert_eq!(extract_object(text, "Data.fact = {").unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn one_level_nesting() {
        let obj = r#"{"update":"12:00","data":{"1700000000":1}}"#;
        let text = format!("DisconSchedule.fact = {obj};");
        assert_eq!(extract_object(&text, "DisconSchedule.fact = {").unwrap(), obj);
    }

    #[test]
    fn nested_object_depth_five() {
        let obj = r#"{"a":{"b":{"c":{"d":{"e":1}}}},"f":2}"#;
        let text = format!("noise Data.fact = {obj}; tail {{}}");
        assert_eq!(extract_object(&text, "Data.fact = {").unwrap(), obj);
    }

    #[test]
    fn marker_absent() {
        let text = r#"{"a":1}"#;
        assert_eq!(
            extract_object(text, "Data.fact = {"),
            Err(ExtractError::MarkerNotFound("Data.fact = {".into()))
        );
    }

    #[test]
    fn no_object_after_marker() {
        let text = "window.cfg = null;";
        assert_eq!(
            extract_object(text, "window.cfg ="),
            Err(ExtractError::ObjectNotFound("window.cfg =".into()))
        );
    }

    #[test]
    fn braces_inside_string_values() {
        let obj = r#"{"a":"}{","b":{"c":"{{{"}}"#;
        let text = format!("Data.fact = {obj}; }}");
        assert_eq!(extract_object(&text, "Data.fact = {").unwrap(), obj);
    }

    #[test]
    fn escaped_quote_inside_string() {
        let obj = r#"{"a":"\"}","b":1}"#;
        let text = format!("Data.fact = {obj};");
        assert_eq!(extract_object(&text, "Data.fact = {").unwrap(), obj);
    }

    #[test]
    fn unterminated_object() {
        let text = r#"Data.fact = {"a":{"b":1}"#;
        assert_eq!(
            extract_object(text, "Data.fact = {"),
            Err(ExtractError::Unterminated("Data.fact = {".into()))
        );
    }

    #[test]
    fn marker_may_sit_mid_document_with_unicode_noise() {
        let text = "графіки відключень Data.fact = {\"час\":\"06:30\"} далі";
        assert_eq!(
            extract_object(text, "Data.fact = {").unwrap(),
            "{\"час\":\"06:30\"}"
        );
    }

    #[test]
    fn first_marker_occurrence_wins() {
        let text = r#"Data.fact = {"first":1}; Data.fact = {"second":2};"#;
        assert_eq!(
            extract_object(text, "Data.fact = {").unwrap(),
            r#"{"first":1}"#
        );
    }
}
