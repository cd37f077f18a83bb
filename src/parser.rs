//! Extraction of a JSON object from free-form model output.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Non-greedy brace span. This is a deliberate best-effort heuristic: on
/// malformed or nested JSON it can capture the wrong span, and that behavior
/// is part of the benchmark's observable semantics.
fn brace_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{[\s\S]*?\}").expect("valid brace-span regex"))
}

/// Attempts to interpret a model's raw text output as a JSON object.
///
/// Strategies, first success wins:
/// 1. the whole trimmed string parses as a JSON object;
/// 2. after stripping code-fence delimiters, the first non-greedy `{...}`
///    span parses as a JSON object.
///
/// Returns `None` when the text is empty, nothing parses, or the parsed
/// value is not an object. Parse failures never escape as errors; an
/// unparseable response is a normal outcome handled by the evaluator's
/// raw-text fallback.
pub fn parse_json_response(text: &str) -> Option<Map<String, Value>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        return Some(map);
    }

    let cleaned = trimmed.replace("```json", "").replace("```", "");
    let span = brace_span().find(&cleaned)?;
    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_json_object() {
        let parsed = parse_json_response(r#"{"a": "1", "b": 2}"#).expect("object");
        assert_eq!(parsed.get("a"), Some(&json!("1")));
        assert_eq!(parsed.get("b"), Some(&json!(2)));
    }

    #[test]
    fn parses_object_embedded_in_prose() {
        let text = "Here is the answer:\n{\"final_answer\": \"0.625\"}\nHope that helps.";
        let parsed = parse_json_response(text).expect("object");
        assert_eq!(parsed.get("final_answer"), Some(&json!("0.625")));
    }

    #[test]
    fn parses_object_inside_code_fence() {
        let text = "```json\n{\"code\": \"def maxPathSum(root): ...\"}\n```";
        let parsed = parse_json_response(text).expect("object");
        assert!(parsed.contains_key("code"));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(parse_json_response("[1,2,3]").is_none());
        assert!(parse_json_response("42").is_none());
        assert!(parse_json_response("\"just a string\"").is_none());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_json_response("").is_none());
        assert!(parse_json_response("   \n\t  ").is_none());
    }

    #[test]
    fn rejects_text_without_parseable_span() {
        assert!(parse_json_response("no json here at all").is_none());
        assert!(parse_json_response("{not valid json}").is_none());
    }

    #[test]
    fn non_greedy_span_stops_at_first_closing_brace() {
        // Nested objects defeat the heuristic by design: the span ends at
        // the first `}` and fails to parse, so the result is None.
        let text = "prefix {\"outer\": {\"inner\": 1}} suffix";
        assert!(parse_json_response(text).is_none());
    }
}
