//! Heuristic correctness check for model responses.

use serde_json::{Map, Value};

use crate::suite::TestCase;

/// Decides whether a model response satisfies a test case.
///
/// The check is a coarse capability signal, not a grader: the expected
/// keyword is matched case-insensitively against every string value of the
/// parsed object (numbers match through their decimal rendering), and when
/// nothing in the object matches, or no object was parsed at all, the raw
/// text is searched as a fallback. The structured-or-raw leniency is
/// intentional and accepts the occasional false positive from a keyword
/// landing in an unrelated field.
pub fn check_correctness(
    case: &TestCase,
    parsed: Option<&Map<String, Value>>,
    raw_text: &str,
) -> bool {
    let expected = case.expected_keyword.to_lowercase();

    if let Some(map) = parsed {
        for value in map.values() {
            match value {
                Value::String(s) if s.to_lowercase().contains(&expected) => return true,
                Value::Number(n) if n.to_string().contains(&expected) => return true,
                _ => {}
            }
        }
    }

    raw_text.to_lowercase().contains(&expected)
}
