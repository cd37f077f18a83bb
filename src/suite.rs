//! The fixed battery of benchmark prompts.
//!
//! Three test cases, one per [`Category`], each asking the model for a JSON
//! response and carrying the keyword that signals a correct answer.

/// The three capability areas the benchmark probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Logical fallacy identification
    Logic,
    /// Conditional probability
    Math,
    /// Recursive algorithm implementation
    Coding,
}

impl Category {
    /// Upper-case label used in transcripts and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Logic => "LOGIC",
            Category::Math => "MATH",
            Category::Coding => "CODING",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single benchmark prompt with its correctness signal.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    /// Stable identifier recorded in the transcript.
    pub id: &'static str,
    /// Capability area this case probes.
    pub category: Category,
    /// Prompt sent verbatim to the model.
    pub prompt: &'static str,
    /// Case-insensitive substring that marks a correct answer.
    pub expected_keyword: &'static str,
}

const LOGIC_PROMPT: &str = r#"Analyze the following argument and identify the logical fallacy present.
Explain your reasoning clearly.

ARGUMENT:
"My opponent suggests that lowering taxes will be a good idea -- this is coming from a woman who eats a pint of Ben and Jerry's each night!"

RESPONSE FORMAT (JSON):
{
  "fallacy_name": "Name of the fallacy",
  "reasoning": "Explanation of why this is a fallacy",
  "correct": "YES/NO (Internal self-check)"
}
"#;

const MATH_PROMPT: &str = r#"Solve this probability problem. Show your work step-by-step.

PROBLEM:
In a factory, Machine A produces 60% of the items and Machine B produces 40%.
2% of the items produced by Machine A are defective, while 5% of the items produced by Machine B are defective.
If a randomly selected item is defective, what is the probability that it was produced by Machine B?

RESPONSE FORMAT (JSON):
{
  "final_answer": "The numerical probability (e.g., 0.45 or 45%)",
  "steps": "Summary of steps taken",
  "calculation_check": "Validation of the final number"
}
"#;

const CODING_PROMPT: &str = r#"Write a Python function to solve the following problem.

PROBLEM:
Given a binary tree, find the maximum path sum. The path may start and end at any node in the tree.
The path must contain at least one node and does not need to go through the root.

REQUIREMENTS:
- Use Python 3.
- Include a 'maxPathSum' function.
- Handle negative node values correctly.
- Provide 2-3 unit tests.

RESPONSE FORMAT (JSON):
{
  "code": "The full Python code string",
  "complexity": "Time and Space complexity analysis",
  "explanation": "Brief explanation of the algorithm"
}
"#;

static TEST_CASES: [TestCase; 3] = [
    TestCase {
        id: "test_logic_ad_hominem",
        category: Category::Logic,
        prompt: LOGIC_PROMPT,
        expected_keyword: "Ad Hominem",
    },
    TestCase {
        id: "test_math_bayes_theorem",
        category: Category::Math,
        prompt: MATH_PROMPT,
        // or 62.5%
        expected_keyword: "0.625",
    },
    TestCase {
        id: "test_code_max_path_sum",
        category: Category::Coding,
        prompt: CODING_PROMPT,
        expected_keyword: "maxPathSum",
    },
];

/// Returns the fixed, ordered battery of test cases.
///
/// Order is significant only for deterministic transcript and log output.
pub fn test_cases() -> &'static [TestCase; 3] {
    &TEST_CASES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_one_case_per_category() {
        let cases = test_cases();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].category, Category::Logic);
        assert_eq!(cases[1].category, Category::Math);
        assert_eq!(cases[2].category, Category::Coding);
    }

    #[test]
    fn registry_entries_are_non_empty() {
        for case in test_cases() {
            assert!(!case.id.is_empty());
            assert!(!case.prompt.is_empty());
            assert!(!case.expected_keyword.is_empty());
        }
    }
}
