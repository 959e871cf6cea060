use std::fmt::Write;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
}

impl CheckOutcome {
    pub fn new(name: &'static str, passed: bool) -> Self {
        Self { name, passed }
    }
}

pub fn banner(endpoint: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\nLLM Endpoint Probe - {endpoint}\n{rule}")
}

/// Renders the final tally block. The congratulatory closing line only
/// appears when every check passed.
pub fn summary(outcomes: &[CheckOutcome]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "TEST SUMMARY");
    let _ = writeln!(out, "{rule}");

    for outcome in outcomes {
        let status = if outcome.passed {
            "✅ PASS"
        } else {
            "❌ FAIL"
        };
        let _ = writeln!(out, "{}: {}", outcome.name, status);
    }

    let total = outcomes.len();
    let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
    let _ = writeln!(out, "\nTotal: {passed}/{total} tests passed");

    if passed == total {
        let _ = writeln!(out, "\n🎉 All tests passed! The endpoint is working correctly.");
    } else {
        let _ = writeln!(out, "\n⚠️  Some tests failed. Check the errors above.");
    }

    out
}

pub fn all_passed(outcomes: &[CheckOutcome]) -> bool {
    outcomes.iter().all(|outcome| outcome.passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_outcomes() -> Vec<CheckOutcome> {
        vec![
            CheckOutcome::new("Basic Completion", true),
            CheckOutcome::new("Conversation Analysis", false),
            CheckOutcome::new("Available Models", true),
        ]
    }

    #[test]
    fn mixed_results_render_the_tally_without_congratulations() {
        let rendered = summary(&mixed_outcomes());

        assert!(rendered.contains("Basic Completion: ✅ PASS"));
        assert!(rendered.contains("Conversation Analysis: ❌ FAIL"));
        assert!(rendered.contains("Total: 2/3 tests passed"));
        assert!(!rendered.contains("All tests passed"));
        assert!(rendered.contains("Some tests failed"));
    }

    #[test]
    fn full_pass_renders_the_congratulatory_line() {
        let outcomes = vec![
            CheckOutcome::new("Basic Completion", true),
            CheckOutcome::new("Conversation Analysis", true),
            CheckOutcome::new("Available Models", true),
        ];

        let rendered = summary(&outcomes);
        assert!(rendered.contains("Total: 3/3 tests passed"));
        assert!(rendered.contains("🎉 All tests passed!"));
    }

    #[test]
    fn all_passed_reflects_the_outcome_mix() {
        assert!(!all_passed(&mixed_outcomes()));
        assert!(all_passed(&[CheckOutcome::new("Basic Completion", true)]));
        // An empty run has nothing failing.
        assert!(all_passed(&[]));
    }

    #[test]
    fn banner_names_the_endpoint() {
        let rendered = banner("https://llm.example.com");
        assert!(rendered.contains("LLM Endpoint Probe - https://llm.example.com"));
        assert!(rendered.starts_with(&"=".repeat(60)));
    }
}
