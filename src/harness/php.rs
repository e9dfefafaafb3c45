//! PHP harness

use super::render::{render_arguments, render_literal, Dialect};
use crate::challenge::{Challenge, TestCase};

const OPEN_TAG: &str = "<?php";
const CLOSE_TAG: &str = "?>";

/// Drop the submission's own outer `<?php` / `?>` so the generated program
/// has exactly one pair.
fn strip_php_tags(source: &str) -> &str {
    let mut code = source.trim();
    if let Some(rest) = code.strip_prefix(OPEN_TAG) {
        code = rest;
    }
    if let Some(rest) = code.strip_suffix(CLOSE_TAG) {
        code = rest;
    }
    code.trim()
}

pub fn generate(challenge: &Challenge, source: &str, test_case: &TestCase) -> String {
    let code = strip_php_tags(source);
    let args = render_arguments(&test_case.input, Dialect::Php);
    let expected = render_literal(&test_case.expected, Dialect::Php);

    format!(
        r#"{OPEN_TAG}
{code}

$result = {function}({args});
$expected = {expected};

if ($result === $expected) {{
    echo "Test passed\n";
    exit(0);
}} else {{
    echo "Expected: " . var_export($expected, true) . " Got: " . var_export($result, true) . "\n";
    exit(1);
}}
{CLOSE_TAG}"#,
        function = challenge.function_name,
    )
}
