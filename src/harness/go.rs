//! Go harness
//!
//! The submission is cleaned by the sanitizer and placed under a generated
//! `main` that imports only `fmt` and `os`.

use super::render::{double_quoted, render_arguments, render_literal, Dialect};
use super::sanitizer::sanitize_go_source;
use crate::challenge::{Challenge, TestCase};
use crate::value::Value;

pub fn generate(challenge: &Challenge, source: &str, test_case: &TestCase) -> String {
    let cleaned = sanitize_go_source(source);
    let call = format!(
        "{}({})",
        challenge.function_name,
        render_arguments(&test_case.input, Dialect::Go)
    );

    let test_logic = match test_case.expected.as_sequence() {
        Some([first, second]) => two_value_check(&call, first, second),
        // Only the two-value shape is bound separately; any other sequence
        // is compared through its `%v` text.
        Some(_) => textual_check(&call, &test_case.expected),
        None => single_value_check(&call, &test_case.expected),
    };

    format!(
        r#"package main

import (
	"fmt"
	"os"
)

{cleaned}

func main() {{
{test_logic}
}}"#
    )
}

fn two_value_check(call: &str, first: &Value, second: &Value) -> String {
    format!(
        r#"	result1, result2 := {call}
	expected1, expected2 := {e1}, {e2}

	if result1 == expected1 && result2 == expected2 {{
		fmt.Println("Test passed")
		os.Exit(0)
	}} else {{
		fmt.Printf("Expected: [%v, %v] Got: [%v, %v]\n", expected1, expected2, result1, result2)
		os.Exit(1)
	}}"#,
        e1 = render_literal(first, Dialect::Go),
        e2 = render_literal(second, Dialect::Go),
    )
}

fn textual_check(call: &str, expected: &Value) -> String {
    format!(
        r#"	result := {call}
	expected := {expected}

	if fmt.Sprintf("%v", result) == expected {{
		fmt.Println("Test passed")
		os.Exit(0)
	}} else {{
		fmt.Printf("Expected: %v Got: %v\n", expected, result)
		os.Exit(1)
	}}"#,
        expected = double_quoted(&expected.to_string()),
    )
}

fn single_value_check(call: &str, expected: &Value) -> String {
    format!(
        r#"	result := {call}
	expected := {expected}

	if result == expected {{
		fmt.Println("Test passed")
		os.Exit(0)
	}} else {{
		fmt.Printf("Expected: %v Got: %v\n", expected, result)
		os.Exit(1)
	}}"#,
        expected = render_literal(expected, Dialect::Go),
    )
}
