//! TypeScript and JavaScript harness (run on Node)

use super::render::{render_arguments, render_literal, Dialect};
use crate::challenge::{Challenge, TestCase};

/// Annotations the harness removes. Array forms come first so that
/// `: number[]` does not leave a stray `[]` behind.
pub const HARNESS_ANNOTATIONS: &[&str] = &[
    ": number[]",
    ": string[]",
    ": boolean[]",
    ": number",
    ": string",
    ": boolean",
];

/// The wider set the Node runtime strips from whatever it is handed.
pub const TRANSPILE_ANNOTATIONS: &[&str] = &[
    ": number[]",
    ": string[]",
    ": boolean[]",
    ": number",
    ": string",
    ": boolean",
    ": void",
    ": any",
];

/// Literal text substitution, not a parser: an annotation-looking sequence
/// inside a string literal is removed too.
pub fn strip_type_annotations(code: &str, annotations: &[&str]) -> String {
    annotations
        .iter()
        .fold(code.to_string(), |acc, annotation| acc.replace(annotation, ""))
}

pub fn generate(challenge: &Challenge, source: &str, test_case: &TestCase) -> String {
    let js_code = strip_type_annotations(source, HARNESS_ANNOTATIONS);
    let args = render_arguments(&test_case.input, Dialect::Script);
    let expected = render_literal(&test_case.expected, Dialect::Script);

    format!(
        r#"{js_code}

const result = {function}({args});
const expected = {expected};

if (JSON.stringify(result) === JSON.stringify(expected)) {{
  console.log("Test passed");
  process.exit(0);
}} else {{
  console.log("Expected:", expected, "Got:", result);
  process.exit(1);
}}"#,
        function = challenge.function_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::tests::challenge_for;
    use crate::value::Value;

    #[test]
    fn test_generate_typescript() {
        let challenge = challenge_for("typescript", "multiply");
        let source = "function multiply(a: number, b: number): number {\n    return a * b;\n}";
        let test_case = TestCase {
            input: vec![Value::Number(4.0), Value::Number(5.0)],
            expected: Value::Number(20.0),
            description: "should multiply two numbers".into(),
        };

        let program = generate(&challenge, source, &test_case);

        assert!(!program.contains(": number"));
        assert!(program.contains("function multiply(a, b) {"));
        assert!(program.contains("const result = multiply(4, 5);"));
        assert!(program.contains("const expected = 20;"));
        assert!(program.contains("JSON.stringify(result) === JSON.stringify(expected)"));
        assert!(program.contains("process.exit(0);"));
        assert!(program.contains("process.exit(1);"));
    }

    #[test]
    fn test_generate_with_strings_and_arrays() {
        let challenge = challenge_for("javascript", "join");
        let test_case = TestCase {
            input: vec![
                Value::Sequence(vec![Value::String("a".into()), Value::String("b".into())]),
                Value::String("-".into()),
            ],
            expected: Value::String("a-b".into()),
            description: "joins".into(),
        };

        let program = generate(&challenge, "function join(xs, sep) { return xs.join(sep); }", &test_case);
        assert!(program.contains(r#"const result = join(["a", "b"], "-");"#));
        assert!(program.contains(r#"const expected = "a-b";"#));
    }

    #[test]
    fn test_array_annotations_leave_no_brackets() {
        let stripped = strip_type_annotations(
            "function sum(xs: number[], label: string): number {",
            HARNESS_ANNOTATIONS,
        );
        assert_eq!(stripped, "function sum(xs, label) {");
    }

    #[test]
    fn test_transpile_set_strips_void_and_any() {
        let stripped = strip_type_annotations(
            "function log(x: any): void { console.log(x); }",
            TRANSPILE_ANNOTATIONS,
        );
        assert_eq!(stripped, "function log(x) { console.log(x); }");

        let untouched = strip_type_annotations("function log(x: any): void {}", HARNESS_ANNOTATIONS);
        assert!(untouched.contains(": any"));
    }

    #[test]
    fn test_decimal_input_keeps_point() {
        let challenge = challenge_for("typescript", "half");
        let test_case = TestCase {
            input: vec![Value::Number(2.5)],
            expected: Value::Number(1.25),
            description: "halves".into(),
        };
        let program = generate(&challenge, "function half(x) { return x / 2; }", &test_case);
        assert!(program.contains("const result = half(2.5);"));
        assert!(program.contains("const expected = 1.25;"));
    }
}
