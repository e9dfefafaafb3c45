//! Rendering test values as source literals
//!
//! All three dialects share `format_number`, so an input classified as
//! integral in one language is integral in every other.

use crate::value::{format_number, is_integral, Value};

/// Literal syntax family of a target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// TypeScript / JavaScript
    Script,
    Php,
    Go,
}

/// Comma-separated argument list for a call expression, in input order.
pub fn render_arguments(inputs: &[Value], dialect: Dialect) -> String {
    inputs
        .iter()
        .map(|value| render_literal(value, dialect))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_literal(value: &Value, dialect: Dialect) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => match dialect {
            Dialect::Script | Dialect::Go => double_quoted(s),
            Dialect::Php => single_quoted(s),
        },
        Value::Sequence(items) => match dialect {
            Dialect::Script | Dialect::Php => {
                format!("[{}]", render_arguments(items, dialect))
            }
            Dialect::Go => format!("{}{{{}}}", go_type(value), render_arguments(items, dialect)),
        },
    }
}

/// Double-quoted string literal valid in both JavaScript and Go.
pub fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// PHP single-quoted literal: no variable interpolation, only `\\` and `\'`.
fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Go static type for a value, used to spell slice literals.
///
/// Integral numbers are `int`, others `float64`; a sequence mixing the two is
/// `[]float64`. Anything heterogeneous (or empty) falls back to `interface{}`
/// elements.
pub fn go_type(value: &Value) -> String {
    match value {
        Value::Bool(_) => "bool".to_string(),
        Value::Number(n) if is_integral(*n) => "int".to_string(),
        Value::Number(_) => "float64".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Sequence(items) => format!("[]{}", go_element_type(items)),
    }
}

fn go_element_type(items: &[Value]) -> String {
    let mut types = items.iter().map(go_type);
    let first = match types.next() {
        Some(t) => t,
        None => return "interface{}".to_string(),
    };

    types
        .try_fold(first, |acc, t| {
            if acc == t {
                Some(acc)
            } else if matches!(
                (acc.as_str(), t.as_str()),
                ("int", "float64") | ("float64", "int")
            ) {
                Some("float64".to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "interface{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[f64]) -> Vec<Value> {
        values.iter().map(|n| Value::Number(*n)).collect()
    }

    #[test]
    fn test_argument_count_and_order() {
        let inputs = vec![
            Value::Number(2.0),
            Value::String("x".into()),
            Value::Bool(true),
            Value::Number(0.5),
        ];
        for dialect in [Dialect::Script, Dialect::Php, Dialect::Go] {
            let rendered = render_arguments(&inputs, dialect);
            let parts: Vec<&str> = rendered.split(", ").collect();
            assert_eq!(parts.len(), 4, "{:?}: {}", dialect, rendered);
            assert_eq!(parts[0], "2");
            assert_eq!(parts[2], "true");
            assert_eq!(parts[3], "0.5");
        }
    }

    #[test]
    fn test_number_classification_is_shared() {
        for dialect in [Dialect::Script, Dialect::Php, Dialect::Go] {
            assert_eq!(render_literal(&Value::Number(10.0), dialect), "10");
            assert_eq!(render_literal(&Value::Number(-3.0), dialect), "-3");
            assert_eq!(render_literal(&Value::Number(3.25), dialect), "3.25");
            assert!(render_literal(&Value::Number(-0.75), dialect).contains('.'));
        }
    }

    #[test]
    fn test_string_quoting() {
        let s = Value::String("say \"hi\"\n".into());
        assert_eq!(render_literal(&s, Dialect::Script), r#""say \"hi\"\n""#);
        assert_eq!(render_literal(&s, Dialect::Go), r#""say \"hi\"\n""#);

        let php = Value::String("it's $x".into());
        assert_eq!(render_literal(&php, Dialect::Php), r"'it\'s $x'");
    }

    #[test]
    fn test_script_and_php_sequences() {
        let seq = Value::Sequence(vec![Value::Number(1.0), Value::String("a".into())]);
        assert_eq!(render_literal(&seq, Dialect::Script), r#"[1, "a"]"#);
        assert_eq!(render_literal(&seq, Dialect::Php), "[1, 'a']");
    }

    #[test]
    fn test_go_slice_literals() {
        assert_eq!(
            render_literal(&Value::Sequence(nums(&[1.0, 2.0, 3.0])), Dialect::Go),
            "[]int{1, 2, 3}"
        );
        assert_eq!(
            render_literal(&Value::Sequence(nums(&[1.0, 2.5])), Dialect::Go),
            "[]float64{1, 2.5}"
        );
        assert_eq!(
            render_literal(
                &Value::Sequence(vec![
                    Value::Sequence(nums(&[1.0])),
                    Value::Sequence(nums(&[2.0, 3.0])),
                ]),
                Dialect::Go
            ),
            "[][]int{[]int{1}, []int{2, 3}}"
        );
        assert_eq!(
            render_literal(
                &Value::Sequence(vec![Value::Number(1.0), Value::String("a".into())]),
                Dialect::Go
            ),
            r#"[]interface{}{1, "a"}"#
        );
        assert_eq!(
            render_literal(&Value::Sequence(vec![]), Dialect::Go),
            "[]interface{}{}"
        );
    }
}
