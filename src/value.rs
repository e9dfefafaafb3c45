//! Dynamically typed test values decoded from the challenge catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// A test input or expected value.
///
/// JSON `null` and objects are not part of the domain; a catalog containing
/// them fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<Value>),
}

impl Value {
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

/// Whether a number is equal to its own truncation towards zero.
///
/// Every language path uses this one rule to decide between an integer and
/// a decimal literal.
pub fn is_integral(n: f64) -> bool {
    n.is_finite() && n == n.trunc()
}

/// Renders a number with the integral/non-integral rule applied.
pub fn format_number(n: f64) -> String {
    if is_integral(n) {
        let s = format!("{:.0}", n);
        if s == "-0" {
            "0".to_string()
        } else {
            s
        }
    } else {
        // f64's Display never switches to exponent form, so a fractional
        // value always carries a decimal point here.
        n.to_string()
    }
}

/// Go's `%v` text for a `float64` that is not integral.
///
/// Shortest digits, switching to exponent form (`1e-07`, `1.5e+06`) when
/// the decimal exponent is below -4 or at least 6.
fn go_float_text(n: f64) -> String {
    let sci = format!("{:e}", n);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return n.to_string(),
    };
    let exponent: i32 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => return n.to_string(),
    };

    if (-4..6).contains(&exponent) {
        n.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Generic textual form, matching Go's `%v` verb for the same data.
///
/// Integral numbers print as Go prints an `int`; a `float64` holding an
/// integral value of a million or more would print in exponent form in Go.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) if is_integral(*n) => write!(f, "{}", format_number(*n)),
            Value::Number(n) => write!(f, "{}", go_float_text(*n)),
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
