//! Scalar cell values and their display formatting.
//!
//! Statistics files carry arbitrary JSON scalars. Rather than inspecting
//! `serde_json::Value` at render time, values are converted up front into the
//! closed [`Scalar`] variant, and each case carries its own stringify rule
//! (thousands separators apply to the numeric variants only).

use std::fmt;

use serde_json::Value;

/// A displayable cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Integer, rendered with thousands separators (`1,234,567`).
    Int(i64),
    /// Float, thousands separators on the integer digits (`1,234.5`).
    Float(f64),
    /// String, passed through unchanged.
    Str(String),
    /// Boolean, rendered `true` / `false`.
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => {
                if *n < 0 {
                    write!(f, "-{}", group_digits(&n.unsigned_abs().to_string()))
                } else {
                    f.write_str(&group_digits(&n.to_string()))
                }
            }
            Scalar::Float(x) => f.write_str(&format_float(*x)),
            Scalar::Str(s) => f.write_str(s),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&Value> for Scalar {
    /// Total conversion: any well-formed JSON value becomes a scalar.
    ///
    /// Null and composite values fall back to their compact JSON text, so the
    /// renderer never fails on unexpected shapes.
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Scalar::Int(i)
                } else if let Some(x) = n.as_f64() {
                    Scalar::Float(x)
                } else {
                    Scalar::Str(n.to_string())
                }
            }
            Value::String(s) => Scalar::Str(s.clone()),
            Value::Bool(b) => Scalar::Bool(*b),
            other => Scalar::Str(other.to_string()),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().rev().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    grouped.chars().rev().collect()
}

/// Format a float with thousands separators on its integer digits.
///
/// The fractional part is kept exactly as the shortest round-trip
/// representation produces it.
fn format_float(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let text = x.to_string();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    match rest.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}{}.{}", sign, group_digits(int_part), frac_part)
        }
        None => format!("{}{}", sign, group_digits(rest)),
    }
}
