//! Line classification.
//!
//! The classifier is stateless: a single pure function mapping a line of text
//! to exactly one [`ClassifiedValue`] variant. It never fails; anything that
//! is not a number is text.

use crate::types::{ClassifiedValue, LineKind};

/// Classify a single line of text.
///
/// Leading and trailing whitespace is stripped first, then the rules apply in
/// strict precedence order:
///
/// 1. The trimmed line parses as an `i64` (base 10, optional leading `+`/`-`,
///    no fractional part, no exponent, within range) → [`ClassifiedValue::Integer`].
/// 2. Else the trimmed line parses as an `f32` → [`ClassifiedValue::Float`].
/// 3. Else → [`ClassifiedValue::Text`] holding the trimmed line verbatim.
///
/// Precedence matters: `"42"` is an Integer, never Text; `"3.14"` and `"1e10"`
/// fail integer parsing and become Floats. Digit strings outside `i64` range
/// still parse as `f32` and become Floats. An empty trimmed line is Text.
///
/// The float grammar is Rust's [`f32::from_str`](std::primitive::f32): decimal
/// and exponential notation plus case-insensitive `inf`, `infinity`, and `nan`
/// with optional sign. Hexadecimal float notation is not accepted.
pub fn classify(line: &str) -> ClassifiedValue {
    let trimmed = line.trim();

    if let Ok(v) = trimmed.parse::<i64>() {
        return ClassifiedValue::Integer(v);
    }
    if let Ok(v) = trimmed.parse::<f32>() {
        return ClassifiedValue::Float(v);
    }
    ClassifiedValue::Text(trimmed.to_owned())
}

/// Classify a line without materializing the value.
///
/// Equivalent to `classify(line).kind()` but avoids allocating for text
/// lines. Used by the sink pre-scan, which only needs to know which kinds
/// occur.
pub fn kind_of(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.parse::<i64>().is_ok() {
        LineKind::Integer
    } else if trimmed.parse::<f32>().is_ok() {
        LineKind::Float
    } else {
        LineKind::Text
    }
}
