//! Statistics snapshots over classified collections.
//!
//! All snapshots are computed on demand with single linear scans; nothing is
//! maintained incrementally. Every statistic is order-independent, so the
//! interleaved ordering preserved by [`crate::routing::route`] does not
//! affect the results.
//!
//! The numeric snapshots ([`int_stats`], [`float_stats`]) are a guarded
//! contract: they panic on an empty collection, and callers must check
//! emptiness first. The text snapshot ([`text_stats`]) instead reports zero
//! length extremes for an empty collection. The asymmetry is deliberate and
//! kept as-is.

use serde::Serialize;

/// Summary of an integer collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntStats {
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: i64,
    /// Largest value.
    pub max: i64,
    /// Sum of all values. Accumulated in `i64`; overflow wraps silently in
    /// release builds and is deliberately unguarded.
    pub sum: i64,
    /// Arithmetic mean, computed in `f64`.
    pub avg: f64,
}

/// Summary of a float collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatStats {
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: f32,
    /// Largest value.
    pub max: f32,
    /// Sum of all values, accumulated in `f64` to reduce rounding error.
    pub sum: f64,
    /// Arithmetic mean, computed in `f64`.
    pub avg: f64,
}

/// Summary of a text collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Number of values.
    pub count: usize,
    /// Length of the shortest string, or 0 if the collection is empty.
    pub min_len: usize,
    /// Length of the longest string, or 0 if the collection is empty.
    pub max_len: usize,
}

/// Compute the integer summary.
///
/// # Panics
///
/// Panics if `values` is empty. Callers must check emptiness first.
pub fn int_stats(values: &[i64]) -> IntStats {
    let mut min = values[0];
    let mut max = values[0];
    let mut sum: i64 = 0;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        sum = sum.wrapping_add(v);
    }

    IntStats {
        count: values.len(),
        min,
        max,
        sum,
        avg: sum as f64 / values.len() as f64,
    }
}

/// Compute the float summary.
///
/// Inputs are `f32`, but the sum (and therefore the average) accumulates in
/// `f64`.
///
/// # Panics
///
/// Panics if `values` is empty. Callers must check emptiness first.
pub fn float_stats(values: &[f32]) -> FloatStats {
    let mut min = values[0];
    let mut max = values[0];
    let mut sum: f64 = 0.0;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        sum += f64::from(v);
    }

    FloatStats {
        count: values.len(),
        min,
        max,
        sum,
        avg: sum / values.len() as f64,
    }
}

/// Compute the text summary.
///
/// Unlike the numeric summaries, an empty collection is valid here and
/// reports zero for both length extremes.
pub fn text_stats(values: &[String]) -> TextStats {
    let Some(first) = values.first() else {
        return TextStats {
            count: 0,
            min_len: 0,
            max_len: 0,
        };
    };

    let mut min_len = first.len();
    let mut max_len = first.len();
    for s in values {
        let len = s.len();
        if len < min_len {
            min_len = len;
        }
        if len > max_len {
            max_len = len;
        }
    }

    TextStats {
        count: values.len(),
        min_len,
        max_len,
    }
}
