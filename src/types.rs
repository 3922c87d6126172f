//! Core data model types for line classification.
//!
//! This crate classifies each trimmed input line into exactly one
//! [`ClassifiedValue`] variant and accumulates the results in [`Partitions`].

/// Logical kind of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// 64-bit signed integer.
    Integer,
    /// 32-bit floating point number.
    Float,
    /// Anything else, kept verbatim.
    Text,
}

impl LineKind {
    /// Default output file name for this kind.
    pub fn file_name(self) -> &'static str {
        match self {
            LineKind::Integer => "integers.txt",
            LineKind::Float => "floats.txt",
            LineKind::Text => "strings.txt",
        }
    }
}

/// A single classified line.
///
/// Classification is total: every line maps to exactly one variant, and the
/// mapping is deterministic (see [`crate::classify::classify`]).
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedValue {
    /// The line parsed as a 64-bit signed integer.
    Integer(i64),
    /// The line parsed as a 32-bit float (but not as an integer).
    Float(f32),
    /// The trimmed line, verbatim.
    Text(String),
}

impl ClassifiedValue {
    /// The [`LineKind`] of this value.
    pub fn kind(&self) -> LineKind {
        match self {
            ClassifiedValue::Integer(_) => LineKind::Integer,
            ClassifiedValue::Float(_) => LineKind::Float,
            ClassifiedValue::Text(_) => LineKind::Text,
        }
    }
}

/// The three typed collections produced by routing.
///
/// Each collection preserves the interleaved processing order across all
/// input sources (row-major, see [`crate::routing::route`]). The statistics
/// in [`crate::stats`] are order-independent, but order matters for
/// iteration and for the partition files, which mirror it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitions {
    /// Lines that classified as [`ClassifiedValue::Integer`].
    pub integers: Vec<i64>,
    /// Lines that classified as [`ClassifiedValue::Float`].
    pub floats: Vec<f32>,
    /// Lines that classified as [`ClassifiedValue::Text`].
    pub texts: Vec<String>,
}

impl Partitions {
    /// Create an empty set of partitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a classified value to the collection matching its kind.
    pub fn push(&mut self, value: ClassifiedValue) {
        match value {
            ClassifiedValue::Integer(v) => self.integers.push(v),
            ClassifiedValue::Float(v) => self.floats.push(v),
            ClassifiedValue::Text(s) => self.texts.push(s),
        }
    }

    /// Number of accumulated values of `kind`.
    pub fn count(&self, kind: LineKind) -> usize {
        match kind {
            LineKind::Integer => self.integers.len(),
            LineKind::Float => self.floats.len(),
            LineKind::Text => self.texts.len(),
        }
    }

    /// Total number of accumulated values across all kinds.
    pub fn total(&self) -> usize {
        self.integers.len() + self.floats.len() + self.texts.len()
    }

    /// Returns `true` if at least one value of `kind` was accumulated.
    pub fn has(&self, kind: LineKind) -> bool {
        self.count(kind) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifiedValue, LineKind, Partitions};

    #[test]
    fn push_routes_by_variant_and_has_tracks_presence() {
        let mut partitions = Partitions::new();
        assert!(!partitions.has(LineKind::Integer));

        partitions.push(ClassifiedValue::Integer(4));
        partitions.push(ClassifiedValue::Text("x".to_owned()));

        assert!(partitions.has(LineKind::Integer));
        assert!(partitions.has(LineKind::Text));
        assert!(!partitions.has(LineKind::Float));
        assert_eq!(partitions.count(LineKind::Integer), 1);
        assert_eq!(partitions.total(), 2);
    }
}
