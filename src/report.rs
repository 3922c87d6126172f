//! Rendering of statistics reports.
//!
//! The library computes; the strings produced here are what the CLI prints.
//! Two console layouts are provided: a short per-file line-count summary and
//! a full statistics table, plus a machine-readable JSON form.

use serde::Serialize;

use crate::stats::{float_stats, int_stats, text_stats, FloatStats, IntStats, TextStats};
use crate::types::{LineKind, Partitions};

const FULL_WIDTH: usize = 200;
const SUMMARY_WIDTH: usize = 40;

/// Machine-readable statistics report.
///
/// Kinds with no classified lines are `None`, mirroring the console tables,
/// which skip empty kinds entirely.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Integer statistics, if any integers were classified.
    pub integers: Option<IntStats>,
    /// Float statistics, if any floats were classified.
    pub floats: Option<FloatStats>,
    /// Text statistics, if any text lines were classified.
    pub texts: Option<TextStats>,
}

impl Report {
    /// Build a report from routed partitions.
    ///
    /// Emptiness is checked here, so the numeric statistics' empty-collection
    /// contract never trips.
    pub fn from_partitions(partitions: &Partitions) -> Self {
        Self {
            integers: partitions
                .has(LineKind::Integer)
                .then(|| int_stats(&partitions.integers)),
            floats: partitions
                .has(LineKind::Float)
                .then(|| float_stats(&partitions.floats)),
            texts: partitions
                .has(LineKind::Text)
                .then(|| text_stats(&partitions.texts)),
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_owned())
    }
}

/// Render the short summary table: one row per fixed output file name with
/// its line count, including zero counts.
pub fn render_summary(partitions: &Partitions) -> String {
    let mut out = String::new();
    push_rule(&mut out, SUMMARY_WIDTH);
    push_centered(&mut out, "STATISTIC", SUMMARY_WIDTH);
    push_rule(&mut out, SUMMARY_WIDTH);
    push_row(&mut out, &["File Name", "Number Lines"]);
    push_rule(&mut out, SUMMARY_WIDTH);

    for kind in [LineKind::Integer, LineKind::Float, LineKind::Text] {
        push_row(
            &mut out,
            &[kind.file_name(), &partitions.count(kind).to_string()],
        );
    }
    out
}

/// Render the full statistics table: one row per non-empty kind.
///
/// Numeric rows carry count/max/min/sum/avg; the text row carries the string
/// length extremes in the last two columns. Float columns use scientific
/// notation with nine fractional digits, rendered by Rust's
/// [`UpperExp`](std::fmt::UpperExp) (`2.450000000E1`, not printf's
/// `2.450000000E+01`).
pub fn render_full(partitions: &Partitions) -> String {
    let mut out = String::new();
    push_rule(&mut out, FULL_WIDTH);
    push_centered(&mut out, "STATISTIC", FULL_WIDTH);
    push_rule(&mut out, FULL_WIDTH);
    push_row(
        &mut out,
        &[
            "Data Type",
            "Number Lines",
            "Max Value",
            "Min Value",
            "Sum Value",
            "Avg Value",
            "Smallest String",
            "Largest String",
        ],
    );
    push_rule(&mut out, FULL_WIDTH);

    let report = Report::from_partitions(partitions);
    if let Some(s) = report.integers {
        push_int_row(&mut out, &s);
    }
    if let Some(s) = report.floats {
        push_float_row(&mut out, &s);
    }
    if let Some(s) = report.texts {
        push_text_row(&mut out, &s);
    }
    out
}

fn push_int_row(out: &mut String, s: &IntStats) {
    push_row(
        out,
        &[
            "Integer",
            &s.count.to_string(),
            &s.max.to_string(),
            &s.min.to_string(),
            &s.sum.to_string(),
            &sci(s.avg),
        ],
    );
}

fn push_float_row(out: &mut String, s: &FloatStats) {
    push_row(
        out,
        &[
            "Float",
            &s.count.to_string(),
            &sci(f64::from(s.max)),
            &sci(f64::from(s.min)),
            &sci(s.sum),
            &sci(s.avg),
        ],
    );
}

fn push_text_row(out: &mut String, s: &TextStats) {
    push_row(
        out,
        &[
            "String",
            &s.count.to_string(),
            "",
            "",
            "",
            "",
            &s.min_len.to_string(),
            &s.max_len.to_string(),
        ],
    );
}

fn sci(v: f64) -> String {
    format!("{v:.9E}")
}

fn push_rule(out: &mut String, width: usize) {
    out.push_str(&"-".repeat(width));
    out.push('\n');
}

fn push_centered(out: &mut String, title: &str, width: usize) {
    let pad = width.saturating_sub(title.len()) / 2;
    out.push_str(&" ".repeat(pad));
    out.push_str(title);
    out.push('\n');
}

fn push_row(out: &mut String, cells: &[&str]) {
    let mut row = String::new();
    for cell in cells {
        row.push_str(&format!("{cell:<25} "));
    }
    out.push_str(row.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::{render_full, render_summary, Report};
    use crate::routing::route;

    fn sample() -> crate::types::Partitions {
        let sources = vec![
            ["42", "3.14", "hello"].map(String::from).to_vec(),
            ["7"].map(String::from).to_vec(),
        ];
        route(&sources)
    }

    #[test]
    fn summary_lists_all_three_files_with_counts() {
        let out = render_summary(&sample());
        assert!(out.contains("STATISTIC"));
        assert!(out.contains("File Name"));
        assert!(out.contains("integers.txt"));
        assert!(out.contains("floats.txt"));
        assert!(out.contains("strings.txt"));
    }

    #[test]
    fn summary_includes_zero_counts() {
        let partitions = route(&[vec!["only text".to_owned()]]);
        let out = render_summary(&partitions);
        let int_line = out
            .lines()
            .find(|l| l.starts_with("integers.txt"))
            .unwrap();
        assert!(int_line.trim_end().ends_with('0'));
    }

    #[test]
    fn full_table_skips_empty_kinds() {
        let partitions = route(&[vec!["1".to_owned(), "2".to_owned()]]);
        let out = render_full(&partitions);
        assert!(out.contains("Integer"));
        assert!(!out.contains("Float"), "no float row expected:\n{out}");
        assert!(!out.lines().any(|l| l.starts_with("String")));
    }

    #[test]
    fn full_table_renders_expected_values() {
        let out = render_full(&sample());
        let int_line = out.lines().find(|l| l.starts_with("Integer")).unwrap();
        for cell in ["2", "42", "7", "49"] {
            assert!(int_line.contains(cell), "missing {cell} in: {int_line}");
        }
        // avg 24.5 in scientific notation
        assert!(int_line.contains("2.450000000E1"));

        let text_line = out.lines().find(|l| l.starts_with("String")).unwrap();
        assert!(text_line.contains('5'));
    }

    #[test]
    fn report_marks_empty_kinds_as_absent() {
        let partitions = route(&[vec!["x".to_owned()]]);
        let report = Report::from_partitions(&partitions);
        assert!(report.integers.is_none());
        assert!(report.floats.is_none());
        assert_eq!(report.texts.unwrap().count, 1);
    }

    #[test]
    fn json_report_round_trips_through_serde() {
        let report = Report::from_partitions(&sample());
        let json = report.to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["integers"]["sum"], 49);
        assert_eq!(value["texts"]["max_len"], 5);
    }
}
