//! Prometheus text exposition formatting.
//!
//! Pure functions only: nothing here reads or mutates counter state.

use super::descriptor::MetricDescriptor;
use std::fmt::Write;

/// All rendered series of one metric, in first-observed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricBlock {
    pub name: String,
    pub help: String,
    pub lines: Vec<String>,
}

impl MetricBlock {
    /// Appends this block to `out`, one `\n`-terminated line per series,
    /// optionally preceded by `# HELP` and `# TYPE` lines.
    ///
    /// A block without series writes nothing at all, metadata included.
    pub fn write_to(&self, out: &mut String, emit_metadata: bool) {
        // ---
        if self.lines.is_empty() {
            return;
        }
        if emit_metadata {
            let _ = writeln!(out, "# HELP {} {}", self.name, escape_help(&self.help));
            let _ = writeln!(out, "# TYPE {} counter", self.name);
        }
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// Formats one line per series:
/// `name{label1="value1",label2="value2"} value`, or `name value` when the
/// metric has no labels.
pub fn render(descriptor: &MetricDescriptor, series: &[(Vec<String>, u64)]) -> Vec<String> {
    // ---
    series
        .iter()
        .map(|(values, value)| {
            let mut line = String::from(descriptor.name());
            write_labels(&mut line, descriptor.label_names(), values);
            let _ = write!(line, " {value}");
            line
        })
        .collect()
}

fn write_labels(out: &mut String, names: &[String], values: &[String]) {
    // ---
    if names.is_empty() {
        return;
    }
    out.push('{');
    for (i, (name, value)) in names.iter().zip(values).enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{name}=\"{}\"", escape_label_value(value));
    }
    out.push('}');
}

fn escape_label_value(v: &str) -> String {
    v.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}
