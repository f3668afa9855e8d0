//! Munin plugin protocol output
//!
//! Everything a plugin prints on stdout is one of:
//!
//! - `multigraph <section>` switching the target graph (multigraph plugins only)
//! - `<field>.<directive> <text>` or `graph_<directive> <text>` from `config`
//! - `<field>.value <number>` from a fetch
//!
//! Diagnostics never go to stdout; munin-node would try to parse them.

use std::fmt;
use std::io::Write;

/// One `<field>.value <value>` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLine {
    pub field: String,
    pub value: String,
}

impl MetricLine {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for MetricLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.value {}", self.field, self.value)
    }
}

pub fn write_multigraph<W: Write>(out: &mut W, section: &str) -> std::io::Result<()> {
    writeln!(out, "multigraph {}", section)
}

pub fn write_declaration<W: Write>(out: &mut W, lines: &[&str]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn write_values<W: Write>(out: &mut W, values: &[MetricLine]) -> std::io::Result<()> {
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

/// Field names declared through `<field>.label`, in declaration order
pub fn declared_fields<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .filter_map(|line| line.split_once(' ').map(|(key, _)| key))
        .filter_map(|key| key.strip_suffix(".label"))
        .collect()
}
