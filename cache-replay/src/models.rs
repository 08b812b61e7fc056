//! Data model for replayed scripts
//!
//! An [`Op`] is one parsed script line, an [`Outcome`] is what the cache did
//! with it, and a [`Step`] pairs the two for the transcript.

use serde::Serialize;
use std::fmt;

/// One script operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Put { key: String, value: String },
    Get { key: String },
    Peek { key: String },
    Resize { capacity: usize },
    Dump,
}

impl Op {
    /// Lower-case keyword used in scripts and reports
    pub fn keyword(&self) -> &'static str {
        match self {
            Op::Put { .. } => "put",
            Op::Get { .. } => "get",
            Op::Peek { .. } => "peek",
            Op::Resize { .. } => "resize",
            Op::Dump => "dump",
        }
    }
}

/// Formats the operation as a script line, so generated scripts parse back.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Put { key, value } => write!(f, "put {key} {value}"),
            Op::Get { key } => write!(f, "get {key}"),
            Op::Peek { key } => write!(f, "peek {key}"),
            Op::Resize { capacity } => write!(f, "resize {capacity}"),
            Op::Dump => f.write_str("dump"),
        }
    }
}

/// What the cache reported for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// New key stored; carries the entry it displaced when the cache was full
    Stored { evicted: Option<(String, String)> },
    /// Existing key overwritten
    Updated { previous: String },
    /// Capacity is zero, nothing was stored
    Discarded,
    /// Result of `get` or `peek`
    Lookup(Option<String>),
    /// Entries evicted by a resize, least recently used first
    Resized { evicted: Vec<(String, String)> },
    /// Live entries, sorted by key
    Dumped(Vec<(String, String)>),
}

/// A replayed operation with its source line and result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub op: Op,
    pub outcome: Outcome,
}

impl Step {
    /// Transcript lines for this step. Found values are quoted so that no
    /// stored text reads like `(absent)`. A dump yields one `key value` line
    /// per entry and nothing when the cache is empty.
    pub fn transcript(&self) -> Vec<String> {
        match (&self.op, &self.outcome) {
            (Op::Dump, Outcome::Dumped(entries)) => {
                entries.iter().map(|(k, v)| format!("{k} {v}")).collect()
            }
            (op @ (Op::Get { .. } | Op::Peek { .. }), Outcome::Lookup(found)) => {
                let line = match found {
                    Some(value) => format!("{op} -> \"{value}\""),
                    None => format!("{op} -> (absent)"),
                };
                vec![line]
            }
            (op, Outcome::Stored { evicted: Some((key, _)) }) => {
                vec![format!("{op} (evicted {key})")]
            }
            (op, Outcome::Updated { previous }) => vec![format!("{op} (replaced {previous})")],
            (op, Outcome::Discarded) => vec![format!("{op} (not stored, capacity 0)")],
            (op, Outcome::Resized { evicted }) if !evicted.is_empty() => {
                let keys: Vec<&str> = evicted.iter().map(|(k, _)| k.as_str()).collect();
                vec![format!("{op} (evicted {})", keys.join(" "))]
            }
            (op, _) => vec![op.to_string()],
        }
    }
}

/// One `metric,value` row of the CSV report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvMetricRow {
    pub metric: String,
    pub value: f64,
}
