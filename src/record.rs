// src/record.rs
use chrono::NaiveDateTime;
use serde::Serialize;

/// Positional decomposition of one log line. Built by the tokenizer, consumed
/// by the downstream filters; never retained past the line.
#[derive(Debug, Clone)]
pub struct FieldSet {
    /// Date and time fields rejoined with a space, millisecond comma intact.
    pub timestamp_fragment: String,
    pub level: String,
    /// Value of the `pid=<value>` fragment. Absence does not reject the line.
    pub pid: Option<String>,
    pub event_type: String,
    pub handler: String,
    /// Remaining fields rejoined with single spaces.
    pub detail: String,
}

/// A single extracted filesystem location. `file` is empty when the entry
/// denotes the folder itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub folder: String,
    pub file: String,
}

/// Final output unit: one filesystem change event, ready for the evidence
/// sheet. Field order is the sheet's column order; the serde rename gives the
/// mandated camelCase headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub timestamp: NaiveDateTime,
    pub level: String,
    pub event_result: String,
    pub event_type: String,
    pub action: String,
    pub folder: String,
    pub file: String,
}

/// Ordered records produced from one input line; empty when the line was
/// filtered out. The pipeline output is one `LineResult` per input line, in
/// input order.
pub type LineResult = Vec<ChangeRecord>;
