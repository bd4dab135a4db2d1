// src/parser/mod.rs
//
// Per-line extraction engine. Each stage consumes the previous one's output;
// the first failing filter ends the line with a `SkipReason`, and only the
// CloudEntry / legacy grammars can fail hard.

pub mod cloud_entry;
pub mod fs_change;
pub mod paths;
pub mod tokenizer;

use std::fmt;

use crate::error::ExtractError;
use crate::layout::{self, cloud_entry as ce_markers, detail_idx, fs_change as fs_markers};
use crate::record::{ChangeRecord, FieldSet, LineResult, PathPair};

use fs_change::FsChangeMatch;
use paths::between;

/// What became of one input line.
#[derive(Debug)]
pub enum LineOutcome {
    Records(LineResult),
    Skipped(SkipReason),
}

/// Why a line produced no records. Only surfaced as a debug diagnostic; a
/// skip never fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoDateHeader,
    ShortLine,
    BadTimestamp,
    ForeignHandler,
    NoChangeSignature,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::NoDateHeader => "no bare date header",
            SkipReason::ShortLine => "too few fields",
            SkipReason::BadTimestamp => "unparseable timestamp",
            SkipReason::ForeignHandler => "handler is not the change-event generator",
            SkipReason::NoChangeSignature => "detail carries no filesystem-change signature",
        };
        f.write_str(reason)
    }
}

/// Per-line parser. Stateless across lines; the only knob is the timestamp
/// shift.
pub struct LogParser {
    shift_hours: i64,
}

impl LogParser {
    pub fn new(shift_hours: i64) -> Self {
        LogParser { shift_hours }
    }

    /// Runs one raw line through the whole stage chain. `Err` is reserved for
    /// the hard-failing grammars; every filter rejection is a `Skipped`.
    pub fn parse_line(&self, line: &str) -> Result<LineOutcome, ExtractError> {
        if !tokenizer::has_record_header(line) {
            return Ok(LineOutcome::Skipped(SkipReason::NoDateHeader));
        }
        let Some(fields) = tokenizer::tokenize(line) else {
            return Ok(LineOutcome::Skipped(SkipReason::ShortLine));
        };
        let Some(timestamp) =
            tokenizer::normalize_timestamp(&fields.timestamp_fragment, self.shift_hours)
        else {
            return Ok(LineOutcome::Skipped(SkipReason::BadTimestamp));
        };
        if fields.handler != layout::GENERATOR_HANDLER {
            return Ok(LineOutcome::Skipped(SkipReason::ForeignHandler));
        }
        if !fields.detail.contains(fs_markers::SIGNATURE) {
            return Ok(LineOutcome::Skipped(SkipReason::NoChangeSignature));
        }

        let pairs = extract_paths(&fields)?;
        Ok(LineOutcome::Records(assemble(timestamp, &fields, pairs)))
    }
}

/// DetailClassifier + PathExtractor: picks the sub-grammar and runs it. A
/// primary FSChange miss dispatches to the legacy grammar for the whole
/// payload.
fn extract_paths(fields: &FieldSet) -> Result<Vec<PathPair>, ExtractError> {
    if fields.detail.contains(ce_markers::ENTRY_OPEN) {
        return Ok(vec![cloud_entry::extract(&fields.detail)?]);
    }
    match fs_change::extract(&fields.detail) {
        FsChangeMatch::Matched(pairs) => Ok(pairs),
        FsChangeMatch::NotApplicable => Ok(vec![fs_change::extract_fallback(&fields.detail)?]),
    }
}

/// RecordAssembler: joins the extracted pairs with the per-line common
/// fields, post-processing every folder on the way out.
fn assemble(
    timestamp: chrono::NaiveDateTime,
    fields: &FieldSet,
    pairs: Vec<PathPair>,
) -> LineResult {
    let common = CommonFields::from_detail(&fields.detail);
    pairs
        .into_iter()
        .map(|pair| ChangeRecord {
            timestamp,
            level: fields.level.clone(),
            event_result: common.event_result.clone(),
            event_type: common.event_type.clone(),
            action: common.action.clone(),
            folder: paths::normalize_folder(&pair.folder),
            file: pair.file,
        })
        .collect()
}

/// Fields shared by every record of one line, read from fixed positions of
/// the space-split detail payload.
struct CommonFields {
    event_result: String,
    event_type: String,
    action: String,
}

impl CommonFields {
    fn from_detail(detail: &str) -> Self {
        let tokens: Vec<&str> = detail.split(' ').collect();
        CommonFields {
            event_result: tokens
                .get(detail_idx::EVENT_RESULT)
                .copied()
                .unwrap_or_default()
                .to_string(),
            // `<Marker>(<type>,...)`: the type sits between the entry-open
            // marker and the next comma
            event_type: tokens
                .get(detail_idx::EVENT_TYPE)
                .and_then(|token| between(token, fs_markers::ENTRY_OPEN, ","))
                .unwrap_or_default()
                .to_string(),
            // `<action>,...`
            action: tokens
                .get(detail_idx::ACTION)
                .map(|token| token.split(',').next().unwrap_or(token))
                .unwrap_or_default()
                .to_string(),
        }
    }
}
