// src/parser/tokenizer.rs
//
// Line-level stages: the date-header filter, the positional tokenizer with
// ERROR-level realignment, and the timestamp normalizer.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::layout::{self, common, field_idx};
use crate::record::FieldSet;

/// LineFilter: a record line starts with a bare `YYYY-MM-DD` header. Wrapped
/// continuation lines (stack traces, carried-over payloads) either start with
/// something that is not a date or with a full timestamp, and are rejected.
pub fn has_record_header(line: &str) -> bool {
    let Some(header) = line.split_whitespace().next() else {
        return false;
    };
    header.len() == layout::DATE_HEADER_LEN
        && NaiveDate::parse_from_str(header, layout::DATE_FORMAT).is_ok()
}

/// Tokenizer: collapses whitespace runs and decomposes the line into its
/// positional fields. Returns `None` when the line is too short to carry the
/// fixed header fields.
pub fn tokenize(line: &str) -> Option<FieldSet> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() <= field_idx::HANDLER {
        return None;
    }

    let level = fields[field_idx::LEVEL];
    let detail = detail_fields(&fields, level).join(" ");

    Some(FieldSet {
        timestamp_fragment: fields[field_idx::DATE..=field_idx::TIME].join(" "),
        level: level.to_string(),
        pid: fragment_value(fields[field_idx::PID], common::PID_KEY),
        event_type: fields[field_idx::EVENT_TYPE]
            .split(common::FRAGMENT_DELIM)
            .nth(1)
            .unwrap_or_default()
            .to_string(),
        handler: fields[field_idx::HANDLER]
            .split(common::FRAGMENT_DELIM)
            .next()
            .unwrap_or_default()
            .to_string(),
        detail,
    })
}

/// Selects the detail field list for the line's layout. ERROR-level lines
/// carry an inserted error-detail marker at `ERROR_MARKER`; the realigned
/// list is built here in one pass rather than spliced out of the general one.
fn detail_fields<'a>(fields: &[&'a str], level: &str) -> Vec<&'a str> {
    let tail = &fields[field_idx::DETAIL..];
    if level == layout::ERROR_LEVEL {
        let marker = field_idx::ERROR_MARKER - field_idx::DETAIL;
        tail.iter()
            .enumerate()
            .filter(|(i, _)| *i != marker)
            .map(|(_, f)| *f)
            .collect()
    } else {
        tail.to_vec()
    }
}

fn fragment_value(fragment: &str, key: &str) -> Option<String> {
    fragment
        .split_once(key)
        .map(|(_, value)| value.to_string())
}

/// TimestampNormalizer: swaps the millisecond comma for the period the parser
/// expects, parses, and applies the configured shift. `None` rejects the line
/// the same way a failed header check does.
pub fn normalize_timestamp(fragment: &str, shift_hours: i64) -> Option<NaiveDateTime> {
    let cleaned = fragment.replacen(',', ".", 1);
    let parsed = NaiveDateTime::parse_from_str(&cleaned, layout::TIMESTAMP_FORMAT).ok()?;
    Some(parsed + TimeDelta::hours(shift_hours))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_date_header_accepted() {
        assert!(has_record_header("2020-01-01 12:00:00,123 INFO rest"));
    }

    #[test]
    fn timestamp_header_rejected() {
        // 19 chars, not a bare date
        assert!(!has_record_header("2020-01-01T10:00:00 ERROR trace"));
        assert!(!has_record_header("    at some.stack.frame(File.java:10)"));
        assert!(!has_record_header(""));
    }

    #[test]
    fn error_level_realigns_detail() {
        let line = "2020-01-01 12:00:00,123 ERROR pid=9 EVENT:sync workers.py:run QueueItem <traceback> UPLOAD rest";
        let fields = tokenize(line).unwrap();
        // the marker at absolute position 7 is dropped from the join
        assert_eq!(fields.detail, "QueueItem UPLOAD rest");
    }

    #[test]
    fn info_level_keeps_detail_intact() {
        let line = "2020-01-01 12:00:00,123 INFO pid=9 EVENT:sync workers.py:run QueueItem UPLOAD rest";
        let fields = tokenize(line).unwrap();
        assert_eq!(fields.detail, "QueueItem UPLOAD rest");
        assert_eq!(fields.level, "INFO");
        assert_eq!(fields.pid.as_deref(), Some("9"));
        assert_eq!(fields.event_type, "sync");
        assert_eq!(fields.handler, "workers.py");
        assert_eq!(fields.timestamp_fragment, "2020-01-01 12:00:00,123");
    }

    #[test]
    fn missing_pid_fragment_still_tokenizes() {
        let line = "2020-01-01 12:00:00,123 INFO nopid EVENT:sync workers.py:run detail";
        let fields = tokenize(line).unwrap();
        assert_eq!(fields.pid, None);
    }

    #[test]
    fn shift_applied_once() {
        let ts = normalize_timestamp("2020-06-01 10:00:00,500", 16).unwrap();
        assert_eq!(ts.to_string(), "2020-06-02 02:00:00.500");
    }

    #[test]
    fn garbage_timestamp_is_none() {
        assert_eq!(normalize_timestamp("2020-06-01 banana", 16), None);
    }
}
