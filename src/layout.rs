// src/layout.rs
//
// Field-index tables and marker registries for the sync-client log grammar.
// Integer offsets into split-field arrays live in the `*_idx` modules; string
// delimiters and signatures live in the per-grammar marker modules. Keeping
// the two kinds of constant apart means a layout change never touches a
// marker set and vice versa.

/// Positional fields of one whitespace-collapsed log line.
pub mod field_idx {
    pub const DATE: usize = 0;
    pub const TIME: usize = 1;
    pub const LEVEL: usize = 2;
    pub const PID: usize = 3;
    pub const EVENT_TYPE: usize = 4;
    pub const HANDLER: usize = 5;
    /// First field of the detail payload; everything from here on is detail.
    pub const DETAIL: usize = 6;
    /// ERROR-level lines carry an extra marker field at this position; it is
    /// dropped before the detail join.
    pub const ERROR_MARKER: usize = 7;
}

/// Positional fields within the space-split detail payload.
pub mod detail_idx {
    pub const EVENT_RESULT: usize = 1;
    pub const EVENT_TYPE: usize = 2;
    pub const ACTION: usize = 3;
}

/// Markers shared by both sub-grammars.
pub mod common {
    /// Path separator / escape character inside folder strings.
    pub const ESCAPE: char = '\\';
    /// Extended-path prefix as it looks after escape runs are collapsed
    /// (the raw log form is `\\?\`).
    pub const EXTENDED_PATH_PREFIX: &str = r"\?\";
    pub const PID_KEY: &str = "pid=";
    /// Delimiter inside the event-type and handler fragments.
    pub const FRAGMENT_DELIM: char = ':';
}

/// Markers of the FSChange sub-grammar.
pub mod fs_change {
    /// Presence of this substring in the detail payload marks a
    /// filesystem-change line at all.
    pub const SIGNATURE: &str = "FSChange";
    /// Each embedded entry starts at this marker.
    pub const ENTRY_OPEN: &str = "FSChange(";
    pub const NAME_OPEN: &str = "name=u'";
    pub const NAME_CLOSE: &str = "',";
    pub const PATH_OPEN: &str = "path=u'";
    pub const PATH_CLOSE: &str = "'";
    pub const IS_FOLDER: &str = "is_folder=True";
    /// In the legacy format this action means the mapped path carries the
    /// file name as its final segment.
    pub const MODIFY_ACTION: &str = "Action.MODIFY";
}

/// Markers of the CloudEntry sub-grammar.
pub mod cloud_entry {
    pub const ENTRY_OPEN: &str = "CloudEntry(";
    pub const IMMUTABLE_SIGNATURE: &str = "ImmutableCloudEntry";
    pub const MAPPED_PATH_OPEN: &str = "mapped_path=MappedCloudPath(mapped=";
    pub const FILENAME_KEY: &str = "filename=";
    pub const DOC_TYPE_KEY: &str = "doc_type=";
    pub const FOLDER_TYPE: &str = "DocType.FOLDER";
    pub const VALUE_DELIM: char = ',';
}

/// Handler that generates filesystem-change lines; all other handlers are
/// filtered out.
pub const GENERATOR_HANDLER: &str = "workers.py";

/// Level value that triggers the extra-field realignment.
pub const ERROR_LEVEL: &str = "ERROR";

/// A bare date header is exactly this long; longer headers are timestamps
/// belonging to continuation lines.
pub const DATE_HEADER_LEN: usize = 10;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Fixed shift applied to every parsed timestamp. Observed behavior of the
/// source tool; not derivable from the line content, so it stays a documented
/// constant (overridable via `PipelineConfig`) rather than timezone logic.
pub const TIMESTAMP_SHIFT_HOURS: i64 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    // The two grammars' marker sets must stay independently usable: the
    // FSChange registry never references CloudEntry text and vice versa.
    #[test]
    fn grammar_registries_are_disjoint() {
        assert!(!fs_change::ENTRY_OPEN.contains(cloud_entry::ENTRY_OPEN));
        assert!(!cloud_entry::ENTRY_OPEN.contains(fs_change::SIGNATURE));
        assert!(cloud_entry::IMMUTABLE_SIGNATURE.contains(&cloud_entry::ENTRY_OPEN[..10]));
    }

    #[test]
    fn detail_region_follows_fixed_header_fields() {
        assert_eq!(field_idx::DETAIL, field_idx::HANDLER + 1);
        assert_eq!(field_idx::ERROR_MARKER, field_idx::DETAIL + 1);
    }
}
