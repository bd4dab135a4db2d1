// src/parser/fs_change.rs
//
// The FSChange sub-grammar: one `FSChange(...)` segment per changed object,
// with `name=u'...'` / `path=u'...'` fields, plus a legacy layout that only
// carries the name and a mapped cloud path.

use crate::error::ExtractError;
use crate::layout::{common, fs_change};
use crate::parser::cloud_entry;
use crate::parser::paths::between;
use crate::record::PathPair;

/// Outcome of the primary extractor. `NotApplicable` means the detail uses
/// the legacy layout and the caller should dispatch to [`extract_fallback`].
#[derive(Debug)]
pub enum FsChangeMatch {
    Matched(Vec<PathPair>),
    NotApplicable,
}

/// Primary extractor: every `FSChange(` segment is one embedded entry. An
/// entry naming a folder (`is_folder=True`) denotes the folder itself, so the
/// name becomes the final path segment and the file stays empty.
pub fn extract(detail: &str) -> FsChangeMatch {
    let mut segments = detail.split(fs_change::ENTRY_OPEN);
    segments.next(); // text before the first marker

    let mut pairs = Vec::new();
    for entry in segments {
        let Some(name) = between(entry, fs_change::NAME_OPEN, fs_change::NAME_CLOSE) else {
            return FsChangeMatch::NotApplicable;
        };
        let Some(path) = between(entry, fs_change::PATH_OPEN, fs_change::PATH_CLOSE) else {
            return FsChangeMatch::NotApplicable;
        };
        if entry.contains(fs_change::IS_FOLDER) {
            pairs.push(PathPair {
                folder: format!("{path}{}{name}", common::ESCAPE),
                file: String::new(),
            });
        } else {
            pairs.push(PathPair {
                folder: path.to_string(),
                file: name.to_string(),
            });
        }
    }
    // A signature-only detail with no entry segments yields zero pairs, and
    // therefore zero records; that is not a legacy-format line.
    FsChangeMatch::Matched(pairs)
}

/// Legacy-format extractor, applied to the whole detail payload once the
/// primary grammar reports `NotApplicable`. The folder comes from the mapped
/// cloud path; under `Action.MODIFY` that path already ends in the file name,
/// which is split back off.
pub fn extract_fallback(detail: &str) -> Result<PathPair, ExtractError> {
    let file = between(detail, fs_change::NAME_OPEN, fs_change::NAME_CLOSE)
        .ok_or(ExtractError::MarkerNotFound(fs_change::NAME_OPEN))?;
    let folder = cloud_entry::mapped_path(detail)?;

    if detail.contains(fs_change::MODIFY_ACTION) {
        return Ok(match folder.rfind(common::ESCAPE) {
            Some(pos) => PathPair {
                file: folder[pos + 1..].to_string(),
                folder: folder[..pos + 1].to_string(),
            },
            None => PathPair {
                file: folder.to_string(),
                folder: String::new(),
            },
        });
    }

    Ok(PathPair {
        folder: folder.to_string(),
        file: file.to_string(),
    })
}
