// src/parser/cloud_entry.rs
//
// The CloudEntry sub-grammar: one line can batch several nested entries for a
// single logical path (folder levels outermost-first, the leaf file last).
// Unlike FSChange there is no fallback; a malformed entry is a hard error.

use crate::error::ExtractError;
use crate::layout::{cloud_entry, common};
use crate::record::PathPair;

/// Extracts the single deepest-resolved path pair from a batch of
/// `CloudEntry(` segments. The base folder is the mapped cloud path of the
/// last entry; every folder-typed entry then pushes its filename onto the
/// chain, unless the detail is the immutable-entry variant.
pub fn extract(detail: &str) -> Result<PathPair, ExtractError> {
    let mut segments = detail.split(cloud_entry::ENTRY_OPEN);
    segments.next(); // text before the first marker
    let entries: Vec<&str> = segments.collect();

    let last = entries.last().ok_or(ExtractError::NoEntries)?;
    let mut folder = mapped_path(last)?.to_string();
    let mut file = String::new();

    let immutable = detail.contains(cloud_entry::IMMUTABLE_SIGNATURE);
    for entry in &entries {
        let filename = entry
            .split_once(cloud_entry::FILENAME_KEY)
            .map(|(_, rest)| rest.split(cloud_entry::VALUE_DELIM).next().unwrap_or(rest))
            .ok_or(ExtractError::MarkerNotFound(cloud_entry::FILENAME_KEY))?;
        let doc_type = entry
            .split_once(cloud_entry::DOC_TYPE_KEY)
            .map(|(_, rest)| rest)
            .ok_or(ExtractError::MarkerNotFound(cloud_entry::DOC_TYPE_KEY))?;

        if doc_type.contains(cloud_entry::FOLDER_TYPE) && !immutable {
            folder.push(common::ESCAPE);
            folder.push_str(filename);
        } else {
            file = filename.to_string();
        }
    }

    Ok(PathPair { folder, file })
}

/// Shared helper: the local path a cloud object is synchronized to, embedded
/// as `mapped_path=MappedCloudPath(mapped=<path>,...)`. Also used by the
/// legacy FSChange grammar.
pub(crate) fn mapped_path(text: &str) -> Result<&str, ExtractError> {
    let (_, rest) = text
        .split_once(cloud_entry::MAPPED_PATH_OPEN)
        .ok_or(ExtractError::MarkerNotFound(cloud_entry::MAPPED_PATH_OPEN))?;
    Ok(rest.split(cloud_entry::VALUE_DELIM).next().unwrap_or(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nests_folder_then_file() {
        let detail = r"QueueItem UPLOAD FSChange(CREATE, Action.ADD, CloudEntry(filename=docs, doc_type=DocType.FOLDER, mapped_path=MappedCloudPath(mapped=C:\Users\x\sync, rel=.)) CloudEntry(filename=a.txt, doc_type=DocType.FILE, mapped_path=MappedCloudPath(mapped=C:\Users\x\sync, rel=docs)))";
        let pair = extract(detail).unwrap();
        assert_eq!(pair.folder, r"C:\Users\x\sync\docs");
        assert_eq!(pair.file, "a.txt");
    }

    #[test]
    fn immutable_variant_never_nests() {
        let detail = r"QueueItem UPLOAD FSChange(CREATE, Action.ADD, ImmutableCloudEntry(filename=docs, doc_type=DocType.FOLDER, mapped_path=MappedCloudPath(mapped=C:\Users\x\sync, rel=.)))";
        let pair = extract(detail).unwrap();
        assert_eq!(pair.folder, r"C:\Users\x\sync");
        assert_eq!(pair.file, "docs");
    }

    #[test]
    fn missing_filename_is_error() {
        let detail = r"QueueItem UPLOAD FSChange(CREATE, Action.ADD, CloudEntry(doc_type=DocType.FILE, mapped_path=MappedCloudPath(mapped=C:\x, rel=.)))";
        assert!(matches!(
            extract(detail),
            Err(ExtractError::MarkerNotFound(_))
        ));
    }

    #[test]
    fn mapped_path_stops_at_comma() {
        let text = r"CloudEntry(filename=a, mapped_path=MappedCloudPath(mapped=C:\Users\x, rel=a))";
        assert_eq!(mapped_path(text).unwrap(), r"C:\Users\x");
    }
}
