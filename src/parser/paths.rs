// src/parser/paths.rs

use crate::layout::common;

/// Post-processing applied to every folder string before emission: collapse
/// runs of the escape character to a single one, then strip the extended-path
/// prefix when present at the start.
pub fn normalize_folder(folder: &str) -> String {
    let mut collapsed = String::with_capacity(folder.len());
    let mut prev_escape = false;
    for ch in folder.chars() {
        if ch == common::ESCAPE {
            if prev_escape {
                continue;
            }
            prev_escape = true;
        } else {
            prev_escape = false;
        }
        collapsed.push(ch);
    }

    match collapsed.strip_prefix(common::EXTENDED_PATH_PREFIX) {
        Some(stripped) => stripped.to_string(),
        None => collapsed,
    }
}

/// Extracts `text` between `open` and `close`. Missing `close` takes the rest
/// of the segment; missing `open` is the caller's failure signal.
pub(crate) fn between<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(open)?;
    rest.split(close).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_escape_runs() {
        assert_eq!(normalize_folder(r"C:\\Users\\\x"), r"C:\Users\x");
    }

    #[test]
    fn collapse_is_idempotent() {
        let once = normalize_folder(r"C:\\\a\\b");
        assert_eq!(normalize_folder(&once), once);
    }

    #[test]
    fn strips_extended_path_prefix() {
        assert_eq!(normalize_folder(r"\\?\C:\\Users\x"), r"C:\Users\x");
    }

    #[test]
    fn prefix_only_stripped_at_start() {
        assert_eq!(normalize_folder(r"C:\a\?\b"), r"C:\a\?\b");
    }

    #[test]
    fn between_takes_rest_without_close() {
        assert_eq!(between("key=value", "key=", ";"), Some("value"));
        assert_eq!(between("a key=v, b", "key=", ","), Some("v"));
        assert_eq!(between("no marker here", "key=", ","), None);
    }
}
