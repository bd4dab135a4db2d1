#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Log file not found: {0}")]
    LogFileNotFound(String),

    #[error("Parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ExtractError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write evidence sheet: {0}")]
    Export(#[from] csv::Error),
}

/// Grammar-level failure while extracting paths from a detail payload.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("marker '{0}' not found in detail payload")]
    MarkerNotFound(&'static str),

    #[error("detail payload contains no embedded entries")]
    NoEntries,
}
