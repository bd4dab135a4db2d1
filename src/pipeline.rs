// src/pipeline.rs
use std::io::BufRead;
use std::time::{Duration, Instant};

use crate::error::ProcessingError;
use crate::layout;
use crate::parser::{LineOutcome, LogParser};
use crate::record::LineResult;

/// Configuration for pipeline behavior
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Fixed shift applied to every parsed timestamp. Observed behavior of
    /// the log source, kept as data rather than timezone logic.
    pub timestamp_shift_hours: i64,
    /// Report per-line skip reasons on stderr.
    pub debug: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            timestamp_shift_hours: layout::TIMESTAMP_SHIFT_HOURS,
            debug: false,
        }
    }
}

/// Runtime statistics for one run
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub records_output: usize,
    pub processing_time: Duration,
}

/// Pull-based sequential pipeline: one line is fully filtered, extracted and
/// assembled before the next is requested. No state is shared across lines.
pub struct SyncLogPipeline {
    parser: LogParser,
    config: PipelineConfig,
    stats: RunStats,
}

impl SyncLogPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        SyncLogPipeline {
            parser: LogParser::new(config.timestamp_shift_hours),
            config,
            stats: RunStats::default(),
        }
    }

    /// Processes a whole log stream, producing one `LineResult` per input
    /// line in input order (empty for skipped lines). A CloudEntry or
    /// legacy-grammar extraction failure aborts the run with the offending
    /// line number; filter rejections never do.
    pub fn process_stream<R: BufRead>(
        &mut self,
        input: R,
    ) -> Result<Vec<LineResult>, ProcessingError> {
        let start_time = Instant::now();
        let mut results: Vec<LineResult> = Vec::new();

        for (index, line_result) in input.lines().enumerate() {
            let line = line_result?;
            let line_number = index + 1;
            self.stats.lines_read += 1;

            match self.parser.parse_line(&line) {
                Ok(LineOutcome::Records(records)) => {
                    self.stats.records_output += records.len();
                    if records.is_empty() {
                        self.stats.lines_skipped += 1;
                    }
                    results.push(records);
                }
                Ok(LineOutcome::Skipped(reason)) => {
                    self.stats.lines_skipped += 1;
                    if self.config.debug {
                        eprintln!("synctrace: line {}: {}, skipping", line_number, reason);
                    }
                    results.push(Vec::new());
                }
                Err(source) => {
                    return Err(ProcessingError::Parse {
                        line: line_number,
                        source,
                    });
                }
            }
        }

        self.stats.processing_time = start_time.elapsed();
        Ok(results)
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}
