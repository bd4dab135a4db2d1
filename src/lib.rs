// src/lib.rs
pub mod error;
pub mod export;
pub mod layout;
pub mod parser;
pub mod pipeline;
pub mod record;

pub use error::*;
pub use pipeline::{PipelineConfig, RunStats, SyncLogPipeline};

pub use parser::{LineOutcome, LogParser, SkipReason};
pub use record::{ChangeRecord, FieldSet, LineResult, PathPair};
