use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use synctrace::{export, PipelineConfig, ProcessingError, SyncLogPipeline};

#[derive(Parser)]
#[command(name = "synctrace")]
#[command(about = "Extract filesystem change records from a cloud-sync client log")]
#[command(version)]
struct Args {
    /// Sync client log file to ingest
    #[arg(value_name = "LOG_FILE")]
    log_file: PathBuf,

    /// Evidence sheet to write
    #[arg(short = 'o', long = "output", default_value = export::OUTPUT_FILE)]
    output: PathBuf,

    /// Debug mode - report per-line skip reasons
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.log_file.exists() {
        return Err(
            ProcessingError::LogFileNotFound(args.log_file.display().to_string()).into(),
        );
    }

    let input = BufReader::new(
        File::open(&args.log_file)
            .with_context(|| format!("Failed to open '{}'", args.log_file.display()))?,
    );

    let config = PipelineConfig {
        debug: args.debug,
        ..PipelineConfig::default()
    };
    let mut pipeline = SyncLogPipeline::new(config);
    let results = pipeline.process_stream(input)?;

    export::write_sheet_file(&args.output, &results)
        .with_context(|| format!("Failed to write '{}'", args.output.display()))?;

    let stats = pipeline.stats();
    eprintln!(
        "synctrace: {} lines read, {} skipped, {} records -> {} ({:.1?})",
        stats.lines_read,
        stats.lines_skipped,
        stats.records_output,
        args.output.display(),
        stats.processing_time,
    );

    Ok(())
}
