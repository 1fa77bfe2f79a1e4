//! Process command handler: turn stored transcripts into record files.

use anyhow::{bail, Context, Result};

use scriptlog::{Config, FsStore, Outcome, Processor};

/// Human-readable status line for one processed key.
pub fn describe(key: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Skipped => format!("{}: skipped (already processed output)", key),
        Outcome::NoCommands => format!("{}: no commands found", key),
        Outcome::Written {
            output_key,
            records,
            bytes,
        } => format!(
            "{}: wrote {} record{} to {} ({})",
            key,
            records,
            if *records == 1 { "" } else { "s" },
            output_key,
            humansize::format_size(*bytes, humansize::BINARY)
        ),
    }
}

/// Process each key under the storage root.
///
/// Every key is attempted; the command fails afterwards if any key failed.
#[cfg(not(tarpaulin_include))]
pub fn handle(keys: &[String], root: Option<&str>) -> Result<()> {
    let config = Config::load()?;

    if let Some(workers) = config.processing.workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .context("Failed to configure worker pool")?;
    }

    let root = match root {
        Some(dir) => std::path::PathBuf::from(dir),
        None => config.root_dir(),
    };
    if !root.is_dir() {
        bail!("Storage root is not a directory: {}", root.display());
    }

    let processor = Processor::new(FsStore::new(root), config.output.clone());
    let results = processor.process_all(keys);

    let mut failures = 0;
    for (key, result) in keys.iter().zip(results) {
        match result {
            Ok(outcome) => println!("{}", describe(key, &outcome)),
            Err(err) => {
                failures += 1;
                eprintln!("{}: error: {:#}", key, anyhow::Error::from(err));
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} transcripts failed", failures, keys.len());
    }
    Ok(())
}
