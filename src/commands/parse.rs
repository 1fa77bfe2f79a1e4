//! Parse command handler: print records for a local transcript.

use anyhow::Result;
use std::path::Path;

use scriptlog::{encode_jsonl, parse_transcript, Identity};

use super::read_transcript;

/// Identity for a local file: from the explicit key if given, else the path.
pub fn identity_for(file: &str, key: Option<&str>) -> Identity {
    match key {
        Some(key) => Identity::from_key(key),
        None => Identity::from_key(&file.replace('\\', "/")),
    }
}

/// Print one JSON record per line for the commands in `file`.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &str, key: Option<&str>) -> Result<()> {
    let raw = read_transcript(Path::new(file))?;
    let parsed = parse_transcript(&raw, &identity_for(file, key));

    if parsed.records.is_empty() {
        eprintln!("No commands found in {}", file);
        return Ok(());
    }

    println!("{}", encode_jsonl(&parsed.records)?);
    Ok(())
}
