//! Command handlers for the scriptlog CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod clean;
pub mod completions;
pub mod config;
pub mod parse;
pub mod process;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use scriptlog::transcript::decode_lossy;

/// Read a local transcript file, dropping any invalid UTF-8.
pub fn read_transcript(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read transcript: {}", path.display()))?;
    Ok(decode_lossy(&bytes))
}
