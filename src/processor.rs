//! Transcript processing: read, parse, write.
//!
//! [`Processor`] wires the transcript parser to a [`TranscriptStore`]. For
//! every key it resolves the session identity, reads and parses the raw
//! transcript, and writes the resulting records as JSON lines under the
//! output namespace.

use rayon::prelude::*;
use tracing::info;

use crate::config::OutputConfig;
use crate::files::{is_processed_key, output_key};
use crate::store::{StoreError, TranscriptStore};
use crate::transcript::{decode_lossy, parse_transcript, Identity, Record};

/// What happened to a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The key is already processed output and was left alone.
    Skipped,
    /// The transcript contained no commands; nothing was written.
    NoCommands,
    /// Records were written to `output_key`.
    Written {
        output_key: String,
        records: usize,
        bytes: usize,
    },
}

/// Fatal failures while processing a key.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to read transcript {key}")]
    Read {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("Failed to encode records for {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write processed records to {output_key}")]
    Write {
        output_key: String,
        #[source]
        source: StoreError,
    },
}

/// Encode records as JSON lines: one flat object per line, no trailing newline.
pub fn encode_jsonl(records: &[Record]) -> Result<String, serde_json::Error> {
    let lines = records
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// Processes transcripts held in a store.
pub struct Processor<S> {
    store: S,
    output: OutputConfig,
}

impl<S: TranscriptStore> Processor<S> {
    /// Create a processor writing output as described by `output`.
    pub fn new(store: S, output: OutputConfig) -> Self {
        Self { store, output }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process one transcript key.
    ///
    /// Read and write failures are fatal and returned; a transcript without
    /// commands is a successful [`Outcome::NoCommands`].
    pub fn process(&self, key: &str) -> Result<Outcome, ProcessError> {
        if is_processed_key(key, &self.output.namespace) {
            info!(key, "Skipping already processed file");
            return Ok(Outcome::Skipped);
        }

        let identity = Identity::from_key(key);
        let bytes = self.store.read(key).map_err(|source| ProcessError::Read {
            key: key.to_string(),
            source,
        })?;
        let raw = decode_lossy(&bytes);
        let parsed = parse_transcript(&raw, &identity);

        if parsed.records.is_empty() {
            info!(key, "No structured logs were generated");
            return Ok(Outcome::NoCommands);
        }

        let contents = encode_jsonl(&parsed.records).map_err(|source| ProcessError::Encode {
            key: key.to_string(),
            source,
        })?;
        let destination = output_key(key, &self.output.namespace, &self.output.extension);
        self.store
            .write(&destination, &contents)
            .map_err(|source| ProcessError::Write {
                output_key: destination.clone(),
                source,
            })?;

        info!(
            key,
            output_key = %destination,
            records = parsed.records.len(),
            "Processed transcript"
        );

        Ok(Outcome::Written {
            output_key: destination,
            records: parsed.records.len(),
            bytes: contents.len(),
        })
    }

    /// Process many keys in parallel.
    ///
    /// Results are returned in the same order as `keys`.
    pub fn process_all(&self, keys: &[String]) -> Vec<Result<Outcome, ProcessError>> {
        keys.par_iter().map(|key| self.process(key)).collect()
    }
}
