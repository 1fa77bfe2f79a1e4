//! scriptlog library
//!
//! Turns raw terminal session transcripts (`script`-style captures such as
//! SSM Session Manager logs) into structured command/output records.

pub mod config;
pub mod files;
pub mod processor;
pub mod store;
pub mod transcript;

pub use config::Config;
pub use processor::{encode_jsonl, Outcome, ProcessError, Processor};
pub use store::{FsStore, MemoryStore, StoreError, TranscriptStore};
pub use transcript::{parse_transcript, Identity, ParsedTranscript, Record, SessionMetadata};
