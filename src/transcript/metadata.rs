//! Session metadata extraction.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::UNKNOWN;

static START_TIME_REGEX: OnceLock<Regex> = OnceLock::new();
static INSTANCE_ID_REGEX: OnceLock<Regex> = OnceLock::new();

/// Facts about the recorded session found in the transcript itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Timestamp from the `Script started on` header, or `"unknown"`
    pub start_time: String,
    /// EC2 instance id echoed during the session, or `"unknown"`
    pub instance_id: String,
}

impl Default for SessionMetadata {
    fn default() -> Self {
        Self {
            start_time: UNKNOWN.to_string(),
            instance_id: UNKNOWN.to_string(),
        }
    }
}

impl SessionMetadata {
    /// Scan a cleaned transcript for the session start time and instance id.
    ///
    /// Both scans are case-sensitive and take the first match. A missing
    /// value falls back to `"unknown"`.
    pub fn extract(cleaned: &str) -> Self {
        let mut metadata = Self::default();
        if let Some(start_time) = find_start_time(cleaned) {
            metadata.start_time = start_time;
        }
        if let Some(instance_id) = find_instance_id(cleaned) {
            metadata.instance_id = instance_id;
        }
        metadata
    }
}

/// Find the `Script started on <timestamp>` header and return the timestamp,
/// dropping any trailing `[...]` annotation.
pub fn find_start_time(cleaned: &str) -> Option<String> {
    let re = START_TIME_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^Script started on (.+)").expect("Invalid start time regex")
    });
    let captured = re.captures(cleaned)?.get(1)?.as_str().trim();
    let timestamp = captured.split('[').next().unwrap_or(captured);
    Some(timestamp.trim().to_string())
}

/// Find the first `instance-id: i-<hex>` token and return the `i-<hex>` part.
pub fn find_instance_id(cleaned: &str) -> Option<String> {
    let re = INSTANCE_ID_REGEX.get_or_init(|| {
        Regex::new(r"instance-id: (i-[0-9a-f]+)").expect("Invalid instance id regex")
    });
    re.captures(cleaned)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
