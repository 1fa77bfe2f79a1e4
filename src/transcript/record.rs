//! Structured command records.

use serde::{Deserialize, Serialize};

use super::metadata::SessionMetadata;
use super::segment::CommandUnit;
use super::UNKNOWN;

/// Prefix of the diagnostic line that echoes the instance id into the
/// session. Commands starting with it are not real user input.
pub const INSTANCE_ID_SENTINEL: &str = "instance-id:";

/// Who ran the session, as derived from the transcript's storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub account_id: String,
    pub user: String,
    pub session_id: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            account_id: UNKNOWN.to_string(),
            user: UNKNOWN.to_string(),
            session_id: UNKNOWN.to_string(),
        }
    }
}

/// One command and its output, with session context attached.
///
/// Serializes as a flat JSON object with fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub session_start_time: String,
    pub instance_id: String,
    pub session_id: String,
    pub user: String,
    pub aws_account_id: String,
    pub command: String,
    pub output: String,
}

/// Build a record from a finished unit.
///
/// Returns `None` when the trimmed command is empty or is the instance-id
/// sentinel echo.
pub fn build_record(
    unit: &CommandUnit,
    metadata: &SessionMetadata,
    identity: &Identity,
) -> Option<Record> {
    let command = unit.command.trim();
    if command.is_empty() || command.starts_with(INSTANCE_ID_SENTINEL) {
        return None;
    }

    Some(Record {
        session_start_time: metadata.start_time.clone(),
        instance_id: metadata.instance_id.clone(),
        session_id: identity.session_id.clone(),
        user: identity.user.clone(),
        aws_account_id: identity.account_id.clone(),
        command: command.to_string(),
        output: unit.output_lines.join("\n").trim().to_string(),
    })
}

/// Build records for every unit that survives filtering, keeping order.
pub fn build_records(
    units: &[CommandUnit],
    metadata: &SessionMetadata,
    identity: &Identity,
) -> Vec<Record> {
    units
        .iter()
        .filter_map(|unit| build_record(unit, metadata, identity))
        .collect()
}
