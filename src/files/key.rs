//! Identity and output-location rules for transcript keys.
//!
//! Keys are plain `/`-separated strings, independent of the host OS path
//! syntax, e.g. `123456789012/alice-0a1b2c3d4e5f.log`.

use crate::transcript::{Identity, UNKNOWN};

/// Default namespace that processed output is written under.
pub const DEFAULT_NAMESPACE: &str = "processed_logs";

/// Default extension for processed output.
pub const DEFAULT_EXTENSION: &str = "json";

/// Last `/`-separated segment of a key.
fn file_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Directory part of a key, without surrounding slashes.
fn directory(key: &str) -> &str {
    key.rsplit_once('/')
        .map(|(dir, _)| dir.trim_matches('/'))
        .unwrap_or("")
}

/// Filename with its final extension removed.
///
/// Leading dots do not start an extension, so `.bashrc` keeps its name.
pub fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].chars().any(|c| c != '.') => &filename[..idx],
        _ => filename,
    }
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

impl Identity {
    /// Derive account, user and session from a transcript key.
    ///
    /// - `account_id` is the first segment when it is all digits and the key
    ///   has a directory part
    /// - the filename stem is split on its last `-` into user and session id
    /// - a stem without `-` is taken as the user, with an unknown session id
    ///
    /// Anything that cannot be derived is `"unknown"`.
    ///
    /// ```
    /// use scriptlog::transcript::Identity;
    ///
    /// let identity = Identity::from_key("123456789012/alice-0a1b2c.log");
    /// assert_eq!(identity.account_id, "123456789012");
    /// assert_eq!(identity.user, "alice");
    /// assert_eq!(identity.session_id, "0a1b2c");
    /// ```
    pub fn from_key(key: &str) -> Self {
        let account_id = match key.split_once('/') {
            Some((first, _)) if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) => {
                first.to_string()
            }
            _ => UNKNOWN.to_string(),
        };

        let stem = file_stem(file_name(key));
        let (user, session_id) = match stem.rsplit_once('-') {
            Some((user, session_id)) => (or_unknown(user), or_unknown(session_id)),
            None => (or_unknown(stem), UNKNOWN.to_string()),
        };

        Self {
            account_id,
            user,
            session_id,
        }
    }
}

/// Where the processed records for `key` are stored.
///
/// The key's directory is kept under `namespace` and the extension is
/// replaced, so `123/alice-1.log` becomes `processed_logs/123/alice-1.json`.
pub fn output_key(key: &str, namespace: &str, extension: &str) -> String {
    let filename = format!("{}.{}", file_stem(file_name(key)), extension);
    let dir = directory(key);
    if dir.is_empty() {
        format!("{}/{}", namespace, filename)
    } else {
        format!("{}/{}/{}", namespace, dir, filename)
    }
}

/// Whether `key` already lives under the output namespace.
///
/// Processing such a key would feed output back into the parser.
pub fn is_processed_key(key: &str, namespace: &str) -> bool {
    key.strip_prefix(namespace)
        .is_some_and(|rest| rest.starts_with('/'))
}
