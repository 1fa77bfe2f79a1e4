//! CLI definitions for scriptlog
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be reused for completion generation and parsed in tests.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles for consistent CLI appearance.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "scriptlog")]
#[command(about = "Turn raw terminal session transcripts into structured command records")]
#[command(
    long_about = "scriptlog - Turn raw terminal session transcripts into structured command records.

scriptlog reads `script`-style session recordings (for example SSM Session
Manager logs), strips terminal control sequences, resolves backspace and
carriage-return edits, and splits the session into one JSON record per
command with its output.

QUICK START:
    scriptlog parse session.log                 Print records for a local file
    scriptlog clean session.log                 Print the cleaned transcript
    scriptlog process 123456789012/alice-1.log  Process a key under the storage root

LOGGING:
    Set SCRIPTLOG_LOG (e.g. SCRIPTLOG_LOG=debug) to control diagnostics on stderr."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process transcripts under the storage root into JSON-lines records
    #[command(long_about = "Process one or more transcript keys.

Each KEY is a '/'-separated path relative to the storage root
(config: storage.root, or --root). Records are written to
<root>/<namespace>/<key dir>/<key stem>.<extension>.

Keys already under the output namespace are skipped. Transcripts
without any commands produce no output file.

EXAMPLES:
    scriptlog process 123456789012/alice-0a1b2c.log
    scriptlog process --root ./logs 1/a-1.log 1/b-2.log")]
    Process {
        /// Transcript keys relative to the storage root
        #[arg(required = true, help = "Transcript keys relative to the storage root")]
        keys: Vec<String>,
        /// Override the storage root directory
        #[arg(long, help = "Storage root directory (overrides config)")]
        root: Option<String>,
    },

    /// Print the records for a local transcript file as JSON lines
    #[command(long_about = "Parse a local transcript file and print one JSON record per line.

Identity fields (account, user, session id) are derived from --key if
given, otherwise from the file path itself.

EXAMPLES:
    scriptlog parse alice-0a1b2c.log
    scriptlog parse /tmp/download.log --key 123456789012/alice-0a1b2c.log")]
    Parse {
        /// Path to the transcript file
        #[arg(help = "Path to the transcript file")]
        file: String,
        /// Key to derive identity fields from
        #[arg(long, help = "Key to derive account/user/session from")]
        key: Option<String>,
    },

    /// Print the cleaned transcript text
    Clean {
        /// Path to the transcript file
        #[arg(help = "Path to the transcript file")]
        file: String,
        /// Print cleaning statistics to stderr
        #[arg(long, help = "Print cleaning statistics to stderr")]
        stats: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}
