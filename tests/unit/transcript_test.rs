//! Unit tests for transcript cleaning and segmentation

use scriptlog::transcript::{
    clean_transcript, command_after_prompt, segment_commands, strip_control_sequences,
    ControlStripper, Segmenter, Transform, TransformChain,
};
use scriptlog::{parse_transcript, Identity, SessionMetadata};

use crate::helpers::{crlf, test_identity};

// ============================================================================
// Cleaning
// ============================================================================

#[test]
fn strips_csi_osc_and_bell() {
    let raw = "\x1b]0;user@host: ~\x07\x1b[1;34mls\x1b[0m\x07 \x1b[?2004h-la\x1b]2;title\x1b\\";
    assert_eq!(strip_control_sequences(raw), "ls -la");
}

#[test]
fn keeps_unrecognized_escapes() {
    // A lone ESC followed by a non-sequence character is left alone
    assert_eq!(strip_control_sequences("a\x1bZb"), "a\x1bZb");
    assert_eq!(strip_control_sequences("plain text\n"), "plain text\n");
}

#[test]
fn stripper_counts_sequences() {
    let mut stripper = ControlStripper::new();
    let mut text = "\x1b[31mred\x1b[0m\x07".to_string();
    stripper.transform(&mut text);
    assert_eq!(text, "red");
    assert_eq!(stripper.sequences_stripped(), 3);
}

#[test]
fn clean_resolves_progress_lines() {
    let raw = crlf(&["Downloading  5%\rDownloading 50%\rDownloading 99%\rDone.", "next"]);
    assert_eq!(clean_transcript(&raw), "Done.oading 99%\nnext\n");
}

#[test]
fn clean_is_stable_on_clean_text() {
    let raw = crlf(&[
        "\x1b[01;32muser@host\x1b[00m:\x1b[01;34m~\x1b[00m$ cat notes.txt",
        "one\x08\x08\x08two",
    ]);
    let once = clean_transcript(&raw);
    assert_eq!(once, "user@host:~$ cat notes.txt\ntwo\n");
    assert_eq!(clean_transcript(&once), once);
}

#[test]
fn clean_snapshot_of_interactive_edit() {
    let raw = crlf(&[
        "Script started on 2024-01-01 10:00:00+00:00",
        "[ec2-user@ip-10-0-0-1 ~]$ sudo systemctl stauts\x08\x08\x08\x08\x08tatus nginx",
        "\x1b[0;1;32m●\x1b[0m nginx.service - The nginx HTTP server",
        "   Active: \x1b[0;1;32mactive (running)\x1b[0m",
    ]);
    insta::assert_snapshot!(clean_transcript(&raw).trim_end(), @r"
    Script started on 2024-01-01 10:00:00+00:00
    [ec2-user@ip-10-0-0-1 ~]$ sudo systemctl status nginx
    ● nginx.service - The nginx HTTP server
       Active: active (running)
    ");
}

#[test]
fn empty_chain_leaves_text_alone() {
    let mut chain = TransformChain::new();
    assert!(chain.is_empty());
    let mut text = "\x1b[1mbold\x1b[0m".to_string();
    chain.transform(&mut text);
    assert_eq!(text, "\x1b[1mbold\x1b[0m");
}

// ============================================================================
// Prompts and segmentation
// ============================================================================

#[test]
fn recognizes_supported_prompts() {
    assert_eq!(command_after_prompt("sh-4.2$ ls"), Some("ls"));
    assert_eq!(
        command_after_prompt("sh-5.1(via ssm-agent-session)$ whoami"),
        Some("whoami")
    );
    assert_eq!(command_after_prompt("ubuntu@ip-10-0-0-1:~$ df -h"), Some("df -h"));
    assert_eq!(command_after_prompt("root@box:/var/log# tail syslog"), Some("tail syslog"));
    assert_eq!(
        command_after_prompt("[ec2-user@ip-10-0-0-1 ~]$ uptime"),
        Some("uptime")
    );
    assert_eq!(command_after_prompt("$ echo"), Some("echo"));
}

#[test]
fn prompt_consumes_at_most_one_space() {
    assert_eq!(command_after_prompt("$   spaced"), Some("  spaced"));
    assert_eq!(command_after_prompt("sh-4.2$"), Some(""));
}

#[test]
fn lines_without_prompt_are_output() {
    assert_eq!(command_after_prompt("total 48"), None);
    assert_eq!(command_after_prompt("drwxr-xr-x 2 root root 4096 ."), None);
}

#[test]
fn segmenter_drops_lines_before_first_prompt() {
    let mut segmenter = Segmenter::new();
    for line in ["banner", "motd", "$ id", "uid=0(root)"] {
        segmenter.feed_line(line);
    }
    assert_eq!(segmenter.discarded_lines(), 2);

    let units = segmenter.finish();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].command, "id");
    assert_eq!(units[0].output_lines, vec!["uid=0(root)"]);
}

#[test]
fn segmenter_ignores_session_markers() {
    let units = segment_commands(
        "Script started on today\n$ ls\na\nScript done on today [COMMAND_EXIT_CODE=\"0\"]\n",
    );
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].output_lines, vec!["a"]);
}

#[test]
fn page_breaks_end_lines() {
    let raw = "$ man ls\nLS(1)\x0c$ pwd\n/root\n";
    let parsed = parse_transcript(raw, &Identity::default());
    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.records[0].command, "man ls");
    assert_eq!(parsed.records[0].output, "LS(1)");
    assert_eq!(parsed.records[1].command, "pwd");
    assert_eq!(parsed.records[1].output, "/root");
}

#[test]
fn consecutive_prompts_give_empty_output() {
    let units = segment_commands("$ cd /tmp\n$ pwd\n/tmp\n");
    assert_eq!(units.len(), 2);
    assert!(units[0].output_lines.is_empty());
    assert_eq!(units[1].output_lines, vec!["/tmp"]);
}

// ============================================================================
// Metadata and records
// ============================================================================

#[test]
fn metadata_from_cleaned_text() {
    let cleaned = "Script started on 2024-05-02 12:00:00+00:00 [TERM=\"xterm\"]\nsh-4.2$ instance-id: i-0abc123\n";
    let metadata = SessionMetadata::extract(cleaned);
    assert_eq!(metadata.start_time, "2024-05-02 12:00:00+00:00");
    assert_eq!(metadata.instance_id, "i-0abc123");
}

#[test]
fn metadata_defaults_to_unknown() {
    let metadata = SessionMetadata::extract("$ ls\n");
    assert_eq!(metadata, SessionMetadata::default());
    assert_eq!(metadata.start_time, "unknown");
    assert_eq!(metadata.instance_id, "unknown");
}

#[test]
fn records_carry_identity_and_metadata() {
    let raw = crlf(&[
        "Script started on 2024-05-02 12:00:00+00:00",
        "sh-4.2$ instance-id: i-0abc123",
        "sh-4.2$ hostname",
        "ip-10-0-0-1",
        "sh-4.2$ ",
        "sh-4.2$ exit",
    ]);
    let parsed = parse_transcript(&raw, &test_identity());

    let commands: Vec<&str> = parsed.records.iter().map(|r| r.command.as_str()).collect();
    assert_eq!(commands, vec!["hostname", "exit"]);

    let first = &parsed.records[0];
    assert_eq!(first.output, "ip-10-0-0-1");
    assert_eq!(first.instance_id, "i-0abc123");
    assert_eq!(first.session_start_time, "2024-05-02 12:00:00+00:00");
    assert_eq!(first.aws_account_id, "123456789012");
    assert_eq!(first.user, "alice");
    assert_eq!(first.session_id, "0a1b2c3d");
    assert_eq!(parsed.records[1].output, "");
}

#[test]
fn output_is_trimmed_but_inner_lines_kept() {
    let raw = "$ cat f\n\n  first\n\n  second  \n\n";
    let parsed = parse_transcript(raw, &Identity::default());
    assert_eq!(parsed.records[0].output, "first\n\n  second");
}

#[test]
fn transcript_without_prompts_has_no_records() {
    let parsed = parse_transcript("just\nsome\noutput\n", &Identity::default());
    assert!(parsed.records.is_empty());
}
