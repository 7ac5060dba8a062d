//! Tests for drive-url and completions.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_drive_url() {
    match parse(&["lokasync", "drive-url", "https://drive.google.com/file/d/abc/view"]) {
        CliCommand::DriveUrl { url } => {
            assert_eq!(url, "https://drive.google.com/file/d/abc/view")
        }
        _ => panic!("expected DriveUrl"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["lokasync", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_unknown_shell() {
    assert!(Cli::try_parse_from(["lokasync", "completions", "cmd"]).is_err());
}
