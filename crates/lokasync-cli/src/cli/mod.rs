//! CLI for the LokaSync OTA helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use lokasync_core::config;

use commands::{run_completions, run_drive_url, run_payload, PayloadOptions};

/// Top-level CLI for LokaSync.
#[derive(Debug, Parser)]
#[command(name = "lokasync")]
#[command(about = "LokaSync: firmware update payloads for OTA nodes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the firmware update message for a node and print it with its topic.
    Payload {
        /// Node codename the update is addressed to.
        node: String,
        /// Firmware download URL (Google Drive share links are accepted).
        firmware_url: String,
        /// Firmware version label, e.g. 1.2.3.
        version: String,
        /// Use this session id instead of a random one.
        #[arg(long, value_name = "ID")]
        session_id: Option<String>,
        /// Keep the firmware URL exactly as given.
        #[arg(long)]
        no_normalize: bool,
        /// Reject malformed input even if the config allows it.
        #[arg(long)]
        strict: bool,
    },

    /// Print the direct-download form of a Google Drive share link.
    DriveUrl {
        /// Share link (other URLs are printed unchanged).
        url: String,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Payload {
                node,
                firmware_url,
                version,
                session_id,
                no_normalize,
                strict,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let opts = PayloadOptions {
                    session_id,
                    no_normalize,
                    strict,
                };
                run_payload(&cfg, &node, &firmware_url, &version, &opts)?;
            }
            CliCommand::DriveUrl { url } => run_drive_url(&url),
            CliCommand::Completions { shell } => run_completions::<Cli>(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
