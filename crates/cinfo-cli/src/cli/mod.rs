//! CLI for cinfo.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cinfo_core::config;

use commands::{
    run_available, run_duration, run_image_size, run_kind, run_length, run_lines, run_location,
    run_modified, run_report, run_type,
};

/// Top-level CLI for cinfo.
#[derive(Debug, Parser)]
#[command(name = "cinfo")]
#[command(about = "cinfo: inspect the content behind a URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the content length in bytes (-1 if unknown).
    Length {
        /// Target URL (http, https, ftp, ftps or file).
        url: String,
    },

    /// Print the content type as reported by the server.
    Type {
        /// Target URL.
        url: String,
    },

    /// Print the last-modified time (RFC 3339).
    Modified {
        /// Target URL.
        url: String,
    },

    /// Print the target URL as the probe sees it. No network access.
    Location {
        /// Target URL.
        url: String,
    },

    /// Print whether the content can be fetched (true/false).
    Available {
        /// Target URL.
        url: String,
    },

    /// Print the content family: image, text, audio or other.
    Kind {
        /// Target URL.
        url: String,
    },

    /// Print WIDTHxHEIGHT of image content.
    ImageSize {
        /// Target URL.
        url: String,
    },

    /// Print the number of lines of text content.
    Lines {
        /// Target URL.
        url: String,
    },

    /// Print the duration in seconds of audio content.
    Duration {
        /// Target URL.
        url: String,
    },

    /// Print everything the probe can tell about the content.
    Report {
        /// Target URL.
        url: String,

        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let opts = cfg.transport_options();

        match cli.command {
            CliCommand::Length { url } => run_length(&url, opts).await?,
            CliCommand::Type { url } => run_type(&url, opts).await?,
            CliCommand::Modified { url } => run_modified(&url, opts).await?,
            CliCommand::Location { url } => run_location(&url)?,
            CliCommand::Available { url } => run_available(&url, opts).await?,
            CliCommand::Kind { url } => run_kind(&url, opts).await?,
            CliCommand::ImageSize { url } => run_image_size(&url, opts).await?,
            CliCommand::Lines { url } => run_lines(&url, opts).await?,
            CliCommand::Duration { url } => run_duration(&url, opts).await?,
            CliCommand::Report { url, json } => run_report(&url, opts, json).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
