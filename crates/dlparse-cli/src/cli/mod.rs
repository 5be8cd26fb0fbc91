//! CLI for the dlparse fragment toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dlparse_core::config;
use dlparse_core::Toolkit;
use std::path::PathBuf;

use commands::{
    run_alias, run_bool, run_duration, run_entries, run_hash, run_name, run_number,
    run_packages, run_size, run_traffic, run_verify,
};

/// Top-level CLI for dlparse.
#[derive(Debug, Parser)]
#[command(name = "dlparse")]
#[command(about = "dlparse: turn scraped hoster text into typed values", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/dlparse/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Unit for the `duration` command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Coerce a yes/no style token.
    Bool { text: String },

    /// Split a delimited list into entries, one per line.
    Entries {
        text: String,
        /// Keep whitespace inside entries instead of splitting on it.
        #[arg(long)]
        allow_whitespace: bool,
    },

    /// Extract a checksum and its algorithm.
    Hash { text: String },

    /// Derive a display name from a link or header value.
    Name {
        text: String,
        /// Sanitize for file-system use.
        #[arg(long)]
        purge: bool,
    },

    /// Turn an identifier into a CamelCase label.
    Alias { text: String },

    /// Sum English number words.
    Number { text: String },

    /// Parse a size into bytes.
    Size {
        text: String,
        /// Unit to assume, overriding any unit in the text (e.g. MB).
        #[arg(long)]
        unit: Option<String>,
    },

    /// Parse remaining traffic ("Unlimited" or a size).
    Traffic {
        text: String,
        /// Unit to assume, overriding any unit in the text (e.g. MB).
        #[arg(long)]
        unit: Option<String>,
    },

    /// Parse a human duration.
    Duration {
        text: String,
        /// Output unit.
        #[arg(long = "as", value_enum, default_value_t = TimeUnit::Seconds)]
        unit: TimeUnit,
    },

    /// Group `name<TAB>url` (or bare url) lines into packages, printed as JSON.
    Packages {
        /// Input file; stdin when omitted.
        path: Option<PathBuf>,
    },

    /// Check a file against a checksum text such as "sha256: abc...".
    Verify {
        /// Path to the file.
        path: PathBuf,
        /// Text containing the expected digest.
        checksum: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match cli.config.as_deref() {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let kit = Toolkit::from_config(&cfg);

        match cli.command {
            CliCommand::Bool { text } => run_bool(&kit, &text),
            CliCommand::Entries {
                text,
                allow_whitespace,
            } => run_entries(&kit, &text, allow_whitespace),
            CliCommand::Hash { text } => run_hash(&kit, &text)?,
            CliCommand::Name { text, purge } => run_name(&kit, &text, purge),
            CliCommand::Alias { text } => run_alias(&kit, &text),
            CliCommand::Number { text } => run_number(&kit, &text),
            CliCommand::Size { text, unit } => run_size(&kit, &text, unit.as_deref()),
            CliCommand::Traffic { text, unit } => run_traffic(&kit, &text, unit.as_deref())?,
            CliCommand::Duration { text, unit } => run_duration(&kit, &text, unit),
            CliCommand::Packages { path } => run_packages(&kit, path.as_deref())?,
            CliCommand::Verify { path, checksum } => run_verify(&kit, &path, &checksum)?,
        }

        Ok(())
    }
}

/// Prints a value, or `none` when absent.
fn print_opt<T: std::fmt::Display>(value: Option<T>) {
    match value {
        Some(v) => println!("{v}"),
        None => println!("none"),
    }
}

#[cfg(test)]
mod tests;
