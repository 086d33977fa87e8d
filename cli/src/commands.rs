pub mod check;
pub mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rostr")]
#[command(about = "Extracts public group rosters from a directory-service snapshot.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress the spinner and summary output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip the post-write identity validation pass
    #[arg(long, global = true)]
    pub no_validate: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the roster report from a snapshot directory
    #[command(alias = "g")]
    Generate {
        /// Directory holding the snapshot JSON exports
        snapshot: PathBuf,
        /// Where to write the report
        #[arg(short, long, default_value = "public_ldap_groups.json")]
        output: PathBuf,
    },
    /// Validate the uids in an existing report
    #[command(alias = "c")]
    Check {
        /// The report file to validate
        report: PathBuf,
        /// Directory holding the snapshot JSON exports
        snapshot: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
