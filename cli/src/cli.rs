//! # CLI Interface
//!
//! Defines the command-line argument structure for the `chronicle` binary
//! using `clap` derive. Two subcommands: `demo` and `version`.

use clap::{Parser, Subcommand};

/// Chronicle — an educational tamper-evident ledger.
///
/// Builds an in-memory hash-linked chain, optionally tampers with one
/// record, and runs the integrity scan so you can watch the forgery get
/// caught (or, if you tamper with the tip, get away with it).
#[derive(Parser, Debug)]
#[command(
    name = "chronicle",
    about = "Educational tamper-evident ledger demo",
    version,
    propagate_version = true
)]
pub struct ChronicleCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the chronicle binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a chain, tamper with it, and verify.
    Demo(DemoArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Number of records to append on top of genesis.
    #[arg(long, env = "CHRONICLE_RECORDS", default_value_t = 2)]
    pub records: u64,

    /// Index of the record to tamper with after the honest run.
    ///
    /// Omit to skip the tampering step entirely. Index 0 is genesis; the
    /// last index is the tip, whose mutation goes undetected — try it.
    #[arg(long)]
    pub tamper_index: Option<usize>,

    /// Replacement payload used when tampering.
    #[arg(long, default_value = "Alice pays Bob 1000")]
    pub tamper_payload: String,

    /// Emit the final ledger as JSON on stdout instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Log output format: "pretty" or "json".
    #[arg(long, env = "CHRONICLE_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        ChronicleCli::command().debug_assert();
    }

    #[test]
    fn demo_defaults() {
        let cli = ChronicleCli::parse_from(["chronicle", "demo"]);
        match cli.command {
            Commands::Demo(args) => {
                assert_eq!(args.records, 2);
                assert!(args.tamper_index.is_none());
                assert!(!args.json);
            }
            _ => panic!("expected demo subcommand"),
        }
    }

    #[test]
    fn demo_tamper_flags_parse() {
        let cli = ChronicleCli::parse_from([
            "chronicle",
            "demo",
            "--records",
            "5",
            "--tamper-index",
            "1",
            "--json",
        ]);
        match cli.command {
            Commands::Demo(args) => {
                assert_eq!(args.records, 5);
                assert_eq!(args.tamper_index, Some(1));
                assert!(args.json);
            }
            _ => panic!("expected demo subcommand"),
        }
    }
}
