// Copyright (c) 2026 Chronicle Contributors. MIT License.
// See LICENSE for details.

//! # Chronicle Demo Binary
//!
//! Entry point for the `chronicle` binary. Parses CLI arguments,
//! initializes logging, and runs the scripted tamper-evidence walkthrough:
//! build a chain, verify it, optionally rewrite one record, verify again.
//!
//! The chain lives only for the duration of the process — there is nothing
//! to persist and nothing to clean up.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use chronicle_ledger::{Ledger, Verification};

use cli::{ChronicleCli, Commands, DemoArgs};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = ChronicleCli::parse();

    match cli.command {
        Commands::Demo(args) => run_demo(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Runs the walkthrough: honest appends, a verification pass, optional
/// tampering, and a second verification pass.
fn run_demo(args: DemoArgs) -> Result<()> {
    logging::init_logging(
        "chronicle=info,chronicle_ledger=debug",
        LogFormat::from_str_lossy(&args.log_format),
    );

    tracing::info!(records = args.records, "building chain");

    let mut ledger = Ledger::new();
    for i in 1..=args.records {
        ledger.append(demo_payload(i), i);
    }

    let before = ledger.verify();
    tracing::info!(outcome = %before, "verification before tampering");
    debug_assert_eq!(before, Verification::Valid);

    if let Some(index) = args.tamper_index {
        ledger
            .mutate(index, args.tamper_payload.clone())
            .with_context(|| format!("cannot tamper with record {}", index))?;
        tracing::info!(index, payload = %args.tamper_payload, "record rewritten");

        let after = ledger.verify();
        tracing::info!(outcome = %after, "verification after tampering");
        match after {
            Verification::Valid => println!("{} (tip mutations leave no trace)", after),
            Verification::CompromisedAt(_) => println!("{}", after),
        }
    } else {
        println!("{}", before);
    }

    if args.json {
        let json =
            serde_json::to_string_pretty(&ledger).context("failed to serialize ledger")?;
        println!("{}", json);
    } else {
        print!("{}", ledger.report());
    }

    Ok(())
}

/// Payloads for the honest portion of the demo. The first two match the
/// classic walkthrough; beyond that, generic transfers.
fn demo_payload(i: u64) -> String {
    match i {
        1 => "Alice pays Bob 10".to_string(),
        2 => "Bob pays Carol 5".to_string(),
        _ => format!("Transfer #{}", i),
    }
}

/// Prints version information to stdout.
fn print_version() {
    println!("chronicle {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_payloads_start_with_the_classic_pair() {
        assert_eq!(demo_payload(1), "Alice pays Bob 10");
        assert_eq!(demo_payload(2), "Bob pays Carol 5");
        assert_eq!(demo_payload(7), "Transfer #7");
    }
}
