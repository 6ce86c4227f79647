use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::process;

use iou_core::{Contract, IouContract, Rule, TransactionData, VerificationFailure};

/// IOU — issuance contract CLI
///
/// Check proposed IOU issuance transactions against the contract rules.
#[derive(Parser)]
#[command(name = "iou", version, about, long_about = None)]
struct Cli {
    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a transaction (JSON file) against the IOU contract
    Verify {
        /// Path to transaction .json file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Report every violated rule, not just the first
        #[arg(long)]
        all: bool,
    },

    /// Print the legal contract reference (SHA-256 of the template)
    LegalReference,

    /// List the contract rules in the order they are checked
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Verify { file, json, all } => cmd_verify(&file, json, all, cli.quiet),
        Commands::LegalReference => {
            println!("{}", IouContract::new().legal_contract_reference());
            0
        }
        Commands::Rules { json } => cmd_rules(json),
        Commands::Version => {
            println!("iou {} (iou-core {})", env!("CARGO_PKG_VERSION"), iou_core::VERSION);
            0
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

// ── Verify ────────────────────────────────────────────────

/// Exit codes: 0 accepted, 1 rejected, 2 unreadable input
fn cmd_verify(file: &Path, json: bool, all: bool, quiet: bool) -> i32 {
    let tx = match load_transaction(file) {
        Ok(tx) => tx,
        Err(err) => {
            eprintln!("{} {}: {}", "error:".red().bold(), file.display(), err);
            return 2;
        }
    };
    log::info!(
        "verifying {}: {} input(s), {} output(s), {} command(s)",
        file.display(),
        tx.inputs.len(),
        tx.outputs.len(),
        tx.commands.len()
    );

    let contract = IouContract::new();
    let outcome = if all {
        contract.check_rules(&tx)
    } else {
        contract.verify(&tx).map(|()| Vec::new()).or_else(|failure| match failure {
            VerificationFailure::RuleViolation(rule) => Ok(vec![rule]),
            malformed => Err(malformed),
        })
    };

    match outcome {
        Ok(violations) => {
            let accepted = violations.is_empty();
            if json {
                let report = serde_json::json!({
                    "file": file.display().to_string(),
                    "accepted": accepted,
                    "malformed": false,
                    "violations": violations
                        .iter()
                        .map(|r| serde_json::json!({"rule": r, "message": r.description()}))
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
            } else if accepted {
                if !quiet {
                    println!("{} {} — transaction accepted", "✓".green(), file.display());
                }
            } else {
                eprintln!("{} {} — transaction rejected", "✗".red(), file.display());
                for rule in &violations {
                    eprintln!("  {} {}", "error:".red().bold(), rule);
                }
            }
            if accepted {
                0
            } else {
                1
            }
        }
        Err(failure) => {
            if json {
                let report = serde_json::json!({
                    "file": file.display().to_string(),
                    "accepted": false,
                    "malformed": true,
                    "violations": [],
                    "message": failure.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
            } else {
                eprintln!("{} {}: {}", "error:".red().bold(), file.display(), failure);
            }
            1
        }
    }
}

fn load_transaction(file: &Path) -> iou_core::Result<TransactionData> {
    let text = std::fs::read_to_string(file)?;
    TransactionData::from_json(&text)
}

// ── Rules ─────────────────────────────────────────────────

fn cmd_rules(json: bool) -> i32 {
    if json {
        let rules: Vec<_> = Rule::ALL
            .iter()
            .map(|r| serde_json::json!({"rule": r, "message": r.description()}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rules).unwrap_or_default());
    } else {
        for (i, rule) in Rule::ALL.iter().enumerate() {
            println!("{}. {:?}: {}", i + 1, rule, rule.description());
        }
    }
    0
}
