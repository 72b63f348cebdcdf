//! CLI entrypoint for the ipcanon conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use ipcanon_harness::{HarnessError, VerificationReport, corpus, report, run_fixture_set};

/// Conformance tooling for the IP literal engine.
#[derive(Debug, Parser)]
#[command(name = "ipcanon-harness")]
#[command(about = "Conformance harness for the IP literal engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the built-in corpus as fixture JSON files.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
        /// Corpus family to capture, all families when omitted.
        #[arg(long)]
        family: Option<String>,
    },
    /// Verify the engine against a fixture file.
    Verify {
        /// Fixture JSON file.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown). Prints a summary to stdout when omitted.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Emit the machine-readable report as JSON instead of markdown.
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in corpus without touching the filesystem.
    Selftest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(clean) if clean => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("harness error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<bool, HarnessError> {
    match command {
        Command::Capture { output, family } => {
            std::fs::create_dir_all(&output).map_err(|source| HarnessError::Write {
                path: output.clone(),
                source,
            })?;
            let families: Vec<&str> = match &family {
                Some(name) => vec![name.as_str()],
                None => corpus::FAMILIES.to_vec(),
            };
            for name in families {
                let set = corpus::builtin(name)?;
                let path = output.join(format!("{name}.json"));
                set.to_file(&path)?;
                println!("wrote {} ({} cases)", path.display(), set.cases.len());
            }
            Ok(true)
        }
        Command::Verify {
            fixture,
            report: report_path,
            json,
        } => {
            let set = ipcanon_harness::FixtureSet::from_file(&fixture)?;
            let digest = report::sha256_hex(&fixture)?;
            let outcomes = run_fixture_set(&set);
            let verification = VerificationReport::new(set.family.clone(), digest, outcomes);
            let rendered = if json {
                verification.to_json()?
            } else {
                verification.to_markdown()
            };
            match report_path {
                Some(path) => {
                    std::fs::write(&path, rendered).map_err(|source| HarnessError::Write {
                        path,
                        source,
                    })?;
                }
                None => println!("{rendered}"),
            }
            Ok(verification.all_passed())
        }
        Command::Selftest => {
            let mut clean = true;
            for &family in corpus::FAMILIES {
                let set = corpus::builtin(family)?;
                let verification =
                    VerificationReport::new(family, String::new(), run_fixture_set(&set));
                println!(
                    "{family}: {}/{} passed",
                    verification.passed, verification.total
                );
                clean &= verification.all_passed();
            }
            Ok(clean)
        }
    }
}
