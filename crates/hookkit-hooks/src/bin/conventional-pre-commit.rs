// Rust guideline compliant 2026-10-18

//! CLI entry point for the conventional commit-message hook.

use clap::Parser;
use hookkit_core::{conventional_types, logging, Config};
use hookkit_hooks::{commit_msg_hook, report, CommitMsgOptions, Verdict};
use std::path::PathBuf;
use std::process::ExitCode;

/// Check a git commit message for conventional commits formatting.
#[derive(Parser, Debug)]
#[command(name = "conventional-pre-commit")]
#[command(
    version,
    about = "Check a git commit message for conventional commits formatting.",
    after_help = "Examples:\n  conventional-pre-commit .git/COMMIT_EDITMSG\n  conventional-pre-commit --types build perf -- .git/COMMIT_EDITMSG\n  conventional-pre-commit --limit-to services/api,infra .git/COMMIT_EDITMSG\n"
)]
struct Cli {
    /// Optional list of types to support
    #[arg(long, num_args = 0..)]
    types: Option<Vec<String>>,

    /// Directories to limit the commit check
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    limit_to: Option<Vec<String>>,

    /// Force commit to have scope defined
    #[arg(long)]
    force_scope: bool,

    /// A file containing a git commit message
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let repo_dir = std::env::current_dir()?;
    let config = Config::load(&repo_dir)?;
    let _guard = logging::init_tracing(config.log_level.as_deref(), config.log_file.as_deref())?;

    let options = CommitMsgOptions {
        types: cli.types.unwrap_or(config.types),
        limit_to: cli
            .limit_to
            .unwrap_or_default()
            .into_iter()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect(),
        optional_scope: !(cli.force_scope || config.force_scope),
        input: cli.input,
        repo_dir,
    };

    let verdict = commit_msg_hook(&options)?;
    let mut out = report::stdout();
    match &verdict {
        Verdict::Rejected { message } => {
            report::write_rejection(&mut out, message, &conventional_types(&options.types))?;
        }
        Verdict::BadEncoding => report::write_bad_encoding(&mut out)?,
        Verdict::Conventional | Verdict::Skipped => {}
    }

    Ok(verdict.exit_code())
}
