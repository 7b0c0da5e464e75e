//! Completions command.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Print completions for `shell` to stdout.
pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ota", &mut std::io::stdout());
}
