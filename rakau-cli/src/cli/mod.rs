//! Command-line interface for rakau.
//!
//! `tree` prints one uniformly random labelled tree; `suite` generates a JSON
//! suite of tree-query cases, optionally answered by a reference solver.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutput, SuiteCommand, SuiteSummary, TreeCommand,
    render_output, run_cli,
};

#[cfg(test)]
mod tests;
