//! Command implementations and argument parsing for the rakau CLI.

use std::{
    io::{self, Write},
    path::PathBuf,
    time::Duration,
};

use clap::{Args, Parser, Subcommand};
use rakau_core::{RandomTree, TreeError, TreeGeneratorBuilder, node_count_from_signed};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument};

use crate::suite::{
    CaseError, CaseGenerator, CaseSink, EmptyOracle, JsonFileSink, Oracle, OracleError,
    ProcessOracle, SinkError, TestCase, Tier,
};

const DEFAULT_SUITE_SEED: u64 = 2025;
const DEFAULT_MAX_WEIGHT: u64 = 10_000;
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "rakau", about = "Generate uniformly random labelled trees.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print one random tree as `n` followed by one `u v` line per edge.
    Tree(TreeCommand),
    /// Generate a JSON suite of tree-query test cases.
    Suite(SuiteCommand),
}

/// Options accepted by the `tree` command.
#[derive(Debug, Args, Clone)]
pub struct TreeCommand {
    /// Number of vertices.
    #[arg(long, allow_negative_numbers = true)]
    pub nodes: i64,

    /// Seed for a reproducible tree.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Value added to every vertex id in the output.
    #[arg(long, default_value_t = rakau_core::ONE_BASED)]
    pub offset: usize,
}

/// Options accepted by the `suite` command.
#[derive(Debug, Args, Clone)]
pub struct SuiteCommand {
    /// Destination JSON file; parent directories are created.
    #[arg(long)]
    pub output: PathBuf,

    /// Seed fixing every tree, query and case size in the suite.
    #[arg(long, default_value_t = DEFAULT_SUITE_SEED)]
    pub seed: u64,

    /// Largest query weight.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: u64,

    /// Reference solver run once per case; outputs stay empty without it.
    #[arg(long)]
    pub oracle: Option<PathBuf>,

    /// Deadline for one oracle run in milliseconds.
    #[arg(long = "timeout-ms", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Tiers to generate, repeatable; all tiers when omitted.
    #[arg(long = "tier", value_enum)]
    pub tiers: Vec<Tier>,
}

/// Errors surfaced while executing CLI commands.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// Tree generation rejected its arguments.
    #[error(transparent)]
    Core(#[from] TreeError),
    /// Case generation failed.
    #[error(transparent)]
    Case(#[from] CaseError),
    /// The reference solver failed on a case.
    #[error("case {index}: {source}")]
    Oracle {
        /// Zero-based position of the case in the suite.
        index: usize,
        /// Underlying oracle failure.
        #[source]
        source: OracleError,
    },
    /// Writing the suite failed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl CliError {
    /// Returns the core error code when the failure came from tree generation.
    #[must_use]
    pub fn core_code(&self) -> Option<rakau_core::TreeErrorCode> {
        match self {
            Self::Core(err) | Self::Case(CaseError::Tree(err)) => Some(err.code()),
            _ => None,
        }
    }
}

/// Summarises a written suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSummary {
    /// File the suite was written to.
    pub path: PathBuf,
    /// Number of cases written.
    pub cases: usize,
}

/// Result of executing a CLI command.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// A generated tree.
    Tree(RandomTree),
    /// A written suite.
    Suite(SuiteSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation, the oracle or the sink fails.
///
/// # Examples
/// ```
/// use rakau_cli::cli::{Cli, Command, CommandOutput, TreeCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Tree(TreeCommand { nodes: 5, seed: Some(1), offset: 1 }),
/// };
/// let CommandOutput::Tree(tree) = run_cli(cli)? else { unreachable!() };
/// assert_eq!(tree.labelled_edges().len(), 4);
/// # Ok::<(), rakau_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Tree(command) => {
            span.record("command", "tree");
            run_tree(&command).map(CommandOutput::Tree)
        }
        Command::Suite(command) => {
            span.record("command", "suite");
            let mut sink = JsonFileSink::new(&command.output);
            let oracle: Box<dyn Oracle> = match &command.oracle {
                Some(program) => Box::new(
                    ProcessOracle::new(program)
                        .with_timeout(Duration::from_millis(command.timeout_ms)),
                ),
                None => Box::new(EmptyOracle),
            };
            let cases = run_suite(&command, oracle.as_ref(), &mut sink)?;
            Ok(CommandOutput::Suite(SuiteSummary {
                path: command.output,
                cases,
            }))
        }
    }
}

#[instrument(
    name = "cli.tree",
    err,
    skip(command),
    fields(nodes = command.nodes, seeded = command.seed.is_some()),
)]
pub(super) fn run_tree(command: &TreeCommand) -> Result<RandomTree, CliError> {
    let builder = TreeGeneratorBuilder::new()
        .with_node_count(node_count_from_signed(command.nodes)?)
        .with_label_offset(command.offset);
    let builder = match command.seed {
        Some(seed) => builder.with_seed(seed),
        None => builder,
    };
    Ok(builder.build()?.generate()?)
}

/// Generates the suite described by `command`, answers each case with
/// `oracle` and hands the cases to `sink`. Returns the number of cases.
#[instrument(
    name = "cli.suite",
    err,
    skip(command, oracle, sink),
    fields(seed = command.seed, tiers = field::Empty),
)]
pub(super) fn run_suite(
    command: &SuiteCommand,
    oracle: &dyn Oracle,
    sink: &mut dyn CaseSink,
) -> Result<usize, CliError> {
    let tiers: &[Tier] = if command.tiers.is_empty() {
        &Tier::ALL
    } else {
        &command.tiers
    };
    Span::current().record("tiers", field::debug(tiers));

    let mut generator = CaseGenerator::new(command.seed, command.max_weight)?;
    let mut cases = Vec::new();
    for &tier in tiers {
        for shape in generator.shapes(tier) {
            let input = generator.generate(shape)?.render();
            let output = oracle
                .answer(&input)
                .map_err(|source| CliError::Oracle {
                    index: cases.len(),
                    source,
                })?;
            debug!(
                index = cases.len(),
                ?tier,
                nodes = shape.nodes,
                queries = shape.queries,
                "case generated"
            );
            cases.push(TestCase { input, output });
        }
    }
    sink.write_all(&cases)?;
    info!(cases = cases.len(), "suite completed");
    Ok(cases.len())
}

/// Renders `output` to `writer`.
///
/// Trees print `n` and then one `u v` line per labelled edge; suites print a
/// one-line summary.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use rakau_cli::cli::{CommandOutput, SuiteSummary, render_output};
///
/// let output = CommandOutput::Suite(SuiteSummary { path: "cases.json".into(), cases: 20 });
/// let mut buffer = Vec::new();
/// render_output(&output, &mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(&buffer), "wrote 20 cases to cases.json\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Tree(tree) => {
            writeln!(writer, "{}", tree.node_count())?;
            for edge in tree.labelled_edges() {
                writeln!(writer, "{edge}")?;
            }
        }
        CommandOutput::Suite(summary) => {
            writeln!(
                writer,
                "wrote {} cases to {}",
                summary.cases,
                summary.path.display()
            )?;
        }
    }
    Ok(())
}
