//! Unit tests for CLI command execution and rendering.

use std::{
    cell::{Cell, RefCell},
    path::PathBuf,
};

use clap::Parser;
use rakau_core::{TreeEdge, TreeError, TreeErrorCode, validate_tree};
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

use rakau_test_support::tracing::RecordingLayer;

use super::commands::{run_suite, run_tree};
use super::*;
use crate::suite::{CaseSink, EmptyOracle, Oracle, OracleError, SinkError, TestCase, Tier};

fn tree_command(nodes: i64, seed: Option<u64>, offset: usize) -> TreeCommand {
    TreeCommand {
        nodes,
        seed,
        offset,
    }
}

fn suite_command(tiers: Vec<Tier>) -> SuiteCommand {
    SuiteCommand {
        output: PathBuf::from("unused.json"),
        seed: 2025,
        max_weight: 100,
        oracle: None,
        timeout_ms: 1_000,
        tiers,
    }
}

#[derive(Default)]
struct MemorySink {
    cases: Vec<TestCase>,
}

impl CaseSink for MemorySink {
    fn write_all(&mut self, cases: &[TestCase]) -> Result<(), SinkError> {
        self.cases = cases.to_vec();
        Ok(())
    }
}

/// Answers with the number of input lines and counts its calls.
#[derive(Default)]
struct LineCountOracle {
    calls: Cell<usize>,
}

impl Oracle for LineCountOracle {
    fn answer(&self, input: &str) -> Result<String, OracleError> {
        self.calls.set(self.calls.get() + 1);
        Ok(input.lines().count().to_string())
    }
}

/// Fails on the n-th call.
struct FailingOracle {
    fail_at: usize,
    calls: RefCell<usize>,
}

impl Oracle for FailingOracle {
    fn answer(&self, _input: &str) -> Result<String, OracleError> {
        let mut calls = self.calls.borrow_mut();
        *calls += 1;
        if *calls > self.fail_at {
            return Err(OracleError::InvalidOutput {
                program: PathBuf::from("solver"),
            });
        }
        Ok(String::new())
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(50)]
fn tree_command_prints_count_then_edges(#[case] nodes: i64) {
    let output = run_cli(Cli {
        command: Command::Tree(tree_command(nodes, Some(9), 1)),
    })
    .expect("tree generation succeeds");
    let mut buffer = Vec::new();
    render_output(&output, &mut buffer).expect("render succeeds");
    let text = String::from_utf8(buffer).expect("output is UTF-8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(nodes.to_string().as_str()));

    let n = usize::try_from(nodes).expect("non-negative");
    let edges: Vec<TreeEdge> = lines
        .map(|line| {
            let (u, v) = line.split_once(' ').expect("edge line has two labels");
            let u: usize = u.parse().expect("label is numeric");
            let v: usize = v.parse().expect("label is numeric");
            assert!((1..=n).contains(&u) && (1..=n).contains(&v));
            TreeEdge::new(u - 1, v - 1)
        })
        .collect();
    validate_tree(n, &edges).expect("printed edges form a tree");
}

#[test]
fn tree_command_rejects_negative_counts() {
    let err = run_tree(&tree_command(-4, None, 1)).expect_err("negative count");
    assert!(matches!(
        err,
        CliError::Core(TreeError::NegativeNodeCount { got: -4 })
    ));
    assert_eq!(err.core_code(), Some(TreeErrorCode::NegativeNodeCount));
}

#[test]
fn tree_command_rejects_overflowing_offsets() {
    let err = run_tree(&tree_command(3, None, usize::MAX)).expect_err("labels overflow");
    assert!(matches!(err, CliError::Core(TreeError::LabelOverflow { .. })));
}

#[test]
fn seeded_tree_commands_repeat() {
    let first = run_tree(&tree_command(100, Some(5), 0)).expect("generation succeeds");
    let second = run_tree(&tree_command(100, Some(5), 0)).expect("generation succeeds");
    assert_eq!(first, second);
    assert_eq!(first.labelled_edges(), first.edges());
}

#[test]
fn suite_answers_every_case_in_tier_order() {
    let oracle = LineCountOracle::default();
    let mut sink = MemorySink::default();
    let count = run_suite(
        &suite_command(vec![Tier::Small, Tier::Medium]),
        &oracle,
        &mut sink,
    )
    .expect("suite succeeds");

    assert_eq!(count, 19);
    assert_eq!(oracle.calls.get(), 19);
    assert_eq!(sink.cases.len(), 19);
    for case in &sink.cases {
        assert_eq!(case.output, case.input.lines().count().to_string());
    }
    let nodes: Vec<usize> = sink
        .cases
        .iter()
        .map(|case| {
            case.input
                .lines()
                .next()
                .and_then(|line| line.parse().ok())
                .expect("first line is the node count")
        })
        .collect();
    let (small, medium) = nodes.split_at(15);
    assert!(small.iter().all(|n| (2..=10).contains(n)));
    assert!(medium.iter().all(|n| (100..=300).contains(n)));
}

#[test]
fn empty_tier_list_means_every_tier() {
    let mut sink = MemorySink::default();
    let count = run_suite(&suite_command(Vec::new()), &EmptyOracle, &mut sink)
        .expect("suite succeeds");
    assert_eq!(count, 20);
    let massive = sink.cases.last().expect("suite is not empty");
    assert!(massive.input.starts_with("10000\n"));
    assert_eq!(massive.input.lines().count(), 1 + 9_999 + 1 + 10_000);
    assert!(sink.cases.iter().all(|case| case.output.is_empty()));
}

#[test]
fn suites_are_reproducible_from_their_seed() {
    let mut first = MemorySink::default();
    let mut second = MemorySink::default();
    let command = suite_command(vec![Tier::Small]);
    run_suite(&command, &EmptyOracle, &mut first).expect("suite succeeds");
    run_suite(&command, &EmptyOracle, &mut second).expect("suite succeeds");
    assert_eq!(first.cases, second.cases);
}

#[test]
fn oracle_failures_name_the_case() {
    let oracle = FailingOracle {
        fail_at: 3,
        calls: RefCell::new(0),
    };
    let mut sink = MemorySink::default();
    let err = run_suite(&suite_command(vec![Tier::Small]), &oracle, &mut sink)
        .expect_err("oracle fails on the fourth case");
    assert!(matches!(err, CliError::Oracle { index: 3, .. }));
    assert!(sink.cases.is_empty(), "nothing is written after a failure");
}

#[test]
fn zero_max_weight_is_rejected_before_generation() {
    let mut command = suite_command(vec![Tier::Small]);
    command.max_weight = 0;
    let err = run_suite(&command, &EmptyOracle, &mut MemorySink::default())
        .expect_err("max weight must be positive");
    assert!(matches!(err, CliError::Case(_)));
    assert_eq!(err.core_code(), None);
}

#[test]
fn suite_command_writes_json_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out/cases.json");
    let mut command = suite_command(vec![Tier::Small]);
    command.output = path.clone();
    let output = run_cli(Cli {
        command: Command::Suite(command),
    })
    .expect("suite succeeds");
    let CommandOutput::Suite(summary) = output else {
        panic!("expected a suite summary");
    };
    assert_eq!(summary, SuiteSummary { path: path.clone(), cases: 15 });
    let parsed: Vec<TestCase> =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("file exists"))
            .expect("valid JSON");
    assert_eq!(parsed.len(), 15);
}

#[test]
fn commands_are_instrumented() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let result = tracing::subscriber::with_default(subscriber, || {
        run_cli(Cli {
            command: Command::Tree(tree_command(-1, None, 1)),
        })
    });
    assert!(result.is_err());
    let run = layer.span_named("cli.run").expect("cli.run span must exist");
    assert_eq!(run.fields.get("command"), Some(&"tree".to_owned()));
    let tree = layer.span_named("cli.tree").expect("cli.tree span must exist");
    assert_eq!(tree.fields.get("nodes"), Some(&"-1".to_owned()));
    assert!(layer.has_event_at(tracing::Level::ERROR));
}

#[rstest]
#[case::tree(&["rakau", "tree", "--nodes", "-3"])]
#[case::suite_with_tiers(&["rakau", "suite", "--output", "x.json", "--tier", "small", "--tier", "massive"])]
fn clap_accepts_documented_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_ok());
}

#[rstest]
#[case::missing_nodes(&["rakau", "tree"])]
#[case::unknown_tier(&["rakau", "suite", "--output", "x.json", "--tier", "huge"])]
#[case::missing_output(&["rakau", "suite"])]
fn clap_rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn clap_applies_defaults() {
    let cli = Cli::try_parse_from(["rakau", "suite", "--output", "x.json"]).expect("valid");
    let Command::Suite(command) = cli.command else {
        panic!("expected the suite command");
    };
    assert_eq!(command.seed, 2025);
    assert_eq!(command.max_weight, 10_000);
    assert!(command.tiers.is_empty());
    assert!(command.oracle.is_none());

    let cli = Cli::try_parse_from(["rakau", "tree", "--nodes", "4"]).expect("valid");
    let Command::Tree(command) = cli.command else {
        panic!("expected the tree command");
    };
    assert_eq!(command.offset, 1);
    assert_eq!(command.seed, None);
}
