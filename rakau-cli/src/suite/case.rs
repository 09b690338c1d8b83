//! Random tree-query case generation.

use std::fmt::{self, Write as _};

use clap::ValueEnum;
use rakau_core::{ONE_BASED, TreeEdge, TreeError, TreeGeneratorBuilder};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

const SMALL_CASES: usize = 15;
const MEDIUM_CASES: usize = 4;
const MASSIVE_NODES: usize = 10_000;

/// Errors raised while generating cases.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// Weights are drawn from `[1, max_weight]`, which must not be empty.
    #[error("max weight must be at least 1")]
    InvalidMaxWeight,
    /// Tree generation failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Size groups of a suite, listed smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Tier {
    /// 15 cases with 2 to 10 nodes and 1 to 20 queries.
    Small,
    /// 4 cases with 100 to 300 nodes and 100 to 500 queries.
    Medium,
    /// 1 case with 10,000 nodes and 10,000 queries.
    Massive,
}

impl Tier {
    /// Every tier in suite order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Massive];

    fn shapes<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<CaseShape> {
        match self {
            Self::Small => (0..SMALL_CASES)
                .map(|_| CaseShape::new(rng.gen_range(2..=10), rng.gen_range(1..=20)))
                .collect(),
            Self::Medium => (0..MEDIUM_CASES)
                .map(|_| CaseShape::new(rng.gen_range(100..=300), rng.gen_range(100..=500)))
                .collect(),
            Self::Massive => vec![CaseShape::new(MASSIVE_NODES, MASSIVE_NODES)],
        }
    }
}

/// Node and query counts of one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseShape {
    /// Number of tree vertices.
    pub nodes: usize,
    /// Number of path queries.
    pub queries: usize,
}

impl CaseShape {
    /// Creates a shape.
    #[must_use]
    pub const fn new(nodes: usize, queries: usize) -> Self {
        Self { nodes, queries }
    }
}

/// A query `u v w` over two distinct 1-based vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint, never equal to `u`.
    pub v: usize,
    /// Weight in `[1, max_weight]`.
    pub w: u64,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.u, self.v, self.w)
    }
}

/// A random tree with 1-based labels and a batch of queries over it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeQueryCase {
    nodes: usize,
    edges: Vec<TreeEdge>,
    queries: Vec<Query>,
}

impl TreeQueryCase {
    /// Returns the number of vertices.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the tree edges with 1-based labels.
    #[must_use]
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// Returns the queries.
    #[must_use]
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Renders the problem input: `n`, one `u v` line per edge, `q`, then one
    /// `u v w` line per query, joined by newlines without a trailing one.
    ///
    /// # Examples
    /// ```
    /// use rakau_cli::suite::{CaseGenerator, CaseShape};
    ///
    /// let mut generator = CaseGenerator::new(7, 100)?;
    /// let case = generator.generate(CaseShape::new(3, 1))?;
    /// let rendered = case.render();
    /// let lines: Vec<&str> = rendered.lines().collect();
    /// assert_eq!(lines.len(), 1 + 2 + 1 + 1);
    /// assert_eq!(lines[0], "3");
    /// assert_eq!(lines[3], "1");
    /// # Ok::<(), rakau_cli::suite::CaseError>(())
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = self.nodes.to_string();
        for edge in &self.edges {
            let _ = write!(text, "\n{edge}");
        }
        let _ = write!(text, "\n{}", self.queries.len());
        for query in &self.queries {
            let _ = write!(text, "\n{query}");
        }
        text
    }
}

/// Draws reproducible tree-query cases from a single seeded stream.
#[derive(Debug)]
pub struct CaseGenerator {
    rng: SmallRng,
    max_weight: u64,
}

impl CaseGenerator {
    /// Creates a generator whose whole output is fixed by `seed`.
    ///
    /// # Errors
    /// Returns [`CaseError::InvalidMaxWeight`] when `max_weight` is zero.
    pub fn new(seed: u64, max_weight: u64) -> Result<Self, CaseError> {
        if max_weight == 0 {
            return Err(CaseError::InvalidMaxWeight);
        }
        Ok(Self {
            rng: SmallRng::seed_from_u64(seed),
            max_weight,
        })
    }

    /// Draws the case shapes of `tier`.
    pub fn shapes(&mut self, tier: Tier) -> Vec<CaseShape> {
        tier.shapes(&mut self.rng)
    }

    /// Generates one case of the given shape.
    ///
    /// Trees with fewer than two vertices get no queries, since a query needs
    /// two distinct endpoints.
    ///
    /// # Errors
    /// Returns [`CaseError::Tree`] when the tree cannot be generated.
    pub fn generate(&mut self, shape: CaseShape) -> Result<TreeQueryCase, CaseError> {
        let tree = TreeGeneratorBuilder::new()
            .with_node_count(shape.nodes)
            .with_label_offset(ONE_BASED)
            .build()?
            .generate_with_rng(&mut self.rng)?;
        let query_count = if shape.nodes < 2 { 0 } else { shape.queries };
        let queries = (0..query_count)
            .map(|_| self.query(shape.nodes))
            .collect();
        Ok(TreeQueryCase {
            nodes: shape.nodes,
            edges: tree.into_labelled_edges(),
            queries,
        })
    }

    fn query(&mut self, nodes: usize) -> Query {
        let u = self.rng.gen_range(1..=nodes);
        let mut v = self.rng.gen_range(1..=nodes);
        while v == u {
            v = self.rng.gen_range(1..=nodes);
        }
        let w = self.rng.gen_range(1..=self.max_weight);
        Query { u, v, w }
    }
}
