//! Reference implementations the decoder is checked against.
//!
//! Deliberately naive: the quadratic decoder rescans every vertex for the
//! smallest leaf at each step, and the reachability check walks an explicit
//! adjacency list.

use std::collections::VecDeque;

use crate::TreeEdge;

/// Decodes a valid sequence by rescanning the degree table at every step.
pub(super) fn quadratic_decode(node_count: usize, sequence: &[usize]) -> Vec<(usize, usize)> {
    if node_count < 2 {
        return Vec::new();
    }
    let mut degree = vec![1_usize; node_count];
    for &symbol in sequence {
        degree[symbol] += 1;
    }

    let mut edges = Vec::with_capacity(node_count - 1);
    for &symbol in sequence {
        let leaf = (0..node_count)
            .find(|&vertex| degree[vertex] == 1)
            .expect("a valid sequence always leaves a leaf");
        edges.push((leaf, symbol));
        degree[leaf] -= 1;
        degree[symbol] -= 1;
    }

    let remaining: Vec<usize> = (0..node_count)
        .filter(|&vertex| degree[vertex] == 1)
        .collect();
    assert_eq!(remaining.len(), 2, "oracle must end with two leaves");
    edges.push((remaining[0], remaining[1]));
    edges
}

/// Counts the vertices reachable from vertex 0 by breadth-first search.
pub(super) fn reachable_from_zero(node_count: usize, edges: &[TreeEdge]) -> usize {
    if node_count == 0 {
        return 0;
    }
    let mut adjacency = vec![Vec::new(); node_count];
    for edge in edges {
        adjacency[edge.source()].push(edge.target());
        adjacency[edge.target()].push(edge.source());
    }

    let mut seen = vec![false; node_count];
    let mut queue = VecDeque::from([0]);
    seen[0] = true;
    let mut reached = 0;
    while let Some(vertex) = queue.pop_front() {
        reached += 1;
        for &next in &adjacency[vertex] {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    reached
}
