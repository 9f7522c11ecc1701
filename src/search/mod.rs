//! Generic searches over implicit Graphs.
//!
//! None of the functions in this Module ever see a Graph. Instead, every search takes a Function
//! that returns the neighbors of a Node, and calls it on demand. The Nodes themselves are
//! opaque `Id`s chosen by the caller: a Grid position, an index, a small state struct, ... as
//! long as it can be compared, hashed and copied.
//!
//! | Function | Edges | Result |
//! |----------|-------|--------|
//! | [`bfs`] / [`bfs_until`] | unweighted | hop count to every reached Node |
//! | [`dfs`] / [`dfs_until`] | unweighted | set of reached Nodes |
//! | [`dijkstra`] / [`dijkstra_until`] | weighted | cheapest cost to every reached Node |
//! | [`dijkstra_paths`] | weighted | cheapest [`Path`] to each of several goals |
//! | [`a_star_search`] | weighted | cheapest [`Path`] to one goal |
//!
//! The `_until` variants take a goal predicate. It is checked whenever a Node is expanded, and the
//! search stops as soon as it matches, returning what has been discovered so far.
//!
//! Weights are [`Cost`]s and therefore never negative. Sums of Costs saturate at `Cost::MAX`
//! instead of overflowing, so `Cost::MAX` can be used for Edges that should practically never
//! be taken. There is no cancellation: searching an infinite Graph without a goal never returns.

mod path;
pub use self::path::Path;

mod bfs;
pub use self::bfs::{bfs, bfs_until};

mod dfs;
pub use self::dfs::{dfs, dfs_until};

mod dijkstra;
pub use self::dijkstra::{dijkstra, dijkstra_paths, dijkstra_until};

mod a_star;
pub use self::a_star::a_star_search;

/// a Type to represent the Cost of traversing an Edge
pub type Cost = usize;

use std::cmp::Ordering;

/// Frontier entry for A*: `(id, cost from start, estimated total cost)`, ordered as a min-heap on
/// the estimate.
#[derive(PartialEq, Eq)]
pub(crate) struct HeuristicElement<Id>(pub Id, pub Cost, pub Cost);
impl<Id: Eq> PartialOrd for HeuristicElement<Id> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<Id: Eq> Ord for HeuristicElement<Id> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.2.cmp(&self.2).then_with(|| self.1.cmp(&rhs.1))
	}
}

/// Frontier entry for Dijkstra: `(id, cost from start)`, ordered as a min-heap on the cost.
#[derive(PartialEq, Eq)]
pub(crate) struct Element<Id>(pub Id, pub Cost);
impl<Id: Eq> PartialOrd for Element<Id> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<Id: Eq> Ord for Element<Id> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.1.cmp(&self.1)
	}
}

/// Walks the back-pointers from `goal` to `start` and returns the Nodes in walking order.
///
/// Every Node on the way except `start` must have an entry in `came_from`.
pub(crate) fn reconstruct<Id: Copy + Eq + std::hash::Hash>(
	came_from: &hashbrown::HashMap<Id, Id>,
	start: Id,
	goal: Id,
) -> Vec<Id> {
	let mut steps = vec![];
	let mut current = goal;

	while current != start {
		steps.push(current);
		current = came_from[&current];
	}
	steps.push(start);
	steps.reverse();
	steps
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BinaryHeap;

	#[test]
	fn element_heap_pops_cheapest_first() {
		let mut heap = BinaryHeap::new();
		heap.push(Element('a', 5));
		heap.push(Element('b', 1));
		heap.push(Element('c', 3));

		let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|e| e.0)).collect();
		assert_eq!(order, vec!['b', 'c', 'a']);
	}

	#[test]
	fn heuristic_heap_prefers_deeper_on_ties() {
		let mut heap = BinaryHeap::new();
		heap.push(HeuristicElement('a', 1, 4));
		heap.push(HeuristicElement('b', 3, 4));
		heap.push(HeuristicElement('c', 0, 6));

		let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|e| e.0)).collect();
		assert_eq!(order, vec!['b', 'a', 'c']);
	}

	#[test]
	fn reconstruct_follows_back_pointers() {
		let mut came_from = hashbrown::HashMap::new();
		came_from.insert(2, 1);
		came_from.insert(3, 2);
		came_from.insert(1, 0);

		assert_eq!(reconstruct(&came_from, 0, 3), vec![0, 1, 2, 3]);
		assert_eq!(reconstruct(&came_from, 0, 0), vec![0]);
	}
}
