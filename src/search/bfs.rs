use hashbrown::HashMap;
use std::collections::VecDeque;
use std::hash::Hash;

/// Searches a Graph using [Breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
/// and returns the number of Edges from `start` to every reachable Node.
///
/// `start` maps to 0 and unreachable Nodes have no entry. Each Node is enqueued at most once, so
/// the search terminates on every finite Graph.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use puzzle_toolkit::search::bfs;
/// // A--B
/// // |  |
/// // D--C
/// let edges = [('A', 'B'), ('B', 'C'), ('A', 'D'), ('D', 'C')];
///
/// let distances = bfs('A', |node| {
///     edges.iter().filter_map(move |&(a, b)| {
///         if a == node {
///             Some(b)
///         } else if b == node {
///             Some(a)
///         } else {
///             None
///         }
///     })
/// });
///
/// assert_eq!(distances[&'A'], 0);
/// assert_eq!(distances[&'B'], 1);
/// assert_eq!(distances[&'D'], 1);
/// assert_eq!(distances[&'C'], 2);
/// ```
///
/// ## Arguments
/// - `start` - the starting Node
/// - `get_all_neighbors` - a Function that takes a Node and returns all other Nodes reachable from that Node
pub fn bfs<Id, I>(start: Id, get_all_neighbors: impl FnMut(Id) -> I) -> HashMap<Id, usize>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = Id>,
{
	bfs_until(start, get_all_neighbors, |_| false)
}

/// Same as [`bfs`], but stops as soon as a Node matching `is_goal` is expanded.
///
/// The returned distances are the ones discovered up to that point. They include the goal and
/// possibly some Nodes further away than the goal, and are exact for every Node they contain.
///
/// ## Examples
/// ```
/// # use puzzle_toolkit::search::bfs_until;
/// // an infinite line of integers
/// let distances = bfs_until(0i64, |n| [n - 1, n + 1], |n| n == 3);
///
/// assert_eq!(distances[&3], 3);
/// assert_eq!(distances[&-3], 3);
/// assert!(!distances.contains_key(&5));
/// ```
pub fn bfs_until<Id, I>(
	start: Id,
	mut get_all_neighbors: impl FnMut(Id) -> I,
	mut is_goal: impl FnMut(Id) -> bool,
) -> HashMap<Id, usize>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = Id>,
{
	let mut distances = HashMap::new();
	let mut next = VecDeque::new();
	distances.insert(start, 0);
	next.push_back(start);

	let mut expanded = 0usize;

	while let Some(current_id) = next.pop_front() {
		expanded += 1;
		if is_goal(current_id) {
			break;
		}
		let other_distance = distances[&current_id] + 1;

		for other_id in get_all_neighbors(current_id) {
			if !distances.contains_key(&other_id) {
				distances.insert(other_id, other_distance);
				next.push_back(other_id);
			}
		}
	}

	re_trace!(
		"bfs: expanded {} nodes, discovered {}",
		expanded,
		distances.len()
	);

	distances
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::neighbors::{ManhattanNeighborhood, Neighborhood};
	use crate::Point;

	#[test]
	fn single_node() {
		let distances = bfs(7u32, |_| Vec::new());
		assert_eq!(distances.len(), 1);
		assert_eq!(distances[&7], 0);
	}

	#[test]
	fn unreachable_nodes_are_absent() {
		// 0 -> 1 -> 2, 3 -> 0
		let edges: [&[u8]; 4] = [&[1], &[2], &[], &[0]];
		let distances = bfs(0u8, |n| edges[n as usize].iter().copied());

		assert_eq!(distances.len(), 3);
		assert_eq!(distances[&2], 2);
		assert!(!distances.contains_key(&3));
	}

	#[test]
	fn grid_distances_are_manhattan() {
		let neighborhood = ManhattanNeighborhood::new(4, 3);
		let distances = bfs(Point::new(0, 0), |p| neighborhood.get_all_neighbors(p));

		assert_eq!(distances.len(), 12);
		for (point, distance) in distances {
			assert_eq!(distance as i64, point.x + point.y);
		}
	}

	#[test]
	fn goal_at_start_stops_immediately() {
		let mut calls = 0;
		let distances = bfs_until(
			0,
			|n| {
				calls += 1;
				vec![n + 1]
			},
			|n| n == 0,
		);
		assert_eq!(calls, 0);
		assert_eq!(distances.len(), 1);
	}
}
