use hashbrown::HashSet;
use std::hash::Hash;

/// Searches a Graph using [Depth-first search](https://en.wikipedia.org/wiki/Depth-first_search)
/// and returns the set of all Nodes reachable from `start`, including `start` itself.
///
/// The frontier is an explicit stack, so deep Graphs do not grow the call stack. A Node may be
/// pushed several times before it is first popped; it is marked as visited only when popped, and
/// later copies are skipped.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use puzzle_toolkit::search::dfs;
/// // 0 -> 1 -> 2 -> 0    3 -> 4
/// let edges: [&[usize]; 5] = [&[1], &[2], &[0], &[4], &[]];
///
/// let reached = dfs(0, |n| edges[n].iter().copied());
///
/// assert_eq!(reached.len(), 3);
/// assert!(reached.contains(&2));
/// assert!(!reached.contains(&3));
/// ```
///
/// ## Arguments
/// - `start` - the starting Node
/// - `get_all_neighbors` - a Function that takes a Node and returns all other Nodes reachable from that Node
pub fn dfs<Id, I>(start: Id, get_all_neighbors: impl FnMut(Id) -> I) -> HashSet<Id>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = Id>,
{
	dfs_until(start, get_all_neighbors, |_| false)
}

/// Same as [`dfs`], but stops as soon as a Node matching `is_goal` has been visited.
///
/// The returned set contains the goal and every Node visited before it.
///
/// ## Examples
/// ```
/// # use puzzle_toolkit::search::dfs_until;
/// let reached = dfs_until(0u32, |n| [n + 1], |n| n == 10);
///
/// assert_eq!(reached.len(), 11);
/// assert!(reached.contains(&10));
/// ```
pub fn dfs_until<Id, I>(
	start: Id,
	mut get_all_neighbors: impl FnMut(Id) -> I,
	mut is_goal: impl FnMut(Id) -> bool,
) -> HashSet<Id>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = Id>,
{
	let mut visited = HashSet::new();
	let mut next = vec![start];
	let mut peak = 1usize;

	while let Some(current_id) = next.pop() {
		if !visited.insert(current_id) {
			continue;
		}
		if is_goal(current_id) {
			break;
		}

		next.extend(
			get_all_neighbors(current_id)
				.into_iter()
				.filter(|other_id| !visited.contains(other_id)),
		);
		peak = peak.max(next.len());
	}

	re_trace!(
		"dfs: visited {} nodes, stack peaked at {}",
		visited.len(),
		peak
	);

	visited
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::neighbors::{MooreNeighborhood, Neighborhood};
	use crate::Point;

	#[test]
	fn reaches_whole_grid() {
		let neighborhood = MooreNeighborhood::new(6, 4);
		let reached = dfs(Point::new(5, 3), |p| neighborhood.get_all_neighbors(p));
		assert_eq!(reached.len(), 24);
	}

	#[test]
	fn deep_line_does_not_overflow() {
		let reached = dfs(0u32, |n| if n < 200_000 { Some(n + 1) } else { None });
		assert_eq!(reached.len(), 200_001);
	}

	#[test]
	fn self_loops_and_duplicates() {
		let reached = dfs('a', |n| match n {
			'a' => vec!['a', 'b', 'b', 'c'],
			'b' => vec!['a', 'c'],
			_ => vec![],
		});
		let mut reached: Vec<char> = reached.into_iter().collect();
		reached.sort_unstable();
		assert_eq!(reached, vec!['a', 'b', 'c']);
	}
}
