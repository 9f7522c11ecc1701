use super::{reconstruct, Cost, HeuristicElement, Path};
use hashbrown::HashMap;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Searches a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Generic type Parameter `Id` is supposed to uniquely identify a Node in the Graph.
/// This may be a Number, String, a Grid position, ... as long as it can be compared, hashed and copied.
/// Note that it is advised to choose a short representation for the Id, since it will be copied several times.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use puzzle_toolkit::search::a_star_search;
/// // A     B--2--E
/// // |\
/// // | \
/// // 1  9
/// // |   \
/// // |    \
/// // C--6--D
/// let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// let cost_matrix: [[i32; 5]; 5] = [
/// //    A,  B,  C,  D,  E
///     [-1, -1,  1,  9, -1], // A
///     [-1, -1, -1, -1,  2], // B
///     [ 1, -1, -1,  6, -1], // C
///     [ 9, -1,  6, -1, -1], // D
///     [-1,  2, -1, -1, -1], // E
/// ];
/// # fn euclid_distance(a: usize, b: usize) -> usize {
/// #     [[0, 1, 1, 2, 2], [1, 0, 2, 1, 1], [1, 2, 0, 1, 3], [2, 1, 1, 0, 2], [2, 1, 3, 2, 0]][a][b]
/// # }
///
/// let result = a_star_search(
///     |point: usize| { // get_all_neighbors
///         cost_matrix[point]
///             .iter()
///             .enumerate()
///             .filter(|&(_, cost)| *cost != -1)
///             .map(|(id, cost)| (id, *cost as usize))
///     },
///     A, // start
///     D, // goal
///     euclid_distance, // heuristic
/// );
///
/// assert!(result.is_some());
/// let path = result.unwrap();
///
/// assert_eq!(path.path, vec![A, C, D]);
/// assert_eq!(path.cost, 7);
/// ```
///
/// If the Goal cannot be reached, None is returned:
/// ```
/// # use puzzle_toolkit::search::a_star_search;
/// # let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// # let cost_matrix: [[i32; 5]; 5] = [
/// # //    A,  B,  C,  D,  E
/// #     [-1, -1,  1,  9, -1], // A
/// #     [-1, -1, -1, -1,  2], // B
/// #     [ 1, -1, -1,  6, -1], // C
/// #     [ 9, -1,  6, -1, -1], // D
/// #     [-1,  2, -1, -1, -1], // E
/// # ];
/// # fn euclid_distance(a: usize, b: usize) -> usize {
/// #     [[0, 1, 1, 2, 2], [1, 0, 2, 1, 1], [1, 2, 0, 1, 3], [2, 1, 1, 0, 2], [2, 1, 3, 2, 0]][a][b]
/// # }
/// #
/// # let result = a_star_search(
/// #    |point: usize| { // get_all_neighbors
/// #        cost_matrix[point]
/// #            .iter()
/// #            .enumerate()
/// #            .filter(|&(_, cost)| *cost != -1)
/// #            .map(|(id, cost)| (id, *cost as usize))
/// #    },
/// // ...
///     A, // start
///     E, // goal
///     euclid_distance, // heuristic
/// );
///
/// assert_eq!(result, None);
/// ```
///
/// ## Heuristic
/// `heuristic(node, goal)` estimates the Cost of the cheapest Path from `node` to `goal`. It must
/// never overestimate that Cost, otherwise the returned Path may not be the cheapest one. There is
/// no way to detect this. A heuristic that always returns 0 is always correct, and turns the search
/// into Dijkstra's Algorithm.
///
/// ## Arguments
/// - `get_all_neighbors` - a Function that takes a Node and returns all other Nodes reachable from that Node.
///     The returned value is a Tuple of the `Id` of the neighbor and the Cost to get there.
/// - `start` - the starting Node
/// - `goal` - the Goal that this function is supposed to search for
/// - `heuristic` - the Heuristic Function of the A* Algorithm
///
/// ## Returns
/// the Path, if one was found, or None if the `goal` is unreachable.
/// The first Node in the Path is always the `start` and the last is the `goal`.
/// If `start == goal`, the Path consists of only that Node and costs 0.
pub fn a_star_search<Id, I>(
	mut get_all_neighbors: impl FnMut(Id) -> I,
	start: Id,
	goal: Id,
	mut heuristic: impl FnMut(Id, Id) -> Cost,
) -> Option<Path<Id>>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = (Id, Cost)>,
{
	let mut g_scores = HashMap::new();
	let mut f_scores = HashMap::new();
	let mut came_from = HashMap::new();
	let mut next = BinaryHeap::new();

	let start_estimate = heuristic(start, goal);
	g_scores.insert(start, 0);
	f_scores.insert(start, start_estimate);
	next.push(HeuristicElement(start, 0, start_estimate));

	let mut expanded = 0usize;

	while let Some(HeuristicElement(current_id, current_cost, estimate)) = next.pop() {
		if current_id == goal {
			re_trace!(
				"a_star: expanded {} nodes, discovered {}",
				expanded,
				g_scores.len()
			);
			let steps = reconstruct(&came_from, start, goal);
			return Some(Path::new(steps, g_scores[&goal]));
		}
		if estimate > f_scores[&current_id] || current_cost > g_scores[&current_id] {
			continue;
		}
		expanded += 1;

		for (other_id, delta_cost) in get_all_neighbors(current_id) {
			let other_cost = current_cost.saturating_add(delta_cost);

			if g_scores.get(&other_id).map_or(true, |&prev| other_cost < prev) {
				let other_estimate = other_cost.saturating_add(heuristic(other_id, goal));
				came_from.insert(other_id, current_id);
				g_scores.insert(other_id, other_cost);
				f_scores.insert(other_id, other_estimate);
				next.push(HeuristicElement(other_id, other_cost, other_estimate));
			}
		}
	}

	re_debug!(
		"a_star: goal unreachable after expanding {} nodes",
		expanded
	);

	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::neighbors::{ManhattanNeighborhood, Neighborhood};
	use crate::Point;

	fn unit_steps(
		neighborhood: ManhattanNeighborhood,
		walls: &[Point],
	) -> impl '_ + FnMut(Point) -> Vec<(Point, Cost)> {
		move |p| {
			neighborhood
				.get_all_neighbors(p)
				.filter(|n| !walls.contains(n))
				.map(|n| (n, 1))
				.collect()
		}
	}

	#[test]
	fn corner_to_corner() {
		let neighborhood = ManhattanNeighborhood::new(3, 3);
		let start = Point::new(0, 0);
		let goal = Point::new(2, 2);

		let path = a_star_search(unit_steps(neighborhood, &[]), start, goal, |p, g| {
			neighborhood.heuristic(p, g)
		})
		.unwrap();

		assert_eq!(path.cost, 4);
		assert_eq!(path.step_count(), 4);
		assert_eq!(path[0], start);
		assert_eq!(path[4], goal);
		for pair in path.windows(2) {
			assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
		}
	}

	#[test]
	fn unreachable_goal() {
		// 0 = empty, 1 = wall
		let grid = [
			[0, 1, 0, 0, 0],
			[0, 1, 1, 1, 1],
			[0, 0, 0, 0, 0],
		];
		let walls: Vec<Point> = (0..3)
			.flat_map(|y| (0..5).map(move |x| Point::new(x, y)))
			.filter(|p| grid[p.y as usize][p.x as usize] == 1)
			.collect();
		let neighborhood = ManhattanNeighborhood::new(5, 3);

		let path = a_star_search(
			unit_steps(neighborhood, &walls),
			Point::new(0, 0),
			Point::new(2, 0),
			|p, g| neighborhood.heuristic(p, g),
		);

		assert!(path.is_none());
	}

	#[test]
	fn start_is_goal() {
		let path = a_star_search(|n: u8| [(n + 1, 1)], 3, 3, |_, _| 0).unwrap();
		assert_eq!(path.path, vec![3]);
		assert_eq!(path.cost, 0);
	}

	#[test]
	fn heavy_shortcut_is_avoided() {
		// 0 -> 3 costs 10, 0 -> 1 -> 2 -> 3 costs 3
		let path = a_star_search(
			|n: u8| match n {
				0 => vec![(3, 10), (1, 1)],
				1 => vec![(2, 1)],
				2 => vec![(3, 1)],
				_ => vec![],
			},
			0,
			3,
			|_, _| 0,
		)
		.unwrap();

		assert_eq!(path.path, vec![0, 1, 2, 3]);
		assert_eq!(path.cost, 3);
	}

	#[test]
	fn max_cost_edges_and_estimates_saturate() {
		let path = a_star_search(
			|n: u8| match n {
				0 => vec![(1, Cost::MAX), (2, 1)],
				2 => vec![(1, 1), (4, Cost::MAX)],
				_ => vec![],
			},
			0,
			1,
			|n, _| if n == 4 { Cost::MAX } else { 0 },
		)
		.unwrap();

		assert_eq!(path.path, vec![0, 2, 1]);
		assert_eq!(path.cost, 2);
	}
}
