use super::{reconstruct, Cost, Element, Path};
use hashbrown::{HashMap, HashSet};
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Searches a Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// and returns the Cost of the cheapest Path from `start` to every reachable Node.
///
/// The frontier is a [`BinaryHeap`] without a decrease-key operation: whenever a cheaper way to a
/// Node is found, a new entry is pushed, and entries that have been superseded are skipped when
/// they are popped.
///
/// The Graph must not contain negative Edges, which [`Cost`] already guarantees.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use puzzle_toolkit::search::dijkstra;
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
///
/// let costs = dijkstra(A, |point: usize| {
///     cost_matrix[point]
///         .iter()
///         .enumerate()
///         .filter(|&(_, cost)| *cost != -1)
///         .map(|(id, cost)| (id, *cost as usize))
/// });
///
/// assert_eq!(costs[&A], 0);
/// assert_eq!(costs[&C], 1);
/// assert_eq!(costs[&D], 7);
///
/// // Nodes that cannot be reached have no entry
/// assert!(!costs.contains_key(&E));
/// ```
///
/// ## Arguments
/// - `start` - the starting Node
/// - `get_all_neighbors` - a Function that takes a Node and returns all other Nodes reachable from that Node.
///     The returned value is a Tuple of the `Id` of the neighbor and the Cost to get there.
pub fn dijkstra<Id, I>(start: Id, get_all_neighbors: impl FnMut(Id) -> I) -> HashMap<Id, Cost>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = (Id, Cost)>,
{
	dijkstra_until(start, get_all_neighbors, |_| false)
}

/// Same as [`dijkstra`], but stops as soon as a Node matching `is_goal` is expanded.
///
/// When the search stops, the Cost recorded for the goal is final. Other entries may still be
/// tentative.
///
/// ## Examples
/// ```
/// # use puzzle_toolkit::search::dijkstra_until;
/// // walking costs 3, jumping two steps costs 5
/// let costs = dijkstra_until(0u32, |n| [(n + 1, 3), (n + 2, 5)], |n| n == 5);
///
/// assert_eq!(costs[&5], 13);
/// ```
pub fn dijkstra_until<Id, I>(
	start: Id,
	get_all_neighbors: impl FnMut(Id) -> I,
	is_goal: impl FnMut(Id) -> bool,
) -> HashMap<Id, Cost>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = (Id, Cost)>,
{
	run(start, get_all_neighbors, is_goal)
		.into_iter()
		.map(|(id, (cost, _))| (id, cost))
		.collect()
}

/// Searches a Graph for the cheapest Paths from `start` to several `goals` at once.
///
/// It stops as soon as it has the cheapest Path to every Goal, or when all reachable Nodes have
/// been expanded.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use puzzle_toolkit::search::dijkstra_paths;
/// # let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// # let cost_matrix: [[i32; 5]; 5] = [
/// # //    A,  B,  C,  D,  E
/// #     [-1, -1,  1,  9, -1], // A
/// #     [-1, -1, -1, -1,  2], // B
/// #     [ 1, -1, -1,  6, -1], // C
/// #     [ 9, -1,  6, -1, -1], // D
/// #     [-1,  2, -1, -1, -1], // E
/// # ];
/// let result = dijkstra_paths(
///     |point: usize| {
///         cost_matrix[point]
///             .iter()
///             .enumerate()
///             .filter(|&(_, cost)| *cost != -1)
///             .map(|(id, cost)| (id, *cost as usize))
///     },
///     A, // start
///     &[D, E], // goals
/// );
///
/// // if the Goal is reachable, the Path is added to the Map
/// assert!(result.contains_key(&D));
/// let path = &result[&D];
/// assert_eq!(path.path, vec![A, C, D]);
/// assert_eq!(path.cost, 7);
///
/// // if the Goal is not reachable, there won't be an entry in the Map
/// assert!(!result.contains_key(&E));
/// ```
///
/// ## Returns
/// a HashMap with all reachable Goal's Ids as the Key and the cheapest Path to reach that Goal as Value.
/// The first Node in the Path is always the `start` and the last is the corresponding Goal
pub fn dijkstra_paths<Id, I>(
	get_all_neighbors: impl FnMut(Id) -> I,
	start: Id,
	goals: &[Id],
) -> HashMap<Id, Path<Id>>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = (Id, Cost)>,
{
	let mut remaining_goals: HashSet<Id> = goals.iter().copied().collect();
	if remaining_goals.is_empty() {
		return HashMap::new();
	}
	let mut found_goals = Vec::with_capacity(remaining_goals.len());

	let visited = run(start, get_all_neighbors, |id| {
		if remaining_goals.remove(&id) {
			found_goals.push(id);
		}
		remaining_goals.is_empty()
	});

	let came_from: HashMap<Id, Id> = visited
		.iter()
		.filter(|&(&id, _)| id != start)
		.map(|(&id, &(_, prev))| (id, prev))
		.collect();

	found_goals
		.into_iter()
		.map(|goal| {
			let steps = reconstruct(&came_from, start, goal);
			(goal, Path::new(steps, visited[&goal].0))
		})
		.collect()
}

/// The shared search loop. Returns, for every discovered Node, its best known Cost and its
/// predecessor on the best known Path (`start` is its own predecessor).
fn run<Id, I>(
	start: Id,
	mut get_all_neighbors: impl FnMut(Id) -> I,
	mut stop: impl FnMut(Id) -> bool,
) -> HashMap<Id, (Cost, Id)>
where
	Id: Copy + Eq + Hash,
	I: IntoIterator<Item = (Id, Cost)>,
{
	let mut visited = HashMap::new();
	let mut next = BinaryHeap::new();
	next.push(Element(start, 0));
	visited.insert(start, (0, start));

	let mut expanded = 0usize;
	let mut stale = 0usize;

	while let Some(Element(current_id, current_cost)) = next.pop() {
		if current_cost > visited[&current_id].0 {
			stale += 1;
			continue;
		}
		expanded += 1;

		if stop(current_id) {
			break;
		}

		for (other_id, delta_cost) in get_all_neighbors(current_id) {
			let other_cost = current_cost.saturating_add(delta_cost);

			let mut needs_visit = true;
			if let Some((prev_cost, prev_id)) = visited.get_mut(&other_id) {
				if *prev_cost > other_cost {
					*prev_cost = other_cost;
					*prev_id = current_id;
				} else {
					needs_visit = false;
				}
			} else {
				visited.insert(other_id, (other_cost, current_id));
			}

			if needs_visit {
				next.push(Element(other_id, other_cost));
			}
		}
	}

	re_trace!(
		"dijkstra: expanded {} nodes, skipped {} stale entries, discovered {}",
		expanded,
		stale,
		visited.len()
	);

	visited
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cheaper_detour_wins() {
		// 0 -> 2 costs 10, 0 -> 1 -> 2 costs 3
		let costs = dijkstra(0u8, |n| match n {
			0 => vec![(2, 10), (1, 1)],
			1 => vec![(2, 2)],
			_ => vec![],
		});
		assert_eq!(costs[&2], 3);
		assert_eq!(costs[&1], 1);
	}

	#[test]
	fn zero_cost_edges() {
		let costs = dijkstra('a', |n| match n {
			'a' => vec![('b', 0)],
			'b' => vec![('c', 0), ('a', 0)],
			'c' => vec![('d', 4)],
			_ => vec![],
		});
		assert_eq!(costs[&'c'], 0);
		assert_eq!(costs[&'d'], 4);
	}

	#[test]
	fn paths_to_several_goals() {
		// a line 0 - 1 - 2 - 3 - 4 with unit costs
		let result = dijkstra_paths(
			|n: i32| [(n - 1, 1), (n + 1, 1)].into_iter().filter(|&(m, _)| (0..5).contains(&m)),
			2,
			&[0, 4, 9],
		);

		assert_eq!(result.len(), 2);
		assert_eq!(result[&0].path, vec![2, 1, 0]);
		assert_eq!(result[&4].path, vec![2, 3, 4]);
		assert_eq!(result[&4].cost, 2);
	}

	#[test]
	fn start_as_goal() {
		let result = dijkstra_paths(|n: u32| [(n + 1, 1)], 5, &[5]);
		assert_eq!(result[&5].path, vec![5]);
		assert_eq!(result[&5].cost, 0);
	}

	#[test]
	fn max_cost_edges_saturate() {
		// 0 -> 1 is impassable in practice, 0 -> 2 -> 1 is cheap, 1 -> 3 is impassable again
		let costs = dijkstra(0u8, |n| match n {
			0 => vec![(1, Cost::MAX), (2, 1)],
			2 => vec![(1, 1)],
			1 => vec![(3, Cost::MAX)],
			_ => vec![],
		});
		assert_eq!(costs[&1], 2);
		assert_eq!(costs[&3], Cost::MAX);
	}
}
