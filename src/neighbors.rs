//! A Module with the most common Neighborhoods on a bounded Grid

use crate::{search::Cost, Point};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Puzzles have different constraints as to how a Path may be formed.
/// For example if movement is only allowed along the 4 cardinal directions, any Paths generated
/// should reflect that by only containing those steps.
///
/// This Trait is a generalized solution to that problem. It provides a function to query all
/// neighboring Points of an existing Point and a Heuristic for how long it might take to reach
/// a goal from a Point. Both plug directly into the functions of [`search`](crate::search):
/// ```
/// # use puzzle_toolkit::prelude::*;
/// let neighborhood = MooreNeighborhood::new(10, 10);
/// let (start, goal) = (Point::new(0, 0), Point::new(9, 4));
///
/// let path = a_star_search(
///     |p| neighborhood.get_all_neighbors(p).map(|n| (n, 1)),
///     start,
///     goal,
///     |p, g| neighborhood.heuristic(p, g),
/// );
/// assert_eq!(path.unwrap().cost, 9);
/// ```
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for moving up, down, left or right
/// - [`MooreNeighborhood`] for moving up, down, left, right, as well as the 4 diagonals (up-right, ...)
pub trait Neighborhood: Clone + Debug {
	/// Provides a list of Neighbors of a Point
	///
	/// Note that it is not necessary to check weather the Tile at a Point is solid or not.
	/// That is left to the caller.
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>>;
	/// Gives a Heuristic for how long it takes to reach `goal` from `point`.
	///
	/// This is usually the Distance between the two Points in the Metric of your Neighborhood.
	///
	/// If there is no proper way of calculation how long it takes, simply return 0. This will
	/// increase the time it takes to calculate the Path, but at least it will always be correct.
	fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

const ORTHOGONAL: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const ALL_AROUND: [(i64, i64); 8] = [
	(0, -1),
	(1, -1),
	(1, 0),
	(1, 1),
	(0, 1),
	(-1, 1),
	(-1, 0),
	(-1, -1),
];

fn bounded(
	offsets: &'static [(i64, i64)],
	point: Point,
	width: usize,
	height: usize,
) -> Box<dyn Iterator<Item = Point>> {
	let (width, height) = (width as i64, height as i64);

	let iter = offsets
		.iter()
		.map(move |&(dx, dy)| Point::new(point.x + dx, point.y + dy))
		.filter(move |p| p.x >= 0 && p.y >= 0 && p.x < width && p.y < height);

	Box::new(iter)
}

/// A Neighborhood for moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
		bounded(&ORTHOGONAL, point, self.width, self.height)
	}
	fn heuristic(&self, point: Point, goal: Point) -> Cost {
		point.manhattan_distance(goal) as Cost
	}
}

/// A Neighborhood for moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood),
/// [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance) or Chebyshev Metric.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
	width: usize,
	height: usize,
}

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, height }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
		bounded(&ALL_AROUND, point, self.width, self.height)
	}
	fn heuristic(&self, point: Point, goal: Point) -> Cost {
		point.chebyshev_distance(goal) as Cost
	}
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood
			.get_all_neighbors(Point::new(0, 2))
			.collect::<Vec<_>>(),
		vec![Point::new(0, 1), Point::new(1, 2), Point::new(0, 3)],
	);
}

#[test]
fn test_manhattan_heuristic() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.heuristic(Point::new(3, 1), Point::new(0, 0)),
		3 + 1
	);
}

#[test]
fn test_moore_get_all_neighbors() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood
			.get_all_neighbors(Point::new(0, 2))
			.collect::<Vec<_>>(),
		vec![
			Point::new(0, 1),
			Point::new(1, 1),
			Point::new(1, 2),
			Point::new(1, 3),
			Point::new(0, 3)
		],
	);
}

#[test]
fn test_moore_heuristic() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	assert_eq!(neighborhood.heuristic(Point::new(3, 1), Point::new(0, 0)), 3);
}

#[test]
fn test_neighbors_outside_grid() {
	let neighborhood = ManhattanNeighborhood::new(2, 2);
	assert_eq!(neighborhood.get_all_neighbors(Point::new(-5, 7)).count(), 0);
}
