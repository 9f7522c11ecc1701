//! 2D Points, Directions and a bounded Grid of cells.
//!
//! Coordinates follow text layout: `x` grows to the right along a line, `y` grows downwards from
//! line to line. [`Direction::North`] therefore points to `y - 1`.

use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, Sub};
use std::str::FromStr;

/// A Point in 2D integer space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
	/// the column
	pub x: i64,
	/// the row
	pub y: i64,
}

impl Point {
	/// Creates a new Point
	pub const fn new(x: i64, y: i64) -> Point {
		Point { x, y }
	}

	/// Distance when moving only along the axes.
	/// ```
	/// # use puzzle_toolkit::Point;
	/// assert_eq!(Point::new(1, 5).manhattan_distance(Point::new(4, 1)), 3 + 4);
	/// ```
	pub fn manhattan_distance(self, other: Point) -> i64 {
		(self.x - other.x).abs() + (self.y - other.y).abs()
	}

	/// Distance when diagonal steps are allowed and cost the same as straight ones.
	pub fn chebyshev_distance(self, other: Point) -> i64 {
		(self.x - other.x).abs().max((self.y - other.y).abs())
	}

	/// The 4 adjacent Points (`+x`, `-x`, `+y`, `-y`), followed by the 4 diagonals if `diagonal`
	/// is set. No bounds are applied, see [`Grid::neighbors`] for that.
	pub fn neighbors(self, diagonal: bool) -> Vec<Point> {
		let (x, y) = (self.x, self.y);
		let mut points = vec![
			Point::new(x + 1, y),
			Point::new(x - 1, y),
			Point::new(x, y + 1),
			Point::new(x, y - 1),
		];
		if diagonal {
			points.extend([
				Point::new(x + 1, y + 1),
				Point::new(x + 1, y - 1),
				Point::new(x - 1, y + 1),
				Point::new(x - 1, y - 1),
			]);
		}
		points
	}

	/// The neighbor one step in `dir`.
	pub fn step(self, dir: Direction) -> Point {
		self + dir.offset()
	}
}

impl Add for Point {
	type Output = Point;
	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for Point {
	fn add_assign(&mut self, rhs: Point) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for Point {
	type Output = Point;
	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<i64> for Point {
	type Output = Point;
	fn mul(self, scalar: i64) -> Point {
		Point::new(self.x * scalar, self.y * scalar)
	}
}

impl From<(i64, i64)> for Point {
	fn from((x, y): (i64, i64)) -> Point {
		Point::new(x, y)
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// The 4 cardinal Directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	/// `y - 1`
	North = 0,
	/// `x + 1`
	East = 1,
	/// `y + 1`
	South = 2,
	/// `x - 1`
	West = 3,
}
use self::Direction::*;

const UNIT_CIRCLE: [Point; 4] = [
	Point::new(0, -1),
	Point::new(1, 0),
	Point::new(0, 1),
	Point::new(-1, 0),
];

impl Direction {
	/// All Directions, clockwise starting at North
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Direction>> {
		[North, East, South, West].iter().copied()
	}
	/// The unit step in this Direction
	pub fn offset(self) -> Point {
		UNIT_CIRCLE[self.num()]
	}
	/// Turn 90 degrees clockwise
	pub fn turn_right(self) -> Direction {
		Direction::from_num(self.num() + 1)
	}
	/// Turn 90 degrees counter-clockwise
	pub fn turn_left(self) -> Direction {
		Direction::from_num(self.num() + 3)
	}
	/// The opposite Direction
	pub fn reverse(self) -> Direction {
		Direction::from_num(self.num() + 2)
	}
	/// `true` for North and South
	pub fn is_vertical(self) -> bool {
		self == North || self == South
	}
	fn num(self) -> usize {
		self as usize
	}
	fn from_num(num: usize) -> Direction {
		[North, East, South, West][num % 4]
	}
}

/// A rectangular Grid of cells, stored row by row.
///
/// The size is taken from the number of rows and the length of the first row.
///
/// ## Examples
/// ```
/// # use puzzle_toolkit::{Grid, Point};
/// let mut grid: Grid<char> = "S.#\n..E".parse().unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (3, 2));
/// assert_eq!(grid.find(&'E'), Some(Point::new(2, 1)));
/// assert_eq!(grid.get(Point::new(2, 0)), Some(&'#'));
/// assert_eq!(grid.get(Point::new(3, 0)), None);
///
/// assert!(grid.set(Point::new(1, 0), '#'));
/// assert_eq!(grid.to_string(), "S##\n..E");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
	data: Vec<Vec<T>>,
	width: usize,
	height: usize,
}

impl<T> Grid<T> {
	/// Creates a new Grid from its rows.
	pub fn new(data: Vec<Vec<T>>) -> Grid<T> {
		let height = data.len();
		let width = data.first().map_or(0, Vec::len);
		Grid {
			data,
			width,
			height,
		}
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}

	/// The rows of the Grid
	pub fn rows(&self) -> &[Vec<T>] {
		&self.data
	}

	/// `true` if `point` lies within `width` x `height`
	pub fn in_bounds(&self, point: Point) -> bool {
		point.x >= 0
			&& point.y >= 0
			&& (point.x as usize) < self.width
			&& (point.y as usize) < self.height
	}

	/// The cell at `point`, or None if it is out of bounds.
	pub fn get(&self, point: Point) -> Option<&T> {
		if !self.in_bounds(point) {
			return None;
		}
		self.data[point.y as usize].get(point.x as usize)
	}

	/// A mutable reference to the cell at `point`, or None if it is out of bounds.
	pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
		if !self.in_bounds(point) {
			return None;
		}
		self.data[point.y as usize].get_mut(point.x as usize)
	}

	/// Replaces the cell at `point`. Points outside the Grid are ignored and return `false`.
	pub fn set(&mut self, point: Point, value: T) -> bool {
		match self.get_mut(point) {
			Some(cell) => {
				*cell = value;
				true
			}
			None => false,
		}
	}

	/// All Points of the Grid, row by row.
	pub fn points(&self) -> impl Iterator<Item = Point> {
		let (width, height) = (self.width as i64, self.height as i64);
		(0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
	}

	/// All cells together with their Point, row by row.
	pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
		self.data.iter().enumerate().flat_map(|(y, row)| {
			row.iter()
				.enumerate()
				.map(move |(x, cell)| (Point::new(x as i64, y as i64), cell))
		})
	}

	/// The in-bounds neighbors of `point`: 4-way, or 8-way if `diagonal` is set.
	///
	/// The order is the one of [`Point::neighbors`], with the Points outside the Grid removed.
	pub fn neighbors(&self, point: Point, diagonal: bool) -> Box<dyn Iterator<Item = Point>> {
		let (width, height) = (self.width as i64, self.height as i64);
		let iter = point
			.neighbors(diagonal)
			.into_iter()
			.filter(move |p| p.x >= 0 && p.y >= 0 && p.x < width && p.y < height);
		Box::new(iter)
	}

	/// Transforms every cell, keeping the layout.
	pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
		Grid::new(
			self.data
				.iter()
				.map(|row| row.iter().map(&mut f).collect())
				.collect(),
		)
	}
}

impl<T: PartialEq> Grid<T> {
	/// The first Point holding `value`, row by row.
	pub fn find(&self, value: &T) -> Option<Point> {
		self.iter()
			.find(|&(_, cell)| cell == value)
			.map(|(point, _)| point)
	}

	/// All Points holding `value`, row by row.
	pub fn find_all(&self, value: &T) -> Vec<Point> {
		self.iter()
			.filter(|&(_, cell)| cell == value)
			.map(|(point, _)| point)
			.collect()
	}
}

impl<T> Index<Point> for Grid<T> {
	type Output = T;
	#[track_caller]
	fn index(&self, point: Point) -> &T {
		match self.get(point) {
			Some(cell) => cell,
			None => panic!(
				"{} is outside of the {}x{} Grid",
				point, self.width, self.height
			),
		}
	}
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (y, row) in self.data.iter().enumerate() {
			if y > 0 {
				writeln!(f)?;
			}
			for cell in row {
				write!(f, "{}", cell)?;
			}
		}
		Ok(())
	}
}

impl FromStr for Grid<char> {
	type Err = std::convert::Infallible;

	/// One row per non-blank line. Surrounding whitespace of each line is removed.
	fn from_str(text: &str) -> Result<Grid<char>, Self::Err> {
		Ok(Grid::new(
			text.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty())
				.map(|line| line.chars().collect())
				.collect(),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn point_arithmetic() {
		let a = Point::new(2, -3);
		let b = Point::new(-1, 4);
		assert_eq!(a + b, Point::new(1, 1));
		assert_eq!(a - b, Point::new(3, -7));
		assert_eq!(a * 3, Point::new(6, -9));
		assert_eq!(a.manhattan_distance(b), 10);
		assert_eq!(a.chebyshev_distance(b), 7);
	}

	#[test]
	fn point_neighbors() {
		let p = Point::new(0, 0);
		assert_eq!(
			p.neighbors(false),
			vec![
				Point::new(1, 0),
				Point::new(-1, 0),
				Point::new(0, 1),
				Point::new(0, -1)
			]
		);
		assert_eq!(p.neighbors(true).len(), 8);
	}

	#[test]
	fn turning() {
		assert_eq!(North.turn_right(), East);
		assert_eq!(West.turn_right(), North);
		assert_eq!(North.turn_left(), West);
		assert_eq!(South.turn_left(), East);
		assert_eq!(East.reverse(), West);
		for dir in Direction::all() {
			assert_eq!(dir.turn_left().turn_right(), dir);
			assert_eq!(dir.offset() + dir.reverse().offset(), Point::default());
		}
		assert_eq!(Point::new(3, 3).step(North), Point::new(3, 2));
	}

	#[test]
	fn grid_from_text() {
		let grid: Grid<char> = "\n  ab\n\n  cd  \n".parse().unwrap();
		assert_eq!(grid.height(), 2);
		assert_eq!(grid.width(), 2);
		assert_eq!(grid[Point::new(1, 1)], 'd');
		assert_eq!(grid.to_string(), "ab\ncd");
	}

	#[test]
	fn empty_grid() {
		let grid: Grid<char> = "".parse().unwrap();
		assert_eq!((grid.width(), grid.height()), (0, 0));
		assert_eq!(grid.get(Point::new(0, 0)), None);
		assert_eq!(grid.points().count(), 0);
	}

	#[test]
	fn set_out_of_bounds_is_ignored() {
		let mut grid = Grid::new(vec![vec![0; 3]; 2]);
		assert!(!grid.set(Point::new(-1, 0), 5));
		assert!(!grid.set(Point::new(0, 2), 5));
		assert!(grid.set(Point::new(2, 1), 5));
		assert_eq!(grid.find_all(&5), vec![Point::new(2, 1)]);
	}

	#[test]
	fn copy_is_deep() {
		let grid = Grid::new(vec![vec!['.'; 2]; 2]);
		let mut copy = grid.clone();
		copy.set(Point::new(0, 0), '#');
		assert_eq!(grid.get(Point::new(0, 0)), Some(&'.'));
		assert_eq!(copy.get(Point::new(0, 0)), Some(&'#'));
	}

	#[test]
	fn bounded_neighbors() {
		let grid = Grid::new(vec![vec![0u8; 3]; 3]);
		assert_eq!(grid.neighbors(Point::new(0, 0), false).count(), 2);
		assert_eq!(grid.neighbors(Point::new(0, 0), true).count(), 3);
		assert_eq!(grid.neighbors(Point::new(1, 1), true).count(), 8);
	}

	#[test]
	fn bounded_neighbors_keep_point_order() {
		let grid = Grid::new(vec![vec![0u8; 3]; 3]);
		assert_eq!(
			grid.neighbors(Point::new(0, 1), false).collect::<Vec<_>>(),
			vec![Point::new(1, 1), Point::new(0, 2), Point::new(0, 0)]
		);
		assert_eq!(
			grid.neighbors(Point::new(2, 2), true).collect::<Vec<_>>(),
			vec![Point::new(1, 2), Point::new(2, 1), Point::new(1, 1)]
		);
		for point in grid.points() {
			let expected: Vec<Point> = point
				.neighbors(true)
				.into_iter()
				.filter(|&p| grid.in_bounds(p))
				.collect();
			assert_eq!(grid.neighbors(point, true).collect::<Vec<_>>(), expected);
		}
	}

	#[test]
	fn map_keeps_layout() {
		let grid: Grid<char> = "12\n34".parse().unwrap();
		let digits = grid.map(|c| c.to_digit(10).unwrap());
		assert_eq!(digits[Point::new(0, 1)], 3);
		assert_eq!(digits.iter().map(|(_, &d)| d).sum::<u32>(), 10);
	}
}
