use super::Cost;

/// A Path through a Graph
///
/// Stores the sequence of Nodes in `path`, starting with the start Node and ending with the goal,
/// and the total Cost of walking along the Edges between them in `cost`.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	/// the Nodes of the Path, `start` first
	pub path: Vec<P>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use puzzle_toolkit::search::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost, 42);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// appends a Node to the Path, adding the Cost of the new Edge to the total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use puzzle_toolkit::search::Path;
	/// let mut path = Path::new(vec!['a', 'b', 'c'], 42);
	/// path.append('d', 5);
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c', 'd']);
	/// assert_eq!(path.cost, 47);
	/// ```
	pub fn append(&mut self, node: P, cost: Cost) -> &mut Self {
		self.path.push(node);
		self.cost = self.cost.saturating_add(cost);
		self
	}

	/// The number of Edges in the Path, which is one less than the number of Nodes.
	///
	/// A Path consisting of only the start Node has no steps.
	/// ```
	/// # use puzzle_toolkit::search::Path;
	/// assert_eq!(Path::new(vec![(0, 0), (0, 1), (1, 1)], 2).step_count(), 2);
	/// assert_eq!(Path::new(vec![(0, 0)], 0).step_count(), 0);
	/// ```
	pub fn step_count(&self) -> usize {
		self.path.len().saturating_sub(1)
	}

	/// Returns a reversed copy of the Path.
	///
	/// The Cost is unchanged, which is only correct if every Edge costs the same in both directions.
	/// ```
	/// # use puzzle_toolkit::search::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	/// let reversed = path.reversed();
	///
	/// assert_eq!(reversed.path, vec!['c', 'b', 'a']);
	/// assert_eq!(reversed.cost, 42);
	/// ```
	pub fn reversed(&self) -> Path<P>
	where
		P: Clone,
	{
		let mut path = self.path.clone();
		path.reverse();
		Path::new(path, self.cost)
	}
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

impl<P> IntoIterator for Path<P> {
	type Item = P;
	type IntoIter = std::vec::IntoIter<P>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.into_iter()
	}
}

use std::cmp::Ordering;

/// Paths are ordered by their Cost alone, so that the cheapest of several Paths can be picked
/// with `min`.
///
/// This ordering is not consistent with `==`, which also compares the Nodes: two different Paths
/// with the same Cost are neither `<` nor `>` each other, yet not equal. Do not use Paths as keys
/// of ordered collections like `BTreeSet`.
/// ```
/// # use puzzle_toolkit::search::Path;
/// # use std::cmp::Ordering;
/// let a = Path::new(vec![0, 1, 3], 5);
/// let b = Path::new(vec![0, 2, 3], 5);
///
/// assert_eq!(a.cmp(&b), Ordering::Equal);
/// assert_ne!(a, b);
/// ```
impl<P: Eq> Ord for Path<P> {
	fn cmp(&self, other: &Path<P>) -> Ordering {
		self.cost.cmp(&other.cost)
	}
}

impl<P: Eq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn path_index() {
		let path = Path::new(vec![4, 2, 0], 42);

		assert_eq!(path[0], 4);
		assert_eq!(path[1], 2);
		assert_eq!(path[2], 0);
	}

	#[test]
	fn path_display() {
		let path = Path::new(vec![4, 2, 0], 42);

		assert_eq!(&format!("{}", path), "Path[Cost = 42]: 4 -> 2 -> 0");
	}

	#[test]
	fn path_display_empty() {
		let path = Path::new(Vec::<i32>::new(), 0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
		assert_eq!(path.step_count(), 0);
	}

	#[test]
	fn paths_order_by_cost() {
		let cheap = Path::new(vec!['x', 'y', 'z'], 3);
		let expensive = Path::new(vec!['x', 'z'], 10);

		assert!(cheap < expensive);
		assert_eq!(vec![expensive.clone(), cheap.clone()].iter().min(), Some(&cheap));
	}

	#[test]
	fn equal_cost_paths_compare_equal_but_differ() {
		use std::cmp::Ordering;

		let a = Path::new(vec!['x', 'y', 'z'], 3);
		let b = Path::new(vec!['x', 'w', 'z'], 3);

		assert_eq!(a.cmp(&b), Ordering::Equal);
		assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
		assert_ne!(a, b);
	}
}
