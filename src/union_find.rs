use hashbrown::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A [disjoint-set](https://en.wikipedia.org/wiki/Disjoint-set_data_structure) over a fixed
/// universe of items.
///
/// Every item starts out as its own component. [`union`](UnionFind::union) merges the components
/// of two items and [`find`](UnionFind::find) returns the representative of an item's component.
///
/// Items are interned to dense indices when the structure is created, so `T` only needs to be
/// hashable and cloneable. Merging attaches the smaller component below the root of the larger one
/// ("union by size"), and `find` points every item it walks past directly at the root ("path
/// compression"), which keeps both operations close to O(1) amortized.
///
/// ## Examples
/// ```
/// use puzzle_toolkit::UnionFind;
///
/// let mut sets = UnionFind::new(["A", "B", "C", "D"]);
///
/// assert!(sets.union(&"A", &"B"));
/// assert!(sets.union(&"C", &"D"));
/// assert!(sets.union(&"B", &"C"));
///
/// assert_eq!(sets.component_sizes(), vec![4]);
/// assert_eq!(sets.find(&"A"), sets.find(&"D"));
/// ```
///
/// ## Panics
/// The universe is fixed at construction. Passing an item that was never inserted to any method
/// other than [`contains`](UnionFind::contains) panics.
#[derive(Clone)]
pub struct UnionFind<T> {
	items: Vec<T>,
	index: HashMap<T, usize>,
	parent: Vec<usize>,
	/// only meaningful for roots
	size: Vec<usize>,
}

impl<T: Clone + Eq + Hash> UnionFind<T> {
	/// Creates a new UnionFind where every item is in a component of its own.
	///
	/// Duplicate items are only inserted once.
	pub fn new(items: impl IntoIterator<Item = T>) -> UnionFind<T> {
		let mut sets = UnionFind {
			items: Vec::new(),
			index: HashMap::new(),
			parent: Vec::new(),
			size: Vec::new(),
		};
		for item in items {
			if sets.index.contains_key(&item) {
				continue;
			}
			let id = sets.items.len();
			sets.index.insert(item.clone(), id);
			sets.items.push(item);
			sets.parent.push(id);
			sets.size.push(1);
		}
		sets
	}

	/// The number of items in the universe.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// `true` if the universe is empty.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// `true` if `item` is part of the universe.
	pub fn contains(&self, item: &T) -> bool {
		self.index.contains_key(item)
	}

	/// Returns the representative of the component containing `item`.
	///
	/// Two items are in the same component if and only if they have the same representative.
	/// The representative may change when components are merged.
	#[track_caller]
	pub fn find(&mut self, item: &T) -> T {
		let id = self.id_of(item);
		let root = self.find_root(id);
		self.items[root].clone()
	}

	/// Merges the components of `a` and `b`.
	///
	/// Returns `false` if they already were in the same component, in which case nothing changes.
	#[track_caller]
	pub fn union(&mut self, a: &T, b: &T) -> bool {
		let (a, b) = (self.id_of(a), self.id_of(b));
		let mut root_a = self.find_root(a);
		let mut root_b = self.find_root(b);

		if root_a == root_b {
			return false;
		}
		if self.size[root_a] < self.size[root_b] {
			std::mem::swap(&mut root_a, &mut root_b);
		}
		self.parent[root_b] = root_a;
		self.size[root_a] += self.size[root_b];
		true
	}

	/// `true` if `a` and `b` are in the same component.
	#[track_caller]
	pub fn connected(&mut self, a: &T, b: &T) -> bool {
		let (a, b) = (self.id_of(a), self.id_of(b));
		self.find_root(a) == self.find_root(b)
	}

	/// The size of the component containing `item`.
	#[track_caller]
	pub fn component_size(&mut self, item: &T) -> usize {
		let id = self.id_of(item);
		let root = self.find_root(id);
		self.size[root]
	}

	/// The number of distinct components.
	pub fn component_count(&self) -> usize {
		self.roots().count()
	}

	/// The sizes of all components, one entry per component, in no particular order.
	///
	/// The sizes always add up to [`len`](UnionFind::len). Sort the result if the largest
	/// components are needed:
	/// ```
	/// # use puzzle_toolkit::UnionFind;
	/// let mut sets = UnionFind::new(0..6);
	/// sets.union(&0, &1);
	/// sets.union(&1, &2);
	/// sets.union(&3, &4);
	///
	/// let mut sizes = sets.component_sizes();
	/// sizes.sort_unstable_by(|a, b| b.cmp(a));
	/// assert_eq!(sizes, vec![3, 2, 1]);
	/// ```
	pub fn component_sizes(&self) -> Vec<usize> {
		self.roots().map(|root| self.size[root]).collect()
	}

	fn roots(&self) -> impl Iterator<Item = usize> + '_ {
		self.parent
			.iter()
			.enumerate()
			.filter(|&(id, &parent)| id == parent)
			.map(|(id, _)| id)
	}

	#[track_caller]
	fn id_of(&self, item: &T) -> usize {
		match self.index.get(item) {
			Some(&id) => id,
			None => panic!("item is not part of this UnionFind"),
		}
	}

	fn find_root(&mut self, id: usize) -> usize {
		let mut root = id;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		let mut current = id;
		while self.parent[current] != root {
			let next = self.parent[current];
			self.parent[current] = root;
			current = next;
		}
		root
	}
}

impl<T: Debug> Debug for UnionFind<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut map = f.debug_map();
		for (id, item) in self.items.iter().enumerate() {
			let mut root = id;
			while self.parent[root] != root {
				root = self.parent[root];
			}
			map.entry(item, &self.items[root]);
		}
		map.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn singletons() {
		let mut sets = UnionFind::new(['x', 'y', 'z']);
		assert_eq!(sets.len(), 3);
		assert_eq!(sets.component_count(), 3);
		assert_eq!(sets.find(&'y'), 'y');
		assert_eq!(sets.component_sizes(), vec![1, 1, 1]);
	}

	#[test]
	fn union_with_itself() {
		let mut sets = UnionFind::new(['x', 'y']);
		assert!(!sets.union(&'x', &'x'));
		assert_eq!(sets.component_count(), 2);
	}

	#[test]
	fn smaller_component_joins_larger() {
		let mut sets = UnionFind::new(1..=5);
		sets.union(&1, &2);
		sets.union(&1, &3);
		// {1, 2, 3} is larger than {4}, so its root stays the representative
		let root = sets.find(&1);
		sets.union(&4, &2);
		assert_eq!(sets.find(&4), root);
		assert_eq!(sets.component_size(&4), 4);
	}

	#[test]
	fn find_compresses_paths() {
		let mut sets = UnionFind::new(0..4);
		// build the chain 3 -> 2 -> 0 by hand
		sets.parent = vec![0, 0, 0, 2];
		sets.size = vec![4, 1, 1, 1];

		assert_eq!(sets.find(&3), 0);
		assert_eq!(sets.parent, vec![0, 0, 0, 0]);
	}

	#[test]
	fn duplicates_collapse() {
		let sets = UnionFind::new(vec![1, 1, 2]);
		assert_eq!(sets.len(), 2);
		assert!(sets.contains(&1));
		assert!(!sets.contains(&3));
	}

	#[test]
	#[should_panic(expected = "not part of this UnionFind")]
	fn unknown_item_panics() {
		let mut sets = UnionFind::new([1, 2]);
		sets.find(&7);
	}

	#[test]
	fn debug_lists_representatives() {
		let mut sets = UnionFind::new(['a', 'b']);
		sets.union(&'a', &'b');
		assert_eq!(format!("{:?}", sets), "{'a': 'a', 'b': 'a'}");
	}
}
