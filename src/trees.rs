//! Small binary and ternary trees.
//!
//! Nodes live in a [`Slab`] arena and are addressed by [`NodeId`]s, so a tree can be built
//! top-down by attaching children to the Ids returned from earlier insertions:
//! ```
//! use puzzle_toolkit::trees::BinaryTree;
//!
//! //     1
//! //    / \
//! //   2   3
//! //  / \
//! // 4   5
//! let mut tree = BinaryTree::with_root(1);
//! let root = tree.root().unwrap();
//! let two = tree.insert_left(root, 2);
//! tree.insert_right(root, 3);
//! tree.insert_left(two, 4);
//! tree.insert_right(two, 5);
//!
//! assert_eq!(tree.preorder(), vec![&1, &2, &4, &5, &3]);
//! assert_eq!(tree.inorder(), vec![&4, &2, &5, &1, &3]);
//! assert_eq!(tree.postorder(), vec![&4, &5, &2, &3, &1]);
//! assert_eq!(tree.level_order(), vec![&1, &2, &3, &4, &5]);
//! assert_eq!(tree.to_string(), "1\n2 3\n4 5");
//! ```

use slab::Slab;
use std::collections::VecDeque;
use std::fmt;

/// The Type used to reference a Node within its tree
pub type NodeId = usize;

#[derive(Clone, Debug)]
struct TreeNode<T, const N: usize> {
	value: T,
	children: [Option<NodeId>; N],
}

/// The arena shared by both tree kinds. `N` is the number of child slots per Node.
#[derive(Clone, Debug)]
struct Arena<T, const N: usize> {
	nodes: Slab<TreeNode<T, N>>,
	root: Option<NodeId>,
}

impl<T, const N: usize> Arena<T, N> {
	fn new() -> Self {
		Arena {
			nodes: Slab::new(),
			root: None,
		}
	}

	fn with_root(value: T) -> Self {
		let mut arena = Arena::new();
		let id = arena.nodes.insert(TreeNode {
			value,
			children: [None; N],
		});
		arena.root = Some(id);
		arena
	}

	#[track_caller]
	fn node(&self, id: NodeId) -> &TreeNode<T, N> {
		match self.nodes.get(id) {
			Some(node) => node,
			None => panic!("NodeId {} does not belong to this tree", id),
		}
	}

	fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
		self.node(id).children.iter().flatten().copied()
	}

	/// Puts a new Node into `slot` of `parent`, freeing whatever subtree was there before.
	#[track_caller]
	fn attach(&mut self, parent: NodeId, slot: usize, value: Option<T>) -> Option<NodeId> {
		let old = self.node(parent).children[slot];
		if let Some(old) = old {
			self.remove_subtree(old);
		}
		let new = value.map(|value| {
			self.nodes.insert(TreeNode {
				value,
				children: [None; N],
			})
		});
		self.nodes[parent].children[slot] = new;
		new
	}

	fn remove_subtree(&mut self, id: NodeId) {
		let mut stack = vec![id];
		while let Some(id) = stack.pop() {
			let node = self.nodes.remove(id);
			stack.extend(node.children.iter().flatten());
		}
	}

	/// Visits every Node in pre-order (self before children) without recursion.
	fn preorder_ids(&self) -> Vec<NodeId> {
		let mut order = Vec::with_capacity(self.nodes.len());
		let mut stack: Vec<NodeId> = self.root.into_iter().collect();
		while let Some(id) = stack.pop() {
			order.push(id);
			let node = self.node(id);
			stack.extend(node.children.iter().rev().flatten());
		}
		order
	}

	/// Visits every Node in post-order (children before self) without recursion.
	fn postorder_ids(&self) -> Vec<NodeId> {
		// the reverse of a pre-order that visits children right to left
		let mut order = Vec::with_capacity(self.nodes.len());
		let mut stack: Vec<NodeId> = self.root.into_iter().collect();
		while let Some(id) = stack.pop() {
			order.push(id);
			stack.extend(self.node(id).children.iter().flatten());
		}
		order.reverse();
		order
	}

	/// In-order: the first child, then the Node itself, then the remaining children.
	fn inorder_ids(&self) -> Vec<NodeId> {
		enum Step {
			Expand(NodeId),
			Emit(NodeId),
		}
		let mut order = Vec::with_capacity(self.nodes.len());
		let mut stack: Vec<Step> = self.root.into_iter().map(Step::Expand).collect();
		while let Some(step) = stack.pop() {
			match step {
				Step::Emit(id) => order.push(id),
				Step::Expand(id) => {
					let [first, rest @ ..] = &self.node(id).children[..] else {
						order.push(id);
						continue;
					};
					stack.extend(rest.iter().rev().flatten().map(|&c| Step::Expand(c)));
					stack.push(Step::Emit(id));
					stack.extend(first.iter().map(|&c| Step::Expand(c)));
				}
			}
		}
		order
	}

	/// Breadth-first, each Node tagged with its depth.
	fn level_order_ids(&self) -> Vec<(NodeId, usize)> {
		let mut order = Vec::with_capacity(self.nodes.len());
		let mut next: VecDeque<(NodeId, usize)> = self.root.map(|id| (id, 0)).into_iter().collect();
		while let Some((id, depth)) = next.pop_front() {
			order.push((id, depth));
			next.extend(self.children(id).map(|c| (c, depth + 1)));
		}
		order
	}

	/// The number of levels below and including `id`.
	fn levels(&self, id: NodeId) -> usize {
		// post-order guarantees children are computed before their parent
		let mut levels = vec![0; self.nodes.capacity()];
		let mut stack = vec![(id, false)];
		while let Some((current, children_done)) = stack.pop() {
			if children_done {
				let deepest = self.children(current).map(|c| levels[c]).max();
				levels[current] = 1 + deepest.unwrap_or(0);
			} else {
				stack.push((current, true));
				stack.extend(self.children(current).map(|c| (c, false)));
			}
		}
		levels[id]
	}

	fn find(&self, value: &T) -> Option<NodeId>
	where
		T: PartialEq,
	{
		self.preorder_ids()
			.into_iter()
			.find(|&id| self.node(id).value == *value)
	}

	fn values(&self, ids: Vec<NodeId>) -> Vec<&T> {
		ids.into_iter().map(|id| &self.node(id).value).collect()
	}
}

/// A tree where every Node has up to two children.
#[derive(Clone, Debug)]
pub struct BinaryTree<T> {
	arena: Arena<T, 2>,
}

const LEFT: usize = 0;
const RIGHT: usize = 1;

impl<T> BinaryTree<T> {
	/// Creates an empty tree
	pub fn new() -> BinaryTree<T> {
		BinaryTree {
			arena: Arena::new(),
		}
	}

	/// Creates a tree consisting of only the root
	pub fn with_root(value: T) -> BinaryTree<T> {
		BinaryTree {
			arena: Arena::with_root(value),
		}
	}

	/// The root, or None if the tree is empty
	pub fn root(&self) -> Option<NodeId> {
		self.arena.root
	}

	/// The number of Nodes
	pub fn len(&self) -> usize {
		self.arena.nodes.len()
	}

	/// `true` if the tree has no Nodes
	pub fn is_empty(&self) -> bool {
		self.arena.nodes.is_empty()
	}

	/// The value stored at `id`
	#[track_caller]
	pub fn value(&self, id: NodeId) -> &T {
		&self.arena.node(id).value
	}

	/// The left child of `id`
	#[track_caller]
	pub fn left(&self, id: NodeId) -> Option<NodeId> {
		self.arena.node(id).children[LEFT]
	}

	/// The right child of `id`
	#[track_caller]
	pub fn right(&self, id: NodeId) -> Option<NodeId> {
		self.arena.node(id).children[RIGHT]
	}

	/// Sets the left child of `parent` to a new Node, replacing any existing left subtree.
	#[track_caller]
	pub fn insert_left(&mut self, parent: NodeId, value: T) -> NodeId {
		self.insert(parent, LEFT, value)
	}

	/// Sets the right child of `parent` to a new Node, replacing any existing right subtree.
	#[track_caller]
	pub fn insert_right(&mut self, parent: NodeId, value: T) -> NodeId {
		self.insert(parent, RIGHT, value)
	}

	#[track_caller]
	fn insert(&mut self, parent: NodeId, slot: usize, value: T) -> NodeId {
		match self.arena.attach(parent, slot, Some(value)) {
			Some(id) => id,
			None => unreachable!("attach always creates a Node for Some(value)"),
		}
	}

	/// The first Node holding `value` in pre-order.
	pub fn find(&self, value: &T) -> Option<NodeId>
	where
		T: PartialEq,
	{
		self.arena.find(value)
	}

	/// Node, left subtree, right subtree
	pub fn preorder(&self) -> Vec<&T> {
		self.arena.values(self.arena.preorder_ids())
	}

	/// left subtree, Node, right subtree
	pub fn inorder(&self) -> Vec<&T> {
		self.arena.values(self.arena.inorder_ids())
	}

	/// left subtree, right subtree, Node
	pub fn postorder(&self) -> Vec<&T> {
		self.arena.values(self.arena.postorder_ids())
	}

	/// level by level, left to right
	pub fn level_order(&self) -> Vec<&T> {
		let ids = self.arena.level_order_ids().into_iter().map(|(id, _)| id).collect();
		self.arena.values(ids)
	}

	/// Same as [`level_order`](BinaryTree::level_order)
	pub fn to_list(&self) -> Vec<&T> {
		self.level_order()
	}

	/// The number of Nodes without children
	pub fn count_leaves(&self) -> usize {
		self.arena
			.preorder_ids()
			.into_iter()
			.filter(|&id| self.arena.children(id).next().is_none())
			.count()
	}

	/// The number of levels. An empty tree has height 0, a lone root height 1.
	pub fn height(&self) -> usize {
		self.arena.root.map_or(0, |root| self.arena.levels(root))
	}

	/// `true` if for every Node the heights of its two subtrees differ by at most one.
	pub fn is_balanced(&self) -> bool {
		let mut levels = vec![0usize; self.arena.nodes.capacity()];
		let level = |levels: &[usize], child: Option<NodeId>| child.map_or(0, |c| levels[c]);

		for id in self.arena.postorder_ids() {
			let node = self.arena.node(id);
			let left = level(&levels, node.children[LEFT]);
			let right = level(&levels, node.children[RIGHT]);
			if left.abs_diff(right) > 1 {
				return false;
			}
			levels[id] = 1 + left.max(right);
		}
		true
	}
}

impl<T> Default for BinaryTree<T> {
	fn default() -> Self {
		BinaryTree::new()
	}
}

/// One line per level, values separated by spaces. An empty tree is shown as `<empty>`.
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.arena.root.is_none() {
			return write!(f, "<empty>");
		}
		let mut current_level = 0;
		for (i, (id, depth)) in self.arena.level_order_ids().into_iter().enumerate() {
			if depth != current_level {
				writeln!(f)?;
				current_level = depth;
			} else if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", self.arena.node(id).value)?;
		}
		Ok(())
	}
}

/// A tree where every Node has up to three children: left, middle and right.
///
/// ```
/// use puzzle_toolkit::trees::TernaryTree;
///
/// let mut tree = TernaryTree::with_root('a');
/// let root = tree.root().unwrap();
/// let [b, _, _] = tree.insert_children(root, Some('b'), Some('c'), Some('d'));
/// tree.insert_children(b.unwrap(), None, Some('e'), None);
///
/// let mut seen = String::new();
/// tree.preorder(|_, &c| seen.push(c));
/// assert_eq!(seen, "abecd");
///
/// assert_eq!(tree.height(), Some(2));
/// assert_eq!(tree.search(&'e'), b.and_then(|b| tree.middle(b)));
/// ```
#[derive(Clone, Debug)]
pub struct TernaryTree<T> {
	arena: Arena<T, 3>,
}

const MIDDLE: usize = 1;
const TERNARY_RIGHT: usize = 2;

impl<T> TernaryTree<T> {
	/// Creates an empty tree
	pub fn new() -> TernaryTree<T> {
		TernaryTree {
			arena: Arena::new(),
		}
	}

	/// Creates a tree consisting of only the root
	pub fn with_root(value: T) -> TernaryTree<T> {
		TernaryTree {
			arena: Arena::with_root(value),
		}
	}

	/// The root, or None if the tree is empty
	pub fn root(&self) -> Option<NodeId> {
		self.arena.root
	}

	/// The number of Nodes
	pub fn len(&self) -> usize {
		self.arena.nodes.len()
	}

	/// `true` if the tree has no Nodes
	pub fn is_empty(&self) -> bool {
		self.arena.nodes.is_empty()
	}

	/// The value stored at `id`
	#[track_caller]
	pub fn value(&self, id: NodeId) -> &T {
		&self.arena.node(id).value
	}

	/// The left child of `id`
	#[track_caller]
	pub fn left(&self, id: NodeId) -> Option<NodeId> {
		self.arena.node(id).children[LEFT]
	}

	/// The middle child of `id`
	#[track_caller]
	pub fn middle(&self, id: NodeId) -> Option<NodeId> {
		self.arena.node(id).children[MIDDLE]
	}

	/// The right child of `id`
	#[track_caller]
	pub fn right(&self, id: NodeId) -> Option<NodeId> {
		self.arena.node(id).children[TERNARY_RIGHT]
	}

	/// Replaces all three children of `node`. Previous subtrees are dropped, `None` leaves a slot
	/// empty. Returns the Ids of the new children.
	#[track_caller]
	pub fn insert_children(
		&mut self,
		node: NodeId,
		left: Option<T>,
		middle: Option<T>,
		right: Option<T>,
	) -> [Option<NodeId>; 3] {
		[
			self.arena.attach(node, LEFT, left),
			self.arena.attach(node, MIDDLE, middle),
			self.arena.attach(node, TERNARY_RIGHT, right),
		]
	}

	/// Root, Left, Middle, Right
	pub fn preorder(&self, mut visit: impl FnMut(NodeId, &T)) {
		for id in self.arena.preorder_ids() {
			visit(id, &self.arena.node(id).value);
		}
	}

	/// Left, Middle, Right, Root
	pub fn postorder(&self, mut visit: impl FnMut(NodeId, &T)) {
		for id in self.arena.postorder_ids() {
			visit(id, &self.arena.node(id).value);
		}
	}

	/// Left, Root, Middle, Right
	pub fn inorder(&self, mut visit: impl FnMut(NodeId, &T)) {
		for id in self.arena.inorder_ids() {
			visit(id, &self.arena.node(id).value);
		}
	}

	/// Breadth-first, children left to right
	pub fn level_order(&self, mut visit: impl FnMut(NodeId, &T)) {
		for (id, _) in self.arena.level_order_ids() {
			visit(id, &self.arena.node(id).value);
		}
	}

	/// The number of Edges on the longest way down from the root, or None for an empty tree.
	pub fn height(&self) -> Option<usize> {
		self.arena.root.map(|root| self.arena.levels(root) - 1)
	}

	/// The first Node holding `value` in pre-order.
	pub fn search(&self, value: &T) -> Option<NodeId>
	where
		T: PartialEq,
	{
		self.arena.find(value)
	}

	/// Renders the tree sideways: the right subtree above a Node, the left and middle subtrees
	/// below it.
	///
	/// ```
	/// # use puzzle_toolkit::trees::TernaryTree;
	/// let mut tree = TernaryTree::with_root(1);
	/// let root = tree.root().unwrap();
	/// tree.insert_children(root, Some(2), None, Some(3));
	///
	/// assert_eq!(tree.pretty(), "│   ┌── 3\n└── 1\n    └── 2\n");
	/// ```
	pub fn pretty(&self) -> String
	where
		T: fmt::Display,
	{
		let mut out = String::new();
		if let Some(root) = self.arena.root {
			self.pretty_node(&mut out, root, String::new(), true);
		}
		out
	}

	fn pretty_node(&self, out: &mut String, id: NodeId, prefix: String, is_left: bool)
	where
		T: fmt::Display,
	{
		use fmt::Write;

		let node = self.arena.node(id);
		let (towards_right, towards_left) = if is_left {
			("│   ", "    ")
		} else {
			("    ", "│   ")
		};
		if let Some(right) = node.children[TERNARY_RIGHT] {
			self.pretty_node(out, right, format!("{}{}", prefix, towards_right), false);
		}
		let branch = if is_left { "└── " } else { "┌── " };
		// writing to a String cannot fail
		let _ = writeln!(out, "{}{}{}", prefix, branch, node.value);
		for child in [node.children[LEFT], node.children[MIDDLE]].into_iter().flatten() {
			self.pretty_node(out, child, format!("{}{}", prefix, towards_left), true);
		}
	}
}

impl<T> Default for TernaryTree<T> {
	fn default() -> Self {
		TernaryTree::new()
	}
}
