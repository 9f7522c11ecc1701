#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A toolkit of small, reusable pieces for daily programming puzzles.
//!
//! ## Introduction
//! Most puzzle solutions are throwaway glue: parse a text file, compute two numbers, print them.
//! The parts that keep coming back are collected here:
//! - generic Graph searches over **implicit** Graphs ([`search`]): BFS, DFS, Dijkstra and A*.
//!   The Graph is never stored, it is described by a function that returns the neighbors of a Node.
//! - a disjoint-set structure ([`UnionFind`]) with path compression and union by size
//! - 2D helpers ([`Grid`], [`Point`], [`Direction`]) and the common [`neighbors`] of a Point
//! - a few grab-bag helpers: a circular [`Dial`](dial::Dial), closed integer [`Range`](range::Range)s,
//!   arena-backed [`trees`], number-theory helpers in [`math`] and input readers in [`input`]
//!
//! ## Examples
//! Searching a Grid:
//! ```
//! use puzzle_toolkit::prelude::*;
//!
//! let grid: Grid<char> = "\
//! ..#..
//! ..#..
//! .....
//! "
//! .parse()
//! .unwrap();
//!
//! let start = Point::new(0, 0);
//! let goal = Point::new(4, 0);
//!
//! let neighborhood = ManhattanNeighborhood::new(grid.width(), grid.height());
//!
//! let path = a_star_search(
//!     |p| {
//!         neighborhood
//!             .get_all_neighbors(p)
//!             .filter(|&n| grid.get(n) != Some(&'#'))
//!             .map(|n| (n, 1))
//!     },
//!     start,
//!     goal,
//!     |p, g| neighborhood.heuristic(p, g),
//! );
//!
//! let path = path.unwrap();
//! assert_eq!(path.cost, 8);
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//! ```
//!
//! Counting components:
//! ```
//! use puzzle_toolkit::UnionFind;
//!
//! let mut sets = UnionFind::new(['A', 'B', 'C', 'D']);
//! assert!(sets.union(&'A', &'B'));
//! assert!(sets.union(&'C', &'D'));
//! assert!(!sets.union(&'B', &'A'));
//!
//! let mut sizes = sets.component_sizes();
//! sizes.sort_unstable();
//! assert_eq!(sizes, vec![2, 2]);
//! ```
//!
//! ### Logging
//! Enabling the `log` feature makes the searches report how many Nodes they expanded through the
//! [log](https://docs.rs/log) facade. It is off by default and compiles away completely.

#[macro_use]
mod utils;

pub mod error;
pub use self::error::{InputError, ParseError};

pub mod search;

mod union_find;
pub use self::union_find::UnionFind;

pub mod grid;
pub use self::grid::{Direction, Grid, Point};

pub mod neighbors;

pub mod dial;
pub mod input;
pub mod math;
pub mod range;
pub mod trees;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		dial::{Dial, DialConfig, Rotation, Turn},
		grid::{Direction, Grid, Point},
		neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
		range::{merge_ranges, Range},
		search::{
			a_star_search, bfs, bfs_until, dfs, dfs_until, dijkstra, dijkstra_paths,
			dijkstra_until, Cost, Path,
		},
		UnionFind,
	};
}
