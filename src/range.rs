//! Closed integer intervals.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// The closed interval `start..=end`.
///
/// A Range with `end < start` is empty.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
	/// the first element
	pub start: i64,
	/// the last element
	pub end: i64,
}

impl Range {
	/// Creates the Range `start..=end`
	pub const fn new(start: i64, end: i64) -> Range {
		Range { start, end }
	}

	/// `true` if `start <= element <= end`
	pub fn contains(&self, element: i64) -> bool {
		self.start <= element && element <= self.end
	}

	/// `true` if `start < element < end`
	pub fn contains_exclusive(&self, element: i64) -> bool {
		self.start < element && element < self.end
	}

	/// `true` if both ends of `other` lie within this Range
	pub fn contains_range(&self, other: &Range) -> bool {
		self.contains(other.start) && self.contains(other.end)
	}

	/// `true` if both ends of `other` lie strictly within this Range
	pub fn contains_range_exclusive(&self, other: &Range) -> bool {
		self.contains_exclusive(other.start) && self.contains_exclusive(other.end)
	}

	/// `true` if the two Ranges share at least one element
	/// ```
	/// # use puzzle_toolkit::range::Range;
	/// assert!(Range::new(1, 5).overlaps(&Range::new(5, 9)));
	/// assert!(!Range::new(1, 4).overlaps(&Range::new(5, 9)));
	/// ```
	pub fn overlaps(&self, other: &Range) -> bool {
		!(self.end < other.start || other.end < self.start)
	}

	/// The number of elements, `end - start + 1`
	pub fn len(&self) -> u64 {
		if self.is_empty() {
			0
		} else {
			self.start.abs_diff(self.end) + 1
		}
	}

	/// `true` if `end < start`
	pub fn is_empty(&self) -> bool {
		self.end < self.start
	}

	/// Iterates over all elements in ascending order
	pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
		self.start..=self.end
	}
}

impl IntoIterator for Range {
	type Item = i64;
	type IntoIter = std::ops::RangeInclusive<i64>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl From<std::ops::RangeInclusive<i64>> for Range {
	fn from(range: std::ops::RangeInclusive<i64>) -> Range {
		Range::new(*range.start(), *range.end())
	}
}

impl fmt::Debug for Range {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Range({}, {})", self.start, self.end)
	}
}

impl fmt::Display for Range {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

impl FromStr for Range {
	type Err = ParseError;

	/// Parses `start-end`, like `3-5`. Both ends must be non-negative.
	fn from_str(s: &str) -> Result<Range, ParseError> {
		let s = s.trim();
		let (start, end) = s
			.split_once('-')
			.ok_or_else(|| ParseError::InvalidRange(s.to_string()))?;
		let parse = |text: &str| {
			let text = text.trim();
			text.parse::<i64>()
				.map_err(|e| ParseError::invalid_int(text, e))
		};
		Ok(Range::new(parse(start)?, parse(end)?))
	}
}

/// Merges overlapping and adjacent Ranges.
///
/// The result is sorted and no two of its Ranges overlap or touch. Empty Ranges are dropped.
/// ```
/// # use puzzle_toolkit::range::{merge_ranges, Range};
/// let merged = merge_ranges([
///     Range::new(10, 14),
///     Range::new(3, 5),
///     Range::new(16, 20),
///     Range::new(12, 18),
///     Range::new(6, 6),
/// ]);
///
/// assert_eq!(merged, vec![Range::new(3, 6), Range::new(10, 20)]);
/// assert_eq!(merged.iter().map(Range::len).sum::<u64>(), 4 + 11);
/// ```
pub fn merge_ranges(ranges: impl IntoIterator<Item = Range>) -> Vec<Range> {
	let mut ranges: Vec<Range> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
	ranges.sort_unstable();

	let mut merged: Vec<Range> = Vec::with_capacity(ranges.len());
	for range in ranges {
		match merged.last_mut() {
			Some(current) if range.start <= current.end.saturating_add(1) => {
				current.end = current.end.max(range.end);
			}
			_ => merged.push(range),
		}
	}
	merged
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn containment() {
		let range = Range::new(3, 7);
		assert!(range.contains(3));
		assert!(range.contains(7));
		assert!(!range.contains_exclusive(3));
		assert!(range.contains_exclusive(4));
		assert!(!range.contains(8));

		assert!(range.contains_range(&Range::new(3, 7)));
		assert!(!range.contains_range_exclusive(&Range::new(3, 6)));
		assert!(range.contains_range_exclusive(&Range::new(4, 6)));
	}

	#[test]
	fn length_and_iteration() {
		let range = Range::new(-2, 2);
		assert_eq!(range.len(), 5);
		assert_eq!(range.into_iter().collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
		assert_eq!(Range::new(4, 3).len(), 0);
		assert!(Range::new(4, 3).is_empty());
	}

	#[test]
	fn parse() {
		assert_eq!("3-5".parse::<Range>(), Ok(Range::new(3, 5)));
		assert_eq!(" 10 - 14 ".parse::<Range>(), Ok(Range::new(10, 14)));
		assert_eq!(
			"35".parse::<Range>(),
			Err(ParseError::InvalidRange("35".to_string()))
		);
		assert!(matches!(
			"a-5".parse::<Range>(),
			Err(ParseError::InvalidInt { .. })
		));
	}

	#[test]
	fn display() {
		assert_eq!(Range::new(1, 5).to_string(), "Range(1, 5)");
		assert_eq!(format!("{:?}", Range::from(2..=4)), "Range(2, 4)");
	}

	#[test]
	fn merge_nothing() {
		assert!(merge_ranges(Vec::new()).is_empty());
	}
}
