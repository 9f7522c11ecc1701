//! A circular Dial that counts how often it points at zero.
//!
//! ```
//! use puzzle_toolkit::dial::{Dial, DialConfig, Turn};
//!
//! let mut dial = Dial::with_config(DialConfig::with_start(50));
//! for turn in ["L68", "L30", "R48", "L5", "R60", "L55", "L1", "L99", "R14", "L82"] {
//!     dial.apply(turn.parse::<Turn>().unwrap());
//! }
//!
//! assert_eq!(dial.pointer(), 32);
//! assert_eq!(dial.zero_endings(), 3);
//! assert_eq!(dial.zero_endings() + dial.zero_passes(), 6);
//! ```

use crate::error::ParseError;
use std::str::FromStr;

/// The direction a [`Dial`] is turned in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
	/// towards lower numbers
	Left,
	/// towards higher numbers
	Right,
}

impl TryFrom<char> for Rotation {
	type Error = ParseError;
	fn try_from(c: char) -> Result<Rotation, ParseError> {
		match c {
			'L' | 'l' => Ok(Rotation::Left),
			'R' | 'r' => Ok(Rotation::Right),
			other => Err(ParseError::InvalidRotation(other.to_string())),
		}
	}
}

impl FromStr for Rotation {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Rotation, ParseError> {
		let mut chars = s.trim().chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Rotation::try_from(c),
			_ => Err(ParseError::InvalidRotation(s.to_string())),
		}
	}
}

/// A single instruction for a [`Dial`], written as the Rotation followed by the number of steps,
/// like `L68` or `R5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Turn {
	/// the direction to turn in
	pub rotation: Rotation,
	/// how many positions to turn
	pub steps: usize,
}

impl FromStr for Turn {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Turn, ParseError> {
		let s = s.trim();
		let mut chars = s.chars();
		let rotation = match chars.next() {
			Some(c) => Rotation::try_from(c)?,
			None => return Err(ParseError::EmptyInput),
		};
		let digits = chars.as_str();
		let steps = digits
			.parse()
			.map_err(|e| ParseError::invalid_int(digits, e))?;
		Ok(Turn { rotation, steps })
	}
}

/// Options for creating a [`Dial`]
///
/// Default options:
/// ```
/// # use puzzle_toolkit::dial::DialConfig;
/// assert_eq!(
///     DialConfig {
///         positions: 100,
///         start: 0,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialConfig {
	/// The number of positions on the Dial, numbered `0..positions` (defaults to `100`)
	pub positions: usize,
	/// The position the Dial initially points at (defaults to `0`)
	pub start: usize,
}

impl DialConfig {
	/// The default config, starting at `start` instead of 0
	pub fn with_start(start: usize) -> DialConfig {
		DialConfig {
			start,
			..Default::default()
		}
	}
}

impl Default for DialConfig {
	fn default() -> DialConfig {
		DialConfig {
			positions: 100,
			start: 0,
		}
	}
}

/// A circular Dial with a pointer that can be turned left or right.
///
/// Besides the current position, the Dial counts two things:
/// - `zero_endings`: how many turns ended with the pointer on zero
/// - `zero_passes`: how many times the pointer moved across zero in the middle of a turn
///
/// Together they are the number of times the pointer pointed at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dial {
	pointer: usize,
	positions: usize,
	zero_passes: usize,
	zero_endings: usize,
}

impl Dial {
	/// Creates a Dial with 100 positions pointing at `pointer`.
	pub fn new(pointer: usize) -> Dial {
		Dial::with_config(DialConfig::with_start(pointer))
	}

	/// Creates a Dial from a [`DialConfig`].
	///
	/// ## Panics
	/// if `config.positions` is 0
	pub fn with_config(config: DialConfig) -> Dial {
		assert!(config.positions > 0, "a Dial needs at least one position");
		Dial {
			pointer: config.start % config.positions,
			positions: config.positions,
			zero_passes: 0,
			zero_endings: 0,
		}
	}

	/// The current position
	pub fn pointer(&self) -> usize {
		self.pointer
	}

	/// How many times the pointer crossed zero without stopping there
	pub fn zero_passes(&self) -> usize {
		self.zero_passes
	}

	/// How many turns ended on zero
	pub fn zero_endings(&self) -> usize {
		self.zero_endings
	}

	/// Turns the Dial by `steps` positions.
	pub fn rotate(&mut self, rotation: Rotation, steps: usize) {
		let old = self.pointer;
		let partial = steps % self.positions;

		let (new, crossed_zero) = match rotation {
			Rotation::Left => {
				let new = (old + self.positions - partial) % self.positions;
				(new, new == 0 || new > old)
			}
			Rotation::Right => {
				let new = (old + partial) % self.positions;
				(new, new < old)
			}
		};

		if old != 0 && crossed_zero && new != 0 {
			self.zero_passes += 1;
		}
		self.zero_passes += steps / self.positions;

		self.pointer = new;
		if new == 0 {
			self.zero_endings += 1;
		}
	}

	/// Applies a parsed [`Turn`].
	pub fn apply(&mut self, turn: Turn) {
		self.rotate(turn.rotation, turn.steps);
	}
}

impl Default for Dial {
	fn default() -> Dial {
		Dial::with_config(DialConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn right_wraps_around() {
		let mut dial = Dial::new(95);
		dial.rotate(Rotation::Right, 10);
		assert_eq!(dial.pointer(), 5);
		assert_eq!(dial.zero_passes(), 1);
		assert_eq!(dial.zero_endings(), 0);
	}

	#[test]
	fn left_onto_zero_is_an_ending_not_a_pass() {
		let mut dial = Dial::new(5);
		dial.rotate(Rotation::Left, 5);
		assert_eq!(dial.pointer(), 0);
		assert_eq!(dial.zero_passes(), 0);
		assert_eq!(dial.zero_endings(), 1);
	}

	#[test]
	fn leaving_zero_is_not_a_pass() {
		let mut dial = Dial::new(0);
		dial.rotate(Rotation::Left, 1);
		assert_eq!(dial.pointer(), 99);
		assert_eq!(dial.zero_passes(), 0);
	}

	#[test]
	fn full_revolutions_count() {
		let mut dial = Dial::new(50);
		dial.rotate(Rotation::Right, 1000);
		assert_eq!(dial.pointer(), 50);
		assert_eq!(dial.zero_passes(), 10);

		dial.rotate(Rotation::Left, 150);
		assert_eq!(dial.pointer(), 0);
		assert_eq!(dial.zero_passes(), 11);
		assert_eq!(dial.zero_endings(), 1);
	}

	#[test]
	fn small_dial() {
		let mut dial = Dial::with_config(DialConfig {
			positions: 4,
			start: 6,
		});
		assert_eq!(dial.pointer(), 2);
		dial.rotate(Rotation::Right, 3);
		assert_eq!(dial.pointer(), 1);
		assert_eq!(dial.zero_passes(), 1);
	}

	#[test]
	fn parse_turns() {
		assert_eq!(
			"R48".parse::<Turn>(),
			Ok(Turn {
				rotation: Rotation::Right,
				steps: 48
			})
		);
		assert_eq!("l3".parse::<Turn>().map(|t| t.rotation), Ok(Rotation::Left));
		assert_eq!(
			"X3".parse::<Turn>(),
			Err(ParseError::InvalidRotation("X".to_string()))
		);
		assert!(matches!(
			"R".parse::<Turn>(),
			Err(ParseError::InvalidInt { .. })
		));
		assert_eq!("".parse::<Turn>(), Err(ParseError::EmptyInput));
	}
}
