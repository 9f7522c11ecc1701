//! Errors for reading and parsing puzzle input.
//!
//! The search algorithms and the [`UnionFind`](crate::UnionFind) never fail: an unreachable goal is
//! reported as `None`, and precondition violations (unknown items, negative weights) are the
//! caller's responsibility. Only the text-facing parts of the crate return these errors.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Failure to turn a piece of text into a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	/// A piece of text was expected to be an integer
	#[error("invalid integer {text:?}: {source}")]
	InvalidInt {
		/// the offending text
		text: String,
		/// the underlying integer error
		#[source]
		source: ParseIntError,
	},
	/// A rotation was neither `L` nor `R`
	#[error("invalid rotation {0:?}, expected 'L' or 'R'")]
	InvalidRotation(String),
	/// A range was not of the form `start-end`
	#[error("invalid range {0:?}, expected \"start-end\"")]
	InvalidRange(String),
	/// The input contained nothing to parse
	#[error("empty input")]
	EmptyInput,
}

impl ParseError {
	pub(crate) fn invalid_int(text: &str, source: ParseIntError) -> ParseError {
		ParseError::InvalidInt {
			text: text.to_string(),
			source,
		}
	}
}

/// Failure to read a puzzle input file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
	/// The file could not be read
	#[error("failed to read {}: {source}", path.display())]
	Io {
		/// the file that was requested
		path: PathBuf,
		/// the underlying I/O error
		#[source]
		source: std::io::Error,
	},
	/// The file was read, but a line could not be parsed
	#[error("line {line}: {source}")]
	Parse {
		/// 1-based line number, or 0 if the error is not tied to a line
		line: usize,
		/// the underlying parse error
		#[source]
		source: ParseError,
	},
}

impl From<ParseError> for InputError {
	fn from(source: ParseError) -> InputError {
		InputError::Parse { line: 0, source }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_invalid_int() {
		let source = "x1".parse::<i64>().unwrap_err();
		let err = ParseError::invalid_int("x1", source);
		assert_eq!(
			err.to_string(),
			"invalid integer \"x1\": invalid digit found in string"
		);
	}

	#[test]
	fn parse_error_into_input_error() {
		let err: InputError = ParseError::EmptyInput.into();
		assert_eq!(err.to_string(), "line 0: empty input");
	}
}
