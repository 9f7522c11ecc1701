//! Readers for puzzle input files.
//!
//! Every `read_*` function loads a file and hands its contents to the matching string function,
//! which can also be used directly on in-memory text:
//! ```
//! use puzzle_toolkit::input;
//!
//! let text = "199\n200\n\n208\n";
//! assert_eq!(input::integers(text, "\n").unwrap(), vec![199, 200, 208]);
//! assert_eq!(input::sections(text, "\n\n"), vec!["199\n200", "208\n"]);
//! ```
//!
//! I/O failures report the offending path, parse failures the 1-based line they occurred on.

use crate::error::{InputError, ParseError};
use crate::Grid;
use std::path::Path;
use std::str::FromStr;

/// Reads the whole file into a String.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputError> {
	let path = path.as_ref();
	let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	re_trace!("read {} bytes from {}", text.len(), path.display());
	Ok(text)
}

/// Reads the file as a list of lines. See [`lines`].
pub fn read_lines(path: impl AsRef<Path>, strip: bool) -> Result<Vec<String>, InputError> {
	read_input(path).map(|text| lines(&text, strip))
}

/// Reads the file as a list of integers. See [`integers`].
pub fn read_integers(path: impl AsRef<Path>, separator: &str) -> Result<Vec<i64>, InputError> {
	integers(&read_input(path)?, separator)
}

/// Reads the file as a Grid of chars, one row per non-blank line.
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid<char>, InputError> {
	read_input(path).map(|text| grid(&text))
}

/// Reads the file and splits it into sections. See [`sections`].
pub fn read_sections(path: impl AsRef<Path>, separator: &str) -> Result<Vec<String>, InputError> {
	read_input(path).map(|text| sections(&text, separator))
}

/// Reads the file as a list of columns. See [`columns`].
pub fn read_columns(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
	read_input(path).map(|text| columns(&text))
}

/// Applies `parser` to every non-blank line of the file.
///
/// Lines are trimmed before parsing. A parse failure is reported with its 1-based line number.
pub fn parse_lines<T>(
	path: impl AsRef<Path>,
	parser: impl FnMut(&str) -> Result<T, ParseError>,
) -> Result<Vec<T>, InputError> {
	parse_text(&read_input(path)?, parser)
}

/// Parses every non-blank line of the file with [`FromStr`].
///
/// ```no_run
/// # use puzzle_toolkit::{input, dial::Turn};
/// let turns: Vec<Turn> = input::read_parsed("input.txt")?;
/// # Ok::<(), puzzle_toolkit::InputError>(())
/// ```
pub fn read_parsed<T>(path: impl AsRef<Path>) -> Result<Vec<T>, InputError>
where
	T: FromStr<Err = ParseError>,
{
	parse_lines(path, str::parse)
}

/// Splits `text` into lines, without their line terminators. With `strip`, surrounding
/// whitespace is removed from every line as well.
pub fn lines(text: &str, strip: bool) -> Vec<String> {
	text.lines()
		.map(|line| if strip { line.trim() } else { line })
		.map(String::from)
		.collect()
}

/// Splits `text` at `separator` and parses every piece as an integer.
///
/// Pieces that are empty after trimming are skipped.
/// ```
/// # use puzzle_toolkit::input::integers;
/// assert_eq!(integers("3, -4,,5", ",").unwrap(), vec![3, -4, 5]);
///
/// let err = integers("1\n2\nthree\n", "\n").unwrap_err();
/// assert_eq!(err.to_string(), "line 3: invalid integer \"three\": invalid digit found in string");
/// ```
pub fn integers(text: &str, separator: &str) -> Result<Vec<i64>, InputError> {
	let mut numbers = Vec::new();
	let mut offset = 0;
	for piece in text.split(separator) {
		let start = offset;
		offset += piece.len() + separator.len();

		let trimmed = piece.trim();
		if trimmed.is_empty() {
			continue;
		}
		let number = trimmed.parse().map_err(|e| InputError::Parse {
			line: line_at(text, start + (piece.len() - piece.trim_start().len())),
			source: ParseError::invalid_int(trimmed, e),
		})?;
		numbers.push(number);
	}
	Ok(numbers)
}

/// Builds a Grid of chars from `text`, one row per non-blank line.
pub fn grid(text: &str) -> Grid<char> {
	match text.parse() {
		Ok(grid) => grid,
		Err(never) => match never {},
	}
}

/// Splits `text` at `separator`, which is usually a blank line (`"\n\n"`).
pub fn sections(text: &str, separator: &str) -> Vec<String> {
	text.split(separator).map(String::from).collect()
}

/// The columns of `text`, read top to bottom.
///
/// Blank lines are ignored. Lines shorter than the longest line are padded with spaces.
/// ```
/// # use puzzle_toolkit::input::columns;
/// assert_eq!(columns("abc\nde\n"), vec!["ad", "be", "c "]);
/// ```
pub fn columns(text: &str) -> Vec<String> {
	let rows: Vec<Vec<char>> = text
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(|line| line.chars().collect())
		.collect();
	let width = rows.iter().map(Vec::len).max().unwrap_or(0);

	(0..width)
		.map(|x| {
			rows.iter()
				.map(|row| row.get(x).copied().unwrap_or(' '))
				.collect()
		})
		.collect()
}

fn parse_text<T>(
	text: &str,
	mut parser: impl FnMut(&str) -> Result<T, ParseError>,
) -> Result<Vec<T>, InputError> {
	text.lines()
		.enumerate()
		.map(|(i, line)| (i + 1, line.trim()))
		.filter(|(_, line)| !line.is_empty())
		.map(|(line, content)| parser(content).map_err(|source| InputError::Parse { line, source }))
		.collect()
}

/// The 1-based line number of the byte at `offset`
fn line_at(text: &str, offset: usize) -> usize {
	text[..offset.min(text.len())].matches('\n').count() + 1
}
