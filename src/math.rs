//! Number theory helpers that show up in puzzles about cycles and divisibility.
//!
//! ```
//! use puzzle_toolkit::math::{lcm_multiple, primes_up_to};
//!
//! // three cycles of length 4, 6 and 10 line up again after 60 steps
//! assert_eq!(lcm_multiple([4, 6, 10]), 60);
//! assert_eq!(primes_up_to(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
//! ```

use num_integer::Integer;

pub use num_integer::{gcd, lcm};

/// The greatest common divisor of all `numbers`. An empty input gives 0.
///
/// ```
/// # use puzzle_toolkit::math::gcd_multiple;
/// assert_eq!(gcd_multiple([12, 18, 30]), 6);
/// assert_eq!(gcd_multiple(Vec::<i64>::new()), 0);
/// ```
pub fn gcd_multiple<T: Integer + Copy>(numbers: impl IntoIterator<Item = T>) -> T {
	numbers
		.into_iter()
		.fold(T::zero(), |result, num| result.gcd(&num))
}

/// The least common multiple of all `numbers`. An empty input gives 1.
///
/// The result is always non-negative.
pub fn lcm_multiple<T: Integer + Copy>(numbers: impl IntoIterator<Item = T>) -> T {
	numbers
		.into_iter()
		.fold(T::one(), |result, num| result.lcm(&num))
}

/// All divisors of `n` in ascending order, including 1 and `n` itself.
///
/// ```
/// # use puzzle_toolkit::math::factors;
/// assert_eq!(factors(28), vec![1, 2, 4, 7, 14, 28]);
/// assert!(factors(0).is_empty());
/// ```
pub fn factors(n: u64) -> Vec<u64> {
	let mut low = Vec::new();
	let mut high = Vec::new();
	let mut i = 1;
	while i <= n / i {
		if n % i == 0 {
			low.push(i);
			if i != n / i {
				high.push(n / i);
			}
		}
		i += 1;
	}
	low.extend(high.into_iter().rev());
	low
}

/// Trial division up to the square root of `n`.
pub fn is_prime(n: u64) -> bool {
	match n {
		0 | 1 => false,
		2 => true,
		_ if n % 2 == 0 => false,
		_ => (3..)
			.step_by(2)
			.take_while(|i| *i <= n / i)
			.all(|i| n % i != 0),
	}
}

/// All primes `<= limit`, using the Sieve of Eratosthenes.
pub fn primes_up_to(limit: usize) -> Vec<usize> {
	if limit < 2 {
		return Vec::new();
	}
	let mut sieve = vec![true; limit + 1];
	sieve[0] = false;
	sieve[1] = false;

	let mut i = 2;
	while i * i <= limit {
		if sieve[i] {
			for multiple in (i * i..=limit).step_by(i) {
				sieve[multiple] = false;
			}
		}
		i += 1;
	}

	sieve
		.iter()
		.enumerate()
		.filter(|(_, prime)| **prime)
		.map(|(i, _)| i)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gcd_and_lcm() {
		assert_eq!(gcd(12, 18), 6);
		assert_eq!(lcm(4, 6), 12);
		assert_eq!(gcd_multiple([7u32]), 7);
		assert_eq!(lcm_multiple(Vec::<u64>::new()), 1);
		assert_eq!(lcm_multiple([-4i64, 6]), 12);
	}

	#[test]
	fn factors_of_squares() {
		assert_eq!(factors(1), vec![1]);
		assert_eq!(factors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
		assert_eq!(factors(13), vec![1, 13]);
	}

	#[test]
	fn primality_matches_sieve() {
		let sieve = primes_up_to(500);
		let by_trial: Vec<usize> = (0..=500u64)
			.filter(|&n| is_prime(n))
			.map(|n| n as usize)
			.collect();
		assert_eq!(sieve, by_trial);
		assert_eq!(sieve.len(), 95);
	}

	#[test]
	fn small_limits() {
		assert!(primes_up_to(1).is_empty());
		assert_eq!(primes_up_to(2), vec![2]);
		assert!(!is_prime(9));
		assert!(is_prime(7919));
	}
}
