// Copyright 2024 Irreducible Inc.

use lazy_static::lazy_static;

/// The irreducible polynomial $x^8 + x^4 + x^3 + x^2 + 1$ defining the field.
pub const REDUCTION_POLYNOMIAL: u16 = 0x11D;

/// Carry-less multiplication of two field elements followed by reduction modulo
/// [`REDUCTION_POLYNOMIAL`].
///
/// This is the slow reference rule. Hot paths read [`MUL_TABLE`] instead.
pub const fn multiply(x: u8, y: u8) -> u8 {
	let mut x = x;
	let mut y = y;
	let mut acc = 0u8;
	let mut i = 0;
	while i < 8 {
		if y & 1 == 1 {
			acc ^= x;
		}
		let high_bit = x & 0x80;
		x <<= 1;
		if high_bit != 0 {
			x ^= (REDUCTION_POLYNOMIAL & 0xFF) as u8;
		}
		y >>= 1;
		i += 1;
	}
	acc
}

lazy_static! {
	/// `MUL_TABLE[x][y] == multiply(x, y)` for every pair of bytes.
	pub static ref MUL_TABLE: [[u8; 256]; 256] =
		std::array::from_fn(|x| std::array::from_fn(|y| multiply(x as u8, y as u8)));
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_multiply_small_values() {
		assert_eq!(multiply(0, 0xAB), 0);
		assert_eq!(multiply(1, 0xAB), 0xAB);
		assert_eq!(multiply(2, 0x80), 0x1D);
		assert_eq!(multiply(2, 0x87), 0x13);
		assert_eq!(multiply(0x80, 0x80), multiply(multiply(0x40, 0x80), 2));
	}

	#[test]
	fn test_table_matches_multiply() {
		for x in 0..=255u8 {
			for y in 0..=255u8 {
				assert_eq!(MUL_TABLE[x as usize][y as usize], multiply(x, y));
			}
		}
	}

	#[test]
	fn test_generator_has_full_order() {
		// 2 is primitive for 0x11D, so its powers visit every non-zero element.
		let mut seen = [false; 256];
		let mut acc = 1u8;
		for _ in 0..255 {
			assert!(!seen[acc as usize]);
			seen[acc as usize] = true;
			acc = multiply(acc, 2);
		}
		assert_eq!(acc, 1);
		assert!(!seen[0]);
	}

	proptest! {
		#[test]
		fn test_multiply_commutative(x in any::<u8>(), y in any::<u8>()) {
			prop_assert_eq!(multiply(x, y), multiply(y, x));
		}

		#[test]
		fn test_multiply_distributes_over_xor(x in any::<u8>(), y in any::<u8>(), z in any::<u8>()) {
			prop_assert_eq!(multiply(x, y ^ z), multiply(x, y) ^ multiply(x, z));
		}
	}
}
