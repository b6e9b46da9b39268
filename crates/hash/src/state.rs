// Copyright 2024 Irreducible Inc.

use std::ops::BitXorAssign;

use crate::params::KupynaParams;

/// Number of bytes in a state column.
pub const ROWS: usize = 8;

/// Largest number of columns of any state.
pub const MAX_COLUMNS: usize = 16;

pub type Column = [u8; ROWS];

/// The internal state: 8 or 16 columns of 8 bytes, column-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
	columns: Vec<Column>,
}

impl State {
	pub fn zeroed(n_columns: usize) -> Self {
		debug_assert!(n_columns <= MAX_COLUMNS);
		Self {
			columns: vec![[0; ROWS]; n_columns],
		}
	}

	/// The chaining value before the first block: all zero but the first byte, which holds the
	/// block size in bytes.
	pub fn initial(params: &KupynaParams) -> Self {
		let mut state = Self::zeroed(params.columns());
		// 64 or 128, always fits in a byte.
		state.columns[0][0] = params.block_bytes() as u8;
		state
	}

	/// Reads a state from column-major bytes. `bytes.len()` must be a multiple of [`ROWS`].
	pub fn from_bytes(bytes: &[u8]) -> Self {
		assert_eq!(bytes.len() % ROWS, 0, "state bytes must fill whole columns");
		let columns = bytes
			.chunks_exact(ROWS)
			.map(|chunk| {
				let mut column = [0; ROWS];
				column.copy_from_slice(chunk);
				column
			})
			.collect();
		Self { columns }
	}

	pub fn n_columns(&self) -> usize {
		self.columns.len()
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn columns_mut(&mut self) -> &mut [Column] {
		&mut self.columns
	}

	/// Concatenates the columns in order.
	pub fn to_bytes(&self) -> Vec<u8> {
		self.columns.concat()
	}
}

impl BitXorAssign<&Self> for State {
	fn bitxor_assign(&mut self, rhs: &Self) {
		assert_eq!(self.n_columns(), rhs.n_columns());
		for (lhs, rhs) in self.columns.iter_mut().zip(&rhs.columns) {
			for (a, b) in lhs.iter_mut().zip(rhs) {
				*a ^= b;
			}
		}
	}
}
