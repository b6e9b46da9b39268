// Copyright 2024 Irreducible Inc.

use crate::state::State;

/// Base word added to every column of the `Q` permutation.
const Q_CONSTANT_BASE: u64 = 0x00F0_F0F0_F0F0_F0F3;

/// `P` constants: column `j` gets `(j * 0x10) ^ round` XORed into its first byte.
pub fn add_round_constant_p(state: &mut State, round: u8) {
	for (j, column) in state.columns_mut().iter_mut().enumerate() {
		column[0] ^= ((j as u8) << 4) ^ round;
	}
}

/// `Q` constants: each column, read as a little-endian `u64`, gets a constant word added
/// modulo 2^64. The top byte of the word is `((n_columns - j - 1) * 0x10) ^ round`.
///
/// Byte order is fixed to little-endian regardless of the host.
pub fn add_round_constant_q(state: &mut State, round: u8) {
	let n_columns = state.n_columns();
	for (j, column) in state.columns_mut().iter_mut().enumerate() {
		let top = (((n_columns - j - 1) as u64) << 4) ^ u64::from(round);
		let word = Q_CONSTANT_BASE ^ (top << 56);
		*column = u64::from_le_bytes(*column).wrapping_add(word).to_le_bytes();
	}
}
