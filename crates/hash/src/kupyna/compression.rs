// Copyright 2024-2025 Irreducible Inc.

use itertools::izip;

use super::permutation::KupynaPermutation;
use crate::{params::KupynaParams, permutation::Permutation, state::State};

/// The Kupyna compression function `T(h, m) = P(h ⊕ m) ⊕ Q(m) ⊕ h` and the output
/// transformation `P(h) ⊕ h`.
#[derive(Debug, Clone)]
pub struct KupynaCompression {
	p: KupynaPermutation,
	q: KupynaPermutation,
}

impl KupynaCompression {
	pub fn new(params: &KupynaParams) -> Self {
		Self {
			p: KupynaPermutation::p(params),
			q: KupynaPermutation::q(params),
		}
	}

	/// Absorbs one message block into the chaining value.
	///
	/// `block` must be exactly one state in size.
	pub fn compress(&self, state: &mut State, block: &[u8]) {
		let message = State::from_bytes(block);
		assert_eq!(message.n_columns(), state.n_columns(), "block size must match the state");

		let mut p_input = state.clone();
		p_input ^= &message;
		let p_output = self.p.permute(p_input);
		let q_output = self.q.permute(message);

		for (h, p, q) in izip!(state.columns_mut(), p_output.columns(), q_output.columns()) {
			for (h_byte, p_byte, q_byte) in izip!(h.iter_mut(), p, q) {
				*h_byte ^= p_byte ^ q_byte;
			}
		}
	}

	/// Finalizes the chaining value and keeps its trailing `digest_bytes` bytes.
	pub fn output_transform(&self, state: State, digest_bytes: usize) -> Vec<u8> {
		let mut finalized = self.p.permute(state.clone());
		finalized ^= &state;

		let mut bytes = finalized.to_bytes();
		assert!(digest_bytes <= bytes.len(), "digest is wider than the state");
		bytes.split_off(bytes.len() - digest_bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compress_leaves_block_untouched() {
		let params = KupynaParams::KUPYNA_256;
		let compression = KupynaCompression::new(&params);
		let block: Vec<u8> = (0..64).collect();
		let mut state = State::initial(&params);
		compression.compress(&mut state, &block);
		assert_eq!(block, (0..64).collect::<Vec<u8>>());
		assert_ne!(state, State::initial(&params));
	}

	#[test]
	fn test_compress_matches_definition() {
		let params = KupynaParams::KUPYNA_256;
		let compression = KupynaCompression::new(&params);
		let block: Vec<u8> = (100..164).collect();
		let h = State::initial(&params);

		let mut expected = KupynaPermutation::p(&params).permute({
			let mut x = h.clone();
			x ^= &State::from_bytes(&block);
			x
		});
		expected ^= &KupynaPermutation::q(&params).permute(State::from_bytes(&block));
		expected ^= &h;

		let mut state = h;
		compression.compress(&mut state, &block);
		assert_eq!(state, expected);
	}

	#[test]
	fn test_output_transform_takes_trailing_bytes() {
		let params = KupynaParams::KUPYNA_512;
		let compression = KupynaCompression::new(&params);
		let state = State::initial(&params);
		let full = compression.output_transform(state.clone(), 128);
		let short = compression.output_transform(state, 6);
		assert_eq!(short, full[122..]);
	}

	#[test]
	#[should_panic]
	fn test_compress_rejects_wrong_block_size() {
		let params = KupynaParams::KUPYNA_256;
		let compression = KupynaCompression::new(&params);
		let mut state = State::initial(&params);
		compression.compress(&mut state, &[0; 128]);
	}
}
