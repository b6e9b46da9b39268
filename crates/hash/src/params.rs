// Copyright 2024 Irreducible Inc.

use kupyna_utils::ensure;

use crate::{error::Error, state::ROWS};

/// Largest supported digest size, in bits.
pub const MAX_DIGEST_BITS: usize = 512;

/// Digests up to this many bits use the narrow 512-bit state.
const NARROW_STATE_MAX_DIGEST_BITS: usize = 256;

/// Per-call configuration derived from the requested digest size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KupynaParams {
	digest_bits: usize,
	rounds: usize,
	columns: usize,
}

impl KupynaParams {
	/// Kupyna-256: 512-bit state, 10 rounds.
	pub const KUPYNA_256: Self = Self::derive(256);
	/// Kupyna-384: 1024-bit state, 14 rounds.
	pub const KUPYNA_384: Self = Self::derive(384);
	/// Kupyna-512: 1024-bit state, 14 rounds.
	pub const KUPYNA_512: Self = Self::derive(512);

	/// Validates `digest_bits` and selects the state width and round count for it.
	pub fn new(digest_bits: usize) -> Result<Self, Error> {
		ensure!(
			digest_bits > 0 && digest_bits % 8 == 0 && digest_bits <= MAX_DIGEST_BITS,
			Error::InvalidDigestSize { digest_bits }
		);
		Ok(Self::derive(digest_bits))
	}

	const fn derive(digest_bits: usize) -> Self {
		if digest_bits <= NARROW_STATE_MAX_DIGEST_BITS {
			Self {
				digest_bits,
				rounds: 10,
				columns: 8,
			}
		} else {
			Self {
				digest_bits,
				rounds: 14,
				columns: 16,
			}
		}
	}

	pub const fn digest_bits(&self) -> usize {
		self.digest_bits
	}

	pub const fn digest_bytes(&self) -> usize {
		self.digest_bits / 8
	}

	pub const fn rounds(&self) -> usize {
		self.rounds
	}

	pub const fn columns(&self) -> usize {
		self.columns
	}

	/// Size of a message block, which equals the state size.
	pub const fn block_bytes(&self) -> usize {
		self.columns * ROWS
	}

	pub const fn state_bytes(&self) -> usize {
		self.block_bytes()
	}
}
