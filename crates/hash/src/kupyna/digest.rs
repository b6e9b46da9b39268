// Copyright 2024 Irreducible Inc.

use kupyna_utils::checked_arithmetics::round_down_to_multiple;
use tracing::instrument;

use super::{compression::KupynaCompression, padding::pad_suffix};
use crate::{error::Error, params::KupynaParams, state::State};

/// A Kupyna instance for one digest size.
///
/// Instances carry no per-message state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Kupyna {
	params: KupynaParams,
	compression: KupynaCompression,
}

impl Kupyna {
	pub fn new(digest_bits: usize) -> Result<Self, Error> {
		KupynaParams::new(digest_bits).map(Self::from_params)
	}

	pub fn from_params(params: KupynaParams) -> Self {
		Self {
			compression: KupynaCompression::new(&params),
			params,
		}
	}

	pub fn kupyna_256() -> Self {
		Self::from_params(KupynaParams::KUPYNA_256)
	}

	pub fn kupyna_384() -> Self {
		Self::from_params(KupynaParams::KUPYNA_384)
	}

	pub fn kupyna_512() -> Self {
		Self::from_params(KupynaParams::KUPYNA_512)
	}

	pub fn params(&self) -> &KupynaParams {
		&self.params
	}

	/// Hashes a complete message, returning `digest_bits / 8` bytes.
	#[instrument(
		skip_all,
		name = "Kupyna::digest",
		level = "debug",
		fields(digest_bits = self.params.digest_bits(), message_len = message.as_ref().len())
	)]
	pub fn digest(&self, message: impl AsRef<[u8]>) -> Vec<u8> {
		let message = message.as_ref();
		let block_bytes = self.params.block_bytes();

		let suffix = pad_suffix(message, block_bytes);
		let full_blocks = &message[..round_down_to_multiple(message.len(), block_bytes)];

		let mut state = State::initial(&self.params);
		for (block_idx, block) in full_blocks
			.chunks_exact(block_bytes)
			.chain(suffix.chunks_exact(block_bytes))
			.enumerate()
		{
			tracing::trace!(block_idx, "compressing block");
			self.compression.compress(&mut state, block);
		}

		self.compression
			.output_transform(state, self.params.digest_bytes())
	}
}

/// Hashes `message` to a `digest_bits`-bit digest, rejecting unsupported sizes.
pub fn try_hash(message: impl AsRef<[u8]>, digest_bits: usize) -> Result<Vec<u8>, Error> {
	Ok(Kupyna::new(digest_bits)?.digest(message))
}

/// Hashes `message` to a `digest_bits`-bit digest.
///
/// # Panics
///
/// Panics if `digest_bits` is zero, not a multiple of 8 or larger than 512. An unsupported
/// digest size is a caller bug; use [`try_hash`] to handle it as an error instead.
pub fn hash(message: impl AsRef<[u8]>, digest_bits: usize) -> Vec<u8> {
	match try_hash(message, digest_bits) {
		Ok(digest) => digest,
		Err(err) => panic!("{err}"),
	}
}
