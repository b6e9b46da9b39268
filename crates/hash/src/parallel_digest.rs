// Copyright 2024-2025 Irreducible Inc.

use rayon::prelude::*;
use tracing::instrument;

use crate::{error::Error, kupyna::Kupyna};

/// Hashes independent messages in parallel. Digests are returned in input order.
#[instrument(skip_all, level = "debug", fields(n_messages = messages.len(), digest_bits = digest_bits))]
pub fn hash_many<M>(messages: &[M], digest_bits: usize) -> Result<Vec<Vec<u8>>, Error>
where
	M: AsRef<[u8]> + Sync,
{
	let kupyna = Kupyna::new(digest_bits)?;
	Ok(messages
		.par_iter()
		.map(|message| kupyna.digest(message))
		.collect())
}
