// Copyright 2023-2024 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error(
		"digest size must be a non-zero multiple of 8 bits no larger than 512, got {digest_bits}"
	)]
	InvalidDigestSize { digest_bits: usize },
}
