// Copyright 2024 Irreducible Inc.

/// Rounds `a` down to the nearest multiple of `b`.
pub const fn round_down_to_multiple(a: usize, b: usize) -> usize {
	a - a % b
}
