// Copyright 2024-2025 Irreducible Inc.

/// A keyless permutation over values of type `T`.
///
/// Both Kupyna permutations act on a [`crate::State`]; the by-value form lets the compression
/// step keep the chaining value untouched while a copy is permuted.
pub trait Permutation<T: Clone>: Clone + Sync {
	/// Permutes an owned value and hands it back.
	fn permute(&self, mut input: T) -> T {
		self.permute_mut(&mut input);
		input
	}

	/// Permutes `input` in place.
	fn permute_mut(&self, input: &mut T);
}
