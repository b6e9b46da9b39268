// Copyright 2024 Irreducible Inc.

use std::fmt;

use super::{
	diffusion::{mix_columns, shift_bytes},
	round_constants::{add_round_constant_p, add_round_constant_q},
	sbox::sub_bytes,
};
use crate::{
	params::KupynaParams,
	permutation::Permutation,
	state::State,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationVariant {
	P,
	Q,
}

impl fmt::Display for PermutationVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::P => f.write_str("P"),
			Self::Q => f.write_str("Q"),
		}
	}
}

/// One of the two Kupyna permutations with a fixed number of rounds.
///
/// `P` and `Q` share the substitution and diffusion steps and differ in how round constants
/// are injected.
#[derive(Debug, Clone)]
pub struct KupynaPermutation {
	variant: PermutationVariant,
	rounds: usize,
}

impl KupynaPermutation {
	pub fn new(variant: PermutationVariant, rounds: usize) -> Self {
		assert!(rounds <= u8::MAX as usize, "round index must fit in a byte");
		Self { variant, rounds }
	}

	pub fn p(params: &KupynaParams) -> Self {
		Self::new(PermutationVariant::P, params.rounds())
	}

	pub fn q(params: &KupynaParams) -> Self {
		Self::new(PermutationVariant::Q, params.rounds())
	}

	pub fn variant(&self) -> PermutationVariant {
		self.variant
	}

	pub fn rounds(&self) -> usize {
		self.rounds
	}

	fn add_round_constants(&self, state: &mut State, round: u8) {
		match self.variant {
			PermutationVariant::P => add_round_constant_p(state, round),
			PermutationVariant::Q => add_round_constant_q(state, round),
		}
	}
}

impl Permutation<State> for KupynaPermutation {
	fn permute_mut(&self, state: &mut State) {
		for round in 0..self.rounds as u8 {
			self.add_round_constants(state, round);
			sub_bytes(state);
			shift_bytes(state);
			mix_columns(state);
		}
	}
}
