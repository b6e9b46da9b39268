// Copyright 2024 Irreducible Inc.

mod compression;
mod diffusion;
mod digest;
mod padding;
mod permutation;
mod round_constants;
mod sbox;

pub use compression::KupynaCompression;
pub use diffusion::{mix_columns, row_shift, shift_bytes, MDS_MATRIX};
pub use digest::{hash, try_hash, Kupyna};
pub use padding::{pad_suffix, LENGTH_FIELD_BYTES, PADDING_MARKER};
pub use permutation::{KupynaPermutation, PermutationVariant};
pub use round_constants::{add_round_constant_p, add_round_constant_q};
pub use sbox::{sub_bytes, SBOXES};
