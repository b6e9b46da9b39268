// Copyright 2023-2024 Irreducible Inc.

//! Arithmetic in the field GF(2^8) used by the Kupyna (DSTU 7564:2014) diffusion layer.
//!
//! The field is defined by the irreducible polynomial $x^8 + x^4 + x^3 + x^2 + 1$ (`0x11D`).
//! Multiplication goes through a 256×256 lookup table which is computed once per process
//! from the bitwise shift-and-reduce rule in [`multiply`].

pub mod arithmetic;
pub mod arithmetic_traits;
pub mod kupyna_field;

pub use arithmetic::{multiply, MUL_TABLE, REDUCTION_POLYNOMIAL};
pub use arithmetic_traits::{InvertOrZero, Square};
pub use kupyna_field::*;
