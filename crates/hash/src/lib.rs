// Copyright 2023 Ulvetanna Inc.

//! The Kupyna hash function (DSTU 7564:2014).
//!
//! Kupyna is a wide-pipe Merkle–Damgård construction over two keyless AES-like permutations
//! `P` and `Q`. The 512-bit state variant serves digests up to 256 bits and the 1024-bit
//! state variant serves digests up to 512 bits. Digests of any multiple of 8 bits are produced
//! by keeping the trailing bytes of the finalized state.
//!
//! ```
//! let digest = kupyna_hash::hash(b"", 256);
//! assert_eq!(digest.len(), 32);
//! ```

pub mod error;
pub mod kupyna;
pub mod parallel_digest;
pub mod params;
pub mod permutation;
pub mod state;

pub use error::Error;
pub use kupyna::*;
pub use parallel_digest::hash_many;
pub use params::KupynaParams;
pub use permutation::Permutation;
pub use state::State;
