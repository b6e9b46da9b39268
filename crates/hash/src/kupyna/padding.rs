// Copyright 2024 Irreducible Inc.

use kupyna_utils::checked_arithmetics::round_down_to_multiple;

/// First padding byte, a single set bit right after the message.
pub const PADDING_MARKER: u8 = 0x80;

/// The message bit length takes 96 bits: a 64-bit little-endian counter and 4 zero bytes.
pub const LENGTH_FIELD_BYTES: usize = 12;

/// Builds the padded tail of `message`: the bytes after its last full block, the
/// [`PADDING_MARKER`], zero fill and the length field.
///
/// The result is never empty and its length is a multiple of `block_bytes`, so a message made
/// of whole blocks still gets one extra block.
///
/// # Panics
///
/// Panics if `block_bytes` cannot hold the marker byte and the length field.
pub fn pad_suffix(message: &[u8], block_bytes: usize) -> Vec<u8> {
	assert!(
		block_bytes > LENGTH_FIELD_BYTES,
		"block of {block_bytes} bytes is too small for the padding suffix"
	);

	let full_blocks_len = round_down_to_multiple(message.len(), block_bytes);
	let tail = &message[full_blocks_len..];

	// Zero bits so that bit_len + 1 + zero_bits + 96 is a multiple of the block size. The
	// marker byte contributes its 7 low zero bits, hence the division rounding down.
	let block_bits = block_bytes * 8;
	let tail_bits = tail.len() * 8;
	let zero_bits = (2 * block_bits - tail_bits - 97) % block_bits;
	let zero_bytes = zero_bits / 8;

	// Bit lengths beyond 2^64 wrap, only the low 64 bits are encoded.
	let bit_len = (message.len() as u64).wrapping_mul(8);

	let mut suffix = Vec::with_capacity(tail.len() + 1 + zero_bytes + LENGTH_FIELD_BYTES);
	suffix.extend_from_slice(tail);
	suffix.push(PADDING_MARKER);
	suffix.resize(suffix.len() + zero_bytes, 0);
	suffix.extend_from_slice(&bit_len.to_le_bytes());
	suffix.extend_from_slice(&[0; LENGTH_FIELD_BYTES - 8]);

	debug_assert_eq!(suffix.len() % block_bytes, 0);
	suffix
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_message_pads_to_one_block() {
		let suffix = pad_suffix(&[], 64);
		assert_eq!(suffix.len(), 64);
		assert_eq!(suffix[0], PADDING_MARKER);
		assert!(suffix[1..].iter().all(|&b| b == 0));
	}

	#[test]
	fn test_full_block_message_gets_extra_block() {
		let message = [0xAAu8; 128];
		let suffix = pad_suffix(&message, 64);
		assert_eq!(suffix.len(), 64);
		assert_eq!(suffix[0], PADDING_MARKER);
		assert_eq!(&suffix[52..60], &1024u64.to_le_bytes());
		assert_eq!(&suffix[60..], &[0; 4]);
	}

	#[test]
	fn test_tail_that_leaves_no_room_spills_into_next_block() {
		// 52 tail bytes + marker + 12 length bytes exceed one 64-byte block.
		let message: Vec<u8> = (0..52).collect();
		let suffix = pad_suffix(&message, 64);
		assert_eq!(suffix.len(), 128);
		assert_eq!(&suffix[..52], &message[..]);
		assert_eq!(suffix[52], PADDING_MARKER);
		assert_eq!(&suffix[116..124], &(52u64 * 8).to_le_bytes());

		// 51 bytes still fit in one block.
		assert_eq!(pad_suffix(&message[..51], 64).len(), 64);
	}

	#[test]
	fn test_wide_block_layout() {
		let message: Vec<u8> = (0..95).collect();
		let suffix = pad_suffix(&message, 128);
		assert_eq!(suffix.len(), 128);
		assert_eq!(&suffix[..95], &message[..]);
		assert_eq!(suffix[95], PADDING_MARKER);
		assert!(suffix[96..116].iter().all(|&b| b == 0));
		assert_eq!(&suffix[116..124], &760u64.to_le_bytes());
	}

	#[test]
	fn test_suffix_length_is_block_multiple() {
		for block_bytes in [64, 128] {
			for len in 0..(3 * block_bytes) {
				let message = vec![0x5Au8; len];
				let suffix = pad_suffix(&message, block_bytes);
				assert!(!suffix.is_empty());
				assert_eq!(suffix.len() % block_bytes, 0);
				assert_eq!((len - len % block_bytes + suffix.len()) % block_bytes, 0);
			}
		}
	}

	#[test]
	fn test_smallest_block_fits_marker_and_length() {
		let suffix = pad_suffix(&[], LENGTH_FIELD_BYTES + 1);
		assert_eq!(suffix.len(), LENGTH_FIELD_BYTES + 1);
		assert_eq!(suffix[0], PADDING_MARKER);
	}

	#[test]
	#[should_panic(expected = "too small for the padding suffix")]
	fn test_zero_block_size_rejected() {
		pad_suffix(b"abc", 0);
	}

	#[test]
	#[should_panic(expected = "too small for the padding suffix")]
	fn test_block_without_room_for_length_rejected() {
		pad_suffix(b"abc", LENGTH_FIELD_BYTES);
	}
}
