// Copyright 2024 Ulvetanna Inc.

//! Reference vectors from DSTU 7564:2014. Messages are prefixes of the byte sequence
//! `0x00, 0x01, ..., 0xFF`.

use hex_literal::hex;
use kupyna_hash::{hash, hash_many, Kupyna};

const MESSAGE: [u8; 256] = {
	let mut message = [0u8; 256];
	let mut i = 0;
	while i < 256 {
		message[i] = i as u8;
		i += 1;
	}
	message
};

#[test]
fn test_kupyna_256_one_block() {
	assert_eq!(
		hash(&MESSAGE[..64], 256),
		hex!("08f4ee6f1be6903b324c4e27990cb24ef69dd58dbe84813ee0a52f6631239875")
	);
}

#[test]
fn test_kupyna_256_two_blocks() {
	assert_eq!(
		hash(&MESSAGE[..128], 256),
		hex!("0a9474e645a7d25e255e9e89fff42ec7eb31349007059284f0b182e452bda882")
	);
}

#[test]
fn test_kupyna_256_four_blocks() {
	assert_eq!(
		hash(&MESSAGE[..256], 256),
		hex!("d305a32b963d149dc765f68594505d4077024f836c1bf03806e1624ce176c08f")
	);
}

#[test]
fn test_kupyna_256_single_byte() {
	assert_eq!(
		hash([0xFFu8], 256),
		hex!("ea7677ca4526555680441c117982ea14059ea6d0d7124d6ecdb3deec49e890f4")
	);
}

#[test]
fn test_kupyna_256_partial_block() {
	assert_eq!(
		hash(&MESSAGE[..95], 256),
		hex!("1075c8b0cb910f116bda5fa1f19c29cf8ecc75caff7208ba2994b68fc56e8d16")
	);
}

#[test]
fn test_kupyna_256_empty() {
	assert_eq!(
		hash(b"", 256),
		hex!("cd5101d1ccdf0d1d1f4ada56e888cd724ca1a0838a3521e7131d4fb78d0f5eb6")
	);
}

#[test]
fn test_kupyna_48_one_block() {
	assert_eq!(
		hash(&MESSAGE[..64], 48),
		hex!("2f6631239875")
	);
}

#[test]
fn test_kupyna_512_one_block() {
	assert_eq!(
		hash(&MESSAGE[..64], 512),
		hex!(
			"3813e2109118cdfb5a6d5e72f7208dccc80a2dfb3afdfb02f46992b5edbe536b"
			"3560dd1d7e29c6f53978af58b444e37ba685c0dd910533ba5d78efffc13de62a"
		)
	);
}

#[test]
fn test_kupyna_512_one_wide_block() {
	assert_eq!(
		hash(&MESSAGE[..128], 512),
		hex!(
			"76ed1ac28b1d0143013ffa87213b4090b356441263c13e03fa060a8cada32b97"
			"9635657f256b15d5fca4a174de029f0b1b4387c878fcc1c00e8705d783fd7ffe"
		)
	);
}

#[test]
fn test_kupyna_512_two_wide_blocks() {
	assert_eq!(
		hash(&MESSAGE[..256], 512),
		hex!(
			"0dd03d7350c409cb3c29c25893a0724f6b133fa8b9eb90a64d1a8fa93b565566"
			"11eb187d715a956b107e3bfc76482298133a9ce8cbc0bd5e1436a5b197284f7e"
		)
	);
}

#[test]
fn test_kupyna_512_single_byte() {
	assert_eq!(
		hash([0xFFu8], 512),
		hex!(
			"871b18cf754b72740307a97b449abeb32b64444cc0d5a4d65830ae5456837a72"
			"d8458f12c8f06c98c616abe11897f86263b5cb77c420fb375374bec52b6d0292"
		)
	);
}

#[test]
fn test_kupyna_512_empty() {
	assert_eq!(
		hash(b"", 512),
		hex!(
			"656b2f4cd71462388b64a37043ea55dbe445d452aecd46c3298343314ef04019"
			"bcfa3f04265a9857f91be91fce197096187ceda78c9c1c021c294a0689198538"
		)
	);
}

#[test]
fn test_kupyna_304_one_wide_block() {
	assert_eq!(
		hash(&MESSAGE[..128], 304),
		hex!(
			"0a8cada32b979635657f256b15d5fca4a174de029f0b1b4387c878fcc1c00e87"
			"05d783fd7ffe"
		)
	);
}

#[test]
fn test_kupyna_384_partial_block() {
	assert_eq!(
		hash(&MESSAGE[..95], 384),
		hex!(
			"d9021692d84e5175735654846ba751e6d0ed0fac36dfbc0841287dcb0b5584c7"
			"5016c3decc2a6e47c50b2f3811e351b8"
		)
	);
}

#[test]
fn test_kupyna_256_padding_fits_tail_block() {
	assert_eq!(
		hash(&MESSAGE[..51], 256),
		hex!("6f8f0a3f8261af77581ab01cb89d4cb5ed87ca1d9954f11d5586e94b45c82fb8")
	);
}

#[test]
fn test_kupyna_256_padding_spills_into_extra_block() {
	assert_eq!(
		hash(&MESSAGE[..52], 256),
		hex!("8b6fe2ba77e684b2a1ac82232f4efc49f681cd18c82a0cfff530186a2fc642d2")
	);
}

#[test]
fn test_kupyna_256_one_byte_short_of_block() {
	assert_eq!(
		hash(&MESSAGE[..63], 256),
		hex!("03a44a02c9ffafb43addb290bbcf3b8168f624e8cbd332dc6a9dc7df9d39cbc2")
	);
}

#[test]
fn test_kupyna_512_partial_second_block() {
	assert_eq!(
		hash(&MESSAGE[..200], 512),
		hex!(
			"a146c66ad3174223a23d36899e843fbd6b832db01091b2b6d638a07fa154c666"
			"135ddad5be6b8668ddda9e0723a5520861d82f47dea476784069f9832beb44d3"
		)
	);
}

#[test]
fn test_named_instances_match_hash() {
	assert_eq!(Kupyna::kupyna_256().digest(&MESSAGE[..64]), hash(&MESSAGE[..64], 256));
	assert_eq!(Kupyna::kupyna_384().digest(&MESSAGE[..95]), hash(&MESSAGE[..95], 384));
	assert_eq!(Kupyna::kupyna_512().digest(b""), hash(b"", 512));
}

#[test]
fn test_hash_many_reference_vectors() {
	let messages = [&MESSAGE[..64], &MESSAGE[..95], &MESSAGE[..0]];
	let digests = hash_many(&messages[..], 256).unwrap();
	assert_eq!(digests[0], hash(&MESSAGE[..64], 256));
	assert_eq!(digests[1], hash(&MESSAGE[..95], 256));
	assert_eq!(digests[2], hash(b"", 256));
}
