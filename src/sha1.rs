//! Software SHA1 implementation
//! Source 1: https://en.wikipedia.org/wiki/SHA-1
//! Source 2: https://csrc.nist.gov/files/pubs/fips/180-2/upd1/final/docs/fips180-2withchangenotice.pdf

use thiserror::Error;

/// Size of a SHA1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Size of a message block in bytes.
pub const BLOCK_LEN: usize = 64;

const H_INIT: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Sha1Error {
	#[error("input of {len} bytes does not fit a 64-bit bit length")]
	InputTooLarge { len: usize },
}

/// Computes the SHA1 digest of `data`.
///
/// # Panics
///
/// Panics if the length of `data` in bits does not fit in a `u64`. No
/// allocatable slice can reach that size; use [`try_sha1`] to get an error instead.
pub fn sha1(data: &[u8]) -> [u8; DIGEST_LEN] {
	match try_sha1(data) {
		Ok(digest) => digest,
		Err(err) => panic!("{err}"),
	}
}

/// Computes the SHA1 digest of `data`, reporting oversized input as an error.
pub fn try_sha1(data: &[u8]) -> Result<[u8; DIGEST_LEN], Sha1Error> {
	let padded = pad(data)?;
	let blocks = padded.chunks_exact(BLOCK_LEN);
	debug_assert!(blocks.remainder().is_empty());

	log::trace!("sha1: {} bytes in {} blocks", data.len(), blocks.len());

	let mut h = H_INIT;
	for block in blocks {
		let w = message_schedule(block);
		compress(&mut h, &w);
	}

	Ok(finalize(&h))
}

/// Lowercase hex rendering of [`sha1`].
pub fn sha1_hex(data: &[u8]) -> String {
	hex::encode(sha1(data))
}

/// Copies the message and appends the 0x80 marker, zero fill up to 56 mod 64,
/// then the original bit length as a big endian u64.
fn pad(data: &[u8]) -> Result<Vec<u8>, Sha1Error> {
	let message_len_in_bits = u64::try_from(data.len())
		.ok()
		.and_then(|len| len.checked_mul(8))
		.ok_or(Sha1Error::InputTooLarge { len: data.len() })?;

	let zeros = (BLOCK_LEN + 55 - data.len() % BLOCK_LEN) % BLOCK_LEN;

	let mut padded = Vec::with_capacity(data.len() + 1 + zeros + 8);
	padded.extend_from_slice(data);
	padded.push(0x80_u8);
	padded.resize(padded.len() + zeros, 0_u8);
	padded.extend_from_slice(&message_len_in_bits.to_be_bytes());

	debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
	Ok(padded)
}

/// Extends a 64 byte block into the eighty 32-bit words consumed by the rounds.
fn message_schedule(block: &[u8]) -> [u32; 80] {
	let mut w = [0_u32; 80];

	// The first sixteen words are the block itself, big endian.
	for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
	}

	for i in 16..=79 {
		w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
	}
	w
}

/// Runs the 80 rounds over one block and adds the result into `h`.
fn compress(h: &mut [u32; 5], w: &[u32; 80]) {
	let [mut a, mut b, mut c, mut d, mut e] = *h;

	for (idx, &word) in w.iter().enumerate() {
		let (f, k) = match idx {
			0..=19 => ((b & c) | ((!b) & d), 0x5A827999),
			20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
			40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
			_ => (b ^ c ^ d, 0xCA62C1D6),
		};

		let temp: u32 = a
			.rotate_left(5)
			.wrapping_add(f)
			.wrapping_add(e)
			.wrapping_add(k)
			.wrapping_add(word);
		e = d;
		d = c;
		c = b.rotate_left(30);
		b = a;
		a = temp;
	}

	for (acc, reg) in h.iter_mut().zip([a, b, c, d, e]) {
		*acc = acc.wrapping_add(reg);
	}
}

fn finalize(h: &[u32; 5]) -> [u8; DIGEST_LEN] {
	let mut out = [0u8; DIGEST_LEN];
	for (slice, word) in out.chunks_exact_mut(4).zip(h) {
		slice.copy_from_slice(&word.to_be_bytes());
	}
	out
}
