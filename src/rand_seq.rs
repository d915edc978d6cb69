use rand::Rng;

/// Characters drawn by [`rand_seq`].
pub const CHARSET: &[u8] =
	b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~";

/// Random printable ASCII string of `n` characters, for tests and benchmarks.
pub fn rand_seq<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
	(0..n)
		.map(|_| char::from(CHARSET[rng.gen_range(0..CHARSET.len())]))
		.collect()
}
