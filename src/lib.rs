pub mod rand_seq;
pub mod sha1;

pub use crate::rand_seq::rand_seq;
pub use crate::sha1::{sha1, sha1_hex, try_sha1, Sha1Error, BLOCK_LEN, DIGEST_LEN};
