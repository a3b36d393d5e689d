//! One-shot SHA-1 for rust.
//!
//! This crate hashes fully materialized messages.  It exposes the raw
//! compression function as well so that it can be benchmarked and reused
//! on its own.
//!
//! Example:
//!
//! ```rust
//! let digest = sha1_kernel::digest(b"Hello World!");
//! assert_eq!(digest.to_string(),
//!            "2ef7bde608ce5404e97d5f042f95f89f1c232871");
//! ```
//!
//! The crate is `no_std`.  The `alloc` feature adds [`hexdigest`] and the
//! `std` feature implements `std::error::Error` for [`DigestParseError`].
//! With the `serde` feature a [`Digest`] serializes as its hex string.
#![no_std]
#![deny(missing_docs)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

use core::fmt;
use core::str;

mod compress;
mod padding;

pub use crate::compress::{compress, BLOCK_LEN, STATE_LEN};
use crate::padding::Padding;

/// The length of a SHA-1 digest in bytes.
pub const DIGEST_LENGTH: usize = 20;

const DEFAULT_STATE: [u32; STATE_LEN] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Known answers used by [`self_check`].
pub static SELF_TEST_VECTORS: &[(&str, [u32; STATE_LEN])] = &[
    ("", [0xda39a3ee, 0x5e6b4b0d, 0x3255bfef, 0x95601890, 0xafd80709]),
    ("a", [0x86f7e437, 0xfaa5a7fc, 0xe15d1ddc, 0xb9eaeaea, 0x377667b8]),
    ("abc", [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]),
    ("message digest", [0xc12252ce, 0xda8be899, 0x4d5fa029, 0x0a47231c, 0x1d16aae3]),
    (
        "abcdefghijklmnopqrstuvwxyz",
        [0x32d10c7b, 0x8cf96570, 0xca04ce37, 0xf2a19d84, 0x240d3a89],
    ),
    (
        "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        [0x84983e44, 0x1c3bd26e, 0xbaae4aa1, 0xf95129e5, 0xe54670f1],
    ),
];

/// Hashes `message` and returns the final state words (A to E).
///
/// Whole blocks are compressed in input order, then the remaining tail
/// (0 to 63 bytes) goes through padding as one or two final blocks.
pub fn hash(message: &[u8]) -> [u32; STATE_LEN] {
    let mut state = DEFAULT_STATE;

    let mut blocks = message.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        let mut buf = [0u8; BLOCK_LEN];
        buf.copy_from_slice(block);
        compress(&mut state, &buf);
    }

    let padding = Padding::new(blocks.remainder(), message.len() as u64);
    for block in padding.blocks() {
        compress(&mut state, block);
    }

    state
}

/// Hashes `message` into a [`Digest`].
pub fn digest(message: &[u8]) -> Digest {
    Digest::from_state(hash(message))
}

/// Hashes `message` and returns the lowercase hex form of the digest.
#[cfg(feature = "alloc")]
pub fn hexdigest(message: &[u8]) -> alloc::string::String {
    use alloc::string::ToString;
    digest(message).to_string()
}

/// Verifies the implementation against [`SELF_TEST_VECTORS`].
pub fn self_check() -> bool {
    SELF_TEST_VECTORS
        .iter()
        .all(|&(message, expected)| hash(message.as_bytes()) == expected)
}

/// Digest generated from a SHA-1 hash.
///
/// Formats as 40 lowercase hex digits and can be parsed back from hex
/// with `str::parse`.
#[derive(PartialOrd, Ord, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Digest {
    state: [u32; STATE_LEN],
}

impl Digest {
    /// Wraps a final hash state.
    pub fn from_state(state: [u32; STATE_LEN]) -> Digest {
        Digest { state }
    }

    /// Returns the state words, A first.
    pub fn state(&self) -> [u32; STATE_LEN] {
        self.state
    }

    /// Returns the 20 byte digest, each word written big endian.
    pub fn bytes(&self) -> [u8; DIGEST_LENGTH] {
        let mut out = [0u8; DIGEST_LENGTH];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// The error returned when parsing a [`Digest`] from a string fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestParseError(());

impl fmt::Display for DigestParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid sha1 hash")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigestParseError {}

impl str::FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Digest, DigestParseError> {
        if s.len() != DIGEST_LENGTH * 2 {
            return Err(DigestParseError(()));
        }
        let mut state = [0u32; STATE_LEN];
        for (word, chunk) in state.iter_mut().zip(s.as_bytes().chunks(8)) {
            let chunk = str::from_utf8(chunk).map_err(|_| DigestParseError(()))?;
            if !chunk.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(DigestParseError(()));
            }
            *word = u32::from_str_radix(chunk, 16).map_err(|_| DigestParseError(()))?;
        }
        Ok(Digest { state })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.state.iter() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest {{ \"{}\" }}", self)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for Digest {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::de::Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Digest, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct V;

        impl<'de> serde::de::Visitor<'de> for V {
            type Value = Digest;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("SHA-1 hash")
            }

            fn visit_str<E>(self, value: &str) -> Result<Digest, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(|_| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Str(value), &self)
                })
            }
        }

        deserializer.deserialize_str(V)
    }
}
