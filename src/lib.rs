#![warn(missing_docs)]
//! A Rust implementation of the Keccak hash family, as submitted to the SHA-3
//! competition (before the FIPS 202 padding change).
//!
//! This library follows the [`Keccak reference`]. The sponge runs over the
//! 1600-bit Keccak-f permutation at the six security levels 128, 224, 256,
//! 288, 384 and 512. Keccak-256 is the hash Ethereum calls `keccak256`; it is
//! *not* SHA3-256.
//!
//! # Example
//! ```
//! use keccakhash::{keccak::KeccakDigest, keccak256};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let mut h = KeccakDigest::new(256)?;
//!   h.update("hello ".as_bytes())?;
//!   h.update("world".as_bytes())?;
//!   let output = h.finalize()?;
//!   println!("Result: {}", hex::encode(&output));
//!
//!   assert_eq!(output, keccak256::keccak256(b"hello world"));
//!   Ok(())
//! }
//! ```
//!
//! [`Keccak reference`]: https://keccak.team/files/Keccak-reference-3.0.pdf
/// `error` holds the error type shared by every module.
pub mod error;
/// `keccak` is the general sponge engine with a configurable security level.
pub mod keccak;
/// `keccak256` is the fixed 256-bit variant hashing a whole message in one call.
pub mod keccak256;
/// `params` maps security levels to sponge rates and digest sizes.
pub mod params;
/// `permutation` represents Keccak-f[1600], the transform applied between blocks.
pub mod permutation;

pub use error::{Error, Result};
pub use keccak::{KeccakDigest, Mode};
pub use keccak256::Keccak256Digest;
pub use params::SecurityLevel;
