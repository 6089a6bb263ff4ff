use crate::keccak::KeccakDigest;
use crate::params::SecurityLevel;

/// DigestSize is the size in bytes of the keccak256 checksum.
pub const DIGEST_SIZE: usize = 32;

/// DigestBlockSize is the block size, in bytes, of keccak256.
pub const DIGEST_BLOCK_SIZE: usize = 136;

/// Rate is the keccak256 rate in bits.
pub const RATE: usize = 1088;

/// Keccak256Digest hashes whole messages to 32 bytes. It holds no state, so
/// every call is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Digest;

impl Keccak256Digest {
    /// new returns a keccak256 hasher.
    pub fn new() -> Self {
        Keccak256Digest
    }

    /// digest returns the keccak256 hash of `input`.
    pub fn digest(&self, input: &[u8]) -> [u8; DIGEST_SIZE] {
        keccak256(input)
    }
}

/// keccak256 returns the 32-byte Keccak-256 hash of `input`.
pub fn keccak256(input: &[u8]) -> [u8; DIGEST_SIZE] {
    fixed(SecurityLevel::L256, input)
}

/// keccak224 returns the 28-byte Keccak-224 hash of `input`.
pub fn keccak224(input: &[u8]) -> [u8; 28] {
    fixed(SecurityLevel::L224, input)
}

/// keccak384 returns the 48-byte Keccak-384 hash of `input`.
pub fn keccak384(input: &[u8]) -> [u8; 48] {
    fixed(SecurityLevel::L384, input)
}

/// keccak512 returns the 64-byte Keccak-512 hash of `input`.
pub fn keccak512(input: &[u8]) -> [u8; 64] {
    fixed(SecurityLevel::L512, input)
}

fn fixed<const N: usize>(level: SecurityLevel, input: &[u8]) -> [u8; N] {
    debug_assert_eq!(level.output_bytes(), N);
    let mut d = KeccakDigest::with_level(level);
    d.absorb(input);
    let mut out = [0; N];
    d.squeeze(&mut out);
    out
}
