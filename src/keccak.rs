use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::params::{validate_rate, SecurityLevel};
use crate::permutation::{KeccakF1600, Permutation, LANES};

// Large enough for the widest rate (1344 bits, 168 bytes).
const QUEUE_SIZE: usize = 192;

/// Mode is the phase of the sponge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Input is accepted.
    Absorbing,
    /// Padding has been applied; only output can be extracted.
    Squeezing,
}

/// KeccakDigest is the Keccak sponge over a 1600-bit state.
///
/// The digest length is fixed by the security level chosen at construction.
/// It uses the original Keccak `pad10*1` padding, not the SHA-3 one, so its
/// output matches Ethereum-style `keccak256`.
#[derive(Clone, Debug)]
pub struct KeccakDigest<P: Permutation = KeccakF1600> {
    p: P,
    level: SecurityLevel,
    state: [u64; LANES],
    queue: [u8; QUEUE_SIZE], // pending input while absorbing, pending output while squeezing
    rate: usize,             // rate in bits
    bits_in_queue: usize,
    mode: Mode,
}

impl KeccakDigest {
    /// new returns an engine for the given bit length, which must be one of
    /// 128, 224, 256, 288, 384 or 512.
    pub fn new(bits: usize) -> Result<Self> {
        let level = SecurityLevel::from_bits(bits)?;
        validate_rate(level.rate_bits())?;
        Ok(Self::with_level(level))
    }

    /// with_level returns an engine for a known-good level.
    pub fn with_level(level: SecurityLevel) -> Self {
        Self::with_permutation(level, KeccakF1600)
    }
}

impl<P: Permutation> KeccakDigest<P> {
    /// with_permutation returns an engine that runs `p` as its Keccak-f[1600].
    pub fn with_permutation(level: SecurityLevel, p: P) -> Self {
        debug!("new {} sponge, rate {} bits", level, level.rate_bits());
        KeccakDigest {
            p,
            level,
            state: [0; LANES],
            queue: [0; QUEUE_SIZE],
            rate: level.rate_bits(),
            bits_in_queue: 0,
            mode: Mode::Absorbing,
        }
    }

    /// security_level returns the configured level.
    pub fn security_level(&self) -> SecurityLevel {
        self.level
    }

    /// digest_size returns the number of bytes finalize produces.
    pub fn digest_size(&self) -> usize {
        self.level.output_bytes()
    }

    /// block_size returns the rate in bytes.
    pub fn block_size(&self) -> usize {
        self.rate >> 3
    }

    /// mode reports whether the sponge is still absorbing.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// reset discards all absorbed input and squeezed output.
    pub fn reset(&mut self) {
        debug!("reset {} sponge", self.level);
        self.state = [0; LANES];
        self.queue = [0; QUEUE_SIZE];
        self.bits_in_queue = 0;
        self.mode = Mode::Absorbing;
    }

    /// update absorbs more input. It fails once finalize has been called
    /// without a reset, and then leaves the sponge untouched.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.bits_in_queue % 8 != 0 {
            return Err(Error::InvalidState("attempt to absorb with odd length queue"));
        }
        if self.mode == Mode::Squeezing {
            return Err(Error::InvalidState("attempt to absorb while squeezing"));
        }

        self.absorb(data);
        Ok(())
    }

    /// finalize pads the input and returns the digest. The sponge stays in
    /// [`Mode::Squeezing`] until [`reset`](Self::reset) is called.
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        let mut out = vec![0; self.digest_size()];
        self.finalize_into(&mut out)?;
        Ok(out)
    }

    /// finalize_into writes the digest to the front of `out` and returns its length.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize> {
        let size = self.digest_size();
        if out.len() < size {
            return Err(Error::InvalidArgument(format!(
                "output buffer too short: want {}, got {}",
                size,
                out.len()
            )));
        }
        if self.mode == Mode::Squeezing {
            return Err(Error::InvalidState("digest already finalized"));
        }

        self.squeeze_bits(&mut out[..size], self.level.output_bits())?;
        Ok(size)
    }

    /// finalize_reset returns the digest and leaves the sponge ready for a new message.
    pub fn finalize_reset(&mut self) -> Result<Vec<u8>> {
        let out = self.finalize()?;
        self.reset();
        Ok(out)
    }

    // absorb buffers partial blocks in the queue, and XORs whole blocks
    // straight from `data` when the queue is empty.
    pub(crate) fn absorb(&mut self, data: &[u8]) {
        let rate_bytes = self.rate >> 3;
        let mut bytes_in_queue = self.bits_in_queue >> 3;
        let mut count = 0;

        while count < data.len() {
            if bytes_in_queue == 0 && count + rate_bytes <= data.len() {
                while count + rate_bytes <= data.len() {
                    self.absorb_block(&data[count..count + rate_bytes]);
                    count += rate_bytes;
                }
            } else {
                let partial = (rate_bytes - bytes_in_queue).min(data.len() - count);
                self.queue[bytes_in_queue..bytes_in_queue + partial]
                    .copy_from_slice(&data[count..count + partial]);

                bytes_in_queue += partial;
                count += partial;

                if bytes_in_queue == rate_bytes {
                    self.absorb_queue();
                    bytes_in_queue = 0;
                }
            }
        }

        self.bits_in_queue = bytes_in_queue << 3;
    }

    fn absorb_block(&mut self, block: &[u8]) {
        xor_lanes(&mut self.state, block);
        self.p.permute(&mut self.state);
    }

    fn absorb_queue(&mut self) {
        let rate_bytes = self.rate >> 3;
        xor_lanes(&mut self.state, &self.queue[..rate_bytes]);
        self.p.permute(&mut self.state);
    }

    fn extract(&mut self) {
        let lanes = self.rate >> 6;
        LittleEndian::write_u64_into(&self.state[..lanes], &mut self.queue[..lanes << 3]);
    }

    fn pad_and_switch(&mut self) {
        trace!("{} sponge padding {} queued bits", self.level, self.bits_in_queue);

        // First bit of pad10*1, right after the last message bit.
        self.queue[self.bits_in_queue >> 3] |= 1 << (self.bits_in_queue & 7);
        self.bits_in_queue += 1;

        if self.bits_in_queue == self.rate {
            self.absorb_queue();
            self.bits_in_queue = 0;
        }

        let full = self.bits_in_queue >> 6;
        let partial = self.bits_in_queue & 63;

        xor_lanes(&mut self.state, &self.queue[..full << 3]);
        if partial > 0 {
            let mask = (1u64 << partial) - 1;
            let off = full << 3;
            self.state[full] ^= LittleEndian::read_u64(&self.queue[off..off + 8]) & mask;
        }

        // Final bit of pad10*1, the top bit of the last rate lane.
        self.state[(self.rate - 1) >> 6] ^= 1 << 63;

        self.p.permute(&mut self.state);
        self.extract();

        self.bits_in_queue = self.rate;
        self.mode = Mode::Squeezing;
    }

    // squeeze_bits fills `output` with the next `output_bits` of the stream.
    pub(crate) fn squeeze_bits(&mut self, output: &mut [u8], output_bits: usize) -> Result<()> {
        if output_bits % 8 != 0 {
            return Err(Error::InvalidArgument(format!(
                "output length {} is not a multiple of 8",
                output_bits
            )));
        }
        if output.len() < output_bits >> 3 {
            return Err(Error::InvalidArgument(format!(
                "output buffer too short: want {}, got {}",
                output_bits >> 3,
                output.len()
            )));
        }

        self.squeeze(&mut output[..output_bits >> 3]);

        if self.bits_in_queue % 8 != 0 {
            return Err(Error::InvalidState("queue holds a partial byte"));
        }
        Ok(())
    }

    pub(crate) fn squeeze(&mut self, output: &mut [u8]) {
        if self.mode == Mode::Absorbing {
            self.pad_and_switch();
        }

        let mut i = 0;
        while i < output.len() {
            if self.bits_in_queue == 0 {
                trace!("{} sponge refilling output queue", self.level);
                self.p.permute(&mut self.state);
                self.extract();
                self.bits_in_queue = self.rate;
            }

            let start = (self.rate - self.bits_in_queue) >> 3;
            let n = (self.bits_in_queue >> 3).min(output.len() - i);
            output[i..i + n].copy_from_slice(&self.queue[start..start + n]);

            self.bits_in_queue -= n << 3;
            i += n;
        }
    }
}

/// hash returns the digest of `data` at the given level.
pub fn hash(level: SecurityLevel, data: &[u8]) -> Vec<u8> {
    let mut d = KeccakDigest::with_level(level);
    d.absorb(data);
    let mut out = vec![0; level.output_bytes()];
    d.squeeze(&mut out);
    out
}

// xor_lanes folds a whole number of little-endian lanes into the front of the state.
fn xor_lanes(state: &mut [u64; LANES], data: &[u8]) {
    debug_assert!(data.len() % 8 == 0);
    data.chunks_exact(8)
        .zip(state.iter_mut())
        .for_each(|(b, s)| *s ^= LittleEndian::read_u64(b));
}
