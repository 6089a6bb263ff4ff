/// Number of 64-bit lanes in the Keccak-f[1600] state.
pub const LANES: usize = 25;

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Iota constants, indexed by round number.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets addressed as `ROTATION_OFFSETS[x][y]`.
pub const ROTATION_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];

// Lane 1 travels through every lane except 0 under pi. PI_CHAIN[i] is the
// destination of the i-th move and RHO_CHAIN[i] the rotation applied on the way.
const PI_CHAIN: [usize; LANES - 1] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
const RHO_CHAIN: [u32; LANES - 1] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Permutation represents the fixed-width transform a sponge runs between blocks.
///
/// Lanes are linearized as `state[y * 5 + x]`.
pub trait Permutation: Clone + Default {
    /// permute applies all rounds to the state in place.
    fn permute(&self, state: &mut [u64; LANES]);
}

/// KeccakF1600 is the production Keccak-f[1600]: theta over column parities,
/// rho and pi as one fixed cycle of lane moves, then chi row by row.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeccakF1600;

impl Permutation for KeccakF1600 {
    #[inline]
    fn permute(&self, state: &mut [u64; LANES]) {
        keccak_f1600(state)
    }
}

/// keccak_f1600 runs the 24-round permutation on a bare state.
pub fn keccak_f1600(a: &mut [u64; LANES]) {
    for rc in ROUND_CONSTANTS {
        // theta
        let c = [
            a[0] ^ a[5] ^ a[10] ^ a[15] ^ a[20],
            a[1] ^ a[6] ^ a[11] ^ a[16] ^ a[21],
            a[2] ^ a[7] ^ a[12] ^ a[17] ^ a[22],
            a[3] ^ a[8] ^ a[13] ^ a[18] ^ a[23],
            a[4] ^ a[9] ^ a[14] ^ a[19] ^ a[24],
        ];
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            a[x] ^= d;
            a[x + 5] ^= d;
            a[x + 10] ^= d;
            a[x + 15] ^= d;
            a[x + 20] ^= d;
        }

        // rho and pi
        let mut carry = a[1];
        for (&dst, &rot) in PI_CHAIN.iter().zip(RHO_CHAIN.iter()) {
            let next = a[dst];
            a[dst] = carry.rotate_left(rot);
            carry = next;
        }

        // chi
        for row in (0..LANES).step_by(5) {
            let b = [a[row], a[row + 1], a[row + 2], a[row + 3], a[row + 4]];
            a[row] = b[0] ^ (!b[1] & b[2]);
            a[row + 1] = b[1] ^ (!b[2] & b[3]);
            a[row + 2] = b[2] ^ (!b[3] & b[4]);
            a[row + 3] = b[3] ^ (!b[4] & b[0]);
            a[row + 4] = b[4] ^ (!b[0] & b[1]);
        }

        // iota
        a[0] ^= rc;
    }
}

/// ReferencePermutation computes Keccak-f[1600] straight from the step
/// definitions over a 5x5 lane matrix. It is slower than [`KeccakF1600`] and
/// exists to cross-check it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferencePermutation;

#[inline(always)]
fn lane(x: usize, y: usize) -> usize {
    y * 5 + x
}

impl Permutation for ReferencePermutation {
    fn permute(&self, a: &mut [u64; LANES]) {
        let mut b = [0u64; LANES];
        let mut c = [0u64; 5];

        for rc in ROUND_CONSTANTS {
            for x in 0..5 {
                c[x] = (0..5).fold(0, |acc, y| acc ^ a[lane(x, y)]);
            }
            for x in 0..5 {
                let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
                (0..5).for_each(|y| a[lane(x, y)] ^= d);
            }

            // (x, y) -> (y, 2x + 3y)
            for x in 0..5 {
                for y in 0..5 {
                    b[lane(y, (2 * x + 3 * y) % 5)] =
                        a[lane(x, y)].rotate_left(ROTATION_OFFSETS[x][y]);
                }
            }

            for x in 0..5 {
                for y in 0..5 {
                    a[lane(x, y)] =
                        b[lane(x, y)] ^ (!b[lane((x + 1) % 5, y)] & b[lane((x + 2) % 5, y)]);
                }
            }

            a[0] ^= rc;
        }
    }
}
