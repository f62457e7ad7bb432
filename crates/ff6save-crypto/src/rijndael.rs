//! Rijndael block cipher with a variable block width
//!
//! Byte-oriented implementation of the reference algorithm. The state is kept
//! in input order, so column `c` is `state[4c..4c + 4]`. With a 128-bit block
//! this is exactly AES.

use ff6save_core::{SaveError, SaveResult};
use zeroize::Zeroize;

use crate::MAX_BLOCK_SIZE;

/// Supported Rijndael block widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSize {
    Bits128,
    Bits192,
    Bits256,
}

impl BlockSize {
    /// Block width in bytes
    pub fn bytes(self) -> usize {
        match self {
            BlockSize::Bits128 => 16,
            BlockSize::Bits192 => 24,
            BlockSize::Bits256 => 32,
        }
    }

    /// Number of 32-bit state columns (Nb)
    fn columns(self) -> usize {
        self.bytes() / 4
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = SaveError;

    fn try_from(bytes: usize) -> SaveResult<Self> {
        match bytes {
            16 => Ok(BlockSize::Bits128),
            24 => Ok(BlockSize::Bits192),
            32 => Ok(BlockSize::Bits256),
            other => Err(SaveError::CipherConfiguration(format!(
                "unsupported block size {other} bytes (expected 16, 24 or 32)"
            ))),
        }
    }
}

const fn xtime(a: u8) -> u8 {
    (a << 1) ^ if a & 0x80 != 0 { 0x1b } else { 0 }
}

fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    p
}

/// S-box from the multiplicative inverse (via log/exp tables over generator 3)
/// followed by the affine transform.
const fn build_sbox() -> [u8; 256] {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u8 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x;
        log[x as usize] = i as u8;
        x ^= xtime(x);
        i += 1;
    }

    let mut sbox = [0u8; 256];
    let mut n = 0;
    while n < 256 {
        let inv = if n == 0 {
            0
        } else {
            exp[(255 - log[n] as usize) % 255]
        };
        sbox[n] = inv
            ^ inv.rotate_left(1)
            ^ inv.rotate_left(2)
            ^ inv.rotate_left(3)
            ^ inv.rotate_left(4)
            ^ 0x63;
        n += 1;
    }
    sbox
}

const fn invert(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[sbox[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

const SBOX: [u8; 256] = build_sbox();
const INV_SBOX: [u8; 256] = invert(&SBOX);

/// Left rotation applied to each state row; rows 1..3 shift further at Nb = 8.
fn row_shifts(columns: usize) -> [usize; 4] {
    if columns == 8 {
        [0, 1, 3, 4]
    } else {
        [0, 1, 2, 3]
    }
}

/// A keyed Rijndael instance. Round keys are zeroized on drop.
pub struct Rijndael {
    round_keys: Vec<u8>,
    rounds: usize,
    block: BlockSize,
}

impl Rijndael {
    /// Expand `key` (16, 24 or 32 bytes) for blocks of width `block`.
    pub fn new(key: &[u8], block: BlockSize) -> SaveResult<Self> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(SaveError::CipherConfiguration(format!(
                "unsupported key length {} bytes (expected 16, 24 or 32)",
                key.len()
            )));
        }

        let key_words = key.len() / 4;
        let columns = block.columns();
        let rounds = key_words.max(columns) + 6;
        let total = 4 * columns * (rounds + 1);

        let mut w = Vec::with_capacity(total);
        w.extend_from_slice(key);
        let mut rcon = 1u8;
        let mut i = key_words;
        while w.len() < total {
            let len = w.len();
            let mut t = [w[len - 4], w[len - 3], w[len - 2], w[len - 1]];
            if i % key_words == 0 {
                t.rotate_left(1);
                sub_bytes(&mut t);
                t[0] ^= rcon;
                rcon = xtime(rcon);
            } else if key_words > 6 && i % key_words == 4 {
                sub_bytes(&mut t);
            }
            let base = len - 4 * key_words;
            for (j, byte) in t.iter().enumerate() {
                let word = w[base + j] ^ byte;
                w.push(word);
            }
            i += 1;
        }

        Ok(Self {
            round_keys: w,
            rounds,
            block,
        })
    }

    pub fn block_size(&self) -> BlockSize {
        self.block
    }

    /// Encrypt one block in place. `state.len()` must equal the block size.
    pub(crate) fn encrypt_block(&self, state: &mut [u8]) {
        debug_assert_eq!(state.len(), self.block.bytes());

        self.add_round_key(state, 0);
        for round in 1..=self.rounds {
            sub_bytes(state);
            self.shift_rows(state);
            if round != self.rounds {
                mix_columns(state);
            }
            self.add_round_key(state, round);
        }
    }

    /// Decrypt one block in place. `state.len()` must equal the block size.
    pub(crate) fn decrypt_block(&self, state: &mut [u8]) {
        debug_assert_eq!(state.len(), self.block.bytes());

        self.add_round_key(state, self.rounds);
        for round in (0..self.rounds).rev() {
            self.inv_shift_rows(state);
            inv_sub_bytes(state);
            self.add_round_key(state, round);
            if round != 0 {
                inv_mix_columns(state);
            }
        }
    }

    fn add_round_key(&self, state: &mut [u8], round: usize) {
        let n = state.len();
        let key = &self.round_keys[round * n..(round + 1) * n];
        for (s, k) in state.iter_mut().zip(key) {
            *s ^= k;
        }
    }

    fn shift_rows(&self, state: &mut [u8]) {
        let columns = self.block.columns();
        let shifts = row_shifts(columns);
        let mut old = [0u8; MAX_BLOCK_SIZE];
        old[..state.len()].copy_from_slice(state);
        for c in 0..columns {
            for row in 1..4 {
                state[4 * c + row] = old[4 * ((c + shifts[row]) % columns) + row];
            }
        }
    }

    fn inv_shift_rows(&self, state: &mut [u8]) {
        let columns = self.block.columns();
        let shifts = row_shifts(columns);
        let mut old = [0u8; MAX_BLOCK_SIZE];
        old[..state.len()].copy_from_slice(state);
        for c in 0..columns {
            for row in 1..4 {
                state[4 * ((c + shifts[row]) % columns) + row] = old[4 * c + row];
            }
        }
    }
}

impl Drop for Rijndael {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

impl std::fmt::Debug for Rijndael {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rijndael")
            .field("block", &self.block)
            .field("rounds", &self.rounds)
            .field("round_keys", &"[REDACTED]")
            .finish()
    }
}

fn sub_bytes(state: &mut [u8]) {
    for b in state.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

fn inv_sub_bytes(state: &mut [u8]) {
    for b in state.iter_mut() {
        *b = INV_SBOX[*b as usize];
    }
}

fn mix_columns(state: &mut [u8]) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gmul(a0, 2) ^ gmul(a1, 3) ^ a2 ^ a3;
        col[1] = a0 ^ gmul(a1, 2) ^ gmul(a2, 3) ^ a3;
        col[2] = a0 ^ a1 ^ gmul(a2, 2) ^ gmul(a3, 3);
        col[3] = gmul(a0, 3) ^ a1 ^ a2 ^ gmul(a3, 2);
    }
}

fn inv_mix_columns(state: &mut [u8]) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gmul(a0, 14) ^ gmul(a1, 11) ^ gmul(a2, 13) ^ gmul(a3, 9);
        col[1] = gmul(a0, 9) ^ gmul(a1, 14) ^ gmul(a2, 11) ^ gmul(a3, 13);
        col[2] = gmul(a0, 13) ^ gmul(a1, 9) ^ gmul(a2, 14) ^ gmul(a3, 11);
        col[3] = gmul(a0, 11) ^ gmul(a1, 13) ^ gmul(a2, 9) ^ gmul(a3, 14);
    }
}
