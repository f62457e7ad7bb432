//! ff6save-crypto: the cipher envelope around FF6 save files
//!
//! Pipeline: password + salt → PBKDF2-HMAC-SHA1 (10 rounds) → key || iv
//!           plaintext → zero pad → Rijndael-CBC → ciphertext
//!
//! Key material layout:
//! ```text
//! PBKDF2 output (2 × block_size bytes)
//!   ├── [0, block_size)              cipher key
//!   └── [block_size, 2 × block_size) CBC initialization vector
//! ```
//!
//! The game uses 256-bit Rijndael blocks, which is why this crate carries its
//! own block primitive instead of an AES implementation (AES fixes the block at
//! 128 bits).

pub mod cbc;
pub mod kdf;
pub mod rijndael;
pub mod settings;

pub use cbc::{decrypt, encrypt, SaveCipher};
pub use kdf::{derive_key, KeyMaterial, KDF_ITERATIONS};
pub use rijndael::{BlockSize, Rijndael};
pub use settings::CryptoSettings;

/// Largest supported block (and key) size in bytes
pub const MAX_BLOCK_SIZE: usize = 32;
