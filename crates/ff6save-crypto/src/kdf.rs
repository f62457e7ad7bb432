//! Key derivation: PBKDF2-HMAC-SHA1 password + salt → cipher key || IV
//!
//! SHA-1 and the round count are fixed by the game's save format.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroize;

use crate::rijndael::BlockSize;

/// PBKDF2 round count used by the game
pub const KDF_ITERATIONS: u32 = 10;

/// Derived cipher key and initialization vector, each one block long.
///
/// Zeroized on drop to prevent secrets lingering in memory.
pub struct KeyMaterial {
    bytes: Vec<u8>,
    block: BlockSize,
}

impl KeyMaterial {
    pub fn key(&self) -> &[u8] {
        &self.bytes[..self.block.bytes()]
    }

    pub fn iv(&self) -> &[u8] {
        &self.bytes[self.block.bytes()..]
    }

    pub fn block_size(&self) -> BlockSize {
        self.block
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("block", &self.block)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive `2 × block` bytes from `password` and `salt`; the first block is
/// the key and the second the IV.
pub fn derive_key(password: &[u8], salt: &[u8], block: BlockSize) -> KeyMaterial {
    let mut bytes = vec![0u8; 2 * block.bytes()];
    pbkdf2_hmac::<Sha1>(password, salt, KDF_ITERATIONS, &mut bytes);
    KeyMaterial { bytes, block }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &[u8] = b"Xh+j8rxRhM+n/SSu3rLAEpYCcNV4vdH6";
    const SALT: &[u8] = b"RPoru8ebLkjoVHA3+9CprAFROjJyQ9hm";

    #[test]
    fn test_kdf_known_output() {
        let material = derive_key(PASSWORD, SALT, BlockSize::Bits256);

        let expected_key = [
            0xdd, 0x05, 0x2f, 0x64, 0xda, 0x3f, 0xae, 0x72, 0x72, 0xbb, 0xda, 0x67, 0x99, 0xea,
            0xe0, 0x29, 0xc6, 0xf2, 0x8d, 0x7f, 0x46, 0xd6, 0x4c, 0xef, 0xfc, 0xbb, 0x62, 0xab,
            0xc0, 0xb5, 0x48, 0xce,
        ];
        let expected_iv = [
            0xb2, 0x8d, 0xd9, 0x26, 0xc4, 0x8f, 0x13, 0x1c, 0xf1, 0xa9, 0x25, 0x3f, 0x44, 0x9e,
            0xf9, 0xe6, 0xaf, 0x04, 0x50, 0xcb, 0xbd, 0xc0, 0x3d, 0xa5, 0xfc, 0x79, 0xa0, 0xc8,
            0x69, 0x73, 0x39, 0x03,
        ];
        assert_eq!(material.key(), expected_key);
        assert_eq!(material.iv(), expected_iv);
    }

    #[test]
    fn test_kdf_deterministic() {
        let a = derive_key(PASSWORD, SALT, BlockSize::Bits256);
        let b = derive_key(PASSWORD, SALT, BlockSize::Bits256);

        assert_eq!(a.key(), b.key(), "KDF must be deterministic");
        assert_eq!(a.iv(), b.iv());
    }

    #[test]
    fn test_kdf_lengths_follow_block_size() {
        for block in [BlockSize::Bits128, BlockSize::Bits192, BlockSize::Bits256] {
            let material = derive_key(PASSWORD, SALT, block);
            assert_eq!(material.key().len(), block.bytes());
            assert_eq!(material.iv().len(), block.bytes());
        }
    }

    #[test]
    fn test_kdf_different_passwords() {
        let a = derive_key(b"password-a", SALT, BlockSize::Bits256);
        let b = derive_key(b"password-b", SALT, BlockSize::Bits256);

        assert_ne!(a.key(), b.key(), "different passwords must produce different keys");
    }

    #[test]
    fn test_kdf_different_salts() {
        let a = derive_key(PASSWORD, b"salt-a", BlockSize::Bits256);
        let b = derive_key(PASSWORD, b"salt-b", BlockSize::Bits256);

        assert_ne!(a.key(), b.key(), "different salts must produce different keys");
    }
}
