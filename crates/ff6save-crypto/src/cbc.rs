//! Rijndael-CBC with zero padding
//!
//! Encryption pads the plaintext with `0x00` up to the next block boundary
//! (nothing is added when it is already aligned). Zero padding is not
//! self-describing, so decryption returns every decrypted byte: trailing
//! zeros are kept as padding rather than guessed away.

use ff6save_core::{SaveError, SaveResult};
use tracing::debug;
use zeroize::Zeroize;

use crate::kdf::KeyMaterial;
use crate::rijndael::{BlockSize, Rijndael};
use crate::settings::CryptoSettings;

/// The save-file cipher: a keyed Rijndael instance plus its CBC IV.
#[derive(Debug)]
pub struct SaveCipher {
    block: Rijndael,
    iv: Vec<u8>,
}

impl SaveCipher {
    /// Derive key material from `settings` and key the cipher.
    pub fn new(settings: &CryptoSettings) -> SaveResult<Self> {
        Self::from_key_material(&settings.derive())
    }

    pub fn from_key_material(material: &KeyMaterial) -> SaveResult<Self> {
        Self::from_key_iv(material.key(), material.iv(), material.block_size().bytes())
    }

    /// Key the cipher directly. `iv` must be exactly one block long.
    pub fn from_key_iv(key: &[u8], iv: &[u8], block_size: usize) -> SaveResult<Self> {
        let size = BlockSize::try_from(block_size)?;
        if iv.len() != size.bytes() {
            return Err(SaveError::CipherConfiguration(format!(
                "IV is {} bytes, block size is {}",
                iv.len(),
                size.bytes()
            )));
        }
        Ok(Self {
            block: Rijndael::new(key, size)?,
            iv: iv.to_vec(),
        })
    }

    pub fn block_size(&self) -> BlockSize {
        self.block.block_size()
    }

    /// Zero-pad `plaintext` to a whole number of blocks and CBC-encrypt it.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let n = self.block.block_size().bytes();
        let mut buf = plaintext.to_vec();
        buf.resize(plaintext.len().div_ceil(n) * n, 0);

        let mut prev = self.iv.clone();
        for chunk in buf.chunks_exact_mut(n) {
            for (b, p) in chunk.iter_mut().zip(&prev) {
                *b ^= p;
            }
            self.block.encrypt_block(chunk);
            prev.copy_from_slice(chunk);
        }

        debug!(
            plaintext = plaintext.len(),
            ciphertext = buf.len(),
            "encrypted"
        );
        buf
    }

    /// CBC-decrypt `ciphertext`, which must be block aligned. The output has
    /// the same length as the input, zero padding included.
    pub fn decrypt(&self, ciphertext: &[u8]) -> SaveResult<Vec<u8>> {
        let n = self.block.block_size().bytes();
        if ciphertext.len() % n != 0 {
            return Err(SaveError::UnalignedCiphertext {
                len: ciphertext.len(),
                block_size: n,
            });
        }

        let mut buf = ciphertext.to_vec();
        let mut prev = self.iv.clone();
        for (chunk, original) in buf.chunks_exact_mut(n).zip(ciphertext.chunks_exact(n)) {
            self.block.decrypt_block(chunk);
            for (b, p) in chunk.iter_mut().zip(&prev) {
                *b ^= p;
            }
            prev.copy_from_slice(original);
        }

        debug!(ciphertext = ciphertext.len(), "decrypted");
        Ok(buf)
    }
}

impl Drop for SaveCipher {
    fn drop(&mut self) {
        self.iv.zeroize();
    }
}

/// One-shot encryption with explicit key material.
pub fn encrypt(key: &[u8], iv: &[u8], block_size: usize, plaintext: &[u8]) -> SaveResult<Vec<u8>> {
    Ok(SaveCipher::from_key_iv(key, iv, block_size)?.encrypt(plaintext))
}

/// One-shot decryption with explicit key material.
pub fn decrypt(key: &[u8], iv: &[u8], block_size: usize, ciphertext: &[u8]) -> SaveResult<Vec<u8>> {
    SaveCipher::from_key_iv(key, iv, block_size)?.decrypt(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::derive_key;
    use proptest::prelude::*;

    const PASSWORD: &str = "Xh+j8rxRhM+n/SSu3rLAEpYCcNV4vdH6";
    const SALT: &str = "RPoru8ebLkjoVHA3+9CprAFROjJyQ9hm";

    fn game_cipher() -> SaveCipher {
        SaveCipher::new(&CryptoSettings::new(PASSWORD, SALT, 32).unwrap()).unwrap()
    }

    fn other_cipher(password: &str, salt: &str) -> SaveCipher {
        SaveCipher::new(&CryptoSettings::new(password, salt, 32).unwrap()).unwrap()
    }

    #[test]
    fn test_encrypt_known_vector() {
        let value = b"cItYc1GeUcjXH7QMaMR5RI6vIDPrIPKZ";
        let expected: [u8; 32] = [
            0xa0, 0x23, 0x0a, 0x94, 0x87, 0x92, 0x26, 0x7c, 0xff, 0x6d, 0x82, 0xed, 0xb5, 0xe9,
            0xe2, 0x72, 0x25, 0x39, 0xc3, 0xe9, 0xf8, 0x82, 0x3e, 0xbd, 0x72, 0x5a, 0xa9, 0xb9,
            0x87, 0x99, 0x52, 0xc9,
        ];

        let cipher = game_cipher();
        let encrypted = cipher.encrypt(value);
        assert_eq!(encrypted, expected);

        // Ensure round trip
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), value);
    }

    #[test]
    fn test_decrypt_known_vector() {
        let value = b"LW8oL50H9SnzXxF/z8jQKHvkIuTKyoNZ";
        let expected: [u8; 32] = [
            0x13, 0xb9, 0x40, 0x18, 0xa8, 0x55, 0x03, 0x83, 0x0f, 0xed, 0x09, 0x72, 0x8d, 0xd0,
            0x9f, 0x2e, 0xbc, 0x60, 0xd3, 0x84, 0x6a, 0x6f, 0xc2, 0xb2, 0x21, 0x04, 0xf8, 0x9e,
            0xad, 0x02, 0xb3, 0xb5,
        ];

        let cipher = game_cipher();
        let decrypted = cipher.decrypt(value).unwrap();
        assert_eq!(decrypted, expected);

        // Ensure round trip
        assert_eq!(cipher.encrypt(&decrypted), value);
    }

    #[test]
    fn test_free_functions_match_cipher() {
        let material = derive_key(PASSWORD.as_bytes(), SALT.as_bytes(), BlockSize::Bits256);
        let plaintext = b"free functions take raw key material";

        let a = encrypt(material.key(), material.iv(), 32, plaintext).unwrap();
        let b = game_cipher().encrypt(plaintext);
        assert_eq!(a, b);

        let back = decrypt(material.key(), material.iv(), 32, &a).unwrap();
        assert_eq!(&back[..plaintext.len()], plaintext);
    }

    #[test]
    fn test_zero_padding_to_block_boundary() {
        let cipher = game_cipher();

        let encrypted = cipher.encrypt(b"short");
        assert_eq!(encrypted.len(), 32);

        let decrypted = cipher.decrypt(&encrypted).unwrap();
        assert_eq!(decrypted.len(), 32);
        assert_eq!(&decrypted[..5], b"short");
        assert!(decrypted[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_aligned_input_gets_no_extra_block() {
        let cipher = game_cipher();
        assert_eq!(cipher.encrypt(&[1u8; 64]).len(), 64);
        assert!(cipher.encrypt(b"").is_empty());
    }

    #[test]
    fn test_unaligned_ciphertext_rejected() {
        let err = game_cipher().decrypt(&[0u8; 33]).unwrap_err();
        assert!(matches!(
            err,
            SaveError::UnalignedCiphertext {
                len: 33,
                block_size: 32
            }
        ));
    }

    #[test]
    fn test_wrong_iv_length_rejected() {
        let err = SaveCipher::from_key_iv(&[0u8; 32], &[0u8; 16], 32).unwrap_err();
        assert!(matches!(err, SaveError::CipherConfiguration(_)));
    }

    #[test]
    fn test_different_settings_differ_and_do_not_cross_decrypt() {
        let value = b"0123456789abcdefghijklmnopqrstuv";
        let enc1 = game_cipher();
        let enc2 = other_cipher("a-completely-different-password", "and-a-different-salt-value-here");

        let encrypted1 = enc1.encrypt(value);
        let encrypted2 = enc2.encrypt(value);

        // Both encrypted values should be different
        assert_ne!(encrypted1, encrypted2);

        // Both should round trip back to the right value
        assert_eq!(enc1.decrypt(&encrypted1).unwrap(), value);
        assert_eq!(enc2.decrypt(&encrypted2).unwrap(), value);

        // Swapping ciphers should _not_ decrypt to the right value
        assert_ne!(enc1.decrypt(&encrypted2).unwrap(), value);
        assert_ne!(enc2.decrypt(&encrypted1).unwrap(), value);
    }

    #[test]
    fn test_cbc_chains_identical_blocks() {
        let cipher = game_cipher();
        let encrypted = cipher.encrypt(&[0x41u8; 64]);
        assert_ne!(encrypted[..32], encrypted[32..], "CBC must not repeat blocks");
    }

    #[test]
    fn test_every_length_at_every_block_size() {
        for block_size in [16usize, 24, 32] {
            let cipher = SaveCipher::new(&CryptoSettings::new(PASSWORD, SALT, block_size).unwrap())
                .unwrap();
            for len in 0..=3 * block_size + 1 {
                let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
                let encrypted = cipher.encrypt(&plaintext);
                assert_eq!(encrypted.len(), len.div_ceil(block_size) * block_size);

                let decrypted = cipher.decrypt(&encrypted).unwrap();
                assert_eq!(&decrypted[..len], &plaintext[..]);
                assert!(decrypted[len..].iter().all(|&b| b == 0));
            }
            let err = cipher.decrypt(&vec![0u8; block_size + 1]).unwrap_err();
            assert!(matches!(err, SaveError::UnalignedCiphertext { .. }));
        }
    }

    proptest! {
        #[test]
        fn encrypt_decrypt_roundtrip(
            data in proptest::collection::vec(any::<u8>(), 0..=512),
            block_size in prop::sample::select(vec![16usize, 24, 32]),
        ) {
            let settings = CryptoSettings::new(PASSWORD, SALT, block_size).unwrap();
            let cipher = SaveCipher::new(&settings).unwrap();

            let encrypted = cipher.encrypt(&data);
            prop_assert_eq!(encrypted.len() % block_size, 0);

            let mut expected = data.clone();
            expected.resize(encrypted.len(), 0);
            prop_assert_eq!(cipher.decrypt(&encrypted).unwrap(), expected);
        }

        #[test]
        fn encryption_is_deterministic(data in proptest::collection::vec(any::<u8>(), 1..=256)) {
            prop_assert_eq!(game_cipher().encrypt(&data), game_cipher().encrypt(&data));
        }
    }
}
