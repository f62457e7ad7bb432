//! Validated cipher inputs

use ff6save_core::config::CryptoConfig;
use ff6save_core::{SaveError, SaveResult};
use secrecy::{ExposeSecret, SecretString};

use crate::kdf::{derive_key, KeyMaterial};
use crate::rijndael::BlockSize;

/// Password, salt and block size, checked and ready for key derivation.
#[derive(Debug)]
pub struct CryptoSettings {
    password: SecretString,
    salt: SecretString,
    block: BlockSize,
}

impl CryptoSettings {
    pub fn new(
        password: impl Into<String>,
        salt: impl Into<String>,
        block_size: usize,
    ) -> SaveResult<Self> {
        Ok(Self {
            password: SecretString::from(password.into()),
            salt: SecretString::from(salt.into()),
            block: BlockSize::try_from(block_size)?,
        })
    }

    /// Build from the `[crypto]` config section; password and salt are required.
    pub fn from_config(config: &CryptoConfig) -> SaveResult<Self> {
        let password = config.password.clone().ok_or_else(|| {
            SaveError::Config("crypto.password is not set (or FF6_EDITOR_PASSWORD)".into())
        })?;
        let salt = config.salt.clone().ok_or_else(|| {
            SaveError::Config("crypto.salt is not set (or FF6_EDITOR_SALT)".into())
        })?;
        Self::new(password, salt, config.block_size)
    }

    pub fn block_size(&self) -> BlockSize {
        self.block
    }

    pub fn derive(&self) -> KeyMaterial {
        derive_key(
            self.password.expose_secret().as_bytes(),
            self.salt.expose_secret().as_bytes(),
            self.block,
        )
    }
}
