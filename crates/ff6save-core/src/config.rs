use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::{SaveError, SaveResult};

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "FF6_EDITOR_";

/// Block size the game's cipher uses (256-bit Rijndael blocks)
pub const DEFAULT_BLOCK_SIZE: usize = 32;

/// Top-level editor configuration (loaded from ff6-editor.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub crypto: CryptoConfig,
    pub log: LogConfig,
}

/// Key derivation inputs for the save-file cipher.
///
/// Both secrets are supplied by the user; the editor ships no defaults.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoConfig {
    /// PBKDF2 password
    pub password: Option<String>,
    /// PBKDF2 salt
    pub salt: Option<String>,
    /// Cipher block size in bytes (default: 32)
    pub block_size: usize,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            password: None,
            salt: None,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl std::fmt::Debug for CryptoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoConfig")
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("salt", &self.salt.as_ref().map(|_| "[REDACTED]"))
            .field("block_size", &self.block_size)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (default: info)
    pub level: String,
    /// Log format: "json" or "text"
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl EditorConfig {
    /// Load the config file at `path` (defaults if absent), then apply
    /// `FF6_EDITOR_*` overrides from the process environment.
    pub fn load(path: &Path) -> SaveResult<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
                .map_err(|e| SaveError::Config(format!("parsing {}: {e}", path.display())))?
        } else {
            warn!("config file not found: {}  (using defaults)", path.display());
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Override fields from `FF6_EDITOR_PASSWORD`, `FF6_EDITOR_SALT` and
    /// `FF6_EDITOR_BLOCK_SIZE` as resolved by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> SaveResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(password) = var("PASSWORD") {
            self.crypto.password = Some(password);
        }
        if let Some(salt) = var("SALT") {
            self.crypto.salt = Some(salt);
        }
        if let Some(raw) = var("BLOCK_SIZE") {
            self.crypto.block_size = raw.trim().parse().map_err(|e| {
                SaveError::Config(format!("{ENV_PREFIX}BLOCK_SIZE={raw:?}: {e}"))
            })?;
        }
        Ok(())
    }

    /// Copy suitable for display: secrets replaced by a marker.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        let mask = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]".to_string());
        copy.crypto.password = mask(&self.crypto.password);
        copy.crypto.salt = mask(&self.crypto.salt);
        copy
    }
}
