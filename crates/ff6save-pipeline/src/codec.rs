//! Load and save flows around one keyed cipher.

use std::io::Write;
use std::path::Path;

use ff6save_core::{SaveError, SaveResult};
use ff6save_crypto::{CryptoSettings, SaveCipher};
use ff6save_schema::{decode_save, encode_save, SaveDocument};
use tracing::{debug, info};

/// Save-file codec: the cipher is keyed once and reused for every file.
#[derive(Debug)]
pub struct SaveCodec {
    cipher: SaveCipher,
}

impl SaveCodec {
    pub fn new(settings: &CryptoSettings) -> SaveResult<Self> {
        Ok(Self {
            cipher: SaveCipher::new(settings)?,
        })
    }

    /// Decrypt and inflate, returning the top-level JSON text as bytes.
    pub fn open_json(&self, ciphertext: &[u8]) -> SaveResult<Vec<u8>> {
        let compressed = self.cipher.decrypt(ciphertext)?;
        let json = ff6save_deflate::decompress(&compressed)?;
        debug!(
            ciphertext = ciphertext.len(),
            compressed = compressed.len(),
            json = json.len(),
            "opened save payload"
        );
        Ok(json)
    }

    /// Deflate and encrypt top-level JSON bytes.
    pub fn seal_json(&self, json: &[u8]) -> SaveResult<Vec<u8>> {
        let compressed = ff6save_deflate::compress(json)?;
        let ciphertext = self.cipher.encrypt(&compressed);
        debug!(
            json = json.len(),
            compressed = compressed.len(),
            ciphertext = ciphertext.len(),
            "sealed save payload"
        );
        Ok(ciphertext)
    }

    pub fn decode_bytes(&self, ciphertext: &[u8]) -> SaveResult<SaveDocument> {
        decode_save(&self.open_json(ciphertext)?)
    }

    pub fn encode_bytes(&self, doc: &SaveDocument) -> SaveResult<Vec<u8>> {
        self.seal_json(&encode_save(doc)?)
    }

    /// Read and decode the save at `path`.
    pub fn load(&self, path: &Path) -> SaveResult<SaveDocument> {
        let ciphertext = std::fs::read(path)?;
        let doc = self.decode_bytes(&ciphertext)?;
        info!(path = %path.display(), bytes = ciphertext.len(), "loaded save");
        Ok(doc)
    }

    /// Encode `doc` and replace the file at `path`.
    ///
    /// The ciphertext goes to a temporary file in the destination directory
    /// first and is then renamed over `path`.
    pub fn save(&self, doc: &SaveDocument, path: &Path) -> SaveResult<()> {
        let ciphertext = self.encode_bytes(doc)?;
        write_atomic(path, &ciphertext)?;
        info!(path = %path.display(), bytes = ciphertext.len(), "saved");
        Ok(())
    }
}

/// One-shot load with fresh key derivation.
pub fn load(path: &Path, settings: &CryptoSettings) -> SaveResult<SaveDocument> {
    SaveCodec::new(settings)?.load(path)
}

/// One-shot save with fresh key derivation.
pub fn save(doc: &SaveDocument, path: &Path, settings: &CryptoSettings) -> SaveResult<()> {
    SaveCodec::new(settings)?.save(doc, path)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> SaveResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| SaveError::Io(e.error))?;
    Ok(())
}
