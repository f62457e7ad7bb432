use std::io::{Read, Write};

use ff6save_core::{SaveError, SaveResult};
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use tracing::debug;

/// Compress `data` into a raw deflate stream (zlib's default level 6).
pub fn compress(data: &[u8]) -> SaveResult<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(
        Vec::with_capacity(data.len() / 2 + 64),
        Compression::default(),
    );
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;

    debug!(raw = data.len(), compressed = compressed.len(), "deflated");
    Ok(compressed)
}

/// Inflate a raw deflate stream.
///
/// Bytes after the end-of-stream marker are ignored, which is what lets the
/// zero padding left by the cipher pass through untouched.
pub fn decompress(data: &[u8]) -> SaveResult<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::with_capacity(data.len() * 4);
    decoder.read_to_end(&mut out).map_err(SaveError::Decode)?;

    debug!(compressed = data.len(), raw = out.len(), "inflated");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn round_trip_small() {
        let data = br#"{"id":1,"pictureData":"","playTime":123.5}"#;
        let compressed = compress(data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn round_trip_empty() {
        let compressed = compress(b"").unwrap();
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn no_zlib_header() {
        let compressed = compress(&[b'a'; 4096]).unwrap();
        // A zlib stream would start with 0x78 (CM = 8, 32 KiB window)
        assert_ne!(compressed[0], 0x78);
        assert!(compressed.len() < 4096);
    }

    #[test]
    fn trailing_zero_padding_ignored() {
        let data = b"payload followed by cipher padding";
        let mut compressed = compress(data).unwrap();
        compressed.extend_from_slice(&[0u8; 31]);

        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn malformed_stream_is_decode_error() {
        // BFINAL = 1, BTYPE = 11 (reserved)
        let err = decompress(&[0xFF; 16]).unwrap_err();
        assert!(matches!(err, SaveError::Decode(_)));
    }

    proptest! {
        #[test]
        fn compress_decompress_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..=65536)) {
            let compressed = compress(&data).unwrap();
            prop_assert_eq!(decompress(&compressed).unwrap(), data, "round-trip must be identical");
        }
    }
}
