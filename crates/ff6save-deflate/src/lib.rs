//! ff6save-deflate: raw deflate (RFC 1951) compression of the save payload
//!
//! No zlib header or Adler-32 trailer and no gzip wrapper: the game writes a
//! bare deflate stream with the maximum 32 KiB window. Both directions work on
//! one in-memory buffer.

pub mod deflate;

pub use deflate::{compress, decompress};
