//! ff6save-pipeline: file bytes ⇄ typed save document
//!
//! ```text
//! load: read → decrypt → inflate → decode SaveDocument
//! save: encode SaveDocument → deflate → encrypt → write (atomic)
//! ```
//!
//! Both flows are synchronous and single-pass. Any stage failing aborts the
//! whole flow; save never touches the destination until the complete
//! ciphertext is assembled.

pub mod codec;

pub use codec::{load, save, SaveCodec};
