//! # md5stream
//!
//! Streaming MD5 message digest computation with constant-memory padding.
//!
//! The input is pulled a byte at a time through the [`ByteSource`] seam; the
//! [`PaddedBlockReader`] synthesizes the MD5 padding tail on the fly and
//! hands 512-bit blocks to the [`Md5Digest`] engine, so arbitrarily large
//! inputs are hashed without ever buffering the padded message.
//!
//! **Note**: MD5 is cryptographically broken; use this crate for checksums
//! and legacy interoperability, not for anything security-sensitive.
//!
//! # Examples
//!
//! ```rust
//! use md5stream::md5_hex_slice;
//!
//! assert_eq!(md5_hex_slice(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//! ```
//!
//! Hashing from any `std::io::Read`:
//!
//! ```rust
//! use md5stream::{md5_hex, ReadSource};
//! use std::io::Cursor;
//!
//! let hex = md5_hex(ReadSource::new(Cursor::new(b"abc".to_vec()))).unwrap();
//! assert_eq!(hex, "900150983cd24fb0d6963f7d28e17f72");
//! ```

pub mod constants;
pub mod digest;
pub mod error;
pub mod reader;
pub mod source;

pub use constants::MD5_OUTPUT_SIZE;
pub use digest::{md5_digest_bytes, md5_hex, md5_hex_slice, Md5Digest};
pub use error::{Error, Result};
pub use reader::{MessageBlock, PaddedBlockReader};
pub use source::{ByteSource, ReadSource, SliceSource};
