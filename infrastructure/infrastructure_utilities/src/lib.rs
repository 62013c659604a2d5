//! Infrastructure Layer: Utilities
//!
//! Provides common helpers shared by the codec crates.
//! Currently this is zlib compression for compressed term payloads.
//! Depends on no workspace crates.

pub mod compression;

pub use compression::{compress, inflate_exact, CompressionError, CompressionLevel, CompressionResult};
