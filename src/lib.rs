//! A block-sorting byte-stream compressor built on the Burrows-Wheeler
//! transform.
//!
//! - Compresses a whole input as a single block: suffix-array construction
//!   (SA-IS, guaranteed O(n)), Burrows-Wheeler transform, Move-To-Front
//!   coding, and static Huffman coding over an MSB-first bit stream.
//! - Expansion runs the same stages in reverse and reproduces the original
//!   byte sequence exactly.
//!
//! Basic usage to compress a file:
//!
//! ```text
//! $> burrows -z test.txt
//! ```
//!
//! This creates the archive `test.txt.burrows`. To expand it again:
//!
//! ```text
//! $> burrows -d test.txt.burrows
//! ```
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{BurrowsError, Result};
