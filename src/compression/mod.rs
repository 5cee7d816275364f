//! The compression module composes the pipeline stages and drives files
//! through them.
//!
//! Compression happens in the following steps, over the whole input as one
//! block:
//! - Burrows-Wheeler transform: sort the data so that runs of identical
//!   bytes become likely.
//! - Move-To-Front transform: turn those runs into runs of small values.
//! - Huffman coding: encode frequent values with short bit codes.
//!
//! Expansion runs the inverse stages in reverse order. The archive carries
//! no integrity check; a corrupted archive that still parses decodes to
//! garbage without an error.
pub mod compress;
pub mod decompress;
