//! The bitstream module forms the I/O subsystem for the compressor.
//!
//! All archive data travels through these two types as an MSB-first bit
//! stream over a byte-granular sink or source. The writer zero-pads the
//! trailing fraction of a byte on close; the pad is indistinguishable from
//! data, so decoders stop on higher-level length fields, never on stream
//! emptiness.
pub mod bitreader;
pub mod bitwriter;
