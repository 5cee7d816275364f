//! The bwt_algorithms module is the sorting subsystem of the compressor.
//!
//! The Burrows-Wheeler transform rearranges the input so that runs of
//! similar bytes are likely to occur, which is what the later stages
//! compress. The sort behind it is a suffix array built with SA-IS (Suffix
//! Array Induced Sorting), which is guaranteed linear time even on the
//! highly repetitive data that defeats comparison sorts.
pub mod bwt;
pub mod sais;
