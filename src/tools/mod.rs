//! The tools module provides helper functions for the compressor.
//!
//! The tools are:
//! - cli: Command line interface for the burrows binary.
//! - freq_count: Byte frequency counting for the Huffman stage.
//! - mtf: Move-To-Front transform between the BWT and Huffman stages.
pub mod cli;
pub mod freq_count;
pub mod mtf;
