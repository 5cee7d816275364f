//! The huffman module is the entropy-coding subsystem of the compressor.
//!
//! One static code trie is built per block from the byte frequencies of the
//! Move-To-Front output. The trie itself is serialised onto the bit stream
//! in preorder - a 0 bit for each internal node, a 1 bit plus the 8-bit
//! symbol for each leaf - so the decoder reparses it instead of rebuilding
//! it, and tie-breaks during construction are never observable.
pub mod huffman;
