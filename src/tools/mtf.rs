//! Move-To-Front transform.
//!
//! Maintains an ordered list of the 256 byte values. Each input byte is
//! emitted as its current position in the list and then hoisted to the
//! front. Runs of equal bytes - exactly what the BWT produces - come out as
//! runs of small values, which is the kind of skew Huffman coding rewards.

const RADIX: usize = 256;

/// The identity order [0, 1, ..., 255] both directions start from.
fn initial_order() -> [u8; RADIX] {
    let mut order = [0u8; RADIX];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i as u8;
    }
    order
}

/// Encode data with the Move-To-Front transform. Output length equals input
/// length.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut order = initial_order();
    let mut encoded = Vec::with_capacity(data.len());
    for &byte in data {
        // The order always holds all 256 values, so the scan cannot miss.
        let position = order.iter().position(|&s| s == byte).unwrap();
        encoded.push(position as u8);
        order.copy_within(0..position, 1);
        order[0] = byte;
    }
    encoded
}

/// Decode data produced by [`mtf_encode`].
pub fn mtf_decode(encoded: &[u8]) -> Vec<u8> {
    let mut order = initial_order();
    let mut decoded = Vec::with_capacity(encoded.len());
    for &rank in encoded {
        let position = rank as usize;
        let byte = order[position];
        decoded.push(byte);
        order.copy_within(0..position, 1);
        order[0] = byte;
    }
    decoded
}
