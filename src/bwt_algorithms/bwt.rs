//! The Burrows-Wheeler transform and its inverse.
//!
//! The transform of a string of length n is the last-column string of its
//! sorted suffixes under the virtual-sentinel order: character `text[sa[i] -
//! 1]` for every suffix that has a predecessor, and the sentinel where
//! `sa[i] == 0`. The wire form prefixes the primary index - the row holding
//! the sentinel - as a big-endian u32, because the sentinel byte itself is
//! aliased: it is written as 0xFF, which a legitimate input byte may also
//! be. Decoders locate the sentinel by the primary index, never by value.

use crate::bwt_algorithms::sais::suffix_array;
use crate::error::{BurrowsError, Result};

const RADIX: usize = 256;

/// On-wire stand-in for the sentinel. Aliased; see the module docs.
const SENTINEL: u8 = 0xff;

/// Apply the Burrows-Wheeler transform.
///
/// Returns the wire form: 4 bytes of big-endian primary index followed by
/// the n+1 bytes of the last column.
pub fn transform(text: &[u8]) -> Vec<u8> {
    let sa = suffix_array(text);

    // the suffix array is a permutation, so suffix 0 is always found
    let primary = sa.iter().position(|&suffix| suffix == 0).unwrap();

    let mut bwt = vec![0u8; text.len() + 5];
    bwt[0..4].copy_from_slice(&(primary as u32).to_be_bytes());
    for (i, &suffix) in sa.iter().enumerate() {
        bwt[i + 4] = if suffix == 0 {
            SENTINEL
        } else {
            text[suffix as usize - 1]
        };
    }
    bwt
}

/// Apply the inverse Burrows-Wheeler transform to a wire-form buffer,
/// recovering the original text.
pub fn inverse_transform(bwt: &[u8]) -> Result<Vec<u8>> {
    if bwt.len() < 5 {
        return Err(BurrowsError::Malformed(
            "transform payload shorter than its header",
        ));
    }
    let primary = u32::from_be_bytes(bwt[0..4].try_into().unwrap()) as usize;
    let last = &bwt[4..];
    let n = last.len() - 1;
    if primary > n {
        return Err(BurrowsError::Malformed("primary index out of range"));
    }

    // Stable counting sort of the last column, sentinel slot smallest,
    // recording indices rather than characters: next[i] is the index in the
    // last column of the rank-i character of the sorted first column.
    let mut count = [0usize; RADIX + 1];
    count[0] = 1; // the sentinel
    for (i, &byte) in last.iter().enumerate() {
        if i != primary {
            count[byte as usize + 1] += 1;
        }
    }
    let mut running = 0;
    for slot in count.iter_mut() {
        let size = *slot;
        *slot = running;
        running += size;
    }

    let mut next = vec![0usize; n + 1];
    next[0] = primary;
    for (i, &byte) in last.iter().enumerate() {
        if i == primary {
            continue;
        }
        next[count[byte as usize + 1]] = i;
        count[byte as usize + 1] += 1;
    }

    // follow the LF chain from the primary row
    let mut text = Vec::with_capacity(n);
    let mut index = primary;
    for _ in 0..n {
        index = next[index];
        text.push(last[index]);
    }
    Ok(text)
}
