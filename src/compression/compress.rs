use std::fs::{self, File};
use std::io::{BufWriter, Write};

use log::{debug, info};

use crate::bitstream::bitwriter::BitWriter;
use crate::bwt_algorithms::bwt;
use crate::error::Result;
use crate::huffman_coding::huffman;
use crate::tools::cli::BwOpts;
use crate::tools::mtf;

/// Compress the file named in opts, writing `<name>.burrows` next to it.
pub fn compress(opts: &BwOpts) -> Result<()> {
    let text = fs::read(&opts.file)?;
    let archive_name = format!("{}.burrows", opts.file);
    let f_out = File::create(&archive_name)?;
    compress_stream(&text, BufWriter::new(f_out))?;

    let archive_size = fs::metadata(&archive_name)?.len();
    info!(
        "Compressed {} ({} bytes) into {} ({} bytes, {:.1}%).",
        opts.file,
        text.len(),
        archive_name,
        archive_size,
        100.0 * archive_size as f64 / text.len().max(1) as f64,
    );
    Ok(())
}

/// Run the whole pipeline over one block of data, writing the archive bit
/// stream to the sink. An empty block produces an empty archive.
pub fn compress_stream<W: Write>(text: &[u8], sink: W) -> Result<()> {
    let mut out = BitWriter::new(sink);
    if text.is_empty() {
        out.close()?;
        return Ok(());
    }
    let bwt = bwt::transform(text);
    let mtf = mtf::mtf_encode(&bwt);
    debug!("BWT and MTF stages produced {} bytes.", mtf.len());
    huffman::compress(&mtf, &mut out)?;
    out.close()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input_makes_an_empty_archive() {
        let mut archive = Vec::new();
        compress_stream(b"", &mut archive).unwrap();
        assert!(archive.is_empty());
    }

    #[test]
    fn archive_is_not_the_input() {
        let mut archive = Vec::new();
        compress_stream(b"abracadabra!", &mut archive).unwrap();
        assert!(!archive.is_empty());
        assert_ne!(archive, b"abracadabra!");
    }

    #[test]
    fn repetitive_input_compresses() {
        let text = b"the quick brown fox jumps over the lazy dog ".repeat(100);
        let mut archive = Vec::new();
        compress_stream(&text, &mut archive).unwrap();
        assert!(archive.len() < text.len() / 2);
    }
}
