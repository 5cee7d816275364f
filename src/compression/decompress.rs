use std::fs::{self, File};
use std::io::{BufReader, Read};

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::bwt_algorithms::bwt;
use crate::error::{BurrowsError, Result};
use crate::huffman_coding::huffman;
use crate::tools::cli::BwOpts;
use crate::tools::mtf;

/// Expand the archive named in opts, writing the file name with its last
/// suffix stripped. The name must carry a dot-delimited suffix.
pub fn decompress(opts: &BwOpts) -> Result<()> {
    let output_name = match opts.file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => {
            return Err(BurrowsError::Malformed(
                "archive name carries no suffix to strip",
            ))
        }
    };

    let f_in = File::open(&opts.file)?;
    let text = expand_stream(BufReader::new(f_in))?;
    fs::write(&output_name, &text)?;

    info!(
        "Expanded {} into {} ({} bytes).",
        opts.file,
        output_name,
        text.len(),
    );
    Ok(())
}

/// Run the inverse pipeline over an archive bit stream, recovering the
/// original block. An empty archive yields an empty block.
pub fn expand_stream<R: Read>(source: R) -> Result<Vec<u8>> {
    let mut input = BitReader::new(source)?;
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let mtf = huffman::expand(&mut input)?;
    let bwt = mtf::mtf_decode(&mtf);
    debug!("Huffman and MTF stages recovered {} bytes.", bwt.len());
    bwt::inverse_transform(&bwt)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::compress_stream;

    #[test]
    fn empty_archive_expands_to_nothing() {
        assert_eq!(expand_stream([].as_slice()).unwrap(), b"");
    }

    #[test]
    fn roundtrip() {
        let text = b"abracadabra!";
        let mut archive = Vec::new();
        compress_stream(text, &mut archive).unwrap();
        assert_eq!(expand_stream(archive.as_slice()).unwrap(), text);
    }

    #[test]
    fn truncated_archive_is_an_error() {
        let mut archive = Vec::new();
        compress_stream(b"abracadabra!", &mut archive).unwrap();
        archive.truncate(1);
        assert!(expand_stream(archive.as_slice()).is_err());
    }
}
