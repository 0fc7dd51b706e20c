// In: src/kernels/bz2.rs

//! Streaming bzip2 compression and decompression.
//!
//! A safe wrapper around the `bzip2` crate's stream adapters. Same shape as
//! the gzip kernel: one buffered pass, memory bounded by the copy buffer.

use std::io::{self, Read, Write};

use bzip2::read::MultiBzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;

use crate::error::FilepressError;
use crate::kernels::drain_decoder;

/// Compresses `input` into `output` as a bzip2 stream at the given level (1-9).
///
/// Returns the number of uncompressed bytes consumed.
pub fn encode<R: Read, W: Write>(
    input: &mut R,
    output: W,
    level: u32,
) -> Result<u64, FilepressError> {
    let mut encoder = BzEncoder::new(output, Compression::new(level));
    let consumed = io::copy(input, &mut encoder)?;
    encoder.finish()?;
    Ok(consumed)
}

/// Decompresses a bzip2 stream from `input` into `output`.
///
/// Returns the number of decompressed bytes written.
pub fn decode<R: Read, W: Write>(input: R, output: &mut W) -> Result<u64, FilepressError> {
    let mut decoder = MultiBzDecoder::new(input);
    drain_decoder("bz2", &mut decoder, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_bz2_roundtrip_simple_text() {
        let original = b"hello world, this is a test of bzip2 compression. hello world.".to_vec();

        let mut compressed = Vec::new();
        encode(&mut Cursor::new(&original), &mut compressed, 6).unwrap();

        let mut decompressed = Vec::new();
        decode(Cursor::new(&compressed), &mut decompressed).unwrap();

        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_bz2_roundtrip_highly_compressible_data() {
        let original = vec![42u8; 10_000];

        let mut compressed = Vec::new();
        encode(&mut Cursor::new(&original), &mut compressed, 9).unwrap();

        assert!(compressed.len() < original.len());

        let mut decompressed = Vec::new();
        decode(Cursor::new(&compressed), &mut decompressed).unwrap();

        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_bz2_decode_invalid_data() {
        // Missing the "BZh" magic.
        let invalid = vec![0u8; 16];

        let mut out = Vec::new();
        let result = decode(Cursor::new(&invalid), &mut out);

        assert!(matches!(
            result,
            Err(FilepressError::Decode { method: "bz2", .. })
        ));
    }
}
