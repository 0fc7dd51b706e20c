// In: src/kernels/lzma.rs

//! Streaming LZMA compression and decompression in the xz container format.
//!
//! A safe wrapper around the `xz2` crate (liblzma bindings). Files produced
//! here are standard `.xz` streams, byte-compatible with the `xz` tool.

use std::io::{self, Read, Write};

use xz2::read::XzDecoder;
use xz2::write::XzEncoder;

use crate::error::FilepressError;
use crate::kernels::drain_decoder;

/// Compresses `input` into `output` as an xz stream at the given preset (1-9).
///
/// Returns the number of uncompressed bytes consumed.
pub fn encode<R: Read, W: Write>(
    input: &mut R,
    output: W,
    level: u32,
) -> Result<u64, FilepressError> {
    let mut encoder = XzEncoder::new(output, level);
    let consumed = io::copy(input, &mut encoder)?;
    encoder.finish()?;
    Ok(consumed)
}

/// Decompresses an xz stream from `input` into `output`.
///
/// Returns the number of decompressed bytes written.
pub fn decode<R: Read, W: Write>(input: R, output: &mut W) -> Result<u64, FilepressError> {
    let mut decoder = XzDecoder::new(input);
    drain_decoder("lzma", &mut decoder, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lzma_roundtrip_simple_text() {
        let original = b"hello world, this is a test of xz compression. hello world.".to_vec();

        let mut compressed = Vec::new();
        encode(&mut Cursor::new(&original), &mut compressed, 6).unwrap();

        let mut decompressed = Vec::new();
        decode(Cursor::new(&compressed), &mut decompressed).unwrap();

        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_lzma_roundtrip_highly_compressible_data() {
        let original = vec![42u8; 10_000];

        let mut compressed = Vec::new();
        encode(&mut Cursor::new(&original), &mut compressed, 9).unwrap();

        assert!(compressed.len() < original.len());

        let mut decompressed = Vec::new();
        decode(Cursor::new(&compressed), &mut decompressed).unwrap();

        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_lzma_decode_invalid_data() {
        // Not an xz stream: wrong magic bytes.
        let invalid = vec![9u8, 8, 7, 6, 5, 4];

        let mut out = Vec::new();
        let result = decode(Cursor::new(&invalid), &mut out);

        assert!(matches!(
            result,
            Err(FilepressError::Decode { method: "lzma", .. })
        ));
    }
}
