// In: src/kernels/zlib.rs

//! Streaming raw zlib (RFC 1950) compression and decompression.
//!
//! A safe wrapper around the `flate2` crate's zlib adapters. Unlike gzip
//! there is no file header or member framing here, just the 2-byte zlib
//! header, the DEFLATE body, and the Adler-32 trailer. The output bytes are
//! identical to a one-shot `zlib.compress` of the same input at the same
//! level; only the memory profile differs.

use std::io::{self, Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::FilepressError;
use crate::kernels::drain_decoder;

/// Compresses `input` into `output` as a raw zlib stream at the given level (1-9).
///
/// Returns the number of uncompressed bytes consumed.
pub fn encode<R: Read, W: Write>(
    input: &mut R,
    output: W,
    level: u32,
) -> Result<u64, FilepressError> {
    let mut encoder = ZlibEncoder::new(output, Compression::new(level));
    let consumed = io::copy(input, &mut encoder)?;
    encoder.finish()?;
    Ok(consumed)
}

/// Decompresses a raw zlib stream from `input` into `output`.
///
/// Returns the number of decompressed bytes written.
pub fn decode<R: Read, W: Write>(input: R, output: &mut W) -> Result<u64, FilepressError> {
    let mut decoder = ZlibDecoder::new(input);
    drain_decoder("zlib", &mut decoder, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_zlib_roundtrip_simple_text() {
        let original = b"hello world, this is a test of zlib compression. hello world.".to_vec();

        let mut compressed = Vec::new();
        encode(&mut Cursor::new(&original), &mut compressed, 6).unwrap();

        let mut decompressed = Vec::new();
        decode(Cursor::new(&compressed), &mut decompressed).unwrap();

        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_zlib_roundtrip_highly_compressible_data() {
        let original = vec![42u8; 10_000];

        let mut compressed = Vec::new();
        encode(&mut Cursor::new(&original), &mut compressed, 9).unwrap();

        assert!(compressed.len() < 100);

        let mut decompressed = Vec::new();
        decode(Cursor::new(&compressed), &mut decompressed).unwrap();

        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_zlib_decode_invalid_data() {
        // 0xFF 0xFF is not a valid zlib header.
        let invalid = vec![0xFFu8, 0xFF, 1, 2, 3];

        let mut out = Vec::new();
        let result = decode(Cursor::new(&invalid), &mut out);

        assert!(matches!(
            result,
            Err(FilepressError::Decode { method: "zlib", .. })
        ));
    }
}
