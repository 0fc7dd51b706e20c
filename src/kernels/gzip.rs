// In: src/kernels/gzip.rs

//! Streaming gzip (RFC 1952) compression and decompression.
//!
//! This kernel is a safe wrapper around the `flate2` crate's gzip adapters.
//! Bytes flow from the input reader through the encoder/decoder into the
//! output writer in a single buffered pass, so memory stays bounded by the
//! copy buffer rather than the file size.

use std::io::{self, Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::FilepressError;
use crate::kernels::drain_decoder;

/// Compresses `input` into `output` as a gzip stream at the given level (1-9).
///
/// Returns the number of uncompressed bytes consumed.
pub fn encode<R: Read, W: Write>(
    input: &mut R,
    output: W,
    level: u32,
) -> Result<u64, FilepressError> {
    let mut encoder = GzEncoder::new(output, Compression::new(level));
    let consumed = io::copy(input, &mut encoder)?;
    // `finish` flushes the final DEFLATE block and the CRC trailer.
    encoder.finish()?;
    Ok(consumed)
}

/// Decompresses a gzip stream from `input` into `output`.
///
/// Uses the multi-member decoder so concatenated gzip files decode in full.
/// Returns the number of decompressed bytes written.
pub fn decode<R: Read, W: Write>(input: R, output: &mut W) -> Result<u64, FilepressError> {
    let mut decoder = MultiGzDecoder::new(input);
    drain_decoder("gzip", &mut decoder, output)
}
