// In: src/kernels/mod.rs

//! This module contains the pure, stateless kernels that move file bytes
//! through each supported codec. Every kernel exposes the same `encode` /
//! `decode` pair over generic `Read` / `Write` endpoints, so the orchestrator
//! can dispatch on a `CompressionMethod` without caring which crate does the
//! entropy coding underneath.

use std::io::{self, Read, Write};

use crate::error::FilepressError;

pub mod bz2;
pub mod gzip;
pub mod lzma;
pub mod zlib;

/// Copy-buffer size for the decode loop.
const COPY_BUF_LEN: usize = 64 * 1024;

/// Drains a decoder into `output`, keeping decoder failures and plain write
/// failures apart: bytes that fail to *decode* become a `Decode` error tagged
/// with the method name, while a failure to *write* the already-decoded bytes
/// stays a plain `Io` error.
///
/// Returns the number of decompressed bytes written.
pub(crate) fn drain_decoder<R: Read, W: Write>(
    method: &'static str,
    decoder: &mut R,
    output: &mut W,
) -> Result<u64, FilepressError> {
    let mut buf = [0u8; COPY_BUF_LEN];
    let mut written: u64 = 0;
    loop {
        let n = match decoder.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FilepressError::classify_decode(method, e)),
        };
        output.write_all(&buf[..n]).map_err(FilepressError::Io)?;
        written += n as u64;
    }
    Ok(written)
}
