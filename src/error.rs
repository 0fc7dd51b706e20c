// In: src/error.rs

//! This module defines the single, unified error type for the entire filepress
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilepressError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported compression method: {0}")]
    UnsupportedMethod(String),

    #[error("Cannot detect compression method from file: {}", .0.display())]
    UnrecognizedExtension(PathBuf),

    // =========================================================================
    // === Codec & I/O Errors
    // =========================================================================
    /// The codec rejected the compressed stream (corrupt data, or a file whose
    /// extension does not match its actual encoding).
    #[error("{method} decode failed: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: io::Error,
    },

    /// An error originating from the underlying I/O subsystem (e.g., permission
    /// denied, disk full).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FilepressError {
    /// Splits an `io::Error` raised while pulling bytes through a decoder into
    /// a decode failure or a genuine I/O failure. flate2 reports malformed
    /// streams as `InvalidData` / `InvalidInput`, bzip2 as `InvalidInput`,
    /// and xz2 wraps its stream errors with the `Other` kind; filesystem
    /// errors keep their specific kinds and stay `Io`.
    pub(crate) fn classify_decode(method: &'static str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::InvalidData
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::Other => FilepressError::Decode { method, source },
            _ => FilepressError::Io(source),
        }
    }
}
