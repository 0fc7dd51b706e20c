// In: src/method.rs

//! The closed set of compression methods filepress understands, together with
//! the two fixed lookup tables the rest of the crate dispatches on: method
//! name (CLI-facing) and file extension (decompress-time inference).
//!
//! There is no dynamic registration. The codec set is small and frozen, so
//! both tables are plain `match` arms over this enum.

use std::path::Path;

use crate::error::FilepressError;

/// One of the four supported compression codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionMethod {
    /// Gzip (RFC 1952), DEFLATE with a per-member header and CRC trailer.
    Gzip,
    /// Bzip2, Burrows-Wheeler based.
    Bz2,
    /// LZMA in the xz container format.
    Lzma,
    /// Raw zlib stream (RFC 1950), DEFLATE with a 2-byte header and Adler-32.
    Zlib,
}

impl CompressionMethod {
    /// Every method, in registry order.
    pub const ALL: [CompressionMethod; 4] = [
        CompressionMethod::Gzip,
        CompressionMethod::Bz2,
        CompressionMethod::Lzma,
        CompressionMethod::Zlib,
    ];

    /// The method name as it appears on the command line and in default
    /// output file names.
    pub const fn name(self) -> &'static str {
        match self {
            CompressionMethod::Gzip => "gzip",
            CompressionMethod::Bz2 => "bz2",
            CompressionMethod::Lzma => "lzma",
            CompressionMethod::Zlib => "zlib",
        }
    }

    /// The conventional file extension this method's decoder is inferred
    /// from. Note the asymmetry with compress-time default naming, which
    /// appends `name()` instead (see `orchestrator::compress_file`).
    pub const fn extension(self) -> &'static str {
        match self {
            CompressionMethod::Gzip => "gz",
            CompressionMethod::Bz2 => "bz2",
            CompressionMethod::Lzma => "xz",
            CompressionMethod::Zlib => "zlib",
        }
    }

    /// Resolves a method name from the registry.
    pub fn from_name(name: &str) -> Result<Self, FilepressError> {
        match name {
            "gzip" => Ok(CompressionMethod::Gzip),
            "bz2" => Ok(CompressionMethod::Bz2),
            "lzma" => Ok(CompressionMethod::Lzma),
            "zlib" => Ok(CompressionMethod::Zlib),
            other => Err(FilepressError::UnsupportedMethod(other.to_string())),
        }
    }

    /// Case-insensitive lookup in the fixed extension table. `ext` is the
    /// bare extension without the leading dot, as produced by
    /// `Path::extension`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "gz" => Some(CompressionMethod::Gzip),
            "bz2" => Some(CompressionMethod::Bz2),
            "xz" => Some(CompressionMethod::Lzma),
            "zlib" => Some(CompressionMethod::Zlib),
            _ => None,
        }
    }

    /// Infers the method that produced `path` from its final extension.
    pub fn for_path(path: &Path) -> Result<Self, FilepressError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| FilepressError::UnrecognizedExtension(path.to_path_buf()))
    }
}

impl std::fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
