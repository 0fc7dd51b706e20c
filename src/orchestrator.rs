// In: src/orchestrator.rs

//! The high-level coordination layer: file-to-file compression and
//! decompression. Functions here own the filesystem concerns (existence
//! checks, default output naming, size accounting) and delegate all byte
//! pushing to the per-codec kernels.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::FilepressError;
use crate::kernels;
use crate::method::CompressionMethod;

//==================================================================================
// 1. Public Structs
//==================================================================================

/// Size statistics for one successful compression, used only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionReport {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub method: CompressionMethod,
    pub size_before: u64,
    pub size_after: u64,
}

impl CompressionReport {
    /// Percentage reduction in size, `(1 - after/before) * 100`.
    ///
    /// Negative for inputs where codec overhead exceeds the savings (tiny or
    /// already-compressed files); that is a legitimate result, not an error.
    /// An empty input is defined to have a ratio of zero.
    pub fn ratio(&self) -> f64 {
        if self.size_before == 0 {
            return 0.0;
        }
        (1.0 - self.size_after as f64 / self.size_before as f64) * 100.0
    }

    /// The ratio formatted for display: two decimal digits and a trailing `%`.
    pub fn ratio_display(&self) -> String {
        format!("{:.2}%", self.ratio())
    }
}

//==================================================================================
// 2. Public Orchestration API
//==================================================================================

/// Compresses `input` into `output` with the given method and level.
///
/// When `output` is `None` the result lands next to the input as
/// `<input>.<method-name>` (so `a.txt` compressed with gzip becomes
/// `a.txt.gzip`). An existing file at the output path is overwritten. The
/// level must already be validated to 1-9 by the caller; it is passed to the
/// codec as-is.
pub fn compress_file(
    input: &Path,
    output: Option<&Path>,
    method: CompressionMethod,
    level: u32,
) -> Result<CompressionReport, FilepressError> {
    // 1. The input must exist before we create anything on disk.
    let size_before = input_size(input)?;

    // 2. Resolve the output path. The default appends the method *name*, not
    //    the conventional extension.
    let output_file = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("{}.{}", input.display(), method.name())),
    };

    log::debug!(
        "compress: {} -> {} (method={}, level={})",
        input.display(),
        output_file.display(),
        method,
        level
    );

    // 3. One streaming pass through the selected kernel.
    let mut reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(&output_file)?);
    match method {
        CompressionMethod::Gzip => kernels::gzip::encode(&mut reader, &mut writer, level)?,
        CompressionMethod::Bz2 => kernels::bz2::encode(&mut reader, &mut writer, level)?,
        CompressionMethod::Lzma => kernels::lzma::encode(&mut reader, &mut writer, level)?,
        CompressionMethod::Zlib => kernels::zlib::encode(&mut reader, &mut writer, level)?,
    };
    // Flush here rather than relying on drop, which swallows write errors.
    writer.flush()?;

    // 4. Measure the result and build the report.
    let size_after = fs::metadata(&output_file)?.len();
    let report = CompressionReport {
        input_file: input.to_path_buf(),
        output_file,
        method,
        size_before,
        size_after,
    };
    log::info!(
        "compressed {} ({} -> {} bytes, {})",
        report.input_file.display(),
        report.size_before,
        report.size_after,
        report.ratio_display()
    );
    Ok(report)
}

/// Decompresses `input`, inferring the codec from its file extension.
///
/// When `output` is `None` the result is `input` with exactly its last
/// extension stripped (`a.txt.gz` becomes `a.txt`). An existing file at the
/// output path is overwritten. Returns the resolved output path.
pub fn decompress_file(input: &Path, output: Option<&Path>) -> Result<PathBuf, FilepressError> {
    // 1. Existence check first: a missing file should not report its
    //    extension as the problem.
    input_size(input)?;

    // 2. Infer the codec from the extension table.
    let method = CompressionMethod::for_path(input)?;

    // 3. Resolve the output path: exactly one suffix removed.
    let output_file = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(""),
    };

    log::debug!(
        "decompress: {} -> {} (method={})",
        input.display(),
        output_file.display(),
        method
    );

    // 4. One streaming pass through the matching kernel.
    let mut reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(&output_file)?);
    let written = match method {
        CompressionMethod::Gzip => kernels::gzip::decode(&mut reader, &mut writer)?,
        CompressionMethod::Bz2 => kernels::bz2::decode(&mut reader, &mut writer)?,
        CompressionMethod::Lzma => kernels::lzma::decode(&mut reader, &mut writer)?,
        CompressionMethod::Zlib => kernels::zlib::decode(&mut reader, &mut writer)?,
    };
    writer.flush()?;

    log::info!(
        "decompressed {} ({} bytes written)",
        output_file.display(),
        written
    );
    Ok(output_file)
}

//==================================================================================
// 3. Helpers
//==================================================================================

/// Returns the size of `path`, mapping a missing file to `FileNotFound`.
fn input_size(path: &Path) -> Result<u64, FilepressError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(FilepressError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(FilepressError::Io(e)),
    }
}
