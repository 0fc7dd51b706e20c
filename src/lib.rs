//! This file is the root of the `filepress` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`kernels`,
//!     `orchestrator`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types the binary front end needs.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod error;
pub mod kernels;
pub mod method;
pub mod orchestrator;


pub use error::FilepressError;
pub use method::CompressionMethod;
pub use orchestrator::{compress_file, decompress_file, CompressionReport};
