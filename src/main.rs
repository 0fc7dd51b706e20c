// In: src/main.rs

//! Command-line front end for filepress.
//!
//! Parses the operation and its options, hands off to the orchestrator, and
//! formats the outcome. This is the sole catch point for errors: anything
//! raised below is printed as a single `Error: ` line and the process exits
//! with status 1.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use filepress::{compress_file, decompress_file, CompressionMethod, FilepressError};

#[derive(Parser)]
#[command(
    name = "filepress",
    version,
    about = "File compression and decompression utility"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a single file
    Compress {
        /// Input file path
        input_file: PathBuf,

        /// Output file path (default: <input>.<method>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compression method: gzip, bz2, lzma or zlib
        #[arg(short, long, default_value = "gzip")]
        method: String,

        /// Compression level, 1 (fastest) to 9 (smallest)
        #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..=9))]
        level: u32,

        /// Display detailed compression info
        #[arg(long)]
        info: bool,
    },
    /// Decompress a single file, detecting the codec from its extension
    Decompress {
        /// Input file path
        input_file: PathBuf,

        /// Output file path (default: input with its last extension stripped)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<(), FilepressError> {
    match cli.command {
        Command::Compress {
            input_file,
            output,
            method,
            level,
            info,
        } => {
            // The method name resolves through the registry here, not in clap,
            // so an unknown name takes the standard error path.
            let method = CompressionMethod::from_name(&method)?;
            let report = compress_file(&input_file, output.as_deref(), method, level)?;

            println!("{}", "File compressed successfully!".green());
            if info {
                println!("Input file: {}", report.input_file.display());
                println!("Output file: {}", report.output_file.display());
                println!("Method: {}", report.method);
                println!("Original size: {} bytes", report.size_before);
                println!("Compressed size: {} bytes", report.size_after);
                println!("Compression ratio: {}", report.ratio_display());
            } else {
                println!("Compressed file: {}", report.output_file.display());
                println!("Compression ratio: {}", report.ratio_display());
            }
        }
        Command::Decompress { input_file, output } => {
            let output_file = decompress_file(&input_file, output.as_deref())?;

            println!("{}", "File decompressed successfully!".green());
            println!("Decompressed file: {}", output_file.display());
        }
    }
    Ok(())
}

fn init_logger() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    // Just the level and the message; timestamps add nothing for a one-shot tool.
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    let _ = builder.try_init();
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // The reference front end reports on stdout, not stderr.
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
