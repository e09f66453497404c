//! Command line interface for rlzip. Uses the external CLAP crate.

use std::fmt::{Display, Formatter};

use clap::Parser;
use log::info;

use crate::compression::{Strategy, DEFAULT_CHUNK_WORDS};

/// Zip or Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "rlzip, a chunk-parallel run length file compressor.",
    long_about = "
    rlzip partitions its input into fixed-size chunks, run length encodes
    each chunk's bits with a self-terminating length code, and writes one
    self-identifying record per chunk. Chunks are processed on a worker
    pool, and records reassemble deterministically by id on decompression."
)]
struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Perform compression on the input file (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Keep (don't delete) the input file
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Force overwriting the output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Chunk scheduling strategy
    #[clap(long, arg_enum, default_value = "parallel")]
    strategy: Strategy,

    /// Chunk codec
    #[clap(long, default_value = "rle")]
    codec: String,

    /// Chunk capacity in full 32 bit words
    #[clap(long, default_value_t = DEFAULT_CHUNK_WORDS)]
    chunk_words: usize,

    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// All user settable options that control program behavior.
#[derive(Debug)]
pub struct RzOpts {
    /// Name of the file to read for input
    pub file: String,
    /// Compress or decompress
    pub op_mode: Mode,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Sequential or parallel chunk scheduling
    pub strategy: Strategy,
    /// Name of the chunk codec to use
    pub codec: String,
    /// Chunk capacity in full 32 bit words
    pub chunk_words: usize,
}

/// Parse the command line into our internal options structure and set the
/// log level from the verbosity flag.
pub fn rzopts_init() -> RzOpts {
    let args = Args::parse();

    let opts = RzOpts {
        file: args.filename,
        // Compression is the default; an explicit -z wins over -d.
        op_mode: if args.decompress && !args.compress {
            Mode::Unzip
        } else {
            Mode::Zip
        },
        keep_input_files: args.keep,
        force_overwrite: args.force,
        strategy: args.strategy,
        codec: args.codec,
        chunk_words: args.chunk_words,
    };

    // Set the log level
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    // Report initialization status to the user
    info!("---- rlzip initialization start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file);
    info!("Strategy set to {}", opts.strategy);
    info!("Codec set to {}", opts.codec);
    if opts.chunk_words != DEFAULT_CHUNK_WORDS {
        info!("Chunk size set to {} words", opts.chunk_words);
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting");
    }
    if opts.keep_input_files {
        info!("Keeping input files");
    }
    info!("---- rlzip initialization end ----\n");

    opts
}
