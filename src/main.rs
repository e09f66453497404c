//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs::{self, File};
use std::io::{self, Error, ErrorKind};
use std::path::Path;
use std::time::Instant;

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use rlzip::compression::Compressor;
use rlzip::tools::cli::{rzopts_init, Mode, RzOpts};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Extension appended to compressed files.
const EXTENSION: &str = ".rlz";

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let opts = rzopts_init();

    //----- Figure out what we need to do and go do it
    let result = match opts.op_mode {
        Mode::Zip => compress(&opts),
        Mode::Unzip => decompress(&opts),
    };

    info!("Done.\n");
    result
}

/// Compress the input file defined in opts, writing `<input>.rlz`.
fn compress(opts: &RzOpts) -> io::Result<()> {
    let compressor = Compressor::new(&opts.codec, opts.strategy, opts.chunk_words)?;

    let fin = File::open(&opts.file)?;
    let mut out_name = opts.file.clone();
    out_name.push_str(EXTENSION);
    let mut f_out = create_output(&out_name, opts.force_overwrite)?;

    let start = Instant::now();
    let mut output = compressor.compress(fin)?;
    info!("Compressed {} in {:?}.", opts.file, start.elapsed());

    let written = output.data.drain_to_writer(&mut f_out)?;
    info!("Wrote {} bytes to {}.", written, out_name);

    if !opts.keep_input_files {
        fs::remove_file(&opts.file)?;
    }
    Ok(())
}

/// Decompress the input file defined in opts, writing the input name with
/// its `.rlz` extension stripped.
fn decompress(opts: &RzOpts) -> io::Result<()> {
    let compressor = Compressor::new(&opts.codec, opts.strategy, opts.chunk_words)?;

    let fin = File::open(&opts.file)?;
    let out_name = match opts.file.strip_suffix(EXTENSION) {
        Some(stem) => stem.to_string(),
        None => {
            let mut name = opts.file.clone();
            name.push_str(".out");
            name
        }
    };
    let mut f_out = create_output(&out_name, opts.force_overwrite)?;

    let start = Instant::now();
    let mut output = compressor.decompress(fin)?;
    info!("Decompressed {} in {:?}.", opts.file, start.elapsed());

    let written = output.data.drain_to_writer(&mut f_out)?;
    info!("Wrote {} bytes to {}.", written, out_name);

    if !opts.keep_input_files {
        fs::remove_file(&opts.file)?;
    }
    Ok(())
}

/// Create the output file, refusing to overwrite an existing file unless
/// forced.
fn create_output(name: &str, force: bool) -> io::Result<File> {
    if Path::new(name).exists() && !force {
        return Err(Error::new(
            ErrorKind::AlreadyExists,
            format!("{} exists; use --force to overwrite", name),
        ));
    }
    File::create(name)
}
