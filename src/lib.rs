//! rlzip: a chunk-parallel run length file compressor.
//!
//! rlzip buffers its whole input, partitions it into fixed-size chunks,
//! run length encodes each chunk's bits using a self-terminating
//! gamma-style length code, and writes one self-identifying framing record
//! per chunk. Because every record carries its chunk's id, records may be
//! written in any order and still reassemble deterministically on
//! decompression.
//!
//! Chunks are independent, so both directions can run either sequentially
//! or across a bounded worker pool with identical results.
//!
//! The core exposes two entry points, both on [`compression::Compressor`]:
//! `compress(source)` and `decompress(source)`, each returning a bit
//! buffer drainable as bytes.
//!
//! Basic usage to compress a file:
//!
//! `$> rlzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.rlz.
//! The original file will be deleted unless -k is given.

pub mod bitstream;
pub mod codec;
pub mod compression;
pub mod tools;
