//! The bitstream module forms the I/O primitive layer for rlzip.
//!
//! rlzip is a chunk-oriented approach to compressing data. Every layer of
//! the system - the run length codec, the partitioner and the output
//! assembly - reads and writes bits through one primitive: the BitQueue,
//! a bit-addressable FIFO over 32 bit storage words.
//!
//! The queue hides byte and word alignment from the layers above it, and
//! offers byte adapters so whole streams can be loaded from and drained to
//! ordinary `Read`/`Write` endpoints.

pub mod bitqueue;
