//! The compression module manages chunk partitioning and orchestration for rlzip.
//!
//! Compression happens in the following steps:
//! - Partition: split the raw byte stream into equal-sized chunks with sequential ids.
//! - Codec: run length compress every chunk independently.
//! - Assemble: append one framing record per chunk (id, word count, payload padded
//!   to a word boundary) to the output stream.
//!
//! Decompression is the inverse:
//! - Partition: parse the framed stream into chunks, each tagged by its record id.
//! - Codec: run length decompress every chunk independently.
//! - Assemble: concatenate the decoded chunks in ascending id order, with no framing.
//!
//! Both directions run under one of two interchangeable strategies. The sequential
//! strategy processes chunks one at a time in partition order. The parallel strategy
//! hands the per-chunk codec work to a bounded worker pool and collects results into
//! an id-indexed vector, so a single final pass can assemble output in id order. The
//! two strategies produce equivalent output for identical input and codec.

use std::fmt::{Display, Formatter};
use std::io;

use crate::codec::{self, ChunkCodec};

pub mod chunk;
pub mod compress;
pub mod decompress;
pub mod partition;

pub use chunk::{Chunk, FileBits};
pub use partition::DEFAULT_CHUNK_WORDS;

/// Chunk scheduling strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ArgEnum)]
pub enum Strategy {
    /// Process chunks one at a time, in partition order.
    Sequential,
    /// Process chunks on a bounded worker pool, assembling in id order.
    Parallel,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The orchestrator: composes partitioning, per-chunk codec invocation and
/// output assembly. Construction resolves the codec name through the fixed
/// registry and fails fast on an unknown name.
pub struct Compressor {
    codec: Box<dyn ChunkCodec>,
    strategy: Strategy,
    chunk_words: usize,
}

impl Compressor {
    /// Builds an orchestrator for the named codec. `chunk_words` sets the
    /// partition threshold in full 32 bit words.
    pub fn new(codec_name: &str, strategy: Strategy, chunk_words: usize) -> io::Result<Self> {
        Ok(Self {
            codec: codec::create(codec_name)?,
            strategy,
            chunk_words,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Compressor, Strategy, DEFAULT_CHUNK_WORDS};

    #[test]
    fn unknown_codec_fails_construction() {
        assert!(Compressor::new("lzw", Strategy::Sequential, DEFAULT_CHUNK_WORDS).is_err());
        assert!(Compressor::new("rle", Strategy::Parallel, DEFAULT_CHUNK_WORDS).is_ok());
    }
}
