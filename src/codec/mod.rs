//! The codec module defines the per-chunk compression interface and the
//! fixed name-to-constructor registry used to select a codec.
//!
//! A codec transforms one fully buffered chunk at a time, in either
//! direction. The registry is an explicit, eagerly validated mapping: an
//! unrecognized codec name is a construction-time error, with no fallback
//! and no dynamic discovery.

use std::io::{Error, ErrorKind};

use rustc_hash::FxHashMap;

use crate::compression::chunk::Chunk;

pub mod rle;

/// A chunk-at-a-time compressor. Implementations must be stateless across
/// chunks so they can be shared by parallel workers.
pub trait ChunkCodec: Send + Sync + std::fmt::Debug {
    /// Compresses one chunk, preserving its id.
    fn compress(&self, chunk: Chunk) -> Chunk;

    /// Decompresses one chunk, preserving its id.
    fn decompress(&self, chunk: Chunk) -> Chunk;
}

/// Constructor entry for the codec registry.
type CodecFactory = fn() -> Box<dyn ChunkCodec>;

/// The fixed mapping of codec names to constructors.
fn registry() -> FxHashMap<&'static str, CodecFactory> {
    let mut codecs: FxHashMap<&'static str, CodecFactory> = FxHashMap::default();
    codecs.insert("rle", || Box::new(rle::RleCodec::new()));
    codecs
}

/// Resolves a codec name through the registry. An unrecognized name is a
/// fatal configuration error.
pub fn create(name: &str) -> Result<Box<dyn ChunkCodec>, Error> {
    match registry().get(name) {
        Some(factory) => Ok(factory()),
        None => Err(Error::new(
            ErrorKind::InvalidInput,
            format!("unknown codec: {}", name),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::create;

    #[test]
    fn known_codec_resolves() {
        assert!(create("rle").is_ok());
    }

    #[test]
    fn unknown_codec_is_fatal() {
        let err = create("huffman").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
