//! The decompress path of the orchestrator.
//!
//! Parses the framed stream into chunks, decompresses every chunk with the
//! configured codec, and concatenates the decoded bits in ascending id
//! order. Record position in the input stream is irrelevant: the id inside
//! each record is authoritative for output order.

use std::io::{self, Read};

use log::info;
use rayon::prelude::*;

use super::chunk::{Chunk, FileBits};
use super::partition::partition_with_header;
use super::{Compressor, Strategy};

impl Compressor {
    /// Decompresses the whole framed byte source into a bit buffer holding
    /// the plaintext, drainable as bytes. Decoding is fully independent per
    /// chunk; ordering comes from a single assembly pass over the decoded
    /// results sorted by id.
    pub fn decompress<R: Read>(&self, source: R) -> io::Result<FileBits> {
        let chunks = partition_with_header(source)?;
        info!("Decompressing {} chunks.", chunks.len());

        let mut decoded: Vec<Chunk> = match self.strategy {
            Strategy::Sequential => chunks
                .into_iter()
                .map(|chunk| self.codec.decompress(chunk))
                .collect(),
            Strategy::Parallel => chunks
                .into_par_iter()
                .map(|chunk| self.codec.decompress(chunk))
                .collect(),
        };
        decoded.sort_by_key(|chunk| chunk.id);

        let mut file = FileBits::new();
        for mut chunk in decoded {
            while let Some(bit) = chunk.data.bit() {
                file.data.push_bit(bit);
            }
        }
        Ok(file)
    }
}

#[cfg(test)]
mod test {
    use super::super::{Chunk, Compressor, FileBits, Strategy, DEFAULT_CHUNK_WORDS};
    use crate::codec::{self, ChunkCodec};

    /// Frames one compressed chunk the way the compress path does.
    fn frame(file: &mut FileBits, mut chunk: Chunk) {
        file.data.push_word(chunk.id);
        file.data.push_word(chunk.size() as u32);
        let mut bit_count = 0_usize;
        while let Some(bit) = chunk.data.bit() {
            file.data.push_bit(bit);
            bit_count = (bit_count + 1) % 32;
        }
        while bit_count != 0 {
            file.data.push_bit(0);
            bit_count = (bit_count + 1) % 32;
        }
    }

    #[test]
    fn out_of_order_records_assemble_by_id() {
        // Build a compressed stream whose records appear as id 1 then id 0.
        let rle = codec::create("rle").unwrap();

        let mut first = Chunk::new(0);
        for &b in b"first chunk bytes" {
            first.data.push_byte(b);
        }
        let mut second = Chunk::new(1);
        for &b in b"second chunk bytes" {
            second.data.push_byte(b);
        }

        let mut stream = FileBits::new();
        frame(&mut stream, rle.compress(second));
        frame(&mut stream, rle.compress(first));
        let bytes = stream.data.drain_to_bytes();

        let compressor =
            Compressor::new("rle", Strategy::Parallel, DEFAULT_CHUNK_WORDS).unwrap();
        let mut out = compressor.decompress(&bytes[..]).unwrap();
        assert_eq!(out.data.drain_to_bytes(), b"first chunk bytessecond chunk bytes");
    }

    #[test]
    fn empty_stream_decompresses_to_empty_output() {
        let compressor =
            Compressor::new("rle", Strategy::Parallel, DEFAULT_CHUNK_WORDS).unwrap();
        let mut out = compressor.decompress(&[][..]).unwrap();
        assert!(out.data.drain_to_bytes().is_empty());
    }

    #[test]
    fn round_trip_both_strategies() {
        let input: Vec<u8> = (0..4000_u32).map(|i| (i * 7 % 251) as u8).collect();
        for strategy in [Strategy::Sequential, Strategy::Parallel] {
            let compressor = Compressor::new("rle", strategy, 128).unwrap();
            let mut compressed = compressor.compress(&input[..]).unwrap();
            let compressed_bytes = compressed.data.drain_to_bytes();
            let mut restored = compressor.decompress(&compressed_bytes[..]).unwrap();
            assert_eq!(restored.data.drain_to_bytes(), input, "{}", strategy);
        }
    }
}
