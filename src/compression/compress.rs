//! The compress path of the orchestrator.
//!
//! Partitions the plaintext without framing, compresses every chunk with
//! the configured codec, and appends one framing record per result to the
//! output stream. Each record's payload is zero padded to the next 32 bit
//! word boundary so the word count in the header is exact.

use std::io::{self, Read};

use log::info;
use rayon::prelude::*;

use super::chunk::{Chunk, FileBits};
use super::partition::partition_without_header;
use super::{Compressor, Strategy};

impl Compressor {
    /// Compresses the whole byte source into a framed bit buffer, drainable
    /// as bytes. The parallel strategy compresses chunks on the worker pool
    /// and a single final pass writes the records in id order; record
    /// payloads are identical per id under either strategy.
    pub fn compress<R: Read>(&self, source: R) -> io::Result<FileBits> {
        let chunks = partition_without_header(source, self.chunk_words)?;
        info!("Compressing {} chunks.", chunks.len());

        let compressed: Vec<Chunk> = match self.strategy {
            Strategy::Sequential => chunks
                .into_iter()
                .map(|chunk| self.codec.compress(chunk))
                .collect(),
            Strategy::Parallel => chunks
                .into_par_iter()
                .map(|chunk| self.codec.compress(chunk))
                .collect(),
        };

        let mut file = FileBits::new();
        for chunk in compressed {
            append_record(&mut file, chunk);
        }
        Ok(file)
    }
}

/// Appends one framing record: the chunk's id and word count as big-endian
/// words, then the payload bits zero padded to the next word boundary.
fn append_record(file: &mut FileBits, mut chunk: Chunk) {
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

#[cfg(test)]
mod test {
    use super::super::{Compressor, Strategy, DEFAULT_CHUNK_WORDS};

    #[test]
    fn empty_input_compresses_to_empty_file() {
        let compressor =
            Compressor::new("rle", Strategy::Sequential, DEFAULT_CHUNK_WORDS).unwrap();
        let mut file = compressor.compress(&[][..]).unwrap();
        assert_eq!(file.size(), 0);
        assert!(file.data.drain_to_bytes().is_empty());
    }

    #[test]
    fn single_zero_byte_record_layout() {
        // One chunk of one 0x00 byte compresses to 8 bits, padded to one
        // word, behind an id word and a word count word.
        let compressor =
            Compressor::new("rle", Strategy::Sequential, DEFAULT_CHUNK_WORDS).unwrap();
        let mut file = compressor.compress(&[0x00_u8][..]).unwrap();
        let bytes = file.data.drain_to_bytes();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[0..4], &0_u32.to_be_bytes()); // id
        assert_eq!(&bytes[4..8], &1_u32.to_be_bytes()); // word count
        // Polarity 0, prefix 000, minimal binary 1000, then padding.
        assert_eq!(&bytes[8..12], &[0b0000_1000, 0, 0, 0]);
    }

    #[test]
    fn records_are_word_aligned() {
        let compressor = Compressor::new("rle", Strategy::Sequential, 1).unwrap();
        let input = vec![0x55_u8; 9]; // three chunks at 1 word each
        let mut file = compressor.compress(&input[..]).unwrap();
        let bytes = file.data.drain_to_bytes();
        assert_eq!(bytes.len() % 4, 0);
        // First record is tagged id 0, second id 1.
        assert_eq!(&bytes[0..4], &0_u32.to_be_bytes());
    }

    #[test]
    fn strategies_emit_identical_records() {
        let input: Vec<u8> = (0..=255_u8).cycle().take(5000).collect();
        let sequential = Compressor::new("rle", Strategy::Sequential, 64).unwrap();
        let parallel = Compressor::new("rle", Strategy::Parallel, 64).unwrap();

        let seq_bytes = sequential.compress(&input[..]).unwrap().data.drain_to_bytes();
        let par_bytes = parallel.compress(&input[..]).unwrap().data.drain_to_bytes();
        assert_eq!(seq_bytes, par_bytes);
    }
}
