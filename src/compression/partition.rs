//! Splits a byte stream into chunks for parallel work.
//!
//! The compress path partitions raw plaintext into equal-sized chunks with
//! sequential ids and no framing. The decompress path parses a framed
//! compressed stream, where each record carries its own id and word count
//! and records may appear in any order.
//!
//! End of input is always taken from the byte source's explicit signal (a
//! zero-length read), never inferred from a sentinel value. A short or
//! absent framing header is a clean end of input, not an error; a stream
//! truncated mid-record keeps the bytes that did arrive.

use std::io::{self, Read};

use log::{debug, warn};

use super::chunk::Chunk;

/// How many bytes to request from the source per read.
const READ_SIZE: usize = 64 * 1024;

/// Default chunk capacity in full 32 bit words (4 KiB of plaintext).
pub const DEFAULT_CHUNK_WORDS: usize = 1024;

/// Consumes the whole source, appending each byte's 8 bits to the current
/// chunk and opening a new chunk (next sequential id) whenever the current
/// one holds `chunk_words` full words. No framing is emitted.
pub fn partition_without_header<R: Read>(
    mut source: R,
    chunk_words: usize,
) -> io::Result<Vec<Chunk>> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut buf = vec![0_u8; READ_SIZE];

    loop {
        let received = source.read(&mut buf)?;
        if received == 0 {
            break;
        }
        for &byte in &buf[..received] {
            match chunks.last_mut() {
                Some(chunk) if chunk.data.full_words() < chunk_words => {
                    chunk.data.push_byte(byte)
                }
                _ => {
                    let mut chunk = Chunk::new(chunks.len() as u32);
                    chunk.data.push_byte(byte);
                    chunks.push(chunk);
                }
            }
        }
    }
    debug!("partitioned input into {} chunks", chunks.len());
    Ok(chunks)
}

/// Parses a framed compressed stream into chunks. Each record is a 4 byte
/// big-endian id, a 4 byte big-endian word count, then that many words of
/// payload. Parsing stops cleanly when the source is exhausted at a record
/// boundary or inside a header.
pub fn partition_with_header<R: Read>(mut source: R) -> io::Result<Vec<Chunk>> {
    let mut chunks: Vec<Chunk> = Vec::new();

    loop {
        let id = match read_u32_be(&mut source)? {
            Some(id) => id,
            None => break,
        };
        let word_count = match read_u32_be(&mut source)? {
            Some(count) => count,
            None => break,
        };

        let mut chunk = Chunk::new(id);
        let mut payload = vec![0_u8; word_count as usize * 4];
        let received = read_full(&mut source, &mut payload)?;
        for &byte in &payload[..received] {
            chunk.data.push_byte(byte);
        }
        chunks.push(chunk);

        if received < payload.len() {
            // Truncated mid-record: keep what arrived and stop.
            warn!(
                "chunk {} payload truncated at {} of {} bytes",
                id,
                received,
                payload.len()
            );
            break;
        }
    }
    debug!("parsed {} framed chunks", chunks.len());
    Ok(chunks)
}

/// Reads one big-endian u32, or None when the source is exhausted before
/// a whole value arrives.
fn read_u32_be<R: Read>(source: &mut R) -> io::Result<Option<u32>> {
    let mut buf = [0_u8; 4];
    let received = read_full(source, &mut buf)?;
    if received < buf.len() {
        return Ok(None);
    }
    Ok(Some(u32::from_be_bytes(buf)))
}

/// Fills as much of `buf` as the source can provide, returning the number
/// of bytes read. A short count means the source is exhausted.
fn read_full<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        let received = source.read(&mut buf[total..])?;
        if received == 0 {
            break;
        }
        total += received;
    }
    Ok(total)
}
