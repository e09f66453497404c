//! Bit-level run length codec with a self-terminating length field.
//!
//! A run's length is written as a unary prefix of zero bits ("bit width of
//! the length minus one") followed by the minimal binary form of the
//! length. Because the minimal form always begins with a 1 bit, the prefix
//! is self-terminating and no run boundary markers are needed. The first
//! bit of a compressed chunk is the starting polarity, emitted verbatim;
//! runs alternate polarity from there, so only lengths are stored.
//!
//! A run of length 1 costs exactly one bit: zero prefix bits plus the
//! single bit `1`.

use log::debug;

use crate::bitstream::bitqueue::{bit_width, BitQueue};
use crate::compression::chunk::Chunk;

use super::ChunkCodec;

/// The run length chunk codec. Stateless; one instance serves any number
/// of chunks and any number of worker threads.
#[derive(Debug, Default)]
pub struct RleCodec;

impl RleCodec {
    pub fn new() -> Self {
        Self
    }
}

/// Emits one run length: `bit_width(len) - 1` zero bits, then the minimal
/// binary form of `len`.
fn emit_run(out: &mut BitQueue, run_len: u32) {
    for _ in 0..bit_width(run_len).saturating_sub(1) {
        out.push_bit(0);
    }
    out.push_without_leading_zeros(run_len);
}

impl ChunkCodec for RleCodec {
    fn compress(&self, mut chunk: Chunk) -> Chunk {
        let mut out = Chunk::new(chunk.id);
        let mut cur_run: Option<u8> = None;
        let mut run_len: u32 = 0;

        while let Some(bit) = chunk.data.bit() {
            match cur_run {
                // The first bit is the starting polarity, emitted verbatim.
                None => {
                    out.data.push_bit(bit);
                    cur_run = Some(bit);
                    run_len = 1;
                }
                // The run continues.
                Some(run) if bit == run => run_len += 1,
                // The run ended. Emit its length and start the next one.
                Some(_) => {
                    emit_run(&mut out.data, run_len);
                    cur_run = Some(bit);
                    run_len = 1;
                }
            }
        }
        // Input exhausted: close out the final run, if there was any input.
        if cur_run.is_some() {
            emit_run(&mut out.data, run_len);
        }
        out
    }

    fn decompress(&self, mut chunk: Chunk) -> Chunk {
        let mut out = Chunk::new(chunk.id);

        // The first bit is the starting polarity. An empty chunk stays empty.
        let mut cur = match chunk.data.bit() {
            Some(bit) => bit,
            None => return out,
        };

        loop {
            // Count the unary prefix. Exhausting the input here is the
            // normal end of chunk: the trailing word-alignment padding is
            // all zeros and never reaches 32 bits, so the scan consumes it
            // and runs out.
            let mut prefix_zeros = 0_usize;
            loop {
                match chunk.data.bit() {
                    Some(0) => prefix_zeros += 1,
                    Some(_) => break,
                    None => return out,
                }
            }
            if prefix_zeros >= 32 {
                // Run lengths are bounded by the chunk size, which fits a
                // word. A longer prefix can only come from corrupt input.
                debug!("run length prefix of {} zeros, ending chunk", prefix_zeros);
                return out;
            }

            // The 1 bit that ended the scan is the high bit of the length's
            // minimal binary form; the remaining `prefix_zeros` bits follow.
            let run_len =
                (1_u64 << prefix_zeros) | chunk.data.read_and_pop(prefix_zeros);

            for _ in 0..run_len {
                out.data.push_bit(cur);
            }
            cur ^= 1;
        }
    }
}
