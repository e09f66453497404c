//! The Chunk and FileBits data model.
//!
//! A Chunk is the unit of parallel work: one bounded slice of the logical
//! byte stream as a bit queue, tagged with its 0-based position in the
//! stream. Ids are assigned at partition time, are contiguous and unique
//! within one file, and are the sole key used to reassemble output in a
//! deterministic order no matter when each chunk finishes.
//!
//! FileBits is the same bit buffer without an id: the whole plaintext, or
//! the whole framed compressed stream.

use crate::bitstream::bitqueue::BitQueue;

/// One identified unit of work: a bit buffer plus its position in the
/// logical stream.
#[derive(Debug, Default, Clone)]
pub struct Chunk {
    /// 0-based position of this chunk in the stream ordering.
    pub id: u32,
    /// The chunk's bits.
    pub data: BitQueue,
}

impl Chunk {
    /// Creates an empty chunk with the given stream position.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            data: BitQueue::new(),
        }
    }

    /// Words retained by the chunk's bit buffer, including a partial tail.
    pub fn size(&self) -> usize {
        self.data.size()
    }
}

/// An unidentified bit buffer holding a complete input or output stream.
#[derive(Debug, Default)]
pub struct FileBits {
    /// The stream's bits.
    pub data: BitQueue,
}

impl FileBits {
    /// Creates an empty stream buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Words retained by the stream's bit buffer.
    pub fn size(&self) -> usize {
        self.data.size()
    }
}

#[cfg(test)]
mod test {
    use super::Chunk;

    #[test]
    fn chunk_size_tracks_queue() {
        let mut chunk = Chunk::new(3);
        assert_eq!(chunk.size(), 0);
        for byte in 0..8 {
            chunk.data.push_byte(byte);
        }
        assert_eq!(chunk.size(), 2);
        assert_eq!(chunk.id, 3);
    }
}
