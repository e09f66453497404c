//! BitQueue: the bit-granular FIFO that underlies every layer of rlzip.
//!
//! Bits are stored most-significant-bit-first inside 32 bit words. The queue
//! grows a word at a time as bits are pushed, and retires a word as soon as
//! every bit in it has been consumed, so `size()` always reports the number
//! of words still holding unread bits.
//!
//! NOTE: The tail word is always addressed through the backing VecDeque,
//! never through a held reference, since pushes may reallocate the storage.

use std::collections::VecDeque;
use std::io;

/// Number of data bits in one storage word.
const WORD_BITS: usize = 32;

/// Bit-addressable FIFO over 32 bit storage words.
#[derive(Debug, Default, Clone)]
pub struct BitQueue {
    /// Backing words, head at the front, in-progress tail at the back.
    words: VecDeque<u32>,
    /// Next free bit position in the tail word, in [0,32). Zero means the
    /// tail word is full (or the queue is empty) and the next push opens
    /// a fresh word.
    write_bit: usize,
    /// Bits already consumed from the head word, in [0,32).
    read_bit: usize,
}

impl BitQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words still retained, including a partially written or
    /// partially read word. Equal to `ceil(unread_bits / 32)`.
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// True iff no unread bit remains.
    pub fn empty(&self) -> bool {
        self.words.is_empty()
            || (self.words.len() == 1 && self.read_bit >= self.tail_used())
    }

    /// Count of bits pushed but not yet popped.
    pub fn unread_bits(&self) -> usize {
        if self.words.is_empty() {
            return 0;
        }
        (self.words.len() - 1) * WORD_BITS + self.tail_used() - self.read_bit
    }

    /// Count of completely filled words. A partially written tail word is
    /// not included.
    pub fn full_words(&self) -> usize {
        if self.write_bit == 0 {
            self.words.len()
        } else {
            self.words.len() - 1
        }
    }

    /// Bits in use within the tail word (32 for a full tail).
    fn tail_used(&self) -> usize {
        if self.write_bit == 0 {
            WORD_BITS
        } else {
            self.write_bit
        }
    }

    /// Appends one bit at the tail, opening a new tail word when the
    /// current one is full. Only the lowest bit of `bit` is used.
    pub fn push_bit(&mut self, bit: u8) {
        if self.write_bit == 0 {
            self.words.push_back(0);
        }
        if let Some(tail) = self.words.back_mut() {
            *tail |= ((bit & 1) as u32) << (31 - self.write_bit);
        }
        self.write_bit = (self.write_bit + 1) % WORD_BITS;
    }

    /// Appends all 32 bits of `word`, most significant first.
    pub fn push_word(&mut self, word: u32) {
        for i in (0..WORD_BITS).rev() {
            self.push_bit(((word >> i) & 1) as u8);
        }
    }

    /// Appends all 8 bits of `byte`, most significant first.
    pub fn push_byte(&mut self, byte: u8) {
        for i in (0..8).rev() {
            self.push_bit((byte >> i) & 1);
        }
    }

    /// Appends the minimal binary representation of `word`: from its
    /// highest set bit down to bit 0, with no leading zeros. A zero word
    /// has no set bit and therefore pushes nothing.
    pub fn push_without_leading_zeros(&mut self, word: u32) {
        for i in (0..bit_width(word)).rev() {
            self.push_bit(((word >> i) & 1) as u8);
        }
    }

    /// Returns the head bit without consuming it, or None if the queue
    /// holds no unread bit.
    pub fn front(&self) -> Option<u8> {
        if self.empty() {
            return None;
        }
        self.words
            .front()
            .map(|word| ((word >> (31 - self.read_bit)) & 1) as u8)
    }

    /// Removes the head bit. Retires the head word once every bit in it
    /// has been consumed. No-op on an empty queue.
    pub fn pop(&mut self) {
        if self.empty() {
            return;
        }
        self.read_bit += 1;
        let head_bits = if self.words.len() > 1 {
            WORD_BITS
        } else {
            self.tail_used()
        };
        if self.read_bit == head_bits {
            self.words.pop_front();
            self.read_bit = 0;
            if self.words.is_empty() {
                self.write_bit = 0;
            }
        }
    }

    /// Returns and consumes the head bit, or None if no unread bit remains.
    pub fn bit(&mut self) -> Option<u8> {
        let bit = self.front()?;
        self.pop();
        Some(bit)
    }

    /// Removes `n` bits from the head and returns them packed most
    /// significant first. The caller must guarantee that `n` unread bits
    /// are available; missing bits are simply not represented.
    pub fn read_and_pop(&mut self, n: usize) -> u64 {
        let mut packed = 0_u64;
        for _ in 0..n {
            match self.bit() {
                Some(bit) => packed = (packed << 1) | bit as u64,
                None => break,
            }
        }
        packed
    }

    /// Drains the queue 8 bits at a time into `writer`, returning the
    /// number of bytes written. Every queue drained this way holds a bit
    /// count that is a multiple of 8 at drain points.
    pub fn drain_to_writer<W: io::Write>(&mut self, writer: &mut W) -> io::Result<usize> {
        let bytes = self.drain_to_bytes();
        writer.write_all(&bytes)?;
        Ok(bytes.len())
    }

    /// Drains the queue 8 bits at a time into a byte vector.
    pub fn drain_to_bytes(&mut self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.words.len() * 4);
        while !self.empty() {
            bytes.push(self.read_and_pop(8) as u8);
        }
        bytes
    }
}

/// Position of the highest set bit plus one; zero for a zero word.
pub fn bit_width(word: u32) -> u32 {
    32 - word.leading_zeros()
}
