//! End-to-end tests for the full rlzip pipeline: bytes -> partition ->
//! per-chunk codec -> framed stream -> partition -> codec -> bytes, under
//! both scheduling strategies.

use rlzip::compression::{Compressor, Strategy, DEFAULT_CHUNK_WORDS};

/// Compress then decompress `input` and return the restored bytes.
fn round_trip(input: &[u8], strategy: Strategy, chunk_words: usize) -> Vec<u8> {
    let compressor = Compressor::new("rle", strategy, chunk_words).expect("codec resolves");
    let mut compressed = compressor.compress(input).expect("compress");
    let stream = compressed.data.drain_to_bytes();
    let mut restored = compressor.decompress(&stream[..]).expect("decompress");
    restored.data.drain_to_bytes()
}

#[test]
fn round_trip_assorted_inputs() {
    let inputs: Vec<Vec<u8>> = vec![
        vec![],
        vec![0x00],
        vec![0xff],
        b"ab".to_vec(),
        b"abc".to_vec(), // shorter than one storage word
        vec![0x00; 4096],
        vec![0xa5; 4097],
        b"The quick brown fox jumps over the lazy dog. ".repeat(200),
        (0..10_000_u32).map(|i| (i % 256) as u8).collect(),
    ];

    for input in &inputs {
        for strategy in [Strategy::Sequential, Strategy::Parallel] {
            let restored = round_trip(input, strategy, DEFAULT_CHUNK_WORDS);
            assert_eq!(&restored, input, "length {} under {:?}", input.len(), strategy);
        }
    }
}

#[test]
fn round_trip_small_chunks() {
    // Many chunks exercise the id-ordered reassembly path.
    let input: Vec<u8> = (0..5_000_u32).map(|i| (i * 31 % 253) as u8).collect();
    for strategy in [Strategy::Sequential, Strategy::Parallel] {
        assert_eq!(round_trip(&input, strategy, 8), input);
    }
}

#[test]
fn strategies_are_output_equivalent() {
    let input = b"strategy equivalence covers every chunk id ".repeat(400);

    let sequential = Compressor::new("rle", Strategy::Sequential, 32).expect("codec resolves");
    let parallel = Compressor::new("rle", Strategy::Parallel, 32).expect("codec resolves");

    let seq_stream = sequential
        .compress(&input[..])
        .expect("compress")
        .data
        .drain_to_bytes();
    let par_stream = parallel
        .compress(&input[..])
        .expect("compress")
        .data
        .drain_to_bytes();
    assert_eq!(seq_stream, par_stream);

    // Either stream decompresses under either strategy.
    let mut restored = sequential.decompress(&par_stream[..]).expect("decompress");
    assert_eq!(restored.data.drain_to_bytes(), input);
    let mut restored = parallel.decompress(&seq_stream[..]).expect("decompress");
    assert_eq!(restored.data.drain_to_bytes(), input);
}

#[test]
fn empty_input_yields_empty_stream() {
    let compressor =
        Compressor::new("rle", Strategy::Parallel, DEFAULT_CHUNK_WORDS).expect("codec resolves");
    let mut compressed = compressor.compress(&[][..]).expect("compress");
    let stream = compressed.data.drain_to_bytes();
    assert!(stream.is_empty());

    let mut restored = compressor.decompress(&stream[..]).expect("decompress");
    assert!(restored.data.drain_to_bytes().is_empty());
}

#[test]
fn truncated_stream_decompresses_to_prefix() {
    let input = vec![0x42_u8; 2000];
    let compressor = Compressor::new("rle", Strategy::Sequential, 64).expect("codec resolves");
    let mut compressed = compressor.compress(&input[..]).expect("compress");
    let stream = compressed.data.drain_to_bytes();

    // Drop the tail of the final record. The damaged stream still parses;
    // the surviving bytes decode to a prefix of the original input.
    let cut = stream.len() - 5;
    let mut restored = compressor.decompress(&stream[..cut]).expect("decompress");
    let restored_bytes = restored.data.drain_to_bytes();
    assert!(restored_bytes.len() <= input.len());
    // The final run of a truncated chunk may end mid-byte, so only the
    // whole bytes before it are comparable.
    let whole = restored_bytes.len().saturating_sub(1);
    assert_eq!(restored_bytes[..whole], input[..whole]);
}
