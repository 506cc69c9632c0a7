//! Integration tests: compression round-trips, determinism, and the
//! decode-side error taxonomy over crafted streams.

use monolz_core::error::MonoLzError;
use monolz_lz77::{
    CountingSink, Lz77Encoder, Lz77Params, Token, compress, decompress,
};

fn assert_roundtrip(source: &[u8], params: &Lz77Params) {
    let packed = compress(source, params).expect("compression cannot fail");
    let restored = decompress(&packed).expect("decompression failed");
    assert_eq!(restored, source);
}

// ============================================================================
// Round-trips
// ============================================================================

#[test]
fn test_roundtrip_empty() {
    let params = Lz77Params::default();
    let packed = compress(b"", &params).unwrap();
    assert!(packed.is_empty());
    assert!(decompress(&packed).unwrap().is_empty());
}

#[test]
fn test_roundtrip_single_byte() {
    assert_roundtrip(b"x", &Lz77Params::default());
}

#[test]
fn test_roundtrip_below_min_match() {
    assert_roundtrip(b"abc", &Lz77Params::default());
}

#[test]
fn test_roundtrip_plain_text() {
    assert_roundtrip(
        b"if we cannot do as we would, we should do as we can",
        &Lz77Params::default(),
    );
}

#[test]
fn test_roundtrip_multibyte_text_as_bytes() {
    // Offsets and lengths count bytes, so multi-byte encodings survive a
    // round-trip untouched even when a reference splits a character.
    let source = "сжатие данных, сжатие данных, сжатие данных".as_bytes();
    assert_roundtrip(source, &Lz77Params::default());
}

#[test]
fn test_roundtrip_all_byte_values() {
    let source: Vec<u8> = (0u8..=255).cycle().take(2048).collect();
    assert_roundtrip(&source, &Lz77Params::default());
}

#[test]
fn test_roundtrip_incompressible() {
    // Linear congruential generator, reproducible and patternless.
    let mut seed: u64 = 0x123456789ABCDEF0;
    let source: Vec<u8> = (0..4096)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 32) as u8
        })
        .collect();
    assert_roundtrip(&source, &Lz77Params::default());
}

#[test]
fn test_roundtrip_input_longer_than_window() {
    let params = Lz77Params::new(32, 3, 64);
    let source: Vec<u8> = b"sliding window ".iter().copied().cycle().take(3000).collect();
    assert_roundtrip(&source, &params);
}

#[test]
fn test_self_overlap_roundtrip() {
    // A run compresses to one literal and one reference whose offset is
    // smaller than its length; expansion must still reproduce the run.
    let params = Lz77Params::new(4096, 2, 255);
    let source = b"aaaaaaaaaa";

    let tokens = Lz77Encoder::new(params).encode(source);
    assert!(tokens.iter().any(|t| matches!(
        t,
        Token::Reference { offset, length } if (*offset as u32) < *length
    )));

    assert_roundtrip(source, &params);
}

#[test]
fn test_repetitive_input_actually_shrinks() {
    let params = Lz77Params::default();
    let source: Vec<u8> = b"to be or not to be, ".iter().copied().cycle().take(4000).collect();
    let packed = compress(&source, &params).unwrap();
    assert!(packed.len() < source.len());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_compression_is_deterministic() {
    let params = Lz77Params::default();
    let source: Vec<u8> = b"abcabcabc abcabcabc 0123456789 "
        .iter()
        .copied()
        .cycle()
        .take(1500)
        .collect();
    let first = compress(&source, &params).unwrap();
    let second = compress(&source, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_only_literals_without_repetition() {
    let encoder = Lz77Encoder::default();
    let tokens = encoder.encode(b"abcdefgh");
    assert_eq!(tokens.len(), 8);
    assert!(tokens.iter().all(|t| matches!(t, Token::Literal(_))));
}

#[test]
fn test_emitted_offsets_stay_inside_window() {
    let params = Lz77Params::new(48, 3, 200);
    let encoder = Lz77Encoder::new(params);
    let source: Vec<u8> = b"pattern block ".iter().copied().cycle().take(2500).collect();

    for token in encoder.encode(&source) {
        if let Token::Reference { offset, length } = token {
            assert!(offset >= 1);
            assert!(length >= 1);
            assert!(offset as usize <= params.window_size());
            assert!(length as usize <= params.max_match());
        }
    }
}

#[test]
fn test_sink_sees_every_token() {
    let params = Lz77Params::default();
    let source = b"counting tokens, counting tokens, counting tokens";

    let mut encode_counts = CountingSink::default();
    let encoder = Lz77Encoder::new(params);
    let mut packed = Vec::new();
    encoder
        .compress_to_writer_with_sink(source, &mut packed, &mut encode_counts)
        .unwrap();
    assert_eq!(encode_counts.expanded_bytes, source.len() as u64);

    let mut decode_counts = CountingSink::default();
    let restored =
        monolz_lz77::decode::decompress_from_reader_with_sink(&packed[..], &mut decode_counts)
            .unwrap();
    assert_eq!(restored, source);
    assert_eq!(decode_counts.literals, encode_counts.literals);
    assert_eq!(decode_counts.references, encode_counts.references);
    assert_eq!(decode_counts.expanded_bytes, source.len() as u64);
}

// ============================================================================
// Malformed streams
// ============================================================================

#[test]
fn test_unknown_flag_byte() {
    assert!(matches!(
        decompress(&[0x02]),
        Err(MonoLzError::UnknownFrameFlag { flag: 0x02 })
    ));
}

#[test]
fn test_truncated_literal_frame() {
    assert!(matches!(
        decompress(&[0x00]),
        Err(MonoLzError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_truncated_offset_field() {
    assert!(matches!(
        decompress(&[0x01, 0x10]),
        Err(MonoLzError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_truncated_length_code() {
    // Flag and offset complete; the monotone code is all unary prefix.
    assert!(matches!(
        decompress(&[0x01, 0x01, 0x00, 0xFF]),
        Err(MonoLzError::TruncatedCode { .. })
    ));
}

#[test]
fn test_reference_before_any_output() {
    // Reference { offset: 1, length: 1 } as the very first frame: the
    // monotone code for 1 is `101`, packed into 0x05.
    assert!(matches!(
        decompress(&[0x01, 0x01, 0x00, 0x05]),
        Err(MonoLzError::InvalidBackReference {
            offset: 1,
            produced: 0
        })
    ));
}

#[test]
fn test_reference_past_produced_output() {
    // One literal, then a reference reaching two bytes back.
    assert!(matches!(
        decompress(&[0x00, b'x', 0x01, 0x02, 0x00, 0x05]),
        Err(MonoLzError::InvalidBackReference {
            offset: 2,
            produced: 1
        })
    ));
}

#[test]
fn test_garbage_after_valid_frame() {
    // A valid literal frame followed by an undefined flag byte.
    assert!(matches!(
        decompress(&[0x00, b'x', 0x7F]),
        Err(MonoLzError::UnknownFrameFlag { flag: 0x7F })
    ));
}
