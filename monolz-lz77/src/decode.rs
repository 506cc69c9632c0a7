//! LZ77 decompression.
//!
//! Decompression is a pure function of the token stream: tokens are
//! replayed in order against a growing output buffer, and that buffer is
//! the only window — a reference is resolved against the bytes this very
//! decode has already produced.

use crate::frame;
use crate::token::{NullSink, Token, TokenSink};
use monolz_core::bitstream::BitReader;
use monolz_core::error::Result;
use monolz_core::history::HistoryBuffer;
use std::io::Read;

/// Expand a slice of tokens into the original bytes.
pub fn decode_tokens(tokens: &[Token]) -> Result<Vec<u8>> {
    decode_tokens_with_sink(tokens, &mut NullSink)
}

/// Expand tokens, reporting each consumed token to `sink`.
pub fn decode_tokens_with_sink(tokens: &[Token], sink: &mut dyn TokenSink) -> Result<Vec<u8>> {
    let mut history = HistoryBuffer::new();
    for token in tokens {
        sink.record(token);
        apply(&mut history, token)?;
    }
    Ok(history.into_vec())
}

/// Decompress a framed stream read from `reader` until container EOF.
pub fn decompress_from_reader<R: Read>(reader: R) -> Result<Vec<u8>> {
    decompress_from_reader_with_sink(reader, &mut NullSink)
}

/// Decompress a framed stream, reporting each consumed token to `sink`.
pub fn decompress_from_reader_with_sink<R: Read>(
    reader: R,
    sink: &mut dyn TokenSink,
) -> Result<Vec<u8>> {
    let mut bits = BitReader::new(reader);
    let mut history = HistoryBuffer::new();
    while let Some(token) = frame::read_token(&mut bits)? {
        sink.record(&token);
        apply(&mut history, &token)?;
    }
    Ok(history.into_vec())
}

/// Decompress a framed stream held in memory.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress_from_reader(data)
}

/// Replay one token against the output produced so far.
fn apply(history: &mut HistoryBuffer, token: &Token) -> Result<()> {
    match *token {
        Token::Literal(byte) => {
            history.push_literal(byte);
            Ok(())
        }
        Token::Reference { offset, length } => {
            history.copy_match(offset as usize, length as usize)
        }
    }
}
