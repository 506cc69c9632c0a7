//! Greedy LZ77 compression.

use crate::frame;
use crate::matcher::MatchFinder;
use crate::params::Lz77Params;
use crate::token::{NullSink, Token, TokenSink};
use monolz_core::bitstream::BitWriter;
use monolz_core::error::Result;
use std::io::Write;

/// Greedy single-pass LZ77 encoder.
///
/// At every position the longest window match wins outright; emitted tokens
/// are never revisited. With fixed parameters the output is a pure function
/// of the input, byte for byte.
#[derive(Debug, Clone)]
pub struct Lz77Encoder {
    params: Lz77Params,
    finder: MatchFinder,
}

impl Lz77Encoder {
    /// Create an encoder with the given parameters.
    pub fn new(params: Lz77Params) -> Self {
        Self {
            params,
            finder: MatchFinder::new(params),
        }
    }

    /// The parameters this encoder was built with.
    pub fn params(&self) -> Lz77Params {
        self.params
    }

    /// Tokenize `source`.
    pub fn encode(&self, source: &[u8]) -> Vec<Token> {
        self.encode_with_sink(source, &mut NullSink)
    }

    /// Tokenize `source`, reporting each emitted token to `sink`.
    pub fn encode_with_sink(&self, source: &[u8], sink: &mut dyn TokenSink) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < source.len() {
            let token = match self.finder.longest_match(source, pos) {
                Some(m) => {
                    pos += m.length as usize;
                    Token::Reference {
                        offset: m.offset,
                        length: m.length,
                    }
                }
                None => {
                    let token = Token::Literal(source[pos]);
                    pos += 1;
                    token
                }
            };
            sink.record(&token);
            tokens.push(token);
        }

        tokens
    }

    /// Compress `source` into framed form on `writer`.
    pub fn compress_to_writer<W: Write>(&self, source: &[u8], writer: W) -> Result<()> {
        self.compress_to_writer_with_sink(source, writer, &mut NullSink)
    }

    /// Compress `source` onto `writer`, reporting each token to `sink`.
    pub fn compress_to_writer_with_sink<W: Write>(
        &self,
        source: &[u8],
        writer: W,
        sink: &mut dyn TokenSink,
    ) -> Result<()> {
        let mut bits = BitWriter::new(writer);
        for token in self.encode_with_sink(source, sink) {
            frame::write_token(&mut bits, &token)?;
        }
        bits.flush()
    }

    /// Compress `source` into a new byte vector.
    pub fn compress_to_vec(&self, source: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.compress_to_writer(source, &mut output)?;
        Ok(output)
    }
}

impl Default for Lz77Encoder {
    fn default() -> Self {
        Self::new(Lz77Params::default())
    }
}

/// Compress `source` with the given parameters.
///
/// Cannot fail on any byte input; only a failing writer could, and this
/// variant writes to memory.
pub fn compress(source: &[u8], params: &Lz77Params) -> Result<Vec<u8>> {
    Lz77Encoder::new(*params).compress_to_vec(source)
}
