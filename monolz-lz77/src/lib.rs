//! # MonoLZ LZ77
//!
//! Sliding-window LZ77 compression with monotone-coded match lengths.
//!
//! The encoder greedily replaces repeated substrings within a bounded
//! history window by `(offset, length)` back-references; lengths travel as
//! a self-delimiting variable-length bit code, offsets as fixed 16-bit
//! fields, and each token is framed behind a one-byte flag. The decoder
//! rebuilds the data purely from its own growing output — back-references
//! may overlap the bytes they are producing, which is how runs compress.
//!
//! ## Example
//!
//! ```rust
//! use monolz_lz77::{Lz77Params, compress, decompress};
//!
//! let source = b"who chatters to you will chatter about you";
//! let packed = compress(source, &Lz77Params::default()).unwrap();
//! let restored = decompress(&packed).unwrap();
//! assert_eq!(restored, source);
//! ```
//!
//! The whole input is held in memory and processed in one pass; there is no
//! streaming mode. Malformed compressed input fails with a specific
//! [`MonoLzError`](monolz_core::MonoLzError), never with a partial result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod encode;
pub mod frame;
pub mod matcher;
pub mod monotone;
pub mod params;
pub mod token;

// Re-exports
pub use decode::{decode_tokens, decompress, decompress_from_reader};
pub use encode::{Lz77Encoder, compress};
pub use matcher::{Match, MatchFinder};
pub use params::Lz77Params;
pub use token::{CountingSink, NullSink, Token, TokenSink};
