//! # MonoLZ Core
//!
//! Core components for the MonoLZ compression library:
//!
//! - [`bitstream`]: bit-level I/O for the monotone length code
//! - [`history`]: growable output arena used as the decoder's window
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! MonoLZ is layered:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ L3: monolz-cli                               │
//! │     file front end, stats, token trace       │
//! ├──────────────────────────────────────────────┤
//! │ L2: monolz-lz77                              │
//! │     match finder, encoder/decoder, framing   │
//! ├──────────────────────────────────────────────┤
//! │ L1: this crate                               │
//! │     BitReader/BitWriter, HistoryBuffer       │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod history;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{MonoLzError, Result};
pub use history::HistoryBuffer;
