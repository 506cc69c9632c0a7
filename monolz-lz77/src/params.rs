//! Compression parameters.
//!
//! The three constants are fixed per stream and are not stored in it: the
//! producer and any later re-encoder must agree on them out-of-band.
//! Decoding does not consult them at all.

/// Default search window, in bytes.
pub const DEFAULT_WINDOW_SIZE: usize = 4096;
/// Default minimum match length worth a reference instead of literals.
pub const DEFAULT_MIN_MATCH: usize = 4;
/// Default cap on a single match length.
pub const DEFAULT_MAX_MATCH: usize = 255;
/// Largest window the 16-bit offset field can address.
pub const MAX_WINDOW_SIZE: usize = u16::MAX as usize;

/// Tuning parameters for the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Params {
    /// How far back matches may be searched.
    window_size: usize,
    /// Minimum match length that is worth encoding as a reference.
    min_match: usize,
    /// Hard cap on a single match length.
    max_match: usize,
}

impl Lz77Params {
    /// Create a parameter set.
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero or exceeds [`MAX_WINDOW_SIZE`], if
    /// `min_match` is zero, or if `max_match < min_match`.
    pub fn new(window_size: usize, min_match: usize, max_match: usize) -> Self {
        assert!(window_size > 0, "window size must be greater than 0");
        assert!(
            window_size <= MAX_WINDOW_SIZE,
            "window size {} does not fit the 16-bit offset field",
            window_size
        );
        assert!(min_match > 0, "minimum match length must be greater than 0");
        assert!(
            max_match >= min_match,
            "maximum match length {} is below the minimum {}",
            max_match,
            min_match
        );

        Self {
            window_size,
            min_match,
            max_match,
        }
    }

    /// The search window size in bytes.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The minimum match length encoded as a reference.
    pub fn min_match(&self) -> usize {
        self.min_match
    }

    /// The maximum length of a single match.
    pub fn max_match(&self) -> usize {
        self.max_match
    }
}

impl Default for Lz77Params {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, DEFAULT_MIN_MATCH, DEFAULT_MAX_MATCH)
    }
}
