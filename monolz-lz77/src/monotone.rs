//! The monotone integer code.
//!
//! A non-negative integer `i` is written as: the bit-length `L` of its
//! binary representation in unary (`L` one-bits, one terminating zero-bit),
//! then the `L` binary digits themselves, most significant first. For
//! `i = 0` the binary representation is the single digit `0`. Every code is
//! exactly `2L + 1` bits.
//!
//! The payload keeps its leading one bit even though the unary prefix
//! already implies it. That makes the code one bit longer than canonical
//! Elias gamma; the redundant form is the wire contract and both sides of
//! the codec must reproduce it bit-for-bit.
//!
//! ```text
//! 0 -> 10 0        3 bits
//! 1 -> 10 1        3 bits
//! 2 -> 110 10      5 bits
//! 5 -> 1110 101    7 bits
//! ```

use monolz_core::bitstream::{BitReader, BitWriter};
use monolz_core::error::{MonoLzError, Result};
use std::io::{Read, Write};

/// Widest payload the decoder accepts; anything longer cannot name a
/// representable length.
const MAX_PAYLOAD_BITS: u32 = 32;

/// Bit-length of the binary representation of `value` (1 for zero).
fn payload_width(value: u32) -> u32 {
    if value == 0 {
        1
    } else {
        32 - value.leading_zeros()
    }
}

/// Exact size of the monotone code for `value`, in bits.
pub fn encoded_bits(value: u32) -> u64 {
    2 * payload_width(value) as u64 + 1
}

/// Write the monotone code for `value`.
pub fn encode<W: Write>(writer: &mut BitWriter<W>, value: u32) -> Result<()> {
    let width = payload_width(value);
    for _ in 0..width {
        writer.write_bit(true)?;
    }
    writer.write_bit(false)?;
    for i in (0..width).rev() {
        writer.write_bit(value >> i & 1 != 0)?;
    }
    Ok(())
}

/// Read one monotone code.
///
/// Running out of bits inside the unary prefix or the payload is a
/// [`MonoLzError::TruncatedCode`]; a payload wider than 32 bits is a
/// [`MonoLzError::OversizedCode`].
pub fn decode<R: Read>(reader: &mut BitReader<R>) -> Result<u32> {
    let mut width = 0u32;
    loop {
        match next_bit(reader)? {
            true => width += 1,
            false => break,
        }
    }
    if width > MAX_PAYLOAD_BITS {
        return Err(MonoLzError::oversized_code(width));
    }

    let mut value = 0u32;
    for _ in 0..width {
        value = value << 1 | next_bit(reader)? as u32;
    }
    Ok(value)
}

/// Read one bit, reporting stream exhaustion as a truncated code.
fn next_bit<R: Read>(reader: &mut BitReader<R>) -> Result<bool> {
    match reader.read_bit() {
        Ok(bit) => Ok(bit),
        Err(MonoLzError::UnexpectedEof { .. }) => {
            Err(MonoLzError::truncated_code(reader.bit_position()))
        }
        Err(e) => Err(e),
    }
}
