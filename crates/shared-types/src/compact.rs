//! Compact difficulty encoding ("nBits")
//!
//! A 32-bit floating-point style encoding of a 256-bit target:
//! the high byte is the size in bytes, the low 23 bits the mantissa and bit 23
//! the sign. Encoding and decoding must be bit-exact with every other node.
//!
//! **Target is a CEILING**: a hash is valid when it is less than or equal to
//! the decoded target, so a higher target is an easier block.

use primitive_types::U256;

const MANTISSA_MASK: u32 = 0x007f_ffff;
const SIGN_BIT: u32 = 0x0080_0000;

/// Result of decoding a compact target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactTarget {
    /// Decoded target (zero when the encoding overflows 256 bits).
    pub target: U256,
    /// Sign bit was set on a non-zero mantissa.
    pub negative: bool,
    /// The encoded value does not fit in 256 bits.
    pub overflow: bool,
}

impl CompactTarget {
    /// True when the encoding is usable as a proof-of-work target.
    pub fn is_valid_target(&self) -> bool {
        !self.negative && !self.overflow && !self.target.is_zero()
    }
}

/// Decode a compact target.
pub fn target_from_compact(bits: u32) -> CompactTarget {
    let size = bits >> 24;
    let mut word = bits & MANTISSA_MASK;

    let negative = word != 0 && (bits & SIGN_BIT) != 0;
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        U256::from(word)
    } else if overflow || word == 0 {
        U256::zero()
    } else {
        U256::from(word) << (8 * (size as usize - 3))
    };

    CompactTarget {
        target,
        negative,
        overflow,
    }
}

/// Encode a target in compact form, rounding the mantissa down.
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = target.bits().div_ceil(8) as u32;

    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size as usize - 3))).low_u64() as u32
    };

    // A set top mantissa bit would read back as negative; shift it out
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | (size << 24)
}
