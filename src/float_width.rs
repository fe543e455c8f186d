use core::{fmt, ops::Range};

use crate::{InvalidWidth, Result};

/// Width of the IEEE‑754 interchange format a hex string encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// 4-octet IEEE‑754 binary32 (aka single, f32)
    Binary32,
    /// 8-octet IEEE‑754 binary64 (aka double, f64)
    Binary64,
}

impl FloatWidth {
    /// Maps a hex digit count (prefix already removed) to a width: 1–8 digits
    /// are binary32, 9–16 are binary64.
    pub fn from_digit_count(digits: usize) -> Option<Self> {
        match digits {
            1..=8 => Some(Self::Binary32),
            9..=16 => Some(Self::Binary64),
            _ => None,
        }
    }

    pub fn bit_count(self) -> usize {
        match self {
            Self::Binary32 => 32,
            Self::Binary64 => 64,
        }
    }

    pub fn exponent_width(self) -> usize {
        match self {
            Self::Binary32 => 8,
            Self::Binary64 => 11,
        }
    }

    pub fn mantissa_width(self) -> usize {
        self.bit_count() - 1 - self.exponent_width()
    }

    /// Number of hex digits that fill the width exactly.
    pub fn hex_digits(self) -> usize { self.bit_count() / 4 }

    pub fn byte_len(self) -> usize { self.bit_count() / 8 }

    pub fn exponent_bias(self) -> i32 {
        match self {
            Self::Binary32 => 127,
            Self::Binary64 => 1023,
        }
    }

    /// All-ones mask covering the low `bit_count()` bits.
    pub fn mask(self) -> u64 {
        match self {
            Self::Binary32 => u32::MAX as u64,
            Self::Binary64 => u64::MAX,
        }
    }

    pub fn layout(self) -> BitFieldLayout {
        let exponent_end = 1 + self.exponent_width();
        BitFieldLayout {
            sign: 0..1,
            exponent: 1..exponent_end,
            mantissa: exponent_end..self.bit_count(),
        }
    }
}

impl fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binary{}", self.bit_count())
    }
}

// ────────────────────────────── Bit fields ──────────────────────────────────

/// Half-open spans of the sign, exponent, and mantissa fields, indexed from
/// the most significant bit (index 0) down to the least significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitFieldLayout {
    pub sign: Range<usize>,
    pub exponent: Range<usize>,
    pub mantissa: Range<usize>,
}

/// The three fields of an MSB-first bit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBits<'a> {
    pub sign: &'a str,
    pub exponent: &'a str,
    pub mantissa: &'a str,
}

impl BitFieldLayout {
    pub fn bit_count(&self) -> usize { self.mantissa.end }

    /// Splits an MSB-first `'0'`/`'1'` string along the field boundaries.
    ///
    /// Returns `None` if `bits` is not exactly `bit_count()` ASCII
    /// characters long.
    pub fn split<'a>(&self, bits: &'a str) -> Option<FieldBits<'a>> {
        if bits.len() != self.bit_count() || !bits.is_ascii() {
            return None;
        }
        Some(FieldBits {
            sign: &bits[self.sign.clone()],
            exponent: &bits[self.exponent.clone()],
            mantissa: &bits[self.mantissa.clone()],
        })
    }
}

// ───────────────────────────── Classification ───────────────────────────────

/// Removes an optional `0x`/`0X` prefix.
pub(crate) fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Determines whether `text` encodes a binary32 or binary64 bit pattern.
///
/// An optional `0x`/`0X` prefix is ignored. The remaining 1–16 characters
/// must all be hex digits (either case); 1–8 digits select binary32 and 9–16
/// select binary64, regardless of leading zeros. Surrounding whitespace is
/// not trimmed and is rejected like any other non-hex character.
pub fn classify(text: &str) -> Result<FloatWidth> {
    let digits = strip_hex_prefix(text);
    let offset = text.len() - digits.len();

    let count = digits.chars().count();
    if count == 0 {
        return Err(InvalidWidth::Empty.into());
    }
    let Some(width) = FloatWidth::from_digit_count(count) else {
        return Err(InvalidWidth::Oversized(count).into());
    };

    for (i, ch) in digits.char_indices() {
        let index = offset + i;
        if ch == 'x' || ch == 'X' {
            return Err(InvalidWidth::MalformedPrefix(index).into());
        }
        if !ch.is_ascii_hexdigit() {
            return Err(InvalidWidth::NonHex { ch, index }.into());
        }
    }

    Ok(width)
}
