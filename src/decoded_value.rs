use core::fmt;

use crate::{
    BitFieldLayout, FieldBits, FloatWidth, ParseFailure, Result,
    float_width::strip_hex_prefix,
};

/// The literal bit pattern parsed from hex, held in the low 32 or 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawBits(u64);

impl RawBits {
    pub fn value(self) -> u64 { self.0 }
}

impl fmt::LowerHex for RawBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// A native float obtained by reinterpreting raw bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatValue {
    Binary32(f32),
    Binary64(f64),
}

impl FloatValue {
    pub fn width(self) -> FloatWidth {
        match self {
            Self::Binary32(_) => FloatWidth::Binary32,
            Self::Binary64(_) => FloatWidth::Binary64,
        }
    }

    /// The value's bit pattern, recovered by inverse reinterpretation.
    pub fn to_bits(self) -> RawBits {
        match self {
            Self::Binary32(v) => RawBits(v.to_bits() as u64),
            Self::Binary64(v) => RawBits(v.to_bits()),
        }
    }

    pub fn is_nan(self) -> bool {
        match self {
            Self::Binary32(v) => v.is_nan(),
            Self::Binary64(v) => v.is_nan(),
        }
    }
}

impl fmt::Display for FloatValue {
    /// Shortest round-trip form, or fixed decimals when a precision is given.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Self::Binary32(v), Some(p)) => write!(f, "{v:.p$}"),
            (Self::Binary64(v), Some(p)) => write!(f, "{v:.p$}"),
            (Self::Binary32(v), None) => write!(f, "{v}"),
            (Self::Binary64(v), None) => write!(f, "{v}"),
        }
    }
}

/// IEEE‑754 category of a decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

impl fmt::Display for FloatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Zero => "zero",
            Self::Subnormal => "subnormal",
            Self::Normal => "normal",
            Self::Infinite => "infinite",
            Self::Nan => "nan",
        })
    }
}

/// A hex string decoded into its IEEE‑754 width, raw bits, and native float.
///
/// The float is always produced by bit reinterpretation, so NaN payloads,
/// signed zeros, subnormals, and infinities come through exactly as encoded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedValue {
    width: FloatWidth,
    bits: RawBits,
    value: FloatValue,
}

impl DecodedValue {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Reinterprets the low `width.bit_count()` bits of `bits`; higher bits
    /// are discarded.
    pub fn from_bits(width: FloatWidth, bits: u64) -> Self {
        let bits = bits & width.mask();
        let value = match width {
            FloatWidth::Binary32 => {
                FloatValue::Binary32(f32::from_bits(bits as u32))
            }
            FloatWidth::Binary64 => FloatValue::Binary64(f64::from_bits(bits)),
        };
        Self { width, bits: RawBits(bits), value }
    }

    pub fn from_f32(value: f32) -> Self {
        Self::from_bits(FloatWidth::Binary32, value.to_bits() as u64)
    }

    pub fn from_f64(value: f64) -> Self {
        Self::from_bits(FloatWidth::Binary64, value.to_bits())
    }

    /// Construct from a big‑endian byte slice of length 4 or 8.
    pub fn from_be_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes.len() {
            4 => Some(Self::from_bits(
                FloatWidth::Binary32,
                u32::from_be_bytes(bytes.try_into().ok()?) as u64,
            )),
            8 => Some(Self::from_bits(
                FloatWidth::Binary64,
                u64::from_be_bytes(bytes.try_into().ok()?),
            )),
            _ => None,
        }
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    pub fn width(&self) -> FloatWidth { self.width }

    pub fn bits(&self) -> RawBits { self.bits }

    pub fn value(&self) -> FloatValue { self.value }

    pub fn as_f32(&self) -> Option<f32> {
        match self.value {
            FloatValue::Binary32(v) => Some(v),
            FloatValue::Binary64(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            FloatValue::Binary64(v) => Some(v),
            FloatValue::Binary32(_) => None,
        }
    }

    /// Returns the raw bits in big‑endian order (4 or 8 bytes).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let bytes = self.bits.0.to_be_bytes();
        bytes[8 - self.width.byte_len()..].to_vec()
    }

    pub fn layout(&self) -> BitFieldLayout { self.width.layout() }

    /// Returns the sign bit (true if set).
    pub fn sign(&self) -> bool {
        (self.bits.0 >> (self.width.bit_count() - 1)) & 1 == 1
    }

    /// The biased exponent field.
    pub fn exponent_bits(&self) -> u64 {
        let mask = (1u64 << self.width.exponent_width()) - 1;
        (self.bits.0 >> self.width.mantissa_width()) & mask
    }

    /// The fraction field, without the implicit leading bit.
    pub fn mantissa_bits(&self) -> u64 {
        self.bits.0 & ((1u64 << self.width.mantissa_width()) - 1)
    }

    pub fn class(&self) -> FloatClass {
        let exp_max = (1u64 << self.width.exponent_width()) - 1;
        match (self.exponent_bits(), self.mantissa_bits()) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (e, 0) if e == exp_max => FloatClass::Infinite,
            (e, _) if e == exp_max => FloatClass::Nan,
            _ => FloatClass::Normal,
        }
    }

    /// The exponent with the bias removed. Subnormals report the minimum
    /// normal exponent; zeros, infinities, and NaNs have none.
    pub fn unbiased_exponent(&self) -> Option<i32> {
        let bias = self.width.exponent_bias();
        match self.class() {
            FloatClass::Normal => Some(self.exponent_bits() as i32 - bias),
            FloatClass::Subnormal => Some(1 - bias),
            FloatClass::Zero | FloatClass::Infinite | FloatClass::Nan => None,
        }
    }

    /// Returns true for a NaN whose quiet bit (the mantissa MSB) is set.
    pub fn is_quiet_nan(&self) -> bool {
        let quiet_bit = self.width.mantissa_width() - 1;
        self.class() == FloatClass::Nan
            && (self.mantissa_bits() >> quiet_bit) & 1 == 1
    }

    /// The full bit pattern, most significant bit first, as `'0'`/`'1'`.
    pub fn bit_string(&self) -> String {
        format!("{:0width$b}", self.bits.0, width = self.width.bit_count())
    }

    /// Sign, exponent, and mantissa slices of `bit_string`.
    pub fn fields<'a>(&self, bit_string: &'a str) -> Option<FieldBits<'a>> {
        self.layout().split(bit_string)
    }
}

// ─────────────────────────────── Decoding ───────────────────────────────────

/// Parses `text` as hex and reinterprets its bits as a `width` float.
///
/// The digit count (after any `0x` prefix) must classify to `width`; the
/// decoder does not assume `classify` was called first.
pub fn decode(text: &str, width: FloatWidth) -> Result<DecodedValue> {
    let digits = strip_hex_prefix(text);
    let count = digits.len();
    if FloatWidth::from_digit_count(count) != Some(width) {
        return Err(ParseFailure::WidthMismatch { digits: count, width }.into());
    }

    let padded = format!("{digits:0>capacity$}", capacity = width.hex_digits());
    let mut buf = [0u8; 8];
    hex::decode_to_slice(padded, &mut buf[8 - width.byte_len()..])?;

    Ok(DecodedValue::from_bits(width, u64::from_be_bytes(buf)))
}
