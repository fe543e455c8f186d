use core::fmt;
use dcbor::prelude::*;
use crate::{DecodedValue, Error, FloatValue, Result};

/// CBOR tag for `nan-bstr`. Not exported by any published `bc-tags` release.
const TAG_NAN_BSTR: u64 = 102;

/// A NaN bit pattern carried in a CBOR byte string tagged with 102
/// ("nan-bstr"), big‑endian, 4 or 8 bytes long.
///
/// dCBOR canonicalizes every NaN to a single half-precision encoding, so a
/// NaN decoded from hex would lose its sign and payload as a plain CBOR
/// float. Wrapping the raw bits keeps them intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NanBits(ByteString);

impl NanBits {
    /// Wraps the bits of `value` if it is a NaN.
    pub fn from_decoded(value: &DecodedValue) -> Option<Self> {
        value
            .value()
            .is_nan()
            .then(|| Self(ByteString::from(value.to_be_bytes())))
    }

    /// Returns the raw bytes in big‑endian order.
    pub fn as_bytes(&self) -> &[u8] { self.0.data() }

    /// Reinterprets the carried bits. Fails unless the bytes are a 4- or
    /// 8-byte NaN pattern.
    pub fn to_decoded(&self) -> Result<DecodedValue> {
        let decoded = DecodedValue::from_be_bytes(self.as_bytes())
            .ok_or_else(|| {
                Error::Cbor(dcbor::Error::msg(format!(
                    "nan-bstr must be 4 or 8 bytes, got {}",
                    self.0.len()
                )))
            })?;
        if !decoded.value().is_nan() {
            return Err(Error::Cbor(dcbor::Error::msg("not a NaN bit pattern")));
        }
        Ok(decoded)
    }
}

impl CBORTagged for NanBits {
    fn cbor_tags() -> Vec<Tag> {
        tags_for_values(&[TAG_NAN_BSTR])
    }
}

impl CBORTaggedEncodable for NanBits {
    fn untagged_cbor(&self) -> CBOR {
        CBOR::from(self.0.clone())
    }
}

impl CBORTaggedDecodable for NanBits {
    fn from_untagged_cbor(cbor: CBOR) -> dcbor::Result<Self> {
        let bs: ByteString =
            cbor.try_into().map_err(|_| dcbor::Error::WrongType)?;
        let nan = NanBits(bs);
        nan.to_decoded()?;
        Ok(nan)
    }
}

impl From<NanBits> for CBOR {
    fn from(value: NanBits) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for NanBits {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(cbor)
    }
}

impl fmt::Display for NanBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nan-bstr({})", hex::encode(self.as_bytes()))
    }
}

// ─────────────────────────── DecodedValue ↔ CBOR ────────────────────────────

impl DecodedValue {
    /// Encodes the value as dCBOR. Non-NaN values become ordinary CBOR
    /// numbers (subject to dCBOR numeric reduction); NaNs become a tag-102
    /// byte string holding the exact bit pattern.
    pub fn to_cbor(&self) -> CBOR {
        if let Some(nan) = NanBits::from_decoded(self) {
            return nan.into();
        }
        match self.value() {
            FloatValue::Binary32(v) => CBOR::from(v),
            FloatValue::Binary64(v) => CBOR::from(v),
        }
    }

    /// Recovers a NaN value previously encoded by `to_cbor`.
    pub fn from_nan_cbor(cbor: CBOR) -> Result<Self> {
        NanBits::try_from(cbor)?.to_decoded()
    }
}

/// `<hex> <diagnostic>` for a value's CBOR encoding.
pub fn cbor_summary(value: &DecodedValue) -> String {
    let cbor = value.to_cbor();
    format!("{} {}", hex::encode(cbor.to_cbor_data()), cbor.diagnostic())
}
