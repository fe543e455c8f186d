//! Decoding of Hexadecimal Bit Patterns into IEEE‑754 Floats
//!
//! A hex string of 1–8 digits (optionally `0x`-prefixed) is read as a
//! binary32 bit pattern and one of 9–16 digits as binary64. [`classify`]
//! picks the width, [`decode`] reinterprets the bits as a native `f32` or
//! `f64` and exposes the sign, exponent, and mantissa fields.
//!
//! Reinterpretation is bit-exact: NaN payloads, signed zeros, subnormals,
//! and infinities are preserved, and [`FloatValue::to_bits`] always returns
//! the decoded pattern.
//!
//! ```
//! use hex_ieee754::{FloatWidth, classify, decode};
//!
//! let width = classify("0x3F800000").unwrap();
//! assert_eq!(width, FloatWidth::Binary32);
//!
//! let value = decode("0x3F800000", width).unwrap();
//! assert_eq!(value.as_f32(), Some(1.0));
//!
//! let bits = value.bit_string();
//! let fields = value.fields(&bits).unwrap();
//! assert_eq!(fields.exponent, "01111111");
//! ```
//!
//! The [`report`] and [`session`] modules render decoded values and drive the
//! interactive `float` command; [`cbor`] exports values as dCBOR, carrying
//! NaN bit patterns in a tag-102 byte string.

mod float_width;
pub use float_width::*;
mod decoded_value;
pub use decoded_value::*;
mod error;
pub use error::*;
mod config;
pub use config::*;
pub mod cbor;
pub use cbor::NanBits;
pub mod report;
pub use report::Report;
pub mod session;
pub use session::{Outcome, Session};
