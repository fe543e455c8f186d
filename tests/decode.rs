use hex_ieee754::{
    Error, FloatClass, FloatValue, FloatWidth, InvalidWidth, ParseFailure,
    classify, decode,
};

fn decode_str(text: &str) -> hex_ieee754::DecodedValue {
    let width = classify(text).unwrap();
    decode(text, width).unwrap()
}

#[test]
fn one_point_zero_single() {
    let value = decode_str("3F800000");
    assert_eq!(value.width(), FloatWidth::Binary32);
    assert_eq!(value.value(), FloatValue::Binary32(1.0));
    assert_eq!(value.value().width(), FloatWidth::Binary32);
    assert_eq!(value.as_f64(), None);

    let bits = value.bit_string();
    let fields = value.fields(&bits).unwrap();
    assert_eq!(fields.sign, "0");
    assert_eq!(fields.exponent, "01111111");
    assert_eq!(fields.mantissa, "0".repeat(23));
    assert_eq!(value.unbiased_exponent(), Some(0));
}

#[test]
fn zero_double() {
    let value = decode_str("0000000000000000");
    assert_eq!(value.width(), FloatWidth::Binary64);
    assert_eq!(value.value().width(), FloatWidth::Binary64);
    assert_eq!(value.as_f64(), Some(0.0));
    assert!(!value.sign());
    assert_eq!(value.class(), FloatClass::Zero);
    assert_eq!(value.bit_string(), "0".repeat(64));
}

#[test]
fn prefix_is_optional() {
    let prefixed = decode_str("0x3F800000");
    let upper = decode_str("0X3F800000");
    let bare = decode_str("3F800000");
    assert_eq!(prefixed, bare);
    assert_eq!(upper, bare);
    assert_eq!(bare.as_f32(), Some(1.0));
}

#[test]
fn case_insensitive() {
    assert_eq!(classify("dead").unwrap(), classify("DEAD").unwrap());
    assert_eq!(decode_str("dead").bits(), decode_str("DEAD").bits());
    assert_eq!(decode_str("dead").bits().value(), 0xDEAD);
}

#[test]
fn quiet_nan_bits_preserved() {
    let value = decode_str("7FC00000");
    let v = value.as_f32().unwrap();
    assert!(v.is_nan());
    assert_eq!(v.to_bits(), 0x7FC0_0000);
    assert_eq!(value.class(), FloatClass::Nan);
    assert!(value.is_quiet_nan());
    assert_eq!(value.unbiased_exponent(), None);
}

#[test]
fn signaling_nan_payload_preserved() {
    let value = decode_str("FFF0000000000001");
    let v = value.as_f64().unwrap();
    assert!(v.is_nan());
    assert_eq!(v.to_bits(), 0xFFF0_0000_0000_0001);
    assert!(value.sign());
    assert!(!value.is_quiet_nan());
    assert_eq!(value.mantissa_bits(), 1);
}

#[test]
fn negative_infinity() {
    let value = decode_str("FF800000");
    assert_eq!(value.as_f32().unwrap().to_bits(), f32::NEG_INFINITY.to_bits());
    assert_eq!(value.class(), FloatClass::Infinite);
    assert!(value.sign());
}

#[test]
fn negative_zero() {
    let value = decode_str("80000000");
    let v = value.as_f32().unwrap();
    assert_eq!(v.to_bits(), (-0.0f32).to_bits());
    assert!(v.is_sign_negative());
    assert_eq!(value.class(), FloatClass::Zero);
}

#[test]
fn subnormal_double() {
    let value = decode_str("0000000000000001");
    assert_eq!(value.as_f64(), Some(f64::from_bits(1)));
    assert_eq!(value.class(), FloatClass::Subnormal);
    assert_eq!(value.unbiased_exponent(), Some(-1022));
}

#[test]
fn short_input_is_right_aligned() {
    // "1" is the smallest binary32 subnormal, not 1.0
    let value = decode_str("1");
    assert_eq!(value.width(), FloatWidth::Binary32);
    assert_eq!(value.bits().value(), 1);
}

#[test]
fn digit_count_selects_width() {
    assert_eq!(classify("00000000").unwrap(), FloatWidth::Binary32);
    assert_eq!(classify("FFFFFFFF").unwrap(), FloatWidth::Binary32);
    assert_eq!(classify("000000000").unwrap(), FloatWidth::Binary64);
    assert_eq!(classify("0x000000001").unwrap(), FloatWidth::Binary64);
    assert_eq!(classify("FFFFFFFFFFFFFFFF").unwrap(), FloatWidth::Binary64);
}

#[test]
fn ten_digits_decode_as_double() {
    let value = decode_str("03FF000000");
    assert_eq!(value.width(), FloatWidth::Binary64);
    assert_eq!(value.bits().value(), 0x3FF_0000_00);
}

#[test]
fn rejects_empty() {
    for text in ["", "0x", "0X"] {
        assert!(matches!(
            classify(text),
            Err(Error::InvalidWidth(InvalidWidth::Empty))
        ));
    }
}

#[test]
fn rejects_oversized() {
    assert!(matches!(
        classify("00000000000000000"),
        Err(Error::InvalidWidth(InvalidWidth::Oversized(17)))
    ));
    assert!(matches!(
        classify("0x00000000000000000"),
        Err(Error::InvalidWidth(InvalidWidth::Oversized(17)))
    ));
}

#[test]
fn rejects_non_hex() {
    assert!(matches!(
        classify("GGGG"),
        Err(Error::InvalidWidth(InvalidWidth::NonHex { ch: 'G', index: 0 }))
    ));
    assert!(matches!(
        classify("0x3F8Z"),
        Err(Error::InvalidWidth(InvalidWidth::NonHex { ch: 'Z', index: 5 }))
    ));
}

#[test]
fn rejects_malformed_prefix() {
    assert!(matches!(
        classify("x3F"),
        Err(Error::InvalidWidth(InvalidWidth::MalformedPrefix(0)))
    ));
    assert!(matches!(
        classify("0x0x1"),
        Err(Error::InvalidWidth(InvalidWidth::MalformedPrefix(3)))
    ));
}

#[test]
fn whitespace_is_not_trimmed() {
    assert!(classify(" 3F800000").is_err());
    assert!(classify("3F800000\n").is_err());
}

#[test]
fn decoder_rechecks_width() {
    assert!(matches!(
        decode("123456789", FloatWidth::Binary32),
        Err(Error::ParseFailure(ParseFailure::WidthMismatch {
            digits: 9,
            width: FloatWidth::Binary32,
        }))
    ));
    assert!(matches!(
        decode("DEAD", FloatWidth::Binary64),
        Err(Error::ParseFailure(ParseFailure::WidthMismatch { .. }))
    ));
}

#[test]
fn decoder_rechecks_digits() {
    assert!(matches!(
        decode("GGGG", FloatWidth::Binary32),
        Err(Error::ParseFailure(ParseFailure::Hex(_)))
    ));
}

#[test]
fn error_messages() {
    let err = classify("GGGG").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid hex input (non-hex character 'G' at index 0)"
    );
    let err = classify("").unwrap_err();
    assert_eq!(err.to_string(), "invalid hex input (no hex digits)");
    let err = decode("123456789", FloatWidth::Binary32).unwrap_err();
    assert_eq!(
        err.to_string(),
        "hex parse failure (9 hex digits do not describe a binary32 pattern)"
    );
}
