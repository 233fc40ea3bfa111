//! Turns a `(type code, payload)` pair into scalars.
//!
//! Property item payloads are always little-endian, regardless of the byte
//! order of the file they were pulled from. The image decoder has already
//! normalized them.

use winnow::{
    Parser as _,
    binary::{Endianness, i32, u8, u16, u32},
    error::EmptyError,
};

use crate::error::{DecodeError, DecodeResult};
use propdecode_types::primitives::{Rational, SRational, Scalar, TypeCode};

/// Decodes a payload according to its type code.
///
/// Numeric types yield one scalar per element. Text types (ASCII and
/// undefined) yield exactly one [`Scalar::Text`].
///
/// Trailing bytes that don't make up a whole element are ignored, so this
/// never reads past the end of `bytes`.
///
/// # Errors
///
/// Unknown type codes (including 6 and 8) and rationals with a zero
/// denominator are reported as [`DecodeError`]s.
pub fn decode(type_code: i16, bytes: &[u8]) -> DecodeResult<Vec<Scalar>> {
    let ty = TypeCode::try_from(type_code).map_err(|_| {
        log::error!("Encountered unknown type code: `{type_code}`");
        DecodeError::UnsupportedType { code: type_code }
    })?;

    match ty {
        TypeCode::Ascii => Ok(vec![Scalar::Text(seven_bit_text(strip_terminator(bytes)))]),
        TypeCode::Undefined => Ok(vec![Scalar::Text(seven_bit_text(bytes))]),
        _ => decode_list(ty, bytes),
    }
}

/// Decodes a payload of fixed-stride elements.
fn decode_list(ty: TypeCode, bytes: &[u8]) -> DecodeResult<Vec<Scalar>> {
    let stride = ty.stride();
    let count = bytes.len() / stride;

    let leftover = bytes.len() % stride;
    if leftover != 0 {
        log::warn!(
            "Payload isn't a whole number of elements! Ignoring the trailing bytes. \
            ty: `{ty:?}`, len: `{}`, leftover: `{leftover}`",
            bytes.len()
        );
    }

    log::trace!("Decoding `{count}` elements of `{ty:?}`...");
    let input = &mut &bytes[..count * stride];
    let mut v: Vec<Scalar> = Vec::with_capacity(count);
    for index in 0..count {
        v.push(decode_scalar(ty, index, input).inspect_err(|e| {
            log::error!("Failed to decode element #{index} of `{ty:?}`. err: {e}")
        })?);
    }

    Ok(v)
}

/// Decodes one element off the front of `input`.
fn decode_scalar(ty: TypeCode, index: usize, input: &mut &[u8]) -> DecodeResult<Scalar> {
    const LE: Endianness = Endianness::Little;
    let outta_data = |_: EmptyError| DecodeError::OuttaData {
        code: ty as i16,
        index,
    };

    match ty {
        TypeCode::Byte => Ok(Scalar::Byte(u8.parse_next(input).map_err(outta_data)?)),

        TypeCode::Short => Ok(Scalar::Short(u16(LE).parse_next(input).map_err(outta_data)?)),

        TypeCode::Long => Ok(Scalar::Long(u32(LE).parse_next(input).map_err(outta_data)?)),

        TypeCode::SLong => Ok(Scalar::SLong(i32(LE).parse_next(input).map_err(outta_data)?)),

        TypeCode::Rational => {
            let r = Rational {
                numerator: u32(LE).parse_next(input).map_err(outta_data)?,
                denominator: u32(LE).parse_next(input).map_err(outta_data)?,
            };
            r.to_f64()
                .map(Scalar::Float)
                .ok_or(DecodeError::ZeroDenominator { index })
        }

        TypeCode::SRational => {
            let r = SRational {
                numerator: i32(LE).parse_next(input).map_err(outta_data)?,
                denominator: i32(LE).parse_next(input).map_err(outta_data)?,
            };
            r.to_f64()
                .map(Scalar::Float)
                .ok_or(DecodeError::ZeroDenominator { index })
        }

        // text types are decoded whole, never element-wise
        TypeCode::Ascii | TypeCode::Undefined => {
            log::error!("Asked to decode `{ty:?}` element-wise!");
            Err(DecodeError::UnsupportedType { code: ty as i16 })
        }
    }
}

/// Drops exactly one trailing NUL, if there is one.
fn strip_terminator(bytes: &[u8]) -> &[u8] {
    match bytes.split_last() {
        Some((0, rest)) => rest,
        _ => bytes,
    }
}

/// Decodes bytes as 7-bit text. Anything above `0x7F` becomes `?`.
pub(crate) fn seven_bit_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use propdecode_types::primitives::Scalar;

    use crate::{error::DecodeError, util::logger};

    use super::{decode, decode_scalar};
    use propdecode_types::primitives::TypeCode;

    #[test]
    fn text_types_have_no_elements() {
        logger();

        for ty in [TypeCode::Ascii, TypeCode::Undefined] {
            let input = &mut &b"abc"[..];
            assert_eq!(
                decode_scalar(ty, 0, input),
                Err(DecodeError::UnsupportedType { code: ty as i16 })
            );
        }
    }

    #[test]
    fn rational_divides_out() {
        logger();

        assert_eq!(
            decode(5, &[4, 0, 0, 0, 2, 0, 0, 0]),
            Ok(vec![Scalar::Float(2.0)])
        );
    }

    #[test]
    fn signed_rational_keeps_sign() {
        logger();

        assert_eq!(
            decode(10, &[0xFF, 0xFF, 0xFF, 0xFF, 2, 0, 0, 0]),
            Ok(vec![Scalar::Float(-0.5)])
        );
    }

    #[test]
    fn ascii_strips_exactly_one_terminator() {
        logger();

        assert_eq!(decode(2, b"Canon\0"), Ok(vec![Scalar::from("Canon")]));
        assert_eq!(decode(2, b"Canon\0\0"), Ok(vec![Scalar::from("Canon\0")]));
        assert_eq!(decode(2, b"Canon"), Ok(vec![Scalar::from("Canon")]));
        assert_eq!(decode(2, b"caf\xC3\0"), Ok(vec![Scalar::from("caf?")]));
    }

    #[test]
    fn undefined_is_text_with_nuls_kept() {
        logger();

        assert_eq!(decode(7, b"0220"), Ok(vec![Scalar::from("0220")]));
        assert_eq!(decode(7, &[3, 0]), Ok(vec![Scalar::from("\u{3}\0")]));
    }

    #[test]
    fn integers_are_little_endian() {
        logger();

        assert_eq!(
            decode(3, &[0x80, 0x07, 0x38, 0x04]),
            Ok(vec![Scalar::Short(1920), Scalar::Short(1080)])
        );
        assert_eq!(
            decode(4, &[0x00, 0x01, 0x00, 0x00]),
            Ok(vec![Scalar::Long(256)])
        );
        assert_eq!(
            decode(9, &[0xFE, 0xFF, 0xFF, 0xFF]),
            Ok(vec![Scalar::SLong(-2)])
        );
        assert_eq!(
            decode(1, &[1, 2, 3]),
            Ok(vec![Scalar::Byte(1), Scalar::Byte(2), Scalar::Byte(3)])
        );
    }

    /// Partial trailing elements are dropped instead of read past the end.
    #[test]
    fn truncated_payloads_stay_in_bounds() {
        logger();

        assert_eq!(decode(3, &[1, 0, 2]), Ok(vec![Scalar::Short(1)]));
        assert_eq!(decode(4, &[1, 0, 0]), Ok(vec![]));
        assert_eq!(
            decode(5, &[1, 0, 0, 0, 1, 0, 0, 0, 9, 9, 9]),
            Ok(vec![Scalar::Float(1.0)])
        );

        for code in [1_i16, 2, 3, 4, 5, 7, 9, 10] {
            for len in 0..17 {
                let bytes = vec![1_u8; len];
                assert!(decode(code, &bytes).is_ok(), "code {code}, len {len}");
            }
        }
    }

    #[test]
    fn zero_denominator_is_a_fault() {
        logger();

        assert_eq!(
            decode(5, &[1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]),
            Err(DecodeError::ZeroDenominator { index: 1 })
        );
        assert_eq!(
            decode(10, &[1, 0, 0, 0, 0, 0, 0, 0]),
            Err(DecodeError::ZeroDenominator { index: 0 })
        );
    }

    #[test]
    fn undefined_type_codes_are_rejected() {
        logger();

        for code in [0_i16, 6, 8, 11, -1] {
            assert_eq!(
                decode(code, &[0, 0, 0, 0]),
                Err(DecodeError::UnsupportedType { code })
            );
        }
    }
}
