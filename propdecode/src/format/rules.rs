//! The formatting strategies behind each [`Rule`](super::Rule).
//!
//! Every function here takes the decoded value (and sometimes the raw
//! payload) and returns a display value. None of them can fail; when the
//! input doesn't have the expected shape, they fall back to [`generic`].

use propdecode_types::{primitives::Scalar, value::Value};

use super::labels::{FILE_SOURCE, FlagLabels, Labels};
use crate::{decode::seven_bit_text, derive::time_of_day};

/// Shows the decoded value as-is.
pub(super) fn generic(decoded: &Value) -> Value {
    decoded.clone()
}

/// Maps each integer to its label. Unmapped values show as their decimal
/// string.
pub(super) fn enumeration(labels: Labels, decoded: &Value) -> Value {
    let label = |s: &Scalar| -> Scalar {
        let Some(v) = s.as_i64() else {
            return Scalar::Text(s.to_string());
        };

        match labels.iter().find(|(k, _)| *k == v) {
            Some((_, label)) => Scalar::from(*label),
            None => {
                log::debug!("No label for enumeration value `{v}`. Showing it as a number.");
                Scalar::Text(v.to_string())
            }
        }
    };

    Value::from_scalars(decoded.scalars().iter().map(label).collect())
}

/// Lists the label of every set bit, lowest bit first.
pub(super) fn flags(labels: FlagLabels, decoded: &Value) -> Value {
    let Some(bits) = first_int(decoded) else {
        return generic(decoded);
    };

    let set: Vec<Scalar> = labels
        .iter()
        .filter(|(bit, _)| bits & (1_i64 << bit) != 0)
        .map(|(_, label)| Scalar::from(*label))
        .collect();

    match set.is_empty() {
        true => Value::Empty,
        false => Value::Sequence(set),
    }
}

/// APEX aperture value -> `f/<2^(v/2)>`.
pub(super) fn aperture(decoded: &Value) -> Value {
    match first_float(decoded) {
        Some(v) => Value::text(format!("f/{:.1}", 2_f64.powf(v / 2.0))),
        None => generic(decoded),
    }
}

/// APEX shutter speed value -> `1/<round(2^v)> sec`.
///
/// The APEX value `v` means an exposure time of `2^-v` seconds. We show that
/// time as a fraction, so the denominator is `2^v`: a `v` of about 6.64 is
/// `1/100 sec`, not `1/0 sec`. Negative values (exposures over a second)
/// show as `0 sec`.
pub(super) fn shutter_speed(decoded: &Value) -> Value {
    match first_float(decoded) {
        Some(v) if v >= 0.0 => Value::text(format!("1/{} sec", 2_f64.powf(v).round() as i64)),
        Some(_) => Value::text("0 sec"),
        None => generic(decoded),
    }
}

/// Exposure time in seconds.
pub(super) fn exposure_time(decoded: &Value) -> Value {
    let Some(first) = decoded.scalars().first() else {
        return Value::Empty;
    };

    match first.as_f64() {
        Some(v) if v > 0.0 && v < 1.0 => {
            Value::text(format!("1/{} sec", (1.0 / v).round() as i64))
        }
        Some(_) => Value::text(format!("{first} sec")),
        None => generic(decoded),
    }
}

/// F-number -> `f/<v>`, with an extra decimal below 1.
pub(super) fn f_number(decoded: &Value) -> Value {
    match first_float(decoded) {
        Some(v) if v < 1.0 => Value::text(format!("f/{v:.2}")),
        Some(v) => Value::text(format!("f/{v:.1}")),
        None => generic(decoded),
    }
}

/// Exposure bias, in signed EV.
pub(super) fn exposure_bias(decoded: &Value) -> Value {
    match first_float(decoded) {
        Some(v) => Value::text(format!("{v:+.2} EV")),
        None => generic(decoded),
    }
}

/// Wraps the first value with some text on either side.
pub(super) fn affix(prefix: &str, suffix: &str, decoded: &Value) -> Value {
    match decoded.scalars().first() {
        Some(s) => Value::text(format!("{prefix}{s}{suffix}")),
        None => Value::Empty,
    }
}

/// Degrees, minutes and seconds -> `DDD° MM' SS.SSSS"`.
///
/// Some producers write fractional degrees or minutes, leaving the smaller
/// units at zero. In that case, the fraction is carried down into them.
pub(super) fn coordinate(decoded: &Value) -> Value {
    let Some([degrees, mut minutes, mut seconds]) = three_floats(decoded) else {
        return generic(decoded);
    };

    if degrees.fract() != 0.0 {
        if minutes == 0.0 && seconds == 0.0 {
            log::trace!("Coordinate has fractional degrees. Redistributing into minutes...");
            minutes = degrees.fract() * 60.0;
        } else {
            log::warn!(
                "Coordinate has fractional degrees along with minutes or seconds! \
                Dropping the fraction. degrees: `{degrees}`"
            );
        }
    }

    if minutes.fract() != 0.0 && seconds == 0.0 {
        log::trace!("Coordinate has fractional minutes. Redistributing into seconds...");
        seconds = minutes.fract() * 60.0;
        minutes = minutes.trunc();
    }

    Value::text(format!(
        "{:03}° {:02}' {:07.4}\"",
        degrees.trunc() as i64,
        minutes as i64,
        seconds
    ))
}

/// Hours, minutes and seconds (UTC) -> `HH:MM:SS.sss+0`.
///
/// Seconds are rounded to the millisecond before splitting, so a carry lands
/// in the minutes. Anything outside one day shows generically.
pub(super) fn gps_time(decoded: &Value) -> Value {
    match time_of_day(decoded) {
        Some(td) => Value::text(format!("{}+0", Value::TimeOfDay(td))),
        None => generic(decoded),
    }
}

/// Version bytes -> dotted version, like `2.2.0.0`.
pub(super) fn version_bytes(decoded: &Value) -> Value {
    let parts: Vec<String> = decoded.scalars().iter().map(|s| s.to_string()).collect();
    match parts.is_empty() {
        true => Value::Empty,
        false => Value::text(parts.join(".")),
    }
}

/// The file source byte.
///
/// Sigma cameras write this as four bytes instead of one; we use that to tell
/// them apart.
pub(super) fn file_source(raw: &[u8]) -> Value {
    match raw.first() {
        Some(3) if raw.len() == 4 => Value::text("Sigma Digital camera"),
        Some(&b) => enumeration(FILE_SOURCE, &Value::Scalar(Scalar::Byte(b))),
        None => Value::Empty,
    }
}

/// The scene type byte.
pub(super) fn scene_type(raw: &[u8]) -> Value {
    match raw.first() {
        Some(1) => Value::text("Directly photographed"),
        Some(b) => Value::text(b.to_string()),
        None => Value::Empty,
    }
}

/// Channel order, like `Y, Cb, Cr, -`.
pub(super) fn components_configuration(raw: &[u8]) -> Value {
    if raw.is_empty() {
        return Value::Empty;
    }

    let channels: Vec<&str> = raw
        .iter()
        .map(|b| match b {
            0 => "-",
            1 => "Y",
            2 => "Cb",
            3 => "Cr",
            4 => "R",
            5 => "G",
            6 => "B",
            _ => "?",
        })
        .collect();

    Value::text(channels.join(", "))
}

/// A user comment, with its 8-byte character code prefix removed.
pub(super) fn user_comment(raw: &[u8]) -> Value {
    let text = match raw.split_at_checked(8) {
        Some((b"UNICODE\0", rest)) => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        Some((b"JIS\0\0\0\0\0", rest)) => String::from_utf8_lossy(rest).into_owned(),
        Some((b"ASCII\0\0\0", rest)) | Some((&[0, 0, 0, 0, 0, 0, 0, 0], rest)) => {
            seven_bit_text(rest)
        }
        _ => {
            log::debug!("User comment had no known character code. Reading it as text.");
            seven_bit_text(raw)
        }
    };

    Value::text(text.trim_end_matches('\0'))
}

/// Chroma subsampling factors -> `YCbCr4:x:y`.
pub(super) fn ycbcr_subsampling(decoded: &Value) -> Value {
    let ints: Vec<Option<i64>> = decoded.scalars().iter().map(Scalar::as_i64).collect();
    match ints.as_slice() {
        [Some(2), Some(1)] => Value::text("YCbCr4:2:2"),
        [Some(2), Some(2)] => Value::text("YCbCr4:2:0"),
        [Some(1), Some(1)] => Value::text("YCbCr4:4:4"),
        [Some(4), Some(1)] => Value::text("YCbCr4:1:1"),
        _ => generic(decoded),
    }
}

/// A color filter array pattern, one text row of color letters per grid row.
///
/// The payload starts with two 16-bit dimensions (columns, then rows). They
/// should be little-endian, but some writers store them big-endian, so we
/// pick whichever byte order fits the payload.
pub(super) fn cfa_pattern(raw: &[u8]) -> Value {
    let Some((header, colors)) = raw.split_at_checked(4) else {
        log::warn!("CFA pattern is too short to hold its dimensions! len: `{}`", raw.len());
        return Value::Empty;
    };

    let fits = |cols: u16, rows: u16| cols != 0 && cols as usize * rows as usize == colors.len();

    let le = (
        u16::from_le_bytes([header[0], header[1]]),
        u16::from_le_bytes([header[2], header[3]]),
    );
    let be = (
        u16::from_be_bytes([header[0], header[1]]),
        u16::from_be_bytes([header[2], header[3]]),
    );

    let cols = if fits(le.0, le.1) {
        le.0
    } else if fits(be.0, be.1) {
        log::debug!("CFA pattern dimensions were big-endian.");
        be.0
    } else if le.0 != 0 && colors.len() % le.0 as usize == 0 {
        log::warn!("CFA pattern row count disagrees with its payload. Trusting the columns.");
        le.0
    } else {
        log::warn!("CFA pattern dimensions don't fit its payload! Showing it raw.");
        return Value::text(seven_bit_text(raw));
    };

    let rows: Vec<Scalar> = colors
        .chunks(cols as usize)
        .map(|row| {
            row.iter()
                .map(|c| match c {
                    0 => 'R',
                    1 => 'G',
                    2 => 'B',
                    3 => 'C',
                    4 => 'M',
                    5 => 'Y',
                    6 => 'W',
                    _ => '?',
                })
                .collect::<String>()
                .into()
        })
        .collect();

    Value::from_scalars(rows)
}

fn first_float(decoded: &Value) -> Option<f64> {
    decoded.scalars().first().and_then(Scalar::as_f64)
}

fn first_int(decoded: &Value) -> Option<i64> {
    decoded.scalars().first().and_then(Scalar::as_i64)
}

fn three_floats(decoded: &Value) -> Option<[f64; 3]> {
    match decoded.scalars() {
        [a, b, c, ..] => Some([a.as_f64()?, b.as_f64()?, c.as_f64()?]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use propdecode_types::{primitives::Scalar, value::Value};

    use super::*;
    use crate::{format::labels::*, util::logger};

    fn floats(v: &[f64]) -> Value {
        Value::from_scalars(v.iter().map(|f| Scalar::Float(*f)).collect())
    }

    #[test]
    fn enumeration_falls_back_to_the_number() {
        logger();

        assert_eq!(
            enumeration(ORIENTATION, &Value::Scalar(Scalar::Short(1))),
            Value::text("Horizontal (normal) (top left)")
        );
        assert_eq!(
            enumeration(ORIENTATION, &Value::Scalar(Scalar::Short(6))),
            Value::text("Rotate 90° CW (right top)")
        );
        assert_eq!(
            enumeration(ORIENTATION, &Value::Scalar(Scalar::Short(42))),
            Value::text("42")
        );
        assert_eq!(
            enumeration(EXTRA_SAMPLES, &Value::Sequence(vec![Scalar::Short(1), Scalar::Short(9)])),
            Value::Sequence(vec![Scalar::from("Associated Alpha"), Scalar::from("9")])
        );
    }

    #[test]
    fn flags_list_set_bits() {
        logger();

        assert_eq!(
            flags(T4_OPTIONS, &Value::Scalar(Scalar::Long(0b101))),
            Value::Sequence(vec![
                Scalar::from("2-Dimensional encoding"),
                Scalar::from("Fill bits added")
            ])
        );
        assert_eq!(flags(T4_OPTIONS, &Value::Scalar(Scalar::Long(0))), Value::Empty);
    }

    #[test]
    fn apex_values() {
        logger();

        assert_eq!(aperture(&floats(&[2.0])), Value::text("f/2.0"));
        assert_eq!(aperture(&floats(&[5.0])), Value::text("f/5.7"));
        assert_eq!(shutter_speed(&floats(&[6.643856])), Value::text("1/100 sec"));
        assert_eq!(shutter_speed(&floats(&[-1.0])), Value::text("0 sec"));
    }

    #[test]
    fn shutter_speed_is_the_reciprocal_exposure() {
        logger();

        // Tv 0 is one second, each step halves it
        assert_eq!(shutter_speed(&floats(&[0.0])), Value::text("1/1 sec"));
        assert_eq!(shutter_speed(&floats(&[1.0])), Value::text("1/2 sec"));
        assert_eq!(shutter_speed(&floats(&[8.0])), Value::text("1/256 sec"));
        assert_eq!(shutter_speed(&floats(&[9.965784])), Value::text("1/1000 sec"));
        assert_eq!(shutter_speed(&floats(&[-2.0])), Value::text("0 sec"));
    }

    #[test]
    fn exposure_time_as_fraction() {
        logger();

        assert_eq!(exposure_time(&floats(&[0.01])), Value::text("1/100 sec"));
        assert_eq!(exposure_time(&floats(&[2.0])), Value::text("2 sec"));
        assert_eq!(exposure_time(&floats(&[1.5])), Value::text("1.5 sec"));
    }

    #[test]
    fn f_number_precision() {
        logger();

        assert_eq!(f_number(&floats(&[2.8])), Value::text("f/2.8"));
        assert_eq!(f_number(&floats(&[0.95])), Value::text("f/0.95"));
    }

    #[test]
    fn coordinates_redistribute_fractional_minutes() {
        logger();

        assert_eq!(
            coordinate(&floats(&[40.0, 26.77, 0.0])),
            Value::text("040° 26' 46.2000\"")
        );
        assert_eq!(
            coordinate(&floats(&[122.0, 5.0, 3.5])),
            Value::text("122° 05' 03.5000\"")
        );
        assert_eq!(coordinate(&floats(&[1.0, 2.0])), floats(&[1.0, 2.0]));
    }

    #[test]
    fn coordinates_redistribute_fractional_degrees() {
        logger();

        assert_eq!(
            coordinate(&floats(&[40.446, 0.0, 0.0])),
            Value::text("040° 26' 45.6000\"")
        );
        assert_eq!(
            coordinate(&floats(&[40.5, 0.0, 0.0])),
            Value::text("040° 30' 00.0000\"")
        );

        // nowhere to carry it, so it goes
        assert_eq!(
            coordinate(&floats(&[40.5, 10.0, 1.0])),
            Value::text("040° 10' 01.0000\"")
        );
    }

    #[test]
    fn gps_time_with_milliseconds() {
        logger();

        assert_eq!(
            gps_time(&floats(&[14.0, 30.0, 5.25])),
            Value::text("14:30:05.250+0")
        );

        // rounding carries into the minutes instead of showing `60.000`
        assert_eq!(
            gps_time(&floats(&[14.0, 30.0, 59.9996])),
            Value::text("14:31:00.000+0")
        );
        assert_eq!(
            gps_time(&floats(&[23.0, 59.0, 59.9996])),
            floats(&[23.0, 59.0, 59.9996])
        );
        assert_eq!(gps_time(&floats(&[24.0, 0.0, 0.0])), floats(&[24.0, 0.0, 0.0]));
    }

    #[test]
    fn file_source_spots_sigma() {
        logger();

        assert_eq!(file_source(&[3]), Value::text("Digital camera"));
        assert_eq!(file_source(&[3, 0, 0, 0]), Value::text("Sigma Digital camera"));
        assert_eq!(file_source(&[1]), Value::text("Film scanner"));
        assert_eq!(file_source(&[]), Value::Empty);
    }

    #[test]
    fn cfa_pattern_rows() {
        logger();

        assert_eq!(
            cfa_pattern(&[2, 0, 2, 0, 0, 1, 1, 2]),
            Value::Sequence(vec![Scalar::from("RG"), Scalar::from("GB")])
        );
        // big-endian dimensions
        assert_eq!(
            cfa_pattern(&[0, 2, 0, 2, 1, 0, 2, 1]),
            Value::Sequence(vec![Scalar::from("GR"), Scalar::from("BG")])
        );
        assert_eq!(cfa_pattern(&[2, 0]), Value::Empty);
    }

    #[test]
    fn user_comment_prefixes() {
        logger();

        assert_eq!(user_comment(b"ASCII\0\0\0hello\0\0"), Value::text("hello"));
        assert_eq!(
            user_comment(b"UNICODE\0h\0i\0"),
            Value::text("hi")
        );
        assert_eq!(user_comment(b"plain"), Value::text("plain"));
    }

    #[test]
    fn misc_byte_rules() {
        logger();

        assert_eq!(components_configuration(&[1, 2, 3, 0]), Value::text("Y, Cb, Cr, -"));
        assert_eq!(scene_type(&[1]), Value::text("Directly photographed"));
        assert_eq!(
            version_bytes(&Value::Sequence(vec![
                Scalar::Byte(2),
                Scalar::Byte(2),
                Scalar::Byte(0),
                Scalar::Byte(0)
            ])),
            Value::text("2.2.0.0")
        );
        assert_eq!(
            ycbcr_subsampling(&Value::Sequence(vec![Scalar::Short(2), Scalar::Short(1)])),
            Value::text("YCbCr4:2:2")
        );
        assert_eq!(
            affix("ISO ", "", &Value::Scalar(Scalar::Short(200))),
            Value::text("ISO 200")
        );
        assert_eq!(exposure_bias(&floats(&[-0.333])), Value::text("-0.33 EV"));
    }
}
