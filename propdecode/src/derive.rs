//! Derived ("PS") entries, computed from decoded ones for convenience.
//!
//! Pixel dimensions get a common name no matter which tag held them, and
//! dates and GPS times get parsed into native values.

use chrono::{NaiveDateTime, TimeDelta};

use crate::{pipeline::Entry, select::DERIVED_SUFFIX};
use propdecode_types::{tags::PropertyTag, value::Value};

/// The format of date-time text in image metadata.
const DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Computes the derived entries for `entry`, in order.
///
/// ```
/// use propdecode::{Entry, EntryKind, Value, derive::derive};
///
/// let entry = Entry {
///     id_dec: 0x0132,
///     id_hex: "0x132".into(),
///     tag_name: "DateTime".into(),
///     type_code: 2,
///     type_desc: "ASCII".into(),
///     length: 20,
///     raw_bytes: Some(b"2022:06:10 14:30:00\0".to_vec()),
///     decoded: Value::text("2022:06:10 14:30:00"),
///     display: Value::text("2022:06:10 14:30:00"),
///     kind: EntryKind::Decoded,
/// };
///
/// let derived = derive(&entry);
/// assert_eq!(derived.len(), 1);
/// assert_eq!(derived[0].tag_name, "DateTimePS");
/// assert_eq!(derived[0].display.to_string(), "2022-06-10 14:30:00");
/// ```
pub fn derive(entry: &Entry) -> Vec<Entry> {
    let mut out = Vec::new();
    let tag = PropertyTag::try_from(entry.id_dec).ok();

    if matches!(tag, Some(PropertyTag::ImageWidth | PropertyTag::ExifPixXDim)) {
        out.push(entry.synthetic(format!("ImageWidth{DERIVED_SUFFIX}"), entry.decoded.clone()));
    }

    if matches!(tag, Some(PropertyTag::ImageHeight | PropertyTag::ExifPixYDim)) {
        out.push(entry.synthetic(format!("ImageHeight{DERIVED_SUFFIX}"), entry.decoded.clone()));
    }

    if let Some(dt) = entry.display.as_text().and_then(parse_date_time) {
        log::trace!("`{}` holds a date-time. Deriving it...", entry.tag_name);
        out.push(entry.synthetic(derived_name(entry), Value::DateTime(dt)));
    }

    if tag == Some(PropertyTag::GpsGpsTime) {
        match time_of_day(&entry.decoded) {
            Some(td) => out.push(entry.synthetic(derived_name(entry), Value::TimeOfDay(td))),
            None => log::debug!("GPS time didn't hold three usable numbers. Not deriving it."),
        }
    }

    out
}

fn derived_name(entry: &Entry) -> String {
    format!("{}{DERIVED_SUFFIX}", entry.tag_name)
}

/// Parses `YYYY:MM:DD HH:MM:SS` exactly.
///
/// Cameras without a clock write placeholders like `0000:00:00 00:00:00`,
/// which have the right shape but aren't real dates. Those give `None`.
fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    const SHAPE: &[u8; 19] = b"dddd:dd:dd dd:dd:dd";

    let shaped = text.len() == SHAPE.len()
        && text.bytes().zip(SHAPE).all(|(b, s)| match s {
            b'd' => b.is_ascii_digit(),
            _ => b == *s,
        });
    if !shaped {
        return None;
    }

    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
        .inspect_err(|e| log::debug!("Date-time text didn't hold a real date. text: `{text}`, err: {e}"))
        .ok()
}

/// Hours, minutes and seconds -> time since midnight, to the millisecond.
///
/// Gives `None` unless the result falls within one day.
pub(crate) fn time_of_day(decoded: &Value) -> Option<TimeDelta> {
    let [h, m, s] = match decoded.scalars() {
        [h, m, s] => [h.as_f64()?, m.as_f64()?, s.as_f64()?],
        _ => return None,
    };

    let ms = ((h * 3600.0 + m * 60.0 + s) * 1000.0).round();
    if !ms.is_finite() || !(0.0..MILLIS_PER_DAY).contains(&ms) {
        log::debug!("Time of day is outside of one day. ms: `{ms}`");
        return None;
    }

    TimeDelta::try_milliseconds(ms as i64)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use super::{derive, parse_date_time};
    use crate::{
        pipeline::{Entry, EntryKind},
        util::{id_hex, logger},
    };
    use propdecode_types::{primitives::Scalar, tags::PropertyTag, value::Value};

    fn entry(tag: PropertyTag, decoded: Value, display: Value) -> Entry {
        Entry {
            id_dec: tag.tag_id(),
            id_hex: id_hex(tag.tag_id()),
            tag_name: tag.tag_name().to_owned(),
            type_code: 3,
            type_desc: "SHORT".to_owned(),
            length: 2,
            raw_bytes: Some(vec![0, 0]),
            decoded,
            display,
            kind: EntryKind::Decoded,
        }
    }

    #[test]
    fn pixel_dimensions_get_common_names() {
        logger();

        let v = Value::Scalar(Scalar::Long(4032));
        for (tag, name) in [
            (PropertyTag::ImageWidth, "ImageWidthPS"),
            (PropertyTag::ExifPixXDim, "ImageWidthPS"),
            (PropertyTag::ImageHeight, "ImageHeightPS"),
            (PropertyTag::ExifPixYDim, "ImageHeightPS"),
        ] {
            let src = entry(tag, v.clone(), v.clone());
            let derived = derive(&src);

            assert_eq!(derived.len(), 1);
            let d = &derived[0];
            assert_eq!(d.tag_name, name);
            assert_eq!(d.kind, EntryKind::Synthetic);
            assert_eq!(d.decoded, v);
            assert_eq!(d.display, v);
            assert_eq!(d.id_dec, src.id_dec);
            assert_eq!(d.type_desc, src.type_desc);
            assert_eq!(d.raw_bytes, None);
        }
    }

    #[test]
    fn dates_are_parsed() {
        logger();

        let text = Value::text("2022:06:10 14:30:00");
        let derived = derive(&entry(PropertyTag::ExifDTOrig, text.clone(), text));

        let expected = NaiveDate::from_ymd_opt(2022, 6, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].tag_name, "ExifDTOrigPS");
        assert_eq!(derived[0].decoded, Value::DateTime(expected));
        assert_eq!(derived[0].display, Value::DateTime(expected));
    }

    #[test]
    fn only_exact_date_shapes_count() {
        logger();

        assert!(parse_date_time("2022:06:10 14:30:00").is_some());
        assert!(parse_date_time("0000:00:00 00:00:00").is_none());
        assert!(parse_date_time("2022:06:10 14:30:00 ").is_none());
        assert!(parse_date_time("2022-06-10 14:30:00").is_none());
        assert!(parse_date_time("22:06:10 14:30:00").is_none());
        assert!(parse_date_time("2022:13:10 14:30:00").is_none());
    }

    #[test]
    fn gps_time_becomes_time_of_day() {
        logger();

        let decoded = Value::Sequence(vec![
            Scalar::Float(14.0),
            Scalar::Float(30.0),
            Scalar::Float(5.25),
        ]);
        let derived = derive(&entry(
            PropertyTag::GpsGpsTime,
            decoded,
            Value::text("14:30:05.250+0"),
        ));

        let expected = TimeDelta::milliseconds(14 * 3_600_000 + 30 * 60_000 + 5_250);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].tag_name, "GpsGpsTimePS");
        assert_eq!(derived[0].display, Value::TimeOfDay(expected));
    }

    #[test]
    fn most_tags_derive_nothing() {
        logger();

        let v = Value::Scalar(Scalar::Short(1));
        assert!(derive(&entry(PropertyTag::Orientation, v.clone(), v)).is_empty());

        let short = Value::Sequence(vec![Scalar::Float(1.0), Scalar::Float(2.0)]);
        assert!(derive(&entry(PropertyTag::GpsGpsTime, short.clone(), short)).is_empty());

        // a whole day or more isn't a time of day
        let midnight = Value::Sequence(vec![
            Scalar::Float(24.0),
            Scalar::Float(0.0),
            Scalar::Float(0.0),
        ]);
        assert!(derive(&entry(PropertyTag::GpsGpsTime, midnight.clone(), midnight)).is_empty());
    }
}
