//! Turns decoded values into display values.
//!
//! Each tag ID maps to a [`Rule`] in a [`RuleTable`]. Tags without an entry
//! use [`Rule::Generic`], which shows the decoded value untouched.

use rustc_hash::FxHashMap;

use propdecode_types::{tags::PropertyTag, value::Value};

pub use labels::{FlagLabels, Labels};

mod labels;
mod rules;

/// How to format one tag's value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    /// Show the decoded value as-is.
    Generic,

    /// Hide the value entirely. Both the decoded and display values become
    /// [`Value::Empty`].
    Suppress,

    /// Map integers to labels, falling back to the number.
    Enumeration(Labels),

    /// List the label of each set bit.
    Flags(FlagLabels),

    /// APEX aperture value.
    Aperture,

    /// APEX shutter speed value.
    ShutterSpeed,

    /// Exposure time, in seconds.
    ExposureTime,

    /// F-number.
    FNumber,

    /// Exposure bias, in EV.
    ExposureBias,

    /// Text before the first value.
    Prefix(&'static str),

    /// Text after the first value.
    Suffix(&'static str),

    /// Degrees, minutes and seconds.
    Coordinate,

    /// GPS time of day.
    GpsTime,

    /// Bytes of a dotted version number.
    VersionBytes,

    /// The file source byte, with Sigma's 4-byte quirk.
    FileSource,

    /// The scene type byte.
    SceneType,

    /// Per-channel component letters.
    ComponentsConfiguration,

    /// A user comment with a character code prefix.
    UserComment,

    /// Chroma subsampling factors.
    YCbCrSubsampling,

    /// A color filter array grid.
    CfaPattern,
}

/// The standard rules, grouped by the tags sharing them.
const STANDARD_RULES: &[(&[PropertyTag], Rule)] = {
    use PropertyTag as T;
    use labels::*;

    &[
        // enumerations
        (&[T::Compression, T::ThumbnailCompression], Rule::Enumeration(COMPRESSION)),
        (
            &[T::PhotometricInterp, T::ThumbnailPhotometricInterp],
            Rule::Enumeration(PHOTOMETRIC_INTERPRETATION),
        ),
        (&[T::Orientation, T::ThumbnailOrientation], Rule::Enumeration(ORIENTATION)),
        (
            &[T::PlanarConfig, T::ThumbnailPlanarConfig],
            Rule::Enumeration(PLANAR_CONFIGURATION),
        ),
        (
            &[T::ResolutionUnit, T::ThumbnailResolutionUnit, T::ExifFocalResUnit],
            Rule::Enumeration(RESOLUTION_UNIT),
        ),
        (&[T::FillOrder], Rule::Enumeration(FILL_ORDER)),
        (&[T::Predictor], Rule::Enumeration(PREDICTOR)),
        (&[T::SampleFormat], Rule::Enumeration(SAMPLE_FORMAT)),
        (&[T::ThreshHolding], Rule::Enumeration(THRESHOLDING)),
        (&[T::SubfileType], Rule::Enumeration(SUBFILE_TYPE)),
        (&[T::ExtraSamples], Rule::Enumeration(EXTRA_SAMPLES)),
        (&[T::InkSet], Rule::Enumeration(INK_SET)),
        (
            &[T::YCbCrPositioning, T::ThumbnailYCbCrPositioning],
            Rule::Enumeration(YCBCR_POSITIONING),
        ),
        (&[T::GrayResponseUnit], Rule::Enumeration(GRAY_RESPONSE_UNIT)),
        (&[T::ExifExposureProg], Rule::Enumeration(EXPOSURE_PROGRAM)),
        (&[T::ExifLightSource], Rule::Enumeration(LIGHT_SOURCE)),
        (&[T::ExifMeteringMode], Rule::Enumeration(METERING_MODE)),
        (&[T::ExifColorSpace], Rule::Enumeration(COLOR_SPACE)),
        (&[T::ExifFlash], Rule::Enumeration(FLASH)),
        (&[T::ExifSensingMethod], Rule::Enumeration(SENSING_METHOD)),
        (&[T::SRGBRenderingIntent], Rule::Enumeration(RENDERING_INTENT)),
        (&[T::ThumbnailFormat], Rule::Enumeration(THUMBNAIL_FORMAT)),
        (&[T::GpsAltitudeRef], Rule::Enumeration(ALTITUDE_REF)),
        //
        // bit flags
        (&[T::T4Option], Rule::Flags(T4_OPTIONS)),
        (&[T::T6Option], Rule::Flags(T6_OPTIONS)),
        (&[T::NewSubfileType], Rule::Flags(NEW_SUBFILE_TYPE)),
        //
        // computed numbers
        (&[T::ExifAperture, T::ExifMaxAperture], Rule::Aperture),
        (&[T::ExifShutterSpeed], Rule::ShutterSpeed),
        (&[T::ExifExposureTime], Rule::ExposureTime),
        (&[T::ExifFNumber], Rule::FNumber),
        (&[T::ExifExposureBias], Rule::ExposureBias),
        (&[T::ExifFocalLength], Rule::Suffix("mm")),
        (&[T::ExifISOSpeed], Rule::Prefix("ISO ")),
        (&[T::GpsAltitude, T::ExifSubjectDist], Rule::Suffix(" m")),
        //
        // gps
        (
            &[T::GpsLatitude, T::GpsLongitude, T::GpsDestLat, T::GpsDestLong],
            Rule::Coordinate,
        ),
        (&[T::GpsGpsTime], Rule::GpsTime),
        (&[T::GpsVer], Rule::VersionBytes),
        //
        // byte layouts
        (&[T::ExifFileSource], Rule::FileSource),
        (&[T::ExifSceneType], Rule::SceneType),
        (&[T::ExifCompConfig], Rule::ComponentsConfiguration),
        (&[T::ExifUserComment], Rule::UserComment),
        (
            &[T::YCbCrSubsampling, T::ThumbnailYCbCrSubsampling],
            Rule::YCbCrSubsampling,
        ),
        (&[T::ExifCfaPattern], Rule::CfaPattern),
        //
        // never interpreted
        (&[T::ExifMakerNote], Rule::Suppress),
    ]
};

/// A mapping of tag ID -> [`Rule`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTable {
    rules: FxHashMap<i32, Rule>,
}

impl RuleTable {
    /// The rules for the host's known tags.
    pub fn standard() -> Self {
        let rules = STANDARD_RULES
            .iter()
            .flat_map(|(tags, rule)| tags.iter().map(move |t| (t.tag_id(), *rule)))
            .collect();

        Self { rules }
    }

    /// Replaces (or adds) the rule for one tag ID.
    pub fn with_rule(mut self, id: i32, rule: Rule) -> Self {
        self.rules.insert(id, rule);
        self
    }

    /// Finds the rule for a tag ID. Unlisted IDs get [`Rule::Generic`].
    pub fn rule_for(&self, id: i32) -> Rule {
        self.rules.get(&id).copied().unwrap_or(Rule::Generic)
    }
}

/// A decoded value, paired with how it should be shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Formatted {
    pub decoded: Value,
    pub display: Value,
}

/// Applies a [`RuleTable`] to decoded values.
#[derive(Clone, Debug, PartialEq)]
pub struct Formatter {
    rules: RuleTable,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(RuleTable::standard())
    }
}

impl Formatter {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Formats one entry's value.
    ///
    /// Text in both the decoded and display values comes out trimmed of
    /// surrounding whitespace.
    ///
    /// `raw` is the item's payload; a few rules read it directly instead of
    /// the decoded scalars.
    ///
    /// ```
    /// use propdecode::{Scalar, Value, format::Formatter};
    ///
    /// let f = Formatter::default();
    /// let out = f.format(0x8827, "ExifISOSpeed", Value::Scalar(Scalar::Short(400)), &[144, 1]);
    /// assert_eq!(out.display, Value::text("ISO 400"));
    /// ```
    pub fn format(&self, id: i32, name: &str, decoded: Value, raw: &[u8]) -> Formatted {
        let rule = self.rules.rule_for(id);
        log::trace!("Formatting `{name}` with rule `{rule:?}`...");

        let display = match rule {
            Rule::Suppress => {
                log::debug!("Suppressing the value of `{name}`.");
                return Formatted::default();
            }
            Rule::Generic => rules::generic(&decoded),
            Rule::Enumeration(labels) => rules::enumeration(labels, &decoded),
            Rule::Flags(labels) => rules::flags(labels, &decoded),
            Rule::Aperture => rules::aperture(&decoded),
            Rule::ShutterSpeed => rules::shutter_speed(&decoded),
            Rule::ExposureTime => rules::exposure_time(&decoded),
            Rule::FNumber => rules::f_number(&decoded),
            Rule::ExposureBias => rules::exposure_bias(&decoded),
            Rule::Prefix(prefix) => rules::affix(prefix, "", &decoded),
            Rule::Suffix(suffix) => rules::affix("", suffix, &decoded),
            Rule::Coordinate => rules::coordinate(&decoded),
            Rule::GpsTime => rules::gps_time(&decoded),
            Rule::VersionBytes => rules::version_bytes(&decoded),
            Rule::FileSource => rules::file_source(raw),
            Rule::SceneType => rules::scene_type(raw),
            Rule::ComponentsConfiguration => rules::components_configuration(raw),
            Rule::UserComment => rules::user_comment(raw),
            Rule::YCbCrSubsampling => rules::ycbcr_subsampling(&decoded),
            Rule::CfaPattern => rules::cfa_pattern(raw),
        };

        Formatted {
            decoded: decoded.trimmed(),
            display: display.trimmed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use propdecode_types::{primitives::Scalar, tags::PropertyTag, value::Value};

    use super::{Formatter, Rule, RuleTable};
    use crate::util::logger;

    #[test]
    fn orientation_and_its_thumbnail_alias() {
        logger();

        let f = Formatter::default();
        for tag in [PropertyTag::Orientation, PropertyTag::ThumbnailOrientation] {
            let out = f.format(tag.tag_id(), tag.tag_name(), Value::Scalar(Scalar::Short(1)), &[1, 0]);
            assert_eq!(out.display, Value::text("Horizontal (normal) (top left)"));
            assert_eq!(out.decoded, Value::Scalar(Scalar::Short(1)));

            let out = f.format(tag.tag_id(), tag.tag_name(), Value::Scalar(Scalar::Short(6)), &[6, 0]);
            assert_eq!(out.display, Value::text("Rotate 90° CW (right top)"));
        }
    }

    #[test]
    fn every_enumeration_falls_back_to_the_number() {
        logger();

        let table = RuleTable::standard();
        let f = Formatter::new(table.clone());
        let mut checked = 0;

        for tag in PropertyTag::ALL {
            let Rule::Enumeration(labels) = table.rule_for(tag.tag_id()) else {
                continue;
            };

            // find a value no label covers
            let v = (0..=u16::MAX)
                .find(|v| labels.iter().all(|(k, _)| *k != *v as i64))
                .unwrap();

            let out = f.format(tag.tag_id(), tag.tag_name(), Value::Scalar(Scalar::Short(v)), &[]);
            assert_eq!(out.display, Value::text(v.to_string()), "tag: {tag:?}");
            checked += 1;
        }

        assert!(checked > 20);
    }

    #[test]
    fn maker_note_is_suppressed() {
        logger();

        let f = Formatter::default();
        let id = PropertyTag::ExifMakerNote.tag_id();
        let out = f.format(id, "ExifMakerNote", Value::text("Nikon\0\x02"), b"Nikon\0\x02");
        assert_eq!(out.decoded, Value::Empty);
        assert_eq!(out.display, Value::Empty);
    }

    #[test]
    fn unknown_ids_stay_generic() {
        logger();

        let f = Formatter::default();
        let decoded = Value::Sequence(vec![Scalar::Long(1), Scalar::Long(2)]);
        let out = f.format(0x9999, "Unknown_0x9999_39321", decoded.clone(), &[]);
        assert_eq!(out.display, decoded);
    }

    #[test]
    fn text_is_trimmed() {
        logger();

        let f = Formatter::default();
        let id = PropertyTag::EquipMake.tag_id();
        let out = f.format(id, "EquipMake", Value::text("  Canon  "), b"  Canon  \0");
        assert_eq!(out.display, Value::text("Canon"));
        assert_eq!(out.decoded, Value::text("Canon"));
    }

    #[test]
    fn rules_can_be_substituted() {
        logger();

        let id = PropertyTag::Orientation.tag_id();
        let f = Formatter::new(RuleTable::standard().with_rule(id, Rule::Generic));
        let out = f.format(id, "Orientation", Value::Scalar(Scalar::Short(6)), &[6, 0]);
        assert_eq!(out.display, Value::Scalar(Scalar::Short(6)));
    }

    #[test]
    fn raw_byte_rules_read_the_payload() {
        logger();

        let f = Formatter::default();

        let id = PropertyTag::ExifFileSource.tag_id();
        let out = f.format(id, "ExifFileSource", Value::text("\x03\0\0\0"), &[3, 0, 0, 0]);
        assert_eq!(out.display, Value::text("Sigma Digital camera"));

        let id = PropertyTag::ExifCfaPattern.tag_id();
        let raw = [2, 0, 2, 0, 0, 1, 1, 2];
        let out = f.format(id, "ExifCfaPattern", Value::Empty, &raw);
        assert_eq!(
            out.display,
            Value::Sequence(vec![Scalar::from("RG"), Scalar::from("GB")])
        );
    }
}
