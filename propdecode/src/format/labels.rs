//! Enumeration and bit-flag labels, as the host's property tag documentation
//! names them.
//!
//! Each enumeration table is `(value, label)`; each flag table is
//! `(bit index, label)`.

pub type Labels = &'static [(i64, &'static str)];
pub type FlagLabels = &'static [(u32, &'static str)];

pub(crate) const COMPRESSION: Labels = &[
    (1, "Uncompressed"),
    (2, "CCITT 1D"),
    (3, "T4/Group 3 Fax"),
    (4, "T6/Group 4 Fax"),
    (5, "LZW"),
    (6, "JPEG (old-style)"),
    (7, "JPEG"),
    (8, "Adobe Deflate"),
    (32771, "CCITT RLE Word"),
    (32773, "PackBits"),
    (32946, "Deflate"),
];

pub(crate) const PHOTOMETRIC_INTERPRETATION: Labels = &[
    (0, "WhiteIsZero"),
    (1, "BlackIsZero"),
    (2, "RGB"),
    (3, "RGB Palette"),
    (4, "Transparency Mask"),
    (5, "CMYK"),
    (6, "YCbCr"),
    (8, "CIELab"),
    (9, "ICCLab"),
    (10, "ITULab"),
    (32844, "Pixar LogL"),
    (32845, "Pixar LogLuv"),
    (34892, "Linear Raw"),
];

pub(crate) const ORIENTATION: Labels = &[
    (1, "Horizontal (normal) (top left)"),
    (2, "Mirror horizontal (top right)"),
    (3, "Rotate 180° (bottom right)"),
    (4, "Mirror vertical (bottom left)"),
    (5, "Mirror horizontal and rotate 270° CW (left top)"),
    (6, "Rotate 90° CW (right top)"),
    (7, "Mirror horizontal and rotate 90° CW (right bottom)"),
    (8, "Rotate 270° CW (left bottom)"),
];

pub(crate) const PLANAR_CONFIGURATION: Labels = &[(1, "Chunky"), (2, "Planar")];

pub(crate) const RESOLUTION_UNIT: Labels = &[(1, "None"), (2, "inches"), (3, "cm")];

pub(crate) const FILL_ORDER: Labels = &[(1, "Normal"), (2, "Reversed")];

pub(crate) const PREDICTOR: Labels = &[
    (1, "None"),
    (2, "Horizontal differencing"),
    (3, "Floating point"),
];

pub(crate) const SAMPLE_FORMAT: Labels = &[
    (1, "Unsigned"),
    (2, "Signed"),
    (3, "Float"),
    (4, "Undefined"),
    (5, "Complex int"),
    (6, "Complex float"),
];

pub(crate) const THRESHOLDING: Labels = &[
    (1, "No dithering or halftoning"),
    (2, "Ordered dither or halftone"),
    (3, "Randomized dither"),
];

pub(crate) const SUBFILE_TYPE: Labels = &[
    (1, "Full-resolution image"),
    (2, "Reduced-resolution image"),
    (3, "Single page of multi-page image"),
];

pub(crate) const EXTRA_SAMPLES: Labels = &[
    (0, "Unspecified"),
    (1, "Associated Alpha"),
    (2, "Unassociated Alpha"),
];

pub(crate) const INK_SET: Labels = &[(1, "CMYK"), (2, "Not CMYK")];

pub(crate) const YCBCR_POSITIONING: Labels = &[(1, "Centered"), (2, "Co-sited")];

pub(crate) const GRAY_RESPONSE_UNIT: Labels = &[
    (1, "0.1"),
    (2, "0.001"),
    (3, "0.0001"),
    (4, "1e-05"),
    (5, "1e-06"),
];

pub(crate) const EXPOSURE_PROGRAM: Labels = &[
    (0, "Not Defined"),
    (1, "Manual"),
    (2, "Program AE"),
    (3, "Aperture-priority AE"),
    (4, "Shutter speed priority AE"),
    (5, "Creative (Slow speed)"),
    (6, "Action (High speed)"),
    (7, "Portrait"),
    (8, "Landscape"),
];

pub(crate) const LIGHT_SOURCE: Labels = &[
    (0, "Unknown"),
    (1, "Daylight"),
    (2, "Fluorescent"),
    (3, "Tungsten (Incandescent)"),
    (4, "Flash"),
    (9, "Fine Weather"),
    (10, "Cloudy"),
    (11, "Shade"),
    (12, "Daylight Fluorescent"),
    (13, "Day White Fluorescent"),
    (14, "Cool White Fluorescent"),
    (15, "White Fluorescent"),
    (16, "Warm White Fluorescent"),
    (17, "Standard Light A"),
    (18, "Standard Light B"),
    (19, "Standard Light C"),
    (20, "D55"),
    (21, "D65"),
    (22, "D75"),
    (23, "D50"),
    (24, "ISO Studio Tungsten"),
    (255, "Other"),
];

pub(crate) const METERING_MODE: Labels = &[
    (0, "Unknown"),
    (1, "Average"),
    (2, "Center-weighted average"),
    (3, "Spot"),
    (4, "Multi-spot"),
    (5, "Multi-segment"),
    (6, "Partial"),
    (255, "Other"),
];

pub(crate) const COLOR_SPACE: Labels = &[
    (0x1, "sRGB"),
    (0x2, "Adobe RGB"),
    (0xFFFD, "Wide Gamut RGB"),
    (0xFFFE, "ICC Profile"),
    (0xFFFF, "Uncalibrated"),
];

pub(crate) const FLASH: Labels = &[
    (0x00, "No Flash"),
    (0x01, "Fired"),
    (0x05, "Fired, Return not detected"),
    (0x07, "Fired, Return detected"),
    (0x08, "On, Did not fire"),
    (0x09, "On, Fired"),
    (0x0D, "On, Return not detected"),
    (0x0F, "On, Return detected"),
    (0x10, "Off, Did not fire"),
    (0x14, "Off, Did not fire, Return not detected"),
    (0x18, "Auto, Did not fire"),
    (0x19, "Auto, Fired"),
    (0x1D, "Auto, Fired, Return not detected"),
    (0x1F, "Auto, Fired, Return detected"),
    (0x20, "No flash function"),
    (0x30, "Off, No flash function"),
    (0x41, "Fired, Red-eye reduction"),
    (0x45, "Fired, Red-eye reduction, Return not detected"),
    (0x47, "Fired, Red-eye reduction, Return detected"),
    (0x49, "On, Red-eye reduction"),
    (0x4D, "On, Red-eye reduction, Return not detected"),
    (0x4F, "On, Red-eye reduction, Return detected"),
    (0x50, "Off, Red-eye reduction"),
    (0x58, "Auto, Did not fire, Red-eye reduction"),
    (0x59, "Auto, Fired, Red-eye reduction"),
    (0x5D, "Auto, Fired, Red-eye reduction, Return not detected"),
    (0x5F, "Auto, Fired, Red-eye reduction, Return detected"),
];

pub(crate) const SENSING_METHOD: Labels = &[
    (1, "Not defined"),
    (2, "One-chip color area"),
    (3, "Two-chip color area"),
    (4, "Three-chip color area"),
    (5, "Color sequential area"),
    (7, "Trilinear"),
    (8, "Color sequential linear"),
];

pub(crate) const RENDERING_INTENT: Labels = &[
    (0, "Perceptual"),
    (1, "Relative Colorimetric"),
    (2, "Saturation"),
    (3, "Absolute colorimetric"),
];

pub(crate) const THUMBNAIL_FORMAT: Labels = &[(0, "Raw RGB"), (1, "JPEG")];

pub(crate) const ALTITUDE_REF: Labels = &[(0, "Above Sea Level"), (1, "Below Sea Level")];

pub(crate) const FILE_SOURCE: Labels = &[
    (1, "Film scanner"),
    (2, "Reflection print scanner"),
    (3, "Digital camera"),
];

pub(crate) const T4_OPTIONS: FlagLabels = &[
    (0, "2-Dimensional encoding"),
    (1, "Uncompressed"),
    (2, "Fill bits added"),
];

pub(crate) const T6_OPTIONS: FlagLabels = &[(1, "Uncompressed")];

pub(crate) const NEW_SUBFILE_TYPE: FlagLabels = &[
    (0, "Reduced-resolution image"),
    (1, "Single page of multi-page image"),
    (2, "Transparency mask"),
];
