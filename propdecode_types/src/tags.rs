//! Definitions for the property tags known to the host imaging facility.
//!
//! # `tags`
//!
//! Every property item carries a numeric tag ID. The host platform knows
//! about a fixed set of them, listed here along with the type code(s) each
//! one is expected to use.
//!
//! Anything outside this list (vendor maker-note tags, mostly) is still
//! decoded, but only ever shown raw.
//!
//! ## For contributors
//!
//! To add a tag, add a line to the `make_tag_list!` call below:
//!
//! ```no_compile
//! make_tag_list!(enum PropertyTag,
//!     // ...snip!
//!     YourNewTag = 0x1234 => [Tc::Short],
//! );
//! ```
//!
//! The variant name doubles as the tag's canonical name, so spell it the way
//! the host platform does.

use crate::primitives::TypeCode;

/// Creates the tag list enum.
macro_rules! make_tag_list {
    (enum $enum_name:ident,
        $(
            $( #[$attr:meta] )*
            $key_ident:ident = $key_tag:expr => [$( $ty:expr ),+ $(,)?],
        )+
    ) => {
        #[doc = "A list of all property tags known to the host imaging facility."]
        #[repr(u16)]
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
        pub enum $enum_name {
            $(
              $( #[$attr] )*
              $key_ident = $key_tag,
            )+
        }

        impl $enum_name {
            /// Every known tag, in declaration order.
            pub const ALL: &'static [$enum_name] = &[ $( $enum_name::$key_ident, )+ ];

            /// Returns this tag's numeric ID.
            pub const fn tag_id(&self) -> i32 {
                *self as u16 as i32
            }

            /// Grabs the tag's canonical name.
            pub const fn tag_name(&self) -> &'static str {
                match self {
                    $( Self::$key_ident => stringify!($key_ident), )+
                }
            }

            /// Returns the type code(s) this tag's value is expected to use.
            pub const fn types(&self) -> &'static [TypeCode] {
                match self {
                    $( Self::$key_ident => &[$( $ty ),+], )+
                }
            }
        }

        impl core::convert::TryFrom<i32> for $enum_name {
            type Error = ();

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $( v if v == $key_tag => Ok($enum_name::$key_ident), )+
                    _ => Err(()),
                }
            }
        }
    }
}

use TypeCode as Tc;

make_tag_list!(enum PropertyTag,
    //
    // GPS
    GpsVer = 0x0000 => [Tc::Byte],
    GpsLatitudeRef = 0x0001 => [Tc::Ascii],
    GpsLatitude = 0x0002 => [Tc::Rational],
    GpsLongitudeRef = 0x0003 => [Tc::Ascii],
    GpsLongitude = 0x0004 => [Tc::Rational],
    GpsAltitudeRef = 0x0005 => [Tc::Byte],
    GpsAltitude = 0x0006 => [Tc::Rational],
    GpsGpsTime = 0x0007 => [Tc::Rational],
    GpsGpsSatellites = 0x0008 => [Tc::Ascii],
    GpsGpsStatus = 0x0009 => [Tc::Ascii],
    GpsGpsMeasureMode = 0x000A => [Tc::Ascii],
    GpsGpsDop = 0x000B => [Tc::Rational],
    GpsSpeedRef = 0x000C => [Tc::Ascii],
    GpsSpeed = 0x000D => [Tc::Rational],
    GpsTrackRef = 0x000E => [Tc::Ascii],
    GpsTrack = 0x000F => [Tc::Rational],
    GpsImgDirRef = 0x0010 => [Tc::Ascii],
    GpsImgDir = 0x0011 => [Tc::Rational],
    GpsMapDatum = 0x0012 => [Tc::Ascii],
    GpsDestLatRef = 0x0013 => [Tc::Ascii],
    GpsDestLat = 0x0014 => [Tc::Rational],
    GpsDestLongRef = 0x0015 => [Tc::Ascii],
    GpsDestLong = 0x0016 => [Tc::Rational],
    GpsDestBearRef = 0x0017 => [Tc::Ascii],
    GpsDestBear = 0x0018 => [Tc::Rational],
    GpsDestDistRef = 0x0019 => [Tc::Ascii],
    GpsDestDist = 0x001A => [Tc::Rational],

    //
    // image structure, recording and characteristics
    NewSubfileType = 0x00FE => [Tc::Long],
    SubfileType = 0x00FF => [Tc::Short],
    ImageWidth = 0x0100 => [Tc::Short, Tc::Long],
    ImageHeight = 0x0101 => [Tc::Short, Tc::Long],
    BitsPerSample = 0x0102 => [Tc::Short],
    Compression = 0x0103 => [Tc::Short],
    PhotometricInterp = 0x0106 => [Tc::Short],
    ThreshHolding = 0x0107 => [Tc::Short],
    CellWidth = 0x0108 => [Tc::Short],
    CellHeight = 0x0109 => [Tc::Short],
    FillOrder = 0x010A => [Tc::Short],
    DocumentName = 0x010D => [Tc::Ascii],
    ImageDescription = 0x010E => [Tc::Ascii],
    EquipMake = 0x010F => [Tc::Ascii],
    EquipModel = 0x0110 => [Tc::Ascii],
    StripOffsets = 0x0111 => [Tc::Short, Tc::Long],
    Orientation = 0x0112 => [Tc::Short],
    SamplesPerPixel = 0x0115 => [Tc::Short],
    RowsPerStrip = 0x0116 => [Tc::Short, Tc::Long],
    StripBytesCount = 0x0117 => [Tc::Short, Tc::Long],
    MinSampleValue = 0x0118 => [Tc::Short],
    MaxSampleValue = 0x0119 => [Tc::Short],
    XResolution = 0x011A => [Tc::Rational],
    YResolution = 0x011B => [Tc::Rational],
    PlanarConfig = 0x011C => [Tc::Short],
    PageName = 0x011D => [Tc::Ascii],
    XPosition = 0x011E => [Tc::Rational],
    YPosition = 0x011F => [Tc::Rational],
    FreeOffset = 0x0120 => [Tc::Long],
    FreeByteCounts = 0x0121 => [Tc::Long],
    GrayResponseUnit = 0x0122 => [Tc::Short],
    GrayResponseCurve = 0x0123 => [Tc::Short],
    T4Option = 0x0124 => [Tc::Long],
    T6Option = 0x0125 => [Tc::Long],
    ResolutionUnit = 0x0128 => [Tc::Short],
    PageNumber = 0x0129 => [Tc::Short],
    TransferFunction = 0x012D => [Tc::Short],
    SoftwareUsed = 0x0131 => [Tc::Ascii],
    DateTime = 0x0132 => [Tc::Ascii],
    Artist = 0x013B => [Tc::Ascii],
    HostComputer = 0x013C => [Tc::Ascii],
    Predictor = 0x013D => [Tc::Short],
    WhitePoint = 0x013E => [Tc::Rational],
    PrimaryChromaticities = 0x013F => [Tc::Rational],
    ColorMap = 0x0140 => [Tc::Short],
    HalftoneHints = 0x0141 => [Tc::Short],
    TileWidth = 0x0142 => [Tc::Short, Tc::Long],
    TileLength = 0x0143 => [Tc::Short, Tc::Long],
    TileOffset = 0x0144 => [Tc::Long],
    TileByteCounts = 0x0145 => [Tc::Short, Tc::Long],
    InkSet = 0x014C => [Tc::Short],
    InkNames = 0x014D => [Tc::Ascii],
    NumberOfInks = 0x014E => [Tc::Short],
    DotRange = 0x0150 => [Tc::Byte, Tc::Short],
    TargetPrinter = 0x0151 => [Tc::Ascii],
    ExtraSamples = 0x0152 => [Tc::Short],
    SampleFormat = 0x0153 => [Tc::Short],
    SMinSampleValue = 0x0154 => [Tc::Byte, Tc::Short, Tc::Long, Tc::Rational, Tc::SLong, Tc::SRational],
    SMaxSampleValue = 0x0155 => [Tc::Byte, Tc::Short, Tc::Long, Tc::Rational, Tc::SLong, Tc::SRational],
    TransferRange = 0x0156 => [Tc::Short],
    JPEGProc = 0x0200 => [Tc::Short],
    JPEGInterFormat = 0x0201 => [Tc::Long],
    JPEGInterLength = 0x0202 => [Tc::Long],
    JPEGRestartInterval = 0x0203 => [Tc::Short],
    JPEGLosslessPredictors = 0x0205 => [Tc::Short],
    JPEGPointTransforms = 0x0206 => [Tc::Short],
    JPEGQTables = 0x0207 => [Tc::Long],
    JPEGDCTables = 0x0208 => [Tc::Long],
    JPEGACTables = 0x0209 => [Tc::Long],
    YCbCrCoefficients = 0x0211 => [Tc::Rational],
    YCbCrSubsampling = 0x0212 => [Tc::Short],
    YCbCrPositioning = 0x0213 => [Tc::Short],
    REFBlackWhite = 0x0214 => [Tc::Rational],

    //
    // color management and titles
    Gamma = 0x0301 => [Tc::Rational],
    ICCProfileDescriptor = 0x0302 => [Tc::Ascii],
    SRGBRenderingIntent = 0x0303 => [Tc::Byte],
    ImageTitle = 0x0320 => [Tc::Ascii],

    //
    // print, thumbnail and palette
    ResolutionXUnit = 0x5001 => [Tc::Short],
    ResolutionYUnit = 0x5002 => [Tc::Short],
    ResolutionXLengthUnit = 0x5003 => [Tc::Short],
    ResolutionYLengthUnit = 0x5004 => [Tc::Short],
    PrintFlags = 0x5005 => [Tc::Ascii],
    PrintFlagsVersion = 0x5006 => [Tc::Short],
    PrintFlagsCrop = 0x5007 => [Tc::Byte],
    PrintFlagsBleedWidth = 0x5008 => [Tc::Long],
    PrintFlagsBleedWidthScale = 0x5009 => [Tc::Short],
    HalftoneLPI = 0x500A => [Tc::Rational],
    HalftoneLPIUnit = 0x500B => [Tc::Short],
    HalftoneDegree = 0x500C => [Tc::Rational],
    HalftoneShape = 0x500D => [Tc::Short],
    HalftoneMisc = 0x500E => [Tc::Long],
    HalftoneScreen = 0x500F => [Tc::Byte],
    JPEGQuality = 0x5010 => [Tc::Long, Tc::Undefined],
    GridSize = 0x5011 => [Tc::Undefined],
    ThumbnailFormat = 0x5012 => [Tc::Long],
    ThumbnailWidth = 0x5013 => [Tc::Long],
    ThumbnailHeight = 0x5014 => [Tc::Long],
    ThumbnailColorDepth = 0x5015 => [Tc::Short],
    ThumbnailPlanes = 0x5016 => [Tc::Short],
    ThumbnailRawBytes = 0x5017 => [Tc::Long],
    ThumbnailSize = 0x5018 => [Tc::Long],
    ThumbnailCompressedSize = 0x5019 => [Tc::Long],
    ColorTransferFunction = 0x501A => [Tc::Undefined],
    ThumbnailData = 0x501B => [Tc::Byte],
    ThumbnailImageWidth = 0x5020 => [Tc::Short, Tc::Long],
    ThumbnailImageHeight = 0x5021 => [Tc::Short, Tc::Long],
    ThumbnailBitsPerSample = 0x5022 => [Tc::Short],
    ThumbnailCompression = 0x5023 => [Tc::Short],
    ThumbnailPhotometricInterp = 0x5024 => [Tc::Short],
    ThumbnailImageDescription = 0x5025 => [Tc::Ascii],
    ThumbnailEquipMake = 0x5026 => [Tc::Ascii],
    ThumbnailEquipModel = 0x5027 => [Tc::Ascii],
    ThumbnailStripOffsets = 0x5028 => [Tc::Short, Tc::Long],
    ThumbnailOrientation = 0x5029 => [Tc::Short],
    ThumbnailSamplesPerPixel = 0x502A => [Tc::Short],
    ThumbnailRowsPerStrip = 0x502B => [Tc::Short, Tc::Long],
    ThumbnailStripBytesCount = 0x502C => [Tc::Short, Tc::Long],
    ThumbnailResolutionX = 0x502D => [Tc::Rational],
    ThumbnailResolutionY = 0x502E => [Tc::Rational],
    ThumbnailPlanarConfig = 0x502F => [Tc::Short],
    ThumbnailResolutionUnit = 0x5030 => [Tc::Short],
    ThumbnailTransferFunction = 0x5031 => [Tc::Short],
    ThumbnailSoftwareUsed = 0x5032 => [Tc::Ascii],
    ThumbnailDateTime = 0x5033 => [Tc::Ascii],
    ThumbnailArtist = 0x5034 => [Tc::Ascii],
    ThumbnailWhitePoint = 0x5035 => [Tc::Rational],
    ThumbnailPrimaryChromaticities = 0x5036 => [Tc::Rational],
    ThumbnailYCbCrCoefficients = 0x5037 => [Tc::Rational],
    ThumbnailYCbCrSubsampling = 0x5038 => [Tc::Short],
    ThumbnailYCbCrPositioning = 0x5039 => [Tc::Short],
    ThumbnailRefBlackWhite = 0x503A => [Tc::Rational],
    ThumbnailCopyRight = 0x503B => [Tc::Ascii],
    LuminanceTable = 0x5090 => [Tc::Short],
    ChrominanceTable = 0x5091 => [Tc::Short],
    FrameDelay = 0x5100 => [Tc::Long],
    LoopCount = 0x5101 => [Tc::Short],
    GlobalPalette = 0x5102 => [Tc::Byte],
    IndexBackground = 0x5103 => [Tc::Byte],
    IndexTransparent = 0x5104 => [Tc::Byte],
    PixelUnit = 0x5110 => [Tc::Byte],
    PixelPerUnitX = 0x5111 => [Tc::Long],
    PixelPerUnitY = 0x5112 => [Tc::Long],
    PaletteHistogram = 0x5113 => [Tc::Byte],

    //
    // camera settings (Exif sub-IFD)
    Copyright = 0x8298 => [Tc::Ascii],
    ExifExposureTime = 0x829A => [Tc::Rational],
    ExifFNumber = 0x829D => [Tc::Rational],
    ExifIFD = 0x8769 => [Tc::Long],
    ICCProfile = 0x8773 => [Tc::Byte],
    ExifExposureProg = 0x8822 => [Tc::Short],
    ExifSpectralSense = 0x8824 => [Tc::Ascii],
    GpsIFD = 0x8825 => [Tc::Long],
    ExifISOSpeed = 0x8827 => [Tc::Short],
    ExifOECF = 0x8828 => [Tc::Undefined],
    ExifVer = 0x9000 => [Tc::Undefined],
    ExifDTOrig = 0x9003 => [Tc::Ascii],
    ExifDTDigitized = 0x9004 => [Tc::Ascii],
    ExifCompConfig = 0x9101 => [Tc::Undefined],
    ExifCompBPP = 0x9102 => [Tc::Rational],
    ExifShutterSpeed = 0x9201 => [Tc::SRational],
    ExifAperture = 0x9202 => [Tc::Rational],
    ExifBrightness = 0x9203 => [Tc::SRational],
    ExifExposureBias = 0x9204 => [Tc::SRational],
    ExifMaxAperture = 0x9205 => [Tc::Rational],
    ExifSubjectDist = 0x9206 => [Tc::Rational],
    ExifMeteringMode = 0x9207 => [Tc::Short],
    ExifLightSource = 0x9208 => [Tc::Short],
    ExifFlash = 0x9209 => [Tc::Short],
    ExifFocalLength = 0x920A => [Tc::Rational],
    ExifMakerNote = 0x927C => [Tc::Undefined],
    ExifUserComment = 0x9286 => [Tc::Undefined],
    ExifDTSubsec = 0x9290 => [Tc::Ascii],
    ExifDTOrigSS = 0x9291 => [Tc::Ascii],
    ExifDTDigSS = 0x9292 => [Tc::Ascii],
    ExifFPXVer = 0xA000 => [Tc::Undefined],
    ExifColorSpace = 0xA001 => [Tc::Short],
    ExifPixXDim = 0xA002 => [Tc::Short, Tc::Long],
    ExifPixYDim = 0xA003 => [Tc::Short, Tc::Long],
    ExifRelatedWav = 0xA004 => [Tc::Ascii],
    ExifInterop = 0xA005 => [Tc::Long],
    ExifFlashEnergy = 0xA20B => [Tc::Rational],
    ExifSpatialFR = 0xA20C => [Tc::Undefined],
    ExifFocalXRes = 0xA20E => [Tc::Rational],
    ExifFocalYRes = 0xA20F => [Tc::Rational],
    ExifFocalResUnit = 0xA210 => [Tc::Short],
    ExifSubjectLoc = 0xA214 => [Tc::Short],
    ExifExposureIndex = 0xA215 => [Tc::Rational],
    ExifSensingMethod = 0xA217 => [Tc::Short],
    ExifFileSource = 0xA300 => [Tc::Undefined],
    ExifSceneType = 0xA301 => [Tc::Undefined],
    ExifCfaPattern = 0xA302 => [Tc::Undefined],
);
