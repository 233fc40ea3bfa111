use std::path::PathBuf;

/// The result of decoding one property item's payload.
///
/// An `Err` here only affects the item being decoded. The pipeline records
/// it as an [`EntryFault`] and carries on with the item's siblings.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Loading the lookup tables may fail if the tabular data is malformed.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum DecodeError {
    /// The type code isn't one the host standard defines.
    ///
    /// Codes 6 and 8 land here, too.
    UnsupportedType { code: i16 },

    /// A rational at index `index` had a zero denominator.
    ZeroDenominator { index: usize },

    /// Couldn't read element `index` - ran out of data.
    OuttaData { code: i16, index: usize },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::UnsupportedType { code } => {
                write!(f, "Type code isn't supported by the decoder. got: `{code}`")
            }
            DecodeError::ZeroDenominator { index } => write!(
                f,
                "Rational had a zero denominator, so it can't be divided out. index: `{index}`"
            ),
            DecodeError::OuttaData { code, index } => write!(
                f,
                "Couldn't decode element - no more data in payload. type: `{code}`, index: `{index}`"
            ),
        }
    }
}

/// A decode fault, attached to the entry it happened on.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub struct EntryFault {
    /// The tag ID of the faulty item.
    pub id: i32,

    /// The name the item would've been emitted under.
    pub tag_name: String,

    /// What went wrong.
    pub error: DecodeError,
}

impl core::fmt::Display for EntryFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Couldn't decode `{}` (id: `{}`). err: {}",
            self.tag_name, self.id, self.error
        )
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum RegistryError {
    /// The YAML text didn't parse.
    Yaml(String),

    /// The YAML document wasn't a sequence of rows.
    NotATable,

    /// A row lacked one of its two columns.
    MissingField { row: usize, field: &'static str },

    /// Two tag rows shared an ID.
    DuplicateTag { id: i32 },

    /// Two type rows shared a numeric value.
    DuplicateType { code: i16 },

    /// A key doesn't fit its column's integer type.
    OutOfRange {
        row: usize,
        field: &'static str,
        value: i64,
    },
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistryError::Yaml(e) => write!(f, "Failed to parse table YAML. err: {e}"),
            RegistryError::NotATable => {
                f.write_str("Table YAML must be a sequence of rows (mappings).")
            }
            RegistryError::MissingField { row, field } => {
                write!(f, "Table row `{row}` is missing its `{field}` column.")
            }
            RegistryError::DuplicateTag { id } => {
                write!(f, "Tag table lists ID `{id}` more than once.")
            }
            RegistryError::DuplicateType { code } => {
                write!(f, "Type table lists code `{code}` more than once.")
            }
            RegistryError::OutOfRange { row, field, value } => write!(
                f,
                "Table row `{row}` has a `{field}` that's out of range. got: `{value}`"
            ),
        }
    }
}

/// The image decoder couldn't hand over any property items.
///
/// This never fails a pipeline run. It just means zero items.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum SourceError {
    /// There's no file at that path.
    NotFound(PathBuf),

    /// The file exists, but couldn't be read as an image.
    Unreadable { path: PathBuf, reason: String },
}

impl core::fmt::Display for SourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SourceError::NotFound(path) => write!(f, "No file found at `{}`.", path.display()),
            SourceError::Unreadable { path, reason } => {
                write!(f, "Couldn't read `{}`. reason: {reason}", path.display())
            }
        }
    }
}

impl core::error::Error for DecodeError {}
impl core::error::Error for EntryFault {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}
impl core::error::Error for RegistryError {}
impl core::error::Error for SourceError {}
