//! Decides which entries make it into the output.
//!
//! Callers pass selectors as strings. Anything that parses as an integer
//! (decimal, or `0x` hex) selects by tag ID; everything else is a name
//! pattern, which may use `*` and `?` wildcards.

use core::convert::Infallible;
use core::str::FromStr;

use crate::pipeline::{Entry, EntryKind};

/// The fixed name of the file-object row.
pub const FILE_OBJECT_NAME: &str = "FileObject";

/// The ID of the file-object row.
pub const FILE_OBJECT_ID: i32 = -1;

/// The suffix marking derived entries.
pub(crate) const DERIVED_SUFFIX: &str = "PS";

/// One way of picking out tags.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Matches a tag ID exactly.
    Id(i32),

    /// Matches a tag name. Case-sensitive; `*` matches any run of
    /// characters, and `?` matches exactly one.
    Name(String),
}

impl Selector {
    /// Parses a selector string. This never fails: anything that isn't an
    /// integer is taken as a name.
    ///
    /// ```
    /// use propdecode::Selector;
    ///
    /// assert_eq!(Selector::parse("0x11A"), Selector::Id(282));
    /// assert_eq!(Selector::parse("282"), Selector::Id(282));
    /// assert_eq!(Selector::parse("*ISO*"), Selector::Name("*ISO*".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        let id = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16).ok().map(|v| v as i32),
            None => trimmed.parse::<i32>().ok(),
        };

        match id {
            Some(id) => Selector::Id(id),
            None => {
                log::trace!("Selector `{s}` isn't numeric. Matching it by name.");
                Selector::Name(trimmed.to_owned())
            }
        }
    }

    /// Tests this selector against a source entry.
    ///
    /// A name pattern aimed at a derived tag (ending in `PS`, `PS*` or `PS?`)
    /// has that suffix dropped first, so it still picks up the tag the
    /// derived entry comes from.
    fn matches_source(&self, entry: &Entry) -> bool {
        match self {
            Selector::Id(id) => *id == entry.id_dec,
            Selector::Name(pattern) => wildcard_match(strip_derived(pattern), &entry.tag_name),
        }
    }

    /// Tests this selector against a derived entry. Only names count here.
    fn matches_derived(&self, entry: &Entry) -> bool {
        match self {
            Selector::Id(_) => false,
            Selector::Name(pattern) => wildcard_match(pattern, &entry.tag_name),
        }
    }

    /// Tests this selector against the file-object row. Wildcards don't
    /// count; it has to be asked for by ID or exact name.
    fn matches_file_object(&self) -> bool {
        match self {
            Selector::Id(id) => *id == FILE_OBJECT_ID,
            Selector::Name(name) => name == FILE_OBJECT_NAME,
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector::parse(s))
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector::parse(s)
    }
}

impl From<i32> for Selector {
    fn from(id: i32) -> Self {
        Selector::Id(id)
    }
}

/// A set of selectors, plus whether unknown tags may pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    selectors: Vec<Selector>,
    include_unknown: bool,
}

impl Selection {
    pub fn new(selectors: Vec<Selector>, include_unknown: bool) -> Self {
        Self {
            selectors,
            include_unknown,
        }
    }

    /// Decides whether an entry passes.
    ///
    /// `suppress_derived` only matters for the file-object row, which is
    /// dropped by default when derived data is unwanted.
    pub fn admits(&self, entry: &Entry, known: bool, suppress_derived: bool) -> bool {
        match entry.kind {
            EntryKind::FileObject => self.admits_file_object(suppress_derived),
            EntryKind::Synthetic => self.first_match(entry, Selector::matches_derived),
            EntryKind::Decoded if !known && !self.include_unknown => {
                log::trace!("Dropping unknown tag `{}`.", entry.id_hex);
                false
            }
            EntryKind::Decoded => self.first_match(entry, Selector::matches_source),
        }
    }

    fn admits_file_object(&self, suppress_derived: bool) -> bool {
        if self.selectors.is_empty() {
            return !suppress_derived;
        }

        self.selectors.iter().any(Selector::matches_file_object)
    }

    /// Runs the selectors in order. The first match wins.
    fn first_match(&self, entry: &Entry, matches: fn(&Selector, &Entry) -> bool) -> bool {
        if self.selectors.is_empty() {
            return true;
        }

        match self.selectors.iter().position(|s| matches(s, entry)) {
            Some(index) => {
                log::trace!(
                    "Selector #{index} (`{:?}`) picked `{}`.",
                    self.selectors[index],
                    entry.tag_name
                );
                true
            }
            None => false,
        }
    }
}

/// Drops a trailing `PS`, `PS*` or `PS?` from a name pattern.
fn strip_derived(pattern: &str) -> &str {
    for wild in ["*", "?", ""] {
        if let Some(base) = pattern
            .strip_suffix(wild)
            .and_then(|p| p.strip_suffix(DERIVED_SUFFIX))
        {
            return base;
        }
    }

    pattern
}

/// Case-sensitive glob matching, with `*` and `?`.
///
/// On a mismatch after a `*`, the star is retried one character further
/// along, so this never needs more than the two cursors it keeps. Both
/// cursors are byte offsets, always on a `char` boundary.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let (mut p, mut t) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while let Some(tc) = text[t..].chars().next() {
        match pattern[p..].chars().next() {
            Some('*') => {
                star = Some((p, t));
                p += 1;
            }
            Some(pc) if pc == '?' || pc == tc => {
                p += pc.len_utf8();
                t += tc.len_utf8();
            }
            _ => match star {
                Some((sp, st)) => {
                    let skipped = text[st..].chars().next().map_or(1, char::len_utf8);
                    star = Some((sp, st + skipped));
                    p = sp + 1;
                    t = st + skipped;
                }
                None => return false,
            },
        }
    }

    pattern[p..].chars().all(|c| c == '*')
}
