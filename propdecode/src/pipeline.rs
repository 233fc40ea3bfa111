//! Runs every stage over the property items of one file.
//!
//! For each item, in order: resolve its name, decode its payload, format it,
//! derive any convenience entries from it, and then filter the lot through
//! the caller's selectors. A file-object row (id `-1`) leads the output.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::{
    decode::decode,
    derive::derive,
    error::EntryFault,
    format::Formatter,
    registry::Registry,
    select::{FILE_OBJECT_ID, FILE_OBJECT_NAME, Selection, Selector},
    source::PropertyItemSource,
    util::id_hex,
};
use propdecode_types::{RawPropertyItem, primitives::TypeCode, tags::PropertyTag, value::Value};

/// Where an [`Entry`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Decoded from a property item.
    Decoded,

    /// Computed from another entry. Its name ends in `PS`.
    Synthetic,

    /// The pseudo-row describing the file itself.
    FileObject,
}

/// One row of output.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// The tag ID. The file-object row uses `-1`.
    pub id_dec: i32,

    /// `id_dec` as the host shows it: `0x` and uppercase hex.
    pub id_hex: String,

    pub tag_name: String,
    pub type_code: i16,
    pub type_desc: String,

    /// The payload length, in bytes.
    pub length: u32,

    /// The payload. Only decoded entries have one.
    pub raw_bytes: Option<Vec<u8>>,

    pub decoded: Value,
    pub display: Value,
    pub kind: EntryKind,
}

impl Entry {
    /// Makes a synthetic entry from this one.
    ///
    /// It keeps this entry's ID, type and length, but takes a new name and
    /// value.
    pub(crate) fn synthetic(&self, tag_name: String, value: Value) -> Self {
        Self {
            id_dec: self.id_dec,
            id_hex: self.id_hex.clone(),
            tag_name,
            type_code: self.type_code,
            type_desc: self.type_desc.clone(),
            length: self.length,
            raw_bytes: None,
            decoded: value.clone(),
            display: value,
            kind: EntryKind::Synthetic,
        }
    }

    /// The row standing in for the file itself.
    fn file_object(path: &Path) -> Self {
        let value = Value::text(path.display().to_string());

        Self {
            id_dec: FILE_OBJECT_ID,
            id_hex: id_hex(FILE_OBJECT_ID),
            tag_name: FILE_OBJECT_NAME.to_owned(),
            type_code: TypeCode::Ascii as i16,
            type_desc: TypeCode::Undefined.description().to_owned(),
            length: 0,
            raw_bytes: None,
            decoded: value.clone(),
            display: value,
            kind: EntryKind::FileObject,
        }
    }
}

/// Per-call options.
///
/// ```
/// use propdecode::{Options, Selector};
///
/// let opts = Options::default()
///     .with_selectors(["0x0112", "*ISO*"])
///     .with_include_unknown(true);
///
/// assert_eq!(opts.selectors, vec![Selector::Id(0x0112), Selector::Name("*ISO*".into())]);
/// assert!(!opts.suppress_derived);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// Which tags to keep. Empty keeps everything.
    pub selectors: Vec<Selector>,

    /// Skips derived entries (and, unless asked for, the file-object row).
    pub suppress_derived: bool,

    /// Keeps tags the registry can't name, as `Unknown_0x<HEX>_<DEC>`.
    pub include_unknown: bool,
}

impl Options {
    /// Adds selectors, parsing each from a string.
    pub fn with_selectors<S: AsRef<str>>(mut self, selectors: impl IntoIterator<Item = S>) -> Self {
        self.selectors
            .extend(selectors.into_iter().map(|s| Selector::parse(s.as_ref())));
        self
    }

    /// Adds one already-built selector.
    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn with_suppress_derived(mut self, suppress_derived: bool) -> Self {
        self.suppress_derived = suppress_derived;
        self
    }

    pub fn with_include_unknown(mut self, include_unknown: bool) -> Self {
        self.include_unknown = include_unknown;
        self
    }
}

/// Everything produced for one file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileEntries {
    /// The emitted rows, in order.
    pub entries: Vec<Entry>,

    /// Items that failed to decode. Their entries were skipped.
    pub faults: Vec<EntryFault>,
}

/// The entries folded into a name -> display value map, hung off the file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttachedProperties {
    /// The file-object row, if it was emitted.
    pub file: Option<Entry>,

    /// Tag name -> display value. Later entries overwrite earlier ones.
    pub properties: FxHashMap<String, Value>,

    /// Each name in `properties`, in the order it first showed up.
    pub order: Vec<String>,
}

impl FileEntries {
    /// Folds the entries into per-name properties.
    ///
    /// The file-object row isn't a property; it becomes [`AttachedProperties::file`].
    pub fn attach(self) -> AttachedProperties {
        let mut attached = AttachedProperties::default();

        for entry in self.entries {
            if entry.kind == EntryKind::FileObject {
                attached.file = Some(entry);
                continue;
            }

            if !attached.properties.contains_key(&entry.tag_name) {
                attached.order.push(entry.tag_name.clone());
            }
            attached.properties.insert(entry.tag_name, entry.display);
        }

        attached
    }
}

/// Decodes the property items of files.
///
/// Holds a borrowed [`Registry`], so many pipelines (on many threads) can
/// share one.
#[derive(Clone, Debug)]
pub struct Pipeline<'r, S> {
    registry: &'r Registry,
    formatter: Formatter,
    source: S,
}

impl<'r, S: PropertyItemSource> Pipeline<'r, S> {
    /// Creates a pipeline with the standard formatting rules.
    pub fn new(registry: &'r Registry, source: S) -> Self {
        Self {
            registry,
            formatter: Formatter::default(),
            source,
        }
    }

    /// Swaps in another formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Decodes the file at `path`.
    ///
    /// This never fails. If the source can't read the file, there are no
    /// items, so only the file-object row can come out.
    pub fn run(&self, path: impl AsRef<Path>, options: &Options) -> FileEntries {
        let path = path.as_ref();

        let items = self.source.property_items(path).unwrap_or_else(|e| {
            log::error!("Couldn't get property items. Treating the file as empty. err: {e}");
            Vec::new()
        });

        self.process(path, &items, options)
    }

    /// Decodes items that were already pulled out of the file at `path`.
    pub fn process(&self, path: &Path, items: &[RawPropertyItem], options: &Options) -> FileEntries {
        let selection = Selection::new(options.selectors.clone(), options.include_unknown);
        let mut out = FileEntries::default();

        let file = Entry::file_object(path);
        if selection.admits(&file, true, options.suppress_derived) {
            out.entries.push(file);
        }

        log::trace!("Processing `{}` items of `{}`...", items.len(), path.display());
        for item in items {
            let id = item.id as i32;

            let (tag_name, known) = match self.registry.tag_name(id) {
                Some(name) => (name.to_owned(), true),
                None if options.include_unknown => {
                    (format!("Unknown_{}_{id}", id_hex(id)), false)
                }
                None => {
                    log::warn!("Tag ID isn't in the registry. Skipping it. id: `{}`", id_hex(id));
                    continue;
                }
            };

            let entry = match self.entry(item, tag_name) {
                Ok(entry) => entry,
                Err(fault) => {
                    log::error!("{fault}");
                    out.faults.push(fault);
                    continue;
                }
            };

            let derived = match options.suppress_derived {
                true => Vec::new(),
                false => derive(&entry),
            };

            if selection.admits(&entry, known, options.suppress_derived) {
                out.entries.push(entry);
            }

            out.entries.extend(
                derived
                    .into_iter()
                    .filter(|d| selection.admits(d, known, options.suppress_derived)),
            );
        }

        out
    }

    /// Decodes and formats one item.
    fn entry(&self, item: &RawPropertyItem, tag_name: String) -> Result<Entry, EntryFault> {
        let id = item.id as i32;
        let payload = item.payload();

        warn_on_unexpected_type(id, item.type_code);

        let scalars = decode(item.type_code, payload).map_err(|error| EntryFault {
            id,
            tag_name: tag_name.clone(),
            error,
        })?;

        let formatted = self.formatter.format(
            id,
            &tag_name,
            Value::from_scalars(scalars),
            payload,
        );

        Ok(Entry {
            id_dec: id,
            id_hex: id_hex(id),
            type_desc: self
                .registry
                .type_desc(item.type_code)
                .unwrap_or("UNKNOWN")
                .to_owned(),
            tag_name,
            type_code: item.type_code,
            length: item.length,
            raw_bytes: Some(payload.to_vec()),
            decoded: formatted.decoded,
            display: formatted.display,
            kind: EntryKind::Decoded,
        })
    }
}

/// Some writers use the wrong type for a tag. We still decode what's there,
/// but it's worth a note.
fn warn_on_unexpected_type(id: i32, type_code: i16) {
    let Ok(tag) = PropertyTag::try_from(id) else {
        return;
    };

    let expected = tag.types();
    if !expected.iter().any(|ty| *ty as i16 == type_code) {
        log::warn!(
            "Tag `{}` has an unexpected type. expected one of: `{expected:?}`, got: `{type_code}`",
            tag.tag_name()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{EntryKind, Options, Pipeline};
    use crate::{Value, registry::Registry, source::MemorySource, util::logger};
    use propdecode_types::{RawPropertyItem, primitives::Scalar};

    fn run(items: Vec<RawPropertyItem>, options: &Options) -> super::FileEntries {
        let registry = Registry::builtin();
        let pipeline = Pipeline::new(&registry, MemorySource::default());
        pipeline.process(Path::new("test.jpg"), &items, options)
    }

    #[test]
    fn file_object_leads_the_output() {
        logger();

        let out = run(vec![RawPropertyItem::new(0x0112, 3, vec![1, 0])], &Options::default());
        assert_eq!(out.entries.len(), 2);

        let file = &out.entries[0];
        assert_eq!(file.kind, EntryKind::FileObject);
        assert_eq!(file.id_dec, -1);
        assert_eq!(file.id_hex, "0xFFFFFFFF");
        assert_eq!(file.tag_name, "FileObject");
        assert_eq!(file.type_code, 2);
        assert_eq!(file.type_desc, "UNDEFINED");
        assert_eq!(file.raw_bytes, None);
        assert_eq!(file.display, Value::text("test.jpg"));
    }

    #[test]
    fn entries_carry_their_item() {
        logger();

        let out = run(
            vec![RawPropertyItem::new(0x011A, 5, vec![72, 0, 0, 0, 1, 0, 0, 0])],
            &Options::default().with_suppress_derived(true),
        );
        assert_eq!(out.entries.len(), 1);

        let e = &out.entries[0];
        assert_eq!(e.id_dec, 282);
        assert_eq!(e.id_hex, "0x11A");
        assert_eq!(e.tag_name, "XResolution");
        assert_eq!(e.type_desc, "RATIONAL");
        assert_eq!(e.length, 8);
        assert_eq!(e.raw_bytes.as_deref(), Some(&[72, 0, 0, 0, 1, 0, 0, 0][..]));
        assert_eq!(e.decoded, Value::Scalar(Scalar::Float(72.0)));
        assert_eq!(e.kind, EntryKind::Decoded);
    }

    #[test]
    fn reported_length_bounds_the_payload() {
        logger();

        let mut item = RawPropertyItem::new(0x0100, 3, vec![0x40, 0x01, 0xFF, 0xFF]);
        item.length = 2;

        let out = run(vec![item], &Options::default().with_suppress_derived(true));
        assert_eq!(out.entries[0].decoded, Value::Scalar(Scalar::Short(320)));
        assert_eq!(out.entries[0].raw_bytes.as_deref(), Some(&[0x40, 0x01][..]));
    }

    #[test]
    fn unsupported_types_become_faults() {
        logger();

        let out = run(
            vec![
                RawPropertyItem::new(0x0112, 6, vec![1]),
                RawPropertyItem::new(0x0112, 3, vec![1, 0]),
            ],
            &Options::default().with_suppress_derived(true),
        );

        assert_eq!(out.faults.len(), 1);
        assert_eq!(out.faults[0].tag_name, "Orientation");
        assert_eq!(out.entries.len(), 1);
    }
}
