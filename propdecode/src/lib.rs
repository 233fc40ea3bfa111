//! # `propdecode`
//!
//! A library to decode image metadata "property items" into typed values and
//! human-readable strings.
//!
//! The host platform's image decoder hands us raw `(id, type, length, bytes)`
//! tuples. We turn those into [`Entry`] rows: each one carries the tag's name,
//! its decoded scalars, and a display value produced by a per-tag formatting
//! rule. A few convenience rows (pixel dimensions, parsed dates, GPS time of
//! day) are derived on top.
//!
//! ## Usage
//!
//! ```
//! use propdecode::{Options, Pipeline, registry::Registry, source::MemorySource};
//! use propdecode_types::RawPropertyItem;
//!
//! let registry = Registry::builtin();
//! let mut source = MemorySource::default();
//! source.insert("cat.jpg", vec![RawPropertyItem::new(0x0112, 3, vec![6, 0])]);
//!
//! let pipeline = Pipeline::new(&registry, &source);
//! let out = pipeline.run("cat.jpg", &Options::default());
//!
//! let orientation = out.entries.iter().find(|e| e.tag_name == "Orientation").unwrap();
//! assert_eq!(orientation.display.as_text(), Some("Rotate 90° CW (right top)"));
//! ```
//!
//! ## What this doesn't do
//!
//! Image files are never opened here - a [`source::PropertyItemSource`] does
//! that. Vendor maker notes are never interpreted.
//!
//! ## License
//!
//! This project is dual-licensed under either the Apache License 2.0 or the MIT License at your option.

#![forbid(unsafe_code)]

pub mod decode;
pub mod derive;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod registry;
pub mod select;
pub mod source;

pub use pipeline::{AttachedProperties, Entry, EntryKind, FileEntries, Options, Pipeline};
pub use propdecode_types::{RawPropertyItem, primitives::Scalar, value::Value};
pub use select::Selector;

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }

    /// Formats a tag ID the way the host shows it: `0x` and uppercase hex of
    /// its two's-complement bits.
    pub fn id_hex(id: i32) -> String {
        format!("0x{:X}", id as u32)
    }

}
