//! The two static lookup tables: tag ID -> name, and type code -> description.
//!
//! A [`Registry`] is built once and then only ever read. Pass it around by
//! reference; it's `Send + Sync`, so worker threads can share one.

use rustc_hash::FxHashMap;
use yaml_rust2::{Yaml, YamlLoader};

use crate::error::{RegistryError, RegistryResult};
use propdecode_types::{primitives::TypeCode, tags::PropertyTag};

/// Read-only lookup tables for tag names and type descriptions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
    tags: FxHashMap<i32, String>,
    types: FxHashMap<i16, String>,
}

impl Registry {
    /// The tables the host imaging facility ships with.
    ///
    /// ```
    /// use propdecode::registry::Registry;
    ///
    /// let registry = Registry::builtin();
    /// assert_eq!(registry.tag_name(0x0112), Some("Orientation"));
    /// assert_eq!(registry.type_desc(5), Some("RATIONAL"));
    /// ```
    pub fn builtin() -> Self {
        let tags = PropertyTag::ALL
            .iter()
            .map(|t| (t.tag_id(), t.tag_name().to_owned()))
            .collect();
        let types = TypeCode::ALL
            .iter()
            .map(|t| (*t as i16, t.description().to_owned()))
            .collect();

        Self { tags, types }
    }

    /// Builds the tables from rows.
    ///
    /// # Errors
    ///
    /// IDs and type codes must each be unique.
    pub fn from_rows(
        tags: impl IntoIterator<Item = (i32, String)>,
        types: impl IntoIterator<Item = (i16, String)>,
    ) -> RegistryResult<Self> {
        let mut registry = Self::default();

        for (id, name) in tags {
            if registry.tags.insert(id, name).is_some() {
                log::error!("Tag table has a duplicate row! id: `{id}`");
                return Err(RegistryError::DuplicateTag { id });
            }
        }

        for (code, desc) in types {
            if registry.types.insert(code, desc).is_some() {
                log::error!("Type table has a duplicate row! code: `{code}`");
                return Err(RegistryError::DuplicateType { code });
            }
        }

        log::debug!(
            "Loaded registry with `{}` tags and `{}` types.",
            registry.tags.len(),
            registry.types.len()
        );
        Ok(registry)
    }

    /// Loads the tables from YAML.
    ///
    /// Each table is a sequence of two-column rows:
    ///
    /// ```yaml
    /// # tags
    /// - id: 0x0112
    ///   name: Orientation
    ///
    /// # types
    /// - code: 3
    ///   description: SHORT
    /// ```
    ///
    /// IDs may be plain integers, `0x` hex integers, or strings holding
    /// either.
    pub fn from_yaml(tags_yaml: &str, types_yaml: &str) -> RegistryResult<Self> {
        let tags = load_rows(tags_yaml, "id", "name")?
            .into_iter()
            .enumerate()
            .map(|(row, (id, name))| Ok((tag_id(row, id)?, name)))
            .collect::<RegistryResult<Vec<_>>>()?;
        let types = load_rows(types_yaml, "code", "description")?
            .into_iter()
            .enumerate()
            .map(|(row, (code, desc))| {
                let code = i16::try_from(code).map_err(|_| out_of_range(row, "code", code))?;
                Ok((code, desc))
            })
            .collect::<RegistryResult<Vec<_>>>()?;

        Self::from_rows(tags, types)
    }

    /// Looks up a tag's name.
    pub fn tag_name(&self, id: i32) -> Option<&str> {
        self.tags.get(&id).map(String::as_str)
    }

    /// Looks up a type code's description.
    pub fn type_desc(&self, code: i16) -> Option<&str> {
        self.types.get(&code).map(String::as_str)
    }

    /// How many tags are known.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

/// Parses one YAML table into `(key, text)` rows.
fn load_rows(
    yaml: &str,
    key_field: &'static str,
    text_field: &'static str,
) -> RegistryResult<Vec<(i64, String)>> {
    let docs = YamlLoader::load_from_str(yaml).map_err(|e| {
        log::error!("Table YAML didn't parse. err: {e}");
        RegistryError::Yaml(e.to_string())
    })?;

    // a blank document is just an empty table
    let Some(doc) = docs.into_iter().next() else {
        log::trace!("Table YAML was blank. Treating it as empty.");
        return Ok(Vec::new());
    };

    let Yaml::Array(rows) = doc else {
        log::error!("Table YAML wasn't a sequence!");
        return Err(RegistryError::NotATable);
    };

    rows.iter()
        .enumerate()
        .map(|(row, yaml)| {
            let key = yaml_int(&yaml[key_field]).ok_or(RegistryError::MissingField {
                row,
                field: key_field,
            })?;
            let text = yaml[text_field]
                .as_str()
                .ok_or(RegistryError::MissingField {
                    row,
                    field: text_field,
                })?
                .to_owned();
            Ok((key, text))
        })
        .collect()
}

/// Narrows a tag ID cell.
///
/// IDs are written as unsigned 32-bit values (`0xFFFFFFFF` is `-1`), but
/// negative decimal IDs are taken as-is.
fn tag_id(row: usize, id: i64) -> RegistryResult<i32> {
    match u32::try_from(id) {
        Ok(unsigned) => Ok(unsigned as i32),
        Err(_) => i32::try_from(id).map_err(|_| out_of_range(row, "id", id)),
    }
}

fn out_of_range(row: usize, field: &'static str, value: i64) -> RegistryError {
    log::error!("Table row `{row}` has an out-of-range `{field}`! got: `{value}`");
    RegistryError::OutOfRange { row, field, value }
}

/// Reads an integer cell. Strings holding decimal or `0x` hex count.
fn yaml_int(yaml: &Yaml) -> Option<i64> {
    match yaml {
        Yaml::Integer(i) => Some(*i),
        Yaml::String(s) => {
            let s = s.trim();
            match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => i64::from_str_radix(hex, 16).ok(),
                None => s.parse().ok(),
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::RegistryError, util::logger};

    use super::Registry;

    #[test]
    fn builtin_covers_every_known_tag() {
        logger();

        let registry = Registry::builtin();
        assert_eq!(registry.tag_count(), 217);
        assert_eq!(registry.tag_name(0x8827), Some("ExifISOSpeed"));
        assert_eq!(registry.tag_name(0x927D), None);
        assert_eq!(registry.type_desc(7), Some("UNDEFINED"));
        assert_eq!(registry.type_desc(6), None);
    }

    #[test]
    fn yaml_tables_load() {
        logger();

        let tags = "
- id: 0x0112
  name: Orientation
- id: 306
  name: DateTime
- id: '0x8827'
  name: ExifISOSpeed
";
        let types = "
- code: 3
  description: SHORT
";

        let registry = Registry::from_yaml(tags, types).unwrap();
        assert_eq!(registry.tag_name(274), Some("Orientation"));
        assert_eq!(registry.tag_name(306), Some("DateTime"));
        assert_eq!(registry.tag_name(0x8827), Some("ExifISOSpeed"));
        assert_eq!(registry.type_desc(3), Some("SHORT"));
    }

    #[test]
    fn duplicate_rows_are_rejected() {
        logger();

        let tags = "
- id: 274
  name: Orientation
- id: 274
  name: AlsoOrientation
";
        assert_eq!(
            Registry::from_yaml(tags, ""),
            Err(RegistryError::DuplicateTag { id: 274 })
        );

        assert_eq!(
            Registry::from_rows([], [(3, "SHORT".to_owned()), (3, "ALSO".to_owned())]),
            Err(RegistryError::DuplicateType { code: 3 })
        );
    }

    #[test]
    fn oversized_keys_are_rejected() {
        logger();

        // would wrap onto `EquipMake` (0x010F) if narrowed blindly
        assert_eq!(
            Registry::from_yaml("- id: 0x10000010F\n  name: Bogus", ""),
            Err(RegistryError::OutOfRange {
                row: 0,
                field: "id",
                value: 0x1_0000_010F
            })
        );

        // would wrap onto `SHORT` (3)
        let types = "
- code: 3
  description: SHORT
- code: 65539
  description: NOTSHORT
";
        assert_eq!(
            Registry::from_yaml("", types),
            Err(RegistryError::OutOfRange {
                row: 1,
                field: "code",
                value: 65539
            })
        );

        // the full unsigned range still maps onto negative IDs
        let registry = Registry::from_yaml("- id: 0xFFFFFFFF\n  name: FileObject", "").unwrap();
        assert_eq!(registry.tag_name(-1), Some("FileObject"));
        let registry = Registry::from_yaml("- id: -2\n  name: Negative", "").unwrap();
        assert_eq!(registry.tag_name(-2), Some("Negative"));
    }

    #[test]
    fn malformed_tables_are_rejected() {
        logger();

        assert_eq!(
            Registry::from_yaml("id: 3", ""),
            Err(RegistryError::NotATable)
        );
        assert_eq!(
            Registry::from_yaml("- name: Orientation", ""),
            Err(RegistryError::MissingField { row: 0, field: "id" })
        );
        assert!(matches!(
            Registry::from_yaml("- [unclosed", ""),
            Err(RegistryError::Yaml(_))
        ));
    }
}
