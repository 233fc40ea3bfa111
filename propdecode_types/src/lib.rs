//! # `propdecode_types`
//!
//! Plain data types shared by the `propdecode` crate: the numeric type codes a
//! property item can carry, the scalars they decode into, the [`Value`] union
//! used for both decoded and display values, and the list of property tags
//! known to the host imaging facility.
//!
//! [`Value`]: crate::value::Value

#![forbid(unsafe_code)]

pub mod primitives;
pub mod tags;
pub mod value;

/// A raw property item, as extracted from an image file by the host's image
/// decoder.
///
/// We never produce these ourselves. They're handed over as-is and treated as
/// immutable.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RawPropertyItem {
    /// The numeric tag identifier.
    pub id: u32,

    /// The type code describing how `bytes` is laid out.
    ///
    /// See [`primitives::TypeCode`] for the known values.
    pub type_code: i16,

    /// The payload length reported by the image decoder.
    pub length: u32,

    /// The payload itself.
    pub bytes: Vec<u8>,
}

impl RawPropertyItem {
    /// Creates an item whose reported length matches its payload.
    ///
    /// ```
    /// use propdecode_types::RawPropertyItem;
    ///
    /// let item = RawPropertyItem::new(0x010F, 2, b"Canon\0".to_vec());
    /// assert_eq!(item.length, 6);
    /// ```
    pub fn new(id: u32, type_code: i16, bytes: Vec<u8>) -> Self {
        Self {
            id,
            type_code,
            length: bytes.len() as u32,
            bytes,
        }
    }

    /// The portion of the payload that's safe to read.
    ///
    /// A decoder may report a length that doesn't agree with the buffer it
    /// hands us. We only ever look at the shorter of the two.
    pub fn payload(&self) -> &[u8] {
        let len = (self.length as usize).min(self.bytes.len());
        &self.bytes[..len]
    }
}
