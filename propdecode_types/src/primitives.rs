/// The type codes a property item may carry.
///
/// These are fixed by the host metadata standard. Codes 6 and 8 are skipped
/// there, so they aren't represented here either.
#[repr(i16)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum TypeCode {
    Byte = 1,
    Ascii = 2,
    Short = 3,
    Long = 4,
    Rational = 5,
    Undefined = 7,
    SLong = 9,
    SRational = 10,
}

impl TypeCode {
    /// Grabs the size of one element of this type, in bytes.
    ///
    /// Text types report `1`, as they're decoded byte-by-byte.
    ///
    /// ```
    /// use propdecode_types::primitives::TypeCode;
    ///
    /// assert_eq!(TypeCode::SLong.stride(), 4_usize);
    /// assert_eq!(TypeCode::Rational.stride(), 8_usize);
    /// ```
    pub const fn stride(&self) -> usize {
        match self {
            TypeCode::Byte | TypeCode::Ascii | TypeCode::Undefined => 1,
            TypeCode::Short => 2,
            TypeCode::Long | TypeCode::SLong => 4,
            TypeCode::Rational | TypeCode::SRational => 8,
        }
    }

    /// The description the host standard gives this type.
    pub const fn description(&self) -> &'static str {
        match self {
            TypeCode::Byte => "BYTE",
            TypeCode::Ascii => "ASCII",
            TypeCode::Short => "SHORT",
            TypeCode::Long => "LONG",
            TypeCode::Rational => "RATIONAL",
            TypeCode::Undefined => "UNDEFINED",
            TypeCode::SLong => "SLONG",
            TypeCode::SRational => "SRATIONAL",
        }
    }

    /// Every known type code, in numeric order.
    pub const ALL: [TypeCode; 8] = [
        TypeCode::Byte,
        TypeCode::Ascii,
        TypeCode::Short,
        TypeCode::Long,
        TypeCode::Rational,
        TypeCode::Undefined,
        TypeCode::SLong,
        TypeCode::SRational,
    ];
}

impl TryFrom<i16> for TypeCode {
    type Error = ();

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Byte),
            2 => Ok(Self::Ascii),
            3 => Ok(Self::Short),
            4 => Ok(Self::Long),
            5 => Ok(Self::Rational),
            7 => Ok(Self::Undefined),
            9 => Ok(Self::SLong),
            10 => Ok(Self::SRational),

            _ => Err(()),
        }
    }
}

/// A fraction that can't be negative.
///
/// Both the numerator (top number) and denominator (bottom number) are always
/// positive numbers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    /// Divides the fraction out.
    ///
    /// Returns `None` when the denominator is zero.
    ///
    /// ```
    /// use propdecode_types::primitives::Rational;
    ///
    /// let r = Rational { numerator: 4, denominator: 2 };
    /// assert_eq!(r.to_f64(), Some(2.0));
    /// ```
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

/// A signed fraction.
///
/// Both the numerator (top number) and denominator (bottom number) can be
/// negative.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SRational {
    /// Divides the fraction out.
    ///
    /// Returns `None` when the denominator is zero.
    ///
    /// ```
    /// use propdecode_types::primitives::SRational;
    ///
    /// let r = SRational { numerator: -1, denominator: 2 };
    /// assert_eq!(r.to_f64(), Some(-0.5));
    /// ```
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

/// One decoded value.
///
/// Rationals are divided out into `Float` during decoding. Text payloads
/// (ASCII and undefined) become a single `Text`.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub enum Scalar {
    Byte(u8),
    Short(u16),
    Long(u32),
    SLong(i32),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Reads this scalar as an integer, if it's one.
    ///
    /// Floats with no fractional part count, as some producers store integral
    /// enumerations as rationals.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Byte(b) => Some(*b as i64),
            Scalar::Short(s) => Some(*s as i64),
            Scalar::Long(l) => Some(*l as i64),
            Scalar::SLong(l) => Some(*l as i64),
            Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            Scalar::Float(_) | Scalar::Text(_) => None,
        }
    }

    /// Reads this scalar as a float, if it's numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Byte(b) => Some(*b as f64),
            Scalar::Short(s) => Some(*s as f64),
            Scalar::Long(l) => Some(*l as f64),
            Scalar::SLong(l) => Some(*l as f64),
            Scalar::Float(f) => Some(*f),
            Scalar::Text(_) => None,
        }
    }

    /// Borrows the text inside, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Scalar::Byte(b) => write!(f, "{b}"),
            Scalar::Short(s) => write!(f, "{s}"),
            Scalar::Long(l) => write!(f, "{l}"),
            Scalar::SLong(l) => write!(f, "{l}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(t) => f.write_str(t),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Scalar, TypeCode};

    #[test]
    fn type_codes_six_and_eight_are_unknown() {
        assert_eq!(TypeCode::try_from(6_i16), Err(()));
        assert_eq!(TypeCode::try_from(8_i16), Err(()));
        assert_eq!(TypeCode::try_from(10_i16), Ok(TypeCode::SRational));
    }

    #[test]
    fn floats_display_without_trailing_zeroes() {
        assert_eq!(Scalar::Float(2.0).to_string(), "2");
        assert_eq!(Scalar::Float(0.01).to_string(), "0.01");
        assert_eq!(Scalar::Float(2.0).as_i64(), Some(2));
        assert_eq!(Scalar::Float(2.5).as_i64(), None);
    }
}
