//! The [`Value`] union, used for both decoded and display values.

use chrono::{NaiveDateTime, TimeDelta};

use crate::primitives::Scalar;

/// A decoded or displayable value.
///
/// How many scalars a tag holds decides the variant, so consumers match on
/// this rather than counting elements themselves.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub enum Value {
    /// Nothing is stored here.
    #[default]
    Empty,

    /// Exactly one scalar.
    Scalar(Scalar),

    /// Two or more scalars, in payload order.
    Sequence(Vec<Scalar>),

    /// A calendar date and time, parsed out of a text value.
    DateTime(NaiveDateTime),

    /// A time of day, stored as the duration since midnight.
    TimeOfDay(TimeDelta),
}

impl Value {
    /// Wraps a list of scalars using the cardinality rule: none is `Empty`,
    /// one is unwrapped, and anything more stays a sequence.
    ///
    /// ```
    /// use propdecode_types::{primitives::Scalar, value::Value};
    ///
    /// assert_eq!(Value::from_scalars(vec![]), Value::Empty);
    /// assert_eq!(
    ///     Value::from_scalars(vec![Scalar::Short(1)]),
    ///     Value::Scalar(Scalar::Short(1))
    /// );
    /// ```
    pub fn from_scalars(mut scalars: Vec<Scalar>) -> Self {
        match scalars.len() {
            0 => Value::Empty,
            1 => Value::Scalar(scalars.remove(0)),
            _ => Value::Sequence(scalars),
        }
    }

    /// A single text scalar.
    pub fn text(text: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Text(text.into()))
    }

    /// Whether there's nothing stored.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Borrows the scalars inside, if any.
    ///
    /// Native date/time values have no scalars and return an empty slice.
    pub fn scalars(&self) -> &[Scalar] {
        match self {
            Value::Scalar(s) => core::slice::from_ref(s),
            Value::Sequence(list) => list.as_slice(),
            Value::Empty | Value::DateTime(_) | Value::TimeOfDay(_) => &[],
        }
    }

    /// Borrows the text inside, if this is one text scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => s.as_text(),
            _ => None,
        }
    }

    /// Trims surrounding whitespace from any text in this value.
    pub fn trimmed(self) -> Self {
        fn trim(s: Scalar) -> Scalar {
            match s {
                Scalar::Text(t) if t.trim().len() != t.len() => Scalar::Text(t.trim().to_owned()),
                other => other,
            }
        }

        match self {
            Value::Scalar(s) => Value::Scalar(trim(s)),
            Value::Sequence(list) => Value::Sequence(list.into_iter().map(trim).collect()),
            other => other,
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Sequence(list) => {
                for (i, s) in list.iter().enumerate() {
                    if i != 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{s}")?;
                }
                Ok(())
            }
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Value::TimeOfDay(td) => {
                let total_ms = td.num_milliseconds();
                let (h, rem) = (total_ms / 3_600_000, total_ms % 3_600_000);
                let (m, rem) = (rem / 60_000, rem % 60_000);
                write!(f, "{h:02}:{m:02}:{:02}.{:03}", rem / 1000, rem % 1000)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::Value;
    use crate::primitives::Scalar;

    #[test]
    fn trimming_reaches_into_sequences() {
        let v = Value::Sequence(vec![Scalar::from(" a "), Scalar::Short(3)]);
        assert_eq!(
            v.trimmed(),
            Value::Sequence(vec![Scalar::from("a"), Scalar::Short(3)])
        );
    }

    #[test]
    fn time_of_day_displays_as_clock() {
        let td = TimeDelta::milliseconds(14 * 3_600_000 + 30 * 60_000 + 5_250);
        assert_eq!(Value::TimeOfDay(td).to_string(), "14:30:05.250");
    }
}
