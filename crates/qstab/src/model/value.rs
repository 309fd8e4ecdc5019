//! Typed values carried by snaks.
//!
//! One constructor per supported datatype: a value that exists is always
//! renderable, so the type/datatype mismatch checks of a dynamically tagged
//! representation collapse into the input-validation boundary (see
//! [`SnakValue::Unsupported`](crate::model::SnakValue)).

/// Calendar model of a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    Gregorian,
    Julian,
}

/// A calendar instant, split into components.
///
/// `year` is signed and proleptic; the line format never writes a minus
/// sign, so years <= 0 render as their absolute value with no sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Timestamp {
    /// Creates a timestamp at midnight on the given date.
    pub fn date(year: i64, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

/// A typed value attached to a snak.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Reference to another entity, e.g. `Q42`. Rendered as the raw id.
    Item(String),

    /// Plain text. Covers the string, external-id, commons-media and URL
    /// datatypes, which share one quoted encoding.
    Text(String),

    /// Arbitrary-precision decimal amount with optional bounds and unit.
    Quantity {
        /// Canonical decimal string, e.g. `+2` or `-1.5`.
        amount: String,
        /// Lower bound; rendered only together with `upper_bound`.
        lower_bound: Option<String>,
        /// Upper bound; rendered only together with `lower_bound`.
        upper_bound: Option<String>,
        /// Unit URI. Only units in the entity namespace render (as `U<n>`).
        unit: Option<String>,
    },

    /// Calendar instant with precision (0-14) and calendar model.
    Time {
        timestamp: Timestamp,
        precision: u8,
        calendar: Calendar,
    },

    /// WGS84 globe coordinate.
    Coordinate { latitude: f64, longitude: f64 },

    /// Text in a single named language.
    Monolingual { language: String, text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_date() {
        let ts = Timestamp::date(1969, 7, 20);
        assert_eq!(ts.year, 1969);
        assert_eq!(ts.month, 7);
        assert_eq!(ts.day, 20);
        assert_eq!((ts.hour, ts.minute, ts.second), (0, 0, 0));
    }
}
