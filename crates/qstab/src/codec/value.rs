//! Typed-value encoding into line-format literals.

use crate::codec::quote::quote_into;
use crate::model::{Calendar, SnakValue, Value};

/// Unit URIs in the entity namespace render as `U` + numeric id.
/// Any other unit is omitted.
const ENTITY_UNIT_PREFIX: &str = "http://www.wikidata.org/entity/Q";

/// Appends the literal for one snak value.
///
/// Returns false when the snak cannot render at all, in which case nothing
/// was appended and the caller must drop the snak's whole scope (statement,
/// qualifier, or reference snak).
pub fn encode_snak(snak: &SnakValue, out: &mut String) -> bool {
    match snak {
        SnakValue::Value(value) => {
            encode_value(value, out);
            true
        }
        SnakValue::SomeValue => {
            out.push_str("somevalue");
            true
        }
        SnakValue::NoValue => {
            out.push_str("novalue");
            true
        }
        SnakValue::Unsupported => false,
    }
}

/// Appends the literal for one concrete value.
///
/// Infallible: every [`Value`] variant has a defined encoding.
pub fn encode_value(value: &Value, out: &mut String) {
    match value {
        Value::Item(id) => out.push_str(id),

        Value::Text(text) => quote_into(text, out),

        Value::Quantity {
            amount,
            lower_bound,
            upper_bound,
            unit,
        } => {
            out.push_str(amount);
            if let (Some(lower), Some(upper)) = (lower_bound, upper_bound) {
                out.push('[');
                out.push_str(lower);
                out.push(',');
                out.push_str(upper);
                out.push(']');
            }
            if let Some(number) = unit
                .as_deref()
                .and_then(|u| u.strip_prefix(ENTITY_UNIT_PREFIX))
            {
                out.push('U');
                out.push_str(number);
            }
        }

        Value::Time {
            timestamp,
            precision,
            calendar,
        } => {
            // Years <= 0 render unsigned; the format never writes a minus.
            if timestamp.year > 0 {
                out.push('+');
            }
            out.push_str(&format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                timestamp.year.unsigned_abs(),
                timestamp.month,
                timestamp.day,
                timestamp.hour,
                timestamp.minute,
                timestamp.second,
            ));
            out.push('/');
            out.push_str(&format!("{precision}"));
            if *calendar == Calendar::Julian {
                out.push_str("/J");
            }
        }

        Value::Coordinate {
            latitude,
            longitude,
        } => {
            out.push('@');
            out.push_str(&format!("{latitude:.7}"));
            out.push('/');
            out.push_str(&format!("{longitude:.7}"));
        }

        Value::Monolingual { language, text } => {
            out.push_str(language);
            out.push(':');
            quote_into(text, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Timestamp;

    use super::*;

    fn render(value: Value) -> String {
        let mut out = String::new();
        encode_value(&value, &mut out);
        out
    }

    #[test]
    fn test_item() {
        assert_eq!(render(Value::Item("Q42".to_string())), "Q42");
    }

    #[test]
    fn test_text_is_quoted() {
        assert_eq!(render(Value::Text("Douglas Adams".to_string())), "\"Douglas Adams\"");
        assert_eq!(
            render(Value::Text("say \"hi\"".to_string())),
            "\"say \\u0022hi\\u0022\""
        );
    }

    #[test]
    fn test_quantity_plain() {
        let value = Value::Quantity {
            amount: "+42".to_string(),
            lower_bound: None,
            upper_bound: None,
            unit: None,
        };
        assert_eq!(render(value), "+42");
    }

    #[test]
    fn test_quantity_bounds() {
        let value = Value::Quantity {
            amount: "2".to_string(),
            lower_bound: Some("1".to_string()),
            upper_bound: Some("3".to_string()),
            unit: None,
        };
        assert_eq!(render(value), "2[1,3]");
    }

    #[test]
    fn test_quantity_single_bound_is_omitted() {
        let value = Value::Quantity {
            amount: "2".to_string(),
            lower_bound: Some("1".to_string()),
            upper_bound: None,
            unit: None,
        };
        assert_eq!(render(value), "2");
    }

    #[test]
    fn test_quantity_entity_unit() {
        let value = Value::Quantity {
            amount: "90".to_string(),
            lower_bound: None,
            upper_bound: None,
            unit: Some("http://www.wikidata.org/entity/Q11573".to_string()),
        };
        assert_eq!(render(value), "90U11573");
    }

    #[test]
    fn test_quantity_foreign_unit_is_omitted() {
        let value = Value::Quantity {
            amount: "90".to_string(),
            lower_bound: None,
            upper_bound: None,
            unit: Some("http://example.org/unit/metre".to_string()),
        };
        assert_eq!(render(value), "90");
    }

    #[test]
    fn test_time_gregorian() {
        let value = Value::Time {
            timestamp: Timestamp::date(1000, 1, 1),
            precision: 9,
            calendar: Calendar::Gregorian,
        };
        assert_eq!(render(value), "+1000-01-01T00:00:00Z/9");
    }

    #[test]
    fn test_time_julian() {
        let value = Value::Time {
            timestamp: Timestamp::date(1000, 1, 1),
            precision: 9,
            calendar: Calendar::Julian,
        };
        assert_eq!(render(value), "+1000-01-01T00:00:00Z/9/J");
    }

    #[test]
    fn test_time_nonpositive_year_has_no_sign() {
        let value = Value::Time {
            timestamp: Timestamp::date(0, 1, 1),
            precision: 9,
            calendar: Calendar::Gregorian,
        };
        assert_eq!(render(value), "0000-01-01T00:00:00Z/9");

        let value = Value::Time {
            timestamp: Timestamp::date(-44, 3, 15),
            precision: 11,
            calendar: Calendar::Julian,
        };
        assert_eq!(render(value), "0044-03-15T00:00:00Z/11/J");
    }

    #[test]
    fn test_coordinate() {
        let value = Value::Coordinate {
            latitude: 47.3686498,
            longitude: 8.5391825,
        };
        assert_eq!(render(value), "@47.3686498/8.5391825");
    }

    #[test]
    fn test_coordinate_pads_to_seven_decimals() {
        let value = Value::Coordinate {
            latitude: -33.5,
            longitude: 151.0,
        };
        assert_eq!(render(value), "@-33.5000000/151.0000000");
    }

    #[test]
    fn test_monolingual() {
        let value = Value::Monolingual {
            language: "en".to_string(),
            text: "Hello".to_string(),
        };
        assert_eq!(render(value), "en:\"Hello\"");
    }

    #[test]
    fn test_snak_kinds() {
        let mut out = String::new();
        assert!(encode_snak(&SnakValue::SomeValue, &mut out));
        assert_eq!(out, "somevalue");

        let mut out = String::new();
        assert!(encode_snak(&SnakValue::NoValue, &mut out));
        assert_eq!(out, "novalue");

        let mut out = String::new();
        assert!(!encode_snak(&SnakValue::Unsupported, &mut out));
        assert!(out.is_empty());

        let mut out = String::new();
        assert!(encode_snak(
            &SnakValue::Value(Value::Item("Q5".to_string())),
            &mut out
        ));
        assert_eq!(out, "Q5");
    }
}
