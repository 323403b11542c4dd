//! JSON encoding of transaction records
//!
//! A ledger file is a JSON array with one object per transaction. Each
//! object carries the locale's three field names in record order.

use std::fmt;
use std::io::{Read, Write};

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{ser::PrettyFormatter, Map, Number, Serializer, Value};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Locale, TransactionKind, TransactionRecord};

const INDENT: &[u8] = b"    ";

/// Write records as a pretty-printed JSON array
pub fn write_records<W: Write>(
    writer: W,
    records: &[TransactionRecord],
    locale: Locale,
) -> LedgerResult<()> {
    let fields = locale.field_names();

    let mut array = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let amount = Number::from_f64(record.amount).ok_or_else(|| {
            LedgerError::in_record(
                index,
                LedgerError::NonFiniteAmount {
                    amount: record.amount,
                },
            )
        })?;

        let mut object = Map::new();
        object.insert(fields.kind.to_string(), Value::from(record.kind_token(locale)));
        object.insert(fields.category.to_string(), Value::from(record.category.as_str()));
        object.insert(fields.amount.to_string(), Value::Number(amount));
        array.push(Value::Object(object));
    }

    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    Value::Array(array).serialize(&mut serializer)?;

    Ok(())
}

/// Top-level document: an array of items, or anything else
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Array(Vec<Item>),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// One array element: an object, or anything else
#[derive(Deserialize)]
#[serde(untagged)]
enum Item {
    Object(Fields),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// Object entries in source order, duplicates included
struct Fields(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Fields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Fields, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(Fields(entries))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

impl Fields {
    fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }
}

/// Read records from a JSON array
///
/// Fails on the first record that is missing a field, has a wrongly typed
/// value, repeats or adds a key, or uses an unknown kind token.
pub fn read_records<R: Read>(reader: R, locale: Locale) -> LedgerResult<Vec<TransactionRecord>> {
    let Document::Array(items) = serde_json::from_reader::<_, Document>(reader)? else {
        return Err(LedgerError::InvalidFormat(
            "expected a JSON array of transactions".into(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            decode_record(item, locale).map_err(|e| LedgerError::in_record(index, e))
        })
        .collect()
}

fn decode_record(item: Item, locale: Locale) -> LedgerResult<TransactionRecord> {
    let fields = locale.field_names();

    let Item::Object(object) = item else {
        return Err(LedgerError::InvalidFormat(
            "expected a transaction object".into(),
        ));
    };

    for (position, (key, _)) in object.0.iter().enumerate() {
        if !fields.as_array().contains(&key.as_str()) {
            return Err(LedgerError::InvalidFormat(format!(
                "unexpected field '{}'",
                key
            )));
        }
        if object.0[..position].iter().any(|(seen, _)| seen == key) {
            return Err(LedgerError::InvalidFormat(format!(
                "duplicate field '{}'",
                key
            )));
        }
    }

    let kind = string_field(&object, fields.kind)?;
    let kind = TransactionKind::parse(kind, locale)?;
    let category = string_field(&object, fields.category)?.to_string();
    let amount = object
        .get(fields.amount)
        .ok_or_else(|| missing_field(fields.amount))?
        .as_f64()
        .ok_or_else(|| {
            LedgerError::InvalidFormat(format!("field '{}' must be a number", fields.amount))
        })?;

    Ok(TransactionRecord {
        kind,
        category,
        amount,
    })
}

fn string_field<'a>(object: &'a Fields, name: &str) -> LedgerResult<&'a str> {
    object
        .get(name)
        .ok_or_else(|| missing_field(name))?
        .as_str()
        .ok_or_else(|| LedgerError::InvalidFormat(format!("field '{}' must be a string", name)))
}

fn missing_field(name: &str) -> LedgerError {
    LedgerError::InvalidFormat(format!("missing field '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: TransactionKind, category: &str, amount: f64) -> TransactionRecord {
        TransactionRecord {
            kind,
            category: category.to_string(),
            amount,
        }
    }

    fn encode(records: &[TransactionRecord], locale: Locale) -> String {
        let mut out = Vec::new();
        write_records(&mut out, records, locale).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_field_order_and_indent() {
        let json = encode(
            &[record(TransactionKind::Income, "salary", 2500.0)],
            Locale::English,
        );
        let expected = concat!(
            "[\n",
            "    {\n",
            "        \"type\": \"income\",\n",
            "        \"category\": \"salary\",\n",
            "        \"amount\": 2500.0\n",
            "    }\n",
            "]"
        );
        assert_eq!(json, expected);
    }

    #[test]
    fn test_spanish_field_names() {
        let json = encode(
            &[record(TransactionKind::Expense, "transporte", 150.0)],
            Locale::Spanish,
        );
        assert!(json.contains("\"tipo\": \"gasto\""));
        assert!(json.contains("\"categoria\": \"transporte\""));
        assert!(json.contains("\"monto\": 150.0"));
    }

    #[test]
    fn test_empty_array() {
        let json = encode(&[], Locale::English);
        assert_eq!(json, "[]");
        let records = read_records(json.as_bytes(), Locale::English).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_reads_integer_amounts() {
        let json = r#"[{"type": "expense", "category": "food", "amount": 300}]"#;
        let records = read_records(json.as_bytes(), Locale::English).unwrap();
        assert_eq!(records, vec![record(TransactionKind::Expense, "food", 300.0)]);
    }

    #[test]
    fn test_key_order_irrelevant_on_read() {
        let json = r#"[{"amount": 1.25, "category": "tea", "type": "expense"}]"#;
        let records = read_records(json.as_bytes(), Locale::English).unwrap();
        assert_eq!(records[0].amount, 1.25);
    }

    #[test]
    fn test_rejects_non_array() {
        let err = read_records(r#"{"type": "income"}"#.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidFormat(_)));
    }

    #[test]
    fn test_rejects_unparseable_text() {
        let err = read_records("[{".as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err, LedgerError::Json(_)));
        assert!(err.is_io_failure());
    }

    #[test]
    fn test_missing_field_reports_record() {
        let json = r#"[
            {"type": "income", "category": "salary", "amount": 10},
            {"type": "expense", "amount": 5}
        ]"#;
        let err = read_records(json.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err, LedgerError::Record { index: 1, .. }));
        assert!(matches!(err.root(), LedgerError::InvalidFormat(m) if m.contains("category")));
    }

    #[test]
    fn test_wrongly_typed_amount() {
        let json = r#"[{"type": "income", "category": "salary", "amount": "10"}]"#;
        let err = read_records(json.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err.root(), LedgerError::InvalidFormat(_)));
    }

    #[test]
    fn test_extra_field_rejected() {
        let json = r#"[{"type": "income", "category": "salary", "amount": 10, "date": "x"}]"#;
        let err = read_records(json.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err.root(), LedgerError::InvalidFormat(m) if m.contains("date")));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let json = r#"[{"type": "income", "type": "expense", "category": "salary", "amount": 10}]"#;
        let err = read_records(json.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err, LedgerError::Record { index: 0, .. }));
        assert!(matches!(
            err.root(),
            LedgerError::InvalidFormat(m) if m.contains("duplicate field 'type'")
        ));
    }

    #[test]
    fn test_non_object_item_rejected() {
        let err = read_records(r#"[42]"#.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err.root(), LedgerError::InvalidFormat(_)));
    }

    #[test]
    fn test_unknown_kind() {
        let json = r#"[{"type": "Income", "category": "salary", "amount": 10}]"#;
        let err = read_records(json.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(
            err.root(),
            LedgerError::InvalidTransactionKind { kind, .. } if kind == "Income"
        ));
    }

    #[test]
    fn test_other_locale_fields_are_rejected() {
        let json = encode(
            &[record(TransactionKind::Income, "salario", 2500.0)],
            Locale::Spanish,
        );
        let err = read_records(json.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err.root(), LedgerError::InvalidFormat(_)));
    }
}
