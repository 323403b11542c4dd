//! CSV encoding of transaction records
//!
//! The first row names the three fields, every following row is one
//! transaction. Amounts are written in Rust's shortest round-trip form.

use std::io::{Read, Write};

use ::csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Locale, TransactionKind, TransactionRecord};

/// Write a header row followed by one row per record
pub fn write_records<W: Write>(
    writer: W,
    records: &[TransactionRecord],
    locale: Locale,
) -> LedgerResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    wtr.write_record(locale.field_names().as_array())?;
    for record in records {
        wtr.write_record([
            record.kind_token(locale),
            record.category.as_str(),
            record.amount.to_string().as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Column positions of the three fields, located by header name
struct Columns {
    kind: usize,
    category: usize,
    amount: usize,
}

impl Columns {
    fn locate(headers: &StringRecord, locale: Locale) -> LedgerResult<Self> {
        let fields = locale.field_names();
        let find = |name: &str| {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                LedgerError::InvalidFormat(format!("missing column '{}'", name))
            })
        };

        Ok(Self {
            kind: find(fields.kind)?,
            category: find(fields.category)?,
            amount: find(fields.amount)?,
        })
    }
}

/// Read records from CSV with a header row
///
/// Columns are matched by name, so their order in the file does not matter.
/// An amount that does not parse is `MalformedAmount`; the whole read fails.
/// Input with no header row at all holds no records.
pub fn read_records<R: Read>(reader: R, locale: Locale) -> LedgerResult<Vec<TransactionRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let columns = Columns::locate(&headers, locale)?;

    rdr.records()
        .enumerate()
        .map(|(index, row)| {
            row.map_err(LedgerError::from)
                .and_then(|row| decode_row(&row, &columns, locale))
                .map_err(|e| LedgerError::in_record(index, e))
        })
        .collect()
}

fn decode_row(
    row: &StringRecord,
    columns: &Columns,
    locale: Locale,
) -> LedgerResult<TransactionRecord> {
    let field = move |i: usize| {
        row.get(i)
            .ok_or_else(|| LedgerError::InvalidFormat(format!("row is missing column {}", i + 1)))
    };

    let kind = TransactionKind::parse(field(columns.kind)?, locale)?;
    let category = field(columns.category)?.to_string();
    let amount = parse_amount(field(columns.amount)?)?;

    Ok(TransactionRecord {
        kind,
        category,
        amount,
    })
}

fn parse_amount(value: &str) -> LedgerResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| LedgerError::MalformedAmount {
            value: value.to_string(),
        })
}
