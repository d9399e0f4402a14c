use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::coerce::{coerce_numeric, is_missing_token, is_numeric_column, normalize_column_name};
use crate::error::DatasetError;
use crate::table::{Row, Table};
use crate::value::CellValue;
use crate::NAME_COLUMN;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load and preprocess a ranking table from a CSV file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Table, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
        _ => DatasetError::Io(err),
    })?;

    let table = load_from_reader(file)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "dataset loaded"
    );
    Ok(table)
}

/// Load and preprocess a ranking table from any CSV byte stream.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Table, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let raw_headers = reader.byte_headers()?.clone();
    if raw_headers.is_empty() {
        return Err(DatasetError::Empty);
    }

    let columns: Vec<String> = raw_headers
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let field = if idx == 0 {
                field.strip_prefix(UTF8_BOM).unwrap_or(field)
            } else {
                field
            };
            normalize_column_name(&decode_latin1(field))
        })
        .collect();

    let name_idx = columns
        .iter()
        .position(|c| c == NAME_COLUMN)
        .ok_or_else(|| DatasetError::MissingColumn(NAME_COLUMN.to_string()))?;
    let numeric: Vec<bool> = columns.iter().map(|c| is_numeric_column(c)).collect();

    let mut records: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        records.push(
            (0..columns.len())
                .map(|idx| {
                    let raw = record.get(idx).map(decode_latin1);
                    preprocess_cell(raw, idx == name_idx, numeric[idx])
                })
                .collect(),
        );
    }
    unify_numeric_columns(&mut records, &numeric);

    let rows: Vec<Row> = records
        .into_iter()
        .map(|cells| {
            let name = cells[name_idx].as_text().unwrap_or_default().to_string();
            Row::new(name, cells)
        })
        .collect();

    tracing::debug!(rows = rows.len(), "dataset preprocessed");
    Ok(Table::new(columns, rows))
}

fn preprocess_cell(raw: Option<String>, is_name: bool, is_numeric: bool) -> CellValue {
    match raw {
        _ if is_name => CellValue::Text(raw.as_deref().unwrap_or_default().trim().to_string()),
        None => CellValue::Missing,
        Some(raw) if is_numeric => coerce_numeric(&raw).into(),
        Some(raw) if is_missing_token(&raw) => CellValue::Missing,
        Some(raw) => CellValue::Text(raw),
    }
}

/// A numeric column with any float or missing cell is a float column: its
/// integer cells are widened so every value in it has the same type.
fn unify_numeric_columns(records: &mut [Vec<CellValue>], numeric: &[bool]) {
    for idx in (0..numeric.len()).filter(|&idx| numeric[idx]) {
        let widen = records
            .iter()
            .any(|cells| cells[idx].is_missing() || matches!(cells[idx], CellValue::Float(_)));
        if !widen {
            continue;
        }
        for cells in records.iter_mut() {
            if let CellValue::Int(i) = cells[idx] {
                cells[idx] = CellValue::Float(i as f64);
            }
        }
    }
}

/// Decode ISO-8859-1 bytes. Every byte maps to the code point of the same
/// value, so decoding cannot fail.
///
/// ```rust
/// use dataset::decode_latin1;
///
/// assert_eq!(decode_latin1(b"Universit\xE9 Laval"), "Université Laval");
/// ```
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
