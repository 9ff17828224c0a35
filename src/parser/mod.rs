//! Quote-aware CSV parser with encoding auto-detection.
//!
//! Converts CSV rows into JSON objects keyed by header name. No career-data
//! specific logic here; field mapping lives in [`crate::transform`].
//!
//! The scanner is a single character-level state machine over the whole
//! input, so a quoted field may contain commas, doubled-quote escapes and
//! newlines, and all of them round-trip through
//! [`crate::serializer::to_csv`].

use serde_json::{json, Map, Value};
use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// A data row that was dropped because its field count did not match the
/// header. Rows are numbered 1-based with the header as row 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Row {} dropped: {} fields, expected {}",
            self.row, self.found, self.expected
        )
    }
}

/// Result of parsing with metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records as JSON objects, one entry per header column.
    pub records: Vec<Value>,
    /// Column headers, trimmed of surrounding whitespace.
    pub headers: Vec<String>,
    /// Data rows dropped because of a field-count mismatch.
    pub skipped: Vec<SkippedRow>,
    /// Detected or assumed encoding.
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        // UTF-8, ASCII and anything unrecognized: lossy UTF-8
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// One raw record: its fields and the unparsed text it was scanned from.
struct RawRecord {
    fields: Vec<String>,
    raw: String,
}

/// Split input into records with a quote-aware scanner.
///
/// - `"` toggles inside-quotes mode, unless already inside quotes and
///   immediately followed by another `"`, which emits a literal `"`.
/// - `,` outside quotes terminates the field; inside quotes it is content.
/// - LF or CRLF outside quotes terminates the record; inside quotes it is
///   content. A lone CR is content either way.
fn split_records(content: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut raw = String::new();
    let mut inside_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                raw.push(c);
                if inside_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote
                    field.push('"');
                    raw.push('"');
                    chars.next();
                } else {
                    inside_quotes = !inside_quotes;
                }
            }
            ',' if !inside_quotes => {
                raw.push(c);
                fields.push(std::mem::take(&mut field));
            }
            '\r' if !inside_quotes && chars.peek() == Some(&'\n') => {
                chars.next();
                fields.push(std::mem::take(&mut field));
                records.push(RawRecord {
                    fields: std::mem::take(&mut fields),
                    raw: std::mem::take(&mut raw),
                });
            }
            '\n' if !inside_quotes => {
                fields.push(std::mem::take(&mut field));
                records.push(RawRecord {
                    fields: std::mem::take(&mut fields),
                    raw: std::mem::take(&mut raw),
                });
            }
            _ => {
                raw.push(c);
                field.push(c);
            }
        }
    }

    // Final record, unless the input ended on a record terminator
    if !raw.trim().is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push(RawRecord { fields, raw });
    }

    // Blank records carry no data
    records.retain(|r| !r.raw.trim().is_empty());
    records
}

/// Parse CSV text into JSON objects.
///
/// The first non-blank record is the header; header names are trimmed.
/// Data field values are taken verbatim. A data row whose field count does
/// not match the header is excluded from `records` and reported in
/// `skipped` instead.
///
/// # Example
/// ```ignore
/// use careersync::parse_csv;
///
/// let result = parse_csv("id,label\nrn,Registered Nurse").unwrap();
/// assert_eq!(result.records.len(), 1);
/// assert_eq!(result.records[0]["label"], "Registered Nurse");
/// ```
pub fn parse_csv(content: &str) -> CsvResult<ParseResult> {
    parse_with_encoding(content, "utf-8".to_string())
}

/// Parse CSV bytes, auto-detecting the encoding first.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    parse_with_encoding(&content, encoding)
}

/// Parse a CSV file with encoding auto-detection.
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes)
}

fn parse_with_encoding(content: &str, encoding: String) -> CsvResult<ParseResult> {
    let mut raw_records = split_records(content).into_iter();

    let header_record = raw_records.next().ok_or(CsvError::EmptyInput)?;
    let headers: Vec<String> = header_record
        .fields
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (i, record) in raw_records.enumerate() {
        let row = i + 2; // header is row 1

        if record.fields.len() != headers.len() {
            skipped.push(SkippedRow {
                row,
                expected: headers.len(),
                found: record.fields.len(),
            });
            continue;
        }

        let mut obj = Map::new();
        for (header, value) in headers.iter().zip(record.fields) {
            obj.insert(header.clone(), json!(value));
        }
        records.push(Value::Object(obj));
    }

    Ok(ParseResult {
        records,
        headers,
        skipped,
        encoding,
    })
}
