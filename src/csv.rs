// src/csv.rs
//
// Record parser for the Notion "Day N" export.
//
// Quoted fields may carry commas, doubled quotes and newlines, so one logical
// row can span several physical lines. Malformed quoting is tolerated: an
// unterminated quoted field at end of input keeps whatever was collected
// (unless `ParseOptions::strict` is set). Comma only; no BOM handling.

use std::mem::take;
use std::rc::Rc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::consts::COL_NAME;
use crate::day::is_day_name;
use crate::error::{Error, Result};

/* ---------------- Records ---------------- */

/// One logical CSV row keyed by the header row. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    headers: Rc<[String]>,
    values: Vec<String>,
}

impl Record {
    /// Value under `key`. With repeated header names the last column wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .rposition(|h| h == key)
            .map(|ix| self.values[ix].as_str())
    }

    /// Like `get`, but treats an empty value as missing.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on a quoted field that never closes instead of keeping the partial value.
    pub strict: bool,
}

/* ---------------- Parsing ---------------- */

/// Parse the export and keep only the `Day N` rows, in file order.
pub fn parse_records(text: &str, opts: ParseOptions) -> Result<Vec<Record>> {
    let rows = parse_rows(text, opts)?;
    let total = rows.len();
    let kept: Vec<Record> = rows.into_iter().filter(is_retained).collect();
    logd!(rows = total, kept = kept.len(), "parsed csv");
    Ok(kept)
}

/// Retention rule: the name column reads exactly `Day <digits>`.
pub fn is_retained(record: &Record) -> bool {
    record.get(COL_NAME).is_some_and(is_day_name)
}

/// Parse every data row, unfiltered.
pub fn parse_rows(text: &str, opts: ParseOptions) -> Result<Vec<Record>> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let header_line = match lines.first() {
        Some(l) if !l.trim().is_empty() => *l,
        _ => return Err(Error::EmptyInput),
    };
    let headers: Rc<[String]> = split_line(header_line).into();

    let mut rows = Vec::new();
    let mut i = 1;
    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }

        let mut cursor = RowCursor { lines: &lines, line: i, rest: lines[i] };
        let mut values = Vec::with_capacity(headers.len());
        for _ in 0..headers.len() {
            values.push(cursor.next_field(opts)?);
        }

        rows.push(Record { headers: Rc::clone(&headers), values });
        i = cursor.line + 1;
    }

    Ok(rows)
}

/// Quote-aware split of one complete physical line. Used for the header row;
/// it does not follow fields onto the next line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => fields.push(take(&mut field).trim().to_string()),
            _ => field.push(ch),
        }
    }

    fields.push(field.trim().to_string());
    fields
}

/// Unconsumed text of the row being built. `line` is the physical line
/// `rest` belongs to; it moves forward when a quoted field crosses a newline.
struct RowCursor<'a> {
    lines: &'a [&'a str],
    line: usize,
    rest: &'a str,
}

impl<'a> RowCursor<'a> {
    fn next_field(&mut self, opts: ParseOptions) -> Result<String> {
        match self.rest.strip_prefix('"') {
            Some(after) => {
                self.rest = after;
                self.quoted(opts)
            }
            None => Ok(self.unquoted()),
        }
    }

    fn unquoted(&mut self) -> String {
        match self.rest.find(',') {
            Some(ix) => {
                let value = self.rest[..ix].trim().to_string();
                self.rest = &self.rest[ix + 1..];
                value
            }
            None => {
                let value = self.rest.trim().to_string();
                self.rest = "";
                value
            }
        }
    }

    fn quoted(&mut self, opts: ParseOptions) -> Result<String> {
        let start = self.line;
        let mut value = s!();

        loop {
            let Some(ix) = self.rest.find('"') else {
                value.push_str(self.rest);
                value.push('\n');
                if self.line + 1 >= self.lines.len() {
                    if opts.strict {
                        return Err(Error::UnterminatedQuote { line: start + 1 });
                    }
                    logw!(line = start + 1, "unterminated quoted field; keeping partial value");
                    self.rest = "";
                    break;
                }
                self.line += 1;
                self.rest = self.lines[self.line];
                continue;
            };

            value.push_str(&self.rest[..ix]);
            self.rest = &self.rest[ix + 1..];

            if let Some(after) = self.rest.strip_prefix(',') {
                self.rest = after;
                break;
            }
            if self.rest.trim().is_empty() {
                break;
            }
            if let Some(after) = self.rest.strip_prefix('"') {
                value.push('"');
                self.rest = after;
            }
            // Anything else after a quote is kept and scanning goes on.
        }

        if self.line == start {
            Ok(value.trim().to_string())
        } else {
            Ok(value)
        }
    }
}
