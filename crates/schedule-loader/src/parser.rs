//! Schedule export line parser.
//!
//! Provides the quote-aware comma tokenizer used for schedule exports and a
//! streaming parser over buffered readers.
//!
//! The tokenizer is deliberately narrower than RFC 4180: there are no escaped
//! quotes and no multi-line fields. Each comma ends a field, and so does the
//! closing quote of a quoted field, which means `"a, b",` yields the quoted
//! value followed by an empty field. Text after the last delimiter on a line
//! is not a field. A quote that does not open its field splits the field
//! rather than quoting anything.

use std::io::BufRead;
use std::marker::PhantomData;

use crate::types::{LoadConfig, ScheduleError, ScheduleResult};

/// Trait for types that can be built from the fields of one data line.
pub trait ScheduleRecord: Sized {
    /// Builds a record from tokenized fields.
    ///
    /// `line` is the source line number, used in error reports.
    fn from_fields(fields: &[&str], line: usize) -> ScheduleResult<Self>;
}

/// Splits one line into fields.
///
/// Scans forward to the next comma or double quote. A comma ends the current
/// field. A double quote moves the field start past the first character of
/// the field and ends the field at the next double quote at or after it.
/// For a field that opens with a quote this reads the quoted value without
/// its quotes; a quote later in a field splits it instead.
///
/// # Errors
/// Returns [`ScheduleError::UnterminatedQuote`] when a quoted field has no
/// closing quote. Fields collected before that point are discarded.
pub fn tokenize(line: &str, line_number: usize) -> ScheduleResult<Vec<&str>> {
    let bytes = line.as_bytes();
    let mut fields = Vec::with_capacity(crate::types::SCHEDULE_FIELD_COUNT);
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b',' || b == b'"') {
        let mut idx = pos + offset;

        if bytes[idx] == b'"' {
            pos += line[pos..].chars().next().map_or(1, char::len_utf8);
            idx = match bytes[pos..].iter().position(|&b| b == b'"') {
                Some(close) => pos + close,
                None => {
                    return Err(ScheduleError::UnterminatedQuote {
                        line: line_number,
                        position: pos,
                    })
                }
            };
        }

        // Delimiters are ASCII and `pos` steps whole characters.
        fields.push(&line[pos..idx]);
        pos = idx + 1;
    }

    Ok(fields)
}

/// Tokenizes a line and builds a record from it.
///
/// # Errors
/// Returns a malformed-line error if the line has an unterminated quote,
/// does not split into `config.expected_fields` fields, or the record
/// rejects a field value.
pub fn parse_line<T: ScheduleRecord>(
    line: &str,
    line_number: usize,
    config: &LoadConfig,
) -> ScheduleResult<T> {
    let fields = tokenize(line, line_number)?;

    if fields.len() != config.expected_fields {
        return Err(ScheduleError::FieldCount {
            line: line_number,
            expected: config.expected_fields,
            found: fields.len(),
        });
    }

    T::from_fields(&fields, line_number)
}

/// A streaming parser for schedule exports.
///
/// Reads the source line by line and yields one result per data line.
/// Malformed lines come through as `Err` items and iteration continues
/// after them; an I/O error is yielded once and ends iteration.
pub struct ScheduleParser<R: BufRead, T: ScheduleRecord> {
    reader: R,
    buf: Vec<u8>,
    config: LoadConfig,
    line_number: usize,
    lines_read: usize,
    failed: bool,
    _marker: PhantomData<T>,
}

impl<R: BufRead, T: ScheduleRecord> ScheduleParser<R, T> {
    /// Creates a new parser from a reader.
    ///
    /// Consumes the header line when `config.has_header` is set. The header
    /// is not decoded.
    ///
    /// # Errors
    /// Returns an error if the header cannot be read.
    pub fn from_reader(reader: R, config: LoadConfig) -> ScheduleResult<Self> {
        let mut parser = Self {
            reader,
            buf: Vec::new(),
            config,
            line_number: 0,
            lines_read: 0,
            failed: false,
            _marker: PhantomData,
        };

        if parser.config.has_header && parser.read_raw_line()? {
            parser.line_number = 1;
        }

        Ok(parser)
    }

    /// Returns the number of data lines read so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Reads the next line into `buf` without its line ending.
    ///
    /// Returns false at end of input.
    fn read_raw_line(&mut self) -> std::io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(true)
    }
}

impl<R: BufRead, T: ScheduleRecord> Iterator for ScheduleParser<R, T> {
    type Item = ScheduleResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.read_raw_line() {
            Ok(false) => None,
            Ok(true) => {
                self.line_number += 1;
                self.lines_read += 1;
                Some(match std::str::from_utf8(&self.buf) {
                    Ok(line) => parse_line(line, self.line_number, &self.config),
                    Err(_) => Err(ScheduleError::InvalidEncoding {
                        line: self.line_number,
                    }),
                })
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e.into()))
            }
        }
    }
}

/// Helper functions for parsing field values.
pub mod parse {
    use super::{ScheduleError, ScheduleResult};

    /// Parses a non-negative integer column.
    ///
    /// Surrounding whitespace is ignored.
    pub fn count(value: &str, line: usize, column: usize) -> ScheduleResult<u32> {
        value
            .trim()
            .parse::<u32>()
            .map_err(|_| ScheduleError::InvalidInteger {
                line,
                column,
                value: value.to_string(),
            })
    }
}
