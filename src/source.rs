use std::io::Read;

use crate::error::{Error, Result};

/// Yields raw email cells one at a time.
///
/// `Ok(None)` signals the end of the input; errors are terminal for the caller.
pub trait EmailSource {
    fn read_email(&mut self) -> Result<Option<String>>;
}

impl<S: EmailSource + ?Sized> EmailSource for &mut S {
    fn read_email(&mut self) -> Result<Option<String>> {
        (**self).read_email()
    }
}

impl<S: EmailSource + ?Sized> EmailSource for Box<S> {
    fn read_email(&mut self) -> Result<Option<String>> {
        (**self).read_email()
    }
}

/// Reads the email column out of a CSV stream, one record per call.
///
/// Records are kept as raw bytes; only the email cell is decoded, so stray
/// non-UTF-8 bytes elsewhere in a row never abort the read.
pub struct CsvEmailSource<R> {
    reader: csv::Reader<R>,
    record: csv::ByteRecord,
    email_column: usize,
}

impl<R: Read> CsvEmailSource<R> {
    /// Consumes the header row and locates `column` in it.
    ///
    /// If the header repeats the column name, the last occurrence is used.
    pub fn new(reader: R, column: &str) -> Result<Self> {
        // Header is read by hand so the reader keeps enforcing its field count
        // on every following record.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);

        let mut header = csv::ByteRecord::new();
        if !reader.read_byte_record(&mut header)? {
            return Err(Error::EndOfInput);
        }

        let email_column = header
            .iter()
            .enumerate()
            .filter(|(_, field)| *field == column.as_bytes())
            .map(|(index, _)| index)
            .last()
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;

        Ok(Self {
            reader,
            record: csv::ByteRecord::new(),
            email_column,
        })
    }

    pub fn email_column(&self) -> usize {
        self.email_column
    }
}

impl<R: Read> EmailSource for CsvEmailSource<R> {
    fn read_email(&mut self) -> Result<Option<String>> {
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(None);
        }
        // Field count is checked against the header by the reader. A cell that
        // is not UTF-8 comes back with replacement chars and fails validation.
        Ok(self
            .record
            .get(self.email_column)
            .map(|cell| String::from_utf8_lossy(cell).into_owned()))
    }
}

/// In-memory source, mostly useful for tests.
#[derive(Debug, Default)]
pub struct MemoryEmailSource {
    emails: std::vec::IntoIter<String>,
}

impl MemoryEmailSource {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl EmailSource for MemoryEmailSource {
    fn read_email(&mut self) -> Result<Option<String>> {
        Ok(self.emails.next())
    }
}
