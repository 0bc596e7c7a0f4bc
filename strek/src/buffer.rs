//! Growable output buffers with chunked, fallible allocation.
//!
//! Both serializers accumulate their output here. Capacity is always
//! requested in whole multiples of [`CHUNK_SIZE`] bytes. A reservation
//! that cannot be satisfied is reported as [`Error::AllocationFailure`].

use core::fmt;

use crate::{Error, Result};

/// Granularity, in bytes, of every capacity increase.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Returns the capacity, in records, needed to hold `len + additional`
/// records of `record_size` bytes, rounded up to whole chunks.
fn chunked_capacity(len: usize, additional: usize, record_size: usize) -> Option<usize> {
    let record_size = record_size.max(1);
    let required = len.checked_add(additional)?.checked_mul(record_size)?;
    let rounded = required.checked_next_multiple_of(CHUNK_SIZE)?;
    Some(rounded / record_size)
}

/// Buffer of fixed size records.
#[derive(Clone, Debug)]
pub struct RecordBuffer<T> {
    records: Vec<T>,
}

impl<T> RecordBuffer<T> {
    /// Creates an empty buffer. No memory is allocated until the first
    /// record is pushed.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Makes room for at least `additional` more records.
    pub fn ensure(&mut self, additional: usize) -> Result<()> {
        let len = self.records.len();
        if self.records.capacity() - len >= additional {
            return Ok(());
        }
        let capacity = chunked_capacity(len, additional, core::mem::size_of::<T>())
            .ok_or(Error::AllocationFailure)?;
        self.records
            .try_reserve_exact(capacity - len)
            .map_err(|_| Error::AllocationFailure)
    }

    /// Appends a single record.
    pub fn push(&mut self, record: T) -> Result<()> {
        self.ensure(1)?;
        self.records.push(record);
        Ok(())
    }

    /// Appends all records in the given slice.
    pub fn extend_from_slice(&mut self, records: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.ensure(records.len())?;
        self.records.extend_from_slice(records);
        Ok(())
    }

    /// Returns the number of records in the buffer.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records the buffer can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Hands the accumulated records to the caller.
    pub fn into_vec(self) -> Vec<T> {
        self.records
    }
}

impl<T> Default for RecordBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffer of UTF-8 text.
#[derive(Clone, Default, Debug)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Makes room for at least `additional` more bytes.
    pub fn ensure(&mut self, additional: usize) -> Result<()> {
        let len = self.text.len();
        if self.text.capacity() - len >= additional {
            return Ok(());
        }
        let capacity = chunked_capacity(len, additional, 1).ok_or(Error::AllocationFailure)?;
        self.text
            .try_reserve_exact(capacity - len)
            .map_err(|_| Error::AllocationFailure)
    }

    /// Appends a string.
    pub fn push_str(&mut self, s: &str) -> Result<()> {
        self.ensure(s.len())?;
        self.text.push_str(s);
        Ok(())
    }

    /// Returns the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if no text has been written.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the number of bytes the buffer can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }

    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Hands the accumulated text to the caller.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map_err(|_| fmt::Error)
    }
}
