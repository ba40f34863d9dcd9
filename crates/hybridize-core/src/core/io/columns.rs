//! Fixed-width column decoding.
//!
//! Column ranges are given as 0-based, end-exclusive byte offsets and reported to users
//! as 1-based inclusive columns, the way PDB documentation numbers them. Decoding never
//! indexes out of range: a line that is too short is an error, not a panic.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("Line is too short for {name} in columns {columns} (line length: {length})")]
    LineTooShort {
        name: &'static str,
        columns: String,
        length: usize,
    },
    #[error("Columns {columns} for {name} split a multi-byte character")]
    NotCharBoundary {
        name: &'static str,
        columns: String,
    },
    #[error("Invalid {name} in columns {columns} (value: '{value}')")]
    InvalidValue {
        name: &'static str,
        columns: String,
        value: String,
    },
}

/// A named fixed-width field occupying `start..end` of a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthField {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

impl FixedWidthField {
    pub const fn new(name: &'static str, start: usize, end: usize) -> Self {
        Self { name, start, end }
    }

    /// The 1-based inclusive column range, e.g. `"8-11"`.
    pub fn columns(&self) -> String {
        format!("{}-{}", self.start + 1, self.end)
    }

    /// Returns the raw, untrimmed field text.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError::LineTooShort`] if the line ends before the field does, or
    /// [`ColumnError::NotCharBoundary`] if the range cuts through a multi-byte character.
    pub fn slice<'a>(&self, line: &'a str) -> Result<&'a str, ColumnError> {
        if line.len() < self.end {
            return Err(ColumnError::LineTooShort {
                name: self.name,
                columns: self.columns(),
                length: line.len(),
            });
        }
        line.get(self.start..self.end)
            .ok_or_else(|| ColumnError::NotCharBoundary {
                name: self.name,
                columns: self.columns(),
            })
    }

    /// Decodes the trimmed field text as `T`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`slice`](Self::slice), or [`ColumnError::InvalidValue`] if
    /// the text does not parse.
    pub fn parse<T: FromStr>(&self, line: &str) -> Result<T, ColumnError> {
        let raw = self.slice(line)?.trim();
        raw.parse().map_err(|_| ColumnError::InvalidValue {
            name: self.name,
            columns: self.columns(),
            value: raw.to_string(),
        })
    }

    /// Returns everything after the field.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`slice`](Self::slice).
    pub fn remainder<'a>(&self, line: &'a str) -> Result<&'a str, ColumnError> {
        self.slice(line)?;
        line.get(self.end..).ok_or_else(|| ColumnError::NotCharBoundary {
            name: self.name,
            columns: self.columns(),
        })
    }
}
