use crate::core::models::structure::StructureDescription;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Defines the interface for reading a molecular input file.
///
/// Implementors handle format-specific parsing and return the parsed records; no
/// inference happens at this stage.
pub trait MolecularFile {
    /// The parsed representation of the file.
    type Output;

    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads and parses records from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Reads and parses records from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Defines the interface for rendering a structure description.
///
/// Writers carry their own output options, so unlike [`MolecularFile`] the methods
/// take `&self`.
pub trait StructureWriter {
    /// The error type for rendering failures.
    type Error: Error + From<io::Error>;

    /// Writes the description to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the description cannot be rendered or writing fails.
    fn write_to(
        &self,
        description: &StructureDescription,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Renders the description fully in memory.
    ///
    /// Callers that must not leave a partially written file behind render to a string
    /// first and only then touch the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the description cannot be rendered.
    fn write_to_string(&self, description: &StructureDescription) -> Result<String, Self::Error> {
        let mut buffer = Vec::new();
        self.write_to(description, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }
}
