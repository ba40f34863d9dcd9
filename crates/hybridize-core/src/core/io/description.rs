use crate::core::io::traits::StructureWriter;
use crate::core::models::structure::StructureDescription;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Writes a structure description as a TOML document with `[[atoms]]` and `[[bonds]]`
/// tables, for consumers other than the Java structure builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDescription;

impl StructureWriter for TomlDescription {
    type Error = DescriptionError;

    fn write_to(
        &self,
        description: &StructureDescription,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let body = toml::to_string(description)?;
        writeln!(
            writer,
            "# Generated by hybridize {}. Atom indices are zero-based.",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(writer)?;
        writer.write_all(body.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;
    use crate::core::models::hybridization::Hybridization;
    use crate::core::models::structure::{AtomEntry, BondEntry};
    use nalgebra::Point3;

    fn silane_fragment() -> StructureDescription {
        StructureDescription {
            atoms: vec![
                AtomEntry {
                    element: Element::Si,
                    hybridization: Some(Hybridization::Sp3),
                    position: Point3::new(0.0, 0.0, 0.0),
                },
                AtomEntry {
                    element: Element::H,
                    hybridization: None,
                    position: Point3::new(1.5, 0.0, 0.0),
                },
            ],
            bonds: vec![BondEntry::new(0, 1)],
        }
    }

    #[test]
    fn writes_atoms_and_bonds_as_tables() {
        let out = TomlDescription.write_to_string(&silane_fragment()).unwrap();

        assert!(out.starts_with("# Generated by hybridize"));
        assert_eq!(out.matches("[[atoms]]").count(), 2);
        assert_eq!(out.matches("[[bonds]]").count(), 1);
        assert!(out.contains("element = \"Si\""));
        assert!(out.contains("element = \"H\""));
        assert!(out.contains("hybridization = \"SP3\""));
        assert!(out.contains("i = 0"));
        assert!(out.contains("j = 1"));
    }

    #[test]
    fn hydrogen_entries_have_no_hybridization_key() {
        let out = TomlDescription.write_to_string(&silane_fragment()).unwrap();
        assert_eq!(out.matches("hybridization").count(), 1);
    }

    #[test]
    fn output_parses_back_as_toml() {
        let out = TomlDescription.write_to_string(&silane_fragment()).unwrap();
        let value: toml::Table = toml::from_str(&out).unwrap();

        let atoms = value["atoms"].as_array().unwrap();
        assert_eq!(atoms.len(), 2);
        let position = atoms[1]["position"].as_array().unwrap();
        assert_eq!(position[0].as_float(), Some(1.5));
        assert_eq!(value["bonds"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn description_without_bonds_omits_bond_tables() {
        let mut description = silane_fragment();
        description.bonds.clear();
        let out = TomlDescription.write_to_string(&description).unwrap();
        assert!(!out.contains("bonds"));
    }
}
