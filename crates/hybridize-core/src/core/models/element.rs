use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The chemical elements the importer understands.
///
/// The set is closed: every element that can appear in a supported coordinate file
/// has a row in the hybridization table, and every other symbol is rejected while
/// parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Element {
    C,
    F,
    H,
    N,
    O,
    S,
    Si,
}

/// Raw symbol tokens accepted in coordinate records.
///
/// Files spell silicon in upper case, so `SI` is accepted alongside `Si`.
static SYMBOL_TOKENS: Map<&'static str, Element> = phf_map! {
    "C" => Element::C,
    "F" => Element::F,
    "H" => Element::H,
    "N" => Element::N,
    "O" => Element::O,
    "S" => Element::S,
    "Si" => Element::Si,
    "SI" => Element::Si,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported element symbol: '{0}'")]
pub struct ParseElementError(pub String);

impl Element {
    /// Every supported element, in Hill order (carbon, hydrogen, then alphabetical).
    pub const ALL: [Element; 7] = [
        Element::C,
        Element::H,
        Element::F,
        Element::N,
        Element::O,
        Element::S,
        Element::Si,
    ];

    /// The normalized chemical symbol (`"Si"`, never `"SI"`).
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::C => "C",
            Element::F => "F",
            Element::H => "H",
            Element::N => "N",
            Element::O => "O",
            Element::S => "S",
            Element::Si => "Si",
        }
    }

    /// The element name, which is also the name of the structure builder's atom class.
    pub fn name(&self) -> &'static str {
        match self {
            Element::C => "Carbon",
            Element::F => "Fluorine",
            Element::H => "Hydrogen",
            Element::N => "Nitrogen",
            Element::O => "Oxygen",
            Element::S => "Sulfur",
            Element::Si => "Silicon",
        }
    }

    /// Number of protons in the nucleus.
    pub fn atomic_number(&self) -> u8 {
        match self {
            Element::H => 1,
            Element::C => 6,
            Element::N => 7,
            Element::O => 8,
            Element::F => 9,
            Element::Si => 14,
            Element::S => 16,
        }
    }

    /// Atomic mass in daltons, as used by the downstream force field.
    pub fn mass(&self) -> f64 {
        match self {
            Element::H => 1.0,
            Element::C => 12.0,
            Element::N => 14.0,
            Element::O => 16.0,
            Element::F => 19.0,
            Element::Si => 28.0855,
            Element::S => 32.065,
        }
    }

    pub fn is_hydrogen(&self) -> bool {
        matches!(self, Element::H)
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Parses a symbol token exactly as it appears in a coordinate record.
    ///
    /// Only `SI` is normalized; any other spelling (e.g. `c`, `CL`) is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SYMBOL_TOKENS
            .get(s)
            .copied()
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_every_supported_symbol() {
        assert_eq!("C".parse::<Element>().unwrap(), Element::C);
        assert_eq!("F".parse::<Element>().unwrap(), Element::F);
        assert_eq!("H".parse::<Element>().unwrap(), Element::H);
        assert_eq!("N".parse::<Element>().unwrap(), Element::N);
        assert_eq!("O".parse::<Element>().unwrap(), Element::O);
        assert_eq!("S".parse::<Element>().unwrap(), Element::S);
        assert_eq!("Si".parse::<Element>().unwrap(), Element::Si);
    }

    #[test]
    fn upper_case_silicon_is_normalized() {
        let element: Element = "SI".parse().unwrap();
        assert_eq!(element, Element::Si);
        assert_eq!(element.symbol(), "Si");
        assert_eq!(element.name(), "Silicon");
    }

    #[test]
    fn from_str_rejects_other_spellings_and_unknown_symbols() {
        assert_eq!(
            "c".parse::<Element>(),
            Err(ParseElementError("c".to_string()))
        );
        assert!("CL".parse::<Element>().is_err());
        assert!("Cl".parse::<Element>().is_err());
        assert!("sI".parse::<Element>().is_err());
        assert!("".parse::<Element>().is_err());
    }

    #[test]
    fn names_match_structure_builder_classes() {
        let names: Vec<_> = Element::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "Carbon", "Hydrogen", "Fluorine", "Nitrogen", "Oxygen", "Sulfur", "Silicon"
            ]
        );
    }

    #[test]
    fn atomic_numbers_increase_with_mass() {
        assert_eq!(Element::H.atomic_number(), 1);
        assert_eq!(Element::C.atomic_number(), 6);
        assert_eq!(Element::Si.atomic_number(), 14);
        assert_eq!(Element::S.atomic_number(), 16);

        let mut by_mass = Element::ALL;
        by_mass.sort_by(|a, b| a.mass().total_cmp(&b.mass()));
        let numbers: Vec<u8> = by_mass.iter().map(|e| e.atomic_number()).collect();
        assert_eq!(numbers, vec![1, 6, 7, 8, 9, 14, 16]);
    }

    #[test]
    fn only_hydrogen_reports_is_hydrogen() {
        for element in Element::ALL {
            assert_eq!(element.is_hydrogen(), element == Element::H);
        }
    }

    #[test]
    fn display_prints_normalized_symbol() {
        assert_eq!(Element::Si.to_string(), "Si");
        assert_eq!(Element::C.to_string(), "C");
    }
}
