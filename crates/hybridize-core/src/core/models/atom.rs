use super::element::Element;
use super::hybridization::Hybridization;
use nalgebra::Point3;

/// An atom as read from a coordinate file.
///
/// The element and position come from the atom's coordinate record. The bonded
/// indices come from the connectivity record at the same ordinal position and stay
/// empty until that record has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The normalized element of the atom.
    pub element: Element,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Zero-based indices of every bonded partner, in the order the connectivity record lists
    /// them. Duplicates and self-references are kept verbatim.
    pub bonded_indices: Vec<usize>,
}

impl Atom {
    /// Creates an atom that has not been given any bonds yet.
    pub fn new(element: Element, position: Point3<f64>) -> Self {
        Self {
            element,
            position,
            bonded_indices: Vec::new(),
        }
    }

    /// The number of bond declarations for this atom, which is the classifier's key.
    pub fn bond_count(&self) -> usize {
        self.bonded_indices.len()
    }
}

/// An atom paired with the hybridization inferred for it.
///
/// Borrows the parsed atom rather than copying it; the parsed list is read-only once
/// classification starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedAtom<'a> {
    pub atom: &'a Atom,
    pub hybridization: Hybridization,
}
