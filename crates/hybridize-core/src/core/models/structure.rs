use super::element::Element;
use super::hybridization::Hybridization;
use nalgebra::Point3;
use serde::{Serialize, Serializer};

/// One atom-creation entry of a structure description.
///
/// The entry's index is implicit: it is the entry's position in
/// [`StructureDescription::atoms`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtomEntry {
    pub element: Element,
    /// `None` for hydrogen, whose creation form carries no hybridization qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hybridization: Option<Hybridization>,
    #[serde(serialize_with = "serialize_position")]
    pub position: Point3<f64>,
}

fn serialize_position<S: Serializer>(
    position: &Point3<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    [position.x, position.y, position.z].serialize(serializer)
}

/// One undirected bond between two atom entries, always stored with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BondEntry {
    pub i: usize,
    pub j: usize,
}

impl BondEntry {
    /// Creates a bond entry, ordering the endpoints so that `i < j`.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            i: a.min(b),
            j: a.max(b),
        }
    }
}

/// The emitted structure: atom entries in file order followed by unique bonds in
/// ascending `(i, j)` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructureDescription {
    pub atoms: Vec<AtomEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bonds: Vec<BondEntry>,
}

impl StructureDescription {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Returns `true` if any atom entry carries a hybridization qualifier.
    pub fn has_qualified_atoms(&self) -> bool {
        self.atoms.iter().any(|a| a.hybridization.is_some())
    }

    /// The distinct elements present, in [`Element`] declaration order.
    pub fn elements(&self) -> Vec<Element> {
        let mut elements: Vec<Element> = self.atoms.iter().map(|a| a.element).collect();
        elements.sort_unstable();
        elements.dedup();
        elements
    }
}
