use crate::core::hybridization::classify;
use crate::core::io::pdb::PdbRecords;
use crate::core::models::element::Element;
use crate::core::models::hybridization::Hybridization;
use std::collections::{BTreeMap, BTreeSet};
use tracing::instrument;

/// One row of an inspection report.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSummary {
    pub index: usize,
    pub element: Element,
    pub bond_count: usize,
    /// `None` when the element and bond count have no table entry.
    pub hybridization: Option<Hybridization>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectionReport {
    pub atoms: Vec<AtomSummary>,
    /// Unique undirected bonds, counting every declaration from either endpoint.
    pub unique_bonds: usize,
    pub connectivity_records: usize,
}

impl InspectionReport {
    /// Atoms that would make an import fail.
    pub fn unclassified(&self) -> impl Iterator<Item = &AtomSummary> {
        self.atoms.iter().filter(|a| a.hybridization.is_none())
    }

    /// The molecular formula in Hill order: carbon, then hydrogen, then the rest
    /// alphabetically, or purely alphabetically when there is no carbon.
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<Element, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element).or_default() += 1;
        }

        let order: &[Element] = if counts.contains_key(&Element::C) {
            &Element::ALL
        } else {
            &ALPHABETICAL
        };

        let mut formula = String::new();
        for element in order {
            if let Some(&n) = counts.get(element) {
                formula.push_str(element.symbol());
                if n > 1 {
                    formula.push_str(&n.to_string());
                }
            }
        }
        formula
    }

    pub fn total_mass(&self) -> f64 {
        self.atoms.iter().map(|a| a.element.mass()).sum()
    }
}

const ALPHABETICAL: [Element; 7] = [
    Element::C,
    Element::F,
    Element::H,
    Element::N,
    Element::O,
    Element::S,
    Element::Si,
];

/// Summarizes parsed records without failing on unclassifiable atoms.
#[instrument(skip_all, name = "inspect_workflow")]
pub fn run(records: &PdbRecords) -> InspectionReport {
    let atoms = records
        .atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| AtomSummary {
            index,
            element: atom.element,
            bond_count: atom.bond_count(),
            hybridization: classify(atom.element, atom.bond_count()).ok(),
        })
        .collect();

    let unique_bonds = records
        .atoms
        .iter()
        .enumerate()
        .flat_map(|(i, atom)| {
            atom.bonded_indices
                .iter()
                .filter(move |&&j| j != i)
                .map(move |&j| (i.min(j), i.max(j)))
        })
        .collect::<BTreeSet<_>>()
        .len();

    InspectionReport {
        atoms,
        unique_bonds,
        connectivity_records: records.connectivity_records,
    }
}
