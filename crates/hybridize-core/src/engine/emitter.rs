use crate::core::models::atom::ClassifiedAtom;
use crate::core::models::structure::{AtomEntry, BondEntry, StructureDescription};
use crate::engine::config::AsymmetryPolicy;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Builds the structure description from classified atoms.
///
/// Atoms are emitted in input order. A bond `(i, j)` is emitted once, when atom `i`
/// lists a partner `j > i`; the reverse declaration on atom `j` is skipped, and so are
/// self-references and repeated partners. Bonds come out sorted by `(i, j)`.
///
/// An asymmetric declaration (atom `i` lists `j`, atom `j` does not list `i`) is kept
/// when `i < j` and dropped when `i > j`. `policy` decides whether that is reported;
/// under [`AsymmetryPolicy::Warn`] each pair is reported once as a [`Progress::Notice`].
///
/// # Errors
///
/// Returns [`EngineError::AsymmetricBond`] for the first asymmetric declaration when
/// `policy` is [`AsymmetryPolicy::Error`].
#[instrument(skip_all, fields(atoms = atoms.len()))]
pub fn emit_structure(
    atoms: &[ClassifiedAtom<'_>],
    policy: AsymmetryPolicy,
    reporter: &ProgressReporter,
) -> Result<StructureDescription, EngineError> {
    reporter.report(Progress::StageStart {
        stage: Stage::Emission,
        atoms: atoms.len() as u64,
    });

    let mut entries = Vec::with_capacity(atoms.len());
    let mut bonds = BTreeSet::new();
    let mut reported = BTreeSet::new();

    for (i, classified) in atoms.iter().enumerate() {
        let atom = classified.atom;
        entries.push(AtomEntry {
            element: atom.element,
            hybridization: (!atom.element.is_hydrogen()).then_some(classified.hybridization),
            position: atom.position,
        });

        for &other in &atom.bonded_indices {
            if other > i {
                bonds.insert(BondEntry::new(i, other));
            }
            if other != i && !declares_bond(atoms, other, i) && reported.insert((i, other)) {
                handle_asymmetry(i, other, policy, reporter)?;
            }
        }
        reporter.report(Progress::AtomDone);
    }

    reporter.report(Progress::StageFinish {
        stage: Stage::Emission,
    });

    let description = StructureDescription {
        atoms: entries,
        bonds: bonds.into_iter().collect(),
    };
    debug!(
        "Emitted {} atoms and {} bonds",
        description.atom_count(),
        description.bond_count()
    );
    Ok(description)
}

fn declares_bond(atoms: &[ClassifiedAtom<'_>], from: usize, to: usize) -> bool {
    atoms
        .get(from)
        .is_some_and(|a| a.atom.bonded_indices.contains(&to))
}

fn handle_asymmetry(
    from: usize,
    to: usize,
    policy: AsymmetryPolicy,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    match policy {
        AsymmetryPolicy::Ignore => Ok(()),
        AsymmetryPolicy::Warn => {
            let outcome = if to > from { "kept" } else { "dropped" };
            let message = format!(
                "Atom {} lists atom {} as a partner but not vice versa; bond {}",
                from, to, outcome
            );
            reporter.report(Progress::Notice(message));
            Ok(())
        }
        AsymmetryPolicy::Error => Err(EngineError::AsymmetricBond { from, to }),
    }
}
