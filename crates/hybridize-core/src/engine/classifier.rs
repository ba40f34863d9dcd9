use crate::core::hybridization::classify;
use crate::core::models::atom::{Atom, ClassifiedAtom};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use tracing::{instrument, trace};

/// Assigns a hybridization to every atom from its element and bond count.
///
/// Must run after all connectivity has been read, since the bond count is part of the
/// lookup key. The first atom without a table entry aborts classification.
///
/// # Errors
///
/// Returns [`EngineError::UnknownHybridization`] naming the atom's index, element and
/// bond count if a pair has no entry in the table.
#[instrument(skip_all, fields(atoms = atoms.len()))]
pub fn classify_atoms<'a>(
    atoms: &'a [Atom],
    reporter: &ProgressReporter,
) -> Result<Vec<ClassifiedAtom<'a>>, EngineError> {
    reporter.report(Progress::StageStart {
        stage: Stage::Classification,
        atoms: atoms.len() as u64,
    });

    let classified = atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| {
            let hybridization = classify(atom.element, atom.bond_count()).map_err(|e| {
                EngineError::UnknownHybridization {
                    index,
                    element: e.element,
                    bond_count: e.bond_count,
                }
            })?;
            trace!(
                "Atom {} ({}, {} bonds) -> {}",
                index,
                atom.element,
                atom.bond_count(),
                hybridization
            );
            reporter.report(Progress::AtomDone);
            Ok(ClassifiedAtom {
                atom,
                hybridization,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    reporter.report(Progress::StageFinish {
        stage: Stage::Classification,
    });
    Ok(classified)
}
