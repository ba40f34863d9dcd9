use crate::core::io::pdb::PdbRecords;
use crate::core::models::structure::StructureDescription;
use crate::engine::classifier::classify_atoms;
use crate::engine::config::ImportConfig;
use crate::engine::emitter::emit_structure;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use tracing::{info, instrument};

/// Turns parsed records into a structure description.
///
/// Every atom is classified before anything is emitted, so a failure leaves no partial
/// description behind.
#[instrument(skip_all, name = "import_workflow")]
pub fn run(
    records: &PdbRecords,
    config: &ImportConfig,
    reporter: &ProgressReporter,
) -> Result<StructureDescription, EngineError> {
    if config.require_complete_connectivity && !records.is_fully_connected() {
        return Err(EngineError::IncompleteConnectivity {
            records: records.connectivity_records,
            atoms: records.atoms.len(),
        });
    }

    info!(
        "Importing {} atoms ({} connectivity records).",
        records.atoms.len(),
        records.connectivity_records
    );

    let classified = classify_atoms(&records.atoms, reporter)?;
    let description = emit_structure(&classified, config.asymmetric_bonds, reporter)?;

    info!(
        "Import complete: {} atoms, {} bonds.",
        description.atom_count(),
        description.bond_count()
    );
    Ok(description)
}
