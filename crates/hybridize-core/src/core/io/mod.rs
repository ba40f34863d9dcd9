//! Provides input/output functionality for the importer.
//!
//! The reader side understands the `HETATM`/`CONECT` subset of the PDB format produced
//! by the supported instrument. The writer side renders a structure description either
//! as construction statements for the downstream structure builder or as a TOML
//! document. Both sides are exposed through the traits in [`traits`].

pub mod columns;
pub mod description;
pub mod java;
pub mod pdb;
pub mod traits;
