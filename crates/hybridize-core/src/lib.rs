//! # Hybridize Core Library
//!
//! Imports fixed-column PDB coordinate files that carry explicit hydrogens and a complete
//! `CONECT` table, infers the hybridization of every atom from its element and bond count,
//! and emits a structure description (atoms, positions, bonds) for a downstream
//! molecular-mechanics engine.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Atom`, `StructureDescription`),
//!   the static hybridization table, and the readers/writers for the supported file formats.
//!
//! - **[`engine`]: The Logic Core.** Applies the classifier to a parsed atom list and
//!   turns the classified atoms into a deduplicated structure description.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into the
//!   run-once import pipeline used by the command-line tool.

pub mod core;
pub mod engine;
pub mod workflows;
