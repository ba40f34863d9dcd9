//! # Core Module
//!
//! Fundamental building blocks of the importer.
//!
//! - **Molecular Representation** ([`models`]) - Elements, hybridization states, parsed atoms
//!   and the emitted structure description
//! - **Classification** ([`hybridization`]) - The static `(element, bond count)` lookup table
//! - **File I/O** ([`io`]) - The PDB record reader and the structure description writers

pub mod hybridization;
pub mod io;
pub mod models;
