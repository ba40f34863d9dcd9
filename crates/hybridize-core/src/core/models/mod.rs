//! # Core Models Module
//!
//! Data structures shared by every stage of the import pipeline.
//!
//! ## Key Components
//!
//! - [`element`] - The closed set of supported chemical elements
//! - [`hybridization`] - Hybridization states assigned by the classifier
//! - [`atom`] - Atoms as read from coordinate and connectivity records
//! - [`structure`] - The emitted structure description (atom and bond entries)
//!
//! ## Usage
//!
//! ```ignore
//! use hybridize::core::models::{atom::Atom, element::Element};
//! use nalgebra::Point3;
//!
//! let atom = Atom::new(Element::C, Point3::new(0.0, 0.0, 0.0));
//! assert!(atom.bonded_indices.is_empty());
//! ```

pub mod atom;
pub mod element;
pub mod hybridization;
pub mod structure;
