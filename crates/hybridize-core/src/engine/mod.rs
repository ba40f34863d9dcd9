//! # Engine Module
//!
//! The logic layer between parsed records and the emitted structure.
//!
//! - [`classifier`] - Applies the hybridization table to every parsed atom
//! - [`emitter`] - Builds the structure description and deduplicates bonds
//! - [`config`] - Import configuration and its builder
//! - [`progress`] - Callback-based progress reporting for front ends
//! - [`error`] - The engine error taxonomy

pub mod classifier;
pub mod config;
pub mod emitter;
pub mod error;
pub mod progress;
