//! # Workflows Module
//!
//! The entry points used by front ends. Each workflow takes parsed records and runs
//! the engine stages in order, reporting progress through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter).
//!
//! - [`import`] - Classification followed by structure emission
//! - [`inspect`] - A non-failing per-atom report with formula and mass totals

pub mod import;
pub mod inspect;
