//! Hybridization inference from element and bond count.
//!
//! Coordinate files from the supported instrument spell out plain chemical symbols and a
//! complete bond list, so the hybridization of every atom follows from how many bonds
//! it declares. The mapping is a fixed table; a pair that is not in it means the input is
//! malformed and is never defaulted.

use crate::core::models::element::Element;
use crate::core::models::hybridization::Hybridization;
use thiserror::Error;

/// The `(element, bond count) -> hybridization` table.
pub static HYBRIDIZATION_TABLE: [(Element, usize, Hybridization); 12] = [
    (Element::C, 4, Hybridization::Sp3),
    (Element::C, 3, Hybridization::Sp2),
    (Element::C, 2, Hybridization::Sp),
    (Element::F, 1, Hybridization::Sp3),
    (Element::H, 1, Hybridization::None),
    (Element::N, 3, Hybridization::Sp3),
    (Element::N, 2, Hybridization::Sp2),
    (Element::O, 2, Hybridization::Sp3),
    (Element::S, 2, Hybridization::Sp3),
    (Element::Si, 4, Hybridization::Sp3),
    (Element::Si, 3, Hybridization::Sp2),
    (Element::Si, 2, Hybridization::Sp),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No hybridization is defined for element {element} with {bond_count} bond(s)")]
pub struct HybridizationError {
    pub element: Element,
    pub bond_count: usize,
}

/// Looks up the hybridization of an atom with the given element and bond count.
///
/// # Errors
///
/// Returns [`HybridizationError`] if the pair has no entry in [`HYBRIDIZATION_TABLE`].
pub fn classify(element: Element, bond_count: usize) -> Result<Hybridization, HybridizationError> {
    HYBRIDIZATION_TABLE
        .iter()
        .find(|(e, n, _)| *e == element && *n == bond_count)
        .map(|(_, _, hyb)| *hyb)
        .ok_or(HybridizationError {
            element,
            bond_count,
        })
}
