use crate::core::models::element::Element;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "Unknown hybridization for atom {index}: element {element} with {bond_count} bond(s) has no entry in the hybridization table"
    )]
    UnknownHybridization {
        index: usize,
        element: Element,
        bond_count: usize,
    },

    #[error(
        "Asymmetric bond list: atom {from} declares a bond to atom {to}, but atom {to} does not declare one back"
    )]
    AsymmetricBond { from: usize, to: usize },

    #[error("Incomplete connectivity: {records} CONECT record(s) for {atoms} atoms")]
    IncompleteConnectivity { records: usize, atoms: usize },
}
