use serde::Serialize;
use std::fmt;

/// The bonding geometry of an atom, inferred from its element and bond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Hybridization {
    Sp3,
    Sp2,
    Sp,
    /// Not hybridized (hydrogen).
    None,
}

impl Hybridization {
    /// The constant name used by the structure builder (`Atom.SP3`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Sp3 => "SP3",
            Self::Sp2 => "SP2",
            Self::Sp => "SP",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for Hybridization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matches_builder_constants() {
        assert_eq!(Hybridization::Sp3.tag(), "SP3");
        assert_eq!(Hybridization::Sp2.tag(), "SP2");
        assert_eq!(Hybridization::Sp.tag(), "SP");
        assert_eq!(Hybridization::None.tag(), "NONE");
    }

    #[test]
    fn display_prints_tag() {
        assert_eq!(Hybridization::Sp2.to_string(), "SP2");
        assert_eq!(format!("Atom.{}", Hybridization::Sp3), "Atom.SP3");
    }
}
