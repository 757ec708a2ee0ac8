//! Residue vocabulary and element tags shared by the pocket, the ball-and-stick
//! atoms and the 2D interaction diagram.

use crate::util::Rgba;

/// Amino-acid residue names used for synthetic labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueCode {
    /// Aspartate.
    Asp,
    /// Glutamate.
    Glu,
    /// Lysine.
    Lys,
    /// Arginine.
    Arg,
    /// Histidine.
    His,
    /// Phenylalanine.
    Phe,
    /// Tyrosine.
    Tyr,
    /// Tryptophan.
    Trp,
    /// Valine.
    Val,
    /// Leucine.
    Leu,
}

impl ResidueCode {
    /// The fixed vocabulary, in draw order.
    pub const VOCABULARY: [Self; 10] = [
        Self::Asp,
        Self::Glu,
        Self::Lys,
        Self::Arg,
        Self::His,
        Self::Phe,
        Self::Tyr,
        Self::Trp,
        Self::Val,
        Self::Leu,
    ];

    /// Upper-case three-letter code (`"ASP"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Asp => "ASP",
            Self::Glu => "GLU",
            Self::Lys => "LYS",
            Self::Arg => "ARG",
            Self::His => "HIS",
            Self::Phe => "PHE",
            Self::Tyr => "TYR",
            Self::Trp => "TRP",
            Self::Val => "VAL",
            Self::Leu => "LEU",
        }
    }

    /// Title-case three-letter code (`"Asp"`).
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Asp => "Asp",
            Self::Glu => "Glu",
            Self::Lys => "Lys",
            Self::Arg => "Arg",
            Self::His => "His",
            Self::Phe => "Phe",
            Self::Tyr => "Tyr",
            Self::Trp => "Trp",
            Self::Val => "Val",
            Self::Leu => "Leu",
        }
    }
}

/// Mock element tag for drawn atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Carbon.
    Carbon,
    /// Oxygen.
    Oxygen,
    /// Nitrogen.
    Nitrogen,
    /// Sulfur.
    Sulfur,
}

impl Element {
    /// Element symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Carbon => "C",
            Self::Oxygen => "O",
            Self::Nitrogen => "N",
            Self::Sulfur => "S",
        }
    }

    /// CPK-style display color.
    #[must_use]
    pub const fn color(self) -> Rgba {
        match self {
            Self::Carbon => Rgba::hex(0x9ca3af),
            Self::Oxygen => Rgba::hex(0xef4444),
            Self::Nitrogen => Rgba::hex(0x3b82f6),
            Self::Sulfur => Rgba::hex(0xeab308),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_agree_ignoring_case() {
        for residue in ResidueCode::VOCABULARY {
            assert_eq!(residue.code(), residue.title().to_uppercase());
        }
    }

    #[test]
    fn symbols() {
        assert_eq!(Element::Sulfur.symbol(), "S");
        assert_eq!(Element::Oxygen.color(), Rgba::hex(0xef4444));
    }
}
