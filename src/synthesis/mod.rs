//! Seeded geometry generators.
//!
//! Everything here is a pure function of the seed string: the same seed
//! always yields bit-identical output, and nothing reads the clock or any
//! environment entropy.
//!
//! - [`backbone`] - three-state motif machine producing a recentered chain
//! - [`atoms`] - ball-and-stick atoms and chain bonds for a backbone
//! - [`pocket`] - ligand cluster and surrounding pocket residues
//! - [`residue`] - residue vocabulary and element tags

pub mod atoms;
pub mod backbone;
pub mod motif;
pub mod pocket;
pub mod residue;

use glam::Vec3;

pub use atoms::{backbone_atoms, chain_bonds, Atom};
pub use backbone::{Backbone, BackbonePoint};
pub use motif::Motif;
pub use pocket::{BindingPocket, LigandAtom, PocketResidue};
pub use residue::{Element, ResidueCode};

/// Largest distance from the origin over `positions`, 0 when empty.
#[must_use]
pub fn max_extent(positions: impl Iterator<Item = Vec3>) -> f32 {
    positions.map(Vec3::length).fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_nothing_is_zero() {
        assert_eq!(max_extent(std::iter::empty()), 0.0);
        assert_eq!(
            max_extent([Vec3::X, Vec3::new(0.0, -3.0, 4.0)].into_iter()),
            5.0
        );
    }
}
