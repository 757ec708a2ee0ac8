//! Ball-and-stick atoms derived from a backbone.

use glam::Vec3;

use super::backbone::Backbone;
use super::residue::Element;
use crate::util::prng::SeededRng;
use crate::util::Rgba;

/// Drawn radius of every backbone atom, in model units.
pub const ATOM_RADIUS: f32 = 4.0;

/// Chance threshold for a fourth-position atom to be tagged sulfur.
const SULFUR_THRESHOLD: f64 = 0.8;

/// A backbone atom. Atom `i` bonds to atom `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// Position in model units.
    pub position: Vec3,
    /// Display color.
    pub color: Rgba,
    /// Radius in model units.
    pub radius: f32,
    /// Element tag.
    pub element: Element,
    /// Chain index.
    pub index: usize,
}

/// One atom per backbone point. Element tags cycle C, O, N, then C or S;
/// the sulfur draws continue `rng` after backbone synthesis.
pub fn backbone_atoms(backbone: &Backbone, rng: &mut SeededRng) -> Vec<Atom> {
    backbone
        .points()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let element = match index % 4 {
                1 => Element::Oxygen,
                2 => Element::Nitrogen,
                3 if rng.next_f64() > SULFUR_THRESHOLD => Element::Sulfur,
                _ => Element::Carbon,
            };
            Atom {
                position: point.position,
                color: element.color(),
                radius: ATOM_RADIUS,
                element,
                index,
            }
        })
        .collect()
}

/// Bonds between consecutive chain atoms, as index pairs.
pub fn chain_bonds(atom_count: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..atom_count).map(|i| (i - 1, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_atom_per_point_with_cycling_elements() {
        let mut rng = SeededRng::new("1AKI");
        let backbone = Backbone::synthesize_with(&mut rng);
        let atoms = backbone_atoms(&backbone, &mut rng);

        assert_eq!(atoms.len(), backbone.len());
        for (atom, point) in atoms.iter().zip(backbone.points()) {
            assert_eq!(atom.position, point.position);
        }
        assert!(atoms
            .iter()
            .step_by(4)
            .all(|a| a.element == Element::Carbon));
        assert!(atoms
            .iter()
            .skip(1)
            .step_by(4)
            .all(|a| a.element == Element::Oxygen));
        assert!(atoms
            .iter()
            .skip(3)
            .step_by(4)
            .all(|a| matches!(a.element, Element::Carbon | Element::Sulfur)));
    }

    #[test]
    fn bonds_join_neighbours() {
        let bonds: Vec<_> = chain_bonds(4).collect();
        assert_eq!(bonds, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(chain_bonds(0).count(), 0);
        assert_eq!(chain_bonds(1).count(), 0);
    }
}
