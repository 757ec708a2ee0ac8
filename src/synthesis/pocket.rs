//! Seeded ligand binding pocket.
//!
//! A ring-ish cluster of ligand atoms sits at the origin, surrounded by a
//! handful of labelled pocket residues further out. Everything is drawn from
//! the compound name's stream, so the pocket always matches the compound.

use std::f32::consts::TAU;

use glam::Vec3;

use super::max_extent;
use super::residue::{Element, ResidueCode};
use crate::util::prng::SeededRng;
use crate::util::Rgba;

/// Atoms closer than this in world z are bonded.
pub const LIGAND_BOND_Z_TOLERANCE: f32 = 20.0;

/// Ligand atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LigandAtom {
    /// Position in model units.
    pub position: Vec3,
    /// Element tag.
    pub element: Element,
    /// Radius in model units.
    pub radius: f32,
}

impl LigandAtom {
    /// Display color; ligand carbons are green to stand out from the pocket.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        match self.element {
            Element::Carbon => Rgba::hex(0x10b981),
            Element::Sulfur => Rgba::hex(0xf59e0b),
            other => other.color(),
        }
    }
}

/// Residue lining the pocket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PocketResidue {
    /// Position in model units.
    pub position: Vec3,
    /// Residue type.
    pub residue: ResidueCode,
    /// Sequence number.
    pub number: u32,
}

impl PocketResidue {
    /// Label such as `"ASP123"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.residue.code(), self.number)
    }
}

/// Synthesized binding pocket for one compound.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingPocket {
    ligand: Vec<LigandAtom>,
    residues: Vec<PocketResidue>,
    extent: f32,
}

impl BindingPocket {
    /// Synthesize the pocket for `compound`.
    #[must_use]
    pub fn synthesize(compound: &str) -> Self {
        let mut rng = SeededRng::new(compound);
        let ligand = ligand_atoms(&mut rng);
        let residues = pocket_residues(&mut rng);
        let extent = max_extent(
            ligand
                .iter()
                .map(|a| a.position)
                .chain(residues.iter().map(|r| r.position)),
        );
        Self {
            ligand,
            residues,
            extent,
        }
    }

    /// Ligand atoms in generation order.
    #[must_use]
    pub fn ligand(&self) -> &[LigandAtom] {
        &self.ligand
    }

    /// Pocket residues in generation order.
    #[must_use]
    pub fn residues(&self) -> &[PocketResidue] {
        &self.residues
    }

    /// Largest distance of any atom or residue from the origin.
    #[must_use]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Ligand bonds: each atom to its next two neighbours in generation
    /// order, when they are close enough in depth.
    #[must_use]
    pub fn ligand_bonds(&self) -> Vec<(usize, usize)> {
        let atoms = &self.ligand;
        let mut bonds = Vec::new();
        for (i, atom) in atoms.iter().enumerate() {
            for j in (i + 1)..(i + 3).min(atoms.len()) {
                let dz = (atom.position.z - atoms[j].position.z).abs();
                if dz < LIGAND_BOND_Z_TOLERANCE {
                    bonds.push((i, j));
                }
            }
        }
        bonds
    }
}

fn ligand_atoms(rng: &mut SeededRng) -> Vec<LigandAtom> {
    let count = rng.range_floor(12.0, 25.0) as usize;
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let r = rng.range(8.0, 20.0) as f32;
            let z = rng.range(-15.0, 15.0) as f32;
            let element = match rng.next_f64() {
                t if t < 0.2 => Element::Oxygen,
                t if t < 0.4 => Element::Nitrogen,
                t if t < 0.5 => Element::Sulfur,
                _ => Element::Carbon,
            };
            let x = angle.cos() * r + rng.range(-5.0, 5.0) as f32;
            let y = angle.sin() * r + rng.range(-5.0, 5.0) as f32;
            let radius = rng.range(4.0, 8.0) as f32;
            LigandAtom {
                position: Vec3::new(x, y, z),
                element,
                radius,
            }
        })
        .collect()
}

fn pocket_residues(rng: &mut SeededRng) -> Vec<PocketResidue> {
    let count = rng.range_floor(5.0, 9.0) as usize;
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU + rng.next_f64() as f32;
            let distance = rng.range(50.0, 70.0) as f32;
            let z = rng.range(-40.0, 40.0) as f32;
            let number = rng.range_floor(20.0, 400.0);
            let residue = rng
                .pick(&ResidueCode::VOCABULARY)
                .copied()
                .unwrap_or(ResidueCode::Asp);
            PocketResidue {
                position: Vec3::new(
                    angle.cos() * distance,
                    angle.sin() * distance,
                    z,
                ),
                residue,
                number,
            }
        })
        .collect()
}
