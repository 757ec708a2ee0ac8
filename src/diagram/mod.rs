//! Seeded 2D ligand-interaction diagram.
//!
//! A compound glyph sits in the middle of an 800×400 canvas, ringed by four
//! to seven residue contacts. Each contact is either a hydrogen bond (boxed
//! label, dashed line toward the glyph, distance in Å) or a hydrophobic
//! contact (orange "eyelash" arc facing the glyph). Layout, residues and
//! glyph shape all come from the compound name's PRNG stream, so the same
//! name always produces byte-identical markup.

mod markup;

use std::f64::consts::TAU;

use glam::DVec2;

use crate::synthesis::ResidueCode;
use crate::util::prng::SeededRng;

/// Canvas width in user units.
pub const WIDTH: f64 = 800.0;
/// Canvas height in user units.
pub const HEIGHT: f64 = 400.0;

/// Kind of residue contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    /// Hydrogen bond, drawn with a distance label.
    HydrogenBond,
    /// Hydrophobic contact.
    Hydrophobic,
}

/// Central compound glyph outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphShape {
    /// Flat-topped hexagon with inner bonds.
    Hexagon,
    /// Pointy-sided hexagon with crossing bonds.
    RotatedHexagon,
    /// Three fused rectangles.
    RectangleChain,
}

impl GlyphShape {
    /// Shapes in draw-index order.
    pub const ALL: [Self; 3] =
        [Self::Hexagon, Self::RotatedHexagon, Self::RectangleChain];

    /// SVG path data centred on the origin.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Hexagon => {
                "M -25 -15 L 0 -30 L 25 -15 L 25 15 L 0 30 L -25 15 Z \
                 M -25 -15 L 0 0 L 25 -15 M 0 0 L 0 30"
            }
            Self::RotatedHexagon => {
                "M -30 0 L -15 -25 L 15 -25 L 30 0 L 15 25 L -15 25 Z \
                 M -15 -25 L 15 25 M 15 -25 L -15 25"
            }
            Self::RectangleChain => {
                "M -25 -10 L 25 -10 L 25 10 L -25 10 Z \
                 M 0 -10 L 0 10 M -12 -10 L -12 10 M 12 -10 L 12 10"
            }
        }
    }
}

/// One residue contact around the glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionNode {
    /// Polar angle from the canvas center, radians.
    pub angle: f64,
    /// Distance from the canvas center.
    pub radius: f64,
    /// Absolute position on the canvas.
    pub position: DVec2,
    /// Residue type.
    pub residue: ResidueCode,
    /// Residue number in [50, 400).
    pub number: u32,
    /// Contact kind.
    pub kind: InteractionKind,
    /// Bond length in Å; hydrogen bonds only.
    pub distance: Option<f64>,
}

impl InteractionNode {
    /// Label such as `"His131"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.residue.title(), self.number)
    }
}

/// A generated diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionDiagram {
    compound: String,
    nodes: Vec<InteractionNode>,
    glyph: GlyphShape,
}

impl InteractionDiagram {
    /// Generate the diagram for `compound`.
    #[must_use]
    pub fn generate(compound: &str) -> Self {
        let mut rng = SeededRng::new(compound);
        let center = DVec2::new(WIDTH / 2.0, HEIGHT / 2.0);

        let count = rng.range_floor(4.0, 8.0) as usize;
        let mut nodes: Vec<InteractionNode> = (0..count)
            .map(|i| {
                let angle = i as f64 / count as f64 * TAU + rng.range(0.0, 0.5);
                let radius = rng.range(120.0, 150.0);
                let residue = rng
                    .pick(&ResidueCode::VOCABULARY)
                    .copied()
                    .unwrap_or(ResidueCode::Asp);
                let number = rng.range_floor(50.0, 400.0);
                let kind = if rng.next_f64() > 0.5 {
                    InteractionKind::HydrogenBond
                } else {
                    InteractionKind::Hydrophobic
                };
                InteractionNode {
                    angle,
                    radius,
                    position: center
                        + DVec2::new(angle.cos(), angle.sin()) * radius,
                    residue,
                    number,
                    kind,
                    distance: None,
                }
            })
            .collect();

        // Distances are drawn only after the whole ring is placed.
        for node in &mut nodes {
            if node.kind == InteractionKind::HydrogenBond {
                node.distance = Some(rng.range(2.1, 3.2));
            }
        }

        let glyph =
            GlyphShape::ALL[(rng.range_floor(0.0, 3.0) as usize).min(2)];
        log::debug!(
            "diagram for {compound:?}: {} contacts, {glyph:?}",
            nodes.len()
        );

        Self {
            compound: compound.to_owned(),
            nodes,
            glyph,
        }
    }

    /// Compound name shown under the glyph.
    #[must_use]
    pub fn compound(&self) -> &str {
        &self.compound
    }

    /// Contacts in generation order.
    #[must_use]
    pub fn nodes(&self) -> &[InteractionNode] {
        &self.nodes
    }

    /// Central glyph.
    #[must_use]
    pub fn glyph(&self) -> GlyphShape {
        self.glyph
    }

    /// Canvas center.
    #[must_use]
    pub fn center() -> DVec2 {
        DVec2::new(WIDTH / 2.0, HEIGHT / 2.0)
    }
}
