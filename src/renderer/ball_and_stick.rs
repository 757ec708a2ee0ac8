//! Ball-and-stick style: shaded spheres joined by chain bonds.

use glam::Vec2;

use super::surface::{Fill, GradientStop, RadialGradient, Stroke, Surface};
use crate::camera::Projection;
use crate::synthesis::{chain_bonds, Atom};
use crate::util::Rgba;

const BOND_COLOR: Rgba = Rgba::hex(0x64748b);
/// Bond width relative to the projection's base scale.
const BOND_WIDTH_FACTOR: f32 = 4.0 * 0.05;
const SPHERE_SHADOW: Rgba = Rgba::hex(0x1f2937);
const OUTLINE: Rgba = Rgba::rgb(0, 0, 0).with_alpha(0.1);
/// Smallest sphere radius drawn, in CSS pixels.
pub const MIN_SPHERE_RADIUS: f32 = 1.0;

/// Shaded-sphere gradient: white highlight, base color, dark rim.
#[must_use]
pub fn sphere_fill(
    center: Vec2,
    radius: f32,
    color: Rgba,
    shadow: Rgba,
) -> Fill {
    Fill::Radial(RadialGradient {
        inner_center: center - Vec2::splat(radius * 0.3),
        inner_radius: radius * 0.1,
        outer_center: center,
        outer_radius: radius,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Rgba::WHITE,
            },
            GradientStop {
                offset: 0.3,
                color,
            },
            GradientStop {
                offset: 1.0,
                color: shadow,
            },
        ],
    })
}

/// A projected atom ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedAtom {
    /// Screen center.
    pub center: Vec2,
    /// Screen radius, floored at [`MIN_SPHERE_RADIUS`].
    pub radius: f32,
    /// Base color.
    pub color: Rgba,
    /// Rotated depth.
    pub depth: f32,
    /// Chain index of the source atom.
    pub index: usize,
}

/// Project `atoms` and return them farthest first (stable).
#[must_use]
pub fn atom_draw_order(
    atoms: &[Atom],
    projection: &Projection,
) -> Vec<ProjectedAtom> {
    let mut projected: Vec<ProjectedAtom> = atoms
        .iter()
        .map(|atom| {
            let p = projection.project(atom.position);
            ProjectedAtom {
                center: p.screen,
                radius: (atom.radius * p.scale).max(MIN_SPHERE_RADIUS),
                color: atom.color,
                depth: p.depth,
                index: atom.index,
            }
        })
        .collect();
    projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    projected
}

/// Draw bonds (one path, under everything) then depth-sorted spheres.
pub fn draw_ball_and_stick(
    surface: &mut dyn Surface,
    atoms: &[Atom],
    projection: &Projection,
) {
    let screen: Vec<Vec2> = atoms
        .iter()
        .map(|a| projection.project(a.position).screen)
        .collect();
    let bonds: Vec<_> = chain_bonds(atoms.len())
        .map(|(a, b)| (screen[a], screen[b]))
        .collect();
    surface.stroke_segments(
        &bonds,
        &Stroke::solid(BOND_COLOR, BOND_WIDTH_FACTOR * projection.base_scale()),
    );

    let outline = Stroke::solid(OUTLINE, 1.0);
    for atom in atom_draw_order(atoms, projection) {
        let fill =
            sphere_fill(atom.center, atom.radius, atom.color, SPHERE_SHADOW);
        surface.fill_circle(atom.center, atom.radius, &fill, Some(&outline));
    }
}
