//! Binding-pocket view: labelled residues around a shaded ligand cluster.

use glam::{Vec2, Vec3};

use super::ball_and_stick::{sphere_fill, MIN_SPHERE_RADIUS};
use super::surface::{
    Fill, GradientStop, RadialGradient, Stroke, Surface, TextAlign, TextStyle,
};
use crate::camera::{Projection, Viewport};
use crate::synthesis::{BindingPocket, PocketResidue};
use crate::util::Rgba;

const BACKGROUND_INNER: Rgba = Rgba::hex(0xf8fafc);
const BACKGROUND_OUTER: Rgba = Rgba::hex(0xe2e8f0);
const BACKGROUND_INNER_RADIUS: f32 = 50.0;
const BACKGROUND_OUTER_RADIUS: f32 = 350.0;

const TETHER_COLOR: Rgba = Rgba::hex(0xcbd5e1);
const TETHER_WIDTH: f32 = 1.5;
const TETHER_DASH: f32 = 4.0;
const LABEL_COLOR: Rgba = Rgba::hex(0x64748b);
const LABEL_SIZE: f32 = 10.0;
const RESIDUE_DOT_COLOR: Rgba = Rgba::hex(0x94a3b8);
const RESIDUE_DOT_RADIUS: f32 = 4.0;

const LIGAND_BOND_COLOR: Rgba = Rgba::hex(0x475569);
const LIGAND_BOND_WIDTH: f32 = 4.0;
const LIGAND_SHADOW: Rgba = Rgba::hex(0x0f172a);

/// Soft radial backdrop centred on the viewport.
#[must_use]
pub fn pocket_background(viewport: Viewport) -> Fill {
    let center = viewport.center();
    Fill::Radial(RadialGradient {
        inner_center: center,
        inner_radius: BACKGROUND_INNER_RADIUS,
        outer_center: center,
        outer_radius: BACKGROUND_OUTER_RADIUS,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: BACKGROUND_INNER,
            },
            GradientStop {
                offset: 1.0,
                color: BACKGROUND_OUTER,
            },
        ],
    })
}

/// A pocket residue after projection.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedResidue<'a> {
    /// Source residue.
    pub residue: &'a PocketResidue,
    /// Screen position.
    pub screen: Vec2,
    /// Pixels per model unit at this depth.
    pub scale: f32,
    /// Rotated depth.
    pub depth: f32,
}

/// Residues farthest first (stable).
#[must_use]
pub fn residue_draw_order<'a>(
    residues: &'a [PocketResidue],
    projection: &Projection,
) -> Vec<ProjectedResidue<'a>> {
    let mut order: Vec<_> = residues
        .iter()
        .map(|residue| {
            let p = projection.project(residue.position);
            ProjectedResidue {
                residue,
                screen: p.screen,
                scale: p.scale,
                depth: p.depth,
            }
        })
        .collect();
    order.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    order
}

/// Draw residues, then ligand bonds, then ligand spheres farthest first.
pub fn draw_pocket(
    surface: &mut dyn Surface,
    pocket: &BindingPocket,
    projection: &Projection,
) {
    let origin = projection.project(Vec3::ZERO).screen;
    let tether = Stroke::solid(TETHER_COLOR, TETHER_WIDTH)
        .dashed(TETHER_DASH, TETHER_DASH);
    let label_style = TextStyle {
        color: LABEL_COLOR,
        size: LABEL_SIZE,
        bold: false,
        align: TextAlign::Start,
    };
    let dot = Fill::Solid(RESIDUE_DOT_COLOR);

    for r in residue_draw_order(pocket.residues(), projection) {
        surface.stroke_segments(&[(r.screen, origin)], &tether);
        surface.fill_text(&r.residue.label(), r.screen, &label_style);
        let radius = (RESIDUE_DOT_RADIUS * r.scale).max(MIN_SPHERE_RADIUS);
        surface.fill_circle(r.screen, radius, &dot, None);
    }

    let ligand = pocket.ligand();
    let projected: Vec<_> = ligand
        .iter()
        .map(|a| projection.project(a.position))
        .collect();

    let bonds: Vec<_> = pocket
        .ligand_bonds()
        .into_iter()
        .map(|(a, b)| (projected[a].screen, projected[b].screen))
        .collect();
    surface.stroke_segments(
        &bonds,
        &Stroke::solid(LIGAND_BOND_COLOR, LIGAND_BOND_WIDTH).round(),
    );

    let mut order: Vec<usize> = (0..ligand.len()).collect();
    order.sort_by(|&a, &b| projected[b].depth.total_cmp(&projected[a].depth));
    for i in order {
        let p = projected[i];
        let radius = (ligand[i].radius * p.scale).max(MIN_SPHERE_RADIUS);
        let fill =
            sphere_fill(p.screen, radius, ligand[i].color(), LIGAND_SHADOW);
        surface.fill_circle(p.screen, radius, &fill, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraState, Lens};
    use crate::renderer::surface::{DrawCommand, RecordingSurface};

    fn projection(pocket: &BindingPocket) -> Projection {
        Projection::new(
            &CameraState::default(),
            Viewport::new(320.0, 240.0, 1.0),
            pocket.extent(),
            Lens {
                camera_distance: 500.0,
                fit_fraction: 0.45,
            },
        )
    }

    #[test]
    fn residues_then_bonds_then_ligand() {
        let pocket = BindingPocket::synthesize("Ivacaftor (VX-770)");
        let projection = projection(&pocket);
        let mut surface = RecordingSurface::default();
        draw_pocket(&mut surface, &pocket, &projection);

        let residues = pocket.residues().len();
        let commands = surface.commands();
        assert_eq!(commands.len(), residues * 3 + 1 + pocket.ligand().len());
        assert!(matches!(
            &commands[residues * 3],
            DrawCommand::Stroke { stroke, .. }
                if stroke.color == LIGAND_BOND_COLOR
        ));
        assert_eq!(surface.texts().len(), residues);
    }

    #[test]
    fn residue_labels_drawn_farthest_first() {
        let pocket = BindingPocket::synthesize("Lumacaftor");
        let projection = projection(&pocket);
        let mut surface = RecordingSurface::default();
        draw_pocket(&mut surface, &pocket, &projection);

        let order = residue_draw_order(pocket.residues(), &projection);
        let expected: Vec<String> =
            order.iter().map(|r| r.residue.label()).collect();
        assert_eq!(surface.texts(), expected);
        for pair in order.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn circles_keep_one_pixel_floor_when_zoomed_out() {
        let pocket = BindingPocket::synthesize("Aspirin");
        let mut camera = CameraState::default();
        camera.set_zoom(0.4);
        let projection = Projection::new(
            &camera,
            Viewport::new(60.0, 60.0, 1.0),
            pocket.extent(),
            Lens {
                camera_distance: 500.0,
                fit_fraction: 0.45,
            },
        );
        let mut surface = RecordingSurface::default();
        draw_pocket(&mut surface, &pocket, &projection);

        let radii: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(
            radii.len(),
            pocket.residues().len() + pocket.ligand().len()
        );
        assert!(radii.iter().all(|&r| r >= MIN_SPHERE_RADIUS));
        assert!(radii.iter().any(|&r| r == MIN_SPHERE_RADIUS));
    }

    #[test]
    fn ligand_spheres_descend_in_depth() {
        let pocket = BindingPocket::synthesize("Aspirin");
        let projection = projection(&pocket);
        let mut surface = RecordingSurface::default();
        draw_pocket(&mut surface, &pocket, &projection);

        let skip = pocket.residues().len();
        let ligand_centers = &surface.circle_centers()[skip..];
        let depths: Vec<f32> = ligand_centers
            .iter()
            .map(|c| {
                pocket
                    .ligand()
                    .iter()
                    .map(|a| projection.project(a.position))
                    .find(|p| p.screen == *c)
                    .map_or(f32::NAN, |p| p.depth)
            })
            .collect();
        for pair in depths.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }
}
