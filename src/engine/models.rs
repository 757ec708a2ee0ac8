//! Cached scene geometry for each kind of viewer.

use crate::camera::{Lens, Projection, Viewport};
use crate::options::CameraOptions;
use crate::renderer::{
    draw_ball_and_stick, draw_pocket, draw_ribbon, pocket_background,
    smooth_backbone, Fill, PathPoint, RenderStyle, Surface,
    PLACEHOLDER_BACKGROUND,
};
use crate::synthesis::{backbone_atoms, Atom, Backbone, BindingPocket};
use crate::util::SeededRng;

/// Geometry a [`Viewer`](super::Viewer) can cache and draw.
pub trait SceneModel {
    /// Synthesize the geometry for `seed`. Must be deterministic.
    fn synthesize(seed: &str) -> Self
    where
        Self: Sized;

    /// Radius used to fit the geometry to the viewport.
    fn extent(&self) -> f32;

    /// Camera distance and fit for this kind of view.
    fn lens(options: &CameraOptions) -> Lens
    where
        Self: Sized;

    /// Frame background.
    fn background(viewport: Viewport) -> Fill
    where
        Self: Sized;

    /// Draw onto `surface`, farthest primitives first.
    fn draw(
        &self,
        surface: &mut dyn Surface,
        projection: &Projection,
        style: RenderStyle,
    );

    /// Whether `style` colors by confidence and wants the band legend.
    fn shows_confidence_legend(_style: RenderStyle) -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// Protein backbone with its ribbon path and ball-and-stick atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinModel {
    backbone: Backbone,
    path: Vec<PathPoint>,
    atoms: Vec<Atom>,
}

impl ProteinModel {
    /// Raw backbone.
    #[must_use]
    pub fn backbone(&self) -> &Backbone {
        &self.backbone
    }

    /// Smoothed ribbon path.
    #[must_use]
    pub fn path(&self) -> &[PathPoint] {
        &self.path
    }

    /// Ball-and-stick atoms.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}

impl SceneModel for ProteinModel {
    fn synthesize(seed: &str) -> Self {
        let mut rng = SeededRng::new(seed);
        let backbone = Backbone::synthesize_with(&mut rng);
        let atoms = backbone_atoms(&backbone, &mut rng);
        let path = smooth_backbone(&backbone);
        Self {
            backbone,
            path,
            atoms,
        }
    }

    fn extent(&self) -> f32 {
        self.backbone.extent()
    }

    fn lens(options: &CameraOptions) -> Lens {
        options.structure_lens()
    }

    fn background(_viewport: Viewport) -> Fill {
        Fill::Solid(PLACEHOLDER_BACKGROUND)
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        projection: &Projection,
        style: RenderStyle,
    ) {
        match style {
            RenderStyle::Ribbon => draw_ribbon(surface, &self.path, projection),
            RenderStyle::BallAndStick => {
                draw_ball_and_stick(surface, &self.atoms, projection);
            }
        }
    }

    fn shows_confidence_legend(style: RenderStyle) -> bool {
        style == RenderStyle::Ribbon
    }
}

/// Ligand binding pocket for one compound.
#[derive(Debug, Clone, PartialEq)]
pub struct PocketModel {
    pocket: BindingPocket,
}

impl PocketModel {
    /// The synthesized pocket.
    #[must_use]
    pub fn pocket(&self) -> &BindingPocket {
        &self.pocket
    }
}

impl SceneModel for PocketModel {
    fn synthesize(seed: &str) -> Self {
        Self {
            pocket: BindingPocket::synthesize(seed),
        }
    }

    fn extent(&self) -> f32 {
        self.pocket.extent()
    }

    fn lens(options: &CameraOptions) -> Lens {
        options.pocket_lens()
    }

    fn background(viewport: Viewport) -> Fill {
        pocket_background(viewport)
    }

    // The pocket has a single style.
    fn draw(
        &self,
        surface: &mut dyn Surface,
        projection: &Projection,
        _style: RenderStyle,
    ) {
        draw_pocket(surface, &self.pocket, projection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protein_model_is_deterministic() {
        let a = ProteinModel::synthesize("1AKI");
        let b = ProteinModel::synthesize("1AKI");
        assert_eq!(a, b);
        assert_eq!(a.atoms().len(), a.backbone().len());
        assert_eq!(a.path().len(), (a.backbone().len() - 3) * 6);
    }

    #[test]
    fn backbone_matches_standalone_synthesis() {
        let model = ProteinModel::synthesize("3H8D");
        assert_eq!(model.backbone(), &Backbone::synthesize("3H8D"));
    }

    #[test]
    fn lenses_follow_options() {
        let options = CameraOptions::default();
        assert_eq!(ProteinModel::lens(&options).camera_distance, 600.0);
        assert_eq!(PocketModel::lens(&options).camera_distance, 500.0);
    }

    #[test]
    fn only_ribbon_shows_confidence_legend() {
        assert!(ProteinModel::shows_confidence_legend(RenderStyle::Ribbon));
        assert!(!ProteinModel::shows_confidence_legend(
            RenderStyle::BallAndStick
        ));
        assert!(!PocketModel::shows_confidence_legend(RenderStyle::Ribbon));
    }
}
