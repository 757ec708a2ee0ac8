use glam::{Vec2, Vec3};

use super::core::CameraState;

/// Used in place of a zero or non-finite geometry extent.
pub const FALLBACK_EXTENT: f32 = 10.0;

/// Perspective denominators are floored here so points at or behind the
/// eye cannot blow up.
const MIN_PERSPECTIVE_DEPTH: f32 = 1.0;

/// Drawable area in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f32,
    /// Height in CSS pixels.
    pub height: f32,
    /// Physical pixels per CSS pixel.
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Viewport of the given CSS size; a non-positive ratio becomes 1.
    #[must_use]
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let device_pixel_ratio = if device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            device_pixel_ratio,
        }
    }

    /// Whether there is nothing to draw into.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Center in CSS pixels.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Shorter side in CSS pixels.
    #[must_use]
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Backing-store size in physical pixels.
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio).floor() as u32,
            (self.height * self.device_pixel_ratio).floor() as u32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Per-view projection constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Distance from the eye to the model origin.
    pub camera_distance: f32,
    /// Fraction of the shorter viewport side the geometry radius maps to at
    /// zoom 1.
    pub fit_fraction: f32,
}

/// A point after rotation and perspective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Screen position in CSS pixels.
    pub screen: Vec2,
    /// Pixels per model unit at this depth.
    pub scale: f32,
    /// Rotated z; larger is farther from the eye.
    pub depth: f32,
}

/// Rotation and perspective for one frame.
///
/// Points are yawed about Y (mixing x and z), then pitched about X (mixing y
/// and the yawed z), then divided by depth:
/// `scale = base_scale * d / (d + z')`. `base_scale` fits the geometry's
/// radius to the viewport and is linear in zoom.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    center: Vec2,
    base_scale: f32,
    camera_distance: f32,
    pitch_sin_cos: (f32, f32),
    yaw_sin_cos: (f32, f32),
}

impl Projection {
    /// Build the projection for the current camera and viewport.
    #[must_use]
    pub fn new(
        camera: &CameraState,
        viewport: Viewport,
        extent: f32,
        lens: Lens,
    ) -> Self {
        let extent = if extent.is_finite() && extent > 0.0 {
            extent
        } else {
            FALLBACK_EXTENT
        };
        let base_scale = viewport.min_dimension()
            * lens.fit_fraction
            * camera.zoom()
            / extent;
        let rotation = camera.rotation();
        Self {
            center: viewport.center(),
            base_scale,
            camera_distance: lens.camera_distance,
            pitch_sin_cos: rotation.x.sin_cos(),
            yaw_sin_cos: rotation.y.sin_cos(),
        }
    }

    /// Screen position of the model origin.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Pixels per model unit before perspective.
    #[must_use]
    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }

    /// Apply yaw then pitch.
    #[must_use]
    pub fn rotate(&self, p: Vec3) -> Vec3 {
        let (sin_y, cos_y) = self.yaw_sin_cos;
        let (sin_x, cos_x) = self.pitch_sin_cos;

        let x = p.x * cos_y - p.z * sin_y;
        let z = p.z * cos_y + p.x * sin_y;
        let y = p.y * cos_x - z * sin_x;
        let z = z * cos_x + p.y * sin_x;
        Vec3::new(x, y, z)
    }

    /// Rotate, then perspective-project onto the screen.
    #[must_use]
    pub fn project(&self, p: Vec3) -> ProjectedPoint {
        let r = self.rotate(p);
        let d = self.camera_distance;
        let perspective = d / (d + r.z).max(MIN_PERSPECTIVE_DEPTH);
        let scale = self.base_scale * perspective;
        ProjectedPoint {
            screen: self.center + Vec2::new(r.x, r.y) * scale,
            scale,
            depth: r.z,
        }
    }
}
