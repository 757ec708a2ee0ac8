use glam::Vec2;

use crate::options::CameraOptions;

/// Per-viewer camera: pitch/yaw rotation and a clamped zoom level.
///
/// Rotation is deliberately kept when the displayed structure changes; only
/// the geometry is swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// `x` = pitch about the X axis, `y` = yaw about the Y axis (radians).
    rotation: Vec2,
    zoom: f32,
    zoom_step: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl CameraState {
    /// Camera at the configured initial rotation and zoom 1.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            rotation: Vec2::from_array(options.initial_rotation),
            zoom: 1.0,
            zoom_step: options.zoom_step,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
        }
    }

    /// Current rotation (`x` = pitch, `y` = yaw).
    #[must_use]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Add to pitch and yaw.
    pub fn rotate(&mut self, pitch: f32, yaw: f32) {
        self.rotation += Vec2::new(pitch, yaw);
    }

    /// Ambient turntable rotation, applied once per frame while idle.
    pub fn tick_auto_rotate(&mut self, yaw_step: f32) {
        self.rotation.y += yaw_step;
    }

    /// One zoom step in, clamped to the maximum.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + self.zoom_step).min(self.max_zoom);
    }

    /// One zoom step out, clamped to the minimum.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - self.zoom_step).max(self.min_zoom);
    }

    /// Set zoom directly, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Re-read zoom limits from options, keeping rotation.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.zoom_step = options.zoom_step;
        self.min_zoom = options.min_zoom;
        self.max_zoom = options.max_zoom;
        self.set_zoom(self.zoom);
    }
}
