use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Lens;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Radians of rotation per CSS pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Yaw added per frame while not dragging.
    #[schemars(title = "Auto-Rotate Step", range(min = 0.0, max = 0.02), extend("step" = 0.001))]
    pub auto_rotate_step: f32,
    /// Zoom change per zoom action.
    #[schemars(title = "Zoom Step", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub zoom_step: f32,
    /// Smallest zoom factor.
    #[schemars(title = "Min Zoom", range(min = 0.1, max = 1.0), extend("step" = 0.1))]
    pub min_zoom: f32,
    /// Largest zoom factor.
    #[schemars(title = "Max Zoom", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub max_zoom: f32,
    /// Initial (pitch, yaw) in radians.
    #[schemars(skip)]
    pub initial_rotation: [f32; 2],
    /// Eye distance for the structure view.
    #[schemars(skip)]
    pub structure_distance: f32,
    /// Eye distance for the pocket view.
    #[schemars(skip)]
    pub pocket_distance: f32,
    /// Fraction of the shorter viewport side the geometry radius fills at
    /// zoom 1.
    #[schemars(title = "Fit Fraction", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub fit_fraction: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.01,
            auto_rotate_step: 0.003,
            zoom_step: 0.2,
            min_zoom: 0.4,
            max_zoom: 3.0,
            initial_rotation: [0.5, 0.5],
            structure_distance: 600.0,
            pocket_distance: 500.0,
            fit_fraction: 0.45,
        }
    }
}

impl CameraOptions {
    /// Lens for the protein structure view.
    #[must_use]
    pub fn structure_lens(&self) -> Lens {
        Lens {
            camera_distance: self.structure_distance,
            fit_fraction: self.fit_fraction,
        }
    }

    /// Lens for the binding-pocket view.
    #[must_use]
    pub fn pocket_lens(&self) -> Lens {
        Lens {
            camera_distance: self.pocket_distance,
            fit_fraction: self.fit_fraction,
        }
    }
}
