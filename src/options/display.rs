use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::renderer::RenderStyle;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// What is drawn and how often.
pub struct DisplayOptions {
    /// Initial structure render style.
    #[schemars(title = "Render Style")]
    pub render_style: RenderStyle,
    /// Draw identifier, name and zoom readout over the frame.
    #[schemars(title = "Show Overlay")]
    pub show_overlay: bool,
    /// Frame cap; 0 renders on every scheduled frame.
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}
