//! Render configuration.
//!
//! Every field has a default matching the classic 500×500 white canvas with
//! black lines, one white light and a dull gray material.

use crate::colors::{Color, BLACK, WHITE};
use crate::light::{Material, SceneLighting};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;

/// Samples per revolution for spheres and tori and segments per curve.
pub const DEFAULT_STEP: usize = 100;

/// Directory animation frames are written to.
pub const DEFAULT_ANIMATION_DIR: &str = "anim";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub step: usize,
    pub background: Color,
    pub line_color: Color,
    /// Ambient color, light and view direction used for every polygon.
    pub lighting: SceneLighting,
    /// Used for shapes that name no material, or an unknown one.
    pub material: Material,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            step: DEFAULT_STEP,
            background: WHITE,
            line_color: BLACK,
            lighting: SceneLighting::default(),
            material: Material::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}
