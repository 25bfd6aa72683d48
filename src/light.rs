//! Flat Phong lighting for a single triangle.
//!
//! One ambient color and one light are combined with a material's per-channel
//! reflection coefficients:
//!
//! ```text
//! I = ka·A + kd·L·max(0, N·L̂) + ks·L·max(0, R·V)^4
//! R = normalize(2·N·max(0, N·V) − L̂)
//! ```
//!
//! The light is a direction only, not a position. Each channel of the sum is
//! clamped to `[0, 255]`.

use crate::colors::{Color, WHITE};
use crate::math::vec3::Vec3;

/// Exponent applied to the specular term.
pub const SPECULAR_EXPONENT: i32 = 4;

/// Direction toward the viewer.
///
/// There is no projection step: screen x/y are world x/y and the camera looks
/// down −z, so a surface faces the viewer when its normal has positive z.
pub const VIEW_DIRECTION: Vec3 = Vec3::FORWARD;

/// Default ambient light level.
pub const DEFAULT_AMBIENT: Color = Color::gray(50);

/// A light shining from `direction` with the given color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Vector pointing toward the light; normalized on use.
    pub direction: Vec3,
    pub color: Color,
}

impl PointLight {
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self { direction, color }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::new(0.5, 0.75, 1.0), WHITE)
    }
}

/// Per-channel reflection coefficients, indexed red, green, blue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: [f64; 3],
    pub diffuse: [f64; 3],
    pub specular: [f64; 3],
}

impl Material {
    /// A material reflecting every channel equally.
    pub fn uniform(ambient: f64, diffuse: f64, specular: f64) -> Self {
        Self {
            ambient: [ambient; 3],
            diffuse: [diffuse; 3],
            specular: [specular; 3],
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::uniform(0.1, 0.5, 0.5)
    }
}

/// The lighting environment shared by every polygon in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLighting {
    pub ambient: Color,
    pub light: PointLight,
    pub view: Vec3,
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self {
            ambient: DEFAULT_AMBIENT,
            light: PointLight::default(),
            view: VIEW_DIRECTION,
        }
    }
}

impl SceneLighting {
    /// Flat color of a surface with the given normal.
    pub fn shade(&self, normal: Vec3, material: &Material) -> Color {
        get_lighting(normal, self.view, self.ambient, &self.light, material)
    }
}

/// Computes the flat color of a surface with normal `normal` seen along `view`.
///
/// `normal`, `view` and the light direction need not be unit length; they are
/// normalized here.
pub fn get_lighting(
    normal: Vec3,
    view: Vec3,
    ambient: Color,
    light: &PointLight,
    material: &Material,
) -> Color {
    let normal = normal.normalize();
    let light_dir = light.direction.normalize();
    let view = view.normalize();

    let diffuse_factor = normal.dot(light_dir).max(0.0);

    let cos_theta = normal.dot(view).max(0.0);
    let reflection = (normal * (2.0 * cos_theta) - light_dir).normalize();
    let specular_factor = reflection
        .dot(view)
        .max(0.0)
        .powi(SPECULAR_EXPONENT);

    // Each term is truncated to an integer color before the sum.
    let channel = |c: usize| -> i32 {
        let a = material.ambient[c] * ambient.channel(c) as f64;
        let d = material.diffuse[c] * light.color.channel(c) as f64 * diffuse_factor;
        let s = material.specular[c] * light.color.channel(c) as f64 * specular_factor;
        a as i32 + d as i32 + s as i32
    };

    Color::new(channel(0), channel(1), channel(2)).limit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(c: Color) -> bool {
        [c.red, c.green, c.blue]
            .iter()
            .all(|v| (0..=255).contains(v))
    }

    #[test]
    fn test_direct_illumination() {
        // Light, view and normal all along +Z: full diffuse and specular
        let light = PointLight::new(Vec3::FORWARD, WHITE);
        let c = get_lighting(
            Vec3::FORWARD,
            Vec3::FORWARD,
            Color::gray(50),
            &light,
            &Material::default(),
        );
        // 5 ambient + 127.5 diffuse + 127.5 specular
        assert_eq!(c, Color::gray(255));
    }

    #[test]
    fn test_no_illumination() {
        // Light behind the surface, viewed edge-on: only ambient remains
        let light = PointLight::new(Vec3::new(0.0, 0.0, -1.0), WHITE);
        let c = get_lighting(
            Vec3::FORWARD,
            Vec3::new(1.0, 0.0, 0.0),
            Color::gray(50),
            &light,
            &Material::default(),
        );
        assert_eq!(c, Color::gray(5));
    }

    #[test]
    fn test_default_scene_color() {
        let c = get_lighting(
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::FORWARD,
            Color::gray(50),
            &PointLight::default(),
            &Material::default(),
        );
        // ambient 5, diffuse 94.7 -> 94, specular 77.4 -> 77
        assert_eq!(c, Color::gray(176));
    }

    #[test]
    fn terms_are_truncated_before_summing() {
        // three terms of 30.6 each: 90 once truncated, 91 if summed first
        let light = PointLight::new(Vec3::FORWARD, Color::gray(51));
        let material = Material::uniform(0.6, 0.6, 0.6);
        let c = get_lighting(Vec3::FORWARD, Vec3::FORWARD, Color::gray(51), &light, &material);
        assert_eq!(c, Color::gray(90));
    }

    #[test]
    fn strong_ambient_is_clamped() {
        let material = Material::uniform(1.0, 0.0, 0.0);
        let c = get_lighting(
            Vec3::new(0.3, -2.0, 0.1),
            Vec3::FORWARD,
            Color::gray(300),
            &PointLight::default(),
            &material,
        );
        assert_eq!(c, Color::gray(255));
    }

    #[test]
    fn zero_coefficients_give_black() {
        let material = Material::uniform(0.0, 0.0, 0.0);
        let c = get_lighting(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-1.0, 0.5, 2.0),
            Color::gray(300),
            &PointLight::default(),
            &material,
        );
        assert_eq!(c, Color::gray(0));
    }

    #[test]
    fn output_stays_in_range_for_arbitrary_inputs() {
        let hot = PointLight::new(Vec3::new(-3.0, 1.0, 0.2), Color::new(900, -40, 255));
        let material = Material {
            ambient: [2.0, -1.0, 0.3],
            diffuse: [1.5, 0.5, -2.0],
            specular: [3.0, 1.0, 0.0],
        };
        for normal in [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, -1.0, 0.5),
            Vec3::new(-2.0, 4.0, -1.0),
            Vec3::ZERO,
        ] {
            let c = get_lighting(normal, Vec3::FORWARD, Color::new(300, -5, 40), &hot, &material);
            assert!(in_range(c), "{:?} out of range", c);
        }
    }

    #[test]
    fn color_channels_use_their_own_coefficients() {
        let material = Material {
            ambient: [1.0, 0.5, 0.0],
            diffuse: [0.0; 3],
            specular: [0.0; 3],
        };
        let c = get_lighting(
            Vec3::FORWARD,
            Vec3::FORWARD,
            Color::new(100, 100, 100),
            &PointLight::default(),
            &material,
        );
        assert_eq!(c, Color::new(100, 50, 0));
    }
}
