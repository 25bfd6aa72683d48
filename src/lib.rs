//! A CPU software rasterizer for procedurally generated solids.
//!
//! Shapes (boxes, spheres, tori, curves, lines, OBJ meshes) are generated into
//! homogeneous 4×N matrices, moved into place by a transform stack and
//! scan-converted into a depth-tested pixel buffer with flat Phong lighting.
//! Projection is orthographic: screen x/y are the transformed x/y.
//!
//! # Quick Start
//!
//! ```ignore
//! use solidraster::prelude::*;
//!
//! let mut engine = Engine::new(RenderConfig::default());
//! engine.run(
//!     &[
//!         Command::Sphere { center: [250.0, 250.0, 0.0], radius: 100.0, material: None },
//!         Command::Save("sphere.png".into()),
//!     ],
//!     &no_knobs,
//! )?;
//! ```

pub mod animation;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod matrix;
pub mod mesh;
pub mod render;
pub mod shapes;
pub mod stack;
pub mod transform;

#[cfg(feature = "display")]
pub mod window;

pub use config::RenderConfig;
pub use engine::{Command, Engine};
pub use error::RenderError;
pub use matrix::Matrix;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use solidraster::prelude::*;
/// ```
pub mod prelude {
    // Driving a scene
    pub use crate::animation::{Animation, Vary};
    pub use crate::config::RenderConfig;
    pub use crate::engine::{no_knobs, Command, Engine};
    pub use crate::error::RenderError;

    // Geometry
    pub use crate::math::vec3::Vec3;
    pub use crate::matrix::Matrix;
    pub use crate::stack::TransformStack;
    pub use crate::transform::{Axis, CurveKind};

    // Shading
    pub use crate::colors::Color;
    pub use crate::light::{Material, PointLight, SceneLighting};

    // Rendering
    pub use crate::render::{Plot, Screen};
}
