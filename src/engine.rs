//! Command driver.
//!
//! The [`Engine`] executes an already-decoded list of [`Command`]s for one
//! frame: transforms accumulate on a [`TransformStack`], shapes are generated
//! into a single scratch buffer, moved into place by the top of the stack and
//! rasterized into the owned [`Screen`].
//!
//! Knobs are resolved through a lookup function passed to [`Engine::run`],
//! so the same command list renders every frame of an animation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::animation::Animation;
use crate::colors::Color;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::light::{Material, PointLight, SceneLighting};
use crate::matrix::Matrix;
use crate::mesh;
use crate::render::{draw_lines, draw_polygons, Screen};
use crate::shapes;
use crate::stack::TransformStack;
use crate::transform::{self, Axis, CurveKind};

/// One decoded scene operation.
///
/// `knob` names a value that multiplies the transform's parameters;
/// `material` names a reflection table registered with
/// [`Engine::define_material`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Push,
    Pop,
    Move {
        x: f64,
        y: f64,
        z: f64,
        knob: Option<String>,
    },
    Scale {
        x: f64,
        y: f64,
        z: f64,
        knob: Option<String>,
    },
    Rotate {
        axis: Axis,
        degrees: f64,
        knob: Option<String>,
    },
    Box {
        corner: [f64; 3],
        size: [f64; 3],
        material: Option<String>,
    },
    Sphere {
        center: [f64; 3],
        radius: f64,
        material: Option<String>,
    },
    Torus {
        center: [f64; 3],
        /// Tube radius.
        r1: f64,
        /// Distance from the center to the middle of the tube.
        r2: f64,
        material: Option<String>,
    },
    Line {
        p0: [f64; 3],
        p1: [f64; 3],
    },
    Circle {
        center: [f64; 3],
        radius: f64,
    },
    Curve {
        kind: CurveKind,
        points: [[f64; 2]; 4],
    },
    Mesh {
        path: PathBuf,
        material: Option<String>,
    },
    Ambient(Color),
    Light(PointLight),
    Save(PathBuf),
    Display,
}

/// Knob lookup for the current frame.
pub type Knobs<'a> = &'a dyn Fn(&str) -> Option<f64>;

/// Lookup for scenes without knobs.
pub fn no_knobs(_: &str) -> Option<f64> {
    None
}

pub struct Engine {
    config: RenderConfig,
    screen: Screen,
    stack: TransformStack,
    scratch: Matrix,
    lighting: SceneLighting,
    materials: HashMap<String, Material>,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            screen: Screen::new(config.width, config.height, config.background),
            stack: TransformStack::new(),
            scratch: Matrix::new(shapes_capacity(config.step)),
            lighting: config.lighting,
            materials: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The most recently rendered frame.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Registers reflection constants under `name`, replacing any previous
    /// entry.
    pub fn define_material(&mut self, name: impl Into<String>, material: Material) {
        self.materials.insert(name.into(), material);
    }

    /// Renders one still frame.
    ///
    /// `Save` and `Display` commands act on the frame as drawn so far.
    pub fn run(&mut self, commands: &[Command], knobs: Knobs) -> Result<(), RenderError> {
        self.render_frame(commands, knobs, false)
    }

    /// Renders every frame of `animation` into `dir` and returns the written
    /// paths in frame order.
    ///
    /// `Save` and `Display` commands are skipped; each frame is saved under
    /// [`Animation::frame_path`] instead.
    pub fn render_animation<P: AsRef<Path>>(
        &mut self,
        commands: &[Command],
        animation: &Animation,
        dir: P,
    ) -> Result<Vec<PathBuf>, RenderError> {
        let dir = dir.as_ref();
        let mut written = Vec::with_capacity(animation.frames());

        for (frame, table) in animation.knob_tables().into_iter().enumerate() {
            let lookup = |name: &str| table.get(name).copied();
            self.render_frame(commands, &lookup, true)?;

            let path = animation.frame_path(dir, frame);
            self.screen.save(&path)?;
            info!("saved frame {} to {}", frame, path.display());
            written.push(path);
        }
        Ok(written)
    }

    fn render_frame(
        &mut self,
        commands: &[Command],
        knobs: Knobs,
        animating: bool,
    ) -> Result<(), RenderError> {
        self.stack = TransformStack::new();
        self.screen.clear();
        self.scratch.clear();
        self.lighting = self.config.lighting;

        for command in commands {
            debug!("{:?}", command);
            let result = self.execute(command, knobs, animating);
            self.scratch.clear();

            match result {
                // already reported where they happened
                Err(RenderError::InsufficientGeometry { .. }) | Err(RenderError::StackUnderflow) => {}
                other => other?,
            }
        }
        Ok(())
    }

    fn execute(
        &mut self,
        command: &Command,
        knobs: Knobs,
        animating: bool,
    ) -> Result<(), RenderError> {
        match command {
            Command::Push => self.stack.push(),
            Command::Pop => self.stack.pop()?,
            Command::Move { x, y, z, knob } => {
                let k = knob_value(knob.as_deref(), knobs);
                self.stack.compose(transform::translate(x * k, y * k, z * k));
            }
            Command::Scale { x, y, z, knob } => {
                let k = knob_value(knob.as_deref(), knobs);
                self.stack.compose(transform::scale(x * k, y * k, z * k));
            }
            Command::Rotate {
                axis,
                degrees,
                knob,
            } => {
                let k = knob_value(knob.as_deref(), knobs);
                self.stack
                    .compose(transform::rotate(*axis, degrees.to_radians() * k));
            }
            Command::Box {
                corner,
                size,
                material,
            } => {
                shapes::add_box(
                    &mut self.scratch,
                    corner[0],
                    corner[1],
                    corner[2],
                    size[0],
                    size[1],
                    size[2],
                );
                self.fill(material.as_deref())?;
            }
            Command::Sphere {
                center,
                radius,
                material,
            } => {
                let [cx, cy, cz] = *center;
                shapes::add_sphere(&mut self.scratch, cx, cy, cz, *radius, self.config.step);
                self.fill(material.as_deref())?;
            }
            Command::Torus {
                center,
                r1,
                r2,
                material,
            } => {
                let [cx, cy, cz] = *center;
                shapes::add_torus(&mut self.scratch, cx, cy, cz, *r1, *r2, self.config.step);
                self.fill(material.as_deref())?;
            }
            Command::Mesh { path, material } => {
                mesh::add_mesh(&mut self.scratch, path)?;
                self.fill(material.as_deref())?;
            }
            Command::Line { p0, p1 } => {
                shapes::add_edge(&mut self.scratch, p0[0], p0[1], p0[2], p1[0], p1[1], p1[2]);
                self.stroke()?;
            }
            Command::Circle { center, radius } => {
                let [cx, cy, cz] = *center;
                shapes::add_circle(&mut self.scratch, cx, cy, cz, *radius, self.config.step);
                self.stroke()?;
            }
            Command::Curve { kind, points } => {
                let [[x0, y0], [x1, y1], [x2, y2], [x3, y3]] = *points;
                shapes::add_curve(
                    &mut self.scratch,
                    x0,
                    y0,
                    x1,
                    y1,
                    x2,
                    y2,
                    x3,
                    y3,
                    self.config.step,
                    *kind,
                );
                self.stroke()?;
            }
            Command::Ambient(color) => self.lighting.ambient = *color,
            Command::Light(light) => self.lighting.light = *light,
            Command::Save(path) => {
                if animating {
                    debug!("skipping save to {} while animating", path.display());
                } else {
                    self.screen.save(path)?;
                    info!("saved {}", path.display());
                }
            }
            Command::Display => {
                if !animating {
                    self.display()?;
                }
            }
        }
        Ok(())
    }

    /// Moves the scratch triangles into place and fills them.
    fn fill(&mut self, material: Option<&str>) -> Result<(), RenderError> {
        let material = self.material(material);
        self.stack.peek().multiply(&mut self.scratch);
        draw_polygons(&self.scratch, &mut self.screen, &self.lighting, &material)?;
        Ok(())
    }

    /// Moves the scratch edges into place and draws them.
    fn stroke(&mut self) -> Result<(), RenderError> {
        self.stack.peek().multiply(&mut self.scratch);
        draw_lines(&self.scratch, &mut self.screen, self.config.line_color)?;
        Ok(())
    }

    fn material(&self, name: Option<&str>) -> Material {
        match name {
            None => self.config.material,
            Some(name) => match self.materials.get(name) {
                Some(material) => *material,
                None => {
                    warn!("unknown material '{}', using the default", name);
                    self.config.material
                }
            },
        }
    }

    #[cfg(feature = "display")]
    fn display(&self) -> Result<(), RenderError> {
        crate::window::show(&self.screen)
    }

    #[cfg(not(feature = "display"))]
    fn display(&self) -> Result<(), RenderError> {
        warn!("built without the display feature, ignoring display");
        Ok(())
    }
}

/// Factor applied to a transform: the knob's value, or 1 when there is none.
fn knob_value(knob: Option<&str>, knobs: Knobs) -> f64 {
    match knob {
        None => 1.0,
        Some(name) => knobs(name).unwrap_or_else(|| {
            debug!("knob '{}' has no value, using 1", name);
            1.0
        }),
    }
}

/// Columns for a sphere or torus at `step`, so most frames never regrow the
/// scratch buffer.
fn shapes_capacity(step: usize) -> usize {
    6 * step * step
}
