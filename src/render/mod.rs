//! Rasterizers and the pixel buffer they draw into.

pub mod rasterizer;
pub mod screen;

pub use rasterizer::{draw_line, draw_lines, draw_polygons, scanline_convert};
pub use screen::{Plot, Screen};

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::BTreeSet;

    use super::Plot;
    use crate::colors::Color;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Plotted {
        pub x: i32,
        pub y: i32,
        pub depth: f64,
        pub color: Color,
    }

    /// Records every plot call in order, without a depth test.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub pixels: Vec<Plotted>,
        pub bounds: Option<(i32, i32)>,
    }

    impl Recorder {
        pub fn bounded(width: i32, height: i32) -> Self {
            Self {
                pixels: Vec::new(),
                bounds: Some((width, height)),
            }
        }

        pub fn pixel_set(&self) -> BTreeSet<(i32, i32)> {
            self.pixels.iter().map(|p| (p.x, p.y)).collect()
        }
    }

    impl Plot for Recorder {
        fn plot(&mut self, x: i32, y: i32, depth: f64, color: Color) {
            self.pixels.push(Plotted { x, y, depth, color });
        }

        fn bounds(&self) -> Option<(i32, i32)> {
            self.bounds
        }
    }
}
