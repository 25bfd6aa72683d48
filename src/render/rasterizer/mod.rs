//! Rasterization of transformed edge and triangle buffers.
//!
//! - [`line`]: Bresenham segments with interpolated depth
//! - [`scanline`]: back-face culled, flat-lit scanline triangle fill
//!
//! Both emit pixels through the [`Plot`](super::screen::Plot) trait only.

pub mod line;
pub mod scanline;

pub use line::{draw_line, draw_lines};
pub use scanline::{calculate_normal, draw_polygons, draw_scanline, scanline_convert};
