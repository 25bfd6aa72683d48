//! Pixel and depth storage.
//!
//! [`Plot`] is the only contract the rasterizers depend on. [`Screen`] is the
//! owned implementation used by the engine: an RGB color buffer plus a depth
//! buffer, saved to disk through the `image` crate.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::colors::Color;
use crate::error::RenderError;

/// Receives every pixel the rasterizers produce.
///
/// Implementations perform the depth test: larger depth is closer to the
/// viewer, and a pixel whose depth is greater than or equal to the stored one
/// replaces it (the most recent write wins a tie).
pub trait Plot {
    fn plot(&mut self, x: i32, y: i32, depth: f64, color: Color);

    /// Width and height of the drawable area, when it has one.
    ///
    /// Rasterizers skip work outside `[0, width) × [0, height)` when this
    /// returns `Some`.
    fn bounds(&self) -> Option<(i32, i32)> {
        None
    }
}

/// Color and depth buffers for one frame.
///
/// Row `y = 0` is the bottom of the saved image.
pub struct Screen {
    color_buffer: Vec<Color>,
    depth_buffer: Vec<f64>,
    width: u32,
    height: u32,
    background: Color,
}

impl Screen {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![background; size],
            // -inf = infinitely far away
            depth_buffer: vec![f64::NEG_INFINITY; size],
            width,
            height,
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to the background color and every depth to far.
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background);
        self.depth_buffer.fill(f64::NEG_INFINITY);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let row = self.height - 1 - y as u32;
            Some((row * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.color_buffer[i])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f64> {
        self.index(x, y).map(|i| self.depth_buffer[i])
    }

    /// Pixels in ARGB8888, top row first.
    pub fn to_argb(&self) -> Vec<u32> {
        self.color_buffer.iter().map(|c| c.pack_argb()).collect()
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, row| {
            Rgb(self.color_buffer[(row * self.width + x) as usize].to_rgb())
        })
    }

    /// Encodes the frame to `path`; the format follows the extension.
    /// Missing parent directories are created.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.to_image().save(path)?;
        Ok(())
    }
}

impl Plot for Screen {
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    fn plot(&mut self, x: i32, y: i32, depth: f64, color: Color) {
        if let Some(idx) = self.index(x, y) {
            if depth >= self.depth_buffer[idx] {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
            }
        }
    }

    fn bounds(&self) -> Option<(i32, i32)> {
        Some((self.width as i32, self.height as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    #[test]
    fn closer_pixel_wins() {
        let mut screen = Screen::new(4, 4, WHITE);
        screen.plot(1, 1, 5.0, Color::new(255, 0, 0));
        screen.plot(1, 1, 2.0, Color::new(0, 255, 0));
        assert_eq!(screen.get_pixel(1, 1), Some(Color::new(255, 0, 0)));
        screen.plot(1, 1, 9.0, Color::new(0, 0, 255));
        assert_eq!(screen.get_pixel(1, 1), Some(Color::new(0, 0, 255)));
        assert_eq!(screen.get_depth(1, 1), Some(9.0));
    }

    #[test]
    fn equal_depth_last_writer_wins() {
        let mut screen = Screen::new(2, 2, WHITE);
        screen.plot(0, 0, 1.0, BLACK);
        screen.plot(0, 0, 1.0, Color::new(10, 20, 30));
        assert_eq!(screen.get_pixel(0, 0), Some(Color::new(10, 20, 30)));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut screen = Screen::new(2, 2, WHITE);
        screen.plot(-1, 0, 0.0, BLACK);
        screen.plot(0, 2, 0.0, BLACK);
        assert_eq!(screen.get_pixel(-1, 0), None);
        assert!(screen.color_buffer.iter().all(|&c| c == WHITE));
    }

    #[test]
    fn y_zero_is_bottom_image_row() {
        let mut screen = Screen::new(3, 3, WHITE);
        screen.plot(0, 0, 0.0, BLACK);
        let image = screen.to_image();
        assert_eq!(image.get_pixel(0, 2), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn bounds_report_size() {
        let screen = Screen::new(5, 3, WHITE);
        assert_eq!(screen.bounds(), Some((5, 3)));
    }

    #[test]
    fn clear_resets_color_and_depth() {
        let mut screen = Screen::new(2, 2, WHITE);
        screen.plot(1, 1, 3.0, BLACK);
        screen.clear();
        assert_eq!(screen.get_pixel(1, 1), Some(WHITE));
        assert_eq!(screen.get_depth(1, 1), Some(f64::NEG_INFINITY));
    }
}
