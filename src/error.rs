//! Error type shared by the rendering pipeline.

use std::fmt;

/// Everything that can go wrong while building or rendering a frame.
///
/// `InsufficientGeometry` and `StackUnderflow` are reported and skipped by the
/// engine; the remaining variants abort the current render.
#[derive(Debug)]
pub enum RenderError {
    /// A draw call received fewer vertices than one primitive needs.
    InsufficientGeometry { needed: usize, found: usize },
    /// `pop` was called with only the identity sentinel on the stack.
    StackUnderflow,
    /// A `vary` was declared but the animation has no frame count.
    VaryWithoutFrames,
    /// A `vary` range does not fit inside the animation.
    InvalidVary {
        knob: String,
        start_frame: usize,
        end_frame: usize,
        frames: usize,
    },
    Io(std::io::Error),
    Image(image::ImageError),
    Mesh(tobj::LoadError),
    Display(String),
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}

impl From<tobj::LoadError> for RenderError {
    fn from(e: tobj::LoadError) -> Self {
        RenderError::Mesh(e)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InsufficientGeometry { needed, found } => write!(
                f,
                "need at least {} points to draw, buffer holds {}",
                needed, found
            ),
            RenderError::StackUnderflow => {
                write!(f, "cannot pop the identity entry of the transform stack")
            }
            RenderError::VaryWithoutFrames => {
                write!(f, "vary is set but the number of frames is not")
            }
            RenderError::InvalidVary {
                knob,
                start_frame,
                end_frame,
                frames,
            } => write!(
                f,
                "vary for knob '{}' spans frames {}..={} outside of 0..{}",
                knob, start_frame, end_frame, frames
            ),
            RenderError::Io(e) => write!(f, "IO error: {}", e),
            RenderError::Image(e) => write!(f, "Image error: {}", e),
            RenderError::Mesh(e) => write!(f, "Mesh load error: {}", e),
            RenderError::Display(e) => write!(f, "Display error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Image(e) => Some(e),
            RenderError::Mesh(e) => Some(e),
            _ => None,
        }
    }
}
