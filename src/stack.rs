//! Transform stack for hierarchical modeling.
//!
//! The top of the stack is the accumulated transform for the current nesting
//! depth. The bottom entry is the identity and is never popped.

use log::warn;

use crate::error::RenderError;
use crate::matrix::Matrix;

/// LIFO of owned 4×4 transforms, never empty.
#[derive(Debug, Clone)]
pub struct TransformStack {
    entries: Vec<Matrix>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Creates a stack holding only the identity sentinel.
    pub fn new() -> Self {
        Self {
            entries: vec![Matrix::identity()],
        }
    }

    /// Pushes a deep copy of the current top.
    pub fn push(&mut self) {
        let top = self.peek().clone();
        self.entries.push(top);
    }

    /// Drops the current top, exposing the previous one.
    ///
    /// Popping the identity sentinel is rejected with
    /// [`RenderError::StackUnderflow`] and leaves the stack untouched.
    pub fn pop(&mut self) -> Result<(), RenderError> {
        if self.entries.len() == 1 {
            warn!("pop with only the identity transform on the stack, ignoring");
            return Err(RenderError::StackUnderflow);
        }
        self.entries.pop();
        Ok(())
    }

    /// Borrows the current top.
    pub fn peek(&self) -> &Matrix {
        // The sentinel is never removed, so the stack is never empty.
        &self.entries[self.entries.len() - 1]
    }

    /// Right-multiplies `transform` into the current top: `top = top · transform`.
    ///
    /// The newest transform therefore applies to geometry first, before every
    /// transform that was composed earlier at this or a parent level.
    pub fn compose(&mut self, mut transform: Matrix) {
        let last = self.entries.len() - 1;
        self.entries[last].multiply(&mut transform);
        self.entries[last].copy_from(&transform);
    }

    /// Number of entries including the identity sentinel.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
