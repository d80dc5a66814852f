//! Skin joint nodes and inverse bind matrices

use crate::buffer::{AccessorIndex, BufferBuilder};
use glam::Mat4;

/// Accessor indices for skeleton data
#[derive(Debug, Clone)]
pub struct SkeletonAccessors {
    pub inverse_bind_matrices: AccessorIndex,
}

/// Builder for skeleton data
pub struct SkeletonBuilder {
    inverse_bind_matrices: Vec<[f32; 16]>,
}

impl SkeletonBuilder {
    pub fn new() -> Self {
        Self {
            inverse_bind_matrices: Vec::new(),
        }
    }

    /// Set all inverse bind matrices at once, in skin joint order
    pub fn inverse_bind_matrices(mut self, matrices: &[Mat4]) -> Self {
        self.inverse_bind_matrices = matrices.iter().map(Mat4::to_cols_array).collect();
        self
    }

    /// Build and pack into buffer
    pub fn build(self, buffer: &mut BufferBuilder) -> SkeletonAccessors {
        let inverse_bind_matrices =
            buffer.pack_mat4("inverseBindMatrices", &self.inverse_bind_matrices);
        SkeletonAccessors {
            inverse_bind_matrices,
        }
    }
}

impl Default for SkeletonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
