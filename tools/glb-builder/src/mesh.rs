//! Skinned mesh primitive construction

use crate::buffer::{AccessorIndex, BufferBuilder};
use gltf_json as json;

/// Accessor indices for a skinned mesh primitive
#[derive(Debug, Clone)]
pub struct MeshAccessors {
    pub positions: AccessorIndex,
    pub joints: Option<AccessorIndex>,
    pub weights: Option<AccessorIndex>,
    pub indices: Option<AccessorIndex>,
}

/// Builder for mesh data
pub struct MeshBuilder {
    positions: Vec<[f32; 3]>,
    joints: Option<Vec<[u8; 4]>>,
    weights: Option<Vec<[f32; 4]>>,
    indices: Option<Vec<u32>>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            joints: None,
            weights: None,
            indices: None,
        }
    }

    /// Set positions (required)
    pub fn positions(mut self, positions: &[[f32; 3]]) -> Self {
        self.positions = positions.to_vec();
        self
    }

    /// Set joint indices (optional, for skinned meshes)
    pub fn joints(mut self, joints: &[[u8; 4]]) -> Self {
        self.joints = Some(joints.to_vec());
        self
    }

    /// Set joint weights (optional, for skinned meshes)
    pub fn weights(mut self, weights: &[[f32; 4]]) -> Self {
        self.weights = Some(weights.to_vec());
        self
    }

    /// Set triangle indices (optional)
    pub fn indices(mut self, indices: &[u32]) -> Self {
        self.indices = Some(indices.to_vec());
        self
    }

    /// Vertex count of the positions set so far
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Build and pack into buffer
    pub fn build(self, buffer: &mut BufferBuilder) -> MeshAccessors {
        let positions = buffer.pack_positions("vertsAccessor", &self.positions);
        let indices = self
            .indices
            .as_ref()
            .map(|i| buffer.pack_indices_u32("indicesAccessor", i));
        let joints = self
            .joints
            .as_ref()
            .map(|j| buffer.pack_joints("jointAssignments", j));
        let weights = self.weights.as_ref().map(|w| {
            buffer.pack_vec4("weights", w, Some(json::buffer::Target::ArrayBuffer))
        });

        MeshAccessors {
            positions,
            joints,
            weights,
            indices,
        }
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}
