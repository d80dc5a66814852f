//! Low-level buffer packing with automatic alignment and accessor creation

use crate::utils::{align_buffer, compute_bounds};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Layout of one packed accessor, shared by all `pack_*` methods
struct AccessorLayout<'a> {
    name: &'a str,
    count: usize,
    component: json::accessor::ComponentType,
    type_: json::accessor::Type,
    target: Option<json::buffer::Target>,
    min: Option<json::Value>,
    max: Option<json::Value>,
}

/// Builder for the single binary buffer of a GLB, with named accessors
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    /// Create a new empty buffer builder
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Get the current accessor count
    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// Get the binary buffer data
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the buffer views
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// Get the accessors
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Pack vertex positions (Vec3<f32>) with the min/max bounds glTF requires
    pub fn pack_positions(&mut self, name: &str, positions: &[[f32; 3]]) -> AccessorIndex {
        let offset = self.buffer.len();
        self.buffer
            .extend_from_slice(bytemuck::cast_slice::<[f32; 3], u8>(positions));

        let (min, max) = compute_bounds(positions);
        self.finish(
            offset,
            AccessorLayout {
                name,
                count: positions.len(),
                component: json::accessor::ComponentType::F32,
                type_: json::accessor::Type::Vec3,
                target: Some(json::buffer::Target::ArrayBuffer),
                min: Some(json::Value::Array(
                    min.into_iter().map(json::Value::from).collect(),
                )),
                max: Some(json::Value::Array(
                    max.into_iter().map(json::Value::from).collect(),
                )),
            },
        )
    }

    /// Pack Vec4<f32> data (skin weights, rotation keyframes)
    pub fn pack_vec4(
        &mut self,
        name: &str,
        data: &[[f32; 4]],
        target: Option<json::buffer::Target>,
    ) -> AccessorIndex {
        let offset = self.buffer.len();
        self.buffer
            .extend_from_slice(bytemuck::cast_slice::<[f32; 4], u8>(data));

        self.finish(
            offset,
            AccessorLayout {
                name,
                count: data.len(),
                component: json::accessor::ComponentType::F32,
                type_: json::accessor::Type::Vec4,
                target,
                min: None,
                max: None,
            },
        )
    }

    /// Pack joint indices (Vec4<u8>)
    pub fn pack_joints(&mut self, name: &str, joints: &[[u8; 4]]) -> AccessorIndex {
        let offset = self.buffer.len();
        for joint in joints {
            self.buffer.extend_from_slice(joint);
        }

        self.finish(
            offset,
            AccessorLayout {
                name,
                count: joints.len(),
                component: json::accessor::ComponentType::U8,
                type_: json::accessor::Type::Vec4,
                target: Some(json::buffer::Target::ArrayBuffer),
                min: None,
                max: None,
            },
        )
    }

    /// Pack u32 triangle indices
    pub fn pack_indices_u32(&mut self, name: &str, indices: &[u32]) -> AccessorIndex {
        let offset = self.buffer.len();
        for idx in indices {
            self.buffer.extend_from_slice(&idx.to_le_bytes());
        }

        self.finish(
            offset,
            AccessorLayout {
                name,
                count: indices.len(),
                component: json::accessor::ComponentType::U32,
                type_: json::accessor::Type::Scalar,
                target: Some(json::buffer::Target::ElementArrayBuffer),
                min: None,
                max: None,
            },
        )
    }

    /// Pack column-major Mat4 data (inverse bind matrices)
    pub fn pack_mat4(&mut self, name: &str, matrices: &[[f32; 16]]) -> AccessorIndex {
        let offset = self.buffer.len();
        for mat in matrices {
            for f in mat {
                self.buffer.extend_from_slice(&f.to_le_bytes());
            }
        }

        self.finish(
            offset,
            AccessorLayout {
                name,
                count: matrices.len(),
                component: json::accessor::ComponentType::F32,
                type_: json::accessor::Type::Mat4,
                target: None,
                min: None,
                max: None,
            },
        )
    }

    /// Pack scalar f32 data with min/max (animation times)
    pub fn pack_scalars_with_bounds(&mut self, name: &str, scalars: &[f32]) -> AccessorIndex {
        let offset = self.buffer.len();
        for scalar in scalars {
            self.buffer.extend_from_slice(&scalar.to_le_bytes());
        }

        let min_val = scalars.iter().copied().fold(f32::INFINITY, f32::min) as f64;
        let max_val = scalars.iter().copied().fold(f32::NEG_INFINITY, f32::max) as f64;

        self.finish(
            offset,
            AccessorLayout {
                name,
                count: scalars.len(),
                component: json::accessor::ComponentType::F32,
                type_: json::accessor::Type::Scalar,
                target: None,
                min: Some(json::Value::Array(vec![json::Value::from(min_val)])),
                max: Some(json::Value::Array(vec![json::Value::from(max_val)])),
            },
        )
    }

    /// Register the view and accessor for bytes written since `offset`, then realign
    fn finish(&mut self, offset: usize, layout: AccessorLayout<'_>) -> AccessorIndex {
        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: ((self.buffer.len() - offset) as u64).into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: layout.target.map(Valid),
        });

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: layout.count.into(),
            component_type: Valid(json::accessor::GenericComponentType(layout.component)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(layout.type_),
            min: layout.min,
            max: layout.max,
            name: Some(layout.name.to_string()),
            normalized: false,
            sparse: None,
        });

        align_buffer(&mut self.buffer);
        AccessorIndex(accessor_idx)
    }
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}
