//! GLTF document construction

use crate::animation::rotation_channels;
use crate::{AnimationAccessors, MeshAccessors, SkeletonAccessors};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Description of one scene node before it is added to a document
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    pub name: String,
    pub translation: Option<[f32; 3]>,
    pub children: Vec<u32>,
    pub mesh: Option<u32>,
    pub skin: Option<u32>,
    /// Write identity rotation and unit scale explicitly (joint nodes)
    pub explicit_rest_pose: bool,
}

impl NodeSpec {
    /// A joint node at `translation` with explicit rest rotation/scale
    pub fn joint(name: impl Into<String>, translation: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            translation: Some(translation),
            explicit_rest_pose: true,
            ..Default::default()
        }
    }

    /// A plain grouping node
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: &[u32]) -> Self {
        self.children = children.to_vec();
        self
    }

    pub fn with_mesh(mut self, mesh: u32) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_skin(mut self, skin: u32) -> Self {
        self.skin = Some(skin);
        self
    }

    fn into_json(self) -> json::Node {
        let (rotation, scale) = if self.explicit_rest_pose {
            (
                Some(json::scene::UnitQuaternion([0.0, 0.0, 0.0, 1.0])),
                Some([1.0, 1.0, 1.0]),
            )
        } else {
            (None, None)
        };

        json::Node {
            camera: None,
            children: if self.children.is_empty() {
                None
            } else {
                Some(self.children.into_iter().map(json::Index::new).collect())
            },
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: self.mesh.map(json::Index::new),
            name: Some(self.name),
            rotation,
            scale,
            skin: self.skin.map(json::Index::new),
            translation: self.translation,
            weights: None,
        }
    }
}

/// Builder for complete GLTF documents
pub struct GltfBuilder {
    nodes: Vec<json::Node>,
    meshes: Vec<json::Mesh>,
    skins: Vec<json::Skin>,
    animations: Vec<json::Animation>,
    scenes: Vec<json::Scene>,
    buffer_byte_length: u64,
}

impl GltfBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            meshes: Vec::new(),
            skins: Vec::new(),
            animations: Vec::new(),
            scenes: Vec::new(),
            buffer_byte_length: 0,
        }
    }

    /// Set buffer byte length (required before building)
    pub fn buffer_byte_length(mut self, length: u64) -> Self {
        self.buffer_byte_length = length;
        self
    }

    /// Add a node
    pub fn add_node(mut self, node: NodeSpec) -> Self {
        self.nodes.push(node.into_json());
        self
    }

    /// Add multiple nodes, in index order
    pub fn add_nodes(mut self, nodes: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.nodes.extend(nodes.into_iter().map(NodeSpec::into_json));
        self
    }

    /// Add a mesh with a single triangle-list primitive
    pub fn add_mesh_from_accessors(mut self, name: &str, accessors: &MeshAccessors) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            Valid(json::mesh::Semantic::Positions),
            accessors.positions.as_json_index(),
        );

        if let Some(joints) = accessors.joints {
            attributes.insert(
                Valid(json::mesh::Semantic::Joints(0)),
                joints.as_json_index(),
            );
        }

        if let Some(weights) = accessors.weights {
            attributes.insert(
                Valid(json::mesh::Semantic::Weights(0)),
                weights.as_json_index(),
            );
        }

        let primitive = json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: accessors.indices.map(|i| i.as_json_index()),
            material: None,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        };

        self.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives: vec![primitive],
            weights: None,
        });

        self
    }

    /// Add a skin
    pub fn add_skin(
        mut self,
        name: &str,
        skeleton_root: u32,
        joints: &[u32],
        accessors: &SkeletonAccessors,
    ) -> Self {
        self.skins.push(json::Skin {
            extensions: Default::default(),
            extras: Default::default(),
            inverse_bind_matrices: Some(accessors.inverse_bind_matrices.as_json_index()),
            joints: joints.iter().map(|j| json::Index::new(*j)).collect(),
            name: Some(name.to_string()),
            skeleton: Some(json::Index::new(skeleton_root)),
        });
        self
    }

    /// Add an animation with one linear rotation channel per track
    pub fn add_animation(mut self, name: &str, accessors: &AnimationAccessors) -> Self {
        let (samplers, channels) = rotation_channels(accessors);

        self.animations.push(json::Animation {
            channels,
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            samplers,
        });
        self
    }

    /// Add a scene
    pub fn add_scene(mut self, name: &str, root_nodes: &[u32]) -> Self {
        self.scenes.push(json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            nodes: root_nodes.iter().map(|n| json::Index::new(*n)).collect(),
        });
        self
    }

    /// Build final GLTF Root (requires buffer views and accessors from BufferBuilder)
    pub fn build(
        self,
        buffer_views: &[json::buffer::View],
        accessors: &[json::Accessor],
        generator: &str,
    ) -> json::Root {
        let buffers = vec![json::Buffer {
            byte_length: self.buffer_byte_length.into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: Some("dataBuffer".to_string()),
            uri: None,
        }];

        json::Root {
            accessors: accessors.to_vec(),
            animations: self.animations,
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some(generator.to_string()),
                min_version: None,
                version: "2.0".to_string(),
            },
            buffers,
            buffer_views: buffer_views.to_vec(),
            cameras: Vec::new(),
            extensions: Default::default(),
            extensions_required: Vec::new(),
            extensions_used: Vec::new(),
            extras: Default::default(),
            images: Vec::new(),
            materials: Vec::new(),
            meshes: self.meshes,
            nodes: self.nodes,
            samplers: Vec::new(),
            scene: if self.scenes.is_empty() {
                None
            } else {
                Some(json::Index::new(0))
            },
            scenes: self.scenes,
            skins: self.skins,
            textures: Vec::new(),
        }
    }
}

impl Default for GltfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
