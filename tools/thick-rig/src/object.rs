//! Complete rigged object and its GLB document

use anyhow::Result;
use glam::Vec2;
use glb_builder::{
    assemble_glb, json, AnimationBuilder, BufferBuilder, GltfBuilder, MeshBuilder, NodeSpec,
    SkeletonBuilder,
};
use tracing::debug;

use crate::animation::AnimationClip;
use crate::error::BuildResult;
use crate::mesh::{extrude_polygon, ExtrudedMesh};
use crate::skeleton::Skeleton;
use crate::skin::{bind_rigid, skin_attributes, VertexBinding};
use crate::triangulate::{EarcutTriangulator, Triangulator};

/// Generator name written into the asset header
pub const GENERATOR: &str = "thick-rig";

/// Extruded mesh with its skeleton, skin bindings and flex animation
#[derive(Debug, Clone)]
pub struct ThickObject {
    pub mesh: ExtrudedMesh,
    pub skeleton: Skeleton,
    pub bindings: Vec<VertexBinding>,
    pub clip: AnimationClip,
}

/// Build a rigged object from `polygon` using ear-clipping caps
pub fn build_thick_object(polygon: &[Vec2], thickness: f32) -> BuildResult<ThickObject> {
    build_thick_object_with(polygon, thickness, &EarcutTriangulator)
}

/// Build a rigged object from `polygon` with a caller-supplied cap triangulator
pub fn build_thick_object_with<T: Triangulator + ?Sized>(
    polygon: &[Vec2],
    thickness: f32,
    triangulator: &T,
) -> BuildResult<ThickObject> {
    let mesh = extrude_polygon(polygon, thickness, triangulator)?;
    let skeleton = Skeleton::flex_rig();
    let bindings = bind_rigid(&mesh.positions, &skeleton.edge_world_positions());
    let clip = AnimationClip::flex(&skeleton);

    debug!(
        "build_thick_object: {} vertices bound to {} joints, {} animation tracks",
        bindings.len(),
        skeleton.len(),
        clip.tracks.len()
    );

    Ok(ThickObject {
        mesh,
        skeleton,
        bindings,
        clip,
    })
}

impl ThickObject {
    /// Assemble the glTF document and its binary buffer
    ///
    /// Node layout: skeleton joints first (node index == joint index), then
    /// the skinned `polygon` node and the `container` scene root.
    pub fn to_gltf(&self) -> BuildResult<(json::Root, Vec<u8>)> {
        let (joints, weights) = skin_attributes(&self.bindings)?;

        let mut buffer = BufferBuilder::new();
        let skeleton_accessors = SkeletonBuilder::new()
            .inverse_bind_matrices(&self.skeleton.inverse_bind_matrices())
            .build(&mut buffer);
        let mesh_accessors = MeshBuilder::new()
            .positions(&self.mesh.position_arrays())
            .indices(&self.mesh.flat_indices())
            .joints(&joints)
            .weights(&weights)
            .build(&mut buffer);
        let animation_accessors = self
            .clip
            .tracks
            .iter()
            .fold(AnimationBuilder::new(&self.clip.times), |builder, track| {
                let rotations: Vec<[f32; 4]> =
                    track.rotations.iter().map(|q| q.to_array()).collect();
                builder.rotation_track(track.joint as u32, &rotations)
            })
            .build(&mut buffer);

        let joint_nodes = self.skeleton.joints().iter().enumerate().map(|(i, joint)| {
            let children: Vec<u32> = self
                .skeleton
                .children(i)
                .into_iter()
                .map(|c| c as u32)
                .collect();
            NodeSpec::joint(joint.name.clone(), joint.translation.to_array())
                .with_children(&children)
        });

        let polygon_node = self.skeleton.len() as u32;
        let container_node = polygon_node + 1;
        let joint_indices: Vec<u32> = (0..self.skeleton.len() as u32).collect();

        let root = GltfBuilder::new()
            .buffer_byte_length(buffer.data().len() as u64)
            .add_nodes(joint_nodes)
            .add_node(NodeSpec::group("polygon").with_mesh(0).with_skin(0))
            .add_node(NodeSpec::group("container").with_children(&[polygon_node, 0]))
            .add_mesh_from_accessors("mesh", &mesh_accessors)
            .add_skin("skin", 0, &joint_indices, &skeleton_accessors)
            .add_animation(&self.clip.name, &animation_accessors)
            .add_scene("scene", &[container_node])
            .build(buffer.views(), buffer.accessors(), GENERATOR);

        Ok((root, buffer.data().to_vec()))
    }

    /// Serialize the object as a binary glTF container
    pub fn to_glb(&self) -> Result<Vec<u8>> {
        let (root, data) = self.to_gltf()?;
        assemble_glb(&root, &data)
    }
}
