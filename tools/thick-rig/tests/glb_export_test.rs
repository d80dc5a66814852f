//! Integration tests for GLB export.
//!
//! Builds the hexagon object, writes it to disk, re-imports it with the
//! gltf crate and checks mesh, skin and animation data.

use glam::{Mat4, Vec2};
use tempfile::tempdir;

use thick_rig::{build_thick_object, regular_polygon, ThickObject};

/// Regular hexagon on the unit circle, thickness 0.2
fn hexagon() -> ThickObject {
    build_thick_object(&regular_polygon(6, 1.0, 0.0), 0.2).expect("Failed to build hexagon")
}

/// Write `object` as GLB into a temp dir and import it back
fn round_trip(object: &ThickObject) -> (gltf::Document, Vec<gltf::buffer::Data>) {
    let glb = object.to_glb().expect("Failed to assemble GLB");
    assert_eq!(&glb[0..4], b"glTF", "Invalid GLB magic");

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("thickObj.glb");
    std::fs::write(&path, &glb).expect("Failed to write GLB");

    let (document, buffers, _) = gltf::import(&path).expect("Failed to import GLB");
    (document, buffers)
}

#[test]
fn test_hexagon_mesh_round_trip() {
    let object = hexagon();
    let (document, buffers) = round_trip(&object);

    assert_eq!(document.meshes().count(), 1, "Expected 1 mesh");
    let primitive = document.meshes().next().unwrap().primitives().next().unwrap();
    assert_eq!(primitive.mode(), gltf::mesh::Mode::Triangles);

    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
    let positions: Vec<[f32; 3]> = reader.read_positions().expect("Missing POSITION").collect();
    assert_eq!(positions.len(), 24);

    let indices: Vec<u32> = reader
        .read_indices()
        .expect("Missing indices")
        .into_u32()
        .collect();
    // 4 triangles per cap, 3 bands of 12
    assert_eq!(indices.len(), 3 * (2 * 4 + 3 * 12));
    assert!(indices.iter().all(|&i| (i as usize) < positions.len()));

    let joints: Vec<[u16; 4]> = reader
        .read_joints(0)
        .expect("Missing JOINTS_0")
        .into_u16()
        .collect();
    let weights: Vec<[f32; 4]> = reader
        .read_weights(0)
        .expect("Missing WEIGHTS_0")
        .into_f32()
        .collect();
    assert_eq!(joints.len(), 24);
    for (joint, weight) in joints.iter().zip(&weights) {
        assert!((4..=6).contains(&joint[0]), "bound to non-edge joint {}", joint[0]);
        assert_eq!(&joint[1..], &[0, 0, 0]);
        assert_eq!(*weight, [1.0, 0.0, 0.0, 0.0]);
    }
}

#[test]
fn test_hexagon_skin_round_trip() {
    let object = hexagon();
    let (document, buffers) = round_trip(&object);

    assert_eq!(document.skins().count(), 1, "Expected 1 skin");
    let skin = document.skins().next().unwrap();
    let joint_names: Vec<&str> = skin.joints().map(|n| n.name().unwrap_or("")).collect();
    assert_eq!(
        joint_names,
        vec![
            "origin-joint",
            "joint-center-0",
            "joint-center-1",
            "joint-center-2",
            "joint-edge-0",
            "joint-edge-1",
            "joint-edge-2",
        ]
    );
    assert_eq!(skin.skeleton().map(|n| n.index()), Some(0));

    let reader = skin.reader(|buffer| Some(&buffers[buffer.index()]));
    let matrices: Vec<[[f32; 4]; 4]> = reader
        .read_inverse_bind_matrices()
        .expect("Missing inverse bind matrices")
        .collect();
    assert_eq!(matrices.len(), 7);

    for (i, cols) in matrices.iter().enumerate() {
        let bind = Mat4::from_cols_array_2d(cols).inverse();
        let world = object.skeleton.world_position(i);
        assert!(bind.abs_diff_eq(Mat4::from_translation(world), 1e-5));
    }

    // Every skinned (edge) joint hangs off an animated center joint
    for edge in skin.joints().skip(4) {
        let parent = skin
            .joints()
            .find(|n| n.children().any(|c| c.index() == edge.index()))
            .expect("Edge joint without parent");
        assert!(parent.name().unwrap_or("").starts_with("joint-center-"));
    }
}

#[test]
fn test_hexagon_animation_round_trip() {
    let object = hexagon();
    let (document, buffers) = round_trip(&object);

    assert_eq!(document.animations().count(), 1, "Expected 1 animation");
    let animation = document.animations().next().unwrap();
    assert_eq!(animation.channels().count(), 3);

    for (i, channel) in animation.channels().enumerate() {
        assert_eq!(channel.target().node().index(), 1 + i);
        assert_eq!(
            channel.target().property(),
            gltf::animation::Property::Rotation
        );
        assert_eq!(
            channel.sampler().interpolation(),
            gltf::animation::Interpolation::Linear
        );

        let reader = channel.reader(|buffer| Some(&buffers[buffer.index()]));
        let times: Vec<f32> = reader.read_inputs().expect("Missing inputs").collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);

        let rotations: Vec<[f32; 4]> = match reader.read_outputs().expect("Missing outputs") {
            gltf::animation::util::ReadOutputs::Rotations(rotations) => {
                rotations.into_f32().collect()
            }
            _ => panic!("Expected rotation outputs"),
        };
        assert_eq!(rotations.len(), 3);
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        assert!(rotations[0][2] * sign > 0.0);
        assert!(rotations[1][2] * sign < 0.0);
        assert!(rotations.iter().all(|q| q[0] == 0.0 && q[1] == 0.0));
    }
}

#[test]
fn test_scene_root_is_container() {
    let (document, _buffers) = round_trip(&hexagon());

    let scene = document.default_scene().expect("Missing default scene");
    let roots: Vec<_> = scene.nodes().collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name(), Some("container"));

    let children: Vec<Option<&str>> = roots[0].children().map(|c| c.name()).collect();
    assert_eq!(children, vec![Some("polygon"), Some("origin-joint")]);

    let polygon = roots[0].children().next().unwrap();
    assert!(polygon.mesh().is_some());
    assert!(polygon.skin().is_some());
}

#[test]
fn test_concave_polygon_exports() {
    // Arrow head: one reflex corner
    let polygon = vec![
        Vec2::new(0.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(0.0, -0.3),
        Vec2::new(1.0, -1.0),
    ];
    let object = build_thick_object(&polygon, 0.3).expect("Failed to build arrow");
    assert_eq!(object.mesh.vertex_count(), 16);
    assert!(object.mesh.positions.iter().all(|p| p.is_finite()));

    let (document, _buffers) = round_trip(&object);
    assert_eq!(document.meshes().count(), 1);
}
