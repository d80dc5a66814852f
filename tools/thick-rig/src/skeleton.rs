//! Fixed three-arm joint hierarchy
//!
//! One origin joint, three center joints around it and one edge joint under
//! each center. The layout never depends on the mesh being rigged.

use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

/// Angular stations of the three arms
pub const JOINT_ANGLES: [f32; 3] = [FRAC_PI_2, -FRAC_PI_3, PI * 4.0 / 3.0];

/// Radius of the circle the arm joints are placed on
pub const JOINT_RADIUS: f32 = 0.5;

/// Total joint count: origin + three centers + three edges
pub const JOINT_COUNT: usize = 1 + 2 * JOINT_ANGLES.len();

/// Position of a joint within the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointRole {
    Origin,
    /// Child of the origin; animated
    Center(usize),
    /// Child of the center with the same arm index; skinning target
    Edge(usize),
}

#[derive(Debug, Clone)]
pub struct Joint {
    pub name: String,
    pub role: JointRole,
    pub parent: Option<usize>,
    /// Local translation relative to the parent (bind pose has no rotation or scale)
    pub translation: Vec3,
}

/// Joints in registration order: origin, centers, edges
#[derive(Debug, Clone)]
pub struct Skeleton {
    joints: Vec<Joint>,
}

/// Arm station `angle` on the joint circle
fn station(angle: f32) -> Vec3 {
    Vec3::new(angle.cos(), angle.sin(), 0.0) * JOINT_RADIUS
}

impl Skeleton {
    /// Build the origin / center / edge hierarchy
    pub fn flex_rig() -> Self {
        let mut joints = Vec::with_capacity(JOINT_COUNT);

        joints.push(Joint {
            name: "origin-joint".to_string(),
            role: JointRole::Origin,
            parent: None,
            translation: Vec3::ZERO,
        });

        for (i, angle) in JOINT_ANGLES.iter().enumerate() {
            joints.push(Joint {
                name: format!("joint-center-{i}"),
                role: JointRole::Center(i),
                parent: Some(0),
                translation: station(*angle),
            });
        }

        // Edge joints reuse the center stations as their local offset
        for (i, angle) in JOINT_ANGLES.iter().enumerate() {
            joints.push(Joint {
                name: format!("joint-edge-{i}"),
                role: JointRole::Edge(i),
                parent: Some(1 + i),
                translation: station(*angle),
            });
        }

        Self { joints }
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Indices of the joints whose parent is `index`
    pub fn children(&self, index: usize) -> Vec<usize> {
        self.joints
            .iter()
            .enumerate()
            .filter(|(_, joint)| joint.parent == Some(index))
            .map(|(i, _)| i)
            .collect()
    }

    /// Bind-pose world position: sum of translations up the parent chain
    pub fn world_position(&self, index: usize) -> Vec3 {
        let mut position = Vec3::ZERO;
        let mut current = Some(index);
        while let Some(i) = current {
            let joint = &self.joints[i];
            position += joint.translation;
            current = joint.parent;
        }
        position
    }

    /// Inverse of each joint's bind-pose world translation, in joint order
    pub fn inverse_bind_matrices(&self) -> Vec<Mat4> {
        (0..self.joints.len())
            .map(|i| Mat4::from_translation(self.world_position(i)).inverse())
            .collect()
    }

    /// `(joint index, joint)` for every joint with the given role filter
    fn by_role(&self, keep: impl Fn(JointRole) -> bool) -> impl Iterator<Item = (usize, &Joint)> {
        self.joints
            .iter()
            .enumerate()
            .filter(move |(_, joint)| keep(joint.role))
    }

    /// Center joints in arm order
    pub fn center_joints(&self) -> impl Iterator<Item = (usize, &Joint)> {
        self.by_role(|role| matches!(role, JointRole::Center(_)))
    }

    /// Edge joints in arm order
    pub fn edge_joints(&self) -> impl Iterator<Item = (usize, &Joint)> {
        self.by_role(|role| matches!(role, JointRole::Edge(_)))
    }

    /// `(joint index, world position)` of every edge joint, for skin binding
    pub fn edge_world_positions(&self) -> Vec<(usize, Vec3)> {
        self.edge_joints()
            .map(|(i, _)| (i, self.world_position(i)))
            .collect()
    }
}
