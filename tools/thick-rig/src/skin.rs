//! Rigid per-vertex skinning

use glam::Vec3;

use crate::error::{BuildError, BuildResult};

/// Single controlling joint of a vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBinding {
    pub joint: usize,
    pub weight: f32,
}

impl VertexBinding {
    pub fn rigid(joint: usize) -> Self {
        Self { joint, weight: 1.0 }
    }

    /// Four-slot joint attribute with the binding in slot 0
    pub fn joint_slots(&self) -> BuildResult<[u8; 4]> {
        let joint = u8::try_from(self.joint).map_err(|_| BuildError::JointIndexOverflow(self.joint))?;
        Ok([joint, 0, 0, 0])
    }

    /// Four-slot weight attribute with the binding in slot 0
    pub fn weight_slots(&self) -> [f32; 4] {
        [self.weight, 0.0, 0.0, 0.0]
    }
}

/// Index of the candidate nearest to `position`; the first wins on ties
fn nearest(position: Vec3, candidates: &[(usize, Vec3)]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for &(joint, joint_position) in candidates {
        let distance = position.distance(joint_position);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((joint, distance));
        }
    }
    best.map(|(joint, _)| joint)
}

/// Bind every vertex to its nearest candidate joint with full weight
///
/// `candidates` pairs skeleton joint indices with bind-pose world positions.
/// With no candidates every vertex falls back to joint 0.
pub fn bind_rigid(positions: &[Vec3], candidates: &[(usize, Vec3)]) -> Vec<VertexBinding> {
    positions
        .iter()
        .map(|&position| VertexBinding::rigid(nearest(position, candidates).unwrap_or(0)))
        .collect()
}

/// Expand bindings into the padded JOINTS_0 / WEIGHTS_0 attribute arrays
pub fn skin_attributes(bindings: &[VertexBinding]) -> BuildResult<(Vec<[u8; 4]>, Vec<[f32; 4]>)> {
    let joints = bindings
        .iter()
        .map(VertexBinding::joint_slots)
        .collect::<BuildResult<Vec<_>>>()?;
    let weights = bindings.iter().map(VertexBinding::weight_slots).collect();
    Ok((joints, weights))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<(usize, Vec3)> {
        vec![
            (4, Vec3::new(0.0, 1.0, 0.0)),
            (5, Vec3::new(1.0, -1.0, 0.0)),
            (6, Vec3::new(-1.0, -1.0, 0.0)),
        ]
    }

    #[test]
    fn test_bind_rigid_picks_nearest() {
        let positions = [
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(2.0, -1.0, 0.5),
            Vec3::new(-0.9, -0.8, -0.1),
        ];
        let bindings = bind_rigid(&positions, &candidates());
        let joints: Vec<usize> = bindings.iter().map(|b| b.joint).collect();
        assert_eq!(joints, vec![4, 5, 6]);
        assert!(bindings.iter().all(|b| b.weight == 1.0));
    }

    #[test]
    fn test_bind_rigid_tie_keeps_first() {
        // Equidistant from joints 5 and 6
        let bindings = bind_rigid(&[Vec3::new(0.0, -1.0, 0.0)], &candidates());
        assert_eq!(bindings[0].joint, 5);
    }

    #[test]
    fn test_bind_rigid_without_candidates() {
        let bindings = bind_rigid(&[Vec3::ONE], &[]);
        assert_eq!(bindings, vec![VertexBinding::rigid(0)]);
    }

    #[test]
    fn test_skin_attributes_padding() {
        let (joints, weights) = skin_attributes(&[VertexBinding::rigid(6)]).unwrap();
        assert_eq!(joints, vec![[6, 0, 0, 0]]);
        assert_eq!(weights, vec![[1.0, 0.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_skin_attributes_rejects_wide_joint() {
        let err = skin_attributes(&[VertexBinding::rigid(300)]).unwrap_err();
        assert_eq!(err, BuildError::JointIndexOverflow(300));
    }
}
