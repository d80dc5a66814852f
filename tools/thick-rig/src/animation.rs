//! Keyframed flexing of the center joints

use glam::Quat;
use std::f32::consts::PI;

use crate::skeleton::{JointRole, Skeleton};

/// Keyframe times shared by every track
pub const KEYFRAME_TIMES: [f32; 3] = [0.0, 1.0, 2.0];

/// Rotation amplitude about the extrusion axis
pub const FLEX_ANGLE: f32 = PI / 12.0;

/// Rotation keyframes for one joint, sampled at the clip's times
#[derive(Debug, Clone)]
pub struct RotationTrack {
    pub joint: usize,
    pub rotations: Vec<Quat>,
}

/// Named set of rotation tracks over shared keyframe times
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub times: Vec<f32>,
    pub tracks: Vec<RotationTrack>,
}

/// Signed flex angles for center joint `arm`: even arms start positive, odd arms negative
pub fn flex_angles(arm: usize) -> [f32; 3] {
    let sign = if arm % 2 == 0 { 1.0 } else { -1.0 };
    [FLEX_ANGLE * sign, -FLEX_ANGLE * sign, FLEX_ANGLE * sign]
}

impl AnimationClip {
    /// One Z-rotation track per center joint of `skeleton`
    pub fn flex(skeleton: &Skeleton) -> Self {
        let tracks = skeleton
            .center_joints()
            .filter_map(|(joint, data)| match data.role {
                JointRole::Center(arm) => Some(RotationTrack {
                    joint,
                    rotations: flex_angles(arm)
                        .iter()
                        .map(|angle| Quat::from_rotation_z(*angle))
                        .collect(),
                }),
                _ => None,
            })
            .collect();

        Self {
            name: "animation".to_string(),
            times: KEYFRAME_TIMES.to_vec(),
            tracks,
        }
    }

    /// Clip length in seconds
    pub fn duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }
}
