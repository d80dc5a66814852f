//! Rotation keyframe track construction

use crate::buffer::{AccessorIndex, BufferBuilder};
use gltf_json as json;

/// Accessor indices for one rotation track and the node it drives
#[derive(Debug, Clone)]
pub struct TrackAccessors {
    pub node: u32,
    pub rotations: AccessorIndex,
}

/// Accessor indices for animation data
#[derive(Debug, Clone)]
pub struct AnimationAccessors {
    pub times: AccessorIndex,
    pub tracks: Vec<TrackAccessors>,
}

/// Builder for rotation tracks sharing one time accessor
pub struct AnimationBuilder {
    times: Vec<f32>,
    tracks: Vec<(u32, Vec<[f32; 4]>)>,
}

impl AnimationBuilder {
    /// Create an animation builder over the given keyframe times
    pub fn new(times: &[f32]) -> Self {
        Self {
            times: times.to_vec(),
            tracks: Vec::new(),
        }
    }

    /// Add a rotation track (xyzw quaternions, one per keyframe) targeting `node`
    pub fn rotation_track(mut self, node: u32, rotations: &[[f32; 4]]) -> Self {
        self.tracks.push((node, rotations.to_vec()));
        self
    }

    /// Get track count
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Build and pack into buffer
    pub fn build(self, buffer: &mut BufferBuilder) -> AnimationAccessors {
        let times = buffer.pack_scalars_with_bounds("times", &self.times);

        let tracks = self
            .tracks
            .iter()
            .enumerate()
            .map(|(i, (node, rotations))| TrackAccessors {
                node: *node,
                rotations: buffer.pack_vec4(&format!("joint-anim-rot-{i}"), rotations, None),
            })
            .collect();

        AnimationAccessors { times, tracks }
    }
}

/// Build a linear rotation sampler/channel pair per track
pub fn rotation_channels(
    accessors: &AnimationAccessors,
) -> (Vec<json::animation::Sampler>, Vec<json::animation::Channel>) {
    let mut samplers = Vec::with_capacity(accessors.tracks.len());
    let mut channels = Vec::with_capacity(accessors.tracks.len());

    for track in &accessors.tracks {
        samplers.push(json::animation::Sampler {
            input: accessors.times.as_json_index(),
            interpolation: json::validation::Checked::Valid(
                json::animation::Interpolation::Linear,
            ),
            output: track.rotations.as_json_index(),
            extensions: Default::default(),
            extras: Default::default(),
        });
        channels.push(json::animation::Channel {
            sampler: json::Index::new(samplers.len() as u32 - 1),
            target: json::animation::Target {
                node: json::Index::new(track.node),
                path: json::validation::Checked::Valid(json::animation::Property::Rotation),
                extensions: Default::default(),
                extras: Default::default(),
            },
            extensions: Default::default(),
            extras: Default::default(),
        });
    }

    (samplers, channels)
}
