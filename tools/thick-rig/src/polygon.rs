//! Regular polygon outlines

use glam::Vec2;
use std::f32::consts::TAU;

/// `sides` points on a circle of `radius`, counter-clockwise from `start_angle`
pub fn regular_polygon(sides: usize, radius: f32, start_angle: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| Vec2::from_angle(TAU / sides as f32 * i as f32 + start_angle) * radius)
        .collect()
}
