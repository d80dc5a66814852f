//! Polygon cap triangulation

use geo::{Coord, LineString, Polygon, TriangulateEarcut};
use glam::Vec2;

use crate::error::{BuildError, BuildResult};

/// Triangulates the interior of a simple polygon
///
/// Returned triples index into `polygon` and are wound the same way as the
/// polygon itself, clockwise or counter-clockwise.
pub trait Triangulator {
    fn triangulate(&self, polygon: &[Vec2]) -> BuildResult<Vec<[u32; 3]>>;
}

/// Twice the signed area of a closed point loop, positive when counter-clockwise
fn signed_area2(points: &[Vec2]) -> f32 {
    let next = points.iter().cycle().skip(1);
    points.iter().zip(next).map(|(a, b)| a.perp_dot(*b)).sum()
}

/// Ear-clipping triangulation backed by `geo`
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutTriangulator;

impl Triangulator for EarcutTriangulator {
    fn triangulate(&self, polygon: &[Vec2]) -> BuildResult<Vec<[u32; 3]>> {
        let len = polygon.len();
        let exterior: Vec<Coord<f32>> = polygon.iter().map(|p| Coord { x: p.x, y: p.y }).collect();

        // `Polygon::new` closes the ring, so index `len` is a copy of point 0
        let raw = Polygon::new(LineString::new(exterior), Vec::new()).earcut_triangles_raw();
        let clockwise = signed_area2(polygon) < 0.0;

        raw.triangle_indices
            .chunks_exact(3)
            .map(|tri| {
                let mut out = [0u32; 3];
                for (slot, &index) in out.iter_mut().zip(tri) {
                    *slot = match index {
                        i if i < len => i as u32,
                        i if i == len => 0,
                        index => return Err(BuildError::TriangulationFailed { index, len }),
                    };
                }

                let corners = out.map(|i| polygon[i as usize]);
                if (signed_area2(&corners) < 0.0) != clockwise {
                    out.swap(1, 2);
                }
                Ok(out)
            })
            .collect()
    }
}
