//! Rounded extrusion of a polygon into a closed triangle mesh

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::error::BuildResult;
use crate::rings::{build_rings, validate_input, RingSpan};
use crate::stitch::{stitch_surface, Triangle};
use crate::triangulate::Triangulator;

/// Indexed triangle mesh produced by [`extrude_polygon`]
#[derive(Debug, Clone)]
pub struct ExtrudedMesh {
    pub positions: Vec<Vec3>,
    pub triangles: Vec<Triangle>,
    /// Ring spans in side-wall order (front, intermediates, back)
    pub rings: Vec<RingSpan>,
    /// Triangles per cap; the first `2 * cap_triangles` entries are the caps
    pub cap_triangles: usize,
}

impl ExtrudedMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Positions as plain arrays for buffer packing
    pub fn position_arrays(&self) -> Vec<[f32; 3]> {
        self.positions.iter().map(|p| p.to_array()).collect()
    }

    /// Flat u32 index list
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// Extrude `polygon` symmetrically about z = 0 with rounded side walls
pub fn extrude_polygon<T: Triangulator + ?Sized>(
    polygon: &[Vec2],
    thickness: f32,
    triangulator: &T,
) -> BuildResult<ExtrudedMesh> {
    validate_input(polygon, thickness)?;

    let polygon_triangles = triangulator.triangulate(polygon)?;
    let rings = build_rings(polygon, thickness)?;
    let triangles = stitch_surface(&rings, &polygon_triangles)?;

    debug!(
        "extrude_polygon: {} points -> {} vertices, {} triangles ({} per cap)",
        polygon.len(),
        rings.positions.len(),
        triangles.len(),
        polygon_triangles.len()
    );

    Ok(ExtrudedMesh {
        rings: rings.wall_order(),
        positions: rings.positions,
        triangles,
        cap_triangles: polygon_triangles.len(),
    })
}
