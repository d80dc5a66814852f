//! Cap triangulation and side-wall stitching

use crate::error::{BuildError, BuildResult};
use crate::rings::{ExtrudedRings, RingSpan};

/// Triangle as three vertex-buffer indices
pub type Triangle = [u32; 3];

/// Front cap: polygon triangles with reversed winding so the face looks down -Z
pub fn front_cap(polygon_triangles: &[Triangle], front: RingSpan) -> Vec<Triangle> {
    polygon_triangles
        .iter()
        .map(|&[a, b, c]| [front.start + a, front.start + c, front.start + b])
        .collect()
}

/// Back cap: polygon triangles as returned, facing +Z
pub fn back_cap(polygon_triangles: &[Triangle], back: RingSpan) -> Vec<Triangle> {
    polygon_triangles
        .iter()
        .map(|tri| tri.map(|i| back.start + i))
        .collect()
}

/// Closed triangle strip between two rings of equal cardinality
pub fn stitch_rings(a: RingSpan, b: RingSpan) -> BuildResult<Vec<Triangle>> {
    if a.len() != b.len() {
        return Err(BuildError::RingLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut triangles = Vec::with_capacity(a.len() * 2);
    for i in 0..a.len() {
        let (a0, a1) = (a.index(i), a.index(i + 1));
        let (b0, b1) = (b.index(i), b.index(i + 1));
        triangles.push([a0, a1, b1]);
        triangles.push([a0, b1, b0]);
    }
    Ok(triangles)
}

/// Every triangle of the closed surface: front cap, back cap, then walls
pub fn stitch_surface(
    rings: &ExtrudedRings,
    polygon_triangles: &[Triangle],
) -> BuildResult<Vec<Triangle>> {
    let mut triangles = front_cap(polygon_triangles, rings.front);
    triangles.extend(back_cap(polygon_triangles, rings.back));

    for pair in rings.wall_order().windows(2) {
        triangles.extend(stitch_rings(pair[0], pair[1])?);
    }
    Ok(triangles)
}
