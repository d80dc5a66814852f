//! Vertex rings of the extruded solid
//!
//! Every ring is registered in a [`RingRegistry`], which appends its vertices
//! to the shared position buffer and hands back the index range it occupies.
//! Stitching only ever works from those ranges, never from append order.

use glam::{Vec2, Vec3};
use std::f32::consts::PI;
use tracing::warn;

use crate::error::{BuildError, BuildResult};
use crate::profile::{corner_bisector, profile_point};

/// Number of side-wall bands between the front and back faces
pub const EDGE_DIVISIONS: usize = 3;

/// Contiguous index range of one ring in the vertex buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSpan {
    pub start: u32,
    pub len: u32,
}

impl RingSpan {
    /// Buffer index of ring vertex `i`, wrapping cyclically
    pub fn index(&self, i: usize) -> u32 {
        self.start + (i % self.len as usize) as u32
    }

    /// Buffer indices of the ring in order
    pub fn indices(&self) -> impl Iterator<Item = u32> {
        self.start..self.start + self.len
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Vertex buffer that assigns index ranges as rings are registered
#[derive(Debug, Default)]
pub struct RingRegistry {
    positions: Vec<Vec3>,
}

impl RingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ring and return the range it occupies
    pub fn register(&mut self, ring: impl IntoIterator<Item = Vec3>) -> BuildResult<RingSpan> {
        let start = self.positions.len();
        self.positions.extend(ring);
        let end = self.positions.len();

        let start_u32 = u32::try_from(start).map_err(|_| BuildError::IndexOverflow(end))?;
        u32::try_from(end).map_err(|_| BuildError::IndexOverflow(end))?;

        Ok(RingSpan {
            start: start_u32,
            len: (end - start) as u32,
        })
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Vec3> {
        self.positions
    }
}

/// All rings of one extrusion plus their shared vertex buffer
#[derive(Debug, Clone)]
pub struct ExtrudedRings {
    pub positions: Vec<Vec3>,
    pub front: RingSpan,
    pub back: RingSpan,
    pub intermediates: Vec<RingSpan>,
}

impl ExtrudedRings {
    /// Rings in side-wall order: front, intermediates, back
    pub fn wall_order(&self) -> Vec<RingSpan> {
        let mut order = Vec::with_capacity(self.intermediates.len() + 2);
        order.push(self.front);
        order.extend(self.intermediates.iter().copied());
        order.push(self.back);
        order
    }
}

/// Check the inputs every construction step relies on
pub fn validate_input(polygon: &[Vec2], thickness: f32) -> BuildResult<()> {
    if polygon.len() < 3 {
        return Err(BuildError::TooFewPoints(polygon.len()));
    }
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(BuildError::InvalidThickness(thickness));
    }
    Ok(())
}

/// Build the front, back and intermediate rings for `polygon`
///
/// Vertex layout: front ring, back ring, then the intermediate rings from
/// the front side towards the back.
pub fn build_rings(polygon: &[Vec2], thickness: f32) -> BuildResult<ExtrudedRings> {
    validate_input(polygon, thickness)?;

    let half = thickness * 0.5;
    let n = polygon.len();
    let mut registry = RingRegistry::new();

    let front = registry.register(polygon.iter().map(|p| p.extend(-half)))?;
    let back = registry.register(polygon.iter().map(|p| p.extend(half)))?;

    let bisectors: Vec<Option<Vec2>> = (0..n)
        .map(|j| {
            let prev = polygon[(j + n - 1) % n];
            let next = polygon[(j + 1) % n];
            let bisector = corner_bisector(prev, polygon[j], next);
            if bisector.is_none() {
                warn!("build_rings: corner {} is degenerate, skipping its lateral offset", j);
            }
            bisector
        })
        .collect();

    let mut intermediates = Vec::with_capacity(EDGE_DIVISIONS - 1);
    for division in 0..EDGE_DIVISIONS - 1 {
        let phase = PI / EDGE_DIVISIONS as f32 * (division + 1) as f32;
        let ring = polygon
            .iter()
            .zip(&bisectors)
            .map(|(point, bisector)| profile_point(*point, *bisector, phase, thickness));
        intermediates.push(registry.register(ring)?);
    }

    Ok(ExtrudedRings {
        positions: registry.into_positions(),
        front,
        back,
        intermediates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_registry_assigns_contiguous_spans() {
        let mut registry = RingRegistry::new();
        let a = registry.register([Vec3::ZERO; 4]).unwrap();
        let b = registry.register([Vec3::ONE; 4]).unwrap();

        assert_eq!(a, RingSpan { start: 0, len: 4 });
        assert_eq!(b, RingSpan { start: 4, len: 4 });
        assert_eq!(b.index(5), 5);
        assert_eq!(b.indices().collect::<Vec<_>>(), vec![4, 5, 6, 7]);
        assert_eq!(registry.positions().len(), 8);
    }

    #[test]
    fn test_build_rings_layout() {
        let rings = build_rings(&square(), 0.2).unwrap();

        assert_eq!(rings.front, RingSpan { start: 0, len: 4 });
        assert_eq!(rings.back, RingSpan { start: 4, len: 4 });
        assert_eq!(rings.intermediates.len(), EDGE_DIVISIONS - 1);
        assert_eq!(rings.intermediates[0], RingSpan { start: 8, len: 4 });
        assert_eq!(rings.intermediates[1], RingSpan { start: 12, len: 4 });
        assert_eq!(rings.positions.len(), 16);

        let order = rings.wall_order();
        assert_eq!(order.first(), Some(&rings.front));
        assert_eq!(order.last(), Some(&rings.back));
    }

    #[test]
    fn test_build_rings_depths() {
        let rings = build_rings(&square(), 0.2).unwrap();

        for i in rings.front.indices() {
            assert!((rings.positions[i as usize].z + 0.1).abs() < 1e-6);
        }
        for i in rings.back.indices() {
            assert!((rings.positions[i as usize].z - 0.1).abs() < 1e-6);
        }
        // First intermediate ring lies on the front half, second on the back half
        for i in rings.intermediates[0].indices() {
            assert!((rings.positions[i as usize].z + 0.05).abs() < 1e-6);
        }
        for i in rings.intermediates[1].indices() {
            assert!((rings.positions[i as usize].z - 0.05).abs() < 1e-6);
        }
    }

    #[test]
    fn test_intermediate_rings_bulge_outward() {
        let rings = build_rings(&square(), 0.2).unwrap();
        let center = Vec2::new(0.5, 0.5);

        for span in &rings.intermediates {
            for (j, i) in span.indices().enumerate() {
                let source = square()[j];
                let bulged = rings.positions[i as usize].truncate();
                assert!(bulged.distance(center) > source.distance(center));
            }
        }
    }

    #[test]
    fn test_clockwise_rings_bulge_inward() {
        // Reversed walk flips every turn sign, so the rounded edge folds in
        let clockwise: Vec<Vec2> = square().into_iter().rev().collect();
        let rings = build_rings(&clockwise, 0.2).unwrap();
        let center = Vec2::new(0.5, 0.5);

        assert_eq!(rings.positions.len(), 16);
        for span in &rings.intermediates {
            for (j, i) in span.indices().enumerate() {
                let bulged = rings.positions[i as usize].truncate();
                assert!(bulged.distance(center) < clockwise[j].distance(center));
            }
        }
    }

    #[test]
    fn test_collinear_corner_falls_back_to_boundary() {
        // Midpoint of the bottom edge is a straight corner
        let polygon = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.5, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let rings = build_rings(&polygon, 0.2).unwrap();

        let straight = rings.positions[rings.intermediates[0].index(1) as usize];
        assert_eq!(straight.truncate(), Vec2::new(0.5, 0.0));
        assert!(rings.positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_build_rings_rejects_bad_input() {
        let line = [Vec2::ZERO, Vec2::X];
        assert_eq!(build_rings(&line, 0.2).unwrap_err(), BuildError::TooFewPoints(2));
        assert_eq!(
            build_rings(&square(), 0.0).unwrap_err(),
            BuildError::InvalidThickness(0.0)
        );
        assert!(build_rings(&square(), f32::NAN).is_err());
    }
}
