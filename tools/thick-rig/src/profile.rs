//! Rounded extrusion profile
//!
//! Intermediate rings sit on an elliptical cross-section: the depth semi-axis
//! is half the thickness, the lateral semi-axis a quarter of it. Each ring
//! vertex is pushed out of the polygon boundary along the corner bisector.

use glam::{Vec2, Vec3};

/// Point on an axis-aligned ellipse with semi-axes `a` (x) and `b` (y) at `phase`
pub fn oval(a: f32, b: f32, phase: f32) -> Vec2 {
    Vec2::new(a * phase.cos(), b * phase.sin())
}

/// Unit bisector at `current`, oriented by the sign of the corner's turn
///
/// Returns `None` for degenerate corners: a neighbour coinciding with
/// `current`, or collinear neighbours (zero cross product), where the
/// direction is undefined.
pub fn corner_bisector(prev: Vec2, current: Vec2, next: Vec2) -> Option<Vec2> {
    let to_prev = (prev - current).try_normalize()?;
    let to_next = (next - current).try_normalize()?;

    let sin = to_prev.perp_dot(to_next);
    if sin == 0.0 {
        return None;
    }

    let bisector = (to_prev + to_next).try_normalize()?;
    Some(bisector * sin.signum())
}

/// Position of an intermediate ring vertex
///
/// `phase` runs over (0, π) from the front face to the back face. A missing
/// bisector keeps the vertex on the polygon boundary but still applies the
/// depth offset.
pub fn profile_point(current: Vec2, bisector: Option<Vec2>, phase: f32, thickness: f32) -> Vec3 {
    let offset = oval(thickness * 0.5, thickness * 0.25, phase);
    let lateral = bisector.unwrap_or(Vec2::ZERO) * offset.y;
    (current + lateral).extend(-offset.x)
}
