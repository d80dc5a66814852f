//! thick-rig library
//!
//! Builds a rigged, animated solid from a flat polygon:
//! - `rings` / `profile`: front, back and rounded intermediate vertex rings
//! - `stitch`: caps (via a [`Triangulator`]) and side walls between rings
//! - `skeleton`: fixed origin / center / edge joint hierarchy
//! - `skin`: rigid nearest-joint binding
//! - `animation`: three-keyframe flex clip on the center joints
//! - `object`: the whole pipeline and its GLB document

pub mod animation;
pub mod config;
pub mod error;
pub mod mesh;
pub mod object;
pub mod polygon;
pub mod profile;
pub mod rings;
pub mod skeleton;
pub mod skin;
pub mod stitch;
pub mod triangulate;

pub use animation::{AnimationClip, RotationTrack};
pub use config::GeneratorConfig;
pub use error::{BuildError, BuildResult};
pub use mesh::{extrude_polygon, ExtrudedMesh};
pub use object::{build_thick_object, build_thick_object_with, ThickObject};
pub use polygon::regular_polygon;
pub use rings::{build_rings, ExtrudedRings, RingRegistry, RingSpan, EDGE_DIVISIONS};
pub use skeleton::{Joint, JointRole, Skeleton};
pub use skin::{bind_rigid, VertexBinding};
pub use stitch::{stitch_rings, stitch_surface, Triangle};
pub use triangulate::{EarcutTriangulator, Triangulator};
