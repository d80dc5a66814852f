//! Utility functions for GLB construction

use anyhow::{Context, Result};
use gltf_json as json;

/// GLB container magic ("glTF")
const GLB_MAGIC: &[u8; 4] = b"glTF";
/// Chunk type tag for the JSON chunk ("JSON")
const CHUNK_JSON: u32 = 0x4E4F534A;
/// Chunk type tag for the binary chunk ("BIN\0")
const CHUNK_BIN: u32 = 0x004E4942;

/// Compute bounding box for positions
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min.to_vec(), max.to_vec())
}

/// Align buffer to 4-byte boundary
pub fn align_buffer(buffer: &mut Vec<u8>) {
    while buffer.len() % 4 != 0 {
        buffer.push(0);
    }
}

/// Serialize the document and its binary buffer into a GLB container
pub fn assemble_glb(root: &json::Root, buffer_data: &[u8]) -> Result<Vec<u8>> {
    let json_string =
        json::serialize::to_string(root).context("Failed to serialize GLTF JSON")?;
    let json_bytes = json_string.as_bytes();

    let json_padding = (4 - (json_bytes.len() % 4)) % 4;
    let json_chunk_length = json_bytes.len() + json_padding;

    let buffer_padding = (4 - (buffer_data.len() % 4)) % 4;
    let buffer_chunk_length = buffer_data.len() + buffer_padding;

    let total_length = 12 + 8 + json_chunk_length + 8 + buffer_chunk_length;
    let total_length_u32 =
        u32::try_from(total_length).context("GLB exceeds the 4 GiB container limit")?;

    let mut glb = Vec::with_capacity(total_length);

    // Header
    glb.extend_from_slice(GLB_MAGIC);
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&total_length_u32.to_le_bytes());

    // JSON chunk, padded with spaces
    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(json_bytes);
    glb.resize(glb.len() + json_padding, b' ');

    // Binary chunk, padded with zeros
    glb.extend_from_slice(&(buffer_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    glb.extend_from_slice(buffer_data);
    glb.resize(glb.len() + buffer_padding, 0);

    Ok(glb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bounds_simple() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, -2.0, -3.0]];
        let (min, max) = compute_bounds(&positions);
        assert_eq!(min, vec![-1.0, -2.0, -3.0]);
        assert_eq!(max, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_align_buffer() {
        let mut buffer = vec![1, 2, 3];
        align_buffer(&mut buffer);
        assert_eq!(buffer, vec![1, 2, 3, 0]);

        let mut buffer2 = vec![1, 2, 3, 4];
        align_buffer(&mut buffer2);
        assert_eq!(buffer2.len(), 4); // Already aligned
    }

    #[test]
    fn test_assemble_glb_header() {
        let root = crate::GltfBuilder::new().build(&[], &[], "test");
        let glb = assemble_glb(&root, &[1, 2, 3]).unwrap();

        assert_eq!(&glb[0..4], b"glTF");
        assert_eq!(u32::from_le_bytes(glb[4..8].try_into().unwrap()), 2);
        assert_eq!(
            u32::from_le_bytes(glb[8..12].try_into().unwrap()) as usize,
            glb.len()
        );
        assert_eq!(glb.len() % 4, 0);
    }
}
