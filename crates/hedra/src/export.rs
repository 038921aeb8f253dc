//! Binary STL export of assembled pieces.

use hedra_kernel_mesh::Polygon;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::piece::Piece;

/// Errors raised during export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// An I/O error occurred while writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// There is nothing to export.
    #[error("no triangles to export")]
    EmptyGeometry,
}

/// Encode the pieces' combined boundary as binary STL bytes.
///
/// Faces are fan-triangulated; each triangle carries its face's exact
/// plane normal rather than a recomputed one.
pub fn stl_bytes(pieces: &[Piece]) -> Result<Vec<u8>, ExportError> {
    let num_triangles: usize = pieces
        .iter()
        .flat_map(|p| p.solid().faces())
        .map(|f| f.vertices().len() - 2)
        .sum();
    if num_triangles == 0 {
        return Err(ExportError::EmptyGeometry);
    }

    let mut data = Vec::with_capacity(84 + num_triangles * 50);

    let mut header = [0u8; 80];
    let tag = b"hedra STL export";
    header[..tag.len()].copy_from_slice(tag);
    data.extend_from_slice(&header);
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for piece in pieces {
        for face in piece.solid().faces() {
            write_face(&mut data, face);
        }
    }
    Ok(data)
}

/// Write the pieces to a binary STL file.
pub fn write_stl(pieces: &[Piece], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let bytes = stl_bytes(pieces)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(&bytes)?;
    Ok(())
}

fn write_face(data: &mut Vec<u8>, face: &Polygon) {
    let n = face.plane().normal;
    let verts = face.vertices();
    for i in 1..verts.len() - 1 {
        data.extend_from_slice(&(n.x as f32).to_le_bytes());
        data.extend_from_slice(&(n.y as f32).to_le_bytes());
        data.extend_from_slice(&(n.z as f32).to_le_bytes());
        for v in [verts[0], verts[i], verts[i + 1]] {
            data.extend_from_slice(&(v.x as f32).to_le_bytes());
            data.extend_from_slice(&(v.y as f32).to_le_bytes());
            data.extend_from_slice(&(v.z as f32).to_le_bytes());
        }
        data.extend_from_slice(&0u16.to_le_bytes());
    }
}
