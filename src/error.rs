use thiserror::Error;

// Everything that can go wrong while building, subdividing or projecting a mesh. Each check runs
// before the mesh is modified, so an error never leaves a half-built mesh behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IcosphereError {
    #[error("Invalid subdivision count: {requested} (must be >= 0)")]
    InvalidArgument { requested: i64 },

    // Either 20 * 4^n overflows usize, or the final mesh cannot be allocated
    #[error("Subdivision count {requested} produces a mesh too large to build")]
    TooManySubdivisions { requested: usize },

    // One round of subdivision of this many faces could not be allocated
    #[error("Subdividing {faces} faces needs more memory than is available")]
    MeshTooLarge { faces: usize },

    #[error("Face {face} references vertex {index}, but the mesh has {len} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        len: usize,
    },

    // Raised by the midpoint cache, which has no face to point at
    #[error("Vertex {index} does not exist, the mesh has {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("Degenerate edge: both endpoints are vertex {vertex}")]
    DegenerateEdge { vertex: usize },

    // Zero vector, no direction to project along
    #[error("Vertex {index} has zero magnitude and cannot be projected onto the sphere")]
    DegenerateVertex { index: usize },
}

impl IcosphereError {
    // Whether the error describes a malformed face list.
    pub fn is_invalid_mesh(&self) -> bool {
        matches!(
            self,
            IcosphereError::IndexOutOfRange { .. }
                | IcosphereError::VertexOutOfRange { .. }
                | IcosphereError::DegenerateEdge { .. }
        )
    }
}

pub type IcosphereResult<T> = std::result::Result<T, IcosphereError>;
