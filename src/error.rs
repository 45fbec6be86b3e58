use displaydoc::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid graph where the capacity matrix is not square
    NonSquareMatrix,
    /// Invalid graph with a negative capacity entry
    NegativeCapacity,
    /// Vertex is not an index into the capacity matrix
    VertexOutOfRange,
    /// Degenerate request where source and sink coincide
    DegenerateRequest,
    /// Arithmetic overflow while accumulating flow
    ArithmeticOverflow,
}

impl core::error::Error for Error {}
