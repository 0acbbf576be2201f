use std::fmt;

/// Errors surfaced by 3D primitives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A direction or normal was required but the input has zero length.
    DegenerateGeometry { what: &'static str },
}

impl GeomError {
    pub(crate) fn degenerate(what: &'static str) -> Self {
        Self::DegenerateGeometry { what }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::DegenerateGeometry { what } => {
                write!(f, "degenerate geometry: {what} has zero length")
            }
        }
    }
}

impl std::error::Error for GeomError {}
