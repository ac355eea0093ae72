//! Error types for persistent homology calculations.
//!
//! The reduction itself is total and never fails. Everything fallible sits
//! at the boundaries: complex validation, parsing of input files and the
//! post-hoc invariant checks that guard the pairing.

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or checking a calculation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The filtered complex violates face-closure or filtration order.
    #[error("invalid complex: {0}")]
    InvalidComplex(#[from] ComplexError),

    /// A simplex needs at least one vertex.
    #[error("a simplex must contain at least one vertex")]
    EmptySimplex,

    /// A token in an input file could not be parsed.
    #[error("unable to convert token '{token}' on line {line}")]
    Conversion { token: String, line: usize },

    /// A post-hoc consistency check failed. This indicates a logic error,
    /// not malformed input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error reports a malformed simplicial complex.
    pub fn is_invalid_complex(&self) -> bool {
        matches!(self, Error::InvalidComplex(_))
    }
}

/// Violations detected by [`SimplicialComplex::validate`].
///
/// [`SimplicialComplex::validate`]: crate::topology::SimplicialComplex::validate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComplexError {
    /// A face of the simplex at `index` is not part of the complex.
    #[error("face {face:?} of simplex {index} is missing")]
    MissingFace { index: usize, face: Vec<usize> },

    /// A face appears at or after the position of its coface.
    #[error("face {face_index} of simplex {index} does not precede it in the filtration")]
    FaceOrder { index: usize, face_index: usize },

    /// The same vertex set occurs twice.
    #[error("simplex {index} duplicates simplex {first}")]
    DuplicateSimplex { index: usize, first: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_index() {
        let err: Error = ComplexError::FaceOrder { index: 4, face_index: 7 }.into();
        assert!(err.is_invalid_complex());
        assert_eq!(
            err.to_string(),
            "invalid complex: face 7 of simplex 4 does not precede it in the filtration"
        );

        let err = Error::Conversion { token: "abc".into(), line: 3 };
        assert!(!err.is_invalid_complex());
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("line 3"));
    }
}
