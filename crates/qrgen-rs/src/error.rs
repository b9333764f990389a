use thiserror::Error;

/// The ways encoding can fail.
///
/// The first three variants are caller errors. `InternalInvariantViolated`
/// is a programmer error surfaced instead of panicking: it means one of the
/// pipeline stages produced output whose size or shape disagrees with the
/// capacity tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrError {
    /// No segment mode can represent the input.
    #[error("input not encodable in the requested segment mode")]
    UnencodableInput,

    /// The payload does not fit in version 40 at the requested
    /// error correction level (bits needed, bits available).
    #[error("payload needs {0} bits, version 40 holds {1} bits at this level")]
    InputTooLarge(usize, usize),

    /// An error correction level token outside {L, M, Q, H}.
    #[error("invalid error correction level {0:?}")]
    InvalidEcl(String),

    /// A pipeline stage broke one of the size invariants.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolated(&'static str),
}
