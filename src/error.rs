//! Error taxonomy shared by the solver, the orchestrator and the boundary.

use thiserror::Error;

/// Input rejected before any computation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no item types given")]
    EmptyItems,

    #[error("{what} has {found} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("item {index} has zero weight")]
    ZeroWeight { index: usize },

    #[error("item {index} has zero value")]
    ZeroValue { index: usize },

    #[error("expected one or two transporters, got {found}")]
    TransporterCount { found: usize },

    #[error("transporter {index} has no usable capacity left after the driver")]
    NoUsableCapacity { index: usize },

    #[error("total stock value does not fit in 64 bits")]
    ValueOverflow,

    #[error("combined capacity does not fit in 64 bits")]
    CapacityOverflow,

    #[error("{what}[{index}] is not a non-negative integer")]
    NotAnInteger { what: &'static str, index: usize },
}

/// Errors surfaced by a solver or partition run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Backward reconstruction did not end at weight zero.
    ///
    /// Only a broken frontier invariant can cause this; the result of the run
    /// must be discarded.
    #[error("internal consistency failure: reconstruction left a residual weight of {residual}")]
    InternalConsistency { residual: u64 },

    /// The optimal selection could not be divided between the two containers.
    #[error(
        "optimal selection cannot be split: the smaller container leaves {smaller_leftover} \
         unused but only {total_leftover} may stay empty"
    )]
    InfeasibleSplit {
        smaller_leftover: u64,
        total_leftover: u64,
    },

    /// A background run ended without posting its result.
    #[error("background worker stopped without a result")]
    WorkerStopped,
}

impl Error {
    /// Whether the caller can react to this error by changing its input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Error::InternalConsistency { .. } | Error::WorkerStopped
        )
    }
}
