use thiserror::Error;

use crate::{float::NormalizedFloat, ulp::UlpError};

/// Errors that can occur while approximating powers of ten or building a table from them
#[derive(Debug, Error)]
pub enum TableError {
    /// Invalid input to the approximation, rejected before any arithmetic runs
    #[error("Arithmetic precondition violated: {0}")]
    ArithmeticPrecondition(String),

    /// A produced approximation is not within half a ULP of the exact value. This is a
    /// defect in the algorithm or the big integer backend and aborts the whole table
    #[error("Approximation of 10^{exponent} as {float} is off by {error}, expected < 0.5 ULP")]
    AccuracyViolation {
        exponent: i32,
        float: NormalizedFloat,
        error: UlpError,
    },

    /// The binary exponent of an approximation does not fit the `i16` table column
    #[error("Binary exponent {binary} of 10^{decimal} does not fit in an i16")]
    ExponentOutOfRange { decimal: i32, binary: i64 },

    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type TableResult<T> = Result<T, TableError>;
pub type TableTestResult = Result<(), TableError>;
