use thiserror::Error;

/// Main error type for hyperparameter value generation
#[derive(Error, Debug)]
pub enum ParamError {
    /// An argument violated a generator's contract (non-positive step,
    /// zero trial count). These are configuration errors: the caller is
    /// expected to fail tuning-run setup rather than skip the parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for parameter operations
pub type ParamResult<T> = Result<T, ParamError>;

/// Macro for creating invalid-argument errors
#[macro_export]
macro_rules! invalid_argument {
    ($($arg:tt)*) => {
        $crate::ParamError::InvalidArgument(format!($($arg)*))
    };
}
