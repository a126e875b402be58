#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown workout type: {0}")]
    UnknownKind(String),
    #[error("{kind} expects {expected} values, got {got}")]
    Arity {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("Duration must be positive (got {0} h)")]
    NonPositiveDuration(f64),
    #[error("Division by zero: {0} is 0")]
    ZeroDivisor(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
