//! Runtime error types for the SIMPLE evaluators.

use simple_types::TermError;
use thiserror::Error;

/// Evaluation error. Every variant is fatal for the run in progress.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A coercion or reduction was requested on a term that does not support it.
    #[error(transparent)]
    Term(#[from] TermError),

    /// A `Variable` step found no binding for its name.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// `Divide` with a zero right operand.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },

    /// The machine was configured with a step limit and reached it.
    #[error("step limit exceeded after {0} steps")]
    StepLimitExceeded(u64),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
