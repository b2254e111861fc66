use thiserror::Error;

/// Errors raised by the term algebra itself.
///
/// These indicate a defect in the caller (or in an evaluator), not a
/// condition of the modeled program: asking a statement for its integer
/// encoding, or asking a literal to take a reduction step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    /// `value`, `bool_value` or `reduce` invoked on a term with no such interpretation.
    #[error("unsupported operation `{operation}` on `{term}`")]
    UnsupportedOperation {
        operation: &'static str,
        /// Canonical rendering of the offending term.
        term: String,
    },
}

impl TermError {
    pub(crate) fn unsupported(operation: &'static str, term: &crate::Term) -> Self {
        Self::UnsupportedOperation {
            operation,
            term: term.to_string(),
        }
    }
}
