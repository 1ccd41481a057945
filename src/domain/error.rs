use thiserror::Error;

/// Why an expected-error assertion did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    #[error("expected an error of kind `{expected}`, but the call succeeded")]
    NoError { expected: &'static str },

    #[error("expected an error of kind `{expected}`, got: {actual}")]
    WrongKind {
        expected: &'static str,
        actual: String,
    },

    #[error("error of kind `{kind}` does not {matcher}: {error}")]
    PredicateMismatch {
        kind: &'static str,
        matcher: String,
        error: String,
    },
}
