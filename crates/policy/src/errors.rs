use thiserror::Error;

/// Reason a field edit was ignored.
///
/// These never reach the user; the form simply keeps its previous value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditRejected {
    #[error("input too long: {len} characters, at most {max} allowed")]
    TooLong { len: usize, max: usize },

    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Reason a submission did not produce a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("form is incomplete")]
    NotReady,

    #[error("required character {0:?} does not occur in the password")]
    NoOccurrences(String),

    #[error("could not build matcher: {0}")]
    Pattern(String),
}
