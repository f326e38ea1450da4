use thiserror::Error;

/// Error returned when parsing an [`Ease`](enum.Ease.html) from a string fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseEaseError {
    #[error("empty easing curve name")]
    Empty,

    #[error("unknown easing curve `{0}`")]
    UnknownName(String),
}
