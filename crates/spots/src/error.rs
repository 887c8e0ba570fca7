/// Failures while ingesting solver output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpotError {
    #[error("unknown action key {0:?}")]
    UnknownAction(String),
    #[error("malformed sizing in action key {0:?}")]
    MalformedSizing(String),
    #[error("invalid rubric: {0}")]
    InvalidRubric(String),
}
