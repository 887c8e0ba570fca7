use drill_library::SelectionError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("game not found: {0}")]
    UnknownGame(String),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
