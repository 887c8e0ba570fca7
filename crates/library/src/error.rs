/// Why no hand could be selected.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("no candidate hands match the filter")]
    NoCandidates,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
