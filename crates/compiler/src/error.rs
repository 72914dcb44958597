use setforge_core::error::CoreError;
use setforge_db::error::StoreError;

/// Errors surfaced by a compile run.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("cannot evaluate assign filter: {0}")]
    Match(String),
}
