use setforge_core::error::CoreError;
use setforge_core::types::DbId;

/// Errors surfaced by the store layer.
///
/// Validation failures (`Core`) and raw database errors pass through; the
/// remaining variants cover lookups the compiler treats as hard faults.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] sqlx::Error),

    #[error("host {0} not found")]
    HostNotFound(DbId),

    #[error("zone {0} not found")]
    ZoneNotFound(DbId),

    #[error("zone chain starting at zone {0} does not terminate")]
    ZoneChainLoop(DbId),
}
