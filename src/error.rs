use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Engine error. Only store construction can surface one; every
/// runtime read/save failure degrades to an empty or default result
/// inside the record store instead (see `store`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}
