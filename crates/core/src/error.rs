use thiserror::Error;

use crate::model::{LevelError, LevelSummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Summary(#[from] LevelSummaryError),
}
