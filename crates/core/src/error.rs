use thiserror::Error;

use crate::model::ParseDurationError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Duration(#[from] ParseDurationError),
}
