use meatkonnex_core::DomainError;
use thiserror::Error;

use crate::api::ApiError;

/// Failure of a controller operation, after it has been reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
