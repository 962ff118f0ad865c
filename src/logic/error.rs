//! Errors surfaced by a foursome calculation.

use crate::models::TournamentId;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocationError {
    /// The referenced tournament does not exist.
    #[error("No tournament with id {0}")]
    NotFound(TournamentId),
    /// Group size must be a positive number.
    #[error("Group size must be greater than zero (got {0})")]
    InvalidArgument(i64),
    /// Nobody is confirmed, so there is nothing to allocate.
    #[error("Tournament has no players or guests to allocate")]
    InvalidState,
    /// Loading or saving the tournament failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
