//! Calculate: load a tournament, allocate its roster and store the new foursomes.

use crate::logic::allocator::allocate_tournament;
use crate::logic::error::AllocationError;
use crate::logic::group_size::{GroupPlanner, GroupSize};
use crate::logic::index::IndexSource;
use crate::models::{Foursome, Tournament, TournamentId};
use crate::store::Repository;

/// Replace the foursomes of tournament `id` with a fresh allocation and return them.
///
/// `size` is validated by the caller (`GroupSize::new`) before anything is loaded.
///
/// Read-modify-write without a lock: when two calls race on the same tournament the later
/// `replace` wins. Only `foursomes` changes; the stored roster is written back as loaded.
pub fn calculate_foursomes(
    tournaments: &dyn Repository<Tournament>,
    id: TournamentId,
    size: GroupSize,
    planner: &dyn GroupPlanner,
    indices: &mut dyn IndexSource,
) -> Result<Vec<Foursome>, AllocationError> {
    let mut tournament = tournaments
        .find_by_id(id)?
        .ok_or(AllocationError::NotFound(id))?;
    if !tournament.has_people() {
        return Err(AllocationError::InvalidState);
    }

    let foursomes = allocate_tournament(&tournament, size, planner, indices)?;
    tournament.foursomes = foursomes.clone();
    tournaments.replace(tournament)?;

    log::info!(
        "Allocated {} group(s) of up to {} for tournament {}",
        foursomes.len(),
        size.get(),
        id
    );
    Ok(foursomes)
}
