//! Foursome allocation: group sizing, roster snapshot, randomized fill and orchestration.

mod allocator;
mod calculate;
mod error;
mod group_size;
mod index;
mod roster;

pub use allocator::{allocate, allocate_tournament};
pub use calculate::calculate_foursomes;
pub use error::AllocationError;
pub use group_size::{GroupPlan, GroupPlanner, GroupSize, OpenTail, PaddingPolicy, RemainderPadding};
pub use index::{IndexSource, RngIndex, ScriptedIndex};
pub use roster::{DrawPhase, Pool, Roster};
