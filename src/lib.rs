//! Golf group organizer: groups, players, tournaments, and foursome allocation.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::{Config, ConfigError};
pub use logic::{
    allocate, allocate_tournament, calculate_foursomes, AllocationError, GroupPlan, GroupPlanner,
    GroupSize, IndexSource, OpenTail, PaddingPolicy, RemainderPadding, RngIndex, Roster,
    ScriptedIndex,
};
pub use models::{
    Foursome, Group, GroupId, Guest, ModelError, Player, PlayerFields, PlayerId, PlayerSummary,
    RosterEntry, Tee, Tournament, TournamentFields, TournamentId,
};
pub use store::{MemoryRepository, Repository, Store, StoreError};
