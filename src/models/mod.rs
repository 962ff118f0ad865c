//! Data structures for the golf group: groups, players, guests, tournaments and foursomes.

mod error;
mod foursome;
mod group;
mod guest;
mod player;
mod roster;
mod tournament;

pub use error::ModelError;
pub use foursome::{Foursome, FoursomeId, Tee};
pub use group::{Group, GroupId};
pub use guest::{Guest, GuestId};
pub use player::{Player, PlayerFields, PlayerId, PlayerSummary};
pub use roster::RosterEntry;
pub use tournament::{Tournament, TournamentFields, TournamentId};
