//! RosterEntry: one confirmed attendee, either a registered player or a guest.

use crate::models::guest::Guest;
use crate::models::player::PlayerSummary;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterEntry {
    Player(PlayerSummary),
    Guest(Guest),
}
