//! Foursome (four-ball): one playing group of a tournament round.

use crate::models::error::ModelError;
use crate::models::guest::Guest;
use crate::models::player::PlayerSummary;
use crate::models::roster::RosterEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a foursome.
pub type FoursomeId = Uuid;

/// Which tee a group starts from.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tee {
    #[default]
    NotSet,
    Front,
    Back,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Foursome {
    pub id: FoursomeId,
    /// 1-based, assigned in creation order.
    pub sequence: u32,
    pub tee: Tee,
    /// Scheduled tee time, if one was set.
    pub time: Option<DateTime<Utc>>,
    pub players: Vec<PlayerSummary>,
    pub guests: Vec<Guest>,
}

impl Foursome {
    /// Empty group with the given sequence number and no tee or time.
    pub fn new(sequence: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence,
            tee: Tee::NotSet,
            time: None,
            players: Vec::new(),
            guests: Vec::new(),
        }
    }

    /// Players plus guests.
    pub fn member_count(&self) -> usize {
        self.players.len() + self.guests.len()
    }

    /// Place an entry into the matching member list.
    pub fn seat(&mut self, entry: RosterEntry) {
        match entry {
            RosterEntry::Player(p) => self.players.push(p),
            RosterEntry::Guest(g) => self.guests.push(g),
        }
    }

    /// Whether the group has reached `capacity`. A group above capacity is an error.
    pub fn is_full(&self, capacity: usize) -> Result<bool, ModelError> {
        let members = self.member_count();
        if members > capacity {
            return Err(ModelError::OverCapacity { members, capacity });
        }
        Ok(members == capacity)
    }
}
