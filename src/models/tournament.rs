//! Tournament: one dated outing of a group, with its roster and allocated foursomes.

use crate::models::error::{optional, ModelError};
use crate::models::foursome::Foursome;
use crate::models::group::{Group, GroupId};
use crate::models::guest::{Guest, GuestId};
use crate::models::player::{PlayerId, PlayerSummary};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Caller-supplied fields for creating or updating a tournament.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentFields {
    pub date: NaiveDate,
    #[serde(default)]
    pub display: Option<String>,
    pub group_id: GroupId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub date: NaiveDate,
    /// Label shown in lists; defaults to the long-form date.
    pub display: String,
    pub group: Group,
    /// Confirmed registered players.
    pub players: Vec<PlayerSummary>,
    /// Confirmed guests.
    pub guests: Vec<Guest>,
    /// Latest allocation. Replaced wholesale on every calculation.
    pub foursomes: Vec<Foursome>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl Tournament {
    /// Create a tournament with an empty roster. `group` must be the group named by `fields`.
    pub fn new(fields: TournamentFields, group: Group) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: fields.date,
            display: display_or_date(fields.display, fields.date),
            group,
            players: Vec::new(),
            guests: Vec::new(),
            foursomes: Vec::new(),
            created_at: Utc::now(),
            created_by: None,
        }
    }

    /// Update date, label and group. Roster and foursomes are kept.
    pub fn update(&mut self, fields: TournamentFields, group: Group) {
        self.date = fields.date;
        self.display = display_or_date(fields.display, fields.date);
        self.group = group;
    }

    /// True when at least one player or guest is confirmed.
    pub fn has_people(&self) -> bool {
        self.players.len() + self.guests.len() > 0
    }

    /// Confirm a registered player. Confirming the same player twice is a no-op.
    pub fn confirm_player(&mut self, player: PlayerSummary) {
        if !self.players.contains(&player) {
            self.players.push(player);
        }
    }

    /// Drop a confirmed player from the roster.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), ModelError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(ModelError::NotOnRoster(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    pub fn add_guest(&mut self, guest: Guest) {
        self.guests.push(guest);
    }

    pub fn remove_guest(&mut self, guest_id: GuestId) -> Result<(), ModelError> {
        let idx = self
            .guests
            .iter()
            .position(|g| g.id == guest_id)
            .ok_or(ModelError::NotOnRoster(guest_id))?;
        self.guests.remove(idx);
        Ok(())
    }
}

fn display_or_date(display: Option<String>, date: NaiveDate) -> String {
    optional(display).unwrap_or_else(|| date.format("%A, %-d %B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(display: Option<&str>) -> TournamentFields {
        TournamentFields {
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            display: display.map(String::from),
            group_id: Uuid::nil(),
        }
    }

    #[test]
    fn blank_display_falls_back_to_long_date() {
        let group = Group::new("MorningMen").unwrap();
        let t = Tournament::new(fields(Some(" ")), group.clone());
        assert_eq!(t.display, "Monday, 19 October 2026");
        let t = Tournament::new(fields(Some("Club champs")), group);
        assert_eq!(t.display, "Club champs");
    }

    #[test]
    fn roster_edits() {
        let mut t = Tournament::new(fields(None), Group::new("MorningMen").unwrap());
        assert!(!t.has_people());

        let guest = Guest::new("Walk-in", None, None).unwrap();
        let guest_id = guest.id;
        t.add_guest(guest);
        assert!(t.has_people());
        assert_eq!(t.guests.len(), 1);

        t.remove_guest(guest_id).unwrap();
        assert_eq!(t.remove_guest(guest_id), Err(ModelError::NotOnRoster(guest_id)));
        assert!(!t.has_people());
    }
}
