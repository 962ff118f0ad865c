//! Demo data: one group with a few members and an upcoming tournament.

use crate::models::{Group, Guest, ModelError, Player, PlayerFields, Tournament, TournamentFields};
use crate::store::{Repository, Store, StoreError};
use chrono::{Datelike, Duration, Utc, Weekday};
use thiserror::Error;

pub const DEMO_GROUP_NAME: &str = "MorningMen";

const DEMO_PLAYERS: [(&str, &str); 10] = [
    ("Gary", "Player"),
    ("Ernie", "Els"),
    ("Retief", "Goosen"),
    ("Trevor", "Immelman"),
    ("Louis", "Oosthuizen"),
    ("Charl", "Schwartzel"),
    ("Branden", "Grace"),
    ("Tim", "Clark"),
    ("Nick", "Price"),
    ("Bobby", "Locke"),
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Seed the demo group unless a group with that name already exists.
pub fn seed_demo(store: &Store) -> Result<(), SeedError> {
    let existing = store
        .groups
        .query(&|g: &Group| g.name.eq_ignore_ascii_case(DEMO_GROUP_NAME))?;
    if !existing.is_empty() {
        return Ok(());
    }

    let group = Group::new(DEMO_GROUP_NAME)?;
    store.groups.insert(group.clone())?;

    let today = Utc::now().date_naive();
    let days_to_saturday = (7 + Weekday::Sat.num_days_from_monday()
        - today.weekday().num_days_from_monday())
        % 7;
    let fields = TournamentFields {
        date: today + Duration::days(i64::from(days_to_saturday)),
        display: None,
        group_id: group.id,
    };
    let mut tournament = Tournament::new(fields, group.clone());

    for (i, (first, last)) in DEMO_PLAYERS.iter().enumerate() {
        let player = Player::new(PlayerFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!(
                "{}.{}@golfgroup.org",
                first.to_ascii_lowercase(),
                last.to_ascii_lowercase()
            ),
            groups: vec![group.id],
            is_enabled: true,
            ..Default::default()
        })?;
        if i < 8 {
            tournament.confirm_player(player.summary());
        }
        store.players.insert(player)?;
    }
    tournament.add_guest(Guest::new("Visiting Pro", None, None)?);
    store.tournaments.insert(tournament)?;

    log::info!(
        "Seeded demo group '{}' with {} players",
        DEMO_GROUP_NAME,
        DEMO_PLAYERS.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_is_idempotent() {
        let store = Store::new();
        seed_demo(&store).unwrap();
        seed_demo(&store).unwrap();
        assert_eq!(store.groups.len().unwrap(), 1);
        assert_eq!(store.players.len().unwrap(), 10);
        let tournaments = store.tournaments.all().unwrap();
        assert_eq!(tournaments.len(), 1);
        assert_eq!(tournaments[0].players.len(), 8);
        assert_eq!(tournaments[0].guests.len(), 1);
        assert_eq!(tournaments[0].date.weekday(), Weekday::Sat);
    }
}
