//! Player and PlayerSummary data structures.

use crate::models::error::{optional, required, ModelError};
use crate::models::group::GroupId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in rosters and lookups).
pub type PlayerId = Uuid;

/// Caller-supplied fields for creating or updating a player.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFields {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub nick_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub groups: Vec<GroupId>,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// A registered member of one or more groups.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub nick_name: Option<String>,
    pub email: String,
    pub mobile: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub groups: Vec<GroupId>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl Player {
    /// Create a new player from validated fields.
    pub fn new(fields: PlayerFields) -> Result<Self, ModelError> {
        let mut player = Self {
            id: Uuid::new_v4(),
            first_name: String::new(),
            last_name: String::new(),
            nick_name: None,
            email: String::new(),
            mobile: None,
            date_of_birth: None,
            groups: Vec::new(),
            is_enabled: true,
            created_at: Utc::now(),
            created_by: None,
        };
        player.update(fields)?;
        Ok(player)
    }

    /// Overwrite the editable fields. Id and creation metadata are kept.
    pub fn update(&mut self, fields: PlayerFields) -> Result<(), ModelError> {
        let first_name = required("firstName", &fields.first_name)?;
        let last_name = required("lastName", &fields.last_name)?;
        let email = validate_email(&fields.email)?;
        self.first_name = first_name;
        self.last_name = last_name;
        self.nick_name = optional(fields.nick_name);
        self.email = email;
        self.mobile = optional(fields.mobile);
        self.date_of_birth = fields.date_of_birth;
        self.groups = fields.groups;
        self.is_enabled = fields.is_enabled;
        Ok(())
    }

    /// Is this player a member of `group`?
    pub fn in_group(&self, group: GroupId) -> bool {
        self.groups.contains(&group)
    }

    /// The projection embedded into tournament rosters.
    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary::from_player(self)
    }
}

fn validate_email(value: &str) -> Result<String, ModelError> {
    let email = required("email", value)?;
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace) =>
        {
            Ok(email)
        }
        _ => Err(ModelError::InvalidEmail(email)),
    }
}

/// Identity plus display fields of a player, as stored on a tournament.
///
/// Two summaries are equal when they refer to the same player, whatever their display fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub nick_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl PlayerSummary {
    pub fn from_player(p: &Player) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            nick_name: p.nick_name.clone(),
            date_of_birth: p.date_of_birth,
        }
    }
}

impl PartialEq for PlayerSummary {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PlayerSummary {}
