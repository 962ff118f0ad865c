//! Response shapes (camelCase JSON) projected from the stored entities.

use crate::models::{Foursome, Group, Guest, Player, PlayerSummary, Tee, Tournament};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub id: Uuid,
    pub name: String,
}

impl From<&Group> for GroupView {
    fn from(g: &Group) -> Self {
        Self {
            id: g.id,
            name: g.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nick_name: Option<String>,
    pub email: String,
    pub mobile: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub groups: Vec<Uuid>,
    pub is_enabled: bool,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            nick_name: p.nick_name.clone(),
            email: p.email.clone(),
            mobile: p.mobile.clone(),
            date_of_birth: p.date_of_birth,
            groups: p.groups.clone(),
            is_enabled: p.is_enabled,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummaryView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nick_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<&PlayerSummary> for PlayerSummaryView {
    fn from(p: &PlayerSummary) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            nick_name: p.nick_name.clone(),
            date_of_birth: p.date_of_birth,
        }
    }
}

impl From<&Player> for PlayerSummaryView {
    fn from(p: &Player) -> Self {
        Self::from(&p.summary())
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestView {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

impl From<&Guest> for GuestView {
    fn from(g: &Guest) -> Self {
        Self {
            id: g.id,
            name: g.name.clone(),
            email: g.email.clone(),
            mobile: g.mobile.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoursomeView {
    pub id: Uuid,
    pub sequence: u32,
    pub tee: Tee,
    pub time: Option<DateTime<Utc>>,
    pub players: Vec<PlayerSummaryView>,
    pub guests: Vec<GuestView>,
}

impl From<&Foursome> for FoursomeView {
    fn from(f: &Foursome) -> Self {
        Self {
            id: f.id,
            sequence: f.sequence,
            tee: f.tee,
            time: f.time,
            players: f.players.iter().map(PlayerSummaryView::from).collect(),
            guests: f.guests.iter().map(GuestView::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentView {
    pub id: Uuid,
    pub date: NaiveDate,
    pub display: String,
    pub group: GroupView,
    pub players: Vec<PlayerSummaryView>,
    pub guests: Vec<GuestView>,
    pub foursomes: Vec<FoursomeView>,
}

impl From<&Tournament> for TournamentView {
    fn from(t: &Tournament) -> Self {
        Self {
            id: t.id,
            date: t.date,
            display: t.display.clone(),
            group: GroupView::from(&t.group),
            players: t.players.iter().map(PlayerSummaryView::from).collect(),
            guests: t.guests.iter().map(GuestView::from).collect(),
            foursomes: t.foursomes.iter().map(FoursomeView::from).collect(),
        }
    }
}

/// List entry for tournaments.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub id: Uuid,
    pub date: NaiveDate,
    pub display: String,
    pub group_name: String,
}

impl From<&Tournament> for TournamentSummary {
    fn from(t: &Tournament) -> Self {
        Self {
            id: t.id,
            date: t.date,
            display: t.display.clone(),
            group_name: t.group.name.clone(),
        }
    }
}
