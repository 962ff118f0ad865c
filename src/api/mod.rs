//! REST endpoints over the store, plus the foursome calculation.
//!
//! Handlers do no authentication: callers are expected to be authorized upstream.

mod error;
mod groups;
mod players;
mod tournaments;
mod views;

pub use error::ApiError;
pub use views::{
    FoursomeView, GroupView, GuestView, PlayerSummaryView, PlayerView, TournamentSummary,
    TournamentView,
};

use crate::config::Config;
use crate::logic::{GroupSize, PaddingPolicy};
use crate::store::Store;
use actix_web::{
    get,
    web::{self, Data},
    HttpResponse, Responder,
};
use serde::Deserialize;
use uuid::Uuid;

/// Shared service state.
pub struct AppState {
    pub store: Store,
    /// Used when a calculate request has no `groupSize`.
    pub group_size: GroupSize,
    pub padding: PaddingPolicy,
}

impl AppState {
    pub fn new(store: Store, config: &Config) -> Self {
        Self {
            store,
            group_size: config.group_size,
            padding: config.padding,
        }
    }
}

pub(crate) type State = Data<AppState>;

/// Path segment: document id (e.g. /api/tournament/{id})
#[derive(Deserialize)]
pub(crate) struct IdPath {
    pub(crate) id: Uuid,
}

/// Path segments: tournament id and a roster member id.
#[derive(Deserialize)]
pub(crate) struct MemberPath {
    pub(crate) id: Uuid,
    pub(crate) member_id: Uuid,
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "golf-group-web",
    })
}

/// Register every endpoint. State is attached by the caller with `app_data`.
///
/// Extractor failures (bad JSON, path or query) are answered with the same
/// `{ "error": .. }` body as every other error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .service(api_health)
    .service(groups::api_list_group_names)
    .service(groups::api_get_group_by_name)
    .service(groups::api_get_group)
    .service(groups::api_create_group)
    .service(groups::api_rename_group)
    .service(groups::api_delete_group)
    .service(players::api_list_players)
    .service(players::api_list_players_for_group)
    .service(players::api_get_player)
    .service(players::api_create_player)
    .service(players::api_update_player)
    .service(players::api_delete_player)
    .service(tournaments::api_list_tournaments)
    .service(tournaments::api_get_tournament)
    .service(tournaments::api_create_tournament)
    .service(tournaments::api_update_tournament)
    .service(tournaments::api_delete_tournament)
    .service(tournaments::api_confirm_player)
    .service(tournaments::api_remove_player)
    .service(tournaments::api_add_guest)
    .service(tournaments::api_remove_guest)
    .service(tournaments::api_calculate);
}
