//! Player endpoints.

use crate::api::{ApiError, IdPath, PlayerSummaryView, PlayerView, State};
use crate::models::{Player, PlayerFields};
use crate::store::Repository;
use actix_web::{
    delete, get, post, put,
    web::{Json, Path},
    HttpResponse,
};

#[get("/api/player")]
pub(crate) async fn api_list_players(state: State) -> Result<HttpResponse, ApiError> {
    let players: Vec<PlayerSummaryView> = state
        .store
        .players
        .all()?
        .iter()
        .map(PlayerSummaryView::from)
        .collect();
    Ok(HttpResponse::Ok().json(players))
}

/// Members of a group.
#[get("/api/player/group/{id}")]
pub(crate) async fn api_list_players_for_group(
    state: State,
    path: Path<IdPath>,
) -> Result<HttpResponse, ApiError> {
    let group_id = path.id;
    if state.store.groups.find_by_id(group_id)?.is_none() {
        return Err(ApiError::not_found("group", group_id));
    }
    let players: Vec<PlayerSummaryView> = state
        .store
        .players
        .query(&|p: &Player| p.in_group(group_id))?
        .iter()
        .map(PlayerSummaryView::from)
        .collect();
    Ok(HttpResponse::Ok().json(players))
}

#[get("/api/player/{id}")]
pub(crate) async fn api_get_player(state: State, path: Path<IdPath>) -> Result<HttpResponse, ApiError> {
    let player = state
        .store
        .players
        .find_by_id(path.id)?
        .ok_or_else(|| ApiError::not_found("player", path.id))?;
    Ok(HttpResponse::Ok().json(PlayerView::from(&player)))
}

#[post("/api/player")]
pub(crate) async fn api_create_player(
    state: State,
    body: Json<PlayerFields>,
) -> Result<HttpResponse, ApiError> {
    let player = Player::new(body.into_inner())?;
    state.store.players.insert(player.clone())?;
    Ok(HttpResponse::Ok().json(PlayerView::from(&player)))
}

#[put("/api/player/{id}")]
pub(crate) async fn api_update_player(
    state: State,
    path: Path<IdPath>,
    body: Json<PlayerFields>,
) -> Result<HttpResponse, ApiError> {
    let mut player = state
        .store
        .players
        .find_by_id(path.id)?
        .ok_or_else(|| ApiError::not_found("player", path.id))?;
    player.update(body.into_inner())?;
    state.store.players.replace(player.clone())?;
    Ok(HttpResponse::Ok().json(PlayerView::from(&player)))
}

#[delete("/api/player/{id}")]
pub(crate) async fn api_delete_player(state: State, path: Path<IdPath>) -> Result<HttpResponse, ApiError> {
    if !state.store.players.delete(path.id)? {
        return Err(ApiError::not_found("player", path.id));
    }
    Ok(HttpResponse::NoContent().finish())
}
