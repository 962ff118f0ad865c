//! Tournament endpoints: CRUD, roster edits and the foursome calculation.

use crate::api::{ApiError, FoursomeView, IdPath, MemberPath, State, TournamentSummary, TournamentView};
use crate::logic::{calculate_foursomes, GroupSize, RngIndex};
use crate::models::{Group, Guest, Tournament, TournamentFields};
use crate::store::Repository;
use actix_web::{
    delete, get, post, put,
    web::{Json, Path, Query},
    HttpResponse,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub(crate) struct GuestBody {
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    mobile: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CalculateQuery {
    #[serde(default)]
    group_size: Option<i64>,
}

fn load_tournament(state: &State, id: Uuid) -> Result<Tournament, ApiError> {
    state
        .store
        .tournaments
        .find_by_id(id)?
        .ok_or_else(|| ApiError::not_found("tournament", id))
}

fn load_group(state: &State, id: Uuid) -> Result<Group, ApiError> {
    state
        .store
        .groups
        .find_by_id(id)?
        .ok_or(ApiError::UnknownGroup(id))
}

/// Store `tournament` and answer with its full view.
fn save_and_show(state: &State, tournament: Tournament) -> Result<HttpResponse, ApiError> {
    let view = TournamentView::from(&tournament);
    state.store.tournaments.replace(tournament)?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/tournament")]
pub(crate) async fn api_list_tournaments(state: State) -> Result<HttpResponse, ApiError> {
    let summaries: Vec<TournamentSummary> = state
        .store
        .tournaments
        .all()?
        .iter()
        .map(TournamentSummary::from)
        .collect();
    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/api/tournament/{id}")]
pub(crate) async fn api_get_tournament(
    state: State,
    path: Path<IdPath>,
) -> Result<HttpResponse, ApiError> {
    let tournament = load_tournament(&state, path.id)?;
    Ok(HttpResponse::Ok().json(TournamentView::from(&tournament)))
}

#[post("/api/tournament")]
pub(crate) async fn api_create_tournament(
    state: State,
    body: Json<TournamentFields>,
) -> Result<HttpResponse, ApiError> {
    let fields = body.into_inner();
    let group = load_group(&state, fields.group_id)?;
    let tournament = Tournament::new(fields, group);
    let view = TournamentView::from(&tournament);
    state.store.tournaments.insert(tournament)?;
    Ok(HttpResponse::Ok().json(view))
}

/// Change date, label or group. Roster and foursomes are kept.
#[put("/api/tournament/{id}")]
pub(crate) async fn api_update_tournament(
    state: State,
    path: Path<IdPath>,
    body: Json<TournamentFields>,
) -> Result<HttpResponse, ApiError> {
    let mut tournament = load_tournament(&state, path.id)?;
    let fields = body.into_inner();
    let group = load_group(&state, fields.group_id)?;
    tournament.update(fields, group);
    save_and_show(&state, tournament)
}

#[delete("/api/tournament/{id}")]
pub(crate) async fn api_delete_tournament(
    state: State,
    path: Path<IdPath>,
) -> Result<HttpResponse, ApiError> {
    if !state.store.tournaments.delete(path.id)? {
        return Err(ApiError::not_found("tournament", path.id));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Confirm a registered player for the tournament (no-op if already confirmed).
#[post("/api/tournament/{id}/players/{member_id}")]
pub(crate) async fn api_confirm_player(
    state: State,
    path: Path<MemberPath>,
) -> Result<HttpResponse, ApiError> {
    let mut tournament = load_tournament(&state, path.id)?;
    let player = state
        .store
        .players
        .find_by_id(path.member_id)?
        .ok_or_else(|| ApiError::not_found("player", path.member_id))?;
    tournament.confirm_player(player.summary());
    save_and_show(&state, tournament)
}

#[delete("/api/tournament/{id}/players/{member_id}")]
pub(crate) async fn api_remove_player(
    state: State,
    path: Path<MemberPath>,
) -> Result<HttpResponse, ApiError> {
    let mut tournament = load_tournament(&state, path.id)?;
    tournament.remove_player(path.member_id)?;
    save_and_show(&state, tournament)
}

#[post("/api/tournament/{id}/guests")]
pub(crate) async fn api_add_guest(
    state: State,
    path: Path<IdPath>,
    body: Json<GuestBody>,
) -> Result<HttpResponse, ApiError> {
    let mut tournament = load_tournament(&state, path.id)?;
    let body = body.into_inner();
    tournament.add_guest(Guest::new(&body.name, body.email, body.mobile)?);
    save_and_show(&state, tournament)
}

#[delete("/api/tournament/{id}/guests/{member_id}")]
pub(crate) async fn api_remove_guest(
    state: State,
    path: Path<MemberPath>,
) -> Result<HttpResponse, ApiError> {
    let mut tournament = load_tournament(&state, path.id)?;
    tournament.remove_guest(path.member_id)?;
    save_and_show(&state, tournament)
}

/// Allocate the roster into groups (`?groupSize=N`, default from config) and store them.
#[post("/api/tournament/{id}/calculate")]
pub(crate) async fn api_calculate(
    state: State,
    path: Path<IdPath>,
    query: Query<CalculateQuery>,
) -> Result<HttpResponse, ApiError> {
    let size = match query.group_size {
        Some(n) => GroupSize::new(n)?,
        None => state.group_size,
    };
    let foursomes = calculate_foursomes(
        &state.store.tournaments,
        path.id,
        size,
        &state.padding,
        &mut RngIndex::thread(),
    )?;
    let views: Vec<FoursomeView> = foursomes.iter().map(FoursomeView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}
