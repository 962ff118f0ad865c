//! Group endpoints.

use crate::api::{ApiError, GroupView, IdPath, State};
use crate::models::Group;
use crate::store::Repository;
use actix_web::{
    delete, get, post, put,
    web::{Json, Path},
    HttpResponse,
};

/// Names of all groups.
#[get("/api/group")]
pub(crate) async fn api_list_group_names(state: State) -> Result<HttpResponse, ApiError> {
    let names: Vec<String> = state
        .store
        .groups
        .all()?
        .into_iter()
        .map(|g| g.name)
        .collect();
    Ok(HttpResponse::Ok().json(names))
}

#[get("/api/group/{id}")]
pub(crate) async fn api_get_group(state: State, path: Path<IdPath>) -> Result<HttpResponse, ApiError> {
    let group = state
        .store
        .groups
        .find_by_id(path.id)?
        .ok_or_else(|| ApiError::not_found("group", path.id))?;
    Ok(HttpResponse::Ok().json(GroupView::from(&group)))
}

/// Case-insensitive lookup by name.
#[get("/api/group/name/{name}")]
pub(crate) async fn api_get_group_by_name(
    state: State,
    name: Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = name.into_inner();
    let wanted = name.trim();
    let found = state
        .store
        .groups
        .query(&|g: &Group| g.name.eq_ignore_ascii_case(wanted))?;
    let group = found.into_iter().next().ok_or_else(|| ApiError::NotFound {
        kind: "group",
        key: name.clone(),
    })?;
    Ok(HttpResponse::Ok().json(GroupView::from(&group)))
}

/// Body is the new group's name as a JSON string.
#[post("/api/group")]
pub(crate) async fn api_create_group(state: State, body: Json<String>) -> Result<HttpResponse, ApiError> {
    let group = Group::new(&body)?;
    state.store.groups.insert(group.clone())?;
    Ok(HttpResponse::Ok().json(GroupView::from(&group)))
}

#[put("/api/group/{id}")]
pub(crate) async fn api_rename_group(
    state: State,
    path: Path<IdPath>,
    body: Json<String>,
) -> Result<HttpResponse, ApiError> {
    let mut group = state
        .store
        .groups
        .find_by_id(path.id)?
        .ok_or_else(|| ApiError::not_found("group", path.id))?;
    group.rename(&body)?;
    state.store.groups.replace(group.clone())?;
    Ok(HttpResponse::Ok().json(GroupView::from(&group)))
}

#[delete("/api/group/{id}")]
pub(crate) async fn api_delete_group(state: State, path: Path<IdPath>) -> Result<HttpResponse, ApiError> {
    if !state.store.groups.delete(path.id)? {
        return Err(ApiError::not_found("group", path.id));
    }
    Ok(HttpResponse::NoContent().finish())
}
