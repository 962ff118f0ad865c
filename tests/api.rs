//! HTTP tests for the REST surface.

use actix_web::{http::StatusCode, test, web::Data, App};
use golf_group_web::{
    api::{self, AppState},
    Config, Store,
};
use serde_json::{json, Value};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(Data::new(AppState::new(Store::new(), &Config::default())))
                .configure(api::configure),
        )
        .await
    };
}

macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = app!();
    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[actix_web::test]
async fn group_crud_and_lookup_by_name() {
    let app = app!();
    let (status, group) = call_json!(
        app,
        test::TestRequest::post().uri("/api/group").set_json("MorningMen")
    );
    assert_eq!(status, StatusCode::OK);
    let id = group["id"].as_str().unwrap().to_string();

    let (_, names) = call_json!(app, test::TestRequest::get().uri("/api/group"));
    assert_eq!(names, json!(["MorningMen"]));

    let (status, found) = call_json!(
        app,
        test::TestRequest::get().uri("/api/group/name/morningmen")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], id.as_str());

    let (status, renamed) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/group/{id}"))
            .set_json("Early Birds")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Early Birds");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/group/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (status, body) = call_json!(app, test::TestRequest::get().uri(&format!("/api/group/{id}")));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("group"));
}

#[actix_web::test]
async fn player_validation_is_a_bad_request() {
    let app = app!();
    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/player").set_json(json!({
            "firstName": "Ernie",
            "lastName": "Els",
            "email": "not-an-email"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[actix_web::test]
async fn tournament_requires_a_known_group() {
    let app = app!();
    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/tournament").set_json(json!({
            "date": "2026-10-24",
            "groupId": "00000000-0000-0000-0000-000000000000"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn roster_and_calculate_flow() {
    let app = app!();
    let (_, group) = call_json!(
        app,
        test::TestRequest::post().uri("/api/group").set_json("MorningMen")
    );
    let group_id = group["id"].as_str().unwrap().to_string();

    let (status, tournament) = call_json!(
        app,
        test::TestRequest::post().uri("/api/tournament").set_json(json!({
            "date": "2026-10-24",
            "groupId": &group_id
        }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tournament["display"], "Saturday, 24 October 2026");
    let tid = tournament["id"].as_str().unwrap().to_string();

    // Nobody confirmed yet.
    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri(&format!("/api/tournament/{tid}/calculate"))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for i in 0..5 {
        let (_, player) = call_json!(
            app,
            test::TestRequest::post().uri("/api/player").set_json(json!({
                "firstName": format!("Player{i}"),
                "lastName": "Golfer",
                "email": format!("p{i}@example.org"),
                "groups": [&group_id]
            }))
        );
        let pid = player["id"].as_str().unwrap().to_string();
        let (status, _) = call_json!(
            app,
            test::TestRequest::post().uri(&format!("/api/tournament/{tid}/players/{pid}"))
        );
        assert_eq!(status, StatusCode::OK);
    }

    let (_, members) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/player/group/{group_id}"))
    );
    assert_eq!(members.as_array().unwrap().len(), 5);

    let (status, with_guest) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/tournament/{tid}/guests"))
            .set_json(json!({ "name": "Visiting Pro" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(with_guest["players"].as_array().unwrap().len(), 5);
    assert_eq!(with_guest["guests"].as_array().unwrap().len(), 1);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri(&format!("/api/tournament/{tid}/calculate?groupSize=0"))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 6 in threes: two full groups, no padding.
    let (status, foursomes) = call_json!(
        app,
        test::TestRequest::post().uri(&format!("/api/tournament/{tid}/calculate?groupSize=3"))
    );
    assert_eq!(status, StatusCode::OK);
    let foursomes = foursomes.as_array().unwrap().clone();
    assert_eq!(foursomes.len(), 2);
    assert_eq!(foursomes[0]["sequence"], 1);
    assert_eq!(foursomes[1]["sequence"], 2);
    assert_eq!(foursomes[0]["tee"], "not_set");
    assert_eq!(foursomes[0]["players"].as_array().unwrap().len(), 3);
    assert_eq!(foursomes[1]["guests"][0]["name"], "Visiting Pro");

    let (_, saved) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/tournament/{tid}"))
    );
    assert_eq!(saved["foursomes"].as_array().unwrap().len(), 2);

    let (_, list) = call_json!(app, test::TestRequest::get().uri("/api/tournament"));
    assert_eq!(list[0]["groupName"], "MorningMen");
}

#[actix_web::test]
async fn calculate_unknown_tournament_is_not_found() {
    let app = app!();
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/tournament/6f1c2a1e-3a7b-4a51-9d7e-2f1c7e0d9b11/calculate")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("No tournament"));
}

#[actix_web::test]
async fn undecodable_requests_get_a_json_error_body() {
    let app = app!();

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/player")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Bad request"));

    let (status, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/tournament/not-a-uuid")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/tournament/6f1c2a1e-3a7b-4a51-9d7e-2f1c7e0d9b11/calculate?groupSize=abc")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
