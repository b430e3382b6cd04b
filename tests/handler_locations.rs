mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use location_registry::api;
use serde_json::{Value, json};
use sqlx::SqlitePool;

fn api_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn names(json: &Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|l| l["location_name"].as_str().unwrap().to_string())
        .collect()
}

/// Organisation with Salzburg, Vienna and Berlin, plus a second organisation
/// owning a location that lies inside the Salzburg/Vienna box.
async fn seeded() -> (TestServer, i64) {
    let pool = common::test_pool().await;
    let organisation_id = common::create_test_organisation(&pool, "Climate Research Institute").await;
    common::create_cities(&pool, organisation_id).await;

    let other = common::create_test_organisation(&pool, "European Environmental Agency").await;
    common::create_test_location(&pool, other, "Linz", 14.2858, 48.3069).await;

    (api_server(pool), organisation_id)
}

#[tokio::test]
async fn test_create_locations() {
    let pool = common::test_pool().await;
    let organisation_id = common::create_test_organisation(&pool, "Green Solutions Network").await;
    let server = api_server(pool);

    let cities = [
        ("Paris", 2.3522, 48.8566),
        ("Madrid", -3.7038, 40.4168),
        ("Rome", 12.4964, 41.9028),
        ("Amsterdam", 4.9041, 52.3676),
        ("Prague", 14.4378, 50.0755),
    ];

    for (name, longitude, latitude) in cities {
        let response = server
            .post("/api/organisations/create/locations")
            .json(&json!({
                "organisation_id": organisation_id,
                "location_name": name,
                "longitude": longitude,
                "latitude": latitude
            }))
            .await;

        response.assert_status_ok();

        let json = response.json::<Value>();
        assert!(json["id"].is_i64());
        assert_eq!(json["organisation_id"], organisation_id);
        assert_eq!(json["location_name"], name);
        assert_eq!(json["longitude"], longitude);
        assert_eq!(json["latitude"], latitude);
    }

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .await;

    response.assert_status_ok();
    assert_eq!(
        names(&response.json::<Value>()),
        vec!["Paris", "Madrid", "Rome", "Amsterdam", "Prague"]
    );
}

#[tokio::test]
async fn test_create_location_unknown_organisation() {
    let server = api_server(common::test_pool().await);

    let response = server
        .post("/api/organisations/create/locations")
        .json(&json!({
            "organisation_id": 42,
            "location_name": "Nowhere",
            "longitude": 0.0,
            "latitude": 0.0
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_location_out_of_range() {
    let pool = common::test_pool().await;
    let organisation_id = common::create_test_organisation(&pool, "org").await;
    let server = api_server(pool);

    let response = server
        .post("/api/organisations/create/locations")
        .json(&json!({
            "organisation_id": organisation_id,
            "location_name": "North of the pole",
            "longitude": 10.0,
            "latitude": 95.0
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_list_without_bounding_box() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .await;

    response.assert_status_ok();
    assert_eq!(
        names(&response.json::<Value>()),
        vec!["Salzburg", "Vienna", "Berlin"]
    );
}

#[tokio::test]
async fn test_list_with_separate_parameters() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .add_query_param("sw_lat", 46.5)
        .add_query_param("sw_lon", 12.0)
        .add_query_param("ne_lat", 49.0)
        .add_query_param("ne_lon", 17.0)
        .await;

    response.assert_status_ok();
    assert_eq!(names(&response.json::<Value>()), vec!["Salzburg", "Vienna"]);
}

#[tokio::test]
async fn test_list_with_combined_parameter() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .add_query_param("bounding_box", "46.5,12.0,49.0,17.0")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(names(&json), vec!["Salzburg", "Vienna"]);
    assert!(
        json.as_array()
            .unwrap()
            .iter()
            .all(|l| l["organisation_id"] == organisation_id)
    );
}

#[tokio::test]
async fn test_list_box_with_no_matches() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .add_query_param("bounding_box", "-10,-10,-5,-5")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_incomplete_box() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .add_query_param("sw_lat", 46.5)
        .add_query_param("sw_lon", 12.0)
        .add_query_param("ne_lat", 49.0)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["missing"],
        json!(["ne_lon"])
    );
}

#[tokio::test]
async fn test_list_non_numeric_box() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .add_query_param("bounding_box", "46.5,twelve,49.0,17.0")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["parameter"],
        "sw_lon"
    );
}

#[tokio::test]
async fn test_list_wrong_number_of_values() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .add_query_param("bounding_box", "46.5,12.0,49.0")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_inverted_box() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .add_query_param("bounding_box", "49.0,12.0,46.5,17.0")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_ambiguous_box() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!("/api/organisations/{}/locations", organisation_id))
        .add_query_param("bounding_box", "46.5,12.0,49.0,17.0")
        .add_query_param("sw_lat", 46.5)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_unknown_organisation() {
    let server = api_server(common::test_pool().await);

    let response = server.get("/api/organisations/77/locations").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_organisation_wins_over_malformed_box() {
    let server = api_server(common::test_pool().await);

    let response = server
        .get("/api/organisations/999/locations")
        .add_query_param("sw_lat", 1)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_list_repeated_parameter_is_json_error() {
    let (server, organisation_id) = seeded().await;

    let response = server
        .get(&format!(
            "/api/organisations/{}/locations?sw_lat=46.5&sw_lat=47&sw_lon=12&ne_lat=49&ne_lon=17",
            organisation_id
        ))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["reason"].is_string());
}
