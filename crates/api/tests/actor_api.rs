//! HTTP-level integration tests for the `/actors` endpoints.

mod common;

use agency_core::roles::ROLE_PRODUCER;
use agency_db::models::actor::CreateActor;
use agency_db::repositories::ActorRepo;
use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, patch_json_auth, post_json_auth, role_token, send,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_actor(pool: &PgPool, name: &str, age: i32, gender: &str) -> i64 {
    let input = CreateActor {
        name: name.to_string(),
        age,
        gender: gender.to_string(),
    };
    ActorRepo::create(pool, &input)
        .await
        .expect("actor insert should succeed")
        .id
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// An empty table is a 404, never an empty list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_empty_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/actors", &role_token(ROLE_PRODUCER)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "Item not found.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_returns_all_actors(pool: PgPool) {
    insert_actor(&pool, "Robert De Niro", 77, "male").await;
    insert_actor(&pool, "Meryl Streep", 71, "female").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/actors", &role_token(ROLE_PRODUCER)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let actors = json["actors"].as_array().expect("actors must be an array");
    assert_eq!(actors.len(), 2);
    assert_eq!(actors[0]["name"], "Robert De Niro");
    assert_eq!(actors[1]["gender"], "female");
}

/// Trailing slashes are ignored.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_with_trailing_slash(pool: PgPool) {
    insert_actor(&pool, "Robert De Niro", 77, "male").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/actors/", &role_token(ROLE_PRODUCER)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_actor(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = json!({ "name": "Jack Nicholson", "age": 83, "gender": "male" });

    let response = post_json_auth(app, "/actors", body, &role_token(ROLE_PRODUCER)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["actor"]["name"], "Jack Nicholson");
    assert_eq!(json["actor"]["age"], 83);
    assert_eq!(json["actor"]["gender"], "male");

    let id = json["actor"]["id"].as_i64().expect("id must be an integer");
    let stored = ActorRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .expect("created actor must be retrievable");
    assert_eq!(stored.name, "Jack Nicholson");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_missing_age_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = json!({ "name": "Marlon Brando", "gender": "male" });

    let response = post_json_auth(app, "/actors", body, &role_token(ROLE_PRODUCER)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "Request could not be processed.");
    assert!(ActorRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_each_missing_field_returns_422(pool: PgPool) {
    let full = json!({ "name": "Al Pacino", "age": 80, "gender": "male" });
    for field in ["name", "age", "gender"] {
        let mut body = full.clone();
        body.as_object_mut().unwrap().remove(field);

        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(app, "/actors", body, &role_token(ROLE_PRODUCER)).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing `{field}` must be rejected"
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_without_body_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(
        app,
        axum::http::Method::POST,
        "/actors",
        Some(&role_token(ROLE_PRODUCER)),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_non_integer_age_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "name": "Cary Grant", "age": "eighty", "gender": "male" });

    let response = post_json_auth(app, "/actors", body, &role_token(ROLE_PRODUCER)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_age_only(pool: PgPool) {
    let id = insert_actor(&pool, "Denzel Washington", 100, "male").await;
    let app = common::build_test_app(pool);

    let response = patch_json_auth(
        app,
        &format!("/actors/{id}"),
        json!({ "age": 66 }),
        &role_token(ROLE_PRODUCER),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["actor"]["id"], id);
    assert_eq!(json["actor"]["age"], 66);
    assert_eq!(json["actor"]["name"], "Denzel Washington");
    assert_eq!(json["actor"]["gender"], "male");
}

/// Falsy values are treated as "not provided" and leave the field unchanged.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_ignores_falsy_values(pool: PgPool) {
    let id = insert_actor(&pool, "Grace Kelly", 26, "female").await;
    let app = common::build_test_app(pool.clone());

    let response = patch_json_auth(
        app,
        &format!("/actors/{id}"),
        json!({ "name": "", "age": 0, "gender": null }),
        &role_token(ROLE_PRODUCER),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let stored = ActorRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Grace Kelly");
    assert_eq!(stored.age, 26);
    assert_eq!(stored.gender, "female");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_actor_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = patch_json_auth(
        app,
        "/actors/1111",
        json!({ "age": "1" }),
        &role_token(ROLE_PRODUCER),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], 404);
    assert_eq!(json["success"], false);
}

/// Not-found wins over a malformed payload.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_actor_with_bad_payload_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = patch_json_auth(
        app,
        "/actors/1111",
        json!({ "age": "not a number" }),
        &role_token(ROLE_PRODUCER),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_wrong_type_returns_422(pool: PgPool) {
    let id = insert_actor(&pool, "James Stewart", 89, "male").await;
    let app = common::build_test_app(pool);

    let response = patch_json_auth(
        app,
        &format!("/actors/{id}"),
        json!({ "age": "old" }),
        &role_token(ROLE_PRODUCER),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_non_numeric_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = patch_json_auth(
        app,
        "/actors/abc",
        json!({ "age": 30 }),
        &role_token(ROLE_PRODUCER),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_actor(pool: PgPool) {
    let id = insert_actor(&pool, "Humphrey Bogart", 57, "male").await;
    let app = common::build_test_app(pool.clone());

    let response = delete_auth(app, &format!("/actors/{id}"), &role_token(ROLE_PRODUCER)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["actor_id"], id);
    assert!(ActorRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_actor_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete_auth(app, "/actors/9999999", &role_token(ROLE_PRODUCER)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], 404);
    assert_eq!(json["success"], false);
}
