/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::create_test_app;
use serde_json::{json, Value};
use tower::util::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    builder.body(Body::empty()).unwrap()
}

/// Register a user through the API, returning their bearer token
async fn register_user(app: &Router, username: &str, email: &str, password: &str) -> String {
    let body = json!({
        "username": username,
        "email": email,
        "password": password,
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/register", None, &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

/// Create a playlist through the API, returning its id
async fn create_playlist(app: &Router, token: &str, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/playlists",
            Some(token),
            &json!({ "name": name }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    let response = app
        .oneshot(empty_request("GET", "/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    for uri in ["/api/playlists", "/api/songs", "/api/songs/recommended"] {
        let response = app
            .clone()
            .oneshot(empty_request("GET", uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");

        let json = body_json(response).await;
        assert!(json["message"].is_string());
    }
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    let response = app
        .oneshot(empty_request(
            "GET",
            "/api/playlists",
            Some("not-a-real-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    let body = json!({
        "username": "alice",
        "email": "Alice@Example.com",
        "password": "secret123",
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/register", None, &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["token"].as_str().is_some());
    assert_eq!(json["user"]["username"], "alice");
    // Emails are normalized to lowercase
    assert_eq!(json["user"]["email"], "alice@example.com");
    assert!(json["user"].get("password").is_none());
    assert!(json["user"].get("password_hash").is_none());

    // The issued token works on a protected route
    let token = json["token"].as_str().unwrap();
    let response = app
        .oneshot(empty_request("GET", "/api/playlists", Some(token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_duplicate_rejected() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    register_user(&app, "alice", "alice@example.com", "secret123").await;

    // Same email, different username
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            &json!({
                "username": "alice2",
                "email": "alice@example.com",
                "password": "secret123",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("already exists"));

    // Same username, different email
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            &json!({
                "username": "alice",
                "email": "other@example.com",
                "password": "secret123",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_validation() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    let cases = [
        // Username too short
        json!({ "username": "ab", "email": "a@b.com", "password": "secret123" }),
        // Username too long
        json!({ "username": "a".repeat(21), "email": "a@b.com", "password": "secret123" }),
        // Bad email
        json!({ "username": "alice", "email": "not-an-email", "password": "secret123" }),
        // Password too short
        json!({ "username": "alice", "email": "a@b.com", "password": "short" }),
    ];

    for body in &cases {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/auth/register", None, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn test_login_flow() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    register_user(&app, "alice", "alice@example.com", "secret123").await;

    // Correct credentials, email case-insensitive
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": "ALICE@example.com", "password": "secret123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].as_str().is_some());
    assert_eq!(json["user"]["username"], "alice");

    // Wrong password
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": "alice@example.com", "password": "wrong" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(response).await;

    // Unknown email, same error body so accounts cannot be enumerated
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": "nobody@example.com", "password": "secret123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(response).await;

    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_playlist_crud() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();
    let token = register_user(&app, "alice", "alice@example.com", "secret123").await;

    // Empty to start
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/playlists", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);

    // Name is required
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/playlists",
            Some(&token),
            &json!({ "name": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Create two playlists
    let _first = create_playlist(&app, &token, "Road Trip").await;
    let second = create_playlist(&app, &token, "Focus").await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/playlists", Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    let playlists = json.as_array().unwrap();
    assert_eq!(playlists.len(), 2);

    // Delete one
    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/playlists/{second}"),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    let response = app
        .oneshot(empty_request("GET", "/api/playlists", Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Road Trip");
}

#[tokio::test]
async fn test_add_song_find_or_create() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();
    let token = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let playlist_id = create_playlist(&app, &token, "Road Trip").await;

    let body = json!({ "title": "Yesterday", "artist": "The Beatles" });

    // First add creates a custom catalog song
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&token),
            &body,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let songs = json["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["title"], "Yesterday");
    assert_eq!(songs[0]["is_recommended"], false);
    let song_id = songs[0]["id"].as_str().unwrap().to_string();

    // Same pair again: the existing song is reused and the add is
    // idempotent
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&token),
            &body,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let songs = json["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["id"], song_id.as_str());

    // The catalog holds exactly one entry for the pair
    let response = app
        .oneshot(empty_request("GET", "/api/songs", Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_song_by_id_and_unknown_id() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();
    let token = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let playlist_id = create_playlist(&app, &token, "Road Trip").await;

    // Create a catalog song directly
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/songs",
            Some(&token),
            &json!({ "title": "Imagine", "artist": "John Lennon" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let song = body_json(response).await;
    let song_id = song["id"].as_str().unwrap();

    // Add by id
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&token),
            &json!({ "song_id": song_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["songs"].as_array().unwrap().len(), 1);

    // Unknown id is a 404
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&token),
            &json!({ "song_id": "no-such-song" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Neither song_id nor a full title/artist pair is a 400
    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&token),
            &json!({ "title": "Imagine" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_song() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();
    let token = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let playlist_id = create_playlist(&app, &token, "Road Trip").await;

    for (title, artist) in [("One", "A"), ("Two", "B"), ("Three", "C")] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/playlists/{playlist_id}/songs"),
                Some(&token),
                &json!({ "title": title, "artist": artist }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Find the middle song's id
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/playlists", Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    let songs = json[0]["songs"].as_array().unwrap().clone();
    assert_eq!(songs.len(), 3);
    let middle_id = songs[1]["id"].as_str().unwrap().to_string();

    // Remove it; order of the rest is preserved
    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/playlists/{playlist_id}/songs/{middle_id}"),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let remaining = json["songs"].as_array().unwrap();
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[0]["title"], "One");
    assert_eq!(remaining[1]["title"], "Three");

    // Removing a song not in the playlist is a no-op, not an error
    let response = app
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/playlists/{playlist_id}/songs/{middle_id}"),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["songs"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_ownership_isolation() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    let alice = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let bob = register_user(&app, "bob", "bob@example.com", "secret123").await;

    let playlist_id = create_playlist(&app, &alice, "Alice's Mix").await;

    // Bob's listing does not include Alice's playlist
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/playlists", Some(&bob)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // Every mutation of a foreign playlist answers 404, as if it did not
    // exist
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&bob),
            &json!({ "title": "Intruder", "artist": "Bob" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The rejected add created nothing in the shared catalog
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/songs", Some(&alice)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/playlists/{playlist_id}/songs/any-song"),
            Some(&bob),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/playlists/{playlist_id}"),
            Some(&bob),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Alice's playlist is intact
    let response = app
        .oneshot(empty_request("GET", "/api/playlists", Some(&alice)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Alice's Mix");
}

#[tokio::test]
async fn test_deleting_playlist_keeps_songs() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();
    let token = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let playlist_id = create_playlist(&app, &token, "Road Trip").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&token),
            &json!({ "title": "Yesterday", "artist": "The Beatles" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/playlists/{playlist_id}"),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The catalog entry survives
    let response = app
        .oneshot(empty_request("GET", "/api/songs", Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_camel_case_body_keys() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();
    let token = register_user(&app, "alice", "alice@example.com", "secret123").await;
    let playlist_id = create_playlist(&app, &token, "Road Trip").await;

    // isRecommended is honored on song creation
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/songs",
            Some(&token),
            &json!({ "title": "Imagine", "artist": "John Lennon", "isRecommended": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let song = body_json(response).await;
    assert_eq!(song["is_recommended"], true);
    let song_id = song["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/songs/recommended", Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // songId works as the add-song body key
    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&token),
            &json!({ "songId": song_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["songs"].as_array().unwrap().len(), 1);
    assert_eq!(json["songs"][0]["id"], song_id);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    // Register so the only thing wrong with the token is its expiry
    let body = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "secret123",
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/register", None, &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let user_id = json["user"]["id"].as_str().unwrap().to_string();

    // Sign with the real key, but expired beyond the 60s validation leeway
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "sub": user_id,
        "exp": now - 120,
        "iat": now - 240,
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"test-secret-key"),
    )
    .unwrap();

    let response = app
        .oneshot(empty_request("GET", "/api/playlists", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_missing_user_rejected() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    // A correctly signed token whose subject was never registered
    let auth_service = tunedeck_server::AuthService::new("test-secret-key".to_string(), 7);
    let token = auth_service
        .issue_token(&tunedeck_core::UserId::new("ghost-user"))
        .unwrap();

    let response = app
        .oneshot(empty_request("GET", "/api/playlists", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Full happy-path walkthrough: register, create a playlist, add a song,
/// list, remove the song, delete the playlist, end with an empty listing.
#[tokio::test]
async fn test_full_scenario() {
    let (app, _pool, _temp_dir) = create_test_app().await.unwrap();

    let token = register_user(&app, "carol", "carol@example.com", "secret123").await;
    let playlist_id = create_playlist(&app, &token, "Evening").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/playlists/{playlist_id}/songs"),
            Some(&token),
            &json!({ "title": "Respect", "artist": "Aretha Franklin" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let song_id = json["songs"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/playlists", Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["songs"].as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/playlists/{playlist_id}/songs/{song_id}"),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["songs"].as_array().unwrap().len(), 0);

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/playlists/{playlist_id}"),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request("GET", "/api/playlists", Some(&token)))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_recommended_songs_listing() {
    let (app, pool, _temp_dir) = create_test_app().await.unwrap();
    let token = register_user(&app, "alice", "alice@example.com", "secret123").await;

    let inserted = tunedeck_server::seed::seed_recommended_songs(&pool)
        .await
        .unwrap();
    assert!(inserted > 0);

    // Re-seeding is a no-op
    let again = tunedeck_server::seed::seed_recommended_songs(&pool)
        .await
        .unwrap();
    assert_eq!(again, 0);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/songs/recommended", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let recommended = json.as_array().unwrap();
    assert_eq!(recommended.len(), inserted);
    assert!(recommended.iter().all(|s| s["is_recommended"] == true));

    // A custom song shows in /songs but not /songs/recommended
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/songs",
            Some(&token),
            &json!({ "title": "My Demo", "artist": "Me" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/songs", Some(&token)))
        .await
        .unwrap();
    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), inserted + 1);

    let response = app
        .oneshot(empty_request("GET", "/api/songs/recommended", Some(&token)))
        .await
        .unwrap();
    let recommended = body_json(response).await;
    assert_eq!(recommended.as_array().unwrap().len(), inserted);
}
