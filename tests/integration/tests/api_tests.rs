//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, count_users, fixtures::*,
    TestServer,
};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

async fn register(server: &TestServer, credentials: &Credentials) -> Value {
    let response = server
        .action(Method::POST, "/auth", "register")
        .json(credentials)
        .send()
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn super_admin(server: &TestServer) -> i32 {
    seed_admin(&server.pool, &server.super_admin, "Владелец")
        .await
        .unwrap()
}

fn user_id(registered: &Value) -> i64 {
    registered["user"]["id"].as_i64().unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["database"], true);
}

// ============================================================================
// Routing and CORS Tests
// ============================================================================

#[tokio::test]
async fn test_preflight_per_subsystem() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    for (path, methods, headers) in [
        ("/auth", "GET, POST, PUT, OPTIONS", "Content-Type, X-User-Token"),
        (
            "/admin",
            "GET, POST, PUT, DELETE, OPTIONS",
            "Content-Type, X-Admin-Id, X-Admin-Code",
        ),
        ("/forum", "GET, POST, PUT, OPTIONS", "Content-Type, X-User-Id"),
    ] {
        let response = server
            .action(Method::OPTIONS, path, "anything")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let h = response.headers();
        assert_eq!(h["access-control-allow-origin"], "*");
        assert_eq!(h["access-control-allow-methods"], methods);
        assert_eq!(h["access-control-allow-headers"], headers);
        assert!(response.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_unknown_action_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .action(Method::GET, "/forum", "register")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Endpoint not found");
}

#[tokio::test]
async fn test_admin_gate_runs_before_routing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .action(Method::GET, "/admin", "nope")
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Admin ID required");

    let admin_id = super_admin(&server).await;
    let response = server
        .admin(Method::GET, "nope", admin_id, None)
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Endpoint not found");
}

// ============================================================================
// Identity Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_duplicate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();

    let registered = register(&server, &credentials).await;
    assert_eq!(registered["success"], true);
    assert_eq!(registered["user"]["username"], credentials.username.as_str());
    assert_eq!(registered["user"]["rank_level"], 1);
    assert_eq!(registered["user"]["status"], "Игрок");
    assert!(!registered["token"].as_str().unwrap().is_empty());

    let response = server
        .action(Method::POST, "/auth", "register")
        .json(&credentials)
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "Username already exists");
    assert_eq!(count_users(&server.pool, &credentials.username).await.unwrap(), 1);
}

#[tokio::test]
async fn test_login_outcomes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_id = super_admin(&server).await;
    let credentials = Credentials::unique();
    let registered = register(&server, &credentials).await;

    let response = server
        .action(Method::POST, "/auth", "login")
        .json(&json!({"username": credentials.username, "password": "wrong"}))
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Invalid credentials");

    let response = server
        .action(Method::POST, "/auth", "login")
        .json(&credentials)
        .send()
        .await
        .unwrap();
    let session: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!session["token"].as_str().unwrap().is_empty());
    assert_eq!(session["user"]["is_banned"], false);

    let response = server
        .admin(Method::POST, "ban", admin_id, None)
        .json(&json!({"userId": user_id(&registered)}))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .action(Method::POST, "/auth", "login")
        .json(&credentials)
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(message, "Account is banned");
}

#[tokio::test]
async fn test_profile_and_update() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let registered = register(&server, &Credentials::unique()).await;
    let id = user_id(&registered);

    let response = server
        .action(Method::PUT, "/auth", "update-profile")
        .json(&json!({"userId": id, "customStatus": "на смене"}))
        .send()
        .await
        .unwrap();
    let updated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["user"]["custom_status"], "на смене");
    assert!(updated["user"].get("password_hash").is_none());

    let response = server
        .action(Method::PUT, "/auth", "update-profile")
        .json(&json!({"userId": id}))
        .send()
        .await
        .unwrap();
    let unchanged: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged["user"]["custom_status"], "на смене");

    let response = server
        .action(Method::GET, "/auth", "profile")
        .query(&[("userId", id.to_string())])
        .send()
        .await
        .unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["user"]["custom_status"], "на смене");
    assert!(profile["roles"].as_array().unwrap().is_empty());

    let response = server
        .action(Method::GET, "/auth", "profile")
        .query(&[("userId", "2147483647")])
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Administration Tests
// ============================================================================

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let player = user_id(&register(&server, &Credentials::unique()).await) as i32;
    let victim = register(&server, &Credentials::unique()).await;

    let response = server
        .admin(Method::POST, "ban", player, None)
        .json(&json!({"userId": user_id(&victim)}))
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(message, "Not authorized");

    let banned: bool = sqlx::query_scalar("SELECT is_banned FROM users WHERE id = $1")
        .bind(user_id(&victim) as i32)
        .fetch_one(&server.pool)
        .await
        .unwrap();
    assert!(!banned);

    let response = server
        .action(Method::GET, "/admin", "users")
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Admin ID required");
}

#[tokio::test]
async fn test_admin_code_checks() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let moderator = seed_admin(&server.pool, &unique_name("mod"), "Модератор")
        .await
        .unwrap();
    let today = Utc::now().date_naive();
    let live = unique_name("LIVE");
    let expired = unique_name("OLD");
    seed_code(&server.pool, &live, today).await.unwrap();
    seed_code(&server.pool, &expired, today - Duration::days(1))
        .await
        .unwrap();

    for code in [None, Some(expired.as_str()), Some("bogus")] {
        let response = server
            .admin(Method::GET, "roles", moderator, code)
            .send()
            .await
            .unwrap();
        let message = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(message, "Invalid or expired admin code");
    }

    let response = server
        .admin(Method::GET, "roles", moderator, Some(&live))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_create_and_assign_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_id = super_admin(&server).await;
    let member = user_id(&register(&server, &Credentials::unique()).await);
    let role_name = unique_name("Moderator");

    let response = server
        .admin(Method::POST, "create-role", admin_id, None)
        .json(&json!({"name": role_name, "color": "#00FF00"}))
        .send()
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created["success"], true);
    assert_eq!(created["role"]["is_custom"], true);
    assert_eq!(created["role"]["color"], "#00FF00");
    assert_eq!(created["role"]["created_by_admin_id"], admin_id);
    let role_id = created["role"]["id"].as_i64().unwrap();

    for _ in 0..2 {
        let response = server
            .admin(Method::POST, "assign-role", admin_id, None)
            .json(&json!({"userId": member, "roleId": role_id}))
            .send()
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let memberships: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_roles WHERE user_id = $1")
        .bind(member as i32)
        .fetch_one(&server.pool)
        .await
        .unwrap();
    assert_eq!(memberships, 1);

    let response = server
        .action(Method::GET, "/auth", "profile")
        .query(&[("userId", member.to_string())])
        .send()
        .await
        .unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["roles"][0]["name"], role_name.as_str());

    let response = server
        .admin(Method::POST, "assign-role", admin_id, None)
        .json(&json!({"userId": member, "roleId": i32::MAX}))
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(message.starts_with("Role not found"));

    let response = server
        .admin(Method::POST, "assign-role", admin_id, None)
        .json(&json!({"userId": i32::MAX, "roleId": role_id}))
        .send()
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(message.starts_with("User not found"));
}

#[tokio::test]
async fn test_list_roles_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_id = super_admin(&server).await;

    let response = server
        .admin(Method::GET, "roles", admin_id, None)
        .send()
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let keys: Vec<(bool, String)> = body["roles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["is_custom"].as_bool().unwrap(),
                r["name"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[tokio::test]
async fn test_factions_and_assignment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_id = super_admin(&server).await;
    seed_faction(&server.pool, &unique_name("Якудза"), "криминальная")
        .await
        .unwrap();
    seed_faction(&server.pool, &unique_name("ФСБ"), "закрытая")
        .await
        .unwrap();
    let police = seed_faction(&server.pool, &unique_name("Полиция"), "открытая")
        .await
        .unwrap();

    let response = server
        .admin(Method::GET, "factions", admin_id, None)
        .send()
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let rank = |label: &str| match label {
        "открытая" => 0,
        "закрытая" => 1,
        _ => 2,
    };
    let keys: Vec<(u8, String)> = body["factions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| {
            (
                rank(f["type"].as_str().unwrap()),
                f["name"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let member = user_id(&register(&server, &Credentials::unique()).await);
    let response = server
        .admin(Method::POST, "assign-faction", admin_id, None)
        .json(&json!({"userId": member, "factionId": police}))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .action(Method::GET, "/auth", "profile")
        .query(&[("userId", member.to_string())])
        .send()
        .await
        .unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["user"]["faction_color"], "#334455");

    let response = server
        .admin(Method::POST, "assign-faction", admin_id, None)
        .json(&json!({"userId": member, "factionId": null}))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .admin(Method::PUT, "update-status", admin_id, None)
        .json(&json!({"userId": member, "status": "Шериф"}))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .admin(Method::GET, "users", admin_id, None)
        .send()
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let row = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"].as_i64() == Some(member))
        .cloned()
        .unwrap();
    assert_eq!(row["status"], "Шериф");
    assert!(row["faction_name"].is_null());
}

// ============================================================================
// Forum Tests
// ============================================================================

#[tokio::test]
async fn test_forum_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = user_id(&register(&server, &Credentials::unique()).await);
    let category = unique_name("cat");

    let response = server
        .action(Method::POST, "/forum", "create-post")
        .json(&json!({"userId": author, "title": "Привет", "content": "Всем", "category": category}))
        .send()
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let post_id = created["post"]["id"].as_i64().unwrap();
    assert_eq!(created["post"]["likes"], 0);

    let response = server
        .action(Method::GET, "/forum", "posts")
        .query(&[("category", category.as_str())])
        .send()
        .await
        .unwrap();
    let listed: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed["posts"].as_array().unwrap().len(), 1);
    assert_eq!(listed["posts"][0]["id"], post_id);

    for text in ["первый", "второй"] {
        let response = server
            .action(Method::POST, "/forum", "add-comment")
            .json(&json!({"userId": author, "postId": post_id, "content": text}))
            .send()
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .action(Method::GET, "/forum", "comments")
        .query(&[("postId", post_id.to_string())])
        .send()
        .await
        .unwrap();
    let thread: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let texts: Vec<_> = thread["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, ["первый", "второй"]);
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = user_id(&register(&server, &Credentials::unique()).await);

    let response = server
        .action(Method::POST, "/forum", "add-comment")
        .json(&json!({"userId": author, "postId": i32::MAX, "content": "в пустоту"}))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM forum_comments WHERE post_id = $1")
        .bind(i32::MAX)
        .fetch_one(&server.pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn test_concurrent_likes_converge() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = user_id(&register(&server, &Credentials::unique()).await);
    let response = server
        .action(Method::POST, "/forum", "create-post")
        .json(&json!({"userId": author, "title": "Мем", "content": "лайкайте"}))
        .send()
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let post_id = created["post"]["id"].as_i64().unwrap();

    let likes = futures::future::join_all((0..10).map(|_| {
        server
            .action(Method::POST, "/forum", "like-post")
            .json(&json!({"postId": post_id}))
            .send()
    }))
    .await;
    assert!(likes
        .iter()
        .all(|r| r.as_ref().is_ok_and(|r| r.status() == StatusCode::OK)));

    let response = server
        .action(Method::POST, "/forum", "like-post")
        .json(&json!({"postId": post_id}))
        .send()
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["likes"], 11);
}
