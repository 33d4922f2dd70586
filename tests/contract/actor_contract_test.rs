// Contract tests for actor login and session isolation

#[path = "../helpers/mod.rs"]
mod helpers;

use cinescope_harness::{Actor, AppError, Credentials, Operation, Role};
use chrono::{Duration, Utc};
use helpers::*;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_builds_authenticated_actor() {
    let server = MockServer::start().await;
    mount_login(&server, login_body("admin@example.com", "ADMIN", TEST_TOKEN)).await;
    let config = mock_config(&server);

    let actor = Actor::login(
        &config,
        Credentials::new("admin@example.com", "Secret123"),
        Role::Admin,
    )
    .await
    .unwrap();

    assert_eq!(actor.role(), Role::Admin);
    assert_eq!(actor.email(), "admin@example.com");
    assert_eq!(actor.login_response().access_token, TEST_TOKEN);
    assert!(actor.api().session().is_authorized());
    assert_eq!(actor.expected_status(Operation::CreateMovie), StatusCode::CREATED);
    assert_eq!(actor.expected_status(Operation::DeleteMovie), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_failed_login_aborts_construction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Неверный логин или пароль",
            "error": "Unauthorized",
            "statusCode": 401
        })))
        .mount(&server)
        .await;
    let config = mock_config(&server);

    let err = Actor::login(
        &config,
        Credentials::new("nobody@example.com", "WrongPass1"),
        Role::User,
    )
    .await
    .unwrap_err();

    assert_eq!(err.actual_status(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn test_elapsed_expiry_fails_login() {
    let server = MockServer::start().await;
    let mut body = login_body("a@example.com", "USER", TEST_TOKEN);
    body["expiresIn"] = json!((Utc::now() - Duration::minutes(1)).timestamp_millis());
    mount_login(&server, body).await;
    let config = mock_config(&server);

    let err = Actor::login(&config, Credentials::new("a@example.com", "Secret123"), Role::User)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Schema { .. }), "{err:?}");
}

#[tokio::test]
async fn test_malformed_user_email_fails_login() {
    let server = MockServer::start().await;
    mount_login(&server, login_body("nope", "USER", TEST_TOKEN)).await;
    let config = mock_config(&server);

    let err = Actor::login(&config, Credentials::new("a@example.com", "Secret123"), Role::User)
        .await
        .unwrap_err();

    match err {
        AppError::Schema { reason, .. } => assert!(reason.contains("user.email"), "{reason}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_actors_do_not_share_sessions() {
    let server = MockServer::start().await;
    mount_login(&server, login_body("a@example.com", "USER", TEST_TOKEN)).await;
    let config = mock_config(&server);

    let first = Actor::login(&config, Credentials::new("a@example.com", "Secret123"), Role::User)
        .await
        .unwrap();
    let second = Actor::login(&config, Credentials::new("a@example.com", "Secret123"), Role::User)
        .await
        .unwrap();

    assert!(!first.api().session().same_session(second.api().session()));

    first.api().session().clear_authorization();
    assert!(!first.api().session().is_authorized());
    assert!(second.api().session().is_authorized());
}

#[tokio::test]
async fn test_closed_actor_session_refuses_requests() {
    let server = MockServer::start().await;
    mount_login(&server, login_body("a@example.com", "USER", TEST_TOKEN)).await;
    let config = mock_config(&server);

    let actor = Actor::login(&config, Credentials::new("a@example.com", "Secret123"), Role::User)
        .await
        .unwrap();
    let api = actor.api().clone();
    actor.close();

    let err = api.movies.get_all_movies().send().await.unwrap_err();
    assert!(matches!(err, AppError::SessionClosed));
}
