// Shared helpers for the contract and integration suites.
//
// Contract tests run against a `wiremock` server standing in for both
// Cinescope services. Integration tests talk to the live environment
// configured through `.env`.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use cinescope_harness::{telemetry, ApiConfig, Fixtures};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-access-token";

/// Config pointing both services at the mock server
pub fn mock_config(server: &MockServer) -> ApiConfig {
    telemetry::init_test_tracing();
    ApiConfig::new(server.uri(), server.uri())
}

/// Successful login body whose token expires in two hours
pub fn login_body(email: &str, role: &str, token: &str) -> Value {
    json!({
        "user": {
            "id": "4f1e1b36-6a09-4d0c-9d6c-5b1c0e3c2a10",
            "email": email,
            "fullName": "Test User",
            "roles": [role]
        },
        "accessToken": token,
        "refreshToken": "test-refresh-token",
        "expiresIn": (Utc::now() + Duration::hours(2)).timestamp_millis()
    })
}

/// Mount `POST /login` answering 201 with `body`
pub async fn mount_login(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount `POST /login` for one email only, so several actors can log in
/// against the same server with distinct tokens
pub async fn mount_login_for(server: &MockServer, email: &str, role: &str, token: &str) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_partial_json(json!({ "email": email })))
        .respond_with(ResponseTemplate::new(201).set_body_json(login_body(email, role, token)))
        .mount(server)
        .await;
}

pub fn movie_body(id: i64, name: &str, price: i64, location: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "A test movie",
        "genreId": 1,
        "imageUrl": null,
        "price": price,
        "rating": 4,
        "location": location,
        "published": true,
        "createdAt": "2025-03-01T10:00:00.000Z",
        "genre": {"name": "Drama"}
    })
}

pub fn movies_page(movies: Vec<Value>) -> Value {
    let count = movies.len();
    json!({
        "movies": movies,
        "count": count,
        "page": 1,
        "pageSize": 10,
        "pageCount": 1
    })
}

pub fn error_body(status: u16, error: &str, message: Value) -> Value {
    json!({
        "message": message,
        "error": error,
        "statusCode": status
    })
}

/// Fixtures for the live environment
pub fn live_fixtures() -> Fixtures {
    telemetry::init_test_tracing();
    Fixtures::from_env().expect("Cinescope environment must be configured (see .env)")
}
