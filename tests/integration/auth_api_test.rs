// Registration and login against the live auth service

#[path = "../helpers/mod.rs"]
mod helpers;

use cinescope_harness::auth::{LoginRequest, LoginResponse, RegisterUserRequest, RegisterUserResponse};
use cinescope_harness::cleanup::{best_effort, scoped};
use cinescope_harness::core::UnauthorizedResponse;
use cinescope_harness::{DataGenerator, Role};
use helpers::*;

#[tokio::test]
#[ignore = "Requires live Cinescope environment"]
async fn test_register_then_login() {
    let fixtures = live_fixtures();
    let api = fixtures.anonymous().unwrap();

    let email = DataGenerator::generate_unique_email();
    let request = RegisterUserRequest::new(&email, "A X", "Abcdef12", "Abcdef12").unwrap();

    let registered: RegisterUserResponse = api
        .auth
        .register_user(&request)
        .send()
        .await
        .unwrap()
        .decode_valid()
        .unwrap();
    let admin = fixtures.super_admin().await.unwrap();

    scoped(
        async {
            assert_eq!(registered.email, email);
            assert_eq!(registered.roles, vec![Role::User]);

            let login = LoginRequest::new(&email, "Abcdef12").unwrap();
            let response: LoginResponse = api
                .auth
                .login_user(&login)
                .send()
                .await
                .unwrap()
                .decode_valid()
                .unwrap();

            assert!(!response.access_token.is_empty());
            assert_eq!(response.user.email, email);
        },
        best_effort("delete registered user", admin.users().delete_user(&registered.id).send()),
    )
    .await;
    admin.close();
}

#[tokio::test]
#[ignore = "Requires live Cinescope environment"]
async fn test_register_duplicate_email_conflicts() {
    let fixtures = &live_fixtures();
    let admin = &fixtures.super_admin().await.unwrap();

    fixtures
        .with_registered_user(admin, |request, _| async move {
            let api = fixtures.anonymous().unwrap();
            api.auth.register_user(&request).expect(409).send().await.unwrap();
        })
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "Requires live Cinescope environment"]
async fn test_login_with_wrong_password_is_unauthorized() {
    let fixtures = &live_fixtures();
    let admin = &fixtures.super_admin().await.unwrap();

    fixtures
        .with_registered_user(admin, |request, _| async move {
            let api = fixtures.anonymous().unwrap();
            let login = LoginRequest::new(&request.email, "Wrong-password1").unwrap();
            let response = api.auth.login_user(&login).expect(401).send().await.unwrap();
            let shape: serde_json::Value = response.json().unwrap();
            assert_eq!(shape["statusCode"], 401);
            assert!(!api.session().is_authorized());
        })
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "Requires live Cinescope environment"]
async fn test_protected_endpoint_without_token_is_unauthorized() {
    let fixtures = live_fixtures();
    let api = fixtures.anonymous().unwrap();

    let shape: UnauthorizedResponse = api
        .users
        .get_user("someone@example.com")
        .expect(401)
        .send()
        .await
        .unwrap()
        .decode_error()
        .unwrap();
    assert_eq!(shape.message, "Unauthorized");
}
