// Cross-checks between the movies API and its database

#[path = "../helpers/mod.rs"]
mod helpers;

use cinescope_harness::cleanup::{best_effort, scoped};
use cinescope_harness::movies::NewMovieRow;
use cinescope_harness::DataGenerator;
use helpers::*;
use serde_json::Value;

#[tokio::test]
#[ignore = "Requires movies database"]
async fn test_server_version_is_postgres() {
    let db = live_fixtures().db_helper().await.unwrap();
    let version = db.server_version().await.unwrap();
    assert!(version.starts_with("PostgreSQL"), "{version}");
}

#[tokio::test]
#[ignore = "Requires movies database"]
async fn test_movie_deleted_via_api_is_gone_from_database() {
    let fixtures = live_fixtures();
    let db = &fixtures.db_helper().await.unwrap();
    let admin = &fixtures.super_admin().await.unwrap();

    // teardown only matters when the body fails before its own delete
    fixtures
        .with_movie(admin, admin, |created| async move {
            let row = db.get_movie_by_id(created.id()).await.unwrap().unwrap();
            assert_eq!(row.name, created.movie.name);
            assert_eq!(row.price, created.movie.price as f64);

            admin
                .movies()
                .delete_movie(created.id())
                .send()
                .await
                .unwrap();

            assert!(db.get_movie_by_id(created.id()).await.unwrap().is_none());
            assert!(!db.movie_exists_by_id(created.id()).await.unwrap());
        })
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "Requires movies database"]
async fn test_movie_inserted_in_database_is_served_by_api() {
    let fixtures = live_fixtures();
    let db = fixtures.db_helper().await.unwrap();
    let api = fixtures.anonymous().unwrap();

    let data = DataGenerator::generate_movie_data();
    let new_row = NewMovieRow::from_payload(&Value::Object(data.to_payload())).unwrap();
    let row = db.create_test_movie(&new_row).await.unwrap();

    scoped(
        async {
            let by_name = db.get_movie_by_name(&data.name).await.unwrap().unwrap();
            assert_eq!(by_name.id, row.id);

            let movie: cinescope_harness::movies::MovieResponse = api
                .movies
                .get_movie_by_id(row.id)
                .send()
                .await
                .unwrap()
                .decode()
                .unwrap();
            assert_eq!(movie.name, data.name);
            assert_eq!(movie.price, data.price);
        },
        best_effort("delete inserted movie", db.delete_movie(row.id)),
    )
    .await;

    assert!(!db.delete_movie(row.id).await.unwrap());
}

#[tokio::test]
#[ignore = "Requires movies database"]
async fn test_user_row_round_trip() {
    let db = live_fixtures().db_helper().await.unwrap();
    let user = DataGenerator::generate_user_data();

    let row = db.create_test_user(&user).await.unwrap();
    let ids = [user.id.clone()];

    scoped(
        async {
            assert_eq!(row.email, user.email);
            assert!(db.user_exists_by_email(&user.email).await.unwrap());
            assert_eq!(
                db.get_user_by_email(&user.email).await.unwrap().map(|u| u.id),
                Some(user.id.clone())
            );
        },
        best_effort("delete inserted user", db.cleanup_test_data(&ids, &[])),
    )
    .await;

    assert!(db.get_user_by_id(&user.id).await.unwrap().is_none());
}
