//! Database cross-checks against the movies PostgreSQL instance.

use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::core::Result;
use crate::modules::accounts::AccountRepository;
use crate::modules::movies::{MovieRepository, MovieRow, NewMovieRow};
use crate::modules::users::{NewUserRow, UserRepository, UserRow};

/// Facade over the user, movie and account repositories sharing one pool
#[derive(Clone)]
pub struct DbHelper {
    pool: PgPool,
    users: UserRepository,
    movies: MovieRepository,
    accounts: AccountRepository,
}

impl DbHelper {
    pub fn new(pool: PgPool, config: &DatabaseConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            movies: MovieRepository::new(pool.clone(), config.price_column),
            accounts: AccountRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = config.create_pool().await?;
        Ok(Self::new(pool, config))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn accounts(&self) -> &AccountRepository {
        &self.accounts
    }

    pub async fn create_test_user(&self, user: &NewUserRow) -> Result<UserRow> {
        self.users.create(user).await
    }

    pub async fn create_test_movie(&self, movie: &NewMovieRow) -> Result<MovieRow> {
        self.movies.create(movie).await
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.users.find_by_id(id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.users.find_by_email(email).await
    }

    pub async fn get_movie_by_id(&self, id: i64) -> Result<Option<MovieRow>> {
        self.movies.find_by_id(id).await
    }

    pub async fn get_movie_by_name(&self, name: &str) -> Result<Option<MovieRow>> {
        self.movies.find_by_name(name).await
    }

    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool> {
        self.users.exists_by_email(email).await
    }

    pub async fn movie_exists_by_id(&self, id: i64) -> Result<bool> {
        self.movies.exists_by_id(id).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<bool> {
        self.users.delete(id).await
    }

    pub async fn delete_movie(&self, id: i64) -> Result<bool> {
        self.movies.delete(id).await
    }

    /// Delete the given users and movies; stops at the first database error
    pub async fn cleanup_test_data(&self, user_ids: &[String], movie_ids: &[i64]) -> Result<()> {
        for id in movie_ids {
            self.movies.delete(*id).await?;
        }
        for id in user_ids {
            self.users.delete(id).await?;
        }
        tracing::debug!(
            users = user_ids.len(),
            movies = movie_ids.len(),
            "cleaned up test data"
        );
        Ok(())
    }

    /// `SELECT version()`
    pub async fn server_version(&self) -> Result<String> {
        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(&self.pool)
            .await?;
        Ok(version)
    }
}
