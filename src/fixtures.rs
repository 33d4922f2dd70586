//! Reusable setup and teardown for API tests.
//!
//! Every actor handed out here runs on its own session. Entities created
//! through a fixture are removed by a super administrator with
//! [`cleanup::best_effort`], so a failed teardown is logged and never masks
//! the test outcome. The `with_*` helpers run teardown even when the test
//! body panics.

use std::future::Future;

use crate::actor::{Actor, ApiManager};
use crate::cleanup;
use crate::config::Config;
use crate::core::{Credentials, Result, Role};
use crate::db::DbHelper;
use crate::generator::DataGenerator;
use crate::modules::auth::{RegisterUserRequest, RegisterUserResponse};
use crate::modules::movies::{MovieData, MovieResponse, PostMovieRequest};
use crate::modules::users::UserResponse;

/// Fixture factory bound to one configuration
#[derive(Debug, Clone)]
pub struct Fixtures {
    config: Config,
}

/// A user created for a test, logged in as an isolated actor
#[derive(Debug)]
pub struct CreatedUser {
    pub user: UserResponse,
    pub actor: Actor,
}

impl CreatedUser {
    /// Close the user's session and delete the account through `admin`
    pub async fn cleanup(self, admin: &Actor) {
        let CreatedUser { user, actor } = self;
        actor.close();
        cleanup::best_effort(
            "delete fixture user",
            admin.users().delete_user(&user.id).send(),
        )
        .await;
    }
}

/// A movie created for a test
#[derive(Debug, Clone)]
pub struct CreatedMovie {
    pub movie: MovieResponse,
    pub request: PostMovieRequest,
}

impl CreatedMovie {
    pub fn id(&self) -> i64 {
        self.movie.id
    }

    /// Delete the movie through `admin`, whoever created it
    pub async fn cleanup(self, admin: &Actor) {
        let label = format!("delete movie {}", self.movie.id);
        cleanup::best_effort(&label, admin.movies().delete_movie(self.movie.id).send()).await;
    }
}

impl Fixtures {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load `.env` and the process environment
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Session with no credentials installed
    pub fn anonymous(&self) -> Result<ApiManager> {
        ApiManager::new(&self.config.api)
    }

    /// The configured super administrator
    pub async fn super_admin(&self) -> Result<Actor> {
        Actor::login(
            &self.config.api,
            self.config.super_admin.clone(),
            Role::SuperAdmin,
        )
        .await
    }

    /// A fresh verified `USER`, created by the super admin
    pub async fn common_user(&self) -> Result<CreatedUser> {
        self.created_user(Role::User).await
    }

    /// A fresh verified `ADMIN`, created by the super admin
    pub async fn admin_user(&self) -> Result<CreatedUser> {
        self.created_user(Role::Admin).await
    }

    /// A fresh verified user with `role`, created by the super admin
    pub async fn created_user(&self, role: Role) -> Result<CreatedUser> {
        let request = DataGenerator::generate_create_user().with_roles(vec![role]);
        let credentials = request.credentials();

        let admin = self.super_admin().await?;
        let created = admin.users().create_user(&request).send().await;
        admin.close();
        let user: UserResponse = created?.decode_valid()?;

        tracing::debug!(email = %user.email, %role, "fixture user created");

        let actor = Actor::login(&self.config.api, credentials, role).await?;
        Ok(CreatedUser { user, actor })
    }

    /// Register a user through the public endpoint
    pub async fn registered_user(&self) -> Result<(RegisterUserRequest, RegisterUserResponse)> {
        let request = DataGenerator::generate_register_user();
        let api = self.anonymous()?;
        let response = api.auth.register_user(&request).send().await;
        api.close_session();
        let registered = response?.decode_valid()?;
        Ok((request, registered))
    }

    /// Log in with credentials of a previously registered user
    pub async fn login_as(&self, credentials: Credentials, role: Role) -> Result<Actor> {
        Actor::login(&self.config.api, credentials, role).await
    }

    /// Create a random movie as `creator`
    pub async fn created_movie(&self, creator: &Actor) -> Result<CreatedMovie> {
        let data: MovieData = DataGenerator::generate_movie_data();
        self.created_movie_from(creator, data.to_post_request()?).await
    }

    pub async fn created_movie_from(
        &self,
        creator: &Actor,
        request: PostMovieRequest,
    ) -> Result<CreatedMovie> {
        let movie: MovieResponse = creator
            .movies()
            .create_movie(&request)
            .send()
            .await?
            .decode()?;

        tracing::debug!(id = movie.id, name = %movie.name, "fixture movie created");

        Ok(CreatedMovie { movie, request })
    }

    /// Create a random movie as `creator`, run `body`, then delete it as `admin`
    pub async fn with_movie<F, Fut, T>(&self, creator: &Actor, admin: &Actor, body: F) -> Result<T>
    where
        F: FnOnce(CreatedMovie) -> Fut,
        Fut: Future<Output = T>,
    {
        let created = self.created_movie(creator).await?;
        Ok(cleanup::scoped(body(created.clone()), created.cleanup(admin)).await)
    }

    /// Create a user with `role`, run `body` as that user, then delete it as `admin`
    pub async fn with_user<F, Fut, T>(&self, role: Role, admin: &Actor, body: F) -> Result<T>
    where
        F: FnOnce(CreatedUser) -> Fut,
        Fut: Future<Output = T>,
    {
        let created = self.created_user(role).await?;
        let user_id = created.user.id.clone();
        let teardown = async move {
            cleanup::best_effort(
                "delete fixture user",
                admin.users().delete_user(&user_id).send(),
            )
            .await;
        };
        Ok(cleanup::scoped(body(created), teardown).await)
    }

    /// Register a user, run `body` with its payload and response, then delete it as `admin`
    pub async fn with_registered_user<F, Fut, T>(&self, admin: &Actor, body: F) -> Result<T>
    where
        F: FnOnce(RegisterUserRequest, RegisterUserResponse) -> Fut,
        Fut: Future<Output = T>,
    {
        let (request, registered) = self.registered_user().await?;
        let user_id = registered.id.clone();
        let teardown = async move {
            cleanup::best_effort(
                "delete registered user",
                admin.users().delete_user(&user_id).send(),
            )
            .await;
        };
        Ok(cleanup::scoped(body(request, registered), teardown).await)
    }

    /// Connect to the movies database
    pub async fn db_helper(&self) -> Result<DbHelper> {
        DbHelper::connect(self.config.database()?).await
    }
}
