use anyhow::Context;
use cinescope_harness::modules::movies::MoviesPage;
use cinescope_harness::{telemetry, Actor, Config, Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting Cinescope smoke check");
    tracing::info!("Auth service: {}", config.api.auth_base_url);
    tracing::info!("Movies service: {}", config.api.movies_base_url);

    let admin = Actor::login(&config.api, config.super_admin.clone(), Role::SuperAdmin)
        .await
        .context("Super admin login failed")?;

    let page: MoviesPage = admin
        .movies()
        .get_all_movies()
        .send()
        .await
        .context("Listing movies failed")?
        .decode()?;

    tracing::info!(
        count = page.count,
        page = page.page,
        page_size = page.page_size,
        page_count = page.page_count,
        "movies listed"
    );
    for movie in &page.movies {
        tracing::debug!(id = movie.id, name = %movie.name, price = movie.price, location = %movie.location, "movie");
    }

    if let Some(database) = &config.database {
        let db = cinescope_harness::DbHelper::connect(database)
            .await
            .context("Database connection failed")?;
        let version = db.server_version().await?;
        tracing::info!(%version, "movies database reachable");
    }

    admin.close();
    Ok(())
}
