// Direct access to the `movies` table.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::models::{MovieRow, NewMovieRow};
use crate::config::PriceColumn;
use crate::core::{AppError, Result};

// Numeric columns are read back as float so one row type fits both schemas.
const SELECT_MOVIE: &str = r#"
    SELECT id::bigint AS id, name, description, genre_id::integer AS genre_id, image_url,
           price::double precision AS price, rating::double precision AS rating,
           location::text AS location, published, created_at::timestamptz AS created_at
    FROM movies
"#;

/// Repository for movie rows
#[derive(Clone)]
pub struct MovieRepository {
    pool: PgPool,
    price_column: PriceColumn,
}

impl MovieRepository {
    pub fn new(pool: PgPool, price_column: PriceColumn) -> Self {
        Self { pool, price_column }
    }

    /// Insert a movie and return the stored row
    pub async fn create(&self, movie: &NewMovieRow) -> Result<MovieRow> {
        let query = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO movies (
                name, description, genre_id, image_url, price, rating,
                location, published, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id::bigint
            "#,
        )
        .bind(&movie.name)
        .bind(&movie.description)
        .bind(movie.genre_id)
        .bind(&movie.image_url);

        let query = match self.price_column {
            PriceColumn::Float => query.bind(movie.price as f64),
            PriceColumn::Numeric => query.bind(Decimal::from(movie.price)),
        };

        let id = query
            .bind(movie.rating)
            .bind(&movie.location)
            .bind(movie.published)
            .bind(movie.created_at)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(id, name = %movie.name, "inserted movie row");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("movie {} after insert", id)))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<MovieRow>> {
        let row = sqlx::query_as::<_, MovieRow>(&format!("{SELECT_MOVIE} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// First row with this exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<MovieRow>> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "{SELECT_MOVIE} WHERE name = $1 ORDER BY id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Delete by id; returns whether a row was removed
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
