use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

use crate::core::{validate_request, AppError, Result};
use crate::impl_model_payload;
use crate::requester::{IntoQuery, QueryPairs};

/// Cinema location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "MSK")]
    Msk,
    #[serde(rename = "SPB")]
    Spb,
}

impl Location {
    pub fn all() -> &'static [Location] {
        &[Location::Msk, Location::Spb]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Msk => "MSK",
            Location::Spb => "SPB",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MSK" => Ok(Location::Msk),
            "SPB" => Ok(Location::Spb),
            _ => Err(format!("Invalid location: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

/// Movie as returned by the movies service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub genre_id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price: i64,
    pub rating: f64,
    pub location: Location,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub genre: Genre,
}

/// Body of `GET /movies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviesPage {
    pub movies: Vec<MovieResponse>,
    pub count: i64,
    pub page: i64,
    pub page_size: i64,
    pub page_count: i64,
}

/// Query filter for `GET /movies`; the service ANDs every provided field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviesFilter {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub locations: Option<Vec<Location>>,
    pub genre_id: Option<i64>,
    pub published: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl MoviesFilter {
    pub fn price_between(mut self, min: i64, max: i64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    pub fn locations(mut self, locations: &[Location]) -> Self {
        self.locations = Some(locations.to_vec());
        self
    }

    pub fn genre(mut self, genre_id: i64) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// Whether a returned movie satisfies every provided field
    pub fn matches(&self, movie: &MovieResponse) -> bool {
        self.min_price.map_or(true, |min| movie.price >= min)
            && self.max_price.map_or(true, |max| movie.price <= max)
            && self
                .locations
                .as_ref()
                .map_or(true, |locs| locs.contains(&movie.location))
            && self.genre_id.map_or(true, |g| movie.genre_id == g)
            && self.published.map_or(true, |p| movie.published == p)
    }
}

impl IntoQuery for &MoviesFilter {
    fn into_query(self) -> QueryPairs {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: String| pairs.push((key.to_string(), value));

        if let Some(v) = self.min_price {
            push("minPrice", v.to_string());
        }
        if let Some(v) = self.max_price {
            push("maxPrice", v.to_string());
        }
        for location in self.locations.iter().flatten() {
            push("locations", location.to_string());
        }
        if let Some(v) = self.genre_id {
            push("genreId", v.to_string());
        }
        if let Some(v) = self.published {
            push("published", v.to_string());
        }
        if let Some(v) = self.page {
            push("page", v.to_string());
        }
        if let Some(v) = self.page_size {
            push("pageSize", v.to_string());
        }
        pairs
    }
}

impl IntoQuery for MoviesFilter {
    fn into_query(self) -> QueryPairs {
        (&self).into_query()
    }
}

/// Body of `POST /movies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostMovieRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: i64,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    pub location: Location,
    pub published: bool,
    pub genre_id: i64,
}

impl PostMovieRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        location: Location,
        published: bool,
        genre_id: i64,
    ) -> Result<Self> {
        let request = Self {
            name: name.into(),
            image_url: None,
            price,
            description: description.into(),
            location,
            published,
            genre_id,
        };
        validate_request(&request)?;
        Ok(request)
    }
}

/// Body of `PATCH /movies/{id}`; unset fields are left untouched by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchMovieRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl_model_payload!(PostMovieRequest, PatchMovieRequest);

/// Randomized movie payload produced by the data generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieData {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub location: Location,
    pub published: bool,
    pub genre_id: i64,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

impl MovieData {
    pub fn to_post_request(&self) -> Result<PostMovieRequest> {
        PostMovieRequest::new(
            self.name.clone(),
            self.description.clone(),
            self.price,
            self.location,
            self.published,
            self.genre_id,
        )
    }

    /// camelCase mapping with every generated field
    pub fn to_payload(&self) -> Map<String, Value> {
        match json!(self) {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

/// Row of the `movies` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MovieRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub genre_id: i32,
    pub image_url: Option<String>,
    pub price: f64,
    pub rating: Option<f64>,
    pub location: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Values for inserting a `movies` row directly
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovieRow {
    pub name: String,
    pub description: String,
    pub genre_id: i32,
    pub image_url: Option<String>,
    pub price: i64,
    pub rating: Option<f64>,
    pub location: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl NewMovieRow {
    /// Translate a camelCase API payload into row values
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let field = |key: &str| {
            payload
                .get(key)
                .filter(|v| !v.is_null())
                .ok_or_else(|| AppError::validation(format!("{}: missing from movie payload", key)))
        };
        let text = |key: &str| -> Result<String> {
            field(key)?
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| AppError::validation(format!("{}: expected a string", key)))
        };
        let integer = |key: &str| -> Result<i64> {
            field(key)?
                .as_i64()
                .ok_or_else(|| AppError::validation(format!("{}: expected an integer", key)))
        };

        let genre_id = i32::try_from(integer("genreId")?)
            .map_err(|_| AppError::validation("genreId: out of range"))?;

        let created_at = match payload.get("createdAt").and_then(Value::as_str) {
            Some(text) => DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| AppError::validation(format!("createdAt: {}", e)))?,
            None => Utc::now(),
        };

        Ok(Self {
            name: text("name")?,
            description: text("description")?,
            genre_id,
            image_url: payload
                .get("imageUrl")
                .and_then(Value::as_str)
                .map(str::to_string),
            price: integer("price")?,
            rating: payload.get("rating").and_then(Value::as_f64),
            location: text("location")?,
            published: field("published")?
                .as_bool()
                .ok_or_else(|| AppError::validation("published: expected a boolean"))?,
            created_at,
        })
    }
}

impl From<&MovieData> for NewMovieRow {
    fn from(data: &MovieData) -> Self {
        Self {
            name: data.name.clone(),
            description: data.description.clone(),
            genre_id: data.genre_id as i32,
            image_url: None,
            price: data.price,
            rating: Some(data.rating as f64),
            location: data.location.to_string(),
            published: data.published,
            created_at: data.created_at,
        }
    }
}
