use reqwest::{Method, StatusCode};

use crate::requester::{HttpSession, IntoPayload, IntoQuery, PendingRequest, Requester};

pub const MOVIES_ENDPOINT: &str = "/movies";

/// Client for the movies service
#[derive(Clone)]
pub struct MoviesClient {
    requester: Requester,
}

impl MoviesClient {
    pub fn new(session: HttpSession, base_url: impl Into<String>) -> Self {
        Self {
            requester: Requester::new(session, base_url),
        }
    }

    pub fn session(&self) -> &HttpSession {
        self.requester.session()
    }

    /// `GET /movies` with the service's default paging
    pub fn get_all_movies(&self) -> PendingRequest<'_> {
        self.requester.send_request(Method::GET, MOVIES_ENDPOINT)
    }

    /// `GET /movies` with filter parameters; list values repeat their key
    pub fn get_movies_with_filter(&self, filter: impl IntoQuery) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::GET, MOVIES_ENDPOINT)
            .query(filter)
    }

    /// `POST /movies`, expecting 201 by default
    pub fn create_movie(&self, movie: impl IntoPayload) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::POST, MOVIES_ENDPOINT)
            .body(movie)
            .expect(StatusCode::CREATED)
    }

    pub fn get_movie_by_id(&self, movie_id: i64) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::GET, movie_path(movie_id))
    }

    /// `PATCH /movies/{id}`; only the fields present in the payload change
    pub fn update_movie(&self, movie_id: i64, patch: impl IntoPayload) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::PATCH, movie_path(movie_id))
            .body(patch)
    }

    pub fn delete_movie(&self, movie_id: i64) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::DELETE, movie_path(movie_id))
    }
}

fn movie_path(movie_id: i64) -> String {
    format!("{}/{}", MOVIES_ENDPOINT, movie_id)
}
