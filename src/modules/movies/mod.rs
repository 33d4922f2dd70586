pub mod client;
pub mod models;
pub mod repository;

pub use client::{MoviesClient, MOVIES_ENDPOINT};
pub use models::{
    Genre, Location, MovieData, MovieResponse, MovieRow, MoviesFilter, MoviesPage, NewMovieRow,
    PatchMovieRequest, PostMovieRequest,
};
pub use repository::MovieRepository;
