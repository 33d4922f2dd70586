//! Randomized but valid test data.
//!
//! Values are drawn from `rand` and `fake` on every call. Random emails are
//! only probabilistically unique; fixtures that must not collide with data
//! left behind by earlier runs use [`DataGenerator::generate_unique_email`].

use chrono::Utc;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::distributions::{Alphanumeric, DistString};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::core::Role;
use crate::modules::auth::RegisterUserRequest;
use crate::modules::movies::{Location, MovieData};
use crate::modules::users::{CreateUserRequest, NewUserRow};

pub const EMAIL_PREFIX: &str = "kek";
pub const EMAIL_DOMAIN: &str = "gmail.com";
pub const PASSWORD_SPECIALS: &str = "?@#$%^&*|:";

const EMAIL_RANDOM_LEN: usize = 8;
const PASSWORD_FILLER_MIN: usize = 6;
const PASSWORD_FILLER_MAX: usize = 18;
const MOVIE_DESCRIPTION_MAX: usize = 100;
const MOVIE_NAME_TOKEN_LEN: usize = 6;

/// Generator of domain payloads
pub struct DataGenerator;

impl DataGenerator {
    /// `kek` + 8 lowercase alphanumerics `@gmail.com`
    pub fn generate_random_email() -> String {
        format!("{}{}@{}", EMAIL_PREFIX, random_local_part(), EMAIL_DOMAIN)
    }

    /// Random email with a UUID-derived suffix
    pub fn generate_unique_email() -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!(
            "{}{}{}@{}",
            EMAIL_PREFIX,
            random_local_part(),
            &suffix[..12],
            EMAIL_DOMAIN
        )
    }

    /// `"{first} {last}"`
    pub fn generate_random_name() -> String {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        format!("{} {}", first, last)
    }

    /// One uppercase letter, one digit and 6 to 18 filler characters, shuffled
    pub fn generate_random_password() -> String {
        let mut rng = rand::thread_rng();

        let mut chars: Vec<char> = vec![
            rng.gen_range(b'A'..=b'Z') as char,
            rng.gen_range(b'0'..=b'9') as char,
        ];

        let pool: Vec<char> = ('a'..='z')
            .chain('0'..='9')
            .chain(PASSWORD_SPECIALS.chars())
            .collect();
        let filler = rng.gen_range(PASSWORD_FILLER_MIN..=PASSWORD_FILLER_MAX);
        for _ in 0..filler {
            if let Some(c) = pool.choose(&mut rng) {
                chars.push(*c);
            }
        }

        chars.shuffle(&mut rng);
        chars.into_iter().collect()
    }

    pub fn generate_movie_data() -> MovieData {
        let mut rng = rand::thread_rng();

        let mut words: Vec<String> = Words(2..3).fake();
        // movie names are unique server-side
        words.push(
            Alphanumeric
                .sample_string(&mut rng, MOVIE_NAME_TOKEN_LEN)
                .to_lowercase(),
        );
        let description: String = Sentence(3..12).fake();
        let location = Location::all()
            .choose(&mut rng)
            .copied()
            .unwrap_or(Location::Msk);

        MovieData {
            name: capitalize(&words.join(" ")),
            price: rng.gen_range(50..=1000),
            description: truncate_chars(&description, MOVIE_DESCRIPTION_MAX),
            location,
            published: rng.gen_bool(0.5),
            genre_id: rng.gen_range(1..=4),
            rating: rng.gen_range(1..=5),
            created_at: Utc::now(),
        }
    }

    /// Row for inserting a user straight into the database
    pub fn generate_user_data() -> NewUserRow {
        let now = Utc::now().naive_utc();
        NewUserRow {
            id: Uuid::new_v4().to_string(),
            email: Self::generate_unique_email(),
            full_name: Self::generate_random_name(),
            password: Self::generate_random_password(),
            created_at: now,
            updated_at: now,
            verified: false,
            banned: false,
            roles: Role::as_db_literal(&[Role::User]),
        }
    }

    /// Registration payload with matching password and repeat
    pub fn generate_register_user() -> RegisterUserRequest {
        let password = Self::generate_random_password();
        RegisterUserRequest {
            email: Self::generate_unique_email(),
            full_name: Self::generate_random_name(),
            password_repeat: password.clone(),
            password,
            roles: vec![Role::User],
            banned: None,
            verified: None,
        }
    }

    /// Admin creation payload: verified, not banned, `USER` role
    pub fn generate_create_user() -> CreateUserRequest {
        CreateUserRequest {
            email: Self::generate_unique_email(),
            full_name: Self::generate_random_name(),
            password: Self::generate_random_password(),
            verified: true,
            banned: false,
            roles: vec![Role::User],
        }
    }
}

fn random_local_part() -> String {
    Alphanumeric
        .sample_string(&mut rand::thread_rng(), EMAIL_RANDOM_LEN)
        .to_lowercase()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
