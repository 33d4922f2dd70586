// Property-based checks for the random data generator
//
// Every generated value must satisfy the service's validation rules, so a
// test that uses generated data never fails on the data itself.

use cinescope_harness::core::validate_request;
use cinescope_harness::generator::{DataGenerator, PASSWORD_SPECIALS};
use cinescope_harness::movies::NewMovieRow;
use proptest::prelude::*;
use serde_json::Value;

fn is_password_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_uppercase() || c.is_ascii_digit() || PASSWORD_SPECIALS.contains(c)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: password length stays within 8..=20
    #[test]
    fn prop_password_length(_round in 0u32..1000) {
        let password = DataGenerator::generate_random_password();
        let len = password.chars().count();
        prop_assert!((8..=20).contains(&len), "length {} out of range: {}", len, password);
    }

    /// Property: password always has an uppercase letter and a digit
    #[test]
    fn prop_password_character_classes(_round in 0u32..1000) {
        let password = DataGenerator::generate_random_password();
        prop_assert!(password.chars().any(|c| c.is_ascii_uppercase()), "no uppercase: {}", password);
        prop_assert!(password.chars().any(|c| c.is_ascii_digit()), "no digit: {}", password);
        prop_assert!(password.chars().all(is_password_char), "foreign character: {}", password);
    }

    /// Property: movie data stays inside the accepted ranges
    #[test]
    fn prop_movie_data_ranges(_round in 0u32..1000) {
        let movie = DataGenerator::generate_movie_data();

        prop_assert!((50..=1000).contains(&movie.price));
        prop_assert!((1..=4).contains(&movie.genre_id));
        prop_assert!((1..=5).contains(&movie.rating));
        prop_assert!(movie.description.chars().count() <= 100);
        prop_assert!(!movie.name.is_empty());
        prop_assert!(movie.name.split_whitespace().count() <= 3, "name: {}", movie.name);
        prop_assert!(!movie.name.ends_with('.'), "name: {}", movie.name);
    }

    /// Property: generated movies convert to a valid create request
    #[test]
    fn prop_movie_data_builds_request(_round in 0u32..1000) {
        let movie = DataGenerator::generate_movie_data();
        let request = movie.to_post_request();
        prop_assert!(request.is_ok(), "{:?}", request);
    }

    /// Property: generated registration payloads pass validation
    #[test]
    fn prop_register_user_validates(_round in 0u32..1000) {
        let user = DataGenerator::generate_register_user();
        prop_assert_eq!(&user.password, &user.password_repeat);
        prop_assert!(validate_request(&user).is_ok());
    }
}

#[test]
fn test_movie_payload_is_camel_case() {
    let payload = DataGenerator::generate_movie_data().to_payload();

    for key in ["name", "price", "description", "location", "published", "genreId", "rating", "createdAt"] {
        assert!(payload.contains_key(key), "missing {key}");
    }
    assert!(!payload.contains_key("genre_id"));
}

#[test]
fn test_movie_payload_translates_to_row() {
    let movie = DataGenerator::generate_movie_data();
    let row = NewMovieRow::from_payload(&Value::Object(movie.to_payload())).unwrap();

    assert_eq!(row.name, movie.name);
    assert_eq!(row.price, movie.price);
    assert_eq!(row.genre_id as i64, movie.genre_id);
    assert_eq!(row.location, movie.location.to_string());
    assert_eq!(row.rating, Some(movie.rating as f64));
}

#[test]
fn test_random_emails_use_fixed_domain() {
    for _ in 0..50 {
        let email = DataGenerator::generate_random_email();
        assert!(email.starts_with("kek"));
        assert!(email.ends_with("@gmail.com"));
    }
}
