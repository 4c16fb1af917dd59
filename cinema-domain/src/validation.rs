use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CreateBookingRequest, Movie};

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("hard-coded showtime regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hard-coded email regex")
});

pub const MAX_SEATS: i64 = 10;
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 50;

/// Checks a candidate booking against the catalog and the business rules.
///
/// Every rule runs; nothing short-circuits on the first failure, so the
/// returned list carries all simultaneous violations in rule order. An empty
/// list means the request is valid.
pub fn validate_booking(req: &CreateBookingRequest, movies: &[Movie]) -> Vec<String> {
    let mut errors = Vec::new();

    // Rule 1: movie id must resolve.
    let movie = if req.movie_id <= 0 {
        errors.push("movie id is required".to_string());
        None
    } else {
        let found = movies.iter().find(|m| m.id == req.movie_id);
        if found.is_none() {
            errors.push("movie not found".to_string());
        }
        found
    };

    // Rule 2: showtime shape, then membership against the resolved movie.
    if req.showtime.is_empty() {
        errors.push("showtime is required".to_string());
    } else if !TIME_RE.is_match(&req.showtime) {
        errors.push("invalid showtime format (use HH:MM)".to_string());
    } else if let Some(m) = movie {
        if !m.has_showtime(&req.showtime) {
            errors.push(format!(
                "showtime {} unavailable for this movie",
                req.showtime
            ));
        }
    }

    // Rule 3: seat count bounds, inclusive 1..=10.
    if req.seats <= 0 {
        errors.push("seat count must be greater than 0".to_string());
    } else if req.seats > MAX_SEATS {
        errors.push("maximum 10 seats".to_string());
    }

    // Rule 4: trimmed name length.
    let name = req.customer_name.trim();
    if name.is_empty() {
        errors.push("name is required".to_string());
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.push("name must be at least 2 characters".to_string());
    } else if name.chars().count() > MAX_NAME_LEN {
        errors.push("name too long".to_string());
    }

    // Rule 5: email shape.
    if req.customer_email.is_empty() {
        errors.push("email is required".to_string());
    } else if !EMAIL_RE.is_match(&req.customer_email) {
        errors.push("invalid email format".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![Movie {
            id: 1,
            title: "Avatar: The Way of Water".to_string(),
            genre: "Sci-Fi".to_string(),
            showtimes: vec!["10:00".into(), "14:00".into(), "18:00".into()],
            price: 400,
            duration: Some("192 min".to_string()),
        }]
    }

    fn valid_request() -> CreateBookingRequest {
        CreateBookingRequest {
            movie_id: 1,
            showtime: "10:00".to_string(),
            seats: 2,
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn valid_request_produces_no_errors() {
        assert!(validate_booking(&valid_request(), &catalog()).is_empty());
    }

    #[test]
    fn unknown_movie_is_reported() {
        let mut req = valid_request();
        req.movie_id = 99;
        let errors = validate_booking(&req, &catalog());
        assert_eq!(errors, vec!["movie not found"]);
    }

    #[test]
    fn non_positive_movie_id_is_reported() {
        let mut req = valid_request();
        req.movie_id = 0;
        let errors = validate_booking(&req, &catalog());
        assert_eq!(errors, vec!["movie id is required"]);
    }

    #[test]
    fn well_formed_showtime_must_still_belong_to_the_movie() {
        let mut req = valid_request();
        req.showtime = "09:00".to_string();
        let errors = validate_booking(&req, &catalog());
        assert_eq!(errors, vec!["showtime 09:00 unavailable for this movie"]);
    }

    #[test]
    fn malformed_showtime_is_reported_without_membership_check() {
        let mut req = valid_request();
        req.showtime = "25:99".to_string();
        let errors = validate_booking(&req, &catalog());
        assert_eq!(errors, vec!["invalid showtime format (use HH:MM)"]);
    }

    #[test]
    fn seat_bounds_are_inclusive_at_both_ends() {
        for seats in [1, 10] {
            let mut req = valid_request();
            req.seats = seats;
            assert!(
                validate_booking(&req, &catalog()).is_empty(),
                "{seats} seats should be accepted"
            );
        }
        let mut req = valid_request();
        req.seats = 0;
        assert_eq!(
            validate_booking(&req, &catalog()),
            vec!["seat count must be greater than 0"]
        );
        req.seats = 11;
        assert_eq!(validate_booking(&req, &catalog()), vec!["maximum 10 seats"]);
    }

    #[test]
    fn name_is_trimmed_before_length_checks() {
        let mut req = valid_request();
        req.customer_name = "  A  ".to_string();
        assert_eq!(
            validate_booking(&req, &catalog()),
            vec!["name must be at least 2 characters"]
        );

        req.customer_name = "   ".to_string();
        assert_eq!(validate_booking(&req, &catalog()), vec!["name is required"]);

        req.customer_name = "x".repeat(51);
        assert_eq!(validate_booking(&req, &catalog()), vec!["name too long"]);
    }

    #[test]
    fn email_shape_is_enforced() {
        let mut req = valid_request();
        req.customer_email = "not-an-email".to_string();
        assert_eq!(
            validate_booking(&req, &catalog()),
            vec!["invalid email format"]
        );

        req.customer_email = String::new();
        assert_eq!(validate_booking(&req, &catalog()), vec!["email is required"]);
    }

    #[test]
    fn multiple_violations_are_all_collected_in_rule_order() {
        let req = CreateBookingRequest {
            movie_id: 99,
            showtime: "9am".to_string(),
            seats: 11,
            customer_name: " ".to_string(),
            customer_email: "bad".to_string(),
        };
        let errors = validate_booking(&req, &catalog());
        assert_eq!(
            errors,
            vec![
                "movie not found",
                "invalid showtime format (use HH:MM)",
                "maximum 10 seats",
                "name is required",
                "invalid email format",
            ]
        );
    }
}
