use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A movie in the catalog. Seeded once, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub showtimes: Vec<String>,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Movie {
    pub fn has_showtime(&self, showtime: &str) -> bool {
        self.showtimes.iter().any(|s| s == showtime)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    // Anticipated by clients but never written: cancellation removes the
    // record instead of flipping status. See DESIGN.md.
    Cancelled,
}

/// A persisted booking. `movie_title` and `total_price` are captured at
/// creation time and never updated if the catalog changes later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub movie_id: i64,
    pub movie_title: String,
    pub showtime: String,
    pub seats: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub total_price: i64,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
}

/// A booking joined against the current catalog at read time.
///
/// Both value paths are exposed: `recorded_title` / `recorded_total_price`
/// are the values stored at creation, while `movie_title` / `movie_genre` /
/// `total_price` are recomputed from whatever the catalog says now.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedBooking {
    pub id: i64,
    pub movie_id: i64,
    pub showtime: String,
    pub seats: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub recorded_title: String,
    pub recorded_total_price: i64,
    pub movie_title: String,
    pub movie_genre: String,
    pub total_price: i64,
}

pub const UNKNOWN_MOVIE_TITLE: &str = "unknown movie";
pub const UNKNOWN_GENRE: &str = "unknown";

impl EnrichedBooking {
    /// Joins a stored booking with the current catalog entry, substituting
    /// placeholders when the movie no longer resolves.
    pub fn join(booking: &Booking, movie: Option<&Movie>) -> Self {
        let (movie_title, movie_genre, total_price) = match movie {
            Some(m) => (m.title.clone(), m.genre.clone(), m.price * booking.seats),
            None => (UNKNOWN_MOVIE_TITLE.to_string(), UNKNOWN_GENRE.to_string(), 0),
        };
        Self {
            id: booking.id,
            movie_id: booking.movie_id,
            showtime: booking.showtime.clone(),
            seats: booking.seats,
            customer_name: booking.customer_name.clone(),
            customer_email: booking.customer_email.clone(),
            booking_date: booking.booking_date,
            status: booking.status,
            recorded_title: booking.movie_title.clone(),
            recorded_total_price: booking.total_price,
            movie_title,
            movie_genre,
            total_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub movie_id: i64,
    pub showtime: String,
    pub seats: i64,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSearchFilters {
    pub genre: Option<String>,
    pub max_price: Option<i64>,
}

impl MovieSearchFilters {
    /// Applies the genre-substring and price-ceiling filters, preserving
    /// catalog order.
    pub fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        let genre = self
            .genre
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_lowercase);

        movies
            .into_iter()
            .filter(|m| match &genre {
                Some(g) => m.genre.to_lowercase().contains(g.as_str()),
                None => true,
            })
            // A zero ceiling means "no price filter", same as absent.
            .filter(|m| match self.max_price {
                Some(max) if max != 0 => m.price <= max,
                _ => true,
            })
            .collect()
    }
}
