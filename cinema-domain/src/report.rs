use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Booking, Movie};

/// Summary statistics over the full catalog and booking collections.
///
/// Revenue is computed against *current* catalog prices, so it can drift from
/// the sum of the recorded `totalPrice` fields if the catalog changed after
/// bookings were made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CinemaReport {
    pub total_movies: u64,
    pub total_bookings: u64,
    pub total_revenue: i64,
    pub total_seats: i64,
    pub average_ticket_price: i64,
    pub popular_genres: Vec<GenreCount>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub count: u64,
}

pub fn compute_report(movies: &[Movie], bookings: &[Booking], now: DateTime<Utc>) -> CinemaReport {
    let total_revenue: i64 = bookings
        .iter()
        .map(|b| {
            movies
                .iter()
                .find(|m| m.id == b.movie_id)
                .map_or(0, |m| m.price * b.seats)
        })
        .sum();

    // Seats count every booking, even ones whose movie no longer resolves.
    let total_seats: i64 = bookings.iter().map(|b| b.seats).sum();

    let average_ticket_price = if total_seats > 0 {
        (total_revenue as f64 / total_seats as f64).round() as i64
    } else {
        0
    };

    CinemaReport {
        total_movies: movies.len() as u64,
        total_bookings: bookings.len() as u64,
        total_revenue,
        total_seats,
        average_ticket_price,
        popular_genres: popular_genres(movies),
        last_updated: now,
    }
}

/// Top three genres by movie count. The count pass preserves first-encounter
/// order and the sort is stable, so ties rank in catalog order.
fn popular_genres(movies: &[Movie]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    for movie in movies {
        match counts.iter_mut().find(|g| g.genre == movie.genre) {
            Some(entry) => entry.count += 1,
            None => counts.push(GenreCount {
                genre: movie.genre.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(3);
    counts
}
