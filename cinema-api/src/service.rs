use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use cinema_domain::error::ServiceError;
use cinema_domain::models::{
    Booking, BookingStatus, CreateBookingRequest, EnrichedBooking, Movie, MovieSearchFilters,
};
use cinema_domain::report::{compute_report, CinemaReport};
use cinema_domain::repository::CollectionStore;
use cinema_domain::validation::validate_booking;

/// Orchestrates validation, enrichment, and persistence over the two
/// collection stores.
///
/// The substrate only supports load-all/save-all, so every mutation is a
/// read-modify-write of the whole bookings document. `write_guard` serializes
/// those cycles; without it two concurrent mutations could each load, mutate,
/// and overwrite, silently dropping one party's change.
pub struct BookingService {
    movies: Arc<dyn CollectionStore<Movie>>,
    bookings: Arc<dyn CollectionStore<Booking>>,
    write_guard: Mutex<()>,
}

impl BookingService {
    pub fn new(
        movies: Arc<dyn CollectionStore<Movie>>,
        bookings: Arc<dyn CollectionStore<Booking>>,
    ) -> Self {
        Self {
            movies,
            bookings,
            write_guard: Mutex::new(()),
        }
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, ServiceError> {
        Ok(self.movies.load_all().await?)
    }

    pub async fn search_movies(
        &self,
        filters: &MovieSearchFilters,
    ) -> Result<Vec<Movie>, ServiceError> {
        Ok(filters.apply(self.movies.load_all().await?))
    }

    /// Validates the request against the current catalog, then appends a
    /// confirmed booking and rewrites the bookings document. Nothing is
    /// persisted when validation fails; the error carries every violated
    /// rule, not just the first.
    pub async fn create_booking(
        &self,
        req: &CreateBookingRequest,
    ) -> Result<Booking, ServiceError> {
        let _write = self.write_guard.lock().await;

        let movies = self.movies.load_all().await?;
        let errors = validate_booking(req, &movies);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        // The validator already resolved the movie; this cannot fail here.
        let movie = movies
            .iter()
            .find(|m| m.id == req.movie_id)
            .ok_or(ServiceError::NotFound("movie"))?;

        let now = Utc::now();
        let booking = Booking {
            // Millisecond timestamp, unique by construction rather than
            // enforced. See DESIGN.md.
            id: now.timestamp_millis(),
            movie_id: movie.id,
            movie_title: movie.title.clone(),
            showtime: req.showtime.clone(),
            seats: req.seats,
            customer_name: req.customer_name.trim().to_string(),
            customer_email: req.customer_email.clone(),
            total_price: movie.price * req.seats,
            booking_date: now,
            status: BookingStatus::Confirmed,
        };

        let mut all = self.bookings.load_all().await?;
        all.push(booking.clone());
        self.bookings.save_all(&all).await?;

        tracing::info!(
            booking_id = booking.id,
            movie_id = movie.id,
            seats = booking.seats,
            total_price = booking.total_price,
            "booking confirmed"
        );
        Ok(booking)
    }

    /// Removes the booking outright and rewrites the shorter collection.
    /// Hard delete, not a status flip — see DESIGN.md.
    pub async fn cancel_booking(&self, id: i64) -> Result<Booking, ServiceError> {
        let _write = self.write_guard.lock().await;

        let mut all = self.bookings.load_all().await?;
        let index = all
            .iter()
            .position(|b| b.id == id)
            .ok_or(ServiceError::NotFound("booking"))?;
        let removed = all.remove(index);
        self.bookings.save_all(&all).await?;

        tracing::info!(booking_id = removed.id, "booking cancelled");
        Ok(removed)
    }

    pub async fn get_booking(&self, id: i64) -> Result<EnrichedBooking, ServiceError> {
        let bookings = self.bookings.load_all().await?;
        let booking = bookings
            .iter()
            .find(|b| b.id == id)
            .ok_or(ServiceError::NotFound("booking"))?;

        let movies = self.movies.load_all().await?;
        let movie = movies.iter().find(|m| m.id == booking.movie_id);
        Ok(EnrichedBooking::join(booking, movie))
    }

    pub async fn list_bookings(&self) -> Result<Vec<EnrichedBooking>, ServiceError> {
        let bookings = self.bookings.load_all().await?;
        let movies = self.movies.load_all().await?;
        Ok(bookings
            .iter()
            .map(|b| EnrichedBooking::join(b, movies.iter().find(|m| m.id == b.movie_id)))
            .collect())
    }

    pub async fn cinema_report(&self) -> Result<CinemaReport, ServiceError> {
        let movies = self.movies.load_all().await?;
        let bookings = self.bookings.load_all().await?;
        Ok(compute_report(&movies, &bookings, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinema_domain::models::{UNKNOWN_GENRE, UNKNOWN_MOVIE_TITLE};
    use cinema_store::seed::sample_movies;
    use cinema_store::MemoryStore;

    fn service() -> BookingService {
        BookingService::new(
            Arc::new(MemoryStore::new(sample_movies())),
            Arc::new(MemoryStore::new(Vec::new())),
        )
    }

    fn service_with(movies: Vec<Movie>, bookings: Vec<Booking>) -> BookingService {
        BookingService::new(
            Arc::new(MemoryStore::new(movies)),
            Arc::new(MemoryStore::new(bookings)),
        )
    }

    fn request() -> CreateBookingRequest {
        CreateBookingRequest {
            movie_id: 1,
            showtime: "10:00".to_string(),
            seats: 2,
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn create_records_derived_price_and_confirmed_status() {
        let svc = service();
        let booking = svc.create_booking(&request()).await.unwrap();
        assert_eq!(booking.total_price, 800);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.movie_title, "Avatar: The Way of Water");
        assert!(booking.id > 0);
    }

    #[tokio::test]
    async fn create_trims_the_customer_name_before_storing() {
        let svc = service();
        let mut req = request();
        req.customer_name = "  Ada Lovelace  ".to_string();
        let booking = svc.create_booking(&req).await.unwrap();
        assert_eq!(booking.customer_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn create_rejects_well_formed_showtime_the_movie_does_not_have() {
        let svc = service();
        let mut req = request();
        req.showtime = "09:00".to_string();
        match svc.create_booking(&req).await {
            Err(ServiceError::Validation(errors)) => {
                assert_eq!(errors, vec!["showtime 09:00 unavailable for this movie"]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn seat_boundaries_are_inclusive_and_nothing_persists_on_failure() {
        let svc = service();
        for seats in [1, 10] {
            let mut req = request();
            req.seats = seats;
            assert!(svc.create_booking(&req).await.is_ok(), "{seats} seats");
        }
        for seats in [0, 11] {
            let mut req = request();
            req.seats = seats;
            assert!(matches!(
                svc.create_booking(&req).await,
                Err(ServiceError::Validation(_))
            ));
        }
        assert_eq!(svc.list_bookings().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn cancel_removes_the_booking_from_subsequent_lists() {
        let svc = service();
        let booking = svc.create_booking(&request()).await.unwrap();
        let removed = svc.cancel_booking(booking.id).await.unwrap();
        assert_eq!(removed.id, booking.id);
        assert!(svc.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.cancel_booking(123).await,
            Err(ServiceError::NotFound("booking"))
        ));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.get_booking(123).await,
            Err(ServiceError::NotFound("booking"))
        ));
    }

    #[tokio::test]
    async fn list_is_idempotent_and_order_stable() {
        let svc = service();
        let mut req = request();
        svc.create_booking(&req).await.unwrap();
        req.movie_id = 2;
        req.showtime = "11:00".to_string();
        svc.create_booking(&req).await.unwrap();

        let first = svc.list_bookings().await.unwrap();
        let second = svc.list_bookings().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn enrichment_substitutes_placeholders_for_dropped_movies() {
        let svc = service();
        let booking = svc.create_booking(&request()).await.unwrap();

        // Rebuild the service over the same bookings but an empty catalog.
        let orphaned = service_with(Vec::new(), vec![booking.clone()]);
        let listed = orphaned.list_bookings().await.unwrap();
        assert_eq!(listed[0].movie_title, UNKNOWN_MOVIE_TITLE);
        assert_eq!(listed[0].movie_genre, UNKNOWN_GENRE);
        assert_eq!(listed[0].total_price, 0);
        // The recorded creation-time values survive.
        assert_eq!(listed[0].recorded_total_price, 800);

        let fetched = orphaned.get_booking(booking.id).await.unwrap();
        assert_eq!(fetched, listed[0].clone());
    }

    #[tokio::test]
    async fn enrichment_recomputes_against_the_current_catalog_price() {
        let svc = service();
        let booking = svc.create_booking(&request()).await.unwrap();
        assert_eq!(booking.total_price, 800);

        let mut repriced = sample_movies();
        repriced[0].price = 500;
        let svc = service_with(repriced, vec![booking.clone()]);
        let fetched = svc.get_booking(booking.id).await.unwrap();
        assert_eq!(fetched.total_price, 1000);
        assert_eq!(fetched.recorded_total_price, 800);
    }

    #[tokio::test]
    async fn report_reflects_bookings_and_catalog() {
        let svc = service();
        let mut req = request();
        req.seats = 5;
        svc.create_booking(&req).await.unwrap();

        let report = svc.cinema_report().await.unwrap();
        assert_eq!(report.total_movies, 3);
        assert_eq!(report.total_bookings, 1);
        assert_eq!(report.total_revenue, 2000);
        assert_eq!(report.total_seats, 5);
        assert_eq!(report.average_ticket_price, 400);
    }
}
