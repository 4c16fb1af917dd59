pub mod error;
pub mod models;
pub mod report;
pub mod repository;
pub mod validation;

pub use error::{ServiceError, StoreError};
pub use models::{
    Booking, BookingStatus, CreateBookingRequest, EnrichedBooking, Movie, MovieSearchFilters,
};
pub use repository::CollectionStore;
