use std::sync::Arc;

use crate::service::BookingService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BookingService>,
}
