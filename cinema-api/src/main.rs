use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_api::{app, service::BookingService, AppState};
use cinema_domain::models::{Booking, Movie};
use cinema_store::{seed::sample_movies, Config, JsonFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("starting cinema API on port {}", config.server.port);

    let movies = JsonFileStore::<Movie>::new(&config.storage.movies_file);
    movies.seed_if_absent(&sample_movies()).await?;

    let bookings = JsonFileStore::<Booking>::missing_as_empty(&config.storage.bookings_file);
    bookings.seed_if_absent(&[]).await?;

    let service = Arc::new(BookingService::new(Arc::new(movies), Arc::new(bookings)));
    let app = app(
        AppState { service },
        Duration::from_secs(config.server.request_timeout_seconds),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
