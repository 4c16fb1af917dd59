use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::fmt::Write as _;

use cinema_domain::report::CinemaReport;

use crate::error::AppError;
use crate::response;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/cinema/info", get(cinema_info))
}

/// The three interchangeable encodings of the report. Selection only affects
/// presentation; the numbers are computed once, upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Xml,
    Html,
}

impl ReportFormat {
    pub fn from_accept(accept: Option<&str>) -> Self {
        let accept = accept.unwrap_or("");
        if accept.contains("application/xml") {
            ReportFormat::Xml
        } else if accept.contains("text/html") {
            ReportFormat::Html
        } else {
            ReportFormat::Json
        }
    }
}

async fn cinema_info(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let report = state.service.cinema_report().await?;
    let format = ReportFormat::from_accept(
        headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok()),
    );

    Ok(match format {
        ReportFormat::Json => response::success(report).into_response(),
        ReportFormat::Xml => (
            [(header::CONTENT_TYPE, "application/xml")],
            render_xml(&report),
        )
            .into_response(),
        ReportFormat::Html => Html(render_html(&report)).into_response(),
    })
}

/// Minimal text-node escaping for the markup renderers. Genre names are the
/// only interpolated free text.
fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Hierarchical markup whose element names mirror the report's field names,
/// with one `<genre>` element per top genre.
pub fn render_xml(report: &CinemaReport) -> String {
    let mut genres = String::new();
    for entry in &report.popular_genres {
        let _ = write!(
            genres,
            "\n        <genre>\n            <name>{}</name>\n            <count>{}</count>\n        </genre>",
            escape_markup(&entry.genre),
            entry.count
        );
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<cinemaInfo>
    <totalMovies>{}</totalMovies>
    <totalBookings>{}</totalBookings>
    <totalRevenue>{}</totalRevenue>
    <totalSeats>{}</totalSeats>
    <averageTicketPrice>{}</averageTicketPrice>
    <popularGenres>{}
    </popularGenres>
    <lastUpdated>{}</lastUpdated>
</cinemaInfo>"#,
        report.total_movies,
        report.total_bookings,
        report.total_revenue,
        report.total_seats,
        report.average_ticket_price,
        genres,
        report.last_updated.to_rfc3339(),
    )
}

/// Human-readable document embedding the same figures, with the timestamp
/// rendered in a localized day-first format.
pub fn render_html(report: &CinemaReport) -> String {
    let genres: String = report
        .popular_genres
        .iter()
        .map(|entry| {
            format!(
                "<li>{} ({} movies)</li>",
                escape_markup(&entry.genre),
                entry.count
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Cinema info</title></head>
<body>
    <h1>Cinema info</h1>
    <div><strong>Total movies:</strong> {}</div>
    <div><strong>Total bookings:</strong> {}</div>
    <div><strong>Total revenue:</strong> {}</div>
    <div><strong>Total seats sold:</strong> {}</div>
    <div><strong>Average ticket price:</strong> {}</div>
    <div><strong>Popular genres:</strong><ul>{}</ul></div>
    <div><strong>Last updated:</strong> {}</div>
</body>
</html>"#,
        report.total_movies,
        report.total_bookings,
        report.total_revenue,
        report.total_seats,
        report.average_ticket_price,
        genres,
        report.last_updated.format("%d.%m.%Y, %H:%M"),
    )
}
