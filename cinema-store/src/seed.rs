use cinema_domain::models::Movie;

/// The catalog written on first run when the movies document is absent.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Avatar: The Way of Water".to_string(),
            genre: "Sci-Fi".to_string(),
            showtimes: vec!["10:00".into(), "14:00".into(), "18:00".into()],
            price: 400,
            duration: Some("192 min".to_string()),
        },
        Movie {
            id: 2,
            title: "Oppenheimer".to_string(),
            genre: "Drama".to_string(),
            showtimes: vec!["11:00".into(), "15:00".into(), "19:30".into()],
            price: 350,
            duration: Some("180 min".to_string()),
        },
        Movie {
            id: 3,
            title: "Barbie".to_string(),
            genre: "Comedy".to_string(),
            showtimes: vec!["12:00".into(), "16:00".into(), "20:00".into()],
            price: 300,
            duration: Some("114 min".to_string()),
        },
    ]
}
