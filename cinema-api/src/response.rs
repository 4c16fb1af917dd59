use axum::Json;
use serde::Serialize;

/// The success envelope shared by every JSON endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn success<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data: Some(data),
        count: None,
        message: None,
    })
}

/// Success envelope for collection endpoints; `count` mirrors `data.len()`.
pub fn success_list<T: Serialize>(items: Vec<T>) -> Json<ApiResponse<Vec<T>>> {
    let count = items.len();
    Json(ApiResponse {
        success: true,
        data: Some(items),
        count: Some(count),
        message: None,
    })
}

pub fn success_message<T: Serialize>(data: T, message: &str) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data: Some(data),
        count: None,
        message: Some(message.to_string()),
    })
}
