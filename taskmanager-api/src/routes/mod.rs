/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `user`: User CRUD endpoints
/// - `task`: Task CRUD endpoints

use axum::http::StatusCode;
use serde::Serialize;

pub mod health;
pub mod task;
pub mod user;

/// Confirmation payload returned by mutating endpoints
///
/// Mirrors the service's transaction-style responses:
/// `{"status_code": 201, "transaction": "Successful"}`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// HTTP status code of the operation
    pub status_code: u16,

    /// Human-readable outcome message
    pub transaction: String,
}

impl StatusResponse {
    pub fn new(status: StatusCode, transaction: &str) -> Self {
        Self {
            status_code: status.as_u16(),
            transaction: transaction.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_response_carries_numeric_code() {
        let payload = StatusResponse::new(StatusCode::CREATED, "Successful");
        assert_eq!(payload.status_code, 201);
        assert_eq!(payload.transaction, "Successful");
    }
}
