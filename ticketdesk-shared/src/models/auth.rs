use serde::{Deserialize, Serialize};

/// Credentials posted to `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login reply: the bearer token to persist and the caller's role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}
