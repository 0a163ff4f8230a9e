use contracts::system::session::{LoginRequest, RegisterRequest, SessionInfo};

use crate::shared::api_utils::api_url;
use crate::shared::http::{self, FetchError, Method};

/// Ask the backend whether the session cookie is still valid. A 4xx
/// answer simply means no session.
pub async fn probe() -> Result<SessionInfo, FetchError> {
    http::get_json(&api_url("/api/session"), None).await
}

pub async fn login(email: String, password: String) -> Result<SessionInfo, FetchError> {
    let request = LoginRequest { email, password };
    http::request_json(Method::Post, &api_url("/api/session"), &request).await
}

/// Create a member account and sign it in, in one round trip.
pub async fn register(
    name: String,
    email: String,
    password: String,
) -> Result<SessionInfo, FetchError> {
    let request = RegisterRequest {
        name,
        email,
        password,
    };
    http::request_json(Method::Post, &api_url("/api/register"), &request).await
}

pub async fn logout() -> Result<(), FetchError> {
    http::send(Method::Delete, &api_url("/api/session")).await
}
