use std::sync::RwLock;

use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, LoginRequest, LoginResponse};

use super::http;

/// In-memory mirror of the persisted session token. The cookie is the
/// durable copy; this mirror gives the request layer a synchronous read.
static TOKEN: RwLock<Option<String>> = RwLock::new(None);

const TOKEN_COOKIE: &str = "session_token";

/// Synchronous token presence check.
pub fn token() -> Option<String> {
    TOKEN.read().map(|guard| guard.clone()).unwrap_or(None)
}

pub fn is_authenticated() -> bool {
    token().is_some()
}

/// Store a freshly issued token in memory and in the session cookie.
pub fn store_token(token: &str) {
    if let Ok(mut guard) = TOKEN.write() {
        *guard = Some(token.to_string());
    }
    document::eval(&format!(
        r#"document.cookie = '{TOKEN_COOKIE}={token};path=/;max-age=86400;SameSite=Lax';"#
    ));
}

/// Drop the token from memory and expire the cookie.
pub fn clear_token() {
    if let Ok(mut guard) = TOKEN.write() {
        *guard = None;
    }
    document::eval(&format!(
        r#"document.cookie = '{TOKEN_COOKIE}=;path=/;max-age=0;SameSite=Lax';"#
    ));
}

/// Read the persisted token into the in-memory mirror. Called once while the
/// session bootstraps; returns the token when one was persisted.
pub async fn restore_token() -> Option<String> {
    let mut channel = document::eval(&format!(
        r#"
        var match = document.cookie.match(/(?:^|;\s*){TOKEN_COOKIE}=([^;]*)/);
        dioxus.send(match ? match[1] : "");
        "#
    ));
    match channel.recv::<String>().await {
        Ok(token) if !token.is_empty() => {
            if let Ok(mut guard) = TOKEN.write() {
                *guard = Some(token.clone());
            }
            Some(token)
        }
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(?err, "could not read persisted session token");
            None
        }
    }
}

/// Single login request. Success stores the token; failure is a value the
/// login form renders inline. Never retried here.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let response: LoginResponse = http::post("/auth/login", request).await?;
    store_token(&response.token);
    tracing::info!(role = %response.user.role, "signed in");
    Ok(response)
}

/// Fetch the profile for the persisted token.
pub async fn fetch_profile() -> Result<AuthUser, AppError> {
    http::get("/auth/profile").await
}

/// Synchronous logout: the token is discarded locally; the stateless backend
/// needs no call.
pub fn logout() {
    tracing::info!("signed out");
    clear_token();
}
