use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;

/// API base URL, fixed at build time. Deployments that do not serve the API
/// from the same origin set `DENTALIA_API_BASE` when building the bundle.
pub fn api_base() -> &'static str {
    option_env!("DENTALIA_API_BASE").unwrap_or("/api")
}

fn client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn send<T: DeserializeOwned>(
    builder: reqwest::RequestBuilder,
    path: &str,
) -> Result<T, AppError> {
    let builder = match super::auth::token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    };

    let response = builder.send().await.map_err(|err| {
        tracing::warn!(%err, path, "request failed");
        AppError::network("Could not reach the server. Check your connection.")
    })?;

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    if (200..300).contains(&status) {
        serde_json::from_str(&body).map_err(|err| {
            tracing::warn!(%err, path, "malformed response body");
            AppError::internal("The server returned an unexpected response.")
        })
    } else {
        let err = AppError::from_response_body(status, &body);
        tracing::warn!(path, status, kind = %err.kind, "request rejected");
        Err(err)
    }
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    send(client().get(url(path)), path).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, AppError> {
    send(client().post(url(path)).json(body), path).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, AppError> {
    send(client().put(url(path)).json(body), path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_defaults_to_relative_api() {
        assert_eq!(api_base(), "/api");
    }

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(url("/appointments"), "/api/appointments");
    }
}
