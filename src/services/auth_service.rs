//! Authentication service - remote sign-in and response classification.
//!
//! Builds the login request, performs exactly one transport POST per
//! call, and classifies the outcome into the closed
//! `AuthenticationError` set. Success payloads decode into the
//! `Investor` aggregate; session tokens ride on the response headers.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::config::{HEADER_ACCESS_TOKEN, HEADER_CLIENT, HEADER_UID};
use crate::domain::Investor;
use crate::errors::AuthenticationError;
use crate::infra::HttpClient;

/// Session tokens extracted from a successful response's headers.
///
/// Session-adjunct metadata: absent headers yield `None` fields, never
/// a failed login. Persistence is an external collaborator's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub client: Option<String>,
    pub uid: Option<String>,
}

impl AuthState {
    /// Extract session tokens from response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            access_token: header_value(headers, HEADER_ACCESS_TOKEN),
            client: header_value(headers, HEADER_CLIENT),
            uid: header_value(headers, HEADER_UID),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Authentication service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate with the remote endpoint.
    ///
    /// Resolves exactly once per call: either a decoded `Investor` or
    /// one classified `AuthenticationError`. Never retries.
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Investor, AuthenticationError>;
}

/// Concrete implementation of `AuthService` against an HTTP endpoint.
pub struct RemoteAuthService<C: HttpClient> {
    endpoint_url: String,
    client: Arc<C>,
}

impl<C: HttpClient> RemoteAuthService<C> {
    /// Create a new auth service for the given endpoint and transport.
    pub fn new(endpoint_url: impl Into<String>, client: Arc<C>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            client,
        }
    }
}

#[async_trait]
impl<C: HttpClient> AuthService for RemoteAuthService<C> {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Investor, AuthenticationError> {
        // Credential values go over the wire unmodified; hashing and
        // trimming are not this layer's business.
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .client
            .post(&self.endpoint_url, body)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "authentication transport failed");
                AuthenticationError::Connectivity
            })?;

        match response.status {
            200 => {
                let investor = Investor::decode(&response.body).map_err(|e| {
                    tracing::warn!(error = %e, "authentication payload failed to decode");
                    AuthenticationError::InvalidData
                })?;

                // Session continuation is an external collaborator's
                // concern; the extracted state is only surfaced in logs.
                let state = AuthState::from_headers(&response.headers);
                tracing::debug!(uid = ?state.uid, "session tokens extracted");
                tracing::info!(investor_id = investor.id, "authentication succeeded");

                Ok(investor)
            }
            401 => Err(AuthenticationError::Unauthorized),
            400 => Err(AuthenticationError::BadRequest),
            403 => Err(AuthenticationError::Forbidden),
            status => {
                tracing::warn!(status, "unhandled authentication status");
                Err(AuthenticationError::Generic)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{HttpResponse, MockHttpClient};

    const ENDPOINT: &str = "https://test-authentication.com";
    const EMAIL: &str = "email@email.com";
    const PASSWORD: &str = "123123";

    fn make_sut(client: MockHttpClient) -> RemoteAuthService<MockHttpClient> {
        RemoteAuthService::new(ENDPOINT, Arc::new(client))
    }

    fn valid_json_body() -> Vec<u8> {
        serde_json::json!({
            "id": 1,
            "investorName": "Test Apple",
            "email": "testeapple@ioasys.com.br",
            "city": "BH",
            "country": "Brasil",
            "balance": 350_000.0,
            "photo": "/uploads/investor/photo/1/cropped4991818370070749122.jpg",
            "portfolio": {"enterprisesNumber": 0, "enterprises": []},
            "portfolioValue": 350_000.0,
            "firstAccess": false,
            "superAngel": false
        })
        .to_string()
        .into_bytes()
    }

    fn success_headers() -> HeaderMap {
        // Session tokens amid the unrelated headers a real response carries.
        let mut headers = HeaderMap::new();
        headers.insert("x-content-type-options", "nosniff".parse().unwrap());
        headers.insert("access-token", "fqnQtzqRNfDlDdo05IWfpQ".parse().unwrap());
        headers.insert("client", "9RMMRW0AGQlY2LSlMom5IQ".parse().unwrap());
        headers.insert("uid", "testeapple@ioasys.com.br".parse().unwrap());
        headers.insert("token-type", "Bearer".parse().unwrap());
        headers.insert("expiry", "1581782592".parse().unwrap());
        headers
    }

    #[tokio::test]
    async fn test_authenticate_posts_once_to_endpoint_url() {
        let mut client = MockHttpClient::new();
        client
            .expect_post()
            .withf(|url, body| {
                url == ENDPOINT
                    && *body == serde_json::json!({"email": EMAIL, "password": PASSWORD})
            })
            .times(1)
            .returning(|_, _| Ok(HttpResponse::with_status(401)));

        let sut = make_sut(client);
        let _ = sut.authenticate(EMAIL, PASSWORD).await;
    }

    #[tokio::test]
    async fn test_authenticate_delivers_connectivity_on_transport_error() {
        let mut client = MockHttpClient::new();
        client
            .expect_post()
            .times(1)
            .returning(|_, _| Err(crate::errors::TransportError::failed("no route to host")));

        let sut = make_sut(client);
        let result = sut.authenticate(EMAIL, PASSWORD).await;

        assert_eq!(result, Err(AuthenticationError::Connectivity));
    }

    #[tokio::test]
    async fn test_authenticate_classifies_http_statuses() {
        let cases = [
            (401, AuthenticationError::Unauthorized),
            (400, AuthenticationError::BadRequest),
            (403, AuthenticationError::Forbidden),
            (500, AuthenticationError::Generic),
            (299, AuthenticationError::Generic),
        ];

        for (status, expected) in cases {
            let mut client = MockHttpClient::new();
            client
                .expect_post()
                .times(1)
                .returning(move |_, _| Ok(HttpResponse::with_status(status)));

            let sut = make_sut(client);
            let result = sut.authenticate(EMAIL, PASSWORD).await;

            assert_eq!(result, Err(expected), "status {status}");
        }
    }

    #[tokio::test]
    async fn test_authenticate_delivers_invalid_data_on_malformed_200_body() {
        let mut client = MockHttpClient::new();
        client.expect_post().times(1).returning(|_, _| {
            Ok(HttpResponse {
                status: 200,
                headers: HeaderMap::new(),
                body: b"Invalid json".to_vec(),
            })
        });

        let sut = make_sut(client);
        let result = sut.authenticate(EMAIL, PASSWORD).await;

        assert_eq!(result, Err(AuthenticationError::InvalidData));
    }

    #[tokio::test]
    async fn test_authenticate_delivers_investor_on_valid_200_body() {
        let mut client = MockHttpClient::new();
        client.expect_post().times(1).returning(|_, _| {
            Ok(HttpResponse {
                status: 200,
                headers: success_headers(),
                body: valid_json_body(),
            })
        });

        let sut = make_sut(client);
        let investor = sut.authenticate(EMAIL, PASSWORD).await.unwrap();

        assert_eq!(investor.id, 1);
        assert_eq!(investor.investor_name, "Test Apple");
        assert_eq!(investor.email, "testeapple@ioasys.com.br");
        assert_eq!(investor.balance, 350_000.0);
        assert_eq!(investor.portfolio_value, 350_000.0);
        assert_eq!(investor.portfolio.enterprises_number, 0);
        assert!(investor.portfolio.enterprises.is_empty());
        assert!(!investor.first_access);
        assert!(!investor.super_angel);
    }

    #[tokio::test]
    async fn test_authenticate_is_independent_across_calls() {
        // No cross-call memoization: two identical calls, two posts,
        // two identically-classified results.
        let mut client = MockHttpClient::new();
        client
            .expect_post()
            .times(2)
            .returning(|_, _| Ok(HttpResponse::with_status(401)));

        let sut = make_sut(client);
        let first = sut.authenticate(EMAIL, PASSWORD).await;
        let second = sut.authenticate(EMAIL, PASSWORD).await;

        assert_eq!(first, Err(AuthenticationError::Unauthorized));
        assert_eq!(second, Err(AuthenticationError::Unauthorized));
    }

    #[test]
    fn test_auth_state_extracts_session_tokens() {
        let state = AuthState::from_headers(&success_headers());

        assert_eq!(state.access_token.as_deref(), Some("fqnQtzqRNfDlDdo05IWfpQ"));
        assert_eq!(state.client.as_deref(), Some("9RMMRW0AGQlY2LSlMom5IQ"));
        assert_eq!(state.uid.as_deref(), Some("testeapple@ioasys.com.br"));
    }

    #[test]
    fn test_auth_state_missing_headers_are_none() {
        let state = AuthState::from_headers(&HeaderMap::new());

        assert_eq!(state, AuthState::default());
    }
}
