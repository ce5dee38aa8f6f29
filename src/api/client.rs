use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::session::Session;

use super::endpoints::Endpoint;
use super::envelope;
use super::error::ApiError;

/// How a request uses the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Attach the bearer token when one is held.
    IfPresent,
    /// Refuse to dispatch without a token.
    Required,
    /// Never attach a token.
    Anonymous,
}

/// A request ready to be sent through [`ApiClient::send`].
pub(crate) struct ApiRequest {
    path: String,
    builder: RequestBuilder,
    authenticated: bool,
}

impl ApiRequest {
    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.builder = self.builder.json(body);
        self
    }
}

/// Authorized JSON client for the Motour REST API.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> Result<Self, ApiError> {
        let base = config.resolved_base_url();
        let base_url = Url::parse(&base).map_err(|e| ApiError::InvalidBaseUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base,
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `endpoint`, with path segments percent-encoded.
    pub fn url(&self, endpoint: Endpoint<'_>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(endpoint.segments());
        }
        url
    }

    /// Probe `GET /health`.
    pub async fn health(&self) -> Result<(), ApiError> {
        let request = self.request(Method::GET, Endpoint::Health, Auth::Anonymous)?;
        self.send_empty(request).await
    }

    /// JSON request with the session token attached according to `auth`.
    pub(crate) fn request(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        auth: Auth,
    ) -> Result<ApiRequest, ApiError> {
        let mut request = self.prepare(method, endpoint, auth)?;
        request.builder = request.builder.header(CONTENT_TYPE, "application/json");
        Ok(request)
    }

    /// Multipart upload; the content type carries the form boundary.
    pub(crate) fn upload(
        &self,
        endpoint: Endpoint<'_>,
        auth: Auth,
        form: Form,
    ) -> Result<ApiRequest, ApiError> {
        let mut request = self.prepare(Method::POST, endpoint, auth)?;
        request.builder = request.builder.multipart(form);
        Ok(request)
    }

    fn prepare(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        auth: Auth,
    ) -> Result<ApiRequest, ApiError> {
        let path = endpoint.path();
        let token = match auth {
            Auth::Anonymous => None,
            Auth::IfPresent => self.session.token(),
            Auth::Required => Some(self.session.token().ok_or(ApiError::NotAuthenticated)?),
        };

        debug!(%method, %path, authenticated = token.is_some(), "dispatching request");

        let mut builder = self.http.request(method, self.url(endpoint));
        if let Some(token) = &token {
            builder = builder.bearer_auth(token.expose());
        }

        Ok(ApiRequest {
            path,
            builder,
            authenticated: token.is_some(),
        })
    }

    /// Send and decode the envelope body into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let path = request.path.clone();
        let body = self.execute(request).await?;
        serde_json::from_value(body).map_err(|source| ApiError::Decode {
            endpoint: path,
            source,
        })
    }

    /// Send and only check the envelope.
    pub(crate) async fn send_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let ApiRequest {
            path,
            builder,
            authenticated,
        } = request;

        let response = builder
            .send()
            .await
            .map_err(|source| ApiError::Network { source })?;
        let status = response.status();
        debug!(%path, status = status.as_u16(), "response received");

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Network { source })?;
        let body = serde_json::from_slice::<Value>(&bytes).ok();

        // A 401 on an anonymous call (bad credentials) is an ordinary failure.
        if status == StatusCode::UNAUTHORIZED && authenticated {
            warn!(%path, "server rejected the session token");
            self.session.invalidate();
            return Err(ApiError::Unauthorized {
                message: body.as_ref().and_then(envelope::first_message),
            });
        }

        envelope::check(status, body)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("session", &self.session)
            .finish()
    }
}
