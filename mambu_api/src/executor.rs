//! Request executor: authenticated GET/POST calls returning the raw body.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::{
    config::{ExecutorConfig, APPLICATION_KEY_PARAM},
    credentials::Credentials,
    encoding::{form_body, url_with_params},
    errors::{ApiCallResult, Error},
    method::HttpMethod,
    params::ParamsMap,
};

pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// A request ready to be sent: final URL and, for POST, the encoded form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub form_body: Option<String>,
}

impl PreparedRequest {
    /// Headers to send: the form content type when a body is attached, then `auth`.
    pub fn headers(&self, auth: Option<HeaderValue>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.form_body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        }
        if let Some(auth) = auth {
            headers.insert(AUTHORIZATION, auth);
        }
        headers
    }
}

/// Executes authenticated calls against the API.
///
/// One executor is meant to be shared by every caller. Each call builds its
/// own `reqwest::Client`, makes exactly one attempt, and reads the whole body
/// before classifying the status. Nothing is retried.
#[derive(Debug)]
pub struct RequestExecutor {
    config: ExecutorConfig,
    credentials: Credentials,
}

impl Default for RequestExecutor {
    fn default() -> Self {
        Self::new(ExecutorConfig::default())
    }
}

impl RequestExecutor {
    /// Creates an executor. Credentials in `config` are applied right away.
    pub fn new(config: ExecutorConfig) -> Self {
        let credentials = match (&config.username, &config.password) {
            (Some(username), Some(password)) => Credentials::with_authorization(username, password),
            _ => Credentials::new(),
        };
        Self { config, credentials }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Stores new credentials for every call started from now on.
    pub fn set_authorization(&self, username: &str, password: &str) {
        self.credentials.set_authorization(username, password);
    }

    pub fn authorization_token(&self) -> String {
        self.credentials.authorization_token()
    }

    /// Builds the final URL and body without touching the network.
    ///
    /// The configured application key is appended under `appkey` unless the
    /// caller already supplied that key. A malformed `url` fails here.
    pub fn prepare(
        &self,
        url: &str,
        params: &ParamsMap,
        method: HttpMethod,
    ) -> Result<PreparedRequest, Error> {
        let mut params = params.clone();
        if let Some(application_key) = &self.config.application_key {
            if params.insert_if_absent(APPLICATION_KEY_PARAM, application_key.as_str()) {
                tracing::debug!("Added application key to request parameters");
            }
        }

        let request = match method {
            HttpMethod::Get => PreparedRequest {
                method,
                url: url_with_params(url, &params)?,
                form_body: None,
            },
            HttpMethod::Post => PreparedRequest {
                method,
                url: Url::parse(url)?,
                form_body: (!params.is_empty()).then(|| form_body(&params)),
            },
        };
        Ok(request)
    }

    /// Executes `method` against `url` with `params`, returning the body on success.
    pub async fn execute_request(
        &self,
        url: &str,
        params: &ParamsMap,
        method: HttpMethod,
    ) -> ApiCallResult {
        let request = self.prepare(url, params, method).map_err(log_transport_failure)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(client_build_failure)?;

        log_dispatch(&request);
        let headers = request.headers(self.authorization_header());
        let mut call = client
            .request(request.method.as_reqwest(), request.url)
            .headers(headers);
        if let Some(body) = request.form_body {
            call = call.body(body);
        }

        let resp = call.send().await.map_err(send_failure)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(read_failure)?;

        classify(request.method, status, body)
    }

    /// [`execute_request`](Self::execute_request) with no parameters.
    pub async fn execute(&self, url: &str, method: HttpMethod) -> ApiCallResult {
        self.execute_request(url, &ParamsMap::new(), method).await
    }

    /// `Basic <token>` header value, or `None` when no credentials were set.
    pub(crate) fn authorization_header(&self) -> Option<HeaderValue> {
        let Some(token) = self.credentials.token() else {
            tracing::warn!("No credentials set, sending unauthenticated request");
            return None;
        };
        let mut value = HeaderValue::try_from(format!("Basic {token}")).ok()?;
        value.set_sensitive(true);
        Some(value)
    }
}

/// Maps a status and body to the call outcome for `method`.
///
/// The body is kept verbatim either way; on failure it travels inside
/// [`Error::HttpStatus`].
pub fn classify(method: HttpMethod, status: u16, body: String) -> ApiCallResult {
    if method.is_success(status) {
        tracing::debug!("Status={} Response={}", status, truncate_body(&body));
        Ok(body)
    } else {
        tracing::warn!(
            "{} request failed with status {}: {}",
            method,
            status,
            truncate_body(&body)
        );
        Err(Error::HttpStatus { status, body })
    }
}

pub(crate) fn log_transport_failure(err: Error) -> Error {
    tracing::error!("{}", err);
    err
}

pub(crate) fn client_build_failure(err: reqwest::Error) -> Error {
    tracing::error!("Failed to build HTTP client: {}", err);
    Error::from(err)
}

pub(crate) fn send_failure(err: reqwest::Error) -> Error {
    tracing::error!("Failed to send request: {}", err);
    Error::from(err)
}

pub(crate) fn read_failure(err: reqwest::Error) -> Error {
    tracing::error!("Failed to read response body: {}", err);
    Error::from(err)
}

pub(crate) fn log_dispatch(request: &PreparedRequest) {
    tracing::debug!(
        "{} {}{}",
        request.method,
        request.url.host_str().unwrap_or_default(),
        request.url.path()
    );
}

/// Shortens a body for log output only.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
