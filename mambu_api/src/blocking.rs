//! Blocking flavour of the executor, for callers without an async runtime.
//!
//! Each call runs on the calling thread until the response body is fully read
//! or the transport fails. Do not call these methods from inside an async
//! runtime; `reqwest::blocking` panics there.

use crate::{
    config::ExecutorConfig,
    errors::ApiCallResult,
    executor::{
        self, classify, client_build_failure, log_dispatch, log_transport_failure, read_failure,
        send_failure,
    },
    method::HttpMethod,
    params::ParamsMap,
};

/// Blocking counterpart of [`crate::RequestExecutor`] with the same call contract.
#[derive(Debug, Default)]
pub struct RequestExecutor {
    inner: executor::RequestExecutor,
}

impl RequestExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            inner: executor::RequestExecutor::new(config),
        }
    }

    pub fn set_authorization(&self, username: &str, password: &str) {
        self.inner.set_authorization(username, password);
    }

    pub fn authorization_token(&self) -> String {
        self.inner.authorization_token()
    }

    pub fn execute_request(&self, url: &str, params: &ParamsMap, method: HttpMethod) -> ApiCallResult {
        let request = self
            .inner
            .prepare(url, params, method)
            .map_err(log_transport_failure)?;

        // The blocking builder defaults to a 30s timeout; `None` clears it.
        let client = reqwest::blocking::Client::builder()
            .timeout(self.inner.config().timeout)
            .build()
            .map_err(client_build_failure)?;

        log_dispatch(&request);
        let headers = request.headers(self.inner.authorization_header());
        let mut call = client
            .request(request.method.as_reqwest(), request.url)
            .headers(headers);
        if let Some(body) = request.form_body {
            call = call.body(body);
        }

        let resp = call.send().map_err(send_failure)?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(read_failure)?;

        classify(request.method, status, body)
    }

    pub fn execute(&self, url: &str, method: HttpMethod) -> ApiCallResult {
        self.execute_request(url, &ParamsMap::new(), method)
    }
}
