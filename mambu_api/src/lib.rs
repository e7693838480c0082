//! Basic-Auth request executor for the Mambu banking REST API.
//!
//! Service layers supply a URL, a [`ParamsMap`] and an [`HttpMethod`]; the
//! executor signs the call, sends it, and hands back either the raw body or an
//! [`Error`] that keeps the server's status and body.

pub mod blocking;
mod config;
mod credentials;
mod encoding;
mod errors;
mod executor;
mod method;
mod params;
pub use self::config::{ExecutorConfig, APPLICATION_KEY_PARAM};
pub use self::credentials::Credentials;
pub use self::encoding::{form_body, form_pairs, url_with_params};
pub use self::errors::{ApiCallResult, Error, TransportError};
pub use self::executor::{classify, PreparedRequest, RequestExecutor};
pub use self::method::HttpMethod;
pub use self::params::ParamsMap;
