//! Basic-Auth credential holder.

use std::fmt;
use std::sync::RwLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Stores the encoded `username:password` token sent with every request.
///
/// Rotation through [`Credentials::set_authorization`] is visible to every
/// call started afterwards. A call already in flight keeps the token it read.
#[derive(Default)]
pub struct Credentials {
    token: RwLock<Option<String>>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authorization(username: &str, password: &str) -> Self {
        let credentials = Self::new();
        credentials.set_authorization(username, password);
        credentials
    }

    /// Replaces the stored credentials.
    pub fn set_authorization(&self, username: &str, password: &str) {
        let token = STANDARD.encode(format!("{username}:{password}"));
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token);
    }

    /// Base64 token for the `Authorization: Basic` header. Empty when unset.
    pub fn authorization_token(&self) -> String {
        self.token().unwrap_or_default()
    }

    /// Current token, read under a single lock; `None` when unset.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_set(&self) -> bool {
        self.token.read().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &if self.is_set() { "<redacted>" } else { "<unset>" })
            .finish()
    }
}
