//! Authorizers attach credentials to outgoing requests.
//!
//! Token acquisition lives outside this crate; an authorizer only turns a
//! credential it already holds into an `Authorization` header value.

use std::fmt;

use async_trait::async_trait;

use crate::ClientError;

/// Produces the `Authorization` header for a request.
#[async_trait]
pub trait Authorizer: Send + Sync + fmt::Debug {
    async fn authorization(&self) -> Result<String, ClientError>;
}

/// A pre-acquired bearer token.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Authorizer for BearerToken {
    async fn authorization(&self) -> Result<String, ClientError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(ClientError::Authorization("bearer token is empty".to_string()));
        }
        Ok(format!("Bearer {token}"))
    }
}
