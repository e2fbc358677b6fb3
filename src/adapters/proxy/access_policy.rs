//! Authorization policies applied by access proxies before any lookup.

use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// How a proxy gates access to its subject.
#[derive(Clone, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Every request is allowed; supplied tokens are ignored.
    Open,
    /// Requests must present exactly this token.
    Token(String),
}

impl AccessPolicy {
    pub const fn requires_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Check a supplied token against the policy.
    pub fn authorize(&self, proxy: &str, supplied: &str) -> DomainResult<()> {
        match self {
            Self::Open => Ok(()),
            Self::Token(expected) if expected == supplied => Ok(()),
            Self::Token(_) => Err(DomainError::Unauthorized {
                proxy: proxy.to_string(),
            }),
        }
    }
}

// Tokens never end up in logs.
impl fmt::Debug for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("Open"),
            Self::Token(_) => f.write_str("Token(<redacted>)"),
        }
    }
}
