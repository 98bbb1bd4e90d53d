//! Trait for resolving the current viewer's identity.

use crate::model::Username;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while resolving the viewer identity.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The lookup itself failed.
    #[error("Identity lookup failed: {0}")]
    LookupFailed(String),

    /// The provider is not available.
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Resolves the identifier of the viewer whose reactions are being recorded.
///
/// The lookup is asynchronous and may fail or never resolve; the viewer then
/// attributes reactions to a placeholder identity, which keeps toggles
/// functionally valid but may mix up reactions between unauthenticated
/// viewers.
///
/// # Example
///
/// ```ignore
/// struct GithubIdentity {
///     client: GithubClient,
/// }
///
/// #[async_trait]
/// impl IdentityProvider for GithubIdentity {
///     async fn current_user(&self) -> Result<Username, IdentityError> {
///         let user = self
///             .client
///             .current_user()
///             .await
///             .map_err(|e| IdentityError::LookupFailed(e.to_string()))?;
///         Ok(user.login)
///     }
///
///     fn is_available(&self) -> bool {
///         true
///     }
/// }
/// ```
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the current viewer's identifier.
    async fn current_user(&self) -> Result<Username, IdentityError>;

    /// Check if the provider is available (e.g., has valid credentials).
    fn is_available(&self) -> bool;
}

/// A no-op provider for hosts without an identity source.
pub struct NoOpIdentityProvider;

#[async_trait]
impl IdentityProvider for NoOpIdentityProvider {
    async fn current_user(&self) -> Result<Username, IdentityError> {
        Err(IdentityError::Unavailable(
            "Identity lookup is disabled".to_string(),
        ))
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_identity_is_unavailable() {
        let provider = NoOpIdentityProvider;
        assert!(!provider.is_available());
        assert!(provider.current_user().await.is_err());
    }
}
